//! Notice lifecycle model
//!
//! The generate-and-append flow surfaces its progress as notices: a
//! persistent "generating" notice while the remote call runs, then a
//! transient success or error once it resolves. Rendering belongs to the
//! embedder; this module owns the lifecycle, so expiry and replacement
//! rules can be tested without a screen.
//!
//! Transient notices expire on their own after a bounded time. A loading
//! notice never expires: an operation still in flight must stay visible
//! until completion or failure resolves it.

use std::time::Duration;

/// Default time a transient notice stays up.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_millis(3000);

/// What a notice reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
    Loading,
}

/// One notice. Transient kinds carry a display duration; Loading has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    duration: Option<Duration>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice::transient(NoticeKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice::transient(NoticeKind::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Notice::transient(NoticeKind::Info, message)
    }

    pub fn loading(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Loading,
            message: message.into(),
            duration: None,
        }
    }

    /// Override how long a transient notice stays up. A loading notice
    /// keeps its unbounded lifetime.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        if self.kind != NoticeKind::Loading {
            self.duration = Some(duration);
        }
        self
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn transient(kind: NoticeKind, message: impl Into<String>) -> Self {
        Notice {
            kind,
            message: message.into(),
            duration: Some(DEFAULT_NOTICE_DURATION),
        }
    }
}

/// Handle to a posted notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NoticeId(u64);

struct ActiveNotice {
    id: NoticeId,
    notice: Notice,
    remaining: Option<Duration>,
}

/// Active notices with expiry bookkeeping.
///
/// The embedder posts notices, forwards wall-clock time through
/// [`NoticeBoard::elapsed`], and removes whatever ids come back expired.
pub struct NoticeBoard {
    notices: Vec<ActiveNotice>,
    next_id: u64,
}

impl NoticeBoard {
    pub fn new() -> Self {
        NoticeBoard {
            notices: Vec::new(),
            next_id: 0,
        }
    }

    pub fn post(&mut self, notice: Notice) -> NoticeId {
        let id = NoticeId(self.next_id);
        self.next_id += 1;
        let remaining = notice.duration();
        self.notices.push(ActiveNotice {
            id,
            notice,
            remaining,
        });
        id
    }

    /// Replace a notice, typically a loading one, with its outcome. The
    /// outcome is posted even when `id` is already gone: the result of the
    /// operation must surface regardless of what happened to the notice
    /// announcing it.
    pub fn resolve(&mut self, id: NoticeId, outcome: Notice) -> NoticeId {
        self.dismiss(id);
        self.post(outcome)
    }

    /// Remove a notice. Returns whether it was still active.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        let before = self.notices.len();
        self.notices.retain(|active| active.id != id);
        self.notices.len() != before
    }

    /// Advance time. Expired transient notices are removed and their ids
    /// returned in posting order; loading notices are untouched.
    pub fn elapsed(&mut self, elapsed: Duration) -> Vec<NoticeId> {
        let mut expired = Vec::new();
        self.notices.retain_mut(|active| {
            let Some(remaining) = active.remaining else {
                return true;
            };
            match remaining.checked_sub(elapsed) {
                Some(left) if left > Duration::ZERO => {
                    active.remaining = Some(left);
                    true
                }
                _ => {
                    expired.push(active.id);
                    false
                }
            }
        });
        expired
    }

    pub fn get(&self, id: NoticeId) -> Option<&Notice> {
        self.notices
            .iter()
            .find(|active| active.id == id)
            .map(|active| &active.notice)
    }

    /// Active notices in posting order.
    pub fn active(&self) -> Vec<(NoticeId, &Notice)> {
        self.notices
            .iter()
            .map(|active| (active.id, &active.notice))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_transient_notice_expires() {
        let mut board = NoticeBoard::new();
        let id = board.post(Notice::info("コピーしました"));

        assert_eq!(board.elapsed(ms(2999)), vec![]);
        assert_eq!(board.get(id).map(|n| n.kind), Some(NoticeKind::Info));
        assert_eq!(board.elapsed(ms(1)), vec![id]);
        assert!(board.is_empty());
    }

    #[test]
    fn test_loading_notice_never_expires() {
        let mut board = NoticeBoard::new();
        let id = board.post(Notice::loading("画像を生成中..."));

        assert_eq!(board.elapsed(ms(60_000)), vec![]);
        assert_eq!(board.get(id).map(|n| n.kind), Some(NoticeKind::Loading));
    }

    #[test]
    fn test_resolve_replaces_loading_with_outcome() {
        let mut board = NoticeBoard::new();
        let loading = board.post(Notice::loading("画像を生成中..."));

        let done = board.resolve(loading, Notice::success("画像を生成しました！"));
        assert_eq!(board.get(loading), None);
        assert_eq!(board.get(done).map(|n| n.kind), Some(NoticeKind::Success));

        // The outcome expires like any transient notice
        assert_eq!(board.elapsed(ms(3000)), vec![done]);
        assert!(board.is_empty());
    }

    #[test]
    fn test_resolve_after_dismiss_still_posts_outcome() {
        let mut board = NoticeBoard::new();
        let loading = board.post(Notice::loading("画像を生成中..."));
        assert!(board.dismiss(loading));

        let outcome = board.resolve(loading, Notice::error("エラー: timeout"));
        assert_eq!(board.get(outcome).map(|n| n.kind), Some(NoticeKind::Error));
    }

    #[test]
    fn test_dismiss_reports_whether_active() {
        let mut board = NoticeBoard::new();
        let id = board.post(Notice::info("hello"));

        assert!(board.dismiss(id));
        assert!(!board.dismiss(id));
    }

    #[test]
    fn test_custom_duration_respected() {
        let mut board = NoticeBoard::new();
        let id = board
            .post(Notice::error("クリップボードにテキストがありません。").with_duration(ms(5000)));

        assert_eq!(board.elapsed(ms(4999)), vec![]);
        assert_eq!(board.elapsed(ms(1)), vec![id]);
    }

    #[test]
    fn test_loading_duration_override_ignored() {
        let notice = Notice::loading("still going").with_duration(ms(10));
        assert_eq!(notice.duration(), None);

        let mut board = NoticeBoard::new();
        board.post(notice);
        assert_eq!(board.elapsed(ms(10)), vec![]);
        assert!(!board.is_empty());
    }

    #[test]
    fn test_elapsed_reports_every_expired_notice() {
        let mut board = NoticeBoard::new();
        let first = board.post(Notice::info("a").with_duration(ms(100)));
        let second = board.post(Notice::info("b").with_duration(ms(200)));
        let third = board.post(Notice::loading("c"));

        assert_eq!(board.elapsed(ms(250)), vec![first, second]);
        assert_eq!(board.active().len(), 1);
        assert_eq!(board.active()[0].0, third);
    }

    #[test]
    fn test_partial_elapse_accumulates() {
        let mut board = NoticeBoard::new();
        let id = board.post(Notice::info("a").with_duration(ms(100)));

        assert_eq!(board.elapsed(ms(60)), vec![]);
        assert_eq!(board.elapsed(ms(60)), vec![id]);
    }

    #[test]
    fn test_ids_stay_unique_across_dismissals() {
        let mut board = NoticeBoard::new();
        let first = board.post(Notice::info("a"));
        board.dismiss(first);
        let second = board.post(Notice::info("b"));

        assert_ne!(first, second);
    }
}
