//! Caret-insertion sequencing
//!
//! Inserting a generated image back into the editor is a fragile dance:
//! focus the editable target, wait for the caret to land at the block end,
//! dispatch a paste, and hope the editor accepts it. The embedder owns the
//! actual DOM work; this module owns the sequencing as a pure state
//! machine, so the order, the bounded waits, and the failure surface can
//! be tested without an editor.
//!
//! Waits are signal-gated with a timeout fallback. Focus and caret-settle
//! timeouts advance the sequence (those waits only ever covered editor
//! settling time), while an unacknowledged paste fails it: reporting
//! success for a paste nobody confirmed would lose the image silently.

use std::time::Duration;

/// Bounded waits for the three waiting states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertTimeouts {
    pub focus: Duration,
    pub caret_settle: Duration,
    pub paste: Duration,
}

impl Default for InsertTimeouts {
    fn default() -> Self {
        InsertTimeouts {
            focus: Duration::from_millis(100),
            caret_settle: Duration::from_millis(100),
            paste: Duration::from_millis(300),
        }
    }
}

/// Why a sequence failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertFailure {
    /// No editable target exists to insert into
    NoTarget,
    /// The editor refused the paste
    PasteRejected,
    /// The paste was never acknowledged within the bounded wait
    PasteTimedOut,
}

/// Sequencer states. `Done` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertState {
    Idle,
    AwaitingFocus,
    AwaitingCaretSettle,
    Pasting,
    Done,
    Failed(InsertFailure),
}

/// Observations the embedder feeds in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertSignal {
    TargetFocused,
    CaretSettled,
    PasteAccepted,
    PasteRejected,
    /// Time passed with no other signal; accumulates against the current
    /// state's timeout
    Elapsed(Duration),
}

/// Work the embedder must perform next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertAction {
    FocusTarget,
    PlaceCaretAtBlockEnd,
    DispatchPaste,
    ReportSuccess,
    RequestManualPaste,
}

/// The paste sequencing state machine.
pub struct PasteSequencer {
    state: InsertState,
    timeouts: InsertTimeouts,
    waited: Duration,
}

impl PasteSequencer {
    pub fn new(timeouts: InsertTimeouts) -> Self {
        PasteSequencer {
            state: InsertState::Idle,
            timeouts,
            waited: Duration::ZERO,
        }
    }

    pub fn state(&self) -> InsertState {
        self.state
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.state, InsertState::Done | InsertState::Failed(_))
    }

    /// Time remaining before the current waiting state times out.
    pub fn pending_timeout(&self) -> Option<Duration> {
        let limit = match self.state {
            InsertState::AwaitingFocus => self.timeouts.focus,
            InsertState::AwaitingCaretSettle => self.timeouts.caret_settle,
            InsertState::Pasting => self.timeouts.paste,
            _ => return None,
        };
        Some(limit.saturating_sub(self.waited))
    }

    /// Start a sequence. Resets any prior run.
    pub fn begin(&mut self, target_available: bool) -> InsertAction {
        self.waited = Duration::ZERO;
        if target_available {
            self.state = InsertState::AwaitingFocus;
            InsertAction::FocusTarget
        } else {
            self.state = InsertState::Failed(InsertFailure::NoTarget);
            InsertAction::RequestManualPaste
        }
    }

    /// Feed one observation. `None` means the signal did not apply to the
    /// current state and was ignored.
    pub fn on_signal(&mut self, signal: InsertSignal) -> Option<InsertAction> {
        match (self.state, signal) {
            (InsertState::AwaitingFocus, InsertSignal::TargetFocused) => {
                Some(self.enter_caret_settle())
            }
            (InsertState::AwaitingFocus, InsertSignal::Elapsed(d)) => {
                if self.accumulate(d, self.timeouts.focus) {
                    Some(self.enter_caret_settle())
                } else {
                    None
                }
            }
            (InsertState::AwaitingCaretSettle, InsertSignal::CaretSettled) => {
                Some(self.enter_pasting())
            }
            (InsertState::AwaitingCaretSettle, InsertSignal::Elapsed(d)) => {
                if self.accumulate(d, self.timeouts.caret_settle) {
                    Some(self.enter_pasting())
                } else {
                    None
                }
            }
            (InsertState::Pasting, InsertSignal::PasteAccepted) => {
                self.state = InsertState::Done;
                Some(InsertAction::ReportSuccess)
            }
            (InsertState::Pasting, InsertSignal::PasteRejected) => {
                self.state = InsertState::Failed(InsertFailure::PasteRejected);
                Some(InsertAction::RequestManualPaste)
            }
            (InsertState::Pasting, InsertSignal::Elapsed(d)) => {
                if self.accumulate(d, self.timeouts.paste) {
                    self.state = InsertState::Failed(InsertFailure::PasteTimedOut);
                    Some(InsertAction::RequestManualPaste)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn accumulate(&mut self, elapsed: Duration, limit: Duration) -> bool {
        self.waited += elapsed;
        self.waited >= limit
    }

    fn enter_caret_settle(&mut self) -> InsertAction {
        self.state = InsertState::AwaitingCaretSettle;
        self.waited = Duration::ZERO;
        InsertAction::PlaceCaretAtBlockEnd
    }

    fn enter_pasting(&mut self) -> InsertAction {
        self.state = InsertState::Pasting;
        self.waited = Duration::ZERO;
        InsertAction::DispatchPaste
    }
}

impl Default for PasteSequencer {
    fn default() -> Self {
        Self::new(InsertTimeouts::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_signal_gated_happy_path() {
        let mut seq = PasteSequencer::default();
        assert_eq!(seq.state(), InsertState::Idle);

        assert_eq!(seq.begin(true), InsertAction::FocusTarget);
        assert_eq!(seq.state(), InsertState::AwaitingFocus);

        assert_eq!(
            seq.on_signal(InsertSignal::TargetFocused),
            Some(InsertAction::PlaceCaretAtBlockEnd)
        );
        assert_eq!(seq.state(), InsertState::AwaitingCaretSettle);

        assert_eq!(
            seq.on_signal(InsertSignal::CaretSettled),
            Some(InsertAction::DispatchPaste)
        );
        assert_eq!(seq.state(), InsertState::Pasting);

        assert_eq!(
            seq.on_signal(InsertSignal::PasteAccepted),
            Some(InsertAction::ReportSuccess)
        );
        assert_eq!(seq.state(), InsertState::Done);
        assert!(seq.is_terminal());
    }

    #[test]
    fn test_no_target_fails_immediately() {
        let mut seq = PasteSequencer::default();
        assert_eq!(seq.begin(false), InsertAction::RequestManualPaste);
        assert_eq!(seq.state(), InsertState::Failed(InsertFailure::NoTarget));
    }

    #[test]
    fn test_focus_timeout_advances() {
        let mut seq = PasteSequencer::default();
        seq.begin(true);
        assert_eq!(seq.on_signal(InsertSignal::Elapsed(ms(60))), None);
        assert_eq!(
            seq.on_signal(InsertSignal::Elapsed(ms(60))),
            Some(InsertAction::PlaceCaretAtBlockEnd)
        );
        assert_eq!(seq.state(), InsertState::AwaitingCaretSettle);
    }

    #[test]
    fn test_settle_timeout_advances_to_paste() {
        let mut seq = PasteSequencer::default();
        seq.begin(true);
        seq.on_signal(InsertSignal::TargetFocused);
        assert_eq!(
            seq.on_signal(InsertSignal::Elapsed(ms(100))),
            Some(InsertAction::DispatchPaste)
        );
        assert_eq!(seq.state(), InsertState::Pasting);
    }

    #[test]
    fn test_waited_resets_between_states() {
        let mut seq = PasteSequencer::default();
        seq.begin(true);
        assert_eq!(seq.on_signal(InsertSignal::Elapsed(ms(80))), None);
        seq.on_signal(InsertSignal::TargetFocused);
        // 80ms from the focus wait must not count against the settle wait
        assert_eq!(seq.on_signal(InsertSignal::Elapsed(ms(80))), None);
        assert_eq!(seq.state(), InsertState::AwaitingCaretSettle);
    }

    #[test]
    fn test_paste_rejection_requests_manual_paste() {
        let mut seq = PasteSequencer::default();
        seq.begin(true);
        seq.on_signal(InsertSignal::TargetFocused);
        seq.on_signal(InsertSignal::CaretSettled);
        assert_eq!(
            seq.on_signal(InsertSignal::PasteRejected),
            Some(InsertAction::RequestManualPaste)
        );
        assert_eq!(
            seq.state(),
            InsertState::Failed(InsertFailure::PasteRejected)
        );
    }

    #[test]
    fn test_paste_timeout_fails_rather_than_advancing() {
        let mut seq = PasteSequencer::default();
        seq.begin(true);
        seq.on_signal(InsertSignal::TargetFocused);
        seq.on_signal(InsertSignal::CaretSettled);
        assert_eq!(seq.on_signal(InsertSignal::Elapsed(ms(299))), None);
        assert_eq!(
            seq.on_signal(InsertSignal::Elapsed(ms(1))),
            Some(InsertAction::RequestManualPaste)
        );
        assert_eq!(
            seq.state(),
            InsertState::Failed(InsertFailure::PasteTimedOut)
        );
    }

    #[test]
    fn test_stray_signals_ignored() {
        let mut seq = PasteSequencer::default();
        seq.begin(true);
        assert_eq!(seq.on_signal(InsertSignal::PasteAccepted), None);
        assert_eq!(seq.on_signal(InsertSignal::CaretSettled), None);
        assert_eq!(seq.state(), InsertState::AwaitingFocus);
    }

    #[test]
    fn test_terminal_states_are_stable() {
        let mut seq = PasteSequencer::default();
        seq.begin(true);
        seq.on_signal(InsertSignal::TargetFocused);
        seq.on_signal(InsertSignal::CaretSettled);
        seq.on_signal(InsertSignal::PasteAccepted);
        assert_eq!(seq.state(), InsertState::Done);
        assert_eq!(seq.on_signal(InsertSignal::PasteRejected), None);
        assert_eq!(seq.on_signal(InsertSignal::Elapsed(ms(1000))), None);
        assert_eq!(seq.state(), InsertState::Done);
    }

    #[test]
    fn test_pending_timeout_counts_down() {
        let mut seq = PasteSequencer::default();
        assert_eq!(seq.pending_timeout(), None);
        seq.begin(true);
        assert_eq!(seq.pending_timeout(), Some(ms(100)));
        seq.on_signal(InsertSignal::Elapsed(ms(40)));
        assert_eq!(seq.pending_timeout(), Some(ms(60)));
        seq.on_signal(InsertSignal::TargetFocused);
        assert_eq!(seq.pending_timeout(), Some(ms(100)));
    }

    #[test]
    fn test_begin_resets_a_finished_run() {
        let mut seq = PasteSequencer::default();
        seq.begin(false);
        assert!(seq.is_terminal());
        assert_eq!(seq.begin(true), InsertAction::FocusTarget);
        assert_eq!(seq.state(), InsertState::AwaitingFocus);
        assert_eq!(seq.pending_timeout(), Some(ms(100)));
    }

    #[test]
    fn test_custom_timeouts_respected() {
        let mut seq = PasteSequencer::new(InsertTimeouts {
            focus: ms(10),
            caret_settle: ms(10),
            paste: ms(20),
        });
        seq.begin(true);
        assert_eq!(
            seq.on_signal(InsertSignal::Elapsed(ms(10))),
            Some(InsertAction::PlaceCaretAtBlockEnd)
        );
        assert_eq!(
            seq.on_signal(InsertSignal::Elapsed(ms(10))),
            Some(InsertAction::DispatchPaste)
        );
        assert_eq!(seq.on_signal(InsertSignal::Elapsed(ms(19))), None);
        assert_eq!(
            seq.on_signal(InsertSignal::Elapsed(ms(1))),
            Some(InsertAction::RequestManualPaste)
        );
    }
}
