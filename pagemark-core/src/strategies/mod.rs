//! Extraction strategy cascade
//!
//! One selection, five ways to read it, in descending order of fidelity:
//! identity-block scanning, aggressive per-block text, a detached-clone
//! structural walk, a line-forcing flatten, and plain text through the
//! pattern reconstructor. The pipeline takes the first strategy that
//! produces non-blank output it trusts, and when every strategy comes up
//! empty it returns the selection's flattened text verbatim, so extraction
//! is total: never an error, never empty for a non-empty selection.

mod aggressive;
mod clone_walk;
mod flatten;
mod leaf_scan;
mod plain_text;

pub use aggressive::AggressiveText;
pub use clone_walk::CloneWalk;
pub use flatten::LineForcingFlatten;
pub use leaf_scan::LeafBlockScan;
pub use plain_text::PlainTextFallback;

use crate::dom::Page;
use crate::selection::Selection;

/// One way of reading a selection.
///
/// Strategies traverse `Rc`-based page nodes and stay on one thread.
pub trait ExtractionStrategy {
    /// The name of this strategy (e.g., "leaf-scan", "plain-text")
    fn name(&self) -> &'static str;

    /// Try to read the selection. `None` means this strategy has nothing
    /// to offer and the next one should run.
    fn extract(&self, page: &Page, selection: &Selection) -> Option<String>;

    /// Whether an output, though non-empty, should be distrusted and the
    /// cascade continued.
    fn is_low_confidence(&self, _output: &str) -> bool {
        false
    }
}

/// The result of running the cascade: what was produced and by whom.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionOutcome {
    pub strategy: &'static str,
    pub markdown: String,
}

/// An ordered cascade of strategies.
pub struct StrategyPipeline {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl StrategyPipeline {
    /// An empty pipeline. Callers building a custom cascade start here.
    pub fn new() -> Self {
        StrategyPipeline {
            strategies: Vec::new(),
        }
    }

    /// The standard cascade, highest fidelity first.
    pub fn with_defaults() -> Self {
        let mut pipeline = StrategyPipeline::new();
        pipeline.register(LeafBlockScan);
        pipeline.register(AggressiveText);
        pipeline.register(CloneWalk);
        pipeline.register(LineForcingFlatten);
        pipeline.register(PlainTextFallback);
        pipeline
    }

    /// Append a strategy to the cascade.
    pub fn register<S: ExtractionStrategy + 'static>(&mut self, strategy: S) {
        self.strategies.push(Box::new(strategy));
    }

    /// Strategy names, in cascade order.
    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Extract Markdown from the selection. Total: falls back to the
    /// selection's flattened text when no strategy produces output.
    pub fn extract(&self, page: &Page, selection: &Selection) -> String {
        self.extract_with_trace(page, selection).markdown
    }

    /// Like [`extract`](Self::extract), reporting which strategy won.
    pub fn extract_with_trace(&self, page: &Page, selection: &Selection) -> ExtractionOutcome {
        for strategy in &self.strategies {
            if let Some(markdown) = strategy.extract(page, selection) {
                if markdown.trim().is_empty() {
                    continue;
                }
                if strategy.is_low_confidence(&markdown) {
                    continue;
                }
                return ExtractionOutcome {
                    strategy: strategy.name(),
                    markdown,
                };
            }
        }
        ExtractionOutcome {
            strategy: "verbatim",
            markdown: selection.flattened_text(&page.document()),
        }
    }
}

impl Default for StrategyPipeline {
    fn default() -> Self {
        Self::with_defaults()
    }
}
