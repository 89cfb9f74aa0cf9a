//! Markdown recovery for block-editor HTML
//!
//! ```text
//!     Block editors store documents as trees of identity-tagged div blocks, with the visual
//!     structure carried by class-name fragments, inline styles and ARIA attributes rather than
//!     semantic HTML tags. Copying from such an editor yields HTML that most converters read as
//!     a pile of nested divs. This crate reads the conventions directly and recovers the Markdown
//!     the author would have typed.
//!
//!     TLDR for integrators:
//!         - Parse the captured HTML with [`Page::parse`], pick a [`Selection`], and run
//!           [`StrategyPipeline::with_defaults`]. Extraction is total: it never errors and never
//!           returns empty output for a selection that contains text.
//!         - For one-shot conversion of a whole page there is [`markdown_from_html`].
//!         - Plain clipboard text goes through [`markdown_from_text`], which applies the same
//!           pattern reconstructor the fallback strategies use.
//!         - The crate is shell agnostic. No printing, no env vars, no network. The cli and the
//!           client crates layer those concerns on top.
//! ```
//!
//! Architecture
//!
//! ```text
//!     The work splits into a small DOM layer and the logic that reads it. We parse with
//!     html5ever into rcdom and address nodes by child-index paths instead of parent links,
//!     which keeps selection boundaries comparable with a plain lexicographic ordering. Block
//!     classification is an ordered rule table, because the class conventions overlap (a header
//!     block can also carry a quote fragment, and "sub-sub-header" contains "sub-header") and
//!     only first-match-wins keeps that sane.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── dom.rs                  # Parsing, node predicates, paths, detached clones
//!     ├── selection.rs            # Boundaries, intersection, flattening, cloneContents
//!     ├── classify.rs             # Ordered block role rules
//!     ├── inline.rs               # Inline style spans to Markdown emphasis
//!     ├── blocks.rs               # Block role to Markdown line mapping
//!     ├── reconstruct.rs          # Pattern reconstruction for plain text
//!     ├── strategies             # The extraction cascade
//!     │   ├── leaf_scan.rs
//!     │   ├── aggressive.rs
//!     │   ├── clone_walk.rs
//!     │   ├── flatten.rs
//!     │   └── plain_text.rs
//!     ├── prompt.rs               # Style presets and prompt composition
//!     ├── insert.rs               # Caret-insertion state machine
//!     ├── notify.rs               # Notice lifecycle model
//!     ├── report.rs               # Serializable inspection report
//!     └── lib.rs
//! ```
//!
//! Testing
//!
//! ```text
//!     Every module carries unit tests next to the code it tests. The integration suite under
//!     tests/ runs whole captured pages through the cascade and snapshots the Markdown with
//!     insta, so a change in any layer shows up as a reviewable diff. Note that rust does not
//!     discover integration tests in subdirectories by default, so tests/lib.rs declares the
//!     submodules explicitly.
//! ```
//!
//! The Strategy Cascade
//!
//! ```text
//!     There is no single reliable way to read an editor selection. Identity-tagged blocks give
//!     the highest fidelity when they are present and populated, but copies can arrive as
//!     fragments without ids, as loose formatted HTML, or as bare text. Rather than one clever
//!     reader full of special cases, extraction is a cascade of five self-contained strategies
//!     tried in descending order of fidelity, each producing finished Markdown or passing. A
//!     strategy can also mark its own output low confidence (a scan that found only headings
//!     probably missed the body) to let a later strategy try for something better. When all five
//!     pass, the selection's flattened text is returned verbatim, which keeps the operation
//!     total.
//! ```
//!
//! Library Choices
//!
//! ```text
//!     Parsing is offloaded to html5ever and markup5ever_rcdom. We never hand-parse HTML, the
//!     browser-grade parser deals with malformed markup and implied elements for us, and rcdom's
//!     Rc-based tree is a good fit for single-threaded read-mostly traversal. Line patterns use
//!     the regex crate behind once_cell lazies so each pattern compiles once. Role names and the
//!     inspection report serialize with serde so the cli can print them as json without this
//!     crate knowing about output formats.
//! ```

pub mod blocks;
pub mod classify;
pub mod dom;
pub mod error;
pub mod inline;
pub mod insert;
pub mod notify;
pub mod prompt;
pub mod reconstruct;
pub mod report;
pub mod selection;
pub mod strategies;

pub use blocks::format_block;
pub use classify::{classify_block, BlockRole};
pub use dom::Page;
pub use error::ExtractError;
pub use inline::format_inline;
pub use insert::{
    InsertAction, InsertFailure, InsertSignal, InsertState, InsertTimeouts, PasteSequencer,
};
pub use notify::{Notice, NoticeBoard, NoticeId, NoticeKind};
pub use prompt::{compose_prompt, Preset};
pub use reconstruct::reconstruct;
pub use report::{inspect, BlockReport, ExtractionReport};
pub use selection::{Boundary, Selection};
pub use strategies::{ExtractionOutcome, ExtractionStrategy, StrategyPipeline};

/// Converts a whole captured page to Markdown.
///
/// Parses the HTML, selects everything, and runs the standard strategy
/// cascade. Fails only when the HTML cannot be read at all; an empty or
/// unrecognizable page yields empty output, not an error.
pub fn markdown_from_html(html: &str) -> Result<String, ExtractError> {
    let page = Page::parse(html)?;
    let selection = Selection::entire(&page);
    Ok(StrategyPipeline::with_defaults().extract(&page, &selection))
}

/// Converts plain clipboard text to Markdown.
///
/// This is the path for captures that carry no HTML at all. The pattern
/// reconstructor recovers headings, lists and key-value lines from their
/// textual shape.
pub fn markdown_from_text(text: &str) -> String {
    reconstruct(text)
}
