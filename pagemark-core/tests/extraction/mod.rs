//! Extraction tests over captured fixture pages.
//!
//! Whole pages and partial selections run through the standard strategy
//! cascade; outputs are pinned with snapshots so structural regressions in
//! any layer show up as diffs.

mod pages;
mod partial;
