//! Pattern reconstruction tests
//!
//! Plain-text captures through the reconstructor, pinned outputs plus
//! property coverage for idempotence and inline wrapper balance.

mod patterns;
mod properties;
