//! Shared fixture loading for the integration suite.

use pagemark_core::Page;
use std::path::PathBuf;

/// Reads a fixture file from tests/fixtures.
pub fn load_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

/// Parses an HTML fixture into a page.
pub fn fixture_page(name: &str) -> Page {
    Page::parse(&load_fixture(name)).expect("fixture should parse")
}
