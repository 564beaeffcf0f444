//! Shared test utilities for integration tests.
//!
//! Provides helper functions for building temporary post stores used
//! across multiple test files.

use anyhow::Result;
use inkpost::{Post, PostStore};
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a store with a few representative posts.
///
/// Covers the full construct set: headings, lists, emphasis, inline code,
/// links, and a fenced code block.
pub fn sample_store() -> PostStore {
    let mut store = PostStore::new();
    store.add(Post::new(
        1,
        "Hello World",
        "# Hello World\n\nFirst post with **bold** text and a [link](https://example.com).",
        "2026-08-20",
    ));
    store.add(Post::new(
        2,
        "Shipping Code",
        "## Notes\n\n- item one\n- item two\n\n```\nfn main() {}\n```",
        "2026-08-22",
    ));
    store
}

/// Saves a sample store into a temp dir and returns both.
///
/// # Errors
///
/// Returns error if the store cannot be written.
pub fn create_test_store() -> Result<(TempDir, PathBuf, PostStore)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("posts.json");
    let store = sample_store();
    store.save(&path)?;
    Ok((dir, path, store))
}
