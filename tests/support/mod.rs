//! Shared test utilities.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Creates a temporary directory.
///
/// # Panics
///
/// Panics if the temporary directory cannot be created.
pub fn create_temp_dir() -> TempDir {
    TempDir::new().unwrap_or_else(|error| panic!("failed to create temporary directory: {error}"))
}

/// Creates a Mercurial working copy called `name` inside `parent`.
///
/// When `hgrc` is given it is written to `.hg/hgrc`.
///
/// # Panics
///
/// Panics if the directories or the file cannot be written.
pub fn create_working_copy(parent: &TempDir, name: &str, hgrc: Option<&str>) -> PathBuf {
    let root = parent.path().join(name);
    fs::create_dir_all(root.join(".hg"))
        .unwrap_or_else(|error| panic!("failed to create working copy: {error}"));
    if let Some(content) = hgrc {
        fs::write(root.join(".hg/hgrc"), content)
            .unwrap_or_else(|error| panic!("failed to write hgrc: {error}"));
    }
    root
}
