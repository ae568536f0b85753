//! Discovery of the working copy containing a directory.

use std::path::Path;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use tracing::debug;

use crate::bitbucket::ConfiguredPath;

use super::error::LocalDiscoveryError;
use super::paths::parse_paths_section;

/// Name of the Mercurial metadata directory.
const METADATA_DIR: &str = ".hg";

/// Configuration file inside the metadata directory.
const HGRC_PATH: &str = ".hg/hgrc";

/// The directory a command runs in, with its configured paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalWorkspace {
    root: Utf8PathBuf,
    configured_paths: Vec<ConfiguredPath>,
    is_working_copy: bool,
}

impl LocalWorkspace {
    /// Root directory of the working copy, or the start directory when no
    /// working copy was found.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// `[paths]` entries of the working copy, in file order.
    #[must_use]
    pub fn configured_paths(&self) -> &[ConfiguredPath] {
        &self.configured_paths
    }

    /// Whether a `.hg` directory was found.
    #[must_use]
    pub const fn is_working_copy(&self) -> bool {
        self.is_working_copy
    }

    /// Base name of the root directory; empty for a file system root.
    #[must_use]
    pub fn directory_name(&self) -> &str {
        self.root.file_name().unwrap_or_default()
    }
}

/// Finds the working copy containing `start`.
///
/// Searches `start` and its ancestors for a `.hg` directory and reads the
/// `[paths]` section of its `hgrc`. Outside a working copy the start
/// directory is returned without configured paths.
///
/// # Errors
///
/// Returns [`LocalDiscoveryError::NonUtf8Path`] for non UTF-8 paths and
/// [`LocalDiscoveryError::Unreadable`] when an existing `hgrc` cannot be read.
pub fn discover_workspace(start: &Path) -> Result<LocalWorkspace, LocalDiscoveryError> {
    let start = Utf8Path::from_path(start).ok_or_else(|| LocalDiscoveryError::NonUtf8Path {
        path: start.to_string_lossy().into_owned(),
    })?;

    for candidate in start.ancestors() {
        let Ok(dir) = Dir::open_ambient_dir(candidate, ambient_authority()) else {
            continue;
        };
        if !dir.is_dir(METADATA_DIR) {
            continue;
        }

        let configured_paths = read_configured_paths(&dir, candidate)?;
        debug!(root = %candidate, paths = configured_paths.len(), "found working copy");
        return Ok(LocalWorkspace {
            root: candidate.to_path_buf(),
            configured_paths,
            is_working_copy: true,
        });
    }

    debug!(start = %start, "no working copy found");
    Ok(LocalWorkspace {
        root: start.to_path_buf(),
        configured_paths: Vec::new(),
        is_working_copy: false,
    })
}

fn read_configured_paths(
    dir: &Dir,
    root: &Utf8Path,
) -> Result<Vec<ConfiguredPath>, LocalDiscoveryError> {
    if !dir.exists(HGRC_PATH) {
        return Ok(Vec::new());
    }

    let content = dir
        .read_to_string(HGRC_PATH)
        .map_err(|error| LocalDiscoveryError::Unreadable {
            path: root.join(HGRC_PATH).into_string(),
            message: error.to_string(),
        })?;

    Ok(parse_paths_section(&content))
}
