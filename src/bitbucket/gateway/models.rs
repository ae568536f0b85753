//! Wire types of the Bitbucket JSON API.

use serde::{Deserialize, Serialize};

/// Default version control system for new repositories.
pub const DEFAULT_SCM: &str = "git";

/// Options for creating a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRepositoryOptions {
    /// Version control system of the new repository.
    pub scm: String,
    /// Whether only the owner and invited users may see the repository.
    pub is_private: bool,
    /// Optional description shown on the repository page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Default for CreateRepositoryOptions {
    fn default() -> Self {
        Self {
            scm: DEFAULT_SCM.to_owned(),
            is_private: false,
            description: None,
        }
    }
}

/// One page of a paginated listing.
///
/// A body without `values` is reported as a read failure.
#[derive(Debug, Deserialize)]
pub(super) struct Page<T> {
    pub(super) values: Option<Vec<T>>,
    pub(super) next: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RepositoryEntry {
    pub(super) full_name: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct UserEntry {
    pub(super) nickname: Option<String>,
    pub(super) display_name: Option<String>,
}

impl UserEntry {
    pub(super) fn into_name(self) -> Option<String> {
        self.nickname.or(self.display_name)
    }
}
