//! Error types for local working copy discovery.

use thiserror::Error;

use crate::bitbucket::BbError;

/// Errors that may occur during local working copy discovery.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LocalDiscoveryError {
    /// The start path is not valid UTF-8.
    #[error("path is not valid UTF-8: {path}")]
    NonUtf8Path {
        /// Lossy rendering of the offending path.
        path: String,
    },

    /// The working copy configuration could not be read.
    #[error("could not read {path}: {message}")]
    Unreadable {
        /// Path of the file or directory.
        path: String,
        /// Error detail from the file system.
        message: String,
    },
}

impl From<LocalDiscoveryError> for BbError {
    fn from(error: LocalDiscoveryError) -> Self {
        Self::LocalDiscovery {
            message: error.to_string(),
        }
    }
}
