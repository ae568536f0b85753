//! Error types exposed by the Bitbucket layer.

use thiserror::Error;

/// Errors surfaced while resolving short references or talking to Bitbucket.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BbError {
    /// `default_method` holds a value outside `ssh`, `http` and `https`.
    #[error("invalid config value for bb.default_method: {value}")]
    InvalidConfiguration {
        /// The rejected configuration value.
        value: String,
    },

    /// The reference does not point at a Bitbucket repository.
    #[error("not a Bitbucket repository reference: {reference}")]
    UnresolvedReference {
        /// The reference exactly as supplied.
        reference: String,
    },

    /// The API answered with a body we could not interpret.
    #[error("reading the Bitbucket response failed: {message}")]
    ScrapeFailure {
        /// What was missing or malformed.
        message: String,
    },

    /// The API answered with a non-success status.
    #[error("Bitbucket returned HTTP {status}: {message}")]
    HttpStatusFailure {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated.
        message: String,
    },

    /// Networking failed while calling Bitbucket.
    #[error("network error talking to Bitbucket: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// A per-target operation failed while iterating several repositories.
    #[error("{target}: {message}")]
    RemoteOperationFailure {
        /// The repository the operation targeted.
        target: String,
        /// Error detail from the host tool.
        message: String,
    },

    /// Configuration could not be loaded or is incomplete.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Local working copy discovery failed.
    #[error("local discovery: {message}")]
    LocalDiscovery {
        /// Details about the discovery failure.
        message: String,
    },
}

impl BbError {
    pub(crate) fn unresolved(reference: &str) -> Self {
        Self::UnresolvedReference {
            reference: reference.to_owned(),
        }
    }
}
