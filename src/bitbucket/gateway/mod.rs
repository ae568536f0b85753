//! Gateways for the Bitbucket JSON API.
//!
//! Commands depend on these traits so tests can swap in mocks, while
//! [`HttpBitbucketGateway`] performs the real blocking HTTP calls.

mod client;
mod models;

pub use client::{DEFAULT_API_URL, HttpBitbucketGateway};
pub use models::{CreateRepositoryOptions, DEFAULT_SCM};

use crate::bitbucket::error::BbError;
use crate::bitbucket::identity::RepositoryIdentity;

/// Lists the forks of a repository.
#[cfg_attr(test, mockall::automock)]
pub trait ForkGateway {
    /// Returns the identities of every fork of `identity`.
    ///
    /// # Errors
    ///
    /// Returns [`BbError::ScrapeFailure`] when the response cannot be read
    /// and [`BbError::HttpStatusFailure`] for non-success responses.
    fn list_forks(&self, identity: &RepositoryIdentity) -> Result<Vec<RepositoryIdentity>, BbError>;
}

/// Lists the users following a repository.
#[cfg_attr(test, mockall::automock)]
pub trait FollowerGateway {
    /// Returns the names of the users following `identity`.
    ///
    /// # Errors
    ///
    /// Returns [`BbError::HttpStatusFailure`] or [`BbError::Network`] when
    /// the call fails.
    fn list_followers(&self, identity: &RepositoryIdentity) -> Result<Vec<String>, BbError>;
}

/// Creates repositories on the service.
#[cfg_attr(test, mockall::automock)]
pub trait RepositoryAdminGateway {
    /// Creates `identity` with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`BbError::Configuration`] without credentials and
    /// [`BbError::HttpStatusFailure`] when the service refuses.
    fn create_repository(
        &self,
        identity: &RepositoryIdentity,
        options: &CreateRepositoryOptions,
    ) -> Result<(), BbError>;
}
