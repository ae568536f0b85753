//! CLI operation mode handlers.
//!
//! This module contains the implementations for different operation modes:
//! - [`resolve_url`]: Expand a short reference into its full URL
//! - [`clone`]: Clone a repository named by a short reference
//! - [`forks`]: List forks and compare them with the working copy
//! - [`followers`]: List the users following a repository
//! - [`create`]: Create a repository on Bitbucket
//! - [`link`]: Print a web link to a file or revision
//!
//! Output formatting utilities are in [`output`].

use bbshort::BbConfig;
use bbshort::bitbucket::{
    BbError, NoticeSink, RepositoryIdentity, ResolveRequest, resolve_identity,
};
use bbshort::local::LocalWorkspace;

pub mod clone;
pub mod create;
pub mod followers;
pub mod forks;
pub mod link;
pub mod output;
pub mod resolve_url;

#[cfg(test)]
pub mod test_utils;

/// Resolves the repository a command operates on from `--reponame` and the
/// working copy.
///
/// # Errors
///
/// Returns [`BbError::Configuration`] when no username is available and
/// [`BbError::UnresolvedReference`] when no repository name can be found.
pub fn resolve_repository(
    config: &BbConfig,
    workspace: &LocalWorkspace,
    notices: &dyn NoticeSink,
) -> Result<RepositoryIdentity, BbError> {
    let credentials = config.credentials()?;
    let request = ResolveRequest {
        explicit_name: config.reponame.as_deref(),
        configured_paths: workspace.configured_paths(),
        local_directory_name: workspace.directory_name(),
        username: credentials.username(),
    };
    resolve_identity(&request, notices)
}
