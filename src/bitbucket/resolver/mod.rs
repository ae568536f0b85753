//! Inference of a repository identity from an explicit name, configured
//! paths, or the working directory name.

use tracing::debug;

use super::error::BbError;
use super::fragment::parse_path_fragment;
use super::identity::RepositoryIdentity;
use super::notice::{Notice, NoticeSink};

/// Path names consulted when no explicit repository name is given.
pub const DEFAULT_PATH_NAMES: [&str; 2] = ["default", "default-push"];

/// One named path from the working copy's configuration, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfiguredPath {
    /// Path alias, e.g. `default`.
    pub name: String,
    /// Path value, e.g. `https://bitbucket.org/owner/repo`.
    pub location: String,
}

impl ConfiguredPath {
    /// Creates a configured path entry.
    #[must_use]
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }
}

/// Inputs of a single resolution.
#[derive(Debug, Clone, Copy)]
pub struct ResolveRequest<'a> {
    /// Repository name given by the user, if any.
    pub explicit_name: Option<&'a str>,
    /// Configured paths in their original order.
    pub configured_paths: &'a [ConfiguredPath],
    /// Base name of the working directory.
    pub local_directory_name: &'a str,
    /// Bitbucket username used when the owner is missing.
    pub username: &'a str,
}

/// Where the fragment of a resolution came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FragmentSource {
    Explicit,
    ConfiguredPath,
    DirectoryName,
}

/// Resolves the repository identity for commands that take no URL.
///
/// The first non-empty source wins: the explicit name, then the first
/// `default`/`default-push` path whose location parses as a Bitbucket
/// reference, then the local directory name. A fragment without `/` is
/// owned by `username`.
///
/// Unless the caller supplied a full `owner/name`, a
/// [`Notice::GuessedRepositoryName`] is sent to `notices`.
///
/// # Errors
///
/// Returns [`BbError::UnresolvedReference`] when every source is empty or
/// the fragment has an empty owner or name.
pub fn resolve_identity(
    request: &ResolveRequest<'_>,
    notices: &dyn NoticeSink,
) -> Result<RepositoryIdentity, BbError> {
    let (fragment, source) = select_fragment(request)?;
    let trimmed = fragment.trim_matches('/');

    let (identity, owner_given) = match trimmed.split_once('/') {
        Some((owner, name)) => (RepositoryIdentity::new(owner, name)?, true),
        None => (RepositoryIdentity::new(request.username, trimmed)?, false),
    };

    debug!(identity = %identity, ?source, owner_given, "resolved repository identity");

    if source != FragmentSource::Explicit || !owner_given {
        notices.notify(Notice::GuessedRepositoryName {
            identity: identity.to_string(),
        });
    }

    Ok(identity)
}

fn select_fragment(request: &ResolveRequest<'_>) -> Result<(String, FragmentSource), BbError> {
    if let Some(name) = request.explicit_name.filter(|name| !name.is_empty()) {
        return Ok((name.to_owned(), FragmentSource::Explicit));
    }

    if let Some(fragment) = fragment_from_paths(request.configured_paths) {
        return Ok((fragment, FragmentSource::ConfiguredPath));
    }

    if request.local_directory_name.is_empty() {
        return Err(BbError::unresolved(request.local_directory_name));
    }

    Ok((
        request.local_directory_name.to_owned(),
        FragmentSource::DirectoryName,
    ))
}

/// Scans paths in order and returns the first parseable default path.
fn fragment_from_paths(paths: &[ConfiguredPath]) -> Option<String> {
    paths
        .iter()
        .filter(|path| DEFAULT_PATH_NAMES.contains(&path.name.as_str()))
        .find_map(|path| parse_path_fragment(&path.location))
}
