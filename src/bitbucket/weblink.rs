//! Links to repository pages on the Bitbucket website.

use url::Url;

use super::error::BbError;
use super::identity::RepositoryIdentity;

/// Revision shown when a file link names no revision.
const DEFAULT_REVISION: &str = "tip";

/// Builds a web link to a file, a revision, or the repository itself.
///
/// - file given: `/{owner}/{name}/src/{revision or tip}/{file}`
/// - revision only: `/{owner}/{name}/commits/{revision}`
/// - neither: `/{owner}/{name}`
///
/// # Errors
///
/// Returns [`BbError::UnresolvedReference`] when the result is not a valid
/// URL.
pub fn web_link(
    identity: &RepositoryIdentity,
    revision: Option<&str>,
    file: Option<&str>,
) -> Result<Url, BbError> {
    let mut url = identity.web_url()?;
    let file = file.map(|value| value.trim_matches('/')).filter(|value| !value.is_empty());

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|()| BbError::unresolved(&identity.to_string()))?;
        match (revision, file) {
            (revision, Some(file)) => {
                segments
                    .push("src")
                    .push(revision.unwrap_or(DEFAULT_REVISION))
                    .extend(file.split('/'));
            }
            (Some(revision), None) => {
                segments.push("commits").push(revision);
            }
            (None, None) => {}
        }
    }

    Ok(url)
}
