//! Canonical `owner/name` identity of a Bitbucket repository.

use std::fmt;

use url::Url;

use super::error::BbError;
use super::fragment::SERVICE_DOMAIN;

/// A repository on the hosted service, identified by owner and name.
///
/// Both parts are non-empty. The canonical string form is `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryIdentity {
    owner: String,
    name: String,
}

impl RepositoryIdentity {
    /// Creates an identity from its two parts.
    ///
    /// # Errors
    ///
    /// Returns [`BbError::UnresolvedReference`] when either part is empty.
    pub fn new(owner: &str, name: &str) -> Result<Self, BbError> {
        if owner.is_empty() || name.is_empty() {
            return Err(BbError::unresolved(&format!("{owner}/{name}")));
        }
        Ok(Self {
            owner: owner.to_owned(),
            name: name.to_owned(),
        })
    }

    /// Parses an explicit `owner/name` string, splitting on the first `/`.
    ///
    /// # Errors
    ///
    /// Returns [`BbError::UnresolvedReference`] when the string has no `/`
    /// or one of the parts is empty.
    pub fn parse(value: &str) -> Result<Self, BbError> {
        let (owner, name) = value
            .split_once('/')
            .ok_or_else(|| BbError::unresolved(value))?;
        Self::new(owner, name)
    }

    /// Repository owner (user or team).
    #[must_use]
    pub const fn owner(&self) -> &str {
        self.owner.as_str()
    }

    /// Repository slug.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Public web address of the repository.
    ///
    /// Always uses HTTPS; used for read-only comparisons against forks.
    ///
    /// # Errors
    ///
    /// Returns [`BbError::UnresolvedReference`] when the identity cannot form
    /// a valid URL.
    pub fn web_url(&self) -> Result<Url, BbError> {
        Url::parse(&format!("https://{SERVICE_DOMAIN}/{self}"))
            .map_err(|_| BbError::unresolved(&self.to_string()))
    }
}

impl fmt::Display for RepositoryIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::RepositoryIdentity;
    use crate::bitbucket::error::BbError;

    #[test]
    fn display_is_owner_slash_name() {
        let identity = RepositoryIdentity::new("birkenfeld", "sphinx").expect("valid identity");

        assert_eq!(identity.to_string(), "birkenfeld/sphinx");
    }

    #[test]
    fn parse_splits_on_first_slash_only() {
        let identity = RepositoryIdentity::parse("owner/name/extra").expect("valid identity");

        assert_eq!(identity.owner(), "owner");
        assert_eq!(identity.name(), "name/extra");
    }

    #[rstest]
    #[case::no_slash("repo")]
    #[case::empty_owner("/repo")]
    #[case::empty_name("owner/")]
    fn parse_rejects_incomplete_identities(#[case] input: &str) {
        let result = RepositoryIdentity::parse(input);

        assert!(
            matches!(result, Err(BbError::UnresolvedReference { .. })),
            "expected UnresolvedReference for {input}, got {result:?}"
        );
    }

    #[test]
    fn web_url_points_at_the_repository_page() {
        let identity = RepositoryIdentity::new("the", "repo").expect("valid identity");

        let url = identity.web_url().expect("valid URL");

        assert_eq!(url.as_str(), "https://bitbucket.org/the/repo");
    }
}
