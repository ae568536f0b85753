//! Follower listing operation.

use std::io::{self, Write};

use bbshort::BbConfig;
use bbshort::bitbucket::{
    BbError, FollowerGateway, HttpBitbucketGateway, RepositoryIdentity, StderrNoticeSink,
};
use bbshort::local::LocalWorkspace;

use super::output::write_followers;
use super::resolve_repository;

/// Lists the users following the current repository.
///
/// # Errors
///
/// Returns [`BbError::UnresolvedReference`] when the repository cannot be
/// named and any gateway error.
pub fn run(config: &BbConfig, workspace: &LocalWorkspace) -> Result<(), BbError> {
    let identity = resolve_repository(config, workspace, &StderrNoticeSink)?;
    let gateway = HttpBitbucketGateway::new(config.api_url(), Some(config.credentials()?))?;

    let mut stdout = io::stdout().lock();
    run_with_gateway(&identity, &gateway, &mut stdout)
}

/// Lists followers through `gateway`.
pub fn run_with_gateway<G, W>(
    identity: &RepositoryIdentity,
    gateway: &G,
    writer: &mut W,
) -> Result<(), BbError>
where
    G: FollowerGateway,
    W: Write,
{
    let followers = gateway.list_followers(identity)?;
    write_followers(writer, identity, &followers)
}

#[cfg(test)]
mod tests {
    use bbshort::bitbucket::BbError;

    use super::run_with_gateway;
    use crate::cli::test_utils::{CapturingGateway, identity};

    #[test]
    fn writes_followers_of_resolved_repository() {
        let gateway = CapturingGateway {
            followers: vec!["birkenfeld".to_owned(), "georg".to_owned()],
            ..Default::default()
        };
        let mut buffer = Vec::new();

        run_with_gateway(&identity("birkenfeld/sphinx"), &gateway, &mut buffer)
            .expect("listing should succeed");

        let output = String::from_utf8(buffer).expect("output should be valid UTF-8");
        assert_eq!(output, "followers of birkenfeld/sphinx:\n  birkenfeld\n  georg\n");
        assert_eq!(gateway.calls(), vec![identity("birkenfeld/sphinx")]);
    }

    #[test]
    fn propagates_network_errors() {
        let gateway = CapturingGateway {
            failure: Some(BbError::Network {
                message: "connection refused".to_owned(),
            }),
            ..Default::default()
        };
        let mut buffer = Vec::new();

        let result = run_with_gateway(&identity("birkenfeld/sphinx"), &gateway, &mut buffer);

        assert!(matches!(result, Err(BbError::Network { .. })));
        assert!(buffer.is_empty(), "nothing should be written on failure");
    }
}
