//! Fork listing and comparison operation.

use std::collections::HashSet;
use std::hash::BuildHasher;
use std::io::{self, Write};

use bbshort::BbConfig;
use bbshort::bitbucket::{
    BbError, ForkGateway, HttpBitbucketGateway, RepositoryIdentity, StderrNoticeSink,
};
use bbshort::forks::{ChangeComparer, ChangeDirection, HgChangeComparer, compare_forks, list_forks};
use bbshort::local::LocalWorkspace;
use tracing::debug;

use super::output::{write_fork_listing, write_fork_report};
use super::resolve_repository;

/// Host tool used for incoming/outgoing comparisons.
const HG_EXECUTABLE: &str = "hg";

/// Lists the forks of the current repository, comparing each with the
/// working copy when a direction is given.
///
/// # Errors
///
/// Returns [`BbError::UnresolvedReference`] when the repository cannot be
/// named and any gateway error raised while listing forks. Per-fork
/// comparison failures are reported in the output instead.
pub fn run(
    config: &BbConfig,
    workspace: &LocalWorkspace,
    direction: Option<ChangeDirection>,
) -> Result<(), BbError> {
    let identity = resolve_repository(config, workspace, &StderrNoticeSink)?;
    let gateway = HttpBitbucketGateway::new(config.api_url(), Some(config.credentials()?))?;
    let comparer = HgChangeComparer::new(HG_EXECUTABLE, workspace.root().to_path_buf());

    let mut stdout = io::stdout().lock();
    run_with(
        &identity,
        &config.ignored_forks(),
        direction,
        &gateway,
        &comparer,
        &mut stdout,
    )
}

/// Lists and compares forks using the given collaborators.
///
/// This function is exposed for testing with stub gateways.
pub fn run_with<G, C, W, S>(
    identity: &RepositoryIdentity,
    ignore: &HashSet<String, S>,
    direction: Option<ChangeDirection>,
    gateway: &G,
    comparer: &C,
    writer: &mut W,
) -> Result<(), BbError>
where
    G: ForkGateway,
    C: ChangeComparer,
    W: Write,
    S: BuildHasher,
{
    debug!(%identity, ignored = ignore.len(), direction = ?direction, "running fork command");
    let forks = list_forks(gateway, identity, ignore)?;

    match direction {
        None => write_fork_listing(writer, identity, &forks),
        Some(direction) => {
            let report = compare_forks(comparer, &forks, direction);
            write_fork_report(writer, &report, direction)
        }
    }
}
