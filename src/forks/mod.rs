//! Fork listing and per-fork change comparison.
//!
//! A failure while comparing one fork never aborts the listing: every fork
//! gets its own outcome in a [`ForkReport`].

mod compare;

pub use compare::{ChangeComparer, ChangeDirection, ChangeSummary, HgChangeComparer};

use std::collections::HashSet;

use tracing::{info, warn};

use crate::bitbucket::{BbError, ForkGateway, RepositoryIdentity};

/// Splits an `ignore_forks` value into identities.
///
/// Entries are separated by commas or whitespace, as in an hgrc list.
#[must_use]
pub fn parse_ignore_list(value: &str) -> HashSet<String> {
    value
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Lists the forks of `identity`, dropping those named in `ignore`.
///
/// # Errors
///
/// Propagates gateway errors unchanged.
pub fn list_forks<G, S>(
    gateway: &G,
    identity: &RepositoryIdentity,
    ignore: &HashSet<String, S>,
) -> Result<Vec<RepositoryIdentity>, BbError>
where
    G: ForkGateway + ?Sized,
    S: std::hash::BuildHasher,
{
    let forks = gateway.list_forks(identity)?;
    let total = forks.len();
    let kept: Vec<_> = forks
        .into_iter()
        .filter(|fork| !ignore.contains(&fork.to_string()))
        .collect();

    info!(%identity, total, ignored = total - kept.len(), "listed forks");
    Ok(kept)
}

/// Result of comparing a single fork.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForkOutcome {
    /// The fork that was compared.
    pub fork: RepositoryIdentity,
    /// Changes found, or the per-fork failure.
    pub result: Result<ChangeSummary, BbError>,
}

/// Outcomes of comparing every fork, in listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForkReport {
    outcomes: Vec<ForkOutcome>,
}

impl ForkReport {
    /// All outcomes in listing order.
    #[must_use]
    pub fn outcomes(&self) -> &[ForkOutcome] {
        &self.outcomes
    }

    /// True when there were no forks to compare.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Outcomes whose comparison failed.
    pub fn failures(&self) -> impl Iterator<Item = &ForkOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.result.is_err())
    }

    /// True when at least one fork could not be compared.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    /// True when every fork was compared successfully.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        !self.is_empty() && !self.has_failures()
    }
}

/// Compares every fork in order, isolating failures per fork.
///
/// Each fork is compared through its HTTPS web address.
pub fn compare_forks<C>(
    comparer: &C,
    forks: &[RepositoryIdentity],
    direction: ChangeDirection,
) -> ForkReport
where
    C: ChangeComparer + ?Sized,
{
    let outcomes = forks
        .iter()
        .map(|fork| {
            info!(%fork, %direction, "looking at fork");
            let result = fork
                .web_url()
                .and_then(|url| comparer.compare(direction, url.as_str()))
                .map_err(|error| into_remote_failure(fork, error));
            if let Err(error) = &result {
                warn!(%fork, %error, "comparing fork failed");
            }
            ForkOutcome {
                fork: fork.clone(),
                result,
            }
        })
        .collect();

    ForkReport { outcomes }
}

fn into_remote_failure(fork: &RepositoryIdentity, error: BbError) -> BbError {
    match error {
        BbError::RemoteOperationFailure { .. } => error,
        other => BbError::RemoteOperationFailure {
            target: fork.to_string(),
            message: other.to_string(),
        },
    }
}
