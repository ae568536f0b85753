//! Shared test utilities for CLI tests.

use std::sync::{Arc, Mutex};

use bbshort::bitbucket::{
    BbError, CreateRepositoryOptions, FollowerGateway, ForkGateway, RepositoryAdminGateway,
    RepositoryIdentity,
};
use bbshort::forks::{ChangeComparer, ChangeDirection, ChangeSummary};

/// A stub gateway that captures the requested identity and returns a
/// preconfigured response.
#[derive(Clone, Default)]
pub struct CapturingGateway {
    /// Identities passed to the gateway, in call order.
    pub captured: Arc<Mutex<Vec<RepositoryIdentity>>>,
    /// Forks returned by `list_forks`.
    pub forks: Vec<RepositoryIdentity>,
    /// Followers returned by `list_followers`.
    pub followers: Vec<String>,
    /// Options passed to `create_repository`.
    pub created: Arc<Mutex<Option<CreateRepositoryOptions>>>,
    /// Error returned by every call instead of the response.
    pub failure: Option<BbError>,
}

impl CapturingGateway {
    fn record(&self, identity: &RepositoryIdentity) -> Result<(), BbError> {
        self.captured
            .lock()
            .expect("captured mutex should be available")
            .push(identity.clone());
        self.failure.clone().map_or(Ok(()), Err)
    }

    /// Identities the gateway was called with.
    pub fn calls(&self) -> Vec<RepositoryIdentity> {
        self.captured
            .lock()
            .expect("captured mutex should be available")
            .clone()
    }
}

impl ForkGateway for CapturingGateway {
    fn list_forks(
        &self,
        identity: &RepositoryIdentity,
    ) -> Result<Vec<RepositoryIdentity>, BbError> {
        self.record(identity)?;
        Ok(self.forks.clone())
    }
}

impl FollowerGateway for CapturingGateway {
    fn list_followers(&self, identity: &RepositoryIdentity) -> Result<Vec<String>, BbError> {
        self.record(identity)?;
        Ok(self.followers.clone())
    }
}

impl RepositoryAdminGateway for CapturingGateway {
    fn create_repository(
        &self,
        identity: &RepositoryIdentity,
        options: &CreateRepositoryOptions,
    ) -> Result<(), BbError> {
        self.record(identity)?;
        self.created
            .lock()
            .expect("created mutex should be available")
            .replace(options.clone());
        Ok(())
    }
}

/// A comparer that reports changes for URLs containing `busy` and fails for
/// URLs containing `broken`.
#[derive(Clone, Default)]
pub struct ScriptedComparer {
    /// Target URLs compared, in call order.
    pub targets: Arc<Mutex<Vec<String>>>,
}

impl ChangeComparer for ScriptedComparer {
    fn compare(
        &self,
        _direction: ChangeDirection,
        target_url: &str,
    ) -> Result<ChangeSummary, BbError> {
        self.targets
            .lock()
            .expect("targets mutex should be available")
            .push(target_url.to_owned());

        if target_url.contains("broken") {
            Err(BbError::RemoteOperationFailure {
                target: target_url.to_owned(),
                message: "abort: repository not found".to_owned(),
            })
        } else if target_url.contains("busy") {
            Ok(ChangeSummary::from_lines("1a2b3c fix build\n"))
        } else {
            Ok(ChangeSummary::default())
        }
    }
}

/// Parses `owner/name` for test fixtures.
pub fn identity(value: &str) -> RepositoryIdentity {
    RepositoryIdentity::parse(value).expect("valid identity")
}
