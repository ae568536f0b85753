//! Incoming/outgoing comparison against a remote repository.

use std::fmt;
use std::process::Command;

use camino::Utf8PathBuf;
use tracing::debug;

use crate::bitbucket::BbError;

/// One line per changeset: short hash and first line of the description.
const CHANGESET_TEMPLATE: &str = "{node|short} {desc|firstline}\\n";

/// Direction of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    /// Changesets in the remote that are missing locally.
    Incoming,
    /// Local changesets missing from the remote.
    Outgoing,
}

impl ChangeDirection {
    /// Host tool subcommand for this direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Incoming => "incoming",
            Self::Outgoing => "outgoing",
        }
    }
}

impl fmt::Display for ChangeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Changesets found by a comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSummary {
    /// Number of changesets.
    pub count: usize,
    /// One line per changeset.
    pub text: String,
}

impl ChangeSummary {
    /// Builds a summary from one-changeset-per-line output.
    #[must_use]
    pub fn from_lines(text: &str) -> Self {
        let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
        Self {
            count: lines.len(),
            text: lines.join("\n"),
        }
    }
}

/// Compares the local repository with a remote one.
#[cfg_attr(test, mockall::automock)]
pub trait ChangeComparer {
    /// Returns the changesets between the local repository and `target_url`.
    ///
    /// # Errors
    ///
    /// Returns [`BbError::RemoteOperationFailure`] when the comparison fails.
    fn compare(&self, direction: ChangeDirection, target_url: &str)
    -> Result<ChangeSummary, BbError>;
}

/// Runs `hg incoming`/`hg outgoing` in a working copy.
#[derive(Debug, Clone)]
pub struct HgChangeComparer {
    executable: String,
    repository_root: Utf8PathBuf,
}

impl HgChangeComparer {
    /// Creates a comparer running `executable` inside `repository_root`.
    #[must_use]
    pub fn new(executable: impl Into<String>, repository_root: Utf8PathBuf) -> Self {
        Self {
            executable: executable.into(),
            repository_root,
        }
    }
}

impl ChangeComparer for HgChangeComparer {
    fn compare(
        &self,
        direction: ChangeDirection,
        target_url: &str,
    ) -> Result<ChangeSummary, BbError> {
        debug!(%direction, target_url, root = %self.repository_root, "running comparison");

        let failure = |message: String| BbError::RemoteOperationFailure {
            target: target_url.to_owned(),
            message,
        };

        let output = Command::new(&self.executable)
            .arg(direction.as_str())
            .arg("--quiet")
            .arg("--template")
            .arg(CHANGESET_TEMPLATE)
            .arg(target_url)
            .current_dir(&self.repository_root)
            .output()
            .map_err(|error| failure(format!("unable to invoke {}: {error}", self.executable)))?;

        // Exit status 1 means "no changes found".
        match output.status.code() {
            Some(0) => Ok(ChangeSummary::from_lines(&String::from_utf8_lossy(
                &output.stdout,
            ))),
            Some(1) => Ok(ChangeSummary::default()),
            _ => Err(failure(
                String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            )),
        }
    }
}
