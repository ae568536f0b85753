//! User-facing notices raised while inferring repository names.
//!
//! The resolver never prints anything itself. It hands notices to a sink so
//! the caller decides whether the user sees them.

use std::io;

/// A notice emitted by the identity resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The repository name was guessed rather than given as `owner/name`.
    GuessedRepositoryName {
        /// The canonical `owner/name` that was constructed.
        identity: String,
    },
}

impl Notice {
    /// Renders the notice as a single status line.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::GuessedRepositoryName { identity } => {
                format!("using {identity} as the repository name")
            }
        }
    }
}

/// A sink that can record notices.
pub trait NoticeSink {
    /// Records a notice.
    fn notify(&self, notice: Notice);
}

/// Notice sink that drops all notices.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNoticeSink;

impl NoticeSink for NoopNoticeSink {
    fn notify(&self, _notice: Notice) {}
}

/// Writes notices to stderr, one per line.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNoticeSink;

impl NoticeSink for StderrNoticeSink {
    fn notify(&self, notice: Notice) {
        let _ignored = writeln_stderr(&notice.message());
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

/// Notice sink that keeps every notice in memory.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Default)]
pub struct RecordingNoticeSink {
    notices: std::sync::Mutex<Vec<Notice>>,
}

#[cfg(any(test, feature = "test-support"))]
impl RecordingNoticeSink {
    /// Drains and returns the recorded notices.
    #[must_use]
    pub fn take(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|mut notices| notices.drain(..).collect())
            .unwrap_or_default()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl NoticeSink for RecordingNoticeSink {
    fn notify(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}
