//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use bbshort::bitbucket::{BbError, RepositoryIdentity};
use bbshort::forks::{ChangeDirection, ForkReport};

/// Writes a single line to the given writer.
pub fn write_line<W: Write>(writer: &mut W, line: &str) -> Result<(), BbError> {
    writeln!(writer, "{line}").map_err(|e| io_error(&e))
}

/// Writes one short reference per fork.
pub fn write_fork_listing<W: Write>(
    writer: &mut W,
    identity: &RepositoryIdentity,
    forks: &[RepositoryIdentity],
) -> Result<(), BbError> {
    if forks.is_empty() {
        return write_line(writer, &format!("no forks of {identity} found"));
    }
    for fork in forks {
        write_line(writer, &format!("bb:{fork}"))?;
    }
    Ok(())
}

/// Writes the outcome of comparing each fork.
///
/// Failed comparisons are reported inline; the remaining forks are still
/// listed.
pub fn write_fork_report<W: Write>(
    writer: &mut W,
    report: &ForkReport,
    direction: ChangeDirection,
) -> Result<(), BbError> {
    if report.is_empty() {
        return write_line(writer, "no forks found");
    }

    for outcome in report.outcomes() {
        write_line(writer, &format!("looking at bb:{}", outcome.fork))?;
        match &outcome.result {
            Ok(summary) if summary.count == 0 => {
                write_line(writer, &format!("no {direction} changesets found"))?;
            }
            Ok(summary) => {
                let plural = if summary.count == 1 { "" } else { "s" };
                write_line(
                    writer,
                    &format!("{} {direction} changeset{plural} found", summary.count),
                )?;
                write_line(writer, &summary.text)?;
            }
            Err(error) => write_line(writer, &format!("Error: {error}"))?,
        }
    }

    let failed = report.failures().count();
    if failed > 0 {
        write_line(
            writer,
            &format!(
                "{failed} of {} forks could not be compared",
                report.outcomes().len()
            ),
        )?;
    }
    Ok(())
}

/// Writes the followers of a repository, one per line.
pub fn write_followers<W: Write>(
    writer: &mut W,
    identity: &RepositoryIdentity,
    followers: &[String],
) -> Result<(), BbError> {
    if followers.is_empty() {
        return write_line(writer, &format!("{identity} has no followers"));
    }
    write_line(writer, &format!("followers of {identity}:"))?;
    for follower in followers {
        write_line(writer, &format!("  {follower}"))?;
    }
    Ok(())
}

/// Converts an I/O error to a [`BbError::Io`].
pub(crate) fn io_error(error: &io::Error) -> BbError {
    BbError::Io {
        message: error.to_string(),
    }
}
