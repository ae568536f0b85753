//! Web link operation.

use std::env;
use std::io::{self, Write};

use bbshort::BbConfig;
use bbshort::bitbucket::{BbError, RepositoryIdentity, StderrNoticeSink, web_link};
use bbshort::local::LocalWorkspace;
use camino::{Utf8Path, Utf8PathBuf};

use super::output::write_line;
use super::resolve_repository;

/// Prints a web link to `--link` at `--rev` in the current repository.
///
/// A relative file is taken relative to the current directory inside the
/// working copy.
///
/// # Errors
///
/// Returns [`BbError::UnresolvedReference`] when the repository cannot be
/// named and [`BbError::Io`] when the current directory is unusable.
pub fn run(config: &BbConfig, workspace: &LocalWorkspace) -> Result<(), BbError> {
    let identity = resolve_repository(config, workspace, &StderrNoticeSink)?;
    let file = match config.link.as_deref() {
        Some(file) => Some(repository_file(workspace.root(), &current_dir()?, file)),
        None => None,
    };

    let mut stdout = io::stdout().lock();
    run_with_writer(&identity, config.rev.as_deref(), file.as_deref(), &mut stdout)
}

/// Writes the web link for `file` at `revision` to `writer`.
pub fn run_with_writer<W: Write>(
    identity: &RepositoryIdentity,
    revision: Option<&str>,
    file: Option<&str>,
    writer: &mut W,
) -> Result<(), BbError> {
    let link = web_link(identity, revision, file)?;
    write_line(writer, link.as_str())
}

fn current_dir() -> Result<Utf8PathBuf, BbError> {
    let cwd = env::current_dir().map_err(|error| BbError::Io {
        message: error.to_string(),
    })?;
    Utf8PathBuf::from_path_buf(cwd).map_err(|path| BbError::Io {
        message: format!("current directory is not UTF-8: {}", path.display()),
    })
}

/// Path of `file` relative to the working copy root.
///
/// Files outside the working copy are used as given.
fn repository_file(root: &Utf8Path, cwd: &Utf8Path, file: &str) -> String {
    let candidate = cwd.join(file);
    candidate
        .strip_prefix(root)
        .map_or_else(|_| file.to_owned(), |relative| relative.as_str().replace('\\', "/"))
}
