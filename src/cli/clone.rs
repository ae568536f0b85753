//! Cloning from short references.

use std::process::Command;

use bbshort::BbConfig;
use bbshort::bitbucket::{BbError, SchemeRegistry, redact_password, rewrite_clone_source};
use tracing::{debug, info};

/// Host tool that performs the clone.
const HG_EXECUTABLE: &str = "hg";

/// Clones `--clone` into `--dest` with the host tool.
///
/// # Errors
///
/// Returns [`BbError::Configuration`] if `--clone` is missing,
/// [`BbError::UnresolvedReference`] for an unusable `bb` reference and
/// [`BbError::RemoteOperationFailure`] when the clone fails.
pub fn run(config: &BbConfig, registry: &SchemeRegistry) -> Result<(), BbError> {
    run_with_cloner(config, registry, hg_clone)
}

/// Resolves the clone source and hands it to `clone`.
///
/// Sources that are not `bb` references are passed through unchanged.
pub fn run_with_cloner<F>(
    config: &BbConfig,
    registry: &SchemeRegistry,
    clone: F,
) -> Result<(), BbError>
where
    F: FnOnce(&str, Option<&str>) -> Result<(), BbError>,
{
    let source = config.clone.as_deref().ok_or_else(|| BbError::Configuration {
        message: "a clone source is required (use --clone)".to_owned(),
    })?;
    let rewritten = rewrite_clone_source(source);

    let is_short_reference = rewritten
        .split_once(':')
        .and_then(|(tag, _)| SchemeRegistry::handler(tag))
        .is_some();

    let url = if is_short_reference {
        let credentials = config.credentials()?;
        registry
            .open_repository(&rewritten, false, &credentials)?
            .url()
            .to_owned()
    } else {
        debug!(source, "clone source is not a short reference");
        rewritten.into_owned()
    };

    info!(source, dest = config.dest.as_deref(), "cloning");
    clone(&url, config.dest.as_deref())
}

fn hg_clone(url: &str, dest: Option<&str>) -> Result<(), BbError> {
    clone_with_executable(HG_EXECUTABLE, url, dest)
}

/// Runs `<executable> clone URL [DEST]`.
///
/// Errors name the URL without its password.
fn clone_with_executable(executable: &str, url: &str, dest: Option<&str>) -> Result<(), BbError> {
    let failure = |message: String| BbError::RemoteOperationFailure {
        target: redact_password(url),
        message,
    };

    let status = Command::new(executable)
        .arg("clone")
        .arg(url)
        .args(dest)
        .status()
        .map_err(|error| failure(format!("unable to invoke {executable}: {error}")))?;

    if status.success() {
        Ok(())
    } else {
        Err(failure(format!("{executable} clone exited with {status}")))
    }
}
