//! bbshort CLI entrypoint for Bitbucket short references.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use bbshort::bitbucket::{BbError, SchemeRegistry, TransportFactories};
use bbshort::local::{LocalWorkspace, discover_workspace};
use bbshort::{BbConfig, OperationMode};
use ortho_config::OrthoConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "abort: {error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<(), BbError> {
    let config = load_config()?;
    config.validate()?;

    let mode = config.operation_mode()?;
    debug!(?mode, "selected operation mode");

    match mode {
        OperationMode::ResolveUrl => cli::resolve_url::run(&config, &build_registry(&config)?),
        OperationMode::Clone => cli::clone::run(&config, &build_registry(&config)?),
        OperationMode::Forks { direction } => {
            cli::forks::run(&config, &current_workspace()?, direction)
        }
        OperationMode::Followers => cli::followers::run(&config, &current_workspace()?),
        OperationMode::Create => cli::create::run(&config, &current_workspace()?),
        OperationMode::Link => cli::link::run(&config, &current_workspace()?),
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`BbError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<BbConfig, BbError> {
    BbConfig::load().map_err(|error| BbError::Configuration {
        message: error.to_string(),
    })
}

fn build_registry(config: &BbConfig) -> Result<SchemeRegistry, BbError> {
    Ok(SchemeRegistry::new(
        config.transport_method()?,
        TransportFactories::default(),
    ))
}

fn current_workspace() -> Result<LocalWorkspace, BbError> {
    let cwd = env::current_dir().map_err(|error| BbError::Io {
        message: error.to_string(),
    })?;
    discover_workspace(&cwd).map_err(BbError::from)
}
