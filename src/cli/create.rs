//! Repository creation operation.

use std::io::{self, Write};

use bbshort::BbConfig;
use bbshort::bitbucket::{
    BbError, CreateRepositoryOptions, HttpBitbucketGateway, RepositoryAdminGateway,
    RepositoryIdentity, StderrNoticeSink,
};
use bbshort::local::LocalWorkspace;
use tracing::info;

use super::output::write_line;
use super::resolve_repository;

/// Creates the current repository on Bitbucket.
///
/// # Errors
///
/// Returns [`BbError::Configuration`] without a password and
/// [`BbError::HttpStatusFailure`] when the service refuses.
pub fn run(config: &BbConfig, workspace: &LocalWorkspace) -> Result<(), BbError> {
    let identity = resolve_repository(config, workspace, &StderrNoticeSink)?;
    let gateway = HttpBitbucketGateway::new(config.api_url(), Some(config.credentials()?))?;
    let options = CreateRepositoryOptions {
        scm: config.scm().to_owned(),
        is_private: config.private,
        description: None,
    };

    let mut stdout = io::stdout().lock();
    run_with_gateway(&identity, &options, &gateway, &mut stdout)
}

/// Creates `identity` through `gateway` and prints its web address.
pub fn run_with_gateway<G, W>(
    identity: &RepositoryIdentity,
    options: &CreateRepositoryOptions,
    gateway: &G,
    writer: &mut W,
) -> Result<(), BbError>
where
    G: RepositoryAdminGateway,
    W: Write,
{
    info!(%identity, private = options.is_private, scm = %options.scm, "creating repository");
    gateway.create_repository(identity, options)?;

    let visibility = if options.is_private { "private" } else { "public" };
    write_line(
        writer,
        &format!("created {visibility} repository {identity}"),
    )?;
    write_line(writer, identity.web_url()?.as_str())
}
