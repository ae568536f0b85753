//! Application configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.bbshort.toml` in the current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `BB_USERNAME`, `BB_DEFAULT_METHOD`, ...
//! 4. **Command-line arguments** – `--username`/`-u`, `--reponame`/`-n`, ...
//!
//! # Configuration File
//!
//! ```toml
//! username = "birkenfeld"
//! default_method = "ssh"
//! ignore_forks = "someone/sphinx, other/sphinx-old"
//! ```

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::bitbucket::gateway::{DEFAULT_API_URL, DEFAULT_SCM};
use crate::bitbucket::{BbError, Credentials, TransportMethod};
use crate::forks::{ChangeDirection, parse_ignore_list};

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Print the full URL a short reference expands to.
    ResolveUrl,
    /// Rewrite a clone source and clone it.
    Clone,
    /// List forks, optionally comparing each with the local repository.
    Forks {
        /// Direction to compare in; `None` only lists.
        direction: Option<ChangeDirection>,
    },
    /// List the users following a repository.
    Followers,
    /// Create a repository on the service.
    Create,
    /// Print a web link to a file or revision.
    Link,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `BB_USERNAME` or `--username`: Bitbucket user name
/// - `BB_PASSWORD` or `--password`: Password embedded in HTTP(S) URLs
/// - `BB_DEFAULT_METHOD` or `--default-method`: `ssh`, `http` or `https`
/// - `BB_IGNORE_FORKS` or `--ignore-forks`: Forks skipped by listings
/// - `BB_API_URL` or `--api-url`: JSON API base URL
///
/// # Example
///
/// ```no_run
/// use bbshort::BbConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = BbConfig::load().expect("failed to load configuration");
/// let method = config.transport_method().expect("invalid default_method");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "BB",
    discovery(
        dotfile_name = ".bbshort.toml",
        config_file_name = "bbshort.toml",
        app_name = "bbshort"
    )
)]
pub struct BbConfig {
    /// Bitbucket user name.
    ///
    /// Used as the owner of references without one and as the
    /// authentication user. Falls back to the operating system account.
    #[ortho_config(cli_short = 'u')]
    pub username: Option<String>,

    /// Password embedded in HTTP(S) URLs and sent to the API.
    #[ortho_config(cli_short = 'p')]
    pub password: Option<String>,

    /// Transport used by the bare `bb:` scheme.
    ///
    /// One of `ssh`, `http` or `https`; defaults to `https`. The value is
    /// checked by [`BbConfig::validate`].
    #[ortho_config(cli_short = 'm')]
    pub default_method: Option<String>,

    /// Forks skipped by fork listings, as `owner/name` entries separated by
    /// commas or whitespace.
    #[ortho_config(cli_short = 'I')]
    pub ignore_forks: Option<String>,

    /// Base URL of the JSON API.
    #[ortho_config()]
    pub api_url: Option<String>,

    /// Version control system for created repositories.
    #[ortho_config()]
    pub scm: Option<String>,

    /// Repository name on Bitbucket; guessed from the working copy when
    /// absent.
    #[ortho_config(cli_short = 'n')]
    pub reponame: Option<String>,

    /// Short reference to expand, e.g. `bb+ssh:owner/name`.
    #[ortho_config()]
    pub url: Option<String>,

    /// Clone source; `bb:` short forms are accepted.
    #[ortho_config(cli_short = 'c')]
    pub clone: Option<String>,

    /// Clone destination directory.
    #[ortho_config(cli_short = 'd')]
    pub dest: Option<String>,

    /// Lists the forks of the repository.
    #[ortho_config(cli_short = 'f')]
    pub forks: bool,

    /// Looks for changesets incoming from each fork.
    #[ortho_config(cli_short = 'i')]
    pub incoming: bool,

    /// Looks for changesets outgoing to each fork.
    #[ortho_config(cli_short = 'o')]
    pub outgoing: bool,

    /// Lists the users following the repository.
    #[ortho_config()]
    pub followers: bool,

    /// Creates the repository on Bitbucket.
    #[ortho_config()]
    pub create: bool,

    /// Makes a created repository private.
    #[ortho_config()]
    pub private: bool,

    /// File to print a web link for.
    #[ortho_config(cli_short = 'l')]
    pub link: Option<String>,

    /// Revision used by the web link.
    #[ortho_config(cli_short = 'r')]
    pub rev: Option<String>,
}

impl Default for BbConfig {
    fn default() -> Self {
        Self {
            username: None,
            password: None,
            default_method: None,
            ignore_forks: None,
            api_url: None,
            scm: None,
            reponame: None,
            url: None,
            clone: None,
            dest: None,
            forks: false,
            incoming: false,
            outgoing: false,
            followers: false,
            create: false,
            private: false,
            link: None,
            rev: None,
        }
    }
}

impl BbConfig {
    /// Parses `default_method`, defaulting to HTTPS.
    ///
    /// # Errors
    ///
    /// Returns [`BbError::InvalidConfiguration`] naming the offending value.
    pub fn transport_method(&self) -> Result<TransportMethod, BbError> {
        self.default_method
            .as_deref()
            .map_or(Ok(TransportMethod::default()), str::parse)
    }

    /// Checks the configuration once after loading.
    ///
    /// # Errors
    ///
    /// Returns [`BbError::InvalidConfiguration`] for an unknown
    /// `default_method` and [`BbError::Configuration`] for conflicting
    /// operation flags.
    pub fn validate(&self) -> Result<(), BbError> {
        self.transport_method()?;
        if self.incoming && self.outgoing {
            return Err(BbError::Configuration {
                message: "--incoming and --outgoing cannot be combined".to_owned(),
            });
        }
        Ok(())
    }

    /// Resolves credentials from the configured user name and password.
    ///
    /// # Errors
    ///
    /// Returns [`BbError::Configuration`] when no user name can be found.
    pub fn credentials(&self) -> Result<Credentials, BbError> {
        Credentials::from_config(self.username.as_deref(), self.password.as_deref())
    }

    /// Identities listed in `ignore_forks`.
    #[must_use]
    pub fn ignored_forks(&self) -> std::collections::HashSet<String> {
        self.ignore_forks
            .as_deref()
            .map(parse_ignore_list)
            .unwrap_or_default()
    }

    /// JSON API base URL.
    #[must_use]
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Version control system for created repositories.
    #[must_use]
    pub fn scm(&self) -> &str {
        self.scm.as_deref().unwrap_or(DEFAULT_SCM)
    }

    /// Determines the operation mode based on provided configuration.
    ///
    /// Checked in order: clone, URL expansion, fork listing, followers,
    /// repository creation, web link.
    ///
    /// # Errors
    ///
    /// Returns [`BbError::Configuration`] when no operation was requested.
    pub fn operation_mode(&self) -> Result<OperationMode, BbError> {
        if self.clone.is_some() {
            Ok(OperationMode::Clone)
        } else if self.url.is_some() {
            Ok(OperationMode::ResolveUrl)
        } else if self.forks || self.incoming || self.outgoing {
            Ok(OperationMode::Forks {
                direction: self.fork_direction(),
            })
        } else if self.followers {
            Ok(OperationMode::Followers)
        } else if self.create {
            Ok(OperationMode::Create)
        } else if self.link.is_some() || self.rev.is_some() {
            Ok(OperationMode::Link)
        } else {
            Err(BbError::Configuration {
                message: "no operation requested (use --url, --clone, --forks, --followers, \
                          --create or --link)"
                    .to_owned(),
            })
        }
    }

    const fn fork_direction(&self) -> Option<ChangeDirection> {
        if self.incoming {
            Some(ChangeDirection::Incoming)
        } else if self.outgoing {
            Some(ChangeDirection::Outgoing)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests;
