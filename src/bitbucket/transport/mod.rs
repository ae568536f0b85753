//! Transport methods, credentials and composition of full clone/push URLs.

use std::env;
use std::fmt;
use std::str::FromStr;

use tracing::debug;
use url::Url;

use super::error::BbError;
use super::fragment::SERVICE_DOMAIN;

/// Protocol used to reach a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransportMethod {
    /// Plain HTTP.
    Http,
    /// HTTP over TLS.
    #[default]
    Https,
    /// SSH as the service's fixed `hg` user.
    Ssh,
}

impl TransportMethod {
    /// All methods, in registration order.
    pub const ALL: [Self; 3] = [Self::Http, Self::Https, Self::Ssh];

    /// Lower-case configuration name of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
            Self::Ssh => "ssh",
        }
    }

    /// Method actually used when the bare scheme tag selects the handler.
    ///
    /// `http` is upgraded to `https`.
    #[must_use]
    pub const fn upgraded(self) -> Self {
        match self {
            Self::Http | Self::Https => Self::Https,
            Self::Ssh => Self::Ssh,
        }
    }

    /// URL template for this method on the hosted service.
    #[must_use]
    pub fn template(self) -> UrlTemplate {
        match self {
            Self::Http => UrlTemplate::new(format!("http://{{auth}}{SERVICE_DOMAIN}/{{path}}")),
            Self::Https => UrlTemplate::new(format!("https://{{auth}}{SERVICE_DOMAIN}/{{path}}")),
            Self::Ssh => UrlTemplate::new(format!("ssh://hg@{SERVICE_DOMAIN}/{{path}}")),
        }
    }
}

impl fmt::Display for TransportMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMethod {
    type Err = BbError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            "ssh" => Ok(Self::Ssh),
            other => Err(BbError::InvalidConfiguration {
                value: other.to_owned(),
            }),
        }
    }
}

/// A URL pattern with `{auth}` and `{path}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate(String);

impl UrlTemplate {
    /// Wraps a pattern such as `https://{auth}bitbucket.org/{path}`.
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    fn render(&self, auth: &str, path: &str) -> String {
        self.0.replace("{auth}", auth).replace("{path}", path)
    }
}

/// Username and optional password used for the service.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: Option<String>,
}

impl Credentials {
    /// Builds credentials from configured values.
    ///
    /// Without a configured username the local account name is used.
    ///
    /// # Errors
    ///
    /// Returns [`BbError::Configuration`] when neither the configuration nor
    /// the environment provides a username.
    pub fn from_config(username: Option<&str>, password: Option<&str>) -> Result<Self, BbError> {
        let resolved = username
            .filter(|name| !name.is_empty())
            .map(ToOwned::to_owned)
            .or_else(os_username)
            .ok_or_else(|| BbError::Configuration {
                message: "no username configured and none found in the environment".to_owned(),
            })?;

        Ok(Self {
            username: resolved,
            password: password.map(ToOwned::to_owned),
        })
    }

    /// Creates credentials directly.
    #[must_use]
    pub fn new(username: impl Into<String>, password: Option<String>) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    /// The username.
    #[must_use]
    pub const fn username(&self) -> &str {
        self.username.as_str()
    }

    /// The password, if one is configured.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// `user:password@` or `user@`.
    #[must_use]
    pub fn auth_fragment(&self) -> String {
        match &self.password {
            Some(password) => format!("{}:{password}@", self.username),
            None => format!("{}@", self.username),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Login name of the local account, as `getpass` would find it.
fn os_username() -> Option<String> {
    ["LOGNAME", "USER", "LNAME", "USERNAME"]
        .into_iter()
        .filter_map(|key| env::var(key).ok())
        .find(|value| !value.is_empty())
}

/// Normalises the path part of a raw reference.
///
/// Splits on the first `:`, drops a leading `//` and surrounding `/`, and
/// prefixes `username/` when no owner is present.
///
/// # Errors
///
/// Returns [`BbError::UnresolvedReference`] when the reference has no `:` or
/// an empty path.
pub fn reference_path(raw_reference: &str, username: &str) -> Result<String, BbError> {
    let (_scheme, raw_path) = raw_reference
        .split_once(':')
        .ok_or_else(|| BbError::unresolved(raw_reference))?;
    let path = raw_path
        .strip_prefix("//")
        .unwrap_or(raw_path)
        .trim_matches('/');

    if path.is_empty() {
        return Err(BbError::unresolved(raw_reference));
    }

    if path.contains('/') {
        Ok(path.to_owned())
    } else {
        Ok(format!("{username}/{path}"))
    }
}

/// Builds the full transport URL for a raw short reference.
///
/// The path always ends with exactly one `/`, as the service expects.
///
/// # Errors
///
/// Returns [`BbError::UnresolvedReference`] when the reference has no path.
pub fn build_url(
    raw_reference: &str,
    credentials: &Credentials,
    template: &UrlTemplate,
) -> Result<String, BbError> {
    let path = reference_path(raw_reference, credentials.username())?;
    let url = template.render(&credentials.auth_fragment(), &format!("{path}/"));

    debug!(reference = raw_reference, path = %path, "built transport URL");
    Ok(url)
}

/// Drops the password from a URL's userinfo so it can be shown to users.
///
/// Strings that are not URLs, or carry no password, are returned unchanged.
#[must_use]
pub fn redact_password(url: &str) -> String {
    match Url::parse(url) {
        Ok(mut parsed) if parsed.password().is_some() => {
            if parsed.set_password(None).is_err() {
                return url.to_owned();
            }
            parsed.into()
        }
        _ => url.to_owned(),
    }
}
