//! Registry of the `bb` URL schemes and dispatch to transport factories.
//!
//! Four scheme tags are registered: the bare tag `bb`, whose transport comes
//! from configuration, and `bb+http`, `bb+https` and `bb+ssh`, which name
//! their transport explicitly. The registry is a plain value built once by
//! the caller and passed by reference to whatever needs to open a
//! repository.

use std::borrow::Cow;
use std::fmt;

use tracing::debug;

use super::error::BbError;
use super::fragment::SERVICE_SCHEME_TAG;
use super::transport::{Credentials, TransportMethod, build_url};

/// Handle to a remote repository produced by a transport factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRepository {
    method: TransportMethod,
    url: String,
    create: bool,
}

impl RemoteRepository {
    /// Creates a handle for `url` reached through `method`.
    #[must_use]
    pub fn new(method: TransportMethod, url: impl Into<String>, create: bool) -> Self {
        Self {
            method,
            url: url.into(),
            create,
        }
    }

    /// Transport used to reach the repository.
    #[must_use]
    pub const fn method(&self) -> TransportMethod {
        self.method
    }

    /// Fully qualified transport URL.
    #[must_use]
    pub const fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Whether the repository should be created on the remote side.
    #[must_use]
    pub const fn create(&self) -> bool {
        self.create
    }
}

/// Opens a repository handle for a fully qualified URL.
pub trait TransportFactory {
    /// Returns a handle for `url`, creating the repository when `create` is
    /// set.
    ///
    /// # Errors
    ///
    /// Returns whatever error the transport reports.
    fn instance(&self, url: &str, create: bool) -> Result<RemoteRepository, BbError>;
}

/// Factory that only records the URL; the host tool does the actual I/O.
#[derive(Debug, Clone, Copy)]
pub struct HandleFactory {
    method: TransportMethod,
}

impl HandleFactory {
    /// Creates a factory producing handles for `method`.
    #[must_use]
    pub const fn new(method: TransportMethod) -> Self {
        Self { method }
    }
}

impl TransportFactory for HandleFactory {
    fn instance(&self, url: &str, create: bool) -> Result<RemoteRepository, BbError> {
        Ok(RemoteRepository::new(self.method, url, create))
    }
}

/// One transport factory per [`TransportMethod`].
pub struct TransportFactories {
    http: Box<dyn TransportFactory>,
    https: Box<dyn TransportFactory>,
    ssh: Box<dyn TransportFactory>,
}

impl TransportFactories {
    /// Bundles one factory per method.
    #[must_use]
    pub fn new(
        http: Box<dyn TransportFactory>,
        https: Box<dyn TransportFactory>,
        ssh: Box<dyn TransportFactory>,
    ) -> Self {
        Self { http, https, ssh }
    }

    fn get(&self, method: TransportMethod) -> &dyn TransportFactory {
        match method {
            TransportMethod::Http => self.http.as_ref(),
            TransportMethod::Https => self.https.as_ref(),
            TransportMethod::Ssh => self.ssh.as_ref(),
        }
    }
}

impl Default for TransportFactories {
    fn default() -> Self {
        Self::new(
            Box::new(HandleFactory::new(TransportMethod::Http)),
            Box::new(HandleFactory::new(TransportMethod::Https)),
            Box::new(HandleFactory::new(TransportMethod::Ssh)),
        )
    }
}

impl fmt::Debug for TransportFactories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportFactories").finish_non_exhaustive()
    }
}

/// Handler registered for a scheme tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeHandler {
    /// The bare tag: transport comes from `default_method`.
    Auto,
    /// A `bb+<method>` tag.
    Method(TransportMethod),
}

/// Maps scheme tags to handlers and handlers to factories.
#[derive(Debug)]
pub struct SchemeRegistry {
    default_method: TransportMethod,
    factories: TransportFactories,
}

impl SchemeRegistry {
    /// Creates the registry with the validated default transport.
    #[must_use]
    pub const fn new(default_method: TransportMethod, factories: TransportFactories) -> Self {
        Self {
            default_method,
            factories,
        }
    }

    /// All registered scheme tags.
    #[must_use]
    pub fn tags() -> Vec<String> {
        std::iter::once(SERVICE_SCHEME_TAG.to_owned())
            .chain(
                TransportMethod::ALL
                    .iter()
                    .map(|method| format!("{SERVICE_SCHEME_TAG}+{method}")),
            )
            .collect()
    }

    /// Looks up the handler for a scheme tag such as `bb+ssh`.
    #[must_use]
    pub fn handler(tag: &str) -> Option<SchemeHandler> {
        if tag == SERVICE_SCHEME_TAG {
            return Some(SchemeHandler::Auto);
        }
        let method = tag
            .strip_prefix(SERVICE_SCHEME_TAG)?
            .strip_prefix('+')?
            .parse()
            .ok()?;
        Some(SchemeHandler::Method(method))
    }

    /// Opens the repository named by a `bb` scheme reference.
    ///
    /// # Errors
    ///
    /// Returns [`BbError::UnresolvedReference`] when the reference's scheme
    /// is not one of the registered tags or it has no path, and any error
    /// from the selected transport factory.
    pub fn open_repository(
        &self,
        raw_reference: &str,
        create: bool,
        credentials: &Credentials,
    ) -> Result<RemoteRepository, BbError> {
        let handler = raw_reference
            .split_once(':')
            .and_then(|(tag, _)| Self::handler(tag))
            .ok_or_else(|| BbError::unresolved(raw_reference))?;

        self.dispatch(handler, raw_reference, create, credentials)
    }

    fn dispatch(
        &self,
        handler: SchemeHandler,
        raw_reference: &str,
        create: bool,
        credentials: &Credentials,
    ) -> Result<RemoteRepository, BbError> {
        match handler {
            SchemeHandler::Auto => {
                let method = self.default_method.upgraded();
                debug!(%method, reference = raw_reference, "dispatching bare scheme tag");
                self.dispatch(SchemeHandler::Method(method), raw_reference, create, credentials)
            }
            SchemeHandler::Method(method) => {
                let url = build_url(raw_reference, credentials, &method.template())?;
                self.factories.get(method).instance(&url, create)
            }
        }
    }
}

/// Rewrites a bare `bb:rest` clone source into `bb://rest`.
///
/// Sources that already contain `://`, lack a `:` or do not start with the
/// scheme tag are returned unchanged.
#[must_use]
pub fn rewrite_clone_source(source: &str) -> Cow<'_, str> {
    if source.starts_with(SERVICE_SCHEME_TAG) && source.contains(':') && !source.contains("://") {
        Cow::Owned(source.replacen(':', "://", 1))
    } else {
        Cow::Borrowed(source)
    }
}
