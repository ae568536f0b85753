//! Bitbucket short references, URL building and API access.
//!
//! The resolver and URL builder are pure: they never perform I/O and only
//! report guessed names through a [`NoticeSink`]. Network access happens in
//! the transport factories and the [`gateway`] implementations.

pub mod error;
pub mod fragment;
pub mod gateway;
pub mod identity;
pub mod notice;
pub mod resolver;
pub mod scheme;
pub mod transport;
pub mod weblink;

pub use error::BbError;
pub use fragment::{SERVICE_DOMAIN, SERVICE_SCHEME_TAG, parse_path_fragment};
pub use gateway::{
    CreateRepositoryOptions, FollowerGateway, ForkGateway, HttpBitbucketGateway,
    RepositoryAdminGateway,
};
pub use identity::RepositoryIdentity;
pub use notice::{Notice, NoopNoticeSink, NoticeSink, StderrNoticeSink};
pub use resolver::{ConfiguredPath, ResolveRequest, resolve_identity};
pub use scheme::{
    HandleFactory, RemoteRepository, SchemeHandler, SchemeRegistry, TransportFactories,
    TransportFactory, rewrite_clone_source,
};
pub use transport::{Credentials, TransportMethod, UrlTemplate, build_url, redact_password};
pub use weblink::web_link;
