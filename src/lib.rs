//! bbshort library crate providing Bitbucket short references.
//!
//! The library expands `bb:`, `bb+http:`, `bb+https:` and `bb+ssh:`
//! references into full repository URLs, infers which repository a working
//! copy refers to, and wraps the Bitbucket JSON API for fork, follower and
//! repository creation commands.

pub mod bitbucket;
pub mod config;
pub mod forks;
pub mod local;

pub use bitbucket::{
    BbError, Credentials, HttpBitbucketGateway, RepositoryIdentity, SchemeRegistry,
    TransportMethod, build_url, parse_path_fragment, resolve_identity, rewrite_clone_source,
};
pub use config::{BbConfig, OperationMode};
