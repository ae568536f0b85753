//! Local working copy discovery.
//!
//! Finds the Mercurial working copy containing a directory and reads the
//! named paths configured for it, so commands can infer which Bitbucket
//! repository they refer to.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use bbshort::local::discover_workspace;
//!
//! let workspace = discover_workspace(Path::new(".")).expect("discovery failed");
//! println!("{} paths configured", workspace.configured_paths().len());
//! ```

mod error;
mod paths;
mod workspace;

pub use error::LocalDiscoveryError;
pub use paths::parse_paths_section;
pub use workspace::{LocalWorkspace, discover_workspace};
