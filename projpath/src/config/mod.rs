//! Root directory configuration.
//!
//! A [`RelativePath`](crate::RelativePath) only names its root. This module
//! maps the roots to real directories so a caller can turn a path into a
//! location on disk or move it between roots.
//!
//! This is the only part of the crate that touches the filesystem: the loader
//! checks for and reads config files. The path algebra in
//! [`crate::path`] never calls into it and does no I/O beyond reading the
//! working directory once.
//!
//! # Configuration Precedence
//!
//! Configuration is merged from the following sources (highest to lowest):
//!
//! 1. Environment variables (`PROJPATH_*`)
//! 2. Private project config (`projpath.local.yaml`)
//! 3. Project config (`projpath.yaml`)
//!
//! Project files are found by walking up from the working directory and
//! stopping at the first directory that contains either file.
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use projpath::config::ConfigLoader;
//! use std::path::Path;
//!
//! let config = ConfigLoader::load(Path::new("/path/to/project")).unwrap();
//! println!("project folder: {:?}", config.project_folder);
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use projpath::{RelativePath, RootConfig, RootFolder};
//! use std::path::{Path, PathBuf};
//!
//! let config = RootConfig {
//!     project_folder: Some(PathBuf::from("/work/app")),
//!     build_target_folder: Some(PathBuf::from("/work/app/Builds/Linux")),
//! };
//!
//! let source = RelativePath::new("Source/main.cpp", RootFolder::ProjectFolder);
//! assert_eq!(config.resolve(&source).unwrap(), Path::new("/work/app/Source/main.cpp"));
//!
//! let moved = config.rebase(&source, RootFolder::BuildTargetFolder).unwrap();
//! assert_eq!(moved.as_str(), "../../Source/main.cpp");
//! ```

pub mod environment;
pub mod loader;
pub mod schema;

// Re-export key types at module root
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use schema::RootConfig;
