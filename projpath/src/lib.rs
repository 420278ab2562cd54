#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # projpath
//!
//! Root-anchored relative paths for cross-platform project file generation.
//!
//! A project generator has to describe file locations before it knows where
//! the generated project will live on disk. This library provides a path type
//! that is relative to a named logical root (the project folder or the build
//! target folder) and a small algebra over it: changing extensions, walking to
//! the parent, appending children and re-rooting against a different base.
//!
//! ## Core Types
//!
//! - [`RelativePath`]: a forward-slash path string tagged with its root
//! - [`RootFolder`]: the logical root a path is relative to
//! - [`RootConfig`]: maps roots to real directories when a caller needs to
//!   resolve a path on disk
//! - [`Error`] and [`Result`]: Error handling types
//!
//! ## Examples
//!
//! ```
//! use projpath::{RelativePath, RootFolder};
//!
//! let source = RelativePath::new("src\\main.cpp", RootFolder::ProjectFolder);
//! assert_eq!(source.to_unix_style(), "src/main.cpp");
//!
//! let header = source.with_file_extension("h");
//! assert_eq!(header.to_unix_style(), "src/main.h");
//! assert_eq!(header.root(), RootFolder::ProjectFolder);
//!
//! let helper = source.parent_directory().child_file("util/helpers.cpp");
//! assert_eq!(helper.to_unix_style(), "src/util/helpers.cpp");
//! ```

pub mod config;
pub mod error;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{ConfigLoader, EnvironmentConfig, RootConfig};
pub use error::{Error, Result};
pub use path::{RelativePath, RootFolder};
