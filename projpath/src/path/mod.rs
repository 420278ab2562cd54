//! Root-anchored relative paths.
//!
//! This module provides the [`RelativePath`] value type together with the
//! string primitives it is built on.
//!
//! # Key Concepts
//!
//! ## Roots
//!
//! A [`RootFolder`] names the logical directory a path is relative to. The
//! real location of a root is only known to the project generator (see
//! [`RootConfig`](crate::config::RootConfig)), so paths carry the tag instead
//! of an absolute prefix.
//!
//! ## Normalization
//!
//! Paths are stored with forward slashes regardless of the platform. The
//! [`normalize`] module converts between forward-slash and Windows forms and
//! decides whether a string is already absolute. Absolute detection is wider
//! than [`Path::is_absolute`](std::path::Path::is_absolute): drive specifiers,
//! home-relative paths and build variables such as `$(SRCROOT)` all count,
//! because a generated project file can use them on any host.
//!
//! ## Relative computation
//!
//! [`relationship::relative_path_from`] computes how to reach one absolute
//! location from another. Locations that share nothing but the filesystem
//! root are kept absolute.
//!
//! # Examples
//!
//! ```
//! use projpath::path::{RelativePath, RootFolder};
//! use std::path::Path;
//!
//! let file = RelativePath::from_file(
//!     Path::new("/work/app/src/main.cpp"),
//!     Path::new("/work/app"),
//!     RootFolder::ProjectFolder,
//! );
//! assert_eq!(file.to_unix_style(), "src/main.cpp");
//!
//! let from_build = file.rebased(
//!     Path::new("/work/app"),
//!     Path::new("/work/app/Builds/Linux"),
//!     RootFolder::BuildTargetFolder,
//! );
//! assert_eq!(from_build.to_unix_style(), "../../src/main.cpp");
//! assert_eq!(from_build.root(), RootFolder::BuildTargetFolder);
//! ```

pub mod normalize;
pub mod relationship;
mod relative;
mod types;
pub mod working_dir;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use relative::RelativePath;
pub use types::RootFolder;
