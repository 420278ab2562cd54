//! Process-wide cached working directory.
//!
//! File name queries on a [`RelativePath`](super::RelativePath) resolve the
//! path against the working directory so segment splitting can be left to
//! [`std::path`]. Those queries are frequent, so the directory is read once
//! per process and shared afterwards.

use std::env;
use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};
use std::sync::OnceLock;

use crate::error::Result;

static CURRENT_WORKING_DIRECTORY: OnceLock<PathBuf> = OnceLock::new();

/// Read the working directory of the process, without caching.
///
/// # Errors
///
/// Returns an error if the directory cannot be determined, for example
/// because it was removed or permissions are missing.
pub fn read_working_directory() -> Result<PathBuf> {
    Ok(env::current_dir()?)
}

/// The working directory captured at first use.
///
/// The directory is read exactly once, even when several threads race on the
/// first call. If it cannot be read the filesystem root is cached instead and
/// a warning is logged, so callers always get a directory back.
///
/// # Examples
///
/// ```
/// use projpath::path::working_dir::current_working_directory;
///
/// let first = current_working_directory();
/// let second = current_working_directory();
/// assert!(std::ptr::eq(first, second));
/// ```
#[must_use]
pub fn current_working_directory() -> &'static Path {
    CURRENT_WORKING_DIRECTORY.get_or_init(|| match read_working_directory() {
        Ok(dir) => {
            log::debug!("caching working directory {}", dir.display());
            dir
        }
        Err(err) => {
            log::warn!("cannot read working directory, using filesystem root: {err}");
            PathBuf::from(MAIN_SEPARATOR_STR)
        }
    })
}
