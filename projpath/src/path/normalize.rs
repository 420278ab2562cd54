//! Path string normalization.
//!
//! This module provides the string-level primitives the path algebra is built
//! on:
//! - Converting between forward-slash and Windows separators
//! - Deciding whether a path string is already absolute
//! - Joining a relative string onto an absolute directory
//! - Expanding tilde (~) to the home directory

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Render a path string with forward slashes.
///
/// # Examples
///
/// ```
/// use projpath::path::normalize::to_unix_style;
///
/// assert_eq!(to_unix_style("src\\gui\\window.cpp"), "src/gui/window.cpp");
/// assert_eq!(to_unix_style("already/unix"), "already/unix");
/// ```
#[must_use]
pub fn to_unix_style(path: &str) -> String {
    path.replace('\\', "/")
}

/// Render a path string with Windows separators.
///
/// # Examples
///
/// ```
/// use projpath::path::normalize::to_windows_style;
///
/// assert_eq!(to_windows_style("src/gui/window.cpp"), "src\\gui\\window.cpp");
/// ```
#[must_use]
pub fn to_windows_style(path: &str) -> String {
    path.replace('/', "\\")
}

/// Check whether a path string already denotes an absolute location.
///
/// Besides rooted paths this accepts anything a generated project file can
/// resolve without a base directory, on any host:
/// - a leading `/` or `\`
/// - a drive specifier such as `C:`
/// - a home-relative path (`~`)
/// - a build variable (`$(SRCROOT)`, `${ROOT}`, `$HOME`)
/// - a network share (`smb:`, any case)
///
/// # Examples
///
/// ```
/// use projpath::path::normalize::is_absolute_path;
///
/// assert!(is_absolute_path("/usr/include"));
/// assert!(is_absolute_path("C:\\SDKs\\vst3"));
/// assert!(is_absolute_path("$(SRCROOT)/Source"));
/// assert!(is_absolute_path("~/SDKs"));
/// assert!(!is_absolute_path("Source/main.cpp"));
/// assert!(!is_absolute_path(""));
/// ```
#[must_use]
pub fn is_absolute_path(path: &str) -> bool {
    if path.starts_with(['/', '\\', '$', '~']) {
        return true;
    }

    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        return true;
    }

    bytes.len() >= 4 && bytes[..4].eq_ignore_ascii_case(b"smb:")
}

/// Join a relative path string onto a directory, resolving `.` and `..`
/// lexically.
///
/// Absolute components in `relative` replace the directory, as with
/// [`Path::join`]. A `..` at the filesystem root stays at the root. Nothing
/// is read from disk.
///
/// # Examples
///
/// ```
/// use projpath::path::normalize::join_lexically;
/// use std::path::{Path, PathBuf};
///
/// let joined = join_lexically(Path::new("/work/app"), "../lib/./core.h");
/// assert_eq!(joined, PathBuf::from("/work/lib/core.h"));
/// ```
#[must_use]
pub fn join_lexically(dir: &Path, relative: &str) -> PathBuf {
    let mut result = dir.to_path_buf();

    for component in Path::new(relative).components() {
        match component {
            Component::Prefix(prefix) => {
                result = PathBuf::from(prefix.as_os_str());
            }
            Component::RootDir => {
                result.push(component);
            }
            Component::CurDir => {}
            Component::ParentDir => {
                result.pop();
            }
            Component::Normal(c) => {
                result.push(c);
            }
        }
    }

    result
}

/// Replace a leading `~` in a configured folder with the home directory.
///
/// Only the current user's home is known: `~`, `~/dir` and `~\dir` expand,
/// while `~name` is rejected. Paths without a leading `~` come back as they
/// are.
///
/// # Errors
///
/// [`Error::InvalidPath`] when the folder is not UTF-8, names another user's
/// home, or the home directory is unknown.
///
/// # Examples
///
/// ```
/// use projpath::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let sdks = expand_tilde(Path::new("~/SDKs")).unwrap();
/// assert!(sdks.is_absolute());
/// assert!(sdks.ends_with("SDKs"));
///
/// assert_eq!(expand_tilde(Path::new("/opt/sdk")).unwrap(), Path::new("/opt/sdk"));
/// ```
pub fn expand_tilde(folder: &Path) -> Result<PathBuf> {
    let invalid = |reason: &str| Error::InvalidPath {
        path: folder.to_path_buf(),
        reason: reason.to_string(),
    };

    let text = folder
        .to_str()
        .ok_or_else(|| invalid("folder is not valid UTF-8"))?;
    let Some(rest) = text.strip_prefix('~') else {
        return Ok(folder.to_path_buf());
    };

    let below_home = match rest.chars().next() {
        None => "",
        Some('/' | '\\') => &rest[1..],
        Some(_) => return Err(invalid("only the current user's home (~) can be expanded")),
    };

    let home = home::home_dir().ok_or_else(|| invalid("home directory is unknown"))?;
    Ok(if below_home.is_empty() {
        home
    } else {
        home.join(below_home)
    })
}
