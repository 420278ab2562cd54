//! Relative path computation between absolute locations.
//!
//! This module answers "how do I reach `target` from `base`?" as a
//! forward-slash string. The computation is lexical: no symlinks are followed
//! and neither location has to exist.

use std::path::{Component, Path};

use crate::path::normalize::{join_lexically, to_unix_style};

/// Check whether two locations are close enough to be expressed relative to
/// each other.
///
/// The locations qualify when their common leading text, compared without
/// ASCII case and ignoring `/` and `:`, is not empty. Two paths on different
/// drives, or in trees that only share the filesystem root, do not qualify.
///
/// # Examples
///
/// ```
/// use projpath::path::relationship::should_be_relative;
///
/// assert!(should_be_relative("/work/app/src", "/work/app/Builds"));
/// assert!(!should_be_relative("/opt/sdk", "/home/dev/app"));
/// assert!(!should_be_relative("C:\\sdk", "D:\\app"));
/// ```
#[must_use]
pub fn should_be_relative(path1: &str, path2: &str) -> bool {
    let path1 = to_unix_style(path1);
    let path2 = to_unix_style(path2);

    path1
        .chars()
        .zip(path2.chars())
        .take_while(|(a, b)| a.eq_ignore_ascii_case(b))
        .any(|(c, _)| c != '/' && c != ':')
}

/// Compute the forward-slash path that leads from `base` to `target`.
///
/// Both arguments are expected to be absolute directories or files. `.` and
/// `..` components are resolved lexically first, and components are compared
/// without ASCII case, like [`should_be_relative`] compares them. When
/// [`should_be_relative`] rejects the pair, `target` is returned unchanged in
/// unix style. Identical locations give `"."`.
///
/// # Examples
///
/// ```
/// use projpath::path::relationship::relative_path_from;
/// use std::path::Path;
///
/// let rel = relative_path_from(
///     Path::new("/work/app/src/main.cpp"),
///     Path::new("/work/app/Builds/Linux"),
/// );
/// assert_eq!(rel, "../../src/main.cpp");
///
/// let rel = relative_path_from(Path::new("/work/app"), Path::new("/work/app"));
/// assert_eq!(rel, ".");
///
/// // Nothing in common but the root: stays absolute
/// let rel = relative_path_from(Path::new("/opt/sdk/vst.h"), Path::new("/work/app"));
/// assert_eq!(rel, "/opt/sdk/vst.h");
/// ```
#[must_use]
pub fn relative_path_from(target: &Path, base: &Path) -> String {
    let target_str = to_unix_style(&target.to_string_lossy());
    let base_str = to_unix_style(&base.to_string_lossy());

    if !should_be_relative(&target_str, &base_str) {
        log::trace!("keeping {target_str} absolute, nothing in common with {base_str}");
        return target_str;
    }

    let target = join_lexically(Path::new(""), &target_str);
    let base = join_lexically(Path::new(""), &base_str);
    let target_parts: Vec<Component<'_>> = target.components().collect();
    let base_parts: Vec<Component<'_>> = base.components().collect();

    let common = target_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a.as_os_str().eq_ignore_ascii_case(b.as_os_str()))
        .count();

    let mut parts: Vec<String> = Vec::new();
    parts.extend(base_parts[common..].iter().map(|_| "..".to_string()));
    parts.extend(
        target_parts[common..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}
