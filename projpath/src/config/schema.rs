//! Configuration schema definitions.
//!
//! This module defines [`RootConfig`], the mapping from logical roots to
//! directories, and the operations that need it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::normalize::{expand_tilde, join_lexically};
use crate::path::{RelativePath, RootFolder};

/// Directories of the logical roots.
///
/// Both folders are optional; a root without a directory cannot be resolved.
/// Folders may start with `~`, which is expanded when they are used.
///
/// # Examples
///
/// ```
/// use projpath::{RootConfig, RootFolder};
/// use std::path::{Path, PathBuf};
///
/// let config = RootConfig {
///     project_folder: Some(PathBuf::from("/work/app")),
///     ..Default::default()
/// };
/// assert_eq!(config.folder(RootFolder::ProjectFolder), Some(Path::new("/work/app")));
/// assert_eq!(config.folder(RootFolder::BuildTargetFolder), None);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RootConfig {
    /// Directory of the generated project.
    pub project_folder: Option<PathBuf>,

    /// Directory of the active build target.
    pub build_target_folder: Option<PathBuf>,
}

impl RootConfig {
    /// The configured directory of `root`, as written.
    ///
    /// [`RootFolder::Unknown`] never has a directory.
    #[must_use]
    pub fn folder(&self, root: RootFolder) -> Option<&Path> {
        match root {
            RootFolder::Unknown => None,
            RootFolder::ProjectFolder => self.project_folder.as_deref(),
            RootFolder::BuildTargetFolder => self.build_target_folder.as_deref(),
        }
    }

    /// Overlay the folders set in `other` onto this configuration.
    pub fn merge(&mut self, other: &RootConfig) {
        if let Some(folder) = &other.project_folder {
            self.project_folder = Some(folder.clone());
        }
        if let Some(folder) = &other.build_target_folder {
            self.build_target_folder = Some(folder.clone());
        }
    }

    /// The usable directory of `root`: tilde expanded and absolute.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnresolvedRoot`] if the root has no directory, or
    /// [`Error::InvalidPath`] if the directory is not absolute or its tilde
    /// cannot be expanded.
    pub fn resolved_folder(&self, root: RootFolder) -> Result<PathBuf> {
        let folder = self.folder(root).ok_or(Error::UnresolvedRoot { root })?;
        let folder = expand_tilde(folder)?;

        if !folder.is_absolute() {
            return Err(Error::InvalidPath {
                path: folder,
                reason: format!("folder for root '{root}' must be absolute"),
            });
        }

        Ok(folder)
    }

    /// Check that every configured folder is usable.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`resolved_folder`](Self::resolved_folder)
    /// for a configured root.
    pub fn validate(&self) -> Result<()> {
        for root in [RootFolder::ProjectFolder, RootFolder::BuildTargetFolder] {
            if self.folder(root).is_some() {
                self.resolved_folder(root)?;
            }
        }
        Ok(())
    }

    /// Turn a relative path into a location on disk.
    ///
    /// Absolute paths are returned as stored, with a leading `~` expanded.
    /// Relative paths are joined onto the directory of their root, resolving
    /// `.` and `..` lexically.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is relative and its root cannot be
    /// resolved, see [`resolved_folder`](Self::resolved_folder).
    pub fn resolve(&self, path: &RelativePath) -> Result<PathBuf> {
        if path.is_absolute() {
            return expand_tilde(Path::new(path.as_str()));
        }

        let folder = self.resolved_folder(path.root())?;
        let resolved = join_lexically(&folder, path.as_str());
        log::debug!("resolved {path} ({}) to {}", path.root(), resolved.display());
        Ok(resolved)
    }

    /// Move a path from its own root to `new_root`.
    ///
    /// Absolute paths are only re-tagged and need no configured folders.
    ///
    /// # Errors
    ///
    /// Returns an error if either root cannot be resolved.
    pub fn rebase(&self, path: &RelativePath, new_root: RootFolder) -> Result<RelativePath> {
        if path.is_absolute() {
            return Ok(RelativePath::new(path.as_str(), new_root));
        }

        let original = self.resolved_folder(path.root())?;
        let target = self.resolved_folder(new_root)?;
        Ok(path.rebased(&original, &target, new_root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RootConfig {
        RootConfig {
            project_folder: Some(PathBuf::from("/work/app")),
            build_target_folder: Some(PathBuf::from("/work/app/Builds/Linux")),
        }
    }

    #[test]
    fn test_default_has_no_folders() {
        let config = RootConfig::default();
        for root in RootFolder::ALL {
            assert!(config.folder(root).is_none());
        }
    }

    #[test]
    fn test_unknown_root_never_resolves() {
        let err = sample().resolved_folder(RootFolder::Unknown).unwrap_err();
        assert!(err.is_unresolved_root());
    }

    #[test]
    fn test_merge_overlays_set_fields() {
        let mut config = sample();
        config.merge(&RootConfig {
            project_folder: Some(PathBuf::from("/other")),
            build_target_folder: None,
        });
        assert_eq!(config.project_folder, Some(PathBuf::from("/other")));
        assert_eq!(
            config.build_target_folder,
            Some(PathBuf::from("/work/app/Builds/Linux"))
        );
    }

    #[test]
    fn test_relative_folder_is_invalid() {
        let config = RootConfig {
            project_folder: Some(PathBuf::from("relative/app")),
            build_target_folder: None,
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidPath { .. }));
    }

    #[test]
    fn test_tilde_folder_is_expanded() {
        let home = home::home_dir().unwrap();
        let config = RootConfig {
            project_folder: Some(PathBuf::from("~/app")),
            build_target_folder: None,
        };
        assert!(config.validate().is_ok());
        assert_eq!(
            config.resolved_folder(RootFolder::ProjectFolder).unwrap(),
            home.join("app")
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_resolve_relative() {
        let path = RelativePath::new("Source/../Source/main.cpp", RootFolder::ProjectFolder);
        assert_eq!(
            sample().resolve(&path).unwrap(),
            PathBuf::from("/work/app/Source/main.cpp")
        );
    }

    #[test]
    fn test_resolve_absolute_ignores_root() {
        let path = RelativePath::new("$(SDK)/include", RootFolder::Unknown);
        assert_eq!(
            RootConfig::default().resolve(&path).unwrap(),
            PathBuf::from("$(SDK)/include")
        );
    }

    #[test]
    fn test_resolve_unconfigured_root() {
        let path = RelativePath::new("a.cpp", RootFolder::BuildTargetFolder);
        let err = RootConfig::default().resolve(&path).unwrap_err();
        assert!(err.is_unresolved_root());
    }

    #[test]
    #[cfg(unix)]
    fn test_rebase_between_roots() {
        let path = RelativePath::new("Source/main.cpp", RootFolder::ProjectFolder);
        let moved = sample().rebase(&path, RootFolder::BuildTargetFolder).unwrap();
        assert_eq!(moved.as_str(), "../../Source/main.cpp");
        assert_eq!(moved.root(), RootFolder::BuildTargetFolder);

        let back = sample().rebase(&moved, RootFolder::ProjectFolder).unwrap();
        assert_eq!(back, path);
    }

    #[test]
    fn test_rebase_absolute_needs_no_folders() {
        let path = RelativePath::new("/usr/include", RootFolder::ProjectFolder);
        let moved = RootConfig::default()
            .rebase(&path, RootFolder::BuildTargetFolder)
            .unwrap();
        assert_eq!(moved.as_str(), "/usr/include");
        assert_eq!(moved.root(), RootFolder::BuildTargetFolder);
    }
}
