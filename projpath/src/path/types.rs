//! Root tags for relative paths.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The logical directory a [`RelativePath`](super::RelativePath) is relative to.
///
/// The names used by [`Display`](fmt::Display), [`FromStr`] and serde are the
/// ones found in project files: `unknown`, `projectFolder` and
/// `buildTargetFolder`.
///
/// # Examples
///
/// ```
/// use projpath::RootFolder;
///
/// assert_eq!(RootFolder::default(), RootFolder::Unknown);
/// assert_eq!(RootFolder::ProjectFolder.to_string(), "projectFolder");
/// assert_eq!(
///     "buildTargetFolder".parse::<RootFolder>().unwrap(),
///     RootFolder::BuildTargetFolder
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RootFolder {
    /// No meaningful anchor.
    #[default]
    Unknown,

    /// The folder of the generated project.
    ProjectFolder,

    /// The folder of one build target (an IDE or makefile exporter).
    BuildTargetFolder,
}

impl RootFolder {
    /// All root tags, in declaration order.
    pub const ALL: [Self; 3] = [Self::Unknown, Self::ProjectFolder, Self::BuildTargetFolder];

    /// The project-file name of this root.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::ProjectFolder => "projectFolder",
            Self::BuildTargetFolder => "buildTargetFolder",
        }
    }
}

impl fmt::Display for RootFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RootFolder {
    type Err = Error;

    /// Parses a root name. Matching is exact.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|root| root.as_str() == s)
            .ok_or_else(|| Error::Validation {
                field: "root".into(),
                message: format!("unknown root folder '{s}'"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(RootFolder::default(), RootFolder::Unknown);
    }

    #[test]
    fn test_display_and_parse_agree() {
        for root in RootFolder::ALL {
            assert_eq!(root.to_string().parse::<RootFolder>().unwrap(), root);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        let err = "ProjectFolder".parse::<RootFolder>().unwrap_err();
        assert!(format!("{err}").contains("unknown root folder"));
        assert!("".parse::<RootFolder>().is_err());
    }

    #[test]
    fn test_serde_uses_project_file_names() {
        let json = serde_json::to_string(&RootFolder::BuildTargetFolder).unwrap();
        assert_eq!(json, "\"buildTargetFolder\"");

        let parsed: RootFolder = serde_json::from_str("\"projectFolder\"").unwrap();
        assert_eq!(parsed, RootFolder::ProjectFolder);
    }
}
