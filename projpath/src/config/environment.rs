//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `PROJPATH_*` environment variables that
//! override configuration file values.

use crate::config::schema::RootConfig;
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Overrides the project folder.
pub const PROJECT_FOLDER_VAR: &str = "PROJPATH_PROJECT_FOLDER";

/// Overrides the build target folder.
pub const BUILD_TARGET_FOLDER_VAR: &str = "PROJPATH_BUILD_TARGET_FOLDER";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use projpath::config::{EnvironmentConfig, RootConfig};
///
/// let mut config = RootConfig::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads `PROJPATH_PROJECT_FOLDER` and `PROJPATH_BUILD_TARGET_FOLDER` and
    /// replaces the matching folders when they are set.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an empty or non-UTF-8 value.
    pub fn apply_overrides(config: &mut RootConfig) -> Result<()> {
        if let Some(folder) = Self::read_folder(PROJECT_FOLDER_VAR)? {
            config.project_folder = Some(folder);
        }

        if let Some(folder) = Self::read_folder(BUILD_TARGET_FOLDER_VAR)? {
            config.build_target_folder = Some(folder);
        }

        Ok(())
    }

    fn read_folder(var: &str) -> Result<Option<PathBuf>> {
        match env::var(var) {
            Ok(value) => {
                log::debug!("{var} overrides configured folder with {value}");
                Self::parse_folder(var, &value).map(Some)
            }
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(Error::Validation {
                field: var.into(),
                message: "Value is not valid UTF-8".into(),
            }),
        }
    }

    /// Parse a folder value, rejecting blank strings.
    fn parse_folder(field: &str, value: &str) -> Result<PathBuf> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Folder must not be empty".into(),
            });
        }
        Ok(PathBuf::from(trimmed))
    }
}
