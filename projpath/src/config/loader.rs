//! Configuration file discovery and loading.
//!
//! This module handles discovering and loading projpath configuration files
//! with proper precedence.

use crate::config::environment::EnvironmentConfig;
use crate::config::schema::RootConfig;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the shared project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "projpath.yaml";

/// Name of the private project configuration file.
pub const LOCAL_CONFIG_FILE: &str = "projpath.local.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: RootConfig,
}

/// Loads configuration from files and the environment.
///
/// # Examples
///
/// ```
/// use projpath::config::ConfigLoader;
/// use std::path::PathBuf;
///
/// let config = ConfigLoader::from_yaml_str("project_folder: /work/app\n").unwrap();
/// assert_eq!(config.project_folder, Some(PathBuf::from("/work/app")));
/// assert_eq!(config.build_target_folder, None);
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Build the effective configuration for `working_dir`.
    ///
    /// Discovered project files are merged in precedence order, environment
    /// overrides are applied on top and the result is validated.
    ///
    /// # Errors
    ///
    /// Returns an error if a discovered file cannot be read or parsed, an
    /// environment override is invalid, or a configured folder is unusable.
    pub fn load(working_dir: &Path) -> Result<RootConfig> {
        let mut config = RootConfig::default();
        for source in Self::discover_project_configs(working_dir)? {
            log::debug!("merging configuration from {}", source.path.display());
            config.merge(&source.config);
        }

        EnvironmentConfig::apply_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Discover project configurations by walking up directories.
    ///
    /// Stops at the first directory containing either configuration file.
    /// The returned sources are sorted by precedence, lowest first.
    ///
    /// # Errors
    ///
    /// Returns an error if any discovered file cannot be read or parsed.
    pub fn discover_project_configs(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut configs = Vec::new();
        let mut current = start_dir.to_path_buf();

        loop {
            for (name, precedence) in [(PROJECT_CONFIG_FILE, 1), (LOCAL_CONFIG_FILE, 2)] {
                let path = current.join(name);
                if path.exists() {
                    let config = Self::load_file(&path)?;
                    configs.push(ConfigSource {
                        path,
                        precedence,
                        config,
                    });
                }
            }

            // Stop if we found configs or can't go up anymore
            if !configs.is_empty() || !current.pop() {
                break;
            }
        }

        configs.sort_by_key(|s| s.precedence);
        Ok(configs)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<RootConfig> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        Self::from_yaml_str(&contents)
    }

    /// Parse a configuration from YAML text.
    ///
    /// An empty document yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or contains unknown keys.
    pub fn from_yaml_str(contents: &str) -> Result<RootConfig> {
        if contents.trim().is_empty() {
            return Ok(RootConfig::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }
}
