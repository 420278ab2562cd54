//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixtures for testing the
//! projpath library.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use projpath::{RelativePath, RootFolder};

/// Shorthand for a path relative to the project folder.
#[allow(dead_code)]
pub fn project(path: &str) -> RelativePath {
    RelativePath::new(path, RootFolder::ProjectFolder)
}

/// Shorthand for a path relative to the build target folder.
#[allow(dead_code)]
pub fn build_target(path: &str) -> RelativePath {
    RelativePath::new(path, RootFolder::BuildTargetFolder)
}

/// Helper to create a configuration file inside `dir`.
#[allow(dead_code)]
pub fn create_temp_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

/// RAII guard for setting and restoring environment variables.
///
/// Note: Tests using environment variables should not run in parallel.
/// Use #[serial] attribute or ensure tests clean up properly.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Set `key` to `value` until the guard is dropped.
    pub fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Remove `key` until the guard is dropped.
    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

/// Clear all PROJPATH_* environment variables for the lifetime of the guards.
#[allow(dead_code)]
pub fn clear_projpath_env_vars() -> Vec<EnvGuard> {
    ["PROJPATH_PROJECT_FOLDER", "PROJPATH_BUILD_TARGET_FOLDER"]
        .iter()
        .map(|k| EnvGuard::remove(k))
        .collect()
}
