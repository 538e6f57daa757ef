//! Configuration file support for apkmatch.
//!
//! apkmatch reads two configuration file locations:
//! - Global: `~/.apkmatch/config.toml` - User-wide defaults
//! - Project: `.apkmatch/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config, and command line
//! flags take precedence over both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// apkmatch configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Device settings
    pub device: DeviceConfig,

    /// Module settings
    pub modules: ModulesConfig,
}

/// Device-related configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Device spec JSON used when `--device-spec` is not given
    pub spec: Option<PathBuf>,
}

/// Module-related configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModulesConfig {
    /// Modules to deliver split APKs for (None = all modules)
    pub allowed: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let mut config: Config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        if let Some(base) = config_base_dir(path) {
            config.anchor_paths(base);
        }

        Ok(config)
    }

    /// Resolve relative paths against `base`.
    fn anchor_paths(&mut self, base: &Path) {
        if let Some(spec) = &self.device.spec {
            if spec.is_relative() {
                self.device.spec = Some(base.join(spec));
            }
        }
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.device.spec.is_some() {
            self.device.spec = other.device.spec;
        }
        if other.modules.allowed.is_some() {
            self.modules.allowed = other.modules.allowed;
        }
    }
}

/// Get the global apkmatch config directory (~/.apkmatch).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".apkmatch"))
}

/// Get the global config path (~/.apkmatch/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.apkmatch/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".apkmatch").join("config.toml")
}

/// Directory that relative paths in the config file at `path` refer to.
///
/// For `<dir>/.apkmatch/config.toml` this is `<dir>`; for any other file it
/// is the directory holding the file.
fn config_base_dir(path: &Path) -> Option<&Path> {
    let parent = path.parent()?;
    if parent.file_name().is_some_and(|name| name == ".apkmatch") {
        parent.parent()
    } else {
        Some(parent)
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.apkmatch/config.toml)
/// 2. Global config (~/.apkmatch/config.toml)
/// 3. Defaults
pub fn load_config(global_path: &Path, project_path: &Path) -> Config {
    let mut config = Config::default();

    if global_path.exists() {
        let global = Config::load_or_default(global_path);
        config.merge(global);
    }

    if project_path.exists() {
        let project = Config::load_or_default(project_path);
        config.merge(project);
    }

    config
}

/// Load the configuration that applies to `project_root`.
pub fn load_config_for(project_root: &Path) -> Config {
    let project_path = project_config_path(project_root);

    match global_config_path() {
        Some(global_path) => load_config(&global_path, &project_path),
        None => Config::load_or_default(&project_path),
    }
}
