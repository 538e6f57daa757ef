//! Device specs - what a target device supports.
//!
//! A device spec is the declarative description the matchers evaluate
//! targeting against. The JSON shape matches the one produced by
//! `bundletool get-device-spec`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Characteristics of a single target device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSpec {
    /// Supported ABIs in order of preference (e.g. `arm64-v8a`, `armeabi-v7a`)
    #[serde(default)]
    pub supported_abis: Vec<String>,

    /// Supported locales as BCP-47 tags (e.g. `en-US`)
    #[serde(default)]
    pub supported_locales: Vec<String>,

    /// Screen density in dpi
    #[serde(default)]
    pub screen_density: u32,

    /// Android API level
    #[serde(default)]
    pub sdk_version: u32,
}

impl DeviceSpec {
    /// Create an empty device spec.
    pub fn new() -> Self {
        DeviceSpec::default()
    }

    /// Set the API level.
    pub fn with_sdk_version(mut self, sdk_version: u32) -> Self {
        self.sdk_version = sdk_version;
        self
    }

    /// Set the supported ABIs, most preferred first.
    pub fn with_abis<I, S>(mut self, abis: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supported_abis = abis.into_iter().map(Into::into).collect();
        self
    }

    /// Set the screen density in dpi.
    pub fn with_screen_density(mut self, dpi: u32) -> Self {
        self.screen_density = dpi;
        self
    }

    /// Set the supported locales.
    pub fn with_locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supported_locales = locales.into_iter().map(Into::into).collect();
        self
    }

    /// Load a device spec from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read device spec: {}", path.display()))?;

        Self::from_json(&contents)
            .with_context(|| format!("failed to parse device spec: {}", path.display()))
    }

    /// Parse a device spec from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
