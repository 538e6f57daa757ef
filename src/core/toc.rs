//! The build output table of contents.
//!
//! A `BuildApksResult` lists every variant a build produced. Each variant
//! holds one `ApkSet` per module, and each set lists the APKs generated for
//! that module together with their targeting.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::targeting::{ApkTargeting, VariantTargeting};

/// Root of the build output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildApksResult {
    /// Variants in declared order
    pub variants: Vec<Variant>,
}

impl BuildApksResult {
    pub fn new(variants: Vec<Variant>) -> Self {
        BuildApksResult { variants }
    }

    /// Load a build output from its JSON table of contents.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read build output: {}", path.display()))?;

        Self::from_json(&contents)
            .with_context(|| format!("failed to parse build output: {}", path.display()))
    }

    /// Parse a build output from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One alternative delivery configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Variant {
    /// Position of the variant in the build output
    pub variant_number: u32,

    /// Device range this variant covers
    pub targeting: VariantTargeting,

    /// APK sets, one per module
    pub apk_sets: Vec<ApkSet>,
}

impl Variant {
    pub fn new(variant_number: u32, targeting: VariantTargeting) -> Self {
        Variant {
            variant_number,
            targeting,
            apk_sets: Vec::new(),
        }
    }

    pub fn with_apk_set(mut self, apk_set: ApkSet) -> Self {
        self.apk_sets.push(apk_set);
        self
    }
}

/// Module-level metadata of an APK set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModuleMetadata {
    pub name: String,
}

/// The APKs generated for one module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApkSet {
    pub module_metadata: ModuleMetadata,
    pub apk_descriptions: Vec<ApkDescription>,
}

impl ApkSet {
    pub fn new(module_name: impl Into<String>) -> Self {
        ApkSet {
            module_metadata: ModuleMetadata {
                name: module_name.into(),
            },
            apk_descriptions: Vec::new(),
        }
    }

    pub fn with_apk(mut self, apk: ApkDescription) -> Self {
        self.apk_descriptions.push(apk);
        self
    }

    pub fn module_name(&self) -> &str {
        &self.module_metadata.name
    }
}

/// Metadata present on split APKs only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SplitApkMetadata {
    /// Split name, empty for the master split
    pub split_id: String,
    pub is_master_split: bool,
}

/// Metadata present on standalone APKs only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StandaloneApkMetadata {
    /// Modules fused into this APK
    pub fused_module_names: Vec<String>,
}

/// One installable APK.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApkDescription {
    pub targeting: ApkTargeting,

    /// Location of the APK inside the APK set archive
    pub path: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_apk_metadata: Option<SplitApkMetadata>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub standalone_apk_metadata: Option<StandaloneApkMetadata>,
}

impl ApkDescription {
    /// A split APK belonging to a module.
    pub fn split(path: impl Into<String>, targeting: ApkTargeting) -> Self {
        ApkDescription {
            targeting,
            path: path.into(),
            split_apk_metadata: Some(SplitApkMetadata::default()),
            standalone_apk_metadata: None,
        }
    }

    /// A self-contained APK.
    pub fn standalone(path: impl Into<String>, targeting: ApkTargeting) -> Self {
        ApkDescription {
            targeting,
            path: path.into(),
            split_apk_metadata: None,
            standalone_apk_metadata: Some(StandaloneApkMetadata::default()),
        }
    }

    /// Split APKs are module-scoped; anything else is installed on its own.
    pub fn is_split(&self) -> bool {
        self.split_apk_metadata.is_some()
    }

    pub fn path(&self) -> PathBuf {
        PathBuf::from(&self.path)
    }
}
