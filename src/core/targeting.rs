//! Targeting descriptors attached to variants and APKs.
//!
//! Every targeting dimension has the same shape: the `value` list names what
//! the entity was built for, and `alternatives` names what sibling entities
//! were built for. A dimension with neither matches every device.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse targeting of a whole variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VariantTargeting {
    pub sdk_version_targeting: SdkVersionTargeting,
    pub abi_targeting: AbiTargeting,
    pub screen_density_targeting: ScreenDensityTargeting,
}

/// Fine-grained targeting of a single APK.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApkTargeting {
    pub sdk_version_targeting: SdkVersionTargeting,
    pub abi_targeting: AbiTargeting,
    pub screen_density_targeting: ScreenDensityTargeting,
    pub language_targeting: LanguageTargeting,
}

impl VariantTargeting {
    pub fn with_sdk(mut self, targeting: SdkVersionTargeting) -> Self {
        self.sdk_version_targeting = targeting;
        self
    }

    pub fn with_abi(mut self, targeting: AbiTargeting) -> Self {
        self.abi_targeting = targeting;
        self
    }

    pub fn with_density(mut self, targeting: ScreenDensityTargeting) -> Self {
        self.screen_density_targeting = targeting;
        self
    }
}

impl ApkTargeting {
    pub fn with_sdk(mut self, targeting: SdkVersionTargeting) -> Self {
        self.sdk_version_targeting = targeting;
        self
    }

    pub fn with_abi(mut self, targeting: AbiTargeting) -> Self {
        self.abi_targeting = targeting;
        self
    }

    pub fn with_density(mut self, targeting: ScreenDensityTargeting) -> Self {
        self.screen_density_targeting = targeting;
        self
    }

    pub fn with_language(mut self, targeting: LanguageTargeting) -> Self {
        self.language_targeting = targeting;
        self
    }
}

/// Lower bound of an API level range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SdkVersion {
    pub min: u32,
}

/// API level targeting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdkVersionTargeting {
    pub value: Vec<SdkVersion>,
    pub alternatives: Vec<SdkVersion>,
}

impl SdkVersionTargeting {
    /// Targeting for API levels starting at `min`.
    pub fn min(min: u32) -> Self {
        SdkVersionTargeting {
            value: vec![SdkVersion { min }],
            alternatives: Vec::new(),
        }
    }

    /// Add alternative range starts.
    pub fn with_alternatives(mut self, mins: impl IntoIterator<Item = u32>) -> Self {
        self.alternatives = mins.into_iter().map(|min| SdkVersion { min }).collect();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty() && self.alternatives.is_empty()
    }
}

/// Android ABI names as they appear in targeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AbiAlias {
    Armeabi,
    ArmeabiV7a,
    Arm64V8a,
    X86,
    #[serde(rename = "X86_64")]
    X86_64,
    Mips,
    Mips64,
    Riscv64,
}

impl AbiAlias {
    const ALL: [AbiAlias; 8] = [
        AbiAlias::Armeabi,
        AbiAlias::ArmeabiV7a,
        AbiAlias::Arm64V8a,
        AbiAlias::X86,
        AbiAlias::X86_64,
        AbiAlias::Mips,
        AbiAlias::Mips64,
        AbiAlias::Riscv64,
    ];

    /// The ABI name the platform reports (`arm64-v8a`, `x86_64`, ...).
    pub fn platform_name(&self) -> &'static str {
        match self {
            AbiAlias::Armeabi => "armeabi",
            AbiAlias::ArmeabiV7a => "armeabi-v7a",
            AbiAlias::Arm64V8a => "arm64-v8a",
            AbiAlias::X86 => "x86",
            AbiAlias::X86_64 => "x86_64",
            AbiAlias::Mips => "mips",
            AbiAlias::Mips64 => "mips64",
            AbiAlias::Riscv64 => "riscv64",
        }
    }

    /// Look up an alias from the ABI name a device reports.
    pub fn from_platform_name(name: &str) -> Option<Self> {
        AbiAlias::ALL
            .into_iter()
            .find(|alias| alias.platform_name() == name)
    }
}

impl fmt::Display for AbiAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.platform_name())
    }
}

/// ABI targeting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbiTargeting {
    pub value: Vec<AbiAlias>,
    pub alternatives: Vec<AbiAlias>,
}

impl AbiTargeting {
    pub fn new(value: impl IntoIterator<Item = AbiAlias>) -> Self {
        AbiTargeting {
            value: value.into_iter().collect(),
            alternatives: Vec::new(),
        }
    }

    pub fn with_alternatives(mut self, alternatives: impl IntoIterator<Item = AbiAlias>) -> Self {
        self.alternatives = alternatives.into_iter().collect();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty() && self.alternatives.is_empty()
    }
}

/// Named density buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DensityAlias {
    Ldpi,
    Mdpi,
    Tvdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl DensityAlias {
    pub const ALL: [DensityAlias; 7] = [
        DensityAlias::Ldpi,
        DensityAlias::Mdpi,
        DensityAlias::Tvdpi,
        DensityAlias::Hdpi,
        DensityAlias::Xhdpi,
        DensityAlias::Xxhdpi,
        DensityAlias::Xxxhdpi,
    ];

    pub fn dpi(&self) -> u32 {
        match self {
            DensityAlias::Ldpi => 120,
            DensityAlias::Mdpi => 160,
            DensityAlias::Tvdpi => 213,
            DensityAlias::Hdpi => 240,
            DensityAlias::Xhdpi => 320,
            DensityAlias::Xxhdpi => 480,
            DensityAlias::Xxxhdpi => 640,
        }
    }
}

/// A screen density, either a named bucket or a raw dpi value.
///
/// Serialized as the bucket name (`"HDPI"`) or a bare number (`240`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScreenDensity {
    Alias(DensityAlias),
    Dpi(u32),
}

impl ScreenDensity {
    pub fn dpi(&self) -> u32 {
        match self {
            ScreenDensity::Alias(alias) => alias.dpi(),
            ScreenDensity::Dpi(dpi) => *dpi,
        }
    }
}

impl From<DensityAlias> for ScreenDensity {
    fn from(alias: DensityAlias) -> Self {
        ScreenDensity::Alias(alias)
    }
}

/// Screen density targeting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenDensityTargeting {
    pub value: Vec<ScreenDensity>,
    pub alternatives: Vec<ScreenDensity>,
}

impl ScreenDensityTargeting {
    pub fn new(value: impl IntoIterator<Item = ScreenDensity>) -> Self {
        ScreenDensityTargeting {
            value: value.into_iter().collect(),
            alternatives: Vec::new(),
        }
    }

    pub fn with_alternatives(
        mut self,
        alternatives: impl IntoIterator<Item = ScreenDensity>,
    ) -> Self {
        self.alternatives = alternatives.into_iter().collect();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty() && self.alternatives.is_empty()
    }
}

/// Language targeting. Values are language codes (`fr`, `pt`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageTargeting {
    pub value: Vec<String>,
    pub alternatives: Vec<String>,
}

impl LanguageTargeting {
    pub fn new<I, S>(value: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LanguageTargeting {
            value: value.into_iter().map(Into::into).collect(),
            alternatives: Vec::new(),
        }
    }

    pub fn with_alternatives<I, S>(mut self, alternatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alternatives = alternatives.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty() && self.alternatives.is_empty()
    }
}
