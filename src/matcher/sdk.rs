//! API level matching.

use crate::core::{ApkTargeting, DeviceSpec, SdkVersionTargeting, VariantTargeting};
use crate::matcher::{ApkTargetingMatcher, VariantTargetingMatcher};

/// Matches targeting against the device API level.
///
/// A targeted range `[min, next alternative)` matches when the device API
/// level falls inside it, so exactly one of a set of sibling ranges matches.
#[derive(Debug, Clone)]
pub struct SdkVersionMatcher {
    sdk_version: u32,
}

impl SdkVersionMatcher {
    pub fn new(device: &DeviceSpec) -> Self {
        SdkVersionMatcher {
            sdk_version: device.sdk_version,
        }
    }

    pub fn matches_targeting(&self, targeting: &SdkVersionTargeting) -> bool {
        if targeting.is_empty() {
            return true;
        }

        // Only the lowest value bounds the range.
        let Some(min) = targeting.value.iter().map(|v| v.min).min() else {
            return false;
        };

        if self.sdk_version < min {
            return false;
        }

        !targeting
            .alternatives
            .iter()
            .any(|alt| alt.min > min && alt.min <= self.sdk_version)
    }
}

impl VariantTargetingMatcher for SdkVersionMatcher {
    fn matches_variant(&self, targeting: &VariantTargeting) -> bool {
        self.matches_targeting(&targeting.sdk_version_targeting)
    }
}

impl ApkTargetingMatcher for SdkVersionMatcher {
    fn matches_apk(&self, targeting: &ApkTargeting) -> bool {
        self.matches_targeting(&targeting.sdk_version_targeting)
    }
}
