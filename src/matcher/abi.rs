//! ABI matching.

use crate::core::{AbiAlias, AbiTargeting, ApkTargeting, DeviceSpec, VariantTargeting};
use crate::matcher::{ApkTargetingMatcher, VariantTargetingMatcher};

/// Matches targeting against the ABIs a device supports.
///
/// The device's ABI list is ordered by preference. Among everything the
/// build produced for this dimension (value and alternatives), the most
/// preferred ABI the device supports wins; the targeting matches if that
/// ABI is one of its values.
#[derive(Debug, Clone)]
pub struct AbiMatcher {
    device_abis: Vec<AbiAlias>,
}

impl AbiMatcher {
    pub fn new(device: &DeviceSpec) -> Self {
        let device_abis = device
            .supported_abis
            .iter()
            .filter_map(|name| {
                let alias = AbiAlias::from_platform_name(name);
                if alias.is_none() {
                    tracing::trace!("ignoring unknown device ABI `{}`", name);
                }
                alias
            })
            .collect();

        AbiMatcher { device_abis }
    }

    pub fn matches_targeting(&self, targeting: &AbiTargeting) -> bool {
        if targeting.is_empty() {
            return true;
        }

        self.device_abis
            .iter()
            .find(|&abi| targeting.value.contains(abi) || targeting.alternatives.contains(abi))
            .is_some_and(|best| targeting.value.contains(best))
    }
}

impl VariantTargetingMatcher for AbiMatcher {
    fn matches_variant(&self, targeting: &VariantTargeting) -> bool {
        self.matches_targeting(&targeting.abi_targeting)
    }
}

impl ApkTargetingMatcher for AbiMatcher {
    fn matches_apk(&self, targeting: &ApkTargeting) -> bool {
        self.matches_targeting(&targeting.abi_targeting)
    }
}
