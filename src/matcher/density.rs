//! Screen density matching.

use crate::core::{
    ApkTargeting, DensityAlias, DeviceSpec, ScreenDensityTargeting, VariantTargeting,
};
use crate::matcher::{ApkTargetingMatcher, VariantTargetingMatcher};

/// Matches targeting against the device screen density.
///
/// Picks the density the platform resource loader would pick among every
/// density the build produced, and matches if that density is targeted.
///
/// Targeting without alternatives is weighed against the device's own
/// density bucket, so a lone `HDPI` split only reaches devices whose
/// bucket resolves to `HDPI`.
#[derive(Debug, Clone)]
pub struct ScreenDensityMatcher {
    device_dpi: u32,
    device_bucket: u32,
}

impl ScreenDensityMatcher {
    pub fn new(device: &DeviceSpec) -> Self {
        let device_dpi = device.screen_density;
        let device_bucket =
            select_best_density(DensityAlias::ALL.iter().map(DensityAlias::dpi), device_dpi)
                .unwrap_or(device_dpi);

        ScreenDensityMatcher {
            device_dpi,
            device_bucket,
        }
    }

    pub fn matches_targeting(&self, targeting: &ScreenDensityTargeting) -> bool {
        if targeting.is_empty() {
            return true;
        }

        // Without alternatives the device bucket competes with the value.
        let own_bucket = targeting
            .alternatives
            .is_empty()
            .then_some(self.device_bucket);
        let candidates = targeting
            .value
            .iter()
            .chain(targeting.alternatives.iter())
            .map(|d| d.dpi())
            .chain(own_bucket);

        select_best_density(candidates, self.device_dpi)
            .is_some_and(|best| targeting.value.iter().any(|d| d.dpi() == best))
    }
}

/// Choose the best density for `device_dpi` among `candidates`.
pub fn select_best_density(
    candidates: impl IntoIterator<Item = u32>,
    device_dpi: u32,
) -> Option<u32> {
    candidates.into_iter().reduce(|best, candidate| {
        if is_better_density(candidate, best, device_dpi) {
            candidate
        } else {
            best
        }
    })
}

/// Whether `this` is a better fit than `other` for a screen of `requested` dpi.
///
/// Scaling down from a higher density is preferred over scaling up, unless
/// the lower density is much closer.
fn is_better_density(this: u32, other: u32, requested: u32) -> bool {
    let (high, low, this_is_higher) = if this >= other {
        (this, other, true)
    } else {
        (other, this, false)
    };

    // Both at or below the request: the larger one.
    if requested >= high {
        return this_is_higher;
    }

    // Both at or above the request: the smaller one.
    if low >= requested {
        return !this_is_higher;
    }

    let (high, low, requested) = (i64::from(high), i64::from(low), i64::from(requested));
    if (2 * low - requested) * high > requested * requested {
        !this_is_higher
    } else {
        this_is_higher
    }
}

impl VariantTargetingMatcher for ScreenDensityMatcher {
    fn matches_variant(&self, targeting: &VariantTargeting) -> bool {
        self.matches_targeting(&targeting.screen_density_targeting)
    }
}

impl ApkTargetingMatcher for ScreenDensityMatcher {
    fn matches_apk(&self, targeting: &ApkTargeting) -> bool {
        self.matches_targeting(&targeting.screen_density_targeting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScreenDensity;

    fn matcher(dpi: u32) -> ScreenDensityMatcher {
        ScreenDensityMatcher::new(&DeviceSpec::new().with_screen_density(dpi))
    }

    fn targeting(value: DensityAlias, alternatives: &[DensityAlias]) -> ScreenDensityTargeting {
        ScreenDensityTargeting::new([value.into()])
            .with_alternatives(alternatives.iter().map(|&a| ScreenDensity::from(a)))
    }

    #[test]
    fn test_empty_targeting_matches() {
        assert!(matcher(240).matches_targeting(&ScreenDensityTargeting::default()));
    }

    #[test]
    fn test_exact_match() {
        let hdpi = targeting(DensityAlias::Hdpi, &[DensityAlias::Xhdpi, DensityAlias::Mdpi]);
        let xhdpi = targeting(DensityAlias::Xhdpi, &[DensityAlias::Hdpi, DensityAlias::Mdpi]);

        assert!(matcher(240).matches_targeting(&hdpi));
        assert!(!matcher(240).matches_targeting(&xhdpi));
    }

    #[test]
    fn test_prefers_scaling_down() {
        // 400 dpi sits between XHDPI (320) and XXHDPI (480); 480 wins.
        let xxhdpi = targeting(DensityAlias::Xxhdpi, &[DensityAlias::Xhdpi]);
        let xhdpi = targeting(DensityAlias::Xhdpi, &[DensityAlias::Xxhdpi]);

        assert!(matcher(400).matches_targeting(&xxhdpi));
        assert!(!matcher(400).matches_targeting(&xhdpi));
    }

    #[test]
    fn test_much_closer_lower_density_wins() {
        // 330 dpi is barely above XHDPI.
        let xhdpi = targeting(DensityAlias::Xhdpi, &[DensityAlias::Xxxhdpi]);
        assert!(matcher(330).matches_targeting(&xhdpi));
    }

    #[test]
    fn test_outside_range() {
        let ldpi = targeting(DensityAlias::Ldpi, &[DensityAlias::Mdpi, DensityAlias::Xxxhdpi]);
        let xxxhdpi = targeting(DensityAlias::Xxxhdpi, &[DensityAlias::Ldpi]);

        assert!(matcher(100).matches_targeting(&ldpi));
        assert!(matcher(800).matches_targeting(&xxxhdpi));
    }

    #[test]
    fn test_select_best_density() {
        assert_eq!(select_best_density([120, 160, 240, 320], 213), Some(240));
        assert_eq!(select_best_density([160, 240], 320), Some(240));
        assert_eq!(select_best_density(Vec::<u32>::new(), 320), None);
    }

    #[test]
    fn test_lone_density_matches_only_its_own_bucket() {
        let hdpi = ScreenDensityTargeting::new([DensityAlias::Hdpi.into()]);

        assert!(matcher(240).matches_targeting(&hdpi));
        assert!(!matcher(320).matches_targeting(&hdpi));
        assert!(!matcher(160).matches_targeting(&hdpi));
    }

    #[test]
    fn test_lone_density_matches_nearby_dpi() {
        // 400 dpi resolves to the XXHDPI bucket.
        let xxhdpi = ScreenDensityTargeting::new([DensityAlias::Xxhdpi.into()]);
        let xhdpi = ScreenDensityTargeting::new([DensityAlias::Xhdpi.into()]);

        assert!(matcher(400).matches_targeting(&xxhdpi));
        assert!(!matcher(400).matches_targeting(&xhdpi));
    }
}
