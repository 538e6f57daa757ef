//! Language matching for language split APKs.

use std::collections::BTreeSet;

use crate::core::{ApkTargeting, DeviceSpec, LanguageTargeting};
use crate::matcher::ApkTargetingMatcher;

/// Matches language targeting against the device locales.
///
/// Language splits have no variant-level counterpart, so this only
/// implements [`ApkTargetingMatcher`].
#[derive(Debug, Clone)]
pub struct LanguageMatcher {
    device_languages: BTreeSet<String>,
}

impl LanguageMatcher {
    pub fn new(device: &DeviceSpec) -> Self {
        LanguageMatcher {
            device_languages: device
                .supported_locales
                .iter()
                .map(|locale| language_of(locale))
                .filter(|lang| !lang.is_empty())
                .collect(),
        }
    }

    pub fn matches_targeting(&self, targeting: &LanguageTargeting) -> bool {
        if targeting.is_empty() {
            return true;
        }

        // Fallback split: serves every language no other split covers.
        if targeting.value.is_empty() {
            let covered: BTreeSet<String> =
                targeting.alternatives.iter().map(|l| language_of(l)).collect();
            return self
                .device_languages
                .iter()
                .any(|lang| !covered.contains(lang));
        }

        targeting
            .value
            .iter()
            .any(|lang| self.device_languages.contains(&language_of(lang)))
    }
}

/// Language subtag of a locale tag: `en-US` and `en_US` both give `en`.
fn language_of(locale: &str) -> String {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

impl ApkTargetingMatcher for LanguageMatcher {
    fn matches_apk(&self, targeting: &ApkTargeting) -> bool {
        self.matches_targeting(&targeting.language_targeting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(locales: &[&str]) -> LanguageMatcher {
        LanguageMatcher::new(&DeviceSpec::new().with_locales(locales.iter().copied()))
    }

    #[test]
    fn test_language_of() {
        assert_eq!(language_of("en-US"), "en");
        assert_eq!(language_of("pt_BR"), "pt");
        assert_eq!(language_of("FR"), "fr");
    }

    #[test]
    fn test_empty_targeting_matches() {
        assert!(matcher(&[]).matches_targeting(&LanguageTargeting::default()));
    }

    #[test]
    fn test_matches_device_language() {
        let device = matcher(&["en-US", "fr-FR"]);

        assert!(device.matches_targeting(&LanguageTargeting::new(["fr"]).with_alternatives(["de"])));
        assert!(!device.matches_targeting(&LanguageTargeting::new(["de"]).with_alternatives(["fr"])));
    }

    #[test]
    fn test_fallback_split() {
        let fallback = LanguageTargeting::default().with_alternatives(["en", "fr"]);

        assert!(!matcher(&["en-GB"]).matches_targeting(&fallback));
        assert!(matcher(&["en-GB", "ja-JP"]).matches_targeting(&fallback));
    }
}
