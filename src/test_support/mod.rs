//! Test utilities for apkmatch unit tests.
//!
//! This module provides fixed matchers for exercising the matcher
//! composition in isolation, plus the build output fixtures in
//! [`fixtures`].
//!
//! # Example
//!
//! ```rust,ignore
//! use apkmatch::test_support::*;
//!
//! #[test]
//! fn test_example() {
//!     let device = device_spec(30, &["arm64-v8a"], 480, &["en-US"]);
//!     let matcher = ApkMatcher::new(&device);
//!     let apks = matcher.matching_apks(&modular_result()).unwrap();
//! }
//! ```

pub mod fixtures;

use crate::core::{ApkTargeting, VariantTargeting};
use crate::matcher::{ApkTargetingMatcher, VariantTargetingMatcher};

// Re-export fixtures for convenience
pub use fixtures::*;

/// A matcher that returns the same answer for every targeting.
#[derive(Debug, Clone, Copy)]
pub struct Always(pub bool);

impl VariantTargetingMatcher for Always {
    fn matches_variant(&self, _targeting: &VariantTargeting) -> bool {
        self.0
    }
}

impl ApkTargetingMatcher for Always {
    fn matches_apk(&self, _targeting: &ApkTargeting) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{ApkMatcher, ModuleFilter};

    #[test]
    fn test_always_matchers_drive_selection() {
        let accept = ApkMatcher::from_matchers(
            vec![Box::new(Always(true))],
            vec![Box::new(Always(true))],
            ModuleFilter::All,
        );
        let reject = ApkMatcher::from_matchers(
            vec![Box::new(Always(true))],
            vec![Box::new(Always(false))],
            ModuleFilter::All,
        );

        let variant = single_variant_result();
        assert_eq!(accept.matching_apks(&variant).unwrap().len(), 2);
        assert!(reject.matching_apks(&variant).unwrap().is_empty());
    }

    #[test]
    fn test_always_true_on_multiple_variants_is_ambiguous() {
        let matcher = ApkMatcher::from_matchers(
            vec![Box::new(Always(true))],
            vec![Box::new(Always(true))],
            ModuleFilter::All,
        );

        assert!(matcher.matching_apks(&modular_result_with_legacy()).is_err());
    }
}
