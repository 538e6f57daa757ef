//! APK matching.
//!
//! This module decides which APKs of a build output a device receives.
//! Matching is pure and deterministic: the device spec and module
//! restriction are fixed when the matcher is built, and every call only
//! reads the build output it is given.
//!
//! Each compatibility dimension (API level, ABI, screen density, language)
//! is a separate matcher. [`ApkMatcher`] ANDs them together, first to pick
//! the one variant covering the device, then to pick the APKs within it.

pub mod abi;
pub mod density;
pub mod errors;
pub mod language;
pub mod modules;
pub mod sdk;

pub use abi::AbiMatcher;
pub use density::ScreenDensityMatcher;
pub use errors::MatchError;
pub use language::LanguageMatcher;
pub use modules::{AllowedModules, ModuleFilter};
pub use sdk::SdkVersionMatcher;

use std::fmt;
use std::path::PathBuf;

use tracing::{debug, trace};

use crate::core::{ApkTargeting, BuildApksResult, DeviceSpec, Variant, VariantTargeting};

/// A compatibility check over variant targeting.
pub trait VariantTargetingMatcher: Send + Sync {
    fn matches_variant(&self, targeting: &VariantTargeting) -> bool;
}

/// A compatibility check over APK targeting.
pub trait ApkTargetingMatcher: Send + Sync {
    fn matches_apk(&self, targeting: &ApkTargeting) -> bool;
}

/// Calculates which APKs of a build output should be installed on a device.
pub struct ApkMatcher {
    variant_matchers: Vec<Box<dyn VariantTargetingMatcher>>,
    apk_matchers: Vec<Box<dyn ApkTargetingMatcher>>,
    modules: ModuleFilter,
}

impl ApkMatcher {
    /// Create a matcher for `device` with no module restriction.
    pub fn new(device: &DeviceSpec) -> Self {
        Self::with_module_filter(device, ModuleFilter::All)
    }

    /// Create a matcher that only delivers split APKs of `allowed_modules`.
    ///
    /// `None` means every module is allowed. An empty collection is an error.
    pub fn with_allowed_modules<I, S>(
        device: &DeviceSpec,
        allowed_modules: Option<I>,
    ) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let modules = ModuleFilter::from_optional(allowed_modules)?;
        Ok(Self::with_module_filter(device, modules))
    }

    /// Create a matcher for `device` with the standard matchers.
    pub fn with_module_filter(device: &DeviceSpec, modules: ModuleFilter) -> Self {
        let sdk = SdkVersionMatcher::new(device);
        let abi = AbiMatcher::new(device);
        let density = ScreenDensityMatcher::new(device);
        let language = LanguageMatcher::new(device);

        Self::from_matchers(
            vec![
                Box::new(sdk.clone()),
                Box::new(abi.clone()),
                Box::new(density.clone()),
            ],
            vec![
                Box::new(sdk),
                Box::new(abi),
                Box::new(density),
                Box::new(language),
            ],
            modules,
        )
    }

    /// Create a matcher from arbitrary matchers.
    pub fn from_matchers(
        variant_matchers: Vec<Box<dyn VariantTargetingMatcher>>,
        apk_matchers: Vec<Box<dyn ApkTargetingMatcher>>,
        modules: ModuleFilter,
    ) -> Self {
        ApkMatcher {
            variant_matchers,
            apk_matchers,
            modules,
        }
    }

    /// The module restriction in effect.
    pub fn module_filter(&self) -> &ModuleFilter {
        &self.modules
    }

    /// Returns the paths of all APKs that should be installed on the device.
    ///
    /// Paths are in build output order: modules as declared, APKs within a
    /// module as declared. An empty list means either no variant covers the
    /// device or the covering variant has nothing for it.
    pub fn matching_apks(&self, result: &BuildApksResult) -> Result<Vec<PathBuf>, MatchError> {
        match self.matching_variant(result)? {
            Some(variant) => self.matching_apks_from_variant(variant),
            None => Ok(Vec::new()),
        }
    }

    /// Returns the single variant covering the device, if any.
    ///
    /// Variants must cover disjoint device ranges; more than one match is
    /// reported as [`MatchError::AmbiguousVariants`].
    pub fn matching_variant<'a>(
        &self,
        result: &'a BuildApksResult,
    ) -> Result<Option<&'a Variant>, MatchError> {
        let matching: Vec<&Variant> = result
            .variants
            .iter()
            .filter(|variant| self.matches_variant(&variant.targeting))
            .collect();

        match matching.as_slice() {
            [] => {
                debug!("no variant matches the device");
                Ok(None)
            }
            [variant] => {
                debug!("selected variant {}", variant.variant_number);
                Ok(Some(*variant))
            }
            _ => Err(MatchError::AmbiguousVariants {
                variants: matching.iter().map(|v| v.variant_number).collect(),
            }),
        }
    }

    /// Returns the paths of the APKs in `variant` that should be installed.
    pub fn matching_apks_from_variant(&self, variant: &Variant) -> Result<Vec<PathBuf>, MatchError> {
        let mut matched = Vec::new();

        for apk_set in &variant.apk_sets {
            let module_name = apk_set.module_name();

            for apk in &apk_set.apk_descriptions {
                if self.matches_apk(&apk.targeting, apk.is_split(), module_name)? {
                    debug!("matched `{}` from module `{}`", apk.path, module_name);
                    matched.push(apk.path());
                }
            }
        }

        Ok(matched)
    }

    /// Returns whether a single APK should be installed on the device.
    ///
    /// Split APKs must also belong to an allowed module. A standalone APK
    /// that matches while a module restriction is active is an error: the
    /// restriction cannot be honoured by a non-split install.
    pub fn matches_apk(
        &self,
        targeting: &ApkTargeting,
        is_split: bool,
        module_name: &str,
    ) -> Result<bool, MatchError> {
        let matches_targeting = self.matches_apk_targeting(targeting);

        if is_split {
            let allowed = self.modules.allows(module_name);
            if matches_targeting && !allowed {
                trace!("module `{}` is not in the allowed modules", module_name);
            }
            return Ok(matches_targeting && allowed);
        }

        if matches_targeting && self.modules.is_restricted() {
            return Err(MatchError::ConflictingConfiguration {
                module: module_name.to_string(),
            });
        }

        Ok(matches_targeting)
    }

    /// Whether every variant matcher accepts `targeting`.
    pub fn matches_variant(&self, targeting: &VariantTargeting) -> bool {
        self.variant_matchers
            .iter()
            .all(|matcher| matcher.matches_variant(targeting))
    }

    /// Whether every APK matcher accepts `targeting`.
    pub fn matches_apk_targeting(&self, targeting: &ApkTargeting) -> bool {
        self.apk_matchers
            .iter()
            .all(|matcher| matcher.matches_apk(targeting))
    }
}

impl fmt::Debug for ApkMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApkMatcher")
            .field("variant_matchers", &self.variant_matchers.len())
            .field("apk_matchers", &self.apk_matchers.len())
            .field("modules", &self.modules)
            .finish()
    }
}
