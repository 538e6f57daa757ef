//! Test fixtures for common matching scenarios.
//!
//! Build outputs here mirror what a split-aware build produces: a split
//! variant for modern devices and, where noted, a standalone variant for
//! devices below API 21.

use crate::core::{
    AbiAlias, AbiTargeting, ApkDescription, ApkSet, ApkTargeting, BuildApksResult, DeviceSpec,
    LanguageTargeting, SdkVersionTargeting, Variant, VariantTargeting,
};

/// A device spec from its four characteristics.
pub fn device_spec(sdk: u32, abis: &[&str], dpi: u32, locales: &[&str]) -> DeviceSpec {
    DeviceSpec::new()
        .with_sdk_version(sdk)
        .with_abis(abis.iter().copied())
        .with_screen_density(dpi)
        .with_locales(locales.iter().copied())
}

fn abi_split(path: &str, value: AbiAlias, alternatives: &[AbiAlias]) -> ApkDescription {
    ApkDescription::split(
        path,
        ApkTargeting::default().with_abi(
            AbiTargeting::new([value]).with_alternatives(alternatives.iter().copied()),
        ),
    )
}

fn language_split(path: &str, value: &str, alternatives: &[&str]) -> ApkDescription {
    ApkDescription::split(
        path,
        ApkTargeting::default().with_language(
            LanguageTargeting::new([value]).with_alternatives(alternatives.iter().copied()),
        ),
    )
}

/// Split variant for API 21+: `base` with ABI and language splits, plus
/// two feature modules with a master split each.
fn split_variant(variant_number: u32) -> Variant {
    Variant::new(
        variant_number,
        VariantTargeting::default().with_sdk(SdkVersionTargeting::min(21).with_alternatives([1])),
    )
    .with_apk_set(
        ApkSet::new("base")
            .with_apk(ApkDescription::split(
                "splits/base-master.apk",
                ApkTargeting::default(),
            ))
            .with_apk(abi_split(
                "splits/base-arm64_v8a.apk",
                AbiAlias::Arm64V8a,
                &[AbiAlias::ArmeabiV7a, AbiAlias::X86],
            ))
            .with_apk(abi_split(
                "splits/base-armeabi_v7a.apk",
                AbiAlias::ArmeabiV7a,
                &[AbiAlias::Arm64V8a, AbiAlias::X86],
            ))
            .with_apk(abi_split(
                "splits/base-x86.apk",
                AbiAlias::X86,
                &[AbiAlias::Arm64V8a, AbiAlias::ArmeabiV7a],
            ))
            .with_apk(language_split("splits/base-fr.apk", "fr", &["de"]))
            .with_apk(language_split("splits/base-de.apk", "de", &["fr"])),
    )
    .with_apk_set(ApkSet::new("feature_x").with_apk(ApkDescription::split(
        "splits/feature_x-master.apk",
        ApkTargeting::default(),
    )))
    .with_apk_set(ApkSet::new("feature_y").with_apk(ApkDescription::split(
        "splits/feature_y-master.apk",
        ApkTargeting::default(),
    )))
}

/// Standalone variant for devices below API 21.
fn standalone_variant(variant_number: u32) -> Variant {
    let standalone = |path: &str, value: AbiAlias, alternative: AbiAlias| {
        ApkDescription::standalone(
            path,
            ApkTargeting::default()
                .with_abi(AbiTargeting::new([value]).with_alternatives([alternative])),
        )
    };

    Variant::new(
        variant_number,
        VariantTargeting::default().with_sdk(SdkVersionTargeting::min(1).with_alternatives([21])),
    )
    .with_apk_set(
        ApkSet::new("base")
            .with_apk(standalone(
                "standalones/standalone-armeabi_v7a.apk",
                AbiAlias::ArmeabiV7a,
                AbiAlias::X86,
            ))
            .with_apk(standalone(
                "standalones/standalone-x86.apk",
                AbiAlias::X86,
                AbiAlias::ArmeabiV7a,
            )),
    )
}

/// A build output with only the split variant.
pub fn modular_result() -> BuildApksResult {
    BuildApksResult::new(vec![split_variant(1)])
}

/// A build output with only the standalone variant.
pub fn standalone_result() -> BuildApksResult {
    BuildApksResult::new(vec![standalone_variant(1)])
}

/// A build output with the split variant and the legacy standalone variant.
pub fn modular_result_with_legacy() -> BuildApksResult {
    BuildApksResult::new(vec![split_variant(1), standalone_variant(2)])
}

/// One untargeted variant with one module holding two untargeted splits.
pub fn single_variant_result() -> BuildApksResult {
    BuildApksResult::new(vec![Variant::new(1, VariantTargeting::default())
        .with_apk_set(
            ApkSet::new("base")
                .with_apk(ApkDescription::split("base-master.apk", ApkTargeting::default()))
                .with_apk(ApkDescription::split("base-extra.apk", ApkTargeting::default())),
        )])
}
