//! Core data structures for apkmatch.
//!
//! This module contains the read-only inputs the matcher works on:
//! - Device specs
//! - Variant and APK targeting
//! - The build output table of contents

pub mod device;
pub mod targeting;
pub mod toc;

pub use device::DeviceSpec;
pub use targeting::{
    AbiAlias, AbiTargeting, ApkTargeting, DensityAlias, LanguageTargeting, ScreenDensity,
    ScreenDensityTargeting, SdkVersion, SdkVersionTargeting, VariantTargeting,
};
pub use toc::{ApkDescription, ApkSet, BuildApksResult, ModuleMetadata, Variant};
