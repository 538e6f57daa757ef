//! apkmatch - APK delivery for multi-variant builds
//!
//! This crate decides which APKs of a build output should be installed on a
//! given device: it selects the one variant covering the device, then the
//! APKs within that variant whose targeting and module match.

pub mod core;
pub mod matcher;
pub mod util;

/// Test utilities for apkmatch unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides fixed matchers and build output fixtures.
#[cfg(test)]
pub mod test_support;

pub use self::core::{
    device::DeviceSpec,
    targeting::{ApkTargeting, VariantTargeting},
    toc::{ApkDescription, ApkSet, BuildApksResult, Variant},
};

pub use matcher::{ApkMatcher, MatchError, ModuleFilter};
