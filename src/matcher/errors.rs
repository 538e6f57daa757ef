//! Matching error types and diagnostics.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::util::diagnostic::Diagnostic;

/// Error raised while matching a build output against a device.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum MatchError {
    #[error("invalid matcher configuration: {reason}")]
    #[diagnostic(code(apkmatch::config::invalid))]
    InvalidConfiguration { reason: String },

    #[error("cannot restrict modules when the device matches a non-split APK")]
    #[diagnostic(
        code(apkmatch::modules::conflict),
        help("Drop the module restriction when installing standalone APKs")
    )]
    ConflictingConfiguration { module: String },

    #[error("device matches {} variants of the build output", .variants.len())]
    #[diagnostic(
        code(apkmatch::variant::ambiguous),
        help("Variant targeting must cover disjoint device ranges; rebuild the APK set")
    )]
    AmbiguousVariants { variants: Vec<u32> },
}

impl MatchError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            MatchError::InvalidConfiguration { reason } => {
                Diagnostic::error(format!("invalid matcher configuration: {}", reason))
                    .with_suggestion(
                        "Omit `--modules` to allow every module, or list at least one module",
                    )
            }

            MatchError::ConflictingConfiguration { module } => Diagnostic::error(
                "cannot restrict modules when the device matches a non-split APK",
            )
            .with_context(format!(
                "standalone APK in module `{}` matches the device",
                module
            ))
            .with_suggestion("Drop the module restriction for this device")
            .with_suggestion(
                "Build split APKs for devices in this range if per-module delivery is needed",
            ),

            MatchError::AmbiguousVariants { variants } => {
                let numbers: Vec<String> = variants.iter().map(|n| n.to_string()).collect();

                Diagnostic::error(format!(
                    "device matches {} variants of the build output",
                    variants.len()
                ))
                .with_context(format!("matching variants: {}", numbers.join(", ")))
                .with_suggestion("Regenerate the APK set; variant targeting must not overlap")
            }
        }
    }
}
