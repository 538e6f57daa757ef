//! `apkmatch resolve` command

use std::path::{Path, PathBuf};

use anyhow::Result;
use rayon::prelude::*;
use tracing::info;

use apkmatch::util::diagnostic::{self, suggestions, Diagnostic};
use apkmatch::{ApkMatcher, BuildApksResult, DeviceSpec};

use super::{current_config, device_spec_paths};
use crate::cli::ResolveArgs;

/// Outcome for one device.
struct Resolution {
    variant: Option<u32>,
    apks: Vec<PathBuf>,
}

pub fn execute(args: ResolveArgs, color: bool) -> Result<()> {
    let config = current_config()?;
    let paths = device_spec_paths(args.device_specs, &config)?;

    // An explicit empty `--modules ""` stays an empty restriction.
    let modules: Option<Vec<String>> = args
        .modules
        .map(|names| names.into_iter().filter(|n| !n.is_empty()).collect())
        .or(config.modules.allowed);

    let toc = BuildApksResult::load(&args.toc)?;

    // Every device resolves before anything is printed.
    let resolutions = paths
        .par_iter()
        .map(|path| resolve_device(path, &toc, modules.as_deref()))
        .collect::<Result<Vec<Resolution>>>()?;

    let several = paths.len() > 1;
    for (path, resolution) in paths.iter().zip(resolutions) {
        if several {
            println!("# {}", path.display());
        }

        if resolution.variant.is_none() {
            let warning = Diagnostic::warning(format!(
                "no variant of {} covers {}",
                args.toc.display(),
                path.display()
            ))
            .with_suggestion(suggestions::NO_VARIANT);
            diagnostic::emit(&warning, color);
        }

        for apk in &resolution.apks {
            println!("{}", apk.display());
        }
    }

    Ok(())
}

fn resolve_device(
    path: &Path,
    toc: &BuildApksResult,
    modules: Option<&[String]>,
) -> Result<Resolution> {
    let device = DeviceSpec::load(path)?;
    let matcher = ApkMatcher::with_allowed_modules(&device, modules)?;

    let Some(variant) = matcher.matching_variant(toc)? else {
        return Ok(Resolution {
            variant: None,
            apks: Vec::new(),
        });
    };

    let apks = matcher.matching_apks_from_variant(variant)?;
    info!(
        "{}: {} APK(s) from variant {}",
        path.display(),
        apks.len(),
        variant.variant_number
    );

    Ok(Resolution {
        variant: Some(variant.variant_number),
        apks,
    })
}
