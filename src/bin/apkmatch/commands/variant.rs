//! `apkmatch variant` command

use anyhow::Result;

use apkmatch::{ApkMatcher, BuildApksResult, DeviceSpec};

use super::{current_config, device_spec_paths};
use crate::cli::VariantArgs;

pub fn execute(args: VariantArgs) -> Result<()> {
    let config = current_config()?;
    let paths = device_spec_paths(args.device_spec.into_iter().collect(), &config)?;

    let toc = BuildApksResult::load(&args.toc)?;

    for path in &paths {
        let device = DeviceSpec::load(path)?;
        let matcher = ApkMatcher::new(&device);

        match matcher.matching_variant(&toc)? {
            Some(variant) => println!("{}", variant.variant_number),
            None => println!("none"),
        }
    }

    Ok(())
}
