use std::env;
use std::fs;

use anyhow::{Context, Result};

use ds::constants::defaults;
use ds::data_mgmt::generate;
use ds::plan::config;

use crate::argsets::RunArgs;

/// Config-driven entry point.
///
/// Discovers a config in the target directory (writing the default one if
/// none is present), prepares the output directories and runs the pipeline.
/// The generator itself refuses to create directories, so both conveniences
/// live here on the caller side.
pub fn run(args: RunArgs) -> Result<()> {
    let directory = match args.directory {
        Some(dir) => dir,
        None => env::current_dir().context("could not determine current directory")?,
    };

    let config_path = match config::find_config_path(&directory) {
        Some(path) => {
            log::info!("Using existing config: {}", path.display());
            path
        }
        None => {
            let path = directory.join(defaults::CONFIG_FILENAMES[0]);
            fs::write(&path, defaults::DEFAULT_CONFIG)
                .with_context(|| format!("could not write default config to {}", path.display()))?;
            log::info!("Wrote default config: {}", path.display());
            path
        }
    };

    let mut plan = config::load(&config_path)?;

    // Output paths in the config are taken relative to the target directory.
    for spec in &mut plan.outputs {
        if spec.path.is_relative() {
            spec.path = directory.join(&spec.path);
        }
        if let Some(parent) = spec.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("could not create output directory {}", parent.display())
            })?;
        }
    }

    let summary = generate::run(&plan)?;

    log::info!(
        "Wrote {} readings over {} samples:",
        summary.readings,
        summary.samples
    );
    for spec in &plan.outputs {
        log::info!("  - {}", spec.path.display());
    }
    Ok(())
}
