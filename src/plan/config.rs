//! Config discovery and resolution.
//!
//! The caller-facing boundary of the generator: locate a declarative config
//! file, parse it into a validated [`RunPlan`] and execute the full pipeline
//! to completion.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::constants::defaults;
use crate::data_mgmt::generate::{self, RunSummary};
use crate::data_mgmt::models::SensorKind;
use crate::signals::SignalError;

use super::RunPlan;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("could not read config file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not parse config YAML: {0}")]
    ParseYaml(#[from] serde_yaml::Error),
    #[error("invalid run plan: {0}")]
    Invalid(String),
    #[error("invalid signal parameters for '{kind}' sensors of device '{device}': {source}")]
    Signal {
        device: String,
        kind: SensorKind,
        source: SignalError,
    },
}

/// Search `directory` for the first existing candidate config file.
pub fn find_config_path(directory: impl AsRef<Path>) -> Option<PathBuf> {
    defaults::CONFIG_FILENAMES
        .iter()
        .map(|name| directory.as_ref().join(name))
        .find(|path| path.is_file())
}

/// Parse a run plan from YAML text. Does not validate.
pub fn from_str(raw: &str) -> Result<RunPlan, PlanError> {
    serde_yaml::from_str::<RunPlan>(raw).map_err(Into::into)
}

/// Load and validate the run plan at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<RunPlan, PlanError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| PlanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let plan = from_str(&raw)?;
    plan.validate()?;
    Ok(plan)
}

/// Resolve the config at `path` and run the generation pipeline to
/// completion. Parse and validation errors abort before any sample is
/// produced or any output file is created.
pub fn run_from_config(path: impl AsRef<Path>) -> anyhow::Result<RunSummary> {
    let path = path.as_ref();
    log::info!("Running from config: {}", path.display());

    let plan = load(path)?;
    let summary = generate::run(&plan)?;

    log::info!(
        "Run complete: {} samples, {} readings across {} output(s)",
        summary.samples,
        summary.readings,
        plan.outputs.len()
    );
    Ok(summary)
}
