//! The generation driver.
//!
//! A single synchronous pass over the configured sample range: every tick
//! reads all sensors in device-then-sensor order, stamps the readings with
//! `t = sample_index / rate` and streams each one to the matching sinks.
//! All opened sinks are flushed on every exit path, including errors and
//! interruption.

use thiserror::Error;

use crate::data_mgmt::models::Reading;
use crate::data_mgmt::partition::route;
use crate::data_mgmt::sink::{SinkError, SinkWriter};
use crate::devices::{self, Device};
use crate::plan::{PlanError, RunPlan};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Plan(#[from] PlanError),
    #[error(transparent)]
    Sink(#[from] SinkError),
    #[error("run interrupted after {samples} of {count} samples")]
    Interrupted { samples: u64, count: u64 },
}

/// Totals for a completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub samples: u64,
    pub readings: u64,
}

/// Execute `plan` to completion.
pub fn run(plan: &RunPlan) -> Result<RunSummary, GenerateError> {
    run_with_interrupt(plan, || false)
}

/// Execute `plan`, checking `interrupted` between sample iterations.
///
/// An interrupted run flushes and closes every sink before reporting the
/// interruption; there is no partial-success result.
pub fn run_with_interrupt(
    plan: &RunPlan,
    interrupted: impl Fn() -> bool,
) -> Result<RunSummary, GenerateError> {
    plan.validate()?;

    let mut devices = devices::build_devices(&plan.devices, plan.seed);
    let mut sinks = open_sinks(plan)?;

    log::info!(
        "Starting run: {} samples at {} Hz from {} sensor(s) into {} output(s)",
        plan.count,
        plan.rate,
        plan.sensor_count(),
        sinks.len()
    );

    let result = generate(plan, &mut devices, &mut sinks, interrupted);

    // Release discipline: every sink is flushed no matter how the loop ended.
    let mut flush_error = None;
    for sink in &mut sinks {
        if let Err(e) = sink.finish() {
            log::error!("Failed to flush sink {}: {e}", sink.path().display());
            flush_error.get_or_insert(e);
        }
    }

    let summary = result?;
    if let Some(e) = flush_error {
        return Err(e.into());
    }

    log::debug!(
        "Run finished: {} samples, {} readings",
        summary.samples,
        summary.readings
    );
    Ok(summary)
}

fn open_sinks(plan: &RunPlan) -> Result<Vec<SinkWriter>, GenerateError> {
    plan.outputs
        .iter()
        .map(|spec| {
            log::debug!("Opening output sink at {}", spec.path.display());
            SinkWriter::open(spec).map_err(Into::into)
        })
        .collect()
}

fn generate(
    plan: &RunPlan,
    devices: &mut [Device],
    sinks: &mut [SinkWriter],
    interrupted: impl Fn() -> bool,
) -> Result<RunSummary, GenerateError> {
    let mut readings: u64 = 0;

    for sample_index in 0..plan.count {
        if interrupted() {
            log::warn!("Interrupted at sample {sample_index}; closing sinks");
            return Err(GenerateError::Interrupted {
                samples: sample_index,
                count: plan.count,
            });
        }

        let t = sample_index as f64 / plan.rate;
        for device in devices.iter_mut() {
            for sensor in device.sensors.iter_mut() {
                let value = sensor.read(t);
                let reading = Reading {
                    ts: t,
                    device_id: device.id.clone(),
                    sensor_id: sensor.id().to_string(),
                    kind: sensor.kind(),
                    value,
                };
                for idx in route(&reading, &plan.outputs) {
                    sinks[idx].append(&reading)?;
                }
                readings += 1;
            }
        }
    }

    Ok(RunSummary {
        samples: plan.count,
        readings,
    })
}
