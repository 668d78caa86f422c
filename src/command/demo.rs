use std::path::PathBuf;

use anyhow::Result;

use ds::constants::defaults;
use ds::data_mgmt::generate;
use ds::data_mgmt::models::SensorKind;
use ds::plan::{DeviceSpec, OutputSpec, PartitionBy, RunPlan, Selector, SensorBlock, SinkFormat};

use crate::argsets::DemoArgs;

const DEMO_DEVICE: &str = "engine-A";
const DEMO_RATE: f64 = 2.0;
const DEMO_COUNT: u64 = 20;

/// Hard-coded entry point: one device with a temperature and a vibration
/// sensor, all readings into a single JSON Lines file.
pub fn demo(args: DemoArgs) -> Result<()> {
    let out_path = args.out_path.unwrap_or_else(|| PathBuf::from("out.jsonl"));

    let plan = RunPlan {
        rate: DEMO_RATE,
        count: DEMO_COUNT,
        seed: defaults::SEED,
        partition_by: PartitionBy::None,
        outputs: vec![OutputSpec {
            format: SinkFormat::Jsonl,
            selector: Selector::Any,
            path: out_path.clone(),
        }],
        devices: vec![DeviceSpec {
            id: DEMO_DEVICE.to_string(),
            sensors: vec![
                SensorBlock::new(SensorKind::Temperature),
                SensorBlock::new(SensorKind::Vibration),
            ],
        }],
    };

    let summary = generate::run(&plan)?;
    log::info!(
        "Demo run complete: {} readings written to {}",
        summary.readings,
        out_path.display()
    );
    Ok(())
}
