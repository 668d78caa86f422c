pub const LOG_LEVEL: &str = "info";

/// Candidate config filenames, searched in order; the first one wins.
pub const CONFIG_FILENAMES: [&str; 3] = ["config.sensors.yaml", "sensors.yaml", "config.yaml"];

/// Master seed used when the config does not set one.
pub const SEED: u64 = 1042;

// Per-kind signal parameters used when a sensor block does not override them.
pub const TEMP_MIN_VAL: f64 = 70.0;
pub const TEMP_MAX_VAL: f64 = 90.0;
pub const TEMP_NOISE: f64 = 0.5;

pub const VIB_BASE_HZ: f64 = 20.0;
pub const VIB_AMP: f64 = 2.0;
pub const VIB_NOISE: f64 = 0.2;

/// Config written by the `run` command when none is found.
pub const DEFAULT_CONFIG: &str = "\
rate: 2
count: 20
partition_by: type

outputs:
  - type: jsonl
    for: temp
    path: out/temp.jsonl
  - type: csv
    for: vibration
    path: out/vibration.csv

devices:
  - id: engine-A
    sensors:
      - kind: temp
        count: 1
      - kind: vibration
        count: 1
";
