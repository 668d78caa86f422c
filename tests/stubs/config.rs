#![allow(dead_code)]

pub const VALID_CONFIG_1: &str = r#"
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
"#;

pub const VALID_CONFIG_MULTI_DEVICE: &str = r#"
rate: 10
count: 5
seed: 7
partition_by: device

outputs:
  - type: jsonl
    for: "*"
    path: all.jsonl

devices:
  - id: engine-A
    sensors:
      - kind: temp
        count: 2
        min_val: 60
        max_val: 80
        noise: 0
  - id: engine-B
    sensors:
      - kind: vibration
        base_hz: 5
        amp: 1.5
"#;

pub const BAD_CONFIG_UNKNOWN_KIND: &str = r#"
rate: 2
count: 20

devices:
  - id: engine-A
    sensors:
      - kind: humidity
        count: 1
"#;

pub const BAD_CONFIG_UNKNOWN_OUTPUT_TYPE: &str = r#"
rate: 2
count: 20

outputs:
  - type: parquet
    for: temp
    path: out/temp.parquet

devices:
  - id: engine-A
    sensors:
      - kind: temp
"#;

pub const BAD_CONFIG_ZERO_RATE: &str = r#"
rate: 0
count: 20

devices:
  - id: engine-A
    sensors:
      - kind: temp
"#;

pub const BAD_CONFIG_INVERTED_BOUNDS: &str = r#"
rate: 2
count: 20

devices:
  - id: engine-A
    sensors:
      - kind: temp
        min_val: 95
        max_val: 70
"#;
