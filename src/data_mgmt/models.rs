use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of simulated sensor kinds.
///
/// Dispatch is by this tag; adding a kind means adding a variant here plus a
/// signal model arm in `signals`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorKind {
    #[serde(alias = "temp")]
    Temperature,
    #[serde(alias = "vib")]
    Vibration,
}

impl SensorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "temperature",
            SensorKind::Vibration => "vibration",
        }
    }

    /// Short label used when generating sensor ids (`temp-0`, `vib-1`).
    pub fn id_prefix(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "temp",
            SensorKind::Vibration => "vib",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stamped sensor reading; the atomic unit flowing through the pipeline.
///
/// Serialized field names and order match the output record layout exactly.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Reading {
    pub ts: f64,
    pub device_id: String,
    pub sensor_id: String,
    #[serde(rename = "type")]
    pub kind: SensorKind,
    pub value: f64,
}

impl Reading {
    /// Column headers for tabular sinks, in serialization order.
    pub const FIELD_NAMES: [&'static str; 5] = ["ts", "device_id", "sensor_id", "type", "value"];
}
