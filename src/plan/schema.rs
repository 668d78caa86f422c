//! Serde schema for the declarative run configuration.

use std::path::PathBuf;

use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::defaults;
use crate::data_mgmt::models::SensorKind;
use crate::signals::SignalModel;

use super::config::PlanError;

fn default_count() -> u32 {
    1
}

fn default_seed() -> u64 {
    defaults::SEED
}

/// Resolved run configuration. Exclusively owns the device and output
/// topology for the duration of a run.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RunPlan {
    /// Samples per second.
    pub rate: f64,
    /// Total samples per sensor.
    pub count: u64,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default)]
    pub partition_by: PartitionBy,
    #[serde(default)]
    pub outputs: Vec<OutputSpec>,
    pub devices: Vec<DeviceSpec>,
}

impl RunPlan {
    /// Check the plan's invariants. Runs before any sample is produced or
    /// any output file is opened.
    pub fn validate(&self) -> Result<(), PlanError> {
        if !self.rate.is_finite() || self.rate <= 0.0 {
            return Err(PlanError::Invalid(format!(
                "rate must be > 0, got {}",
                self.rate
            )));
        }
        if self.devices.is_empty() {
            return Err(PlanError::Invalid("at least one device is required".into()));
        }
        if let Some(dup) = self.devices.iter().map(|d| d.id.as_str()).duplicates().next() {
            return Err(PlanError::Invalid(format!("duplicate device id '{dup}'")));
        }

        for device in &self.devices {
            // Two blocks of the same kind in one device would expand to
            // colliding sensor ids.
            if let Some(dup) = device.sensors.iter().map(|s| s.kind).duplicates().next() {
                return Err(PlanError::Invalid(format!(
                    "device '{}' has more than one '{dup}' sensor block",
                    device.id
                )));
            }
            for block in &device.sensors {
                block.model().validate().map_err(|source| PlanError::Signal {
                    device: device.id.clone(),
                    kind: block.kind,
                    source,
                })?;
            }
        }

        // An output whose selector matches no configured kind is allowed and
        // simply stays empty; flag it, since it is usually a typo.
        let kinds: Vec<SensorKind> = self
            .devices
            .iter()
            .flat_map(|d| d.sensors.iter().map(|s| s.kind))
            .unique()
            .collect();
        for spec in &self.outputs {
            if !kinds.iter().any(|kind| spec.selector.matches(*kind)) {
                log::warn!(
                    "output '{}' matches no configured sensor kind and will stay empty",
                    spec.path.display()
                );
            }
        }

        Ok(())
    }

    /// Total number of sensors after `{kind, count}` expansion.
    pub fn sensor_count(&self) -> u64 {
        self.devices
            .iter()
            .flat_map(|d| d.sensors.iter())
            .map(|b| u64::from(b.count))
            .sum()
    }
}

/// Intended grouping of the outputs. Informational only: actual routing is
/// always decided per reading against each output's own selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PartitionBy {
    #[default]
    None,
    Type,
    Device,
    Sensor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkFormat {
    Jsonl,
    Csv,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct OutputSpec {
    #[serde(rename = "type")]
    pub format: SinkFormat,
    #[serde(rename = "for")]
    pub selector: Selector,
    pub path: PathBuf,
}

/// Output selector: a specific sensor kind, or `"*"` for all kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector {
    Any,
    Kind(SensorKind),
}

impl Selector {
    pub fn matches(&self, kind: SensorKind) -> bool {
        match self {
            Selector::Any => true,
            Selector::Kind(k) => *k == kind,
        }
    }
}

impl Serialize for Selector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Selector::Any => serializer.serialize_str("*"),
            Selector::Kind(kind) => kind.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Selector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == "*" {
            return Ok(Selector::Any);
        }
        SensorKind::deserialize(serde::de::value::StrDeserializer::<D::Error>::new(&raw))
            .map(Selector::Kind)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DeviceSpec {
    pub id: String,
    pub sensors: Vec<SensorBlock>,
}

/// One `{kind, count}` block; expands into `count` sensors of that kind.
/// Parameter overrides fall back to the built-in defaults per kind.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SensorBlock {
    pub kind: SensorKind,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_val: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_val: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_hz: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise: Option<f64>,
}

impl SensorBlock {
    /// Block of one sensor with default parameters.
    pub fn new(kind: SensorKind) -> Self {
        Self {
            kind,
            count: 1,
            min_val: None,
            max_val: None,
            base_hz: None,
            amp: None,
            noise: None,
        }
    }

    /// Resolve the signal model for this block, applying per-kind defaults.
    pub fn model(&self) -> SignalModel {
        match self.kind {
            SensorKind::Temperature => SignalModel::BoundedNoise {
                min_val: self.min_val.unwrap_or(defaults::TEMP_MIN_VAL),
                max_val: self.max_val.unwrap_or(defaults::TEMP_MAX_VAL),
                noise: self.noise.unwrap_or(defaults::TEMP_NOISE),
            },
            SensorKind::Vibration => SignalModel::Oscillation {
                base_hz: self.base_hz.unwrap_or(defaults::VIB_BASE_HZ),
                amp: self.amp.unwrap_or(defaults::VIB_AMP),
                noise: self.noise.unwrap_or(defaults::VIB_NOISE),
            },
        }
    }
}
