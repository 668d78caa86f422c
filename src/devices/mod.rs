//! Sensor and device construction.
//!
//! Devices are flat, ordered groupings of sensors; there is no hierarchy
//! beyond that. Sensors are expanded from the plan's `{kind, count}` blocks,
//! each with a private noise source seeded from the run seed.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::data_mgmt::models::SensorKind;
use crate::plan::DeviceSpec;
use crate::signals::SignalModel;

// Mixing constant for deriving per-sensor seeds from the run seed.
const SEED_MIX: u64 = 0x517cc1b727220a95;

/// A named, typed source of readings with its own noise state.
pub struct Sensor {
    kind: SensorKind,
    id: String,
    model: SignalModel,
    rng: ChaCha8Rng,
}

impl Sensor {
    pub fn new(kind: SensorKind, id: String, model: SignalModel, seed: u64) -> Self {
        Self {
            kind,
            id,
            model,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn kind(&self) -> SensorKind {
        self.kind
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Produce one raw reading at elapsed time `t`. Identity stamping is the
    /// driver's job; a sensor does not know which device owns it.
    pub fn read(&mut self, t: f64) -> f64 {
        self.model.sample(t, &mut self.rng)
    }
}

pub struct Device {
    pub id: String,
    pub sensors: Vec<Sensor>,
}

/// Expand the plan's device specs into concrete devices.
///
/// A `{kind, count: N}` block becomes sensors `<prefix>-0` through
/// `<prefix>-(N-1)`. Each sensor's RNG stream is derived from the run seed
/// and the sensor's global ordinal.
pub fn build_devices(specs: &[DeviceSpec], seed: u64) -> Vec<Device> {
    let mut ordinal: u64 = 0;
    specs
        .iter()
        .map(|spec| {
            let mut sensors = Vec::new();
            for block in &spec.sensors {
                for i in 0..block.count {
                    let id = format!("{}-{}", block.kind.id_prefix(), i);
                    let sensor_seed = seed.wrapping_mul(SEED_MIX) ^ ordinal;
                    sensors.push(Sensor::new(block.kind, id, block.model(), sensor_seed));
                    ordinal += 1;
                }
            }
            Device {
                id: spec.id.clone(),
                sensors,
            }
        })
        .collect()
}
