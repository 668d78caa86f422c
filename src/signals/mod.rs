//! Signal models for the simulated sensor kinds.
//!
//! Each model is a pure function of its parameters, the elapsed time and a
//! noise source. Adding a sensor kind means adding one variant here and one
//! arm in `sample`.

use std::f64::consts::TAU;

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_distr::Normal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignalError {
    #[error("min_val {min_val} exceeds max_val {max_val}")]
    InvertedBounds { min_val: f64, max_val: f64 },
    #[error("noise must be finite and non-negative, got {0}")]
    InvalidNoise(f64),
    #[error("{name} must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },
}

/// Parameters for one signal kind. Immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SignalModel {
    /// Independent uniform draws between two bounds, plus gaussian noise.
    BoundedNoise {
        min_val: f64,
        max_val: f64,
        noise: f64,
    },
    /// Sine wave deterministic in `t`, plus gaussian noise.
    Oscillation { base_hz: f64, amp: f64, noise: f64 },
}

impl SignalModel {
    /// Check parameter validity. Runs at plan validation so that `sample`
    /// cannot fail mid-run.
    pub fn validate(&self) -> Result<(), SignalError> {
        match *self {
            SignalModel::BoundedNoise {
                min_val,
                max_val,
                noise,
            } => {
                ensure_finite("min_val", min_val)?;
                ensure_finite("max_val", max_val)?;
                if min_val > max_val {
                    return Err(SignalError::InvertedBounds { min_val, max_val });
                }
                validate_noise(noise)
            }
            SignalModel::Oscillation {
                base_hz,
                amp,
                noise,
            } => {
                ensure_finite("base_hz", base_hz)?;
                ensure_finite("amp", amp)?;
                validate_noise(noise)
            }
        }
    }

    /// Produce one reading at elapsed time `t` seconds.
    ///
    /// Bounded-noise readings ignore `t`; consecutive calls are independent
    /// draws. Oscillation readings are deterministic in `t` apart from the
    /// noise term.
    pub fn sample(&self, t: f64, rng: &mut ChaCha8Rng) -> f64 {
        match *self {
            SignalModel::BoundedNoise {
                min_val,
                max_val,
                noise,
            } => rng.gen_range(min_val..=max_val) + gaussian(noise, rng),
            SignalModel::Oscillation {
                base_hz,
                amp,
                noise,
            } => amp * (TAU * base_hz * t).sin() + gaussian(noise, rng),
        }
    }
}

fn gaussian(noise: f64, rng: &mut ChaCha8Rng) -> f64 {
    if noise == 0.0 {
        return 0.0;
    }
    // Parameters are validated up front; Normal::new only rejects a negative
    // or non-finite standard deviation.
    Normal::new(0.0, noise)
        .map(|dist| rng.sample(dist))
        .unwrap_or(0.0)
}

fn validate_noise(noise: f64) -> Result<(), SignalError> {
    if !noise.is_finite() || noise < 0.0 {
        return Err(SignalError::InvalidNoise(noise));
    }
    Ok(())
}

fn ensure_finite(name: &'static str, value: f64) -> Result<(), SignalError> {
    if !value.is_finite() {
        return Err(SignalError::NonFiniteParameter { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_bounded_noise_stays_within_bounds_without_noise() {
        let model = SignalModel::BoundedNoise {
            min_val: 70.0,
            max_val: 90.0,
            noise: 0.0,
        };
        let mut rng = rng();
        for _ in 0..100 {
            let value = model.sample(0.0, &mut rng);
            assert!((70.0..=90.0).contains(&value), "out of bounds: {value}");
        }
    }

    #[test]
    fn test_degenerate_bounds_yield_constant() {
        let model = SignalModel::BoundedNoise {
            min_val: 42.0,
            max_val: 42.0,
            noise: 0.0,
        };
        let mut rng = rng();
        for _ in 0..10 {
            assert_eq!(model.sample(0.0, &mut rng), 42.0);
        }
    }

    #[test]
    fn test_oscillation_golden_values_without_noise() {
        let model = SignalModel::Oscillation {
            base_hz: 0.25,
            amp: 2.0,
            noise: 0.0,
        };
        let mut rng = rng();
        // Quarter period of a 0.25 Hz wave is 1 s: sin hits 1.0 there.
        assert!((model.sample(1.0, &mut rng) - 2.0).abs() < 1e-12);
        assert!((model.sample(0.0, &mut rng) - 0.0).abs() < 1e-12);
        assert!((model.sample(2.0, &mut rng) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_amplitude_is_pure_noise() {
        let model = SignalModel::Oscillation {
            base_hz: 20.0,
            amp: 0.0,
            noise: 0.0,
        };
        let mut rng = rng();
        assert_eq!(model.sample(0.3, &mut rng), 0.0);

        let noisy = SignalModel::Oscillation {
            base_hz: 20.0,
            amp: 0.0,
            noise: 1.0,
        };
        let values: Vec<f64> = (0..5).map(|_| noisy.sample(0.3, &mut rng)).collect();
        assert!(values.iter().any(|v| *v != 0.0));
    }

    #[test]
    fn test_same_seed_reproduces_samples() {
        let model = SignalModel::BoundedNoise {
            min_val: 0.0,
            max_val: 1.0,
            noise: 0.1,
        };
        let mut rng_a = ChaCha8Rng::seed_from_u64(99);
        let mut rng_b = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(model.sample(0.0, &mut rng_a), model.sample(0.0, &mut rng_b));
        }
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let model = SignalModel::BoundedNoise {
            min_val: 90.0,
            max_val: 70.0,
            noise: 0.0,
        };
        assert!(matches!(
            model.validate(),
            Err(SignalError::InvertedBounds { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_noise() {
        let model = SignalModel::Oscillation {
            base_hz: 20.0,
            amp: 2.0,
            noise: -0.5,
        };
        assert!(matches!(model.validate(), Err(SignalError::InvalidNoise(_))));

        let model = SignalModel::BoundedNoise {
            min_val: 0.0,
            max_val: 1.0,
            noise: f64::NAN,
        };
        assert!(matches!(model.validate(), Err(SignalError::InvalidNoise(_))));
    }

    #[test]
    fn test_validate_rejects_non_finite_parameters() {
        let model = SignalModel::Oscillation {
            base_hz: f64::INFINITY,
            amp: 2.0,
            noise: 0.0,
        };
        assert!(matches!(
            model.validate(),
            Err(SignalError::NonFiniteParameter { name: "base_hz", .. })
        ));
    }
}
