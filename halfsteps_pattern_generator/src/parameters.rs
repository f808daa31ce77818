use serde::{Deserialize, Serialize};

use crate::pg_error::PatternGeneratorError;

const DEFAULT_SAMPLING_PERIOD: f64 = 0.005;
const DEFAULT_GRAVITY: f64 = 9.81;
const DEFAULT_TIME_BEFORE_ZMP_SHIFT: f64 = 0.95;
const DEFAULT_TIME_AFTER_ZMP_SHIFT: f64 = 1.05;
const DEFAULT_HALF_STEP_LENGTH: f64 = 2.0;

/// Upper bound on `half_step_length / sampling_period`.
pub const MAX_SAMPLES_PER_HALF_STEP: f64 = 1e6;

/// Physical constants and timing handed to the half-steps solver.
///
/// Every field falls back to its default when missing from a TOML table:
///
/// ```toml
/// [parameters]
/// sampling_period = 0.01
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternGeneratorParameters {
    /// Time between two trajectory samples, in seconds.
    pub sampling_period: f64,
    /// Gravitational acceleration, in m/s².
    pub gravity: f64,
    /// Start of the zmp shift, as a fraction of a half-step.
    pub time_before_zmp_shift: f64,
    /// End of the zmp shift, as a fraction of a half-step.
    pub time_after_zmp_shift: f64,
    /// Nominal half-step length, in the solver's units.
    pub half_step_length: f64,
}

impl Default for PatternGeneratorParameters {
    fn default() -> Self {
        Self {
            sampling_period: DEFAULT_SAMPLING_PERIOD,
            gravity: DEFAULT_GRAVITY,
            time_before_zmp_shift: DEFAULT_TIME_BEFORE_ZMP_SHIFT,
            time_after_zmp_shift: DEFAULT_TIME_AFTER_ZMP_SHIFT,
            half_step_length: DEFAULT_HALF_STEP_LENGTH,
        }
    }
}

impl PatternGeneratorParameters {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn validate(&self) -> Result<(), PatternGeneratorError> {
        let positive = [
            ("sampling_period", self.sampling_period),
            ("gravity", self.gravity),
            ("half_step_length", self.half_step_length),
            ("time_before_zmp_shift", self.time_before_zmp_shift),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(PatternGeneratorError::InvalidParameters(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }
        if !self.time_after_zmp_shift.is_finite()
            || self.time_after_zmp_shift <= self.time_before_zmp_shift
        {
            return Err(PatternGeneratorError::InvalidParameters(format!(
                "zmp shift window [{}, {}] is empty",
                self.time_before_zmp_shift, self.time_after_zmp_shift
            )));
        }
        let samples_per_half_step = self.half_step_length / self.sampling_period;
        if samples_per_half_step > MAX_SAMPLES_PER_HALF_STEP {
            return Err(PatternGeneratorError::InvalidParameters(format!(
                "{samples_per_half_step} samples per half-step, at most \
                 {MAX_SAMPLES_PER_HALF_STEP} allowed"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let parameters = PatternGeneratorParameters::default();
        assert_eq!(parameters.sampling_period, 0.005);
        assert_eq!(parameters.gravity, 9.81);
        assert_eq!(parameters.time_before_zmp_shift, 0.95);
        assert_eq!(parameters.time_after_zmp_shift, 1.05);
        assert_eq!(parameters.half_step_length, 2.0);
        assert_eq!(parameters.validate(), Ok(()));
    }

    #[test]
    fn test_partial_toml() {
        let parameters =
            PatternGeneratorParameters::from_toml("sampling_period = 0.01\ngravity = 1.62\n")
                .unwrap();
        assert_eq!(parameters.sampling_period, 0.01);
        assert_eq!(parameters.gravity, 1.62);
        assert_eq!(parameters.half_step_length, DEFAULT_HALF_STEP_LENGTH);
    }

    #[test]
    fn test_invalid_parameters() {
        let parameters = PatternGeneratorParameters {
            sampling_period: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            parameters.validate(),
            Err(PatternGeneratorError::InvalidParameters(_))
        ));

        let parameters = PatternGeneratorParameters {
            time_before_zmp_shift: 1.1,
            ..Default::default()
        };
        assert!(matches!(
            parameters.validate(),
            Err(PatternGeneratorError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_too_many_samples_per_half_step() {
        let parameters = PatternGeneratorParameters {
            sampling_period: 1e-300,
            ..Default::default()
        };
        assert!(matches!(
            parameters.validate(),
            Err(PatternGeneratorError::InvalidParameters(_))
        ));

        let parameters = PatternGeneratorParameters {
            sampling_period: 1e-6,
            half_step_length: 0.5,
            ..Default::default()
        };
        assert_eq!(parameters.validate(), Ok(()));
    }
}
