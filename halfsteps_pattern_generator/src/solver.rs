mod linear_solver;

pub use linear_solver::LinearHalfStepsSolver;

use crate::{
    parameters::PatternGeneratorParameters, pg_error::PatternGeneratorError, step_data::LeadingFoot,
};

/// Computes half-step walking features from flat step data.
///
/// `step_data` holds the 6 initial-step values followed by 7 values per step
/// (see [`crate::StepData`]). Feet headings in the result are in degrees.
pub trait HalfStepsSolver {
    fn produce_seq_slided_half_step_features(
        &self,
        parameters: &PatternGeneratorParameters,
        com_height: f64,
        step_data: &[f64],
        leading_foot: LeadingFoot,
    ) -> Result<StepFeatures, PatternGeneratorError>;
}

/// Parallel sample series produced by a solver, `size` entries each.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepFeatures {
    pub left_foot_x: Vec<f64>,
    pub left_foot_y: Vec<f64>,
    pub left_foot_height: Vec<f64>,
    pub left_foot_orientation: Vec<f64>,
    pub right_foot_x: Vec<f64>,
    pub right_foot_y: Vec<f64>,
    pub right_foot_height: Vec<f64>,
    pub right_foot_orientation: Vec<f64>,
    pub com_x: Vec<f64>,
    pub com_y: Vec<f64>,
    pub zmp_x: Vec<f64>,
    pub zmp_y: Vec<f64>,
    pub size: usize,
}

impl StepFeatures {
    pub fn with_capacity(capacity: usize) -> Self {
        let series = || Vec::with_capacity(capacity);
        Self {
            left_foot_x: series(),
            left_foot_y: series(),
            left_foot_height: series(),
            left_foot_orientation: series(),
            right_foot_x: series(),
            right_foot_y: series(),
            right_foot_height: series(),
            right_foot_orientation: series(),
            com_x: series(),
            com_y: series(),
            zmp_x: series(),
            zmp_y: series(),
            size: 0,
        }
    }

    /// Append one sample. Feet are `[x, y, height, heading in degrees]`.
    pub fn push(
        &mut self,
        left_foot: [f64; 4],
        right_foot: [f64; 4],
        com: [f64; 2],
        zmp: [f64; 2],
    ) {
        self.left_foot_x.push(left_foot[0]);
        self.left_foot_y.push(left_foot[1]);
        self.left_foot_height.push(left_foot[2]);
        self.left_foot_orientation.push(left_foot[3]);
        self.right_foot_x.push(right_foot[0]);
        self.right_foot_y.push(right_foot[1]);
        self.right_foot_height.push(right_foot[2]);
        self.right_foot_orientation.push(right_foot[3]);
        self.com_x.push(com[0]);
        self.com_y.push(com[1]);
        self.zmp_x.push(zmp[0]);
        self.zmp_y.push(zmp[1]);
        self.size += 1;
    }

    fn series(&self) -> [(&'static str, &[f64]); 12] {
        [
            ("left_foot_x", self.left_foot_x.as_slice()),
            ("left_foot_y", self.left_foot_y.as_slice()),
            ("left_foot_height", self.left_foot_height.as_slice()),
            ("left_foot_orientation", self.left_foot_orientation.as_slice()),
            ("right_foot_x", self.right_foot_x.as_slice()),
            ("right_foot_y", self.right_foot_y.as_slice()),
            ("right_foot_height", self.right_foot_height.as_slice()),
            ("right_foot_orientation", self.right_foot_orientation.as_slice()),
            ("com_x", self.com_x.as_slice()),
            ("com_y", self.com_y.as_slice()),
            ("zmp_x", self.zmp_x.as_slice()),
            ("zmp_y", self.zmp_y.as_slice()),
        ]
    }

    /// Every series must have exactly `size` samples.
    pub fn check_consistency(&self) -> Result<(), PatternGeneratorError> {
        for (series, values) in self.series() {
            if values.len() != self.size {
                return Err(PatternGeneratorError::InconsistentStepFeatures {
                    series,
                    expected: self.size,
                    actual: values.len(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_push_keeps_series_aligned() {
        let mut features = StepFeatures::with_capacity(2);
        features.push([0.0, 0.19, 0.0, 0.0], [0.0, -0.19, 0.0, 0.0], [0.0, 0.0], [0.0, 0.0]);
        features.push([0.1, 0.19, 0.05, 5.0], [0.0, -0.19, 0.0, 0.0], [0.0, -0.01], [0.0, -0.19]);
        assert_eq!(features.size, 2);
        assert_eq!(features.left_foot_orientation, vec![0.0, 5.0]);
        assert_eq!(features.check_consistency(), Ok(()));
    }

    #[test]
    fn test_inconsistent_series() {
        let mut features = StepFeatures::default();
        features.push([0.0; 4], [0.0; 4], [0.0; 2], [0.0; 2]);
        features.zmp_y.pop();
        assert_eq!(
            features.check_consistency(),
            Err(PatternGeneratorError::InconsistentStepFeatures {
                series: "zmp_y",
                expected: 1,
                actual: 0,
            })
        );
    }
}
