use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use walk_core::{transforms::isometry_from_pose, Footprint, Point, Pose};

use crate::{
    parameters::PatternGeneratorParameters, pattern_generator::HalfStepsPatternGenerator,
    solver::HalfStepsSolver,
};

/// Everything needed to plan one walk, as stored in a TOML request file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanRequest {
    pub initial_left_foot_position: Pose,
    pub initial_right_foot_position: Pose,
    pub initial_center_of_mass_position: Point,
    pub start_with_left_foot: bool,
    pub parameters: PatternGeneratorParameters,
    pub footprints: Vec<Footprint>,
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self {
            initial_left_foot_position: Pose::default(),
            initial_right_foot_position: Pose::default(),
            initial_center_of_mass_position: Point::default(),
            start_with_left_foot: true,
            parameters: PatternGeneratorParameters::default(),
            footprints: Vec::new(),
        }
    }
}

impl PlanRequest {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("couldn't read plan request {}", path.display()))?;
        Self::from_toml(&text)
            .with_context(|| format!("couldn't parse plan request {}", path.display()))
    }

    /// Generator loaded with this request's inputs, ready for `compute_trajectories`.
    pub fn to_pattern_generator<S: HalfStepsSolver>(
        &self,
        solver: S,
    ) -> HalfStepsPatternGenerator<S> {
        let mut pg = HalfStepsPatternGenerator::new_with_parameters(solver, self.parameters);
        pg.set_initial_positions(
            isometry_from_pose(self.initial_left_foot_position),
            isometry_from_pose(self.initial_right_foot_position),
            self.initial_center_of_mass_position.into(),
            self.start_with_left_foot,
        );
        pg.set_footprints(self.footprints.clone());
        pg
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;
    use crate::solver::LinearHalfStepsSolver;

    const STRAIGHT_WALK: &str = include_str!("../data/straight_walk.toml");

    #[test]
    fn test_parse_straight_walk() {
        let request = PlanRequest::from_toml(STRAIGHT_WALK).unwrap();
        assert!(request.start_with_left_foot);
        assert_eq!(request.footprints.len(), 6);
        assert_eq!(request.initial_left_foot_position.position.y, 0.19);
        assert_eq!(request.initial_left_foot_position.orientation.w, 1.0);
        assert_eq!(request.initial_center_of_mass_position.z, 0.8);
        assert_eq!(request.footprints[4].position.x, 0.75);
        assert_eq!(request.footprints[4].step_height, 0.15);
        assert_eq!(request.parameters, PatternGeneratorParameters::default());
    }

    #[test]
    fn test_parameters_override() {
        let request = PlanRequest::from_toml(
            r#"
            start_with_left_foot = false

            [parameters]
            half_step_length = 1.0
            "#,
        )
        .unwrap();
        assert!(!request.start_with_left_foot);
        assert_eq!(request.parameters.half_step_length, 1.0);
        assert_eq!(request.parameters.sampling_period, 0.005);
        assert!(request.footprints.is_empty());
    }

    #[test]
    fn test_plan_straight_walk() {
        let request = PlanRequest::from_toml(STRAIGHT_WALK).unwrap();
        let mut pg = request.to_pattern_generator(LinearHalfStepsSolver);
        assert_relative_eq!(pg.initial_center_of_mass_position().z, 0.8);
        pg.compute_trajectories().unwrap();
        assert_eq!(pg.trajectories().len(), 400 * (2 * 6 + 2));
        let left = pg.left_foot_trajectory().last().unwrap();
        assert_relative_eq!(left.translation.x, 0.75, epsilon = 1e-9);
    }
}
