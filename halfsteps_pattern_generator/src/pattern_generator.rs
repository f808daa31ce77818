use nalgebra as na;
use walk_core::{
    trajectory::seconds_to_duration,
    transforms::{is_rigid_transform, planar_isometry},
    FootTrajectory, Footprint, PointTrajectory, WalkTrajectories,
};

use crate::{
    parameters::PatternGeneratorParameters,
    pg_error::PatternGeneratorError,
    solver::{HalfStepsSolver, StepFeatures},
    step_data::{LeadingFoot, StepData},
};

/// Walking pattern generator delegating gait synthesis to a half-steps solver.
///
/// Cloning copies the inputs and every computed trajectory.
#[derive(Debug, Clone)]
pub struct HalfStepsPatternGenerator<S> {
    solver: S,
    parameters: PatternGeneratorParameters,
    footprints: Vec<Footprint>,
    initial_left_foot: na::Isometry3<f64>,
    initial_right_foot: na::Isometry3<f64>,
    initial_center_of_mass: na::Vector3<f64>,
    start_with_left_foot: bool,
    trajectories: WalkTrajectories,
}

impl<S: HalfStepsSolver> HalfStepsPatternGenerator<S> {
    pub fn new(solver: S) -> Self {
        Self::new_with_parameters(solver, PatternGeneratorParameters::default())
    }

    pub fn new_with_parameters(solver: S, parameters: PatternGeneratorParameters) -> Self {
        Self {
            solver,
            parameters,
            footprints: Vec::new(),
            initial_left_foot: na::Isometry3::identity(),
            initial_right_foot: na::Isometry3::identity(),
            initial_center_of_mass: na::Vector3::zeros(),
            start_with_left_foot: true,
            trajectories: WalkTrajectories::default(),
        }
    }

    pub fn solver(&self) -> &S {
        &self.solver
    }

    pub fn parameters(&self) -> &PatternGeneratorParameters {
        &self.parameters
    }

    pub fn set_parameters(&mut self, parameters: PatternGeneratorParameters) {
        self.parameters = parameters;
    }

    pub fn footprints(&self) -> &[Footprint] {
        &self.footprints
    }

    pub fn set_footprints(&mut self, footprints: Vec<Footprint>) {
        self.footprints = footprints;
    }

    pub fn set_initial_positions(
        &mut self,
        left_foot: na::Isometry3<f64>,
        right_foot: na::Isometry3<f64>,
        center_of_mass: na::Vector3<f64>,
        start_with_left_foot: bool,
    ) {
        self.initial_left_foot = left_foot;
        self.initial_right_foot = right_foot;
        self.initial_center_of_mass = center_of_mass;
        self.start_with_left_foot = start_with_left_foot;
    }

    pub fn initial_left_foot_position(&self) -> &na::Isometry3<f64> {
        &self.initial_left_foot
    }

    pub fn initial_right_foot_position(&self) -> &na::Isometry3<f64> {
        &self.initial_right_foot
    }

    pub fn initial_center_of_mass_position(&self) -> &na::Vector3<f64> {
        &self.initial_center_of_mass
    }

    pub fn start_with_left_foot(&self) -> bool {
        self.start_with_left_foot
    }

    pub fn leading_foot(&self) -> LeadingFoot {
        LeadingFoot::from_start_with_left_foot(self.start_with_left_foot)
    }

    /// Footprints relativized against the support foot, as handed to the solver.
    pub fn step_data(&self) -> StepData {
        StepData::from_footprints(
            &self.footprints,
            &self.initial_left_foot,
            &self.initial_right_foot,
            self.leading_foot(),
        )
    }

    pub fn left_foot_trajectory(&self) -> &FootTrajectory {
        &self.trajectories.left_foot
    }

    pub fn right_foot_trajectory(&self) -> &FootTrajectory {
        &self.trajectories.right_foot
    }

    pub fn center_of_mass_trajectory(&self) -> &PointTrajectory {
        &self.trajectories.center_of_mass
    }

    pub fn zmp_trajectory(&self) -> &PointTrajectory {
        &self.trajectories.zmp
    }

    pub fn trajectories(&self) -> &WalkTrajectories {
        &self.trajectories
    }

    pub fn into_trajectories(self) -> WalkTrajectories {
        self.trajectories
    }

    /// Run the solver on the current inputs and replace the stored
    /// trajectories with its output. The previous trajectories are kept when
    /// an error is returned.
    pub fn compute_trajectories(&mut self) -> Result<(), PatternGeneratorError> {
        self.validate_inputs()?;

        let com_height = self.initial_center_of_mass.z;
        let step_data = self.step_data().to_flat();
        log::debug!(
            "solving {} footprints ({} step values), leading foot {}",
            self.footprints.len(),
            step_data.len(),
            self.leading_foot().as_char()
        );

        let features = self.solver.produce_seq_slided_half_step_features(
            &self.parameters,
            com_height,
            &step_data,
            self.leading_foot(),
        )?;
        features.check_consistency()?;

        self.trajectories =
            unpack_step_features(&features, com_height, self.parameters.sampling_period);
        log::info!(
            "computed {} samples ({:.3}s) from {} footprints",
            self.trajectories.len(),
            features.size as f64 * self.parameters.sampling_period,
            self.footprints.len()
        );
        Ok(())
    }

    fn validate_inputs(&self) -> Result<(), PatternGeneratorError> {
        self.parameters.validate()?;
        if !is_rigid_transform(&self.initial_left_foot) {
            return Err(PatternGeneratorError::InvalidInitialPose("left".to_string()));
        }
        if !is_rigid_transform(&self.initial_right_foot) {
            return Err(PatternGeneratorError::InvalidInitialPose("right".to_string()));
        }
        let com = &self.initial_center_of_mass;
        if !(com.iter().all(|v| v.is_finite()) && com.z > 0.0) {
            return Err(PatternGeneratorError::InvalidCenterOfMass(com.z));
        }
        for (i, footprint) in self.footprints.iter().enumerate() {
            if let Some(field) = footprint.first_non_finite() {
                return Err(PatternGeneratorError::InvalidFootprint(i, field.to_string()));
            }
        }
        Ok(())
    }
}

fn foot_pose(x: f64, y: f64, height: f64, heading_degrees: f64) -> na::Isometry3<f64> {
    planar_isometry(x, y, height, heading_degrees.to_radians())
}

/// Reshape solver series into trajectories, every sample lasting `sampling_period`.
fn unpack_step_features(
    features: &StepFeatures,
    com_height: f64,
    sampling_period: f64,
) -> WalkTrajectories {
    let duration = seconds_to_duration(sampling_period);
    let mut trajectories = WalkTrajectories::with_capacity(features.size);
    for i in 0..features.size {
        trajectories.left_foot.push(
            duration,
            foot_pose(
                features.left_foot_x[i],
                features.left_foot_y[i],
                features.left_foot_height[i],
                features.left_foot_orientation[i],
            ),
        );
        trajectories.right_foot.push(
            duration,
            foot_pose(
                features.right_foot_x[i],
                features.right_foot_y[i],
                features.right_foot_height[i],
                features.right_foot_orientation[i],
            ),
        );
        trajectories.center_of_mass.push(
            duration,
            na::Vector3::new(features.com_x[i], features.com_y[i], com_height),
        );
        trajectories
            .zmp
            .push(duration, na::Vector3::new(features.zmp_x[i], features.zmp_y[i], 0.0));
    }
    trajectories
}
