use nalgebra as na;
use walk_core::{
    transforms::{
        heading, isometry_from_footprint, isometry_to_footprint, planar_isometry,
        relative_transform,
    },
    Footprint,
};

use crate::pg_error::PatternGeneratorError;

pub const INITIAL_STEP_LEN: usize = 6;
pub const STEP_DESCRIPTOR_LEN: usize = 7;

/// Foot that swings first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadingFoot {
    Left,
    Right,
}

impl LeadingFoot {
    pub fn from_start_with_left_foot(start_with_left_foot: bool) -> Self {
        if start_with_left_foot {
            Self::Left
        } else {
            Self::Right
        }
    }

    /// Marker understood by the half-steps solvers.
    pub fn as_char(self) -> char {
        match self {
            Self::Left => 'L',
            Self::Right => 'R',
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A footprint expressed against the pose of the previous support foot.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RelativeStepDescriptor {
    pub slide_up: f64,
    pub horizontal_distance: f64,
    pub step_height: f64,
    pub slide_down: f64,
    pub x: f64,
    pub y: f64,
    pub theta_degrees: f64,
}

impl RelativeStepDescriptor {
    pub fn to_array(&self) -> [f64; STEP_DESCRIPTOR_LEN] {
        [
            self.slide_up,
            self.horizontal_distance,
            self.step_height,
            self.slide_down,
            self.x,
            self.y,
            self.theta_degrees,
        ]
    }

    fn from_slice(values: &[f64]) -> Self {
        Self {
            slide_up: values[0],
            horizontal_distance: values[1],
            step_height: values[2],
            slide_down: values[3],
            x: values[4],
            y: values[5],
            theta_degrees: values[6],
        }
    }

    /// The relative transform this descriptor encodes.
    pub fn relative_isometry(&self) -> na::Isometry3<f64> {
        planar_isometry(self.x, self.y, 0.0, self.theta_degrees.to_radians())
    }
}

/// Half the separation of the initial feet, mirrored, followed by the
/// heading of the initial right foot.
pub fn initial_step_offset(
    initial_left_foot: &na::Isometry3<f64>,
    initial_right_foot: &na::Isometry3<f64>,
) -> [f64; INITIAL_STEP_LEN] {
    let left = &initial_left_foot.translation;
    let right = &initial_right_foot.translation;
    let half_x = (left.x - right.x).abs() / 2.0;
    let half_y = (left.y - right.y).abs() / 2.0;
    [
        half_x,
        half_y,
        0.0,
        -half_x,
        -half_y,
        heading(initial_right_foot),
    ]
}

/// Step sequence in the shape consumed by the half-steps solvers.
#[derive(Debug, Clone, PartialEq)]
pub struct StepData {
    pub initial_step: [f64; INITIAL_STEP_LEN],
    pub steps: Vec<RelativeStepDescriptor>,
}

impl StepData {
    /// Relativize absolute footprints. Each footprint is expressed against the
    /// foot standing on the ground while it swings: the initial pose of the
    /// foot that does not lead for the first one, the previous footprint after.
    pub fn from_footprints(
        footprints: &[Footprint],
        initial_left_foot: &na::Isometry3<f64>,
        initial_right_foot: &na::Isometry3<f64>,
        leading_foot: LeadingFoot,
    ) -> Self {
        let mut previous_position = match leading_foot {
            LeadingFoot::Left => *initial_right_foot,
            LeadingFoot::Right => *initial_left_foot,
        };

        let mut steps = Vec::with_capacity(footprints.len());
        for footprint in footprints {
            let new_position = isometry_from_footprint(&footprint.position);
            let relative =
                isometry_to_footprint(&relative_transform(&new_position, &previous_position));
            steps.push(RelativeStepDescriptor {
                slide_up: footprint.slide_up,
                horizontal_distance: footprint.horizontal_distance,
                step_height: footprint.step_height,
                slide_down: footprint.slide_down,
                x: relative.x,
                y: relative.y,
                theta_degrees: relative.theta.to_degrees(),
            });
            previous_position = new_position;
        }

        Self {
            initial_step: initial_step_offset(initial_left_foot, initial_right_foot),
            steps,
        }
    }

    /// Parse a flat step data vector back into its parts.
    pub fn from_flat(values: &[f64]) -> Result<Self, PatternGeneratorError> {
        if values.len() < INITIAL_STEP_LEN
            || (values.len() - INITIAL_STEP_LEN) % STEP_DESCRIPTOR_LEN != 0
        {
            return Err(PatternGeneratorError::MalformedStepData(values.len()));
        }
        let (initial, rest) = values.split_at(INITIAL_STEP_LEN);
        let mut initial_step = [0.0; INITIAL_STEP_LEN];
        initial_step.copy_from_slice(initial);
        Ok(Self {
            initial_step,
            steps: rest
                .chunks_exact(STEP_DESCRIPTOR_LEN)
                .map(RelativeStepDescriptor::from_slice)
                .collect(),
        })
    }

    pub fn to_flat(&self) -> Vec<f64> {
        let mut values =
            Vec::with_capacity(INITIAL_STEP_LEN + STEP_DESCRIPTOR_LEN * self.steps.len());
        values.extend_from_slice(&self.initial_step);
        for step in &self.steps {
            values.extend_from_slice(&step.to_array());
        }
        values
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use walk_core::Footprint2d;

    use super::*;

    fn footprint(x: f64, y: f64, theta: f64) -> Footprint {
        Footprint {
            position: Footprint2d::new(x, y, theta),
            slide_up: -0.1,
            horizontal_distance: 0.31,
            step_height: 0.15,
            slide_down: -0.1,
        }
    }

    #[test]
    fn test_initial_step_offset() {
        let left = planar_isometry(0.0, 0.1, 0.0, 0.0);
        let right = planar_isometry(0.0, -0.1, 0.0, 0.0);
        let offset = initial_step_offset(&left, &right);
        assert_eq!(offset, [0.0, 0.1, 0.0, -0.0, -0.1, 0.0]);
    }

    #[test]
    fn test_initial_step_offset_is_mirrored() {
        let left = planar_isometry(0.3, -0.2, 0.0, 0.4);
        let right = planar_isometry(-0.1, 0.25, 0.0, 0.7);
        let offset = initial_step_offset(&left, &right);
        assert_eq!(offset[3], -offset[0]);
        assert_eq!(offset[4], -offset[1]);
        assert_eq!(offset[2], 0.0);
        assert_relative_eq!(offset[0], 0.2, epsilon = 1e-12);
        assert_relative_eq!(offset[1], 0.225, epsilon = 1e-12);
        assert_relative_eq!(offset[5], 0.7, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_footprints() {
        let left = planar_isometry(0.0, 0.1, 0.0, 0.0);
        let right = planar_isometry(0.0, -0.1, 0.0, 0.0);
        let step_data = StepData::from_footprints(&[], &left, &right, LeadingFoot::Left);
        assert!(step_data.steps.is_empty());
        assert_eq!(step_data.to_flat(), step_data.initial_step.to_vec());
    }

    #[test]
    fn test_steps_relative_to_support_foot() {
        let left = planar_isometry(0.0, 0.19, 0.0, 0.0);
        let right = planar_isometry(0.0, -0.19, 0.0, 0.0);
        let footprints = [
            footprint(0.25, 0.19, 0.0),
            footprint(0.5, -0.19, 0.0),
            footprint(0.75, 0.19, std::f64::consts::FRAC_PI_4),
        ];
        let step_data = StepData::from_footprints(&footprints, &left, &right, LeadingFoot::Left);
        assert_eq!(step_data.steps.len(), 3);

        let first = step_data.steps[0];
        assert_relative_eq!(first.x, 0.25, epsilon = 1e-12);
        assert_relative_eq!(first.y, 0.38, epsilon = 1e-12);
        assert_relative_eq!(first.theta_degrees, 0.0);
        assert_eq!(first.slide_up, -0.1);
        assert_eq!(first.horizontal_distance, 0.31);
        assert_eq!(first.step_height, 0.15);
        assert_eq!(first.slide_down, -0.1);

        let second = step_data.steps[1];
        assert_relative_eq!(second.x, 0.25, epsilon = 1e-12);
        assert_relative_eq!(second.y, -0.38, epsilon = 1e-12);

        assert_relative_eq!(step_data.steps[2].theta_degrees, 45.0, epsilon = 1e-9);
    }

    #[test]
    fn test_right_foot_leading_uses_left_support() {
        let left = planar_isometry(0.0, 0.19, 0.0, 0.0);
        let right = planar_isometry(0.0, -0.19, 0.0, 0.0);
        let footprints = [footprint(0.25, -0.19, 0.0)];
        let step_data = StepData::from_footprints(&footprints, &left, &right, LeadingFoot::Right);
        assert_relative_eq!(step_data.steps[0].y, -0.38, epsilon = 1e-12);
    }

    #[test]
    fn test_descriptor_recovers_footprint() {
        let left = planar_isometry(0.0, 0.19, 0.0, 0.0);
        let right = planar_isometry(0.0, -0.19, 0.0, 0.3);
        let target = footprint(0.4, 0.1, -0.6);
        let step_data = StepData::from_footprints(&[target], &left, &right, LeadingFoot::Left);
        let recovered = step_data.steps[0].relative_isometry() * right;
        let recovered = isometry_to_footprint(&recovered);
        assert_relative_eq!(recovered.x, 0.4, epsilon = 1e-9);
        assert_relative_eq!(recovered.y, 0.1, epsilon = 1e-9);
        assert_relative_eq!(recovered.theta, -0.6, epsilon = 1e-9);
    }

    #[test]
    fn test_flat_layout() {
        let left = planar_isometry(0.0, 0.19, 0.0, 0.0);
        let right = planar_isometry(0.0, -0.19, 0.0, 0.0);
        let footprints = [footprint(0.25, 0.19, 0.0), footprint(0.5, -0.19, 0.0)];
        let step_data = StepData::from_footprints(&footprints, &left, &right, LeadingFoot::Left);
        let flat = step_data.to_flat();
        assert_eq!(flat.len(), 6 + 2 * 7);
        assert_eq!(&flat[6..10], &[-0.1, 0.31, 0.15, -0.1]);
        assert_eq!(StepData::from_flat(&flat), Ok(step_data));
    }

    #[test]
    fn test_malformed_flat_step_data() {
        assert_eq!(
            StepData::from_flat(&[0.0; 5]),
            Err(PatternGeneratorError::MalformedStepData(5))
        );
        assert_eq!(
            StepData::from_flat(&[0.0; 10]),
            Err(PatternGeneratorError::MalformedStepData(10))
        );
    }

    #[test]
    fn test_leading_foot_marker() {
        assert_eq!(LeadingFoot::from_start_with_left_foot(true).as_char(), 'L');
        assert_eq!(LeadingFoot::from_start_with_left_foot(false).as_char(), 'R');
        assert_eq!(LeadingFoot::Left.other(), LeadingFoot::Right);
    }
}
