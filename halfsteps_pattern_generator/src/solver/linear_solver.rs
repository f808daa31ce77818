use std::f64::consts::PI;

use nalgebra as na;
use walk_core::transforms::{heading, interpolate, planar_isometry};

use crate::{
    parameters::PatternGeneratorParameters,
    pg_error::PatternGeneratorError,
    solver::{HalfStepsSolver, StepFeatures},
    step_data::{LeadingFoot, StepData},
};

/// Kinematic half-steps solver.
///
/// Swings each foot along a straight line with a sinusoidal lift, moves the
/// zmp from foot to foot inside the zmp shift window and drags the center of
/// mass behind the zmp through a first-order lag of time constant
/// `sqrt(com_height / gravity)`. It does not guarantee dynamic balance.
///
/// Trajectories are expressed in the frame implied by the initial step: left
/// foot at `(o[0], o[1])`, right foot at `(o[3], o[4])`, both with heading
/// `o[5]`. `half_step_length` is read as the duration of a half-step in
/// seconds. Slide and horizontal distances are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearHalfStepsSolver;

impl HalfStepsSolver for LinearHalfStepsSolver {
    fn produce_seq_slided_half_step_features(
        &self,
        parameters: &PatternGeneratorParameters,
        com_height: f64,
        step_data: &[f64],
        leading_foot: LeadingFoot,
    ) -> Result<StepFeatures, PatternGeneratorError> {
        parameters.validate()?;
        if !(com_height.is_finite() && com_height > 0.0) {
            return Err(PatternGeneratorError::InvalidCenterOfMass(com_height));
        }
        let step_data = StepData::from_flat(step_data)?;

        let half_step_samples =
            ((parameters.half_step_length / parameters.sampling_period).round() as usize).max(1);
        let [left_x, left_y, ground, right_x, right_y, initial_heading] = step_data.initial_step;
        let mut feet = Feet {
            left: planar_isometry(left_x, left_y, ground, initial_heading),
            right: planar_isometry(right_x, right_y, ground, initial_heading),
        };

        let size = step_data
            .steps
            .len()
            .checked_mul(2)
            .and_then(|half_steps| half_steps.checked_add(2))
            .and_then(|half_steps| half_steps.checked_mul(half_step_samples))
            .ok_or_else(|| {
                PatternGeneratorError::InvalidParameters(format!(
                    "{} steps of {half_step_samples} samples per half-step overflow",
                    step_data.steps.len()
                ))
            })?;

        let time_constant = (com_height / parameters.gravity).sqrt();
        let mut recorder = FeatureRecorder::new(
            size,
            parameters.sampling_period / (time_constant + parameters.sampling_period),
            feet.midpoint(),
        );

        // move the zmp onto the first support foot
        let mut swing = leading_foot;
        let start = feet.midpoint();
        let support = planar_position(feet.get(swing.other()));
        for i in 1..=half_step_samples {
            let weight = i as f64 / half_step_samples as f64;
            recorder.record(&feet, start.lerp(&support, weight));
        }

        let before = parameters.time_before_zmp_shift;
        let after = parameters.time_after_zmp_shift;
        for step in &step_data.steps {
            let support = *feet.get(swing.other());
            let lift_off = *feet.get(swing);
            let touch_down = step.relative_isometry() * support;
            let support_xy = planar_position(&support);
            let touch_down_xy = planar_position(&touch_down);

            for i in 1..=2 * half_step_samples {
                // time in half-steps since the step started
                let s = i as f64 / half_step_samples as f64;
                let progress = (s / before).min(1.0);
                feet.set(swing, swing_pose(&lift_off, &touch_down, progress, step.step_height));

                let zmp = if s <= before {
                    support_xy
                } else if s < after {
                    support_xy.lerp(&touch_down_xy, (s - before) / (after - before))
                } else {
                    touch_down_xy
                };
                recorder.record(&feet, zmp);
            }
            // a zmp window ending past the step leaves the swing unfinished
            feet.set(swing, touch_down);
            swing = swing.other();
        }

        // back to double support
        let start = recorder.zmp;
        let end = feet.midpoint();
        for i in 1..=half_step_samples {
            let weight = i as f64 / half_step_samples as f64;
            recorder.record(&feet, start.lerp(&end, weight));
        }

        log::debug!(
            "linear solver produced {} samples for {} steps",
            recorder.features.size,
            step_data.steps.len()
        );
        Ok(recorder.features)
    }
}

fn planar_position(iso: &na::Isometry3<f64>) -> na::Vector2<f64> {
    iso.translation.vector.xy()
}

fn swing_pose(
    lift_off: &na::Isometry3<f64>,
    touch_down: &na::Isometry3<f64>,
    progress: f64,
    step_height: f64,
) -> na::Isometry3<f64> {
    if progress >= 1.0 {
        return *touch_down;
    }
    let eased = progress * progress * (3.0 - 2.0 * progress);
    let mut pose = interpolate(lift_off, touch_down, eased);
    pose.translation.vector.z = lift_off.translation.z
        + (touch_down.translation.z - lift_off.translation.z) * progress
        + step_height * (PI * progress).sin();
    pose
}

struct Feet {
    left: na::Isometry3<f64>,
    right: na::Isometry3<f64>,
}

impl Feet {
    fn get(&self, foot: LeadingFoot) -> &na::Isometry3<f64> {
        match foot {
            LeadingFoot::Left => &self.left,
            LeadingFoot::Right => &self.right,
        }
    }

    fn set(&mut self, foot: LeadingFoot, pose: na::Isometry3<f64>) {
        match foot {
            LeadingFoot::Left => self.left = pose,
            LeadingFoot::Right => self.right = pose,
        }
    }

    fn midpoint(&self) -> na::Vector2<f64> {
        (planar_position(&self.left) + planar_position(&self.right)) / 2.0
    }
}

struct FeatureRecorder {
    features: StepFeatures,
    com: na::Vector2<f64>,
    zmp: na::Vector2<f64>,
    com_gain: f64,
}

impl FeatureRecorder {
    fn new(capacity: usize, com_gain: f64, start: na::Vector2<f64>) -> Self {
        Self {
            features: StepFeatures::with_capacity(capacity),
            com: start,
            zmp: start,
            com_gain,
        }
    }

    fn record(&mut self, feet: &Feet, zmp: na::Vector2<f64>) {
        self.com += (zmp - self.com) * self.com_gain;
        self.zmp = zmp;
        self.features.push(
            foot_sample(&feet.left),
            foot_sample(&feet.right),
            [self.com.x, self.com.y],
            [zmp.x, zmp.y],
        );
    }
}

fn foot_sample(iso: &na::Isometry3<f64>) -> [f64; 4] {
    [
        iso.translation.x,
        iso.translation.y,
        iso.translation.z,
        heading(iso).to_degrees(),
    ]
}
