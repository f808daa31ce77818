//! Walking pattern generator turning a sequence of footprints into left foot,
//! right foot, center of mass and zmp trajectories for a humanoid robot.
//!
//! Footprints are relativized against the support foot into half-step
//! descriptors, handed to a [`HalfStepsSolver`], and the solver's parallel
//! series are reshaped into timestamped trajectories.
//!
//! Example usage:
//!
//! ```no_run
//! use halfsteps_pattern_generator::{LinearHalfStepsSolver, PlanRequest};
//!
//! let request = PlanRequest::load("data/straight_walk.toml")?;
//! let mut pg = request.to_pattern_generator(LinearHalfStepsSolver);
//! pg.compute_trajectories()?;
//! for sample in pg.zmp_trajectory() {
//!     println!("{:?}", sample.position);
//! }
//! # Ok::<(), anyhow::Error>(())
//!```

mod parameters;
mod pattern_generator;
mod pg_error;
mod request;
mod solver;
mod step_data;

pub mod export;

pub use parameters::{PatternGeneratorParameters, MAX_SAMPLES_PER_HALF_STEP};
pub use pattern_generator::HalfStepsPatternGenerator;
pub use pg_error::PatternGeneratorError;
pub use request::PlanRequest;
pub use solver::{HalfStepsSolver, LinearHalfStepsSolver, StepFeatures};
pub use step_data::{
    initial_step_offset, LeadingFoot, RelativeStepDescriptor, StepData, INITIAL_STEP_LEN,
    STEP_DESCRIPTOR_LEN,
};
