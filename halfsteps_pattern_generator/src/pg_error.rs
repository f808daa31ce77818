use thiserror::Error;

/// Enumerates the different types of errors
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum PatternGeneratorError {
    /// An initial foot pose is not a rigid transform (non-finite translation or non-unit rotation).
    #[error("halfsteps_pattern_generator: InvalidInitialPose of the {} foot", .0)]
    InvalidInitialPose(String),
    /// A footprint carries a non-finite value.
    #[error("halfsteps_pattern_generator: InvalidFootprint #{}, field {}", .0, .1)]
    InvalidFootprint(usize, String),
    /// The initial center of mass height is not finite or not above the ground.
    #[error("halfsteps_pattern_generator: InvalidCenterOfMass height {}", .0)]
    InvalidCenterOfMass(f64),
    #[error("halfsteps_pattern_generator: InvalidParameters {}", .0)]
    InvalidParameters(String),
    /// Flat step data must hold the 6 initial values followed by 7 values per step.
    #[error("halfsteps_pattern_generator: MalformedStepData of length {}", .0)]
    MalformedStepData(usize),
    /// A solver returned series whose length differs from its reported size.
    #[error(
        "halfsteps_pattern_generator: InconsistentStepFeatures {} has {} samples, expected {}",
        .series, .actual, .expected
    )]
    InconsistentStepFeatures {
        series: &'static str,
        expected: usize,
        actual: usize,
    },
    /// Error reported by the solver itself
    #[error("halfsteps_pattern_generator: solver error {}", .0)]
    Solver(String),
}
