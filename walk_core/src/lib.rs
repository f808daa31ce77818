//! Shared types for the walking pattern generators: footprints and poses as
//! they travel in plans and requests, helpers moving between planar footprints
//! and `nalgebra` isometries, and the timestamped trajectories the generators
//! fill.

mod walk_msg_types;

pub mod trajectory;
pub mod transforms;

pub use trajectory::{
    FootTrajectory, Interpolate, PointTrajectory, StampedPosition, Trajectory, WalkTrajectories,
};
pub use walk_msg_types::*;
