use chrono::TimeDelta;
use nalgebra as na;

use crate::transforms;

pub type FootTrajectory = Trajectory<na::Isometry3<f64>>;
pub type PointTrajectory = Trajectory<na::Vector3<f64>>;

pub fn seconds_to_duration(seconds: f64) -> TimeDelta {
    TimeDelta::nanoseconds((seconds * 1e9).round() as i64)
}

pub fn duration_to_seconds(duration: TimeDelta) -> f64 {
    match duration.num_nanoseconds() {
        Some(nanos) => nanos as f64 * 1e-9,
        None => duration.num_milliseconds() as f64 * 1e-3,
    }
}

/// Values that can be blended between two trajectory samples.
pub trait Interpolate {
    fn interpolate(&self, other: &Self, weight: f64) -> Self;
}

impl Interpolate for na::Isometry3<f64> {
    fn interpolate(&self, other: &Self, weight: f64) -> Self {
        transforms::interpolate(self, other, weight)
    }
}

impl Interpolate for na::Vector3<f64> {
    fn interpolate(&self, other: &Self, weight: f64) -> Self {
        self.lerp(other, weight)
    }
}

/// One trajectory sample, held for `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StampedPosition<T> {
    pub duration: TimeDelta,
    pub position: T,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<T> {
    data: Vec<StampedPosition<T>>,
}

impl<T> Default for Trajectory<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl<T> FromIterator<StampedPosition<T>> for Trajectory<T> {
    fn from_iter<I: IntoIterator<Item = StampedPosition<T>>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> Trajectory<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, duration: TimeDelta, position: T) {
        self.data.push(StampedPosition { duration, position });
    }

    pub fn data(&self) -> &[StampedPosition<T>] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StampedPosition<T>> {
        self.data.iter()
    }

    pub fn first(&self) -> Option<&T> {
        self.data.first().map(|s| &s.position)
    }

    pub fn last(&self) -> Option<&T> {
        self.data.last().map(|s| &s.position)
    }

    pub fn total_duration(&self) -> TimeDelta {
        self.data
            .iter()
            .fold(TimeDelta::zero(), |acc, sample| acc + sample.duration)
    }
}

impl<T: Interpolate + Clone> Trajectory<T> {
    /// Value at `time` from the start of the trajectory, blended between the
    /// two samples around it. Times outside the trajectory are clamped.
    pub fn sample_at(&self, time: TimeDelta) -> Option<T> {
        let first = self.data.first()?;
        if time <= TimeDelta::zero() {
            return Some(first.position.clone());
        }

        let mut start = TimeDelta::zero();
        for (i, sample) in self.data.iter().enumerate() {
            let end = start + sample.duration;
            if time < end {
                let Some(next) = self.data.get(i + 1) else {
                    return Some(sample.position.clone());
                };
                let weight =
                    duration_to_seconds(time - start) / duration_to_seconds(sample.duration);
                return Some(sample.position.interpolate(&next.position, weight));
            }
            start = end;
        }
        self.last().cloned()
    }
}

impl<'a, T> IntoIterator for &'a Trajectory<T> {
    type Item = &'a StampedPosition<T>;
    type IntoIter = std::slice::Iter<'a, StampedPosition<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The four trajectories produced by one pattern generation. Sample `i` of
/// every trajectory describes the same instant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalkTrajectories {
    pub left_foot: FootTrajectory,
    pub right_foot: FootTrajectory,
    pub center_of_mass: PointTrajectory,
    pub zmp: PointTrajectory,
}

impl WalkTrajectories {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            left_foot: Trajectory::with_capacity(capacity),
            right_foot: Trajectory::with_capacity(capacity),
            center_of_mass: Trajectory::with_capacity(capacity),
            zmp: Trajectory::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.left_foot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left_foot.is_empty()
    }
}
