use serde::{Deserialize, Serialize};

/// Planar pose of a foot on the ground. `theta` is the heading in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Footprint2d {
    pub x: f64,
    pub y: f64,
    pub theta: f64,
}

impl Footprint2d {
    pub fn new(x: f64, y: f64, theta: f64) -> Self {
        Self { x, y, theta }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.theta.is_finite()
    }
}

/// A planned absolute foot placement together with the values shaping the
/// swing that brings the foot there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Footprint {
    pub position: Footprint2d,
    pub slide_up: f64,
    pub horizontal_distance: f64,
    pub step_height: f64,
    pub slide_down: f64,
}

impl Footprint {
    /// Name of the first non-finite field, if any.
    pub fn first_non_finite(&self) -> Option<&'static str> {
        if !self.position.is_finite() {
            return Some("position");
        }
        [
            ("slide_up", self.slide_up),
            ("horizontal_distance", self.horizontal_distance),
            ("step_height", self.step_height),
            ("slide_down", self.slide_down),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(name, _)| name)
    }
}
