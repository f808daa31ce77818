use nalgebra as na;
use serde::{Deserialize, Serialize};

use crate::Point;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }
}

impl From<Quaternion> for na::Quaternion<f64> {
    fn from(value: Quaternion) -> Self {
        na::Quaternion::new(value.w, value.x, value.y, value.z)
    }
}

impl From<na::Quaternion<f64>> for Quaternion {
    fn from(value: na::Quaternion<f64>) -> Self {
        Self {
            x: value.i,
            y: value.j,
            z: value.k,
            w: value.w,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pose {
    pub position: Point,
    pub orientation: Quaternion,
}
