use nalgebra as na;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<Point> for na::Vector3<f64> {
    fn from(value: Point) -> Self {
        na::Vector3::new(value.x, value.y, value.z)
    }
}

impl From<na::Vector3<f64>> for Point {
    fn from(value: na::Vector3<f64>) -> Self {
        Self {
            x: value.x,
            y: value.y,
            z: value.z,
        }
    }
}
