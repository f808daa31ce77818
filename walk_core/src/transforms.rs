use na::geometry::{Isometry3, Translation3, UnitQuaternion};
use nalgebra as na;

use crate::{Footprint2d, Pose};

const UNIT_NORM_TOLERANCE: f64 = 1e-9;

pub fn isometry_from_pose(pose: impl Into<Pose>) -> Isometry3<f64> {
    let pose: Pose = pose.into();
    let trans = Translation3::new(pose.position.x, pose.position.y, pose.position.z);
    let rot = UnitQuaternion::new_normalize(pose.orientation.into());

    Isometry3::from_parts(trans, rot)
}

/// Lift a planar footprint to a 3-D transform lying on the ground plane.
pub fn isometry_from_footprint(footprint: &Footprint2d) -> Isometry3<f64> {
    planar_isometry(footprint.x, footprint.y, 0.0, footprint.theta)
}

/// Transform translated by `(x, y, z)` and rotated by `heading` radians around the vertical axis.
pub fn planar_isometry(x: f64, y: f64, z: f64, heading: f64) -> Isometry3<f64> {
    Isometry3::from_parts(
        Translation3::new(x, y, z),
        UnitQuaternion::from_axis_angle(&na::Vector3::z_axis(), heading),
    )
}

/// Heading of a transform, read from the first column of its rotation matrix.
pub fn heading(iso: &Isometry3<f64>) -> f64 {
    let rot = iso.rotation.to_rotation_matrix();
    rot[(1, 0)].atan2(rot[(0, 0)])
}

pub fn isometry_to_footprint(iso: &Isometry3<f64>) -> Footprint2d {
    Footprint2d {
        x: iso.translation.x,
        y: iso.translation.y,
        theta: heading(iso),
    }
}

/// Transform taking `previous` onto `new`, i.e. `new * previous⁻¹`.
pub fn relative_transform(new: &Isometry3<f64>, previous: &Isometry3<f64>) -> Isometry3<f64> {
    new * previous.inverse()
}

/// True when the translation is finite and the rotation is a finite unit quaternion.
pub fn is_rigid_transform(iso: &Isometry3<f64>) -> bool {
    let q = iso.rotation.quaternion();
    iso.translation.vector.iter().all(|v| v.is_finite())
        && q.coords.iter().all(|v| v.is_finite())
        && (q.norm() - 1.0).abs() < UNIT_NORM_TOLERANCE
}

/// Blend two transforms, `weight` being the share of `t2` (0 gives `t1`, 1 gives `t2`).
pub fn interpolate(t1: &Isometry3<f64>, t2: &Isometry3<f64>, weight: f64) -> Isometry3<f64> {
    let translation = t1.translation.vector.lerp(&t2.translation.vector, weight);
    let res = t1.rotation.try_slerp(&t2.rotation, weight, 1e-9);
    match res {
        Some(rotation) => Isometry3::from_parts(translation.into(), rotation),
        // opposite rotations, keep the closest one
        None => {
            if weight > 0.5 {
                Isometry3::from_parts(translation.into(), t2.rotation)
            } else {
                Isometry3::from_parts(translation.into(), t1.rotation)
            }
        }
    }
}
