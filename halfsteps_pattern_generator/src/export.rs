use std::io::Write;

use serde::Serialize;
use walk_core::{trajectory::duration_to_seconds, transforms::heading, WalkTrajectories};

/// One instant of a planned walk. Yaw angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectoryRow {
    pub time: f64,
    pub left_foot_x: f64,
    pub left_foot_y: f64,
    pub left_foot_z: f64,
    pub left_foot_yaw: f64,
    pub right_foot_x: f64,
    pub right_foot_y: f64,
    pub right_foot_z: f64,
    pub right_foot_yaw: f64,
    pub com_x: f64,
    pub com_y: f64,
    pub com_z: f64,
    pub zmp_x: f64,
    pub zmp_y: f64,
    pub zmp_z: f64,
}

const CSV_HEADER: &str = "time,left_foot_x,left_foot_y,left_foot_z,left_foot_yaw,\
right_foot_x,right_foot_y,right_foot_z,right_foot_yaw,com_x,com_y,com_z,zmp_x,zmp_y,zmp_z";

/// Flatten the four trajectories, `time` being the start of each sample.
pub fn trajectory_rows(trajectories: &WalkTrajectories) -> Vec<TrajectoryRow> {
    let mut time = 0.0;
    trajectories
        .left_foot
        .iter()
        .zip(&trajectories.right_foot)
        .zip(&trajectories.center_of_mass)
        .zip(&trajectories.zmp)
        .map(|(((left, right), com), zmp)| {
            let row = TrajectoryRow {
                time,
                left_foot_x: left.position.translation.x,
                left_foot_y: left.position.translation.y,
                left_foot_z: left.position.translation.z,
                left_foot_yaw: heading(&left.position),
                right_foot_x: right.position.translation.x,
                right_foot_y: right.position.translation.y,
                right_foot_z: right.position.translation.z,
                right_foot_yaw: heading(&right.position),
                com_x: com.position.x,
                com_y: com.position.y,
                com_z: com.position.z,
                zmp_x: zmp.position.x,
                zmp_y: zmp.position.y,
                zmp_z: zmp.position.z,
            };
            time += duration_to_seconds(left.duration);
            row
        })
        .collect()
}

pub fn write_csv(mut writer: impl Write, rows: &[TrajectoryRow]) -> std::io::Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for r in rows {
        writeln!(
            writer,
            "{:.3},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6}",
            r.time,
            r.left_foot_x,
            r.left_foot_y,
            r.left_foot_z,
            r.left_foot_yaw,
            r.right_foot_x,
            r.right_foot_y,
            r.right_foot_z,
            r.right_foot_yaw,
            r.com_x,
            r.com_y,
            r.com_z,
            r.zmp_x,
            r.zmp_y,
            r.zmp_z,
        )?;
    }
    Ok(())
}

pub fn write_json(writer: impl Write, rows: &[TrajectoryRow]) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, rows)
}
