//! Vector commands - look, raycast, closest

use moulberry_utils::geometry::{
    AngleUnit, Vec3f, box_intersection_with_ray, closest_point_along, look_vector,
};
use moulberry_utils::output::{OutputMode, VectorResult};

/// Print the look vector for a yaw and pitch
pub fn look(yaw: f32, pitch: f32, radians: bool, mode: OutputMode) {
    let unit = if radians {
        AngleUnit::Radians
    } else {
        AngleUnit::Degrees
    };

    VectorResult {
        operation: "look".to_string(),
        vector: Some(look_vector(yaw, pitch, unit)),
    }
    .render(mode);
}

/// Print where a ray enters a box
pub fn raycast(min: Vec3f, max: Vec3f, origin: Vec3f, dir: Vec3f, mode: OutputMode) {
    VectorResult {
        operation: "raycast".to_string(),
        vector: box_intersection_with_ray(min, max, origin, dir),
    }
    .render(mode);
}

/// Print the closest point on one line to another
pub fn closest(along_point: Vec3f, along_dir: Vec3f, to_point: Vec3f, to_dir: Vec3f, mode: OutputMode) {
    VectorResult {
        operation: "closest".to_string(),
        vector: closest_point_along(along_point, along_dir, to_point, to_dir),
    }
    .render(mode);
}
