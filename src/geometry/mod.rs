//! 3D vector helpers
//!
//! - [`look_vector`] - direction a camera with the given yaw/pitch faces
//! - [`closest_point_along`] - closest point on one line to another line
//! - [`box_intersection_with_ray`] - where a ray enters an axis-aligned box
//!
//! All helpers are generic over [`Vector3`]; [`Vec3f`] is the bundled implementation.
//!
//! Coordinates follow the convention where yaw `0` looks down `+Z`, positive yaw
//! turns towards `-X`, and positive pitch looks down (`-Y`).

mod vector;

use serde::{Deserialize, Serialize};

pub use vector::{Vec3f, Vector3};

/// Below this `1 - cos²` the two lines are treated as parallel
const PARALLEL_EPSILON: f32 = 1e-10;

/// Unit of the angles passed to [`look_vector`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    /// Angles in degrees
    #[default]
    Degrees,
    /// Angles in radians
    Radians,
}

impl AngleUnit {
    fn to_radians(self, angle: f32) -> f32 {
        match self {
            Self::Degrees => angle.to_radians(),
            Self::Radians => angle,
        }
    }
}

/// Unit direction for the given yaw and pitch
///
/// # Examples
///
/// ```
/// use moulberry_utils::geometry::{look_vector, AngleUnit, Vec3f};
///
/// let v: Vec3f = look_vector(0.0, 90.0, AngleUnit::Degrees);
/// assert!(v.approx_eq(&Vec3f::new(0.0, -1.0, 0.0), 1e-6));
/// ```
#[must_use]
pub fn look_vector<V: Vector3>(yaw: f32, pitch: f32, unit: AngleUnit) -> V {
    let pitch = unit.to_radians(pitch);
    let yaw = -unit.to_radians(yaw);

    let (sin_yaw, cos_yaw) = yaw.sin_cos();
    let (sin_pitch, cos_pitch) = pitch.sin_cos();

    V::new(sin_yaw * cos_pitch, -sin_pitch, cos_yaw * cos_pitch)
}

/// Closest point on the line `along` to the line `to`
///
/// Each line is given as a point on it and a direction (need not be normalized).
/// If the lines intersect this is the intersection point. Returns `None` for
/// parallel lines, where every point is equally close.
#[must_use]
pub fn closest_point_along<V: Vector3>(
    along_point: V,
    along_dir: V,
    to_point: V,
    to_dir: V,
) -> Option<V> {
    let along_dir = along_dir.normalize();
    let to_dir = to_dir.normalize();

    let cos = along_dir.dot(to_dir);
    let n = cos.mul_add(-cos, 1.0);
    if n.is_nan() || n < PARALLEL_EPSILON {
        return None;
    }

    // Move both points to the foot of the perpendicular from the origin
    let along_point = along_point.sub(along_dir.scale(along_point.dot(along_dir)));
    let to_point = to_point.sub(to_dir.scale(to_point.dot(to_dir)));

    let delta = to_point.sub(along_point);
    let a = delta.dot(along_dir);
    let b = delta.dot(to_dir);

    let f = b.mul_add(-cos, a) / n;
    Some(along_point.add(along_dir.scale(f)))
}

/// Point at which a ray first hits an axis-aligned box
///
/// `box_min` must be component-wise `<=` `box_max`. If the ray starts inside
/// the box (faces inclusive) the origin itself is returned. Returns `None` if
/// the ray misses, including for a zero-length direction.
///
/// # Examples
///
/// ```
/// use moulberry_utils::geometry::{box_intersection_with_ray, Vec3f};
///
/// let hit = box_intersection_with_ray(
///     Vec3f::new(-100.0, -10.0, -100.0),
///     Vec3f::new(100.0, -5.0, 100.0),
///     Vec3f::new(0.0, 0.0, 0.0),
///     Vec3f::new(1.0, -1.0, 1.0),
/// )
/// .unwrap();
/// assert!(hit.approx_eq(&Vec3f::new(5.0, -5.0, 5.0), 1e-4));
/// ```
#[must_use]
pub fn box_intersection_with_ray<V: Vector3>(
    box_min: V,
    box_max: V,
    ray_origin: V,
    ray_dir: V,
) -> Option<V> {
    let within = |lo: f32, v: f32, hi: f32| lo <= v && v <= hi;

    if within(box_min.x(), ray_origin.x(), box_max.x())
        && within(box_min.y(), ray_origin.y(), box_max.y())
        && within(box_min.z(), ray_origin.z(), box_max.z())
    {
        return Some(ray_origin);
    }

    let ray_dir = ray_dir.normalize();

    let hit_at = |scalar: f32| ray_origin.add(ray_dir.scale(scalar));

    let scalar = slab_entry(box_min.x(), box_max.x(), ray_origin.x(), ray_dir.x());
    if scalar != 0.0 {
        let hit = hit_at(scalar);
        if within(box_min.y(), hit.y(), box_max.y()) && within(box_min.z(), hit.z(), box_max.z()) {
            return Some(hit);
        }
    }

    let scalar = slab_entry(box_min.y(), box_max.y(), ray_origin.y(), ray_dir.y());
    if scalar != 0.0 {
        let hit = hit_at(scalar);
        if within(box_min.x(), hit.x(), box_max.x()) && within(box_min.z(), hit.z(), box_max.z()) {
            return Some(hit);
        }
    }

    let scalar = slab_entry(box_min.z(), box_max.z(), ray_origin.z(), ray_dir.z());
    if scalar != 0.0 {
        let hit = hit_at(scalar);
        if within(box_min.x(), hit.x(), box_max.x()) && within(box_min.y(), hit.y(), box_max.y()) {
            return Some(hit);
        }
    }

    None
}

/// Distance along the ray to the slab face facing the origin, or `0` if the
/// ray does not approach that face
fn slab_entry(min: f32, max: f32, origin: f32, ray: f32) -> f32 {
    if max < origin {
        if ray < 0.0 {
            return (max - origin) / ray;
        }
    } else if min > origin && ray > 0.0 {
        return (min - origin) / ray;
    }
    0.0
}
