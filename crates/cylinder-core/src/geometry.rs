//! Stateless geometry used by picking, dragging and snapping.
//!
//! All planes here are of the form `x = plane_x`. Queries that can
//! degenerate return `None` and leave the fallback to the caller.

use crate::constants::PARALLEL_EPSILON;
use glam::{DMat4, DVec3};
use std::f64::consts::TAU;

/// Half-line with a unit-length direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
}

impl Ray {
    /// Builds a ray, normalizing `direction`.
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Ray from `origin` through `target`.
    pub fn through(origin: DVec3, target: DVec3) -> Self {
        Self::new(origin, target - origin)
    }

    #[inline]
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }
}

/// Samples the curved surface of a Z-axis cylinder centred on the origin.
///
/// Points are emitted row by row (bottom row first), and within a row by
/// increasing angle starting at +X. Slot indices elsewhere refer to this
/// exact order. A single row sits at `z = 0`.
pub fn generate_cylinder_grid(
    radius: f64,
    height: f64,
    angular_divisions: u32,
    height_divisions: u32,
    margin: f64,
) -> Vec<DVec3> {
    if angular_divisions == 0 || height_divisions == 0 {
        return Vec::new();
    }
    let effective_height = height - margin * 2.0;
    if effective_height <= 0.0 {
        return Vec::new();
    }

    let mut positions =
        Vec::with_capacity(angular_divisions as usize * height_divisions as usize);
    for v in 0..height_divisions {
        let z = if height_divisions == 1 {
            0.0
        } else {
            (v as f64 / (height_divisions - 1) as f64 - 0.5) * effective_height
        };
        for u in 0..angular_divisions {
            let angle = (u as f64 / angular_divisions as f64) * TAU;
            positions.push(DVec3::new(radius * angle.cos(), radius * angle.sin(), z));
        }
    }
    positions
}

/// Intersects the infinite line through `start` and `end` with `x = plane_x`.
///
/// The solved parameter is not clamped, so the point may lie outside the
/// segment.
pub fn line_plane_intersection(start: DVec3, end: DVec3, plane_x: f64) -> Option<DVec3> {
    let direction = end - start;
    if direction.x.abs() < PARALLEL_EPSILON {
        return None;
    }
    let t = (plane_x - start.x) / direction.x;
    Some(start + direction * t)
}

/// Intersects a ray with `x = plane_x`; hits behind the origin are rejected.
pub fn ray_plane_intersection(origin: DVec3, direction: DVec3, plane_x: f64) -> Option<DVec3> {
    if direction.x.abs() < PARALLEL_EPSILON {
        return None;
    }
    let t = (plane_x - origin.x) / direction.x;
    if t < 0.0 {
        return None;
    }
    Some(origin + direction * t)
}

/// Distance from `point` to the infinite line through `line_start` and
/// `line_end`. Coincident endpoints degrade to point-to-point distance.
pub fn point_to_line_distance(point: DVec3, line_start: DVec3, line_end: DVec3) -> f64 {
    let line = line_end - line_start;
    let offset = point - line_start;
    if line.length() < PARALLEL_EPSILON {
        return point.distance(line_start);
    }
    offset.cross(line.normalize()).length()
}

/// World position under the pointer: the hit on `x = plane_x` when
/// constrained and reachable, otherwise `fallback_distance` along the ray.
pub fn project_pointer_to_world(
    ray_origin: DVec3,
    ray_direction: DVec3,
    fallback_distance: f64,
    constrain_to_plane: bool,
    plane_x: f64,
) -> DVec3 {
    if constrain_to_plane {
        if let Some(hit) = ray_plane_intersection(ray_origin, ray_direction, plane_x) {
            return hit;
        }
    }
    ray_origin + ray_direction * fallback_distance
}

/// Nearest non-negative hit distance along `ray`, if it touches the sphere.
///
/// A ray starting inside the sphere reports the exit distance.
#[inline]
pub fn ray_sphere(ray: &Ray, center: DVec3, radius: f64) -> Option<f64> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let root = disc.sqrt();
    let near = -b - root;
    if near >= 0.0 {
        return Some(near);
    }
    let far = -b + root;
    (far >= 0.0).then_some(far)
}

/// Local-to-world transform of the cylinder for a given spin angle.
#[inline]
pub fn rotation_transform(angle_radians: f64) -> DMat4 {
    DMat4::from_rotation_z(angle_radians)
}
