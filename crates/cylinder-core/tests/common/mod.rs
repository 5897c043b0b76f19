// Shared fixtures: a window-free camera and frame builders.
#![allow(dead_code)]

use cylinder_core::{FrameInput, PointerState, Ray, RayCaster, SceneConfig, SceneState};
use glam::{DVec2, DVec3};

/// Eye on +X looking down -X. A screen point `(sx, sy)` casts a ray
/// through the world point `(0, sx, sy)`.
pub struct PlaneCamera {
    pub eye: DVec3,
}

impl Default for PlaneCamera {
    fn default() -> Self {
        Self {
            eye: DVec3::new(10.0, 0.0, 0.0),
        }
    }
}

impl PlaneCamera {
    /// Screen point whose ray passes through `world`.
    pub fn screen_for(&self, world: DVec3) -> DVec2 {
        let k = self.eye.x / (self.eye.x - world.x);
        DVec2::new(world.y * k, world.z * k)
    }
}

impl RayCaster for PlaneCamera {
    fn screen_to_ray(&self, screen: DVec2) -> Ray {
        Ray::through(self.eye, DVec3::new(0.0, screen.x, screen.y))
    }

    fn eye_position(&self) -> DVec3 {
        self.eye
    }
}

/// Casts the same ray from `eye` through `target` whatever the screen point.
pub struct FixedRayCamera {
    pub eye: DVec3,
    pub target: DVec3,
}

impl RayCaster for FixedRayCamera {
    fn screen_to_ray(&self, _screen: DVec2) -> Ray {
        Ray::through(self.eye, self.target)
    }

    fn eye_position(&self) -> DVec3 {
        self.eye
    }
}

pub fn press_at(position: DVec2) -> FrameInput {
    FrameInput {
        elapsed_seconds: 0.0,
        pointer: PointerState {
            position,
            pressed: true,
            held: true,
            ..Default::default()
        },
    }
}

pub fn hold_at(position: DVec2) -> FrameInput {
    FrameInput {
        elapsed_seconds: 0.0,
        pointer: PointerState {
            position,
            held: true,
            ..Default::default()
        },
    }
}

pub fn release_at(position: DVec2) -> FrameInput {
    FrameInput {
        elapsed_seconds: 0.0,
        pointer: PointerState {
            position,
            released: true,
            ..Default::default()
        },
    }
}

/// `columns` x `rows` scene with default tuning (radius 2, height 6, margin 1).
pub fn scene(columns: u32, rows: u32) -> SceneState {
    SceneState::new(SceneConfig::default().with_grid(columns, rows)).unwrap()
}

pub fn approx_eq(a: DVec3, b: DVec3) -> bool {
    (a - b).length() < 1e-9
}
