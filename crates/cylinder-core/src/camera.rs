//! Camera seam used by the interaction controller.
//!
//! The controller only needs two things from a camera: a world-space ray
//! under a screen position and the eye position. Frontends supply
//! [`OrbitCamera`]; tests supply their own [`RayCaster`].

use crate::constants::*;
use crate::geometry::Ray;
use glam::{DMat4, DVec2, DVec3, DVec4};

pub trait RayCaster {
    /// World-space ray under `screen` (pixels, origin top-left).
    fn screen_to_ray(&self, screen: DVec2) -> Ray;
    fn eye_position(&self) -> DVec3;
}

/// Right-handed perspective look-at camera that orbits its target.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub eye: DVec3,
    pub target: DVec3,
    pub up: DVec3,
    pub fovy_radians: f64,
    pub znear: f64,
    pub zfar: f64,
    /// Viewport size in pixels.
    pub viewport: DVec2,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            eye: camera_eye_dvec3(),
            target: DVec3::ZERO,
            up: DVec3::Y,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
            viewport: DVec2::new(800.0, 600.0),
        }
    }
}

impl OrbitCamera {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            viewport: DVec2::new(width, height),
            ..Self::default()
        }
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.viewport = DVec2::new(width, height);
        }
    }

    #[inline]
    pub fn aspect(&self) -> f64 {
        self.viewport.x / self.viewport.y.max(1.0)
    }

    pub fn projection_matrix(&self) -> DMat4 {
        DMat4::perspective_rh(self.fovy_radians, self.aspect(), self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> DMat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Camera right and up axes in world space, for billboarding.
    pub fn basis(&self) -> (DVec3, DVec3) {
        let forward = (self.target - self.eye).normalize();
        let right = forward.cross(self.up).normalize();
        let up = right.cross(forward);
        (right, up)
    }

    /// Spins the eye around the target at constant distance.
    ///
    /// `yaw` turns about +Y, `pitch` tilts toward +Y and is clamped short of
    /// the poles so the look-at basis stays well defined.
    pub fn orbit(&mut self, yaw: f64, pitch: f64) {
        let offset = self.eye - self.target;
        let distance = offset.length();
        if distance <= 0.0 {
            return;
        }
        let cur_yaw = offset.z.atan2(offset.x);
        let cur_pitch = (offset.y / distance).clamp(-1.0, 1.0).asin();
        let new_yaw = cur_yaw + yaw;
        let new_pitch = (cur_pitch + pitch).clamp(-CAMERA_MAX_PITCH, CAMERA_MAX_PITCH);
        let (sp, cp) = new_pitch.sin_cos();
        let (sy, cy) = new_yaw.sin_cos();
        self.eye = self.target + DVec3::new(cp * cy, sp, cp * sy) * distance;
    }

    /// Pixel position of `point`, or `None` when it is behind the eye.
    pub fn world_to_screen(&self, point: DVec3) -> Option<DVec2> {
        let clip = self.view_projection() * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(DVec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.x,
            (1.0 - ndc.y) * 0.5 * self.viewport.y,
        ))
    }
}

impl RayCaster for OrbitCamera {
    fn screen_to_ray(&self, screen: DVec2) -> Ray {
        let ndc_x = (2.0 * screen.x / self.viewport.x.max(1.0)) - 1.0;
        let ndc_y = 1.0 - (2.0 * screen.y / self.viewport.y.max(1.0));
        let inv = self.view_projection().inverse();
        let p_far = inv * DVec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let far: DVec3 = p_far.truncate() / p_far.w;
        Ray::through(self.eye, far)
    }

    fn eye_position(&self) -> DVec3 {
        self.eye
    }
}
