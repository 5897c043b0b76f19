use crate::config::SceneConfig;
use crate::geometry::rotation_transform;
use crate::input::PointerState;
use glam::DMat4;
use std::f64::consts::PI;

/// Spin of the cylinder about its axis.
#[derive(Clone, Debug, Default)]
pub struct RotationState {
    pub angle_radians: f64,
    pub auto_rotate_enabled: bool,
}

impl RotationState {
    /// Advances the angle for one frame.
    ///
    /// Auto-rotation and pointer rotation add up; pointer rotation is
    /// ignored while a marker is being dragged.
    pub fn update(
        &mut self,
        elapsed_seconds: f64,
        pointer: &PointerState,
        dragging: bool,
        config: &SceneConfig,
    ) {
        if self.auto_rotate_enabled {
            self.angle_radians += elapsed_seconds * config.rotation_speed_deg.to_radians();
        }
        if pointer.held && !dragging {
            self.angle_radians += pointer.delta.y * config.mouse_rotation_factor * PI / 180.0;
        }
    }

    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.auto_rotate_enabled = !self.auto_rotate_enabled;
        self.auto_rotate_enabled
    }

    #[inline]
    pub fn transform(&self) -> DMat4 {
        rotation_transform(self.angle_radians)
    }
}
