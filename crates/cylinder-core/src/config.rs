use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
    #[error("grid of {slots} slots exceeds the limit of {max}")]
    TooLarge { slots: u64, max: u64 },
}

/// Tuning for one scene. `Default` mirrors the crate constants.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub cylinder_radius: f64,
    pub cylinder_height: f64,
    pub angular_divisions: u32,
    pub height_divisions: u32,
    pub grid_margin: f64,
    pub marker_radius: f64,
    pub snap_line_distance: f64,
    pub drag_plane_x: f64,
    pub pointer_fallback_distance: f64,
    pub rotation_speed_deg: f64,
    pub mouse_rotation_factor: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            cylinder_radius: CYLINDER_RADIUS,
            cylinder_height: CYLINDER_HEIGHT,
            angular_divisions: GRID_ANGULAR_DIVISIONS,
            height_divisions: GRID_HEIGHT_DIVISIONS,
            grid_margin: GRID_MARGIN,
            marker_radius: MARKER_RADIUS,
            snap_line_distance: SNAP_LINE_DISTANCE,
            drag_plane_x: DRAG_PLANE_X,
            pointer_fallback_distance: POINTER_FALLBACK_DISTANCE,
            rotation_speed_deg: ROTATION_SPEED_DEG,
            mouse_rotation_factor: MOUSE_ROTATION_FACTOR,
        }
    }
}

impl SceneConfig {
    /// Same tuning with a different grid resolution.
    pub fn with_grid(mut self, angular_divisions: u32, height_divisions: u32) -> Self {
        self.angular_divisions = angular_divisions;
        self.height_divisions = height_divisions;
        self
    }

    /// Rejects values that would make picking or snapping meaningless.
    ///
    /// A margin that eats the whole height is allowed: it simply yields an
    /// empty grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("cylinder_height", self.cylinder_height),
            ("grid_margin", self.grid_margin),
            ("drag_plane_x", self.drag_plane_x),
            ("rotation_speed_deg", self.rotation_speed_deg),
            ("mouse_rotation_factor", self.mouse_rotation_factor),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }

        let positive = [
            ("cylinder_radius", self.cylinder_radius),
            ("marker_radius", self.marker_radius),
            ("snap_line_distance", self.snap_line_distance),
            ("pointer_fallback_distance", self.pointer_fallback_distance),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let slots = u64::from(self.angular_divisions) * u64::from(self.height_divisions);
        if slots > MAX_GRID_SLOTS {
            return Err(ConfigError::TooLarge {
                slots,
                max: MAX_GRID_SLOTS,
            });
        }
        Ok(())
    }
}
