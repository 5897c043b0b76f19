use glam::DVec3;

// Shared scene tuning constants used by the core and the native frontend.

// Cylinder
pub const CYLINDER_RADIUS: f64 = 2.0;
pub const CYLINDER_HEIGHT: f64 = 6.0;

// Grid sampling of the cylinder surface
pub const GRID_ANGULAR_DIVISIONS: u32 = 20; // columns around the axis
pub const GRID_HEIGHT_DIVISIONS: u32 = 8; // rows along the axis
pub const GRID_MARGIN: f64 = 1.0; // kept free at both caps
pub const MAX_GRID_SLOTS: u64 = 1 << 20; // upper bound on angular * height divisions

// Markers
pub const MARKER_RADIUS: f64 = 0.1; // draw radius and ray-sphere pick radius
pub const SNAP_LINE_DISTANCE: f64 = 0.2; // max distance from the eye->marker line

// Dragging
pub const DRAG_PLANE_X: f64 = 3.0; // dragged markers live on the plane x = DRAG_PLANE_X
pub const POINTER_FALLBACK_DISTANCE: f64 = 5.0; // along the ray when the plane is missed

// Rotation
pub const ROTATION_SPEED_DEG: f64 = 15.0; // auto-rotation, degrees per second
pub const MOUSE_ROTATION_FACTOR: f64 = -0.3; // degrees per pixel of vertical pointer motion

// Geometry
pub const PARALLEL_EPSILON: f64 = 1e-6;

// Frame timing
pub const MAX_FRAME_SECONDS: f64 = 0.25;

// Camera
pub const CAMERA_EYE: [f64; 3] = [10.0, 0.0, 0.0];
pub const CAMERA_FOVY_DEG: f64 = 45.0;
pub const CAMERA_ZNEAR: f64 = 0.1;
pub const CAMERA_ZFAR: f64 = 100.0;
pub const CAMERA_MAX_PITCH: f64 = 1.5; // radians, keeps the orbit off the poles

// Palette (linear RGBA)
pub const HIGHLIGHT_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0]; // yellow
pub const PLACEHOLDER_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0]; // gray
pub const SNAP_CANDIDATE_COLOR: [f32; 4] = [0.0, 1.0, 0.5, 0.8]; // green
pub const DRAGGED_ALPHA: f32 = 0.7;
pub const BACKGROUND_COLOR: [f64; 3] = [0.8, 0.9, 1.0];

#[inline]
pub fn camera_eye_dvec3() -> DVec3 {
    DVec3::from_array(CAMERA_EYE)
}
