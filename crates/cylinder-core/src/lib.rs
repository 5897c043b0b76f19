pub mod camera;
pub mod clock;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod input;
pub mod interaction;
pub mod markers;
pub mod rotation;
pub mod scene;
pub mod visual;
pub static MARKERS_WGSL: &str = include_str!("../shaders/markers.wgsl");

pub use camera::*;
pub use clock::*;
pub use config::*;
pub use constants::*;
pub use geometry::*;
pub use input::*;
pub use interaction::*;
pub use markers::*;
pub use rotation::*;
pub use scene::*;
pub use visual::*;
