//! Read-side view of the scene for renderers.
//!
//! Nothing here mutates state; frontends call these after
//! [`SceneState::update`](crate::SceneState::update) each frame.

use crate::constants::*;
use crate::scene::SceneState;
use glam::DVec3;

/// One marker ready to draw, in world space.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerInstance {
    pub world_position: DVec3,
    pub radius: f64,
    pub color: [f32; 4],
}

/// Draw list in store order.
pub fn draw_list(scene: &SceneState) -> Vec<MarkerInstance> {
    let transform = scene.transform();
    let dragged = scene.dragged_index();
    let candidates = scene.snap_candidates();

    scene
        .markers
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let mut color = if m.highlighted {
                HIGHLIGHT_COLOR
            } else {
                PLACEHOLDER_COLOR
            };
            if dragged == Some(i) {
                color[3] = DRAGGED_ALPHA;
            }
            if candidates.contains(&i) {
                color = SNAP_CANDIDATE_COLOR;
            }
            MarkerInstance {
                world_position: m.world_position(&transform),
                radius: scene.config.marker_radius,
                color,
            }
        })
        .collect()
}

/// Segment from the eye to the dragged marker, while dragging.
pub fn drag_guide(scene: &SceneState, eye: DVec3) -> Option<(DVec3, DVec3)> {
    let index = scene.dragged_index()?;
    let dragged = scene.markers.world_position(index, &scene.transform());
    Some((eye, dragged))
}
