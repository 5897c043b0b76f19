//! Pick, drag and drop of markers.
//!
//! The controller has two states, idle and dragging, held in
//! [`DragSession`]. One call to [`process_drag_and_drop`] per frame evolves
//! the session and the [`MarkerStore`]:
//!
//! - press: pick the first filled marker under the pointer, move it onto
//!   the drag plane and leave an empty placeholder in its slot;
//! - held: slide the marker along the drag plane with the pointer;
//! - release: snap onto the first eligible empty slot lined up with the
//!   eye, or leave the marker floating where it is.
//!
//! Markers whose world X is negative sit on the far side of the cylinder
//! and are never picked or snapped onto.

use crate::camera::RayCaster;
use crate::config::SceneConfig;
use crate::geometry::{
    line_plane_intersection, point_to_line_distance, project_pointer_to_world, ray_sphere, Ray,
};
use crate::input::PointerState;
use crate::markers::{Marker, MarkerStore};
use glam::{DMat4, DVec3};
use smallvec::SmallVec;

pub type SnapCandidates = SmallVec<[usize; 8]>;
pub type InteractionEvents = SmallVec<[InteractionEvent; 2]>;

/// A marker currently following the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveDrag {
    /// Store index of the moving marker. Never the placeholder.
    pub marker_index: usize,
    /// Pointer hit on the drag plane at the previous frame.
    pub last_pointer_world: DVec3,
    /// Where the marker landed on the drag plane when picked.
    pub initial_position: DVec3,
}

#[derive(Clone, Debug, Default)]
pub struct DragSession {
    active: Option<ActiveDrag>,
    snap_candidates: SnapCandidates,
}

impl DragSession {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&ActiveDrag> {
        self.active.as_ref()
    }

    pub fn marker_index(&self) -> Option<usize> {
        self.active.as_ref().map(|d| d.marker_index)
    }

    /// Slots that would accept the marker if it were dropped now.
    /// Feedback only; empty while idle.
    pub fn snap_candidates(&self) -> &[usize] {
        &self.snap_candidates
    }
}

/// State-machine transitions, reported for logging and feedback.
#[derive(Clone, Debug, PartialEq)]
pub enum InteractionEvent {
    Picked {
        index: usize,
        slot: Option<usize>,
    },
    /// `target` is the filled slot's store index after the dragged marker
    /// has been removed.
    Snapped {
        target: usize,
        slot: Option<usize>,
    },
    DroppedLoose {
        index: usize,
        position: DVec3,
    },
}

/// First marker (by store index) whose sphere the ray touches.
///
/// Back-side markers (world X < 0) are skipped. Placeholders are returned
/// too; callers decide whether they are pickable.
pub fn pick_marker(
    ray: &Ray,
    markers: &MarkerStore,
    transform: &DMat4,
    radius: f64,
) -> Option<usize> {
    markers.iter().enumerate().find_map(|(i, m)| {
        let world = m.world_position(transform);
        if world.x < 0.0 {
            return None;
        }
        ray_sphere(ray, world, radius).map(|_| i)
    })
}

/// Attached placeholders on the visible side, other than `exclude`,
/// lying within `threshold` of the line from `eye` through `dragged`.
fn eligible_targets<'a>(
    dragged: DVec3,
    markers: &'a MarkerStore,
    exclude: usize,
    eye: DVec3,
    transform: &'a DMat4,
    threshold: f64,
) -> impl Iterator<Item = usize> + 'a {
    markers
        .iter()
        .enumerate()
        .filter(move |(i, m)| *i != exclude && m.attached && !m.highlighted)
        .filter_map(move |(i, m)| {
            let world = m.world_position(transform);
            if world.x < 0.0 {
                return None;
            }
            (point_to_line_distance(world, eye, dragged) < threshold).then_some(i)
        })
}

/// Slot that a drop at `dragged` would fill, lowest index first.
pub fn find_snap_target(
    dragged: DVec3,
    markers: &MarkerStore,
    exclude: usize,
    eye: DVec3,
    transform: &DMat4,
    threshold: f64,
) -> Option<usize> {
    eligible_targets(dragged, markers, exclude, eye, transform, threshold).next()
}

/// Every slot a drop at `dragged` could fill, ascending.
pub fn snap_candidates(
    dragged: DVec3,
    markers: &MarkerStore,
    exclude: usize,
    eye: DVec3,
    transform: &DMat4,
    threshold: f64,
) -> SnapCandidates {
    eligible_targets(dragged, markers, exclude, eye, transform, threshold).collect()
}

/// Runs one frame of the pick/drag/drop state machine.
///
/// `transform` is the cylinder's current local-to-world transform and
/// `grid` the slot table the store was spawned from.
pub fn process_drag_and_drop<C: RayCaster + ?Sized>(
    markers: &mut MarkerStore,
    session: &mut DragSession,
    pointer: &PointerState,
    camera: &C,
    transform: &DMat4,
    grid: &[DVec3],
    config: &SceneConfig,
) -> InteractionEvents {
    let mut events = InteractionEvents::new();
    let eye = camera.eye_position();

    if pointer.pressed && session.active.is_none() {
        if let Some(ev) = begin_drag(markers, session, pointer, camera, transform, grid, config) {
            events.push(ev);
        }
    }

    if pointer.held {
        if let Some(drag) = session.active.as_mut() {
            let ray = camera.screen_to_ray(pointer.position);
            let current = pointer_on_plane(&ray, config);
            let delta = current - drag.last_pointer_world;

            let pos = &mut markers[drag.marker_index].position;
            pos.y += delta.y;
            pos.z += delta.z;
            pos.x = config.drag_plane_x;

            drag.last_pointer_world = current;
        }
    }

    if pointer.released {
        if let Some(drag) = session.active.take() {
            events.push(finish_drag(markers, drag, eye, transform, config));
        }
    }

    session.snap_candidates = match &session.active {
        Some(drag) => {
            debug_assert!(drag.marker_index < markers.len());
            snap_candidates(
                markers[drag.marker_index].position,
                markers,
                drag.marker_index,
                eye,
                transform,
                config.snap_line_distance,
            )
        }
        None => SnapCandidates::new(),
    };

    events
}

#[inline]
fn pointer_on_plane(ray: &Ray, config: &SceneConfig) -> DVec3 {
    project_pointer_to_world(
        ray.origin,
        ray.direction,
        config.pointer_fallback_distance,
        true,
        config.drag_plane_x,
    )
}

fn begin_drag<C: RayCaster + ?Sized>(
    markers: &mut MarkerStore,
    session: &mut DragSession,
    pointer: &PointerState,
    camera: &C,
    transform: &DMat4,
    grid: &[DVec3],
    config: &SceneConfig,
) -> Option<InteractionEvent> {
    let ray = camera.screen_to_ray(pointer.position);
    let index = pick_marker(&ray, markers, transform, config.marker_radius)?;
    if !markers[index].highlighted {
        log::debug!("[drag] marker {} is an empty slot; not pickable", index);
        return None;
    }

    let world = markers.world_position(index, transform);
    let eye = camera.eye_position();
    let on_plane = match line_plane_intersection(eye, world, config.drag_plane_x) {
        Some(hit) => hit,
        None => {
            log::debug!("[drag] eye line parallel to drag plane; clamping X only");
            DVec3::new(config.drag_plane_x, world.y, world.z)
        }
    };

    let marker = &mut markers[index];
    let home = marker.position;
    let was_attached = marker.attached;
    let slot = marker.origin_slot;
    marker.position = on_plane;

    if was_attached {
        marker.attached = false;
        let home = slot.and_then(|s| grid.get(s).copied()).unwrap_or(home);
        markers.append(Marker::placeholder(home, slot));
    }

    session.active = Some(ActiveDrag {
        marker_index: index,
        last_pointer_world: pointer_on_plane(&ray, config),
        initial_position: on_plane,
    });
    log::info!("[drag] picked marker {} (slot {:?})", index, slot);
    Some(InteractionEvent::Picked { index, slot })
}

fn finish_drag(
    markers: &mut MarkerStore,
    drag: ActiveDrag,
    eye: DVec3,
    transform: &DMat4,
    config: &SceneConfig,
) -> InteractionEvent {
    let index = drag.marker_index;
    let dragged = markers[index].position;
    let target = find_snap_target(
        dragged,
        markers,
        index,
        eye,
        transform,
        config.snap_line_distance,
    );

    match target {
        Some(target) => {
            markers[target].highlighted = true;
            let slot = markers[target].origin_slot;
            markers.remove_at(index);
            let target = if target > index { target - 1 } else { target };
            log::info!("[drop] snapped onto slot {:?}", slot);
            InteractionEvent::Snapped { target, slot }
        }
        None => {
            log::info!("[drop] marker {} left floating at {:?}", index, dragged);
            InteractionEvent::DroppedLoose {
                index,
                position: dragged,
            }
        }
    }
}
