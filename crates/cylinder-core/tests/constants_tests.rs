// Host-side tests for tuning constants and their geometric relationships.

use cylinder_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_positive() {
    assert!(CYLINDER_RADIUS > 0.0);
    assert!(CYLINDER_HEIGHT > 0.0);
    assert!(MARKER_RADIUS > 0.0);
    assert!(SNAP_LINE_DISTANCE > 0.0);
    assert!(POINTER_FALLBACK_DISTANCE > 0.0);
    assert!(ROTATION_SPEED_DEG > 0.0);
    assert!(MAX_FRAME_SECONDS > 0.0);
    assert!(GRID_ANGULAR_DIVISIONS > 0 && GRID_HEIGHT_DIVISIONS > 1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // the drag plane sits in front of the cylinder surface, toward the eye
    assert!(DRAG_PLANE_X > CYLINDER_RADIUS);
    assert!(CAMERA_EYE[0] > DRAG_PLANE_X);

    // the caps leave room for at least one row
    assert!(CYLINDER_HEIGHT > 2.0 * GRID_MARGIN);

    // snapping is more forgiving than picking
    assert!(SNAP_LINE_DISTANCE > MARKER_RADIUS);

    // neighbouring slots are far enough apart that one drop fills one slot
    let row_gap = (CYLINDER_HEIGHT - 2.0 * GRID_MARGIN) / (GRID_HEIGHT_DIVISIONS - 1) as f64;
    assert!(row_gap > 2.0 * SNAP_LINE_DISTANCE);

    assert!(CAMERA_MAX_PITCH < std::f64::consts::FRAC_PI_2);

    assert!(u64::from(GRID_ANGULAR_DIVISIONS * GRID_HEIGHT_DIVISIONS) <= MAX_GRID_SLOTS);
}

#[test]
fn palette_is_normalized() {
    for c in [HIGHLIGHT_COLOR, PLACEHOLDER_COLOR, SNAP_CANDIDATE_COLOR] {
        assert!(c.iter().all(|v| (0.0..=1.0).contains(v)));
    }
    assert!((0.0..=1.0).contains(&DRAGGED_ALPHA));
}
