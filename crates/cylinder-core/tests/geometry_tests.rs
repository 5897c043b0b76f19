// Host-side tests for the stateless geometry helpers.

use cylinder_core::*;
use glam::DVec3;
use rand::prelude::*;
use std::f64::consts::FRAC_PI_2;

#[test]
fn grid_has_rows_times_columns_points_on_the_surface() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let n = rng.gen_range(1..=24u32);
        let m = rng.gen_range(2..=12u32);
        let radius = rng.gen_range(0.5..5.0);
        let height = rng.gen_range(2.0..10.0);
        let margin = rng.gen_range(0.0..height / 2.0 - 0.1);

        let grid = generate_cylinder_grid(radius, height, n, m, margin);
        assert_eq!(grid.len(), (n * m) as usize);

        let half = (height - 2.0 * margin) / 2.0;
        for p in &grid {
            let r2 = p.x * p.x + p.y * p.y;
            assert!((r2 - radius * radius).abs() < 1e-9, "off surface: {p:?}");
            assert!(p.z >= -half - 1e-9 && p.z <= half + 1e-9);
        }
        // extremal rows reach both ends of the usable height
        assert!((grid[0].z + half).abs() < 1e-9);
        assert!((grid[grid.len() - 1].z - half).abs() < 1e-9);
    }
}

#[test]
fn grid_is_row_major_starting_at_plus_x() {
    let grid = generate_cylinder_grid(2.0, 6.0, 4, 2, 1.0);
    let expected = [
        DVec3::new(2.0, 0.0, -2.0),
        DVec3::new(0.0, 2.0, -2.0),
        DVec3::new(-2.0, 0.0, -2.0),
        DVec3::new(0.0, -2.0, -2.0),
        DVec3::new(2.0, 0.0, 2.0),
    ];
    for (got, want) in grid.iter().zip(expected.iter()) {
        assert!((*got - *want).length() < 1e-9, "{got:?} != {want:?}");
    }
}

#[test]
fn grid_is_empty_for_zero_divisions_or_no_usable_height() {
    assert!(generate_cylinder_grid(2.0, 6.0, 0, 8, 1.0).is_empty());
    assert!(generate_cylinder_grid(2.0, 6.0, 20, 0, 1.0).is_empty());
    assert!(generate_cylinder_grid(2.0, 6.0, 20, 8, 3.0).is_empty());
    assert!(generate_cylinder_grid(2.0, 6.0, 20, 8, 4.0).is_empty());
}

#[test]
fn single_row_grid_sits_at_mid_height() {
    let grid = generate_cylinder_grid(2.0, 6.0, 5, 1, 1.0);
    assert_eq!(grid.len(), 5);
    assert!(grid.iter().all(|p| p.z == 0.0 && p.z.is_finite()));
}

#[test]
fn line_plane_intersection_lands_on_plane_and_is_unclamped() {
    let start = DVec3::new(10.0, 0.0, 0.0);
    let end = DVec3::new(8.0, 1.0, -1.0);
    let hit = line_plane_intersection(start, end, 3.0).unwrap();
    assert!((hit.x - 3.0).abs() < 1e-12);
    // t = 3.5, well past the segment end
    assert!((hit - DVec3::new(3.0, 3.5, -3.5)).length() < 1e-12);
}

#[test]
fn line_plane_intersection_rejects_parallel_lines() {
    let start = DVec3::new(1.0, 0.0, 0.0);
    assert!(line_plane_intersection(start, DVec3::new(1.0, 5.0, 5.0), 3.0).is_none());
    assert!(line_plane_intersection(start, DVec3::new(1.0 + 5e-7, 5.0, 0.0), 3.0).is_none());
    assert!(line_plane_intersection(start, start, 3.0).is_none());
}

#[test]
fn ray_plane_intersection_rejects_parallel_and_behind() {
    let origin = DVec3::new(10.0, 0.0, 0.0);
    assert!(ray_plane_intersection(origin, DVec3::Y, 3.0).is_none());
    // plane is behind a ray heading +X
    assert!(ray_plane_intersection(origin, DVec3::X, 3.0).is_none());

    let hit = ray_plane_intersection(origin, DVec3::new(-1.0, 0.5, 0.0), 3.0).unwrap();
    assert!((hit.x - 3.0).abs() < 1e-12);
    assert!((hit.y - 3.5).abs() < 1e-12);
}

#[test]
fn point_to_line_distance_measures_to_infinite_line() {
    let a = DVec3::ZERO;
    let b = DVec3::X;
    assert!((point_to_line_distance(DVec3::new(0.0, 1.0, 0.0), a, b) - 1.0).abs() < 1e-12);
    // beyond the segment end, still measured to the line
    assert!((point_to_line_distance(DVec3::new(50.0, 0.0, 2.0), a, b) - 2.0).abs() < 1e-12);
    assert!(point_to_line_distance(DVec3::new(-3.0, 0.0, 0.0), a, b).abs() < 1e-12);
}

#[test]
fn point_to_line_distance_degenerate_line_is_point_distance() {
    let p = DVec3::new(1.0, 2.0, 3.0);
    let a = DVec3::new(-1.0, 0.5, 4.0);
    assert_eq!(point_to_line_distance(p, a, a), p.distance(a));
}

#[test]
fn project_pointer_prefers_plane_hit_when_constrained() {
    let origin = DVec3::new(10.0, 0.0, 0.0);
    let dir = DVec3::new(-1.0, 0.0, 0.2).normalize();

    let on_plane = project_pointer_to_world(origin, dir, 5.0, true, 3.0);
    assert!((on_plane.x - 3.0).abs() < 1e-12);

    let free = project_pointer_to_world(origin, dir, 5.0, false, 3.0);
    assert!((free - (origin + dir * 5.0)).length() < 1e-12);
}

#[test]
fn project_pointer_falls_back_when_plane_unreachable() {
    let origin = DVec3::new(10.0, 0.0, 0.0);
    // parallel to the plane
    let p = project_pointer_to_world(origin, DVec3::Z, 5.0, true, 3.0);
    assert!((p - DVec3::new(10.0, 0.0, 5.0)).length() < 1e-12);
    // plane behind the ray
    let p = project_pointer_to_world(origin, DVec3::X, 5.0, true, 3.0);
    assert!((p - DVec3::new(15.0, 0.0, 0.0)).length() < 1e-12);
}

#[test]
fn ray_sphere_intersection_basic() {
    let ray = Ray::new(DVec3::ZERO, DVec3::Z);
    let t = ray_sphere(&ray, DVec3::new(0.0, 0.0, 5.0), 2.0).unwrap();
    assert!((t - 3.0).abs() < 1e-12);
}

#[test]
fn ray_sphere_intersection_miss() {
    let ray = Ray::new(DVec3::ZERO, DVec3::X);
    assert!(ray_sphere(&ray, DVec3::new(0.0, 0.0, 5.0), 2.0).is_none());
    // sphere entirely behind the origin
    let ray = Ray::new(DVec3::ZERO, -DVec3::Z);
    assert!(ray_sphere(&ray, DVec3::new(0.0, 0.0, 5.0), 2.0).is_none());
}

#[test]
fn ray_sphere_intersection_tangent() {
    let ray = Ray::new(DVec3::ZERO, DVec3::Z);
    let t = ray_sphere(&ray, DVec3::new(2.0, 0.0, 5.0), 2.0).unwrap();
    assert!((t - 5.0).abs() < 1e-9);
}

#[test]
fn ray_sphere_intersection_inside_reports_exit() {
    let ray = Ray::new(DVec3::new(0.0, 0.0, 5.0), DVec3::X);
    let t = ray_sphere(&ray, DVec3::new(0.0, 0.0, 5.0), 3.0).unwrap();
    assert!((t - 3.0).abs() < 1e-12);
}

#[test]
fn ray_new_normalizes_direction() {
    let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 3.0, 4.0));
    assert!((ray.direction.length() - 1.0).abs() < 1e-12);
    assert!((ray.at(5.0) - DVec3::new(0.0, 3.0, 4.0)).length() < 1e-12);
}

#[test]
fn rotation_transform_spins_about_z() {
    let m = rotation_transform(FRAC_PI_2);
    let p = m.transform_point3(DVec3::new(2.0, 0.0, 1.5));
    assert!((p - DVec3::new(0.0, 2.0, 1.5)).length() < 1e-12);
}
