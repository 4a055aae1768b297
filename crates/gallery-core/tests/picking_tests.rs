use gallery_core::*;
use glam::{Mat4, Vec2, Vec3};

fn camera() -> Camera {
    Camera::new(&CameraParams::default(), 16.0 / 9.0)
}

fn plane() -> Vec2 {
    LayoutParams::default().plane_size
}

#[test]
fn ray_quad_hits_facing_quad() {
    let ray = Ray {
        origin: Vec3::new(0.0, 0.0, 2.0),
        dir: Vec3::NEG_Z,
    };
    let t = ray_quad(&ray, &Mat4::IDENTITY).expect("hit");
    assert!((t - 2.0).abs() < 1e-5);
}

#[test]
fn ray_quad_ignores_back_face_and_rays_behind() {
    let from_behind = Ray {
        origin: Vec3::new(0.0, 0.0, -2.0),
        dir: Vec3::Z,
    };
    assert!(ray_quad(&from_behind, &Mat4::IDENTITY).is_none());

    let pointing_away = Ray {
        origin: Vec3::new(0.0, 0.0, 2.0),
        dir: Vec3::Z,
    };
    assert!(ray_quad(&pointing_away, &Mat4::IDENTITY).is_none());
}

#[test]
fn ray_quad_respects_edges_and_scale() {
    let ray = Ray {
        origin: Vec3::new(0.6, 0.0, 2.0),
        dir: Vec3::NEG_Z,
    };
    assert!(ray_quad(&ray, &Mat4::IDENTITY).is_none());
    let wide = Mat4::from_scale(Vec3::new(1.3, 1.0, 1.0));
    assert!(ray_quad(&ray, &wide).is_some());
}

#[test]
fn center_pointer_hits_on_axis_surface() {
    let surfaces = vec![Surface::new(0, Vec2::ZERO)];
    let ray = camera().ray_from_ndc(Vec2::ZERO);
    let hits = intersect_surfaces(&ray, &surfaces, plane());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].index, 0);
    assert!((hits[0].distance - 2.0).abs() < 1e-4);
    assert!(hits[0].point.length() < 1e-4);
}

#[test]
fn corner_pointer_misses_default_gallery() {
    let mut rng = <rand::rngs::StdRng as rand::SeedableRng>::seed_from_u64(7);
    let surfaces = build_surfaces(&LayoutParams::default(), &mut rng);
    let cam = camera();
    for corner in [
        Vec2::new(-1.0, 1.0),
        Vec2::new(-1.0, -1.0),
        Vec2::new(1.0, 1.0),
    ] {
        let hits = intersect_surfaces(&cam.ray_from_ndc(corner), &surfaces, plane());
        assert!(hits.is_empty(), "corner {corner:?} hit {hits:?}");
    }
}

#[test]
fn hits_are_ordered_nearest_first() {
    let mut near = Surface::new(0, Vec2::ZERO);
    near.pose.depth = 0.5;
    let far = Surface::new(1, Vec2::ZERO);
    let mut farther = Surface::new(2, Vec2::ZERO);
    farther.pose.depth = -1.0;
    let surfaces = vec![farther, far, near];
    let hits = intersect_surfaces(&camera().ray_from_ndc(Vec2::ZERO), &surfaces, plane());
    let order: Vec<usize> = hits.iter().map(|h| h.index).collect();
    assert_eq!(order, vec![0, 1, 2]);
}

#[test]
fn coplanar_hits_are_ordered_by_index() {
    let surfaces = vec![
        Surface::new(3, Vec2::ZERO),
        Surface::new(1, Vec2::ZERO),
        Surface::new(0, Vec2::ZERO),
    ];
    let hits = intersect_surfaces(&camera().ray_from_ndc(Vec2::ZERO), &surfaces, plane());
    let order: Vec<usize> = hits.iter().map(|h| h.index).collect();
    assert_eq!(order, vec![0, 1, 3]);
    assert!(hits.iter().all(|h| h.distance == hits[0].distance));
}

#[test]
fn picking_does_not_mutate_surfaces() {
    let surfaces = vec![Surface::new(0, Vec2::ZERO)];
    let before = surfaces[0].pose;
    let _ = intersect_surfaces(&camera().ray_from_ndc(Vec2::ZERO), &surfaces, plane());
    assert_eq!(surfaces[0].pose, before);
    assert!(!surfaces[0].is_active());
}

#[test]
fn projected_center_round_trips_to_a_hit() {
    let cam = camera();
    let s = Surface::new(0, Vec2::new(0.9, 0.2));
    let ndc = cam.project(s.position());
    let hits = intersect_surfaces(&cam.ray_from_ndc(ndc), &[s.clone()], plane());
    assert_eq!(hits.len(), 1);
    assert!((hits[0].point - s.position()).length() < 1e-3);
}

#[test]
fn rotated_active_surface_is_still_pickable_near_center() {
    let params = PoseParams::default();
    let mut s = Surface::new(0, Vec2::ZERO);
    s.pose = Pose::active(&params);
    let hits = intersect_surfaces(&camera().ray_from_ndc(Vec2::ZERO), &[s], plane());
    assert_eq!(hits.len(), 1);
    assert!((hits[0].point.z - params.active_depth).abs() < 1e-3);
}
