use gallery_core::*;
use glam::Vec2;

const DT: f32 = 1.0 / 60.0;

fn settle(mut pose: Pose, target: Pose, frames: usize, params: &PoseParams) -> Pose {
    for _ in 0..frames {
        pose = step_pose(pose, target, DT, params);
    }
    pose
}

#[test]
fn resting_pose_is_identity() {
    assert_eq!(Pose::default(), Pose::RESTING);
    assert_eq!(Pose::RESTING.scale, Vec2::ONE);
    assert_eq!(Pose::RESTING.rotation, 0.0);
    assert_eq!(Pose::RESTING.depth, 0.0);
}

#[test]
fn active_target_uses_params() {
    let params = PoseParams::default();
    let active = SurfaceState::Active.target(&params);
    assert_eq!(active.scale, Vec2::new(1.3, 1.5));
    assert!((active.rotation + 0.5).abs() < 1e-6);
    assert!((active.depth + 0.9).abs() < 1e-6);
    assert_eq!(SurfaceState::Resting.target(&params), Pose::RESTING);
}

#[test]
fn converges_to_active_within_half_a_second_and_snaps() {
    let params = PoseParams::default();
    let target = Pose::active(&params);
    let half_second = settle(Pose::RESTING, target, 30, &params);
    assert!(half_second.max_delta(&target) < 0.01);
    let settled = settle(half_second, target, 60, &params);
    assert_eq!(settled, target);
}

#[test]
fn converges_back_to_resting() {
    let params = PoseParams::default();
    let settled = settle(Pose::active(&params), Pose::RESTING, 90, &params);
    assert_eq!(settled, Pose::RESTING);
}

#[test]
fn never_overshoots_and_moves_monotonically() {
    let params = PoseParams::default();
    let target = Pose::active(&params);
    let mut pose = Pose::RESTING;
    let mut prev_delta = pose.max_delta(&target);
    for _ in 0..120 {
        pose = step_pose(pose, target, DT, &params);
        assert!(pose.scale.x >= 1.0 && pose.scale.x <= 1.3);
        assert!(pose.scale.y >= 1.0 && pose.scale.y <= 1.5);
        assert!(pose.rotation <= 0.0 && pose.rotation >= -0.5);
        assert!(pose.depth <= 0.0 && pose.depth >= -0.9);
        let delta = pose.max_delta(&target);
        assert!(delta <= prev_delta);
        prev_delta = delta;
    }
}

#[test]
fn retargeting_at_target_is_idempotent() {
    let params = PoseParams::default();
    let target = Pose::active(&params);
    for _ in 0..10 {
        assert_eq!(step_pose(target, target, DT, &params), target);
    }
}

#[test]
fn zero_dt_does_not_move() {
    let params = PoseParams::default();
    let target = Pose::active(&params);
    assert_eq!(step_pose(Pose::RESTING, target, 0.0, &params), Pose::RESTING);
}

#[test]
fn large_dt_lands_on_target_without_overshoot() {
    let params = PoseParams::default();
    let target = Pose::active(&params);
    assert_eq!(step_pose(Pose::RESTING, target, 5.0, &params), target);
}

#[test]
fn properties_ease_independently() {
    let params = PoseParams::default();
    let mut target = Pose::RESTING;
    target.depth = -0.9;
    let next = step_pose(Pose::RESTING, target, DT, &params);
    assert_eq!(next.scale, Vec2::ONE);
    assert_eq!(next.rotation, 0.0);
    assert!(next.depth < 0.0);
}
