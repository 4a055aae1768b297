use gallery_core::{DecayMode, ScrollIntegrator, ScrollParams};

const DT: f32 = 1.0 / 60.0;

#[test]
fn zero_delta_wheel_keeps_integrator_at_rest() {
    let params = ScrollParams::default();
    let mut s = ScrollIntegrator::default();
    for _ in 0..100 {
        s.push_wheel(0.0, &params);
        s.step(DT, &params);
    }
    assert_eq!(s.velocity, 0.0);
    assert_eq!(s.offset, 0.0);
}

#[test]
fn single_wheel_event_follows_geometric_series() {
    let params = ScrollParams::default();
    let (k, d) = (params.damping, params.decay);
    let delta = 120.0_f32;
    let mut s = ScrollIntegrator::default();
    s.push_wheel(delta, &params);
    let v0 = delta * k;
    assert!((s.velocity - v0).abs() < 1e-7);

    for n in 1..=40 {
        s.step(DT, &params);
        let dn = d.powi(n);
        let expected_v = v0 * dn;
        let expected_offset = v0 * d * (1.0 - dn) / (1.0 - d);
        assert!(
            (s.velocity - expected_v).abs() < 1e-6,
            "velocity at frame {n}: {} vs {}",
            s.velocity,
            expected_v
        );
        assert!(
            (s.offset - expected_offset).abs() < 1e-5,
            "offset at frame {n}: {} vs {}",
            s.offset,
            expected_offset
        );
    }
}

#[test]
fn scrolling_down_moves_camera_down_and_settles() {
    let params = ScrollParams::default();
    let mut s = ScrollIntegrator::default();
    s.push_wheel(100.0, &params);
    let mut last = 0.0;
    for _ in 0..400 {
        last = s.step(DT, &params);
    }
    let limit = 100.0 * params.damping * params.decay / (1.0 - params.decay);
    assert!(last < 0.0);
    assert!((last - limit).abs() < 1e-4);
    let before = s.offset;
    s.step(DT, &params);
    assert!((s.offset - before).abs() < 1e-9);
}

#[test]
fn wheel_events_accumulate_velocity() {
    let params = ScrollParams::default();
    let mut s = ScrollIntegrator::default();
    s.push_wheel(50.0, &params);
    s.push_wheel(50.0, &params);
    assert!((s.velocity - 100.0 * params.damping).abs() < 1e-7);
}

#[test]
fn offset_is_unbounded_under_repeated_input() {
    let params = ScrollParams::default();
    let mut s = ScrollIntegrator::default();
    for _ in 0..2_000 {
        s.push_wheel(-100.0, &params);
        s.step(DT, &params);
    }
    assert!(s.offset > 100.0);
}

#[test]
fn time_scaled_decay_matches_per_frame_at_nominal_interval() {
    let per_frame = ScrollParams::default();
    let time_scaled = ScrollParams {
        decay_mode: DecayMode::TimeScaled {
            frame_interval_sec: DT,
        },
        ..ScrollParams::default()
    };
    let mut a = ScrollIntegrator::default();
    let mut b = ScrollIntegrator::default();
    a.push_wheel(80.0, &per_frame);
    b.push_wheel(80.0, &time_scaled);
    for _ in 0..30 {
        a.step(DT, &per_frame);
        b.step(DT, &time_scaled);
    }
    assert!((a.velocity - b.velocity).abs() < 1e-6);
    assert!((a.offset - b.offset).abs() < 1e-5);
}

#[test]
fn time_scaled_decay_is_refresh_rate_independent() {
    let params = ScrollParams {
        decay_mode: DecayMode::TimeScaled {
            frame_interval_sec: 1.0 / 60.0,
        },
        ..ScrollParams::default()
    };
    let mut at_60 = ScrollIntegrator::default();
    let mut at_120 = ScrollIntegrator::default();
    at_60.push_wheel(100.0, &params);
    at_120.push_wheel(100.0, &params);
    for _ in 0..600 {
        at_60.step(1.0 / 60.0, &params);
        at_120.step(1.0 / 120.0, &params);
        at_120.step(1.0 / 120.0, &params);
    }
    // both settle to a similar total pan distance
    let ratio = at_120.offset / at_60.offset;
    assert!((ratio - 1.0).abs() < 0.1, "ratio {ratio}");
}
