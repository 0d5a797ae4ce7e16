use crate::*;
use web_time::{Duration, Instant};

#[test]
fn lerp_is_linear() {
    assert_eq!(0.0f32.lerp(&10.0, 0.5), 5.0);
    assert_eq!(2.0f64.lerp(&4.0, 0.25), 2.5);
}

#[test]
fn lerp_clamps_fraction() {
    assert_eq!(0.0f32.lerp(&10.0, 3.0), 10.0);
    assert_eq!(0.0f32.lerp(&10.0, -1.0), 0.0);
}

#[test]
fn smooth_toward_uses_rate_times_delta() {
    // 0.1s * 5 = half the remaining distance
    let next = smooth_toward(&-100.0f32, &100.0, 0.1, SNAP_RATE);
    assert_eq!(next, 0.0);
}

#[test]
fn smooth_toward_is_idle_at_target() {
    let value = -237.5f32;
    for _ in 0..10 {
        assert_eq!(smooth_toward(&value, &value, 1.0 / 60.0, SNAP_RATE), value);
    }
}

#[test]
fn smooth_toward_converges() {
    let mut value = 0.0f32;
    for _ in 0..240 {
        value = smooth_toward(&value, &300.0, 1.0 / 60.0, SNAP_RATE);
    }
    assert!((value - 300.0).abs() < 0.01, "value = {value}");
}

#[test]
fn frame_clock_reports_deltas() {
    let start = Instant::now();
    let mut clock = FrameClock::new();
    assert_eq!(clock.tick_at(start), 0.0);
    let delta = clock.tick_at(start + Duration::from_millis(16));
    assert!((delta - 0.016).abs() < 1e-6);
    assert_eq!(clock.frame_count(), 2);
}

#[test]
fn frame_clock_caps_stalled_frames() {
    let start = Instant::now();
    let mut clock = FrameClock::new();
    clock.tick_at(start);
    let delta = clock.tick_at(start + Duration::from_secs(3));
    assert_eq!(delta, MAX_FRAME_DELTA.as_secs_f32());

    clock.reset();
    assert_eq!(clock.frame_count(), 0);
    assert_eq!(clock.tick_at(start), 0.0);
}
