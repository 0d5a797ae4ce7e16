//! Assertion helpers for carousel state.

use carousel_ui::Carousel;

/// Assert that a value is within `tolerance` of the expected one.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that every distance is the absolute value of its offset.
pub fn assert_distances_track_offsets(carousel: &Carousel) {
    let offsets = carousel.offsets();
    let distances = carousel.distances();
    assert_eq!(offsets.len(), distances.len(), "buffer lengths differ");
    for (index, (offset, distance)) in offsets.iter().zip(distances).enumerate() {
        assert_eq!(
            *distance,
            offset.abs(),
            "slot {}: distance {} does not match offset {}",
            index,
            distance,
            offset
        );
    }
}

/// Assert that the focused index holds the minimum distance and is the last
/// slot that does.
pub fn assert_focus_is_last_nearest(carousel: &Carousel) {
    let distances = carousel.distances();
    let Some(min) = distances.iter().copied().reduce(f32::min) else {
        return;
    };
    let expected = distances
        .iter()
        .rposition(|distance| *distance == min)
        .expect("minimum is present");
    assert_eq!(
        carousel.focused_index(),
        expected,
        "focus should be the highest index at distance {} in {:?}",
        min,
        distances
    );
}
