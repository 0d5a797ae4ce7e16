//! Offsets, wrap-around and focus resolution per frame.

use carousel_testing::*;
use carousel_ui::*;

/// Four 100-wide children in a 300-wide viewport whose content container
/// spans all of them, so `dest` is 200.
fn ready_strip(axis: Axis) -> (TestScene, NodeId, Carousel) {
    let (mut scene, content) = TestScene::strip(axis, 300.0, 100.0, 4);
    scene.set_size(content, Size::new(400.0, 400.0));
    let mut carousel = Carousel::new(CarouselConfig::new(axis).with_content(content));
    initialize_now(&mut carousel, &mut scene).expect("initialize");
    assert_eq!(carousel.dest(), 200.0);
    (scene, content, carousel)
}

fn nodes(carousel: &Carousel) -> Vec<NodeId> {
    carousel.children().to_vec()
}

#[test]
fn distances_and_focus_hold_while_scrolling() {
    let (mut scene, content, mut carousel) = ready_strip(Axis::Horizontal);

    for _ in 0..200 {
        scene.scroll_by(content, Point::new(-7.0, 0.0));
        carousel.update(&mut scene, FRAME_DELTA);
        assert_distances_track_offsets(&carousel);
        assert_focus_is_last_nearest(&carousel);
    }
}

#[test]
fn scrolling_forever_keeps_children_within_reach() {
    let (mut scene, content, mut carousel) = ready_strip(Axis::Horizontal);

    for _ in 0..1_000 {
        scene.scroll_by(content, Point::new(-13.0, 0.0));
        carousel.update(&mut scene, FRAME_DELTA);
    }
    carousel.update(&mut scene, FRAME_DELTA);

    let anchor = scene.viewport_position().x;
    for &node in carousel.children() {
        let offset = anchor - scene.position(node).x;
        assert!(offset.abs() <= 200.0 + 13.0, "offset {offset} escaped");
    }
}

#[test]
fn child_past_dest_moves_one_content_length_forward() {
    let (mut scene, content) = TestScene::strip(Axis::Horizontal, 300.0, 100.0, 4);
    let mut carousel = Carousel::horizontal(content);
    initialize_now(&mut carousel, &mut scene).expect("initialize");
    assert_eq!(carousel.dest(), 150.0);

    let first = nodes(&carousel)[0];
    scene.set_anchored_position(first, Point::new(-160.0, 0.0));

    carousel.update(&mut scene, FRAME_DELTA);
    assert_eq!(carousel.offsets()[0], 160.0);
    assert_eq!(scene.anchored_position(first).x, 240.0);

    carousel.update(&mut scene, FRAME_DELTA);
    assert_eq!(carousel.offsets()[0], -240.0);
}

#[test]
fn child_before_negative_dest_moves_one_content_length_back() {
    let (mut scene, _content, mut carousel) = ready_strip(Axis::Horizontal);
    let last = nodes(&carousel)[3];
    scene.set_anchored_position(last, Point::new(250.0, 0.0));

    carousel.update(&mut scene, FRAME_DELTA);

    assert_eq!(carousel.offsets()[3], -250.0);
    assert_eq!(scene.anchored_position(last).x, -150.0);
}

#[test]
fn wrapping_forward_then_back_restores_position() {
    let (mut scene, content, mut carousel) = ready_strip(Axis::Horizontal);
    let first = nodes(&carousel)[0];
    scene.set_anchored_position(first, Point::new(-210.0, 0.0));

    carousel.update(&mut scene, FRAME_DELTA);
    assert_eq!(scene.anchored_position(first).x, 190.0);

    scene.scroll_by(content, Point::new(20.0, 0.0));
    carousel.update(&mut scene, FRAME_DELTA);
    assert_eq!(carousel.offsets()[0], -210.0);
    assert_eq!(scene.anchored_position(first).x, -210.0);
}

#[test]
fn finite_mode_never_wraps() {
    let (mut scene, content) = TestScene::strip(Axis::Horizontal, 300.0, 100.0, 4);
    let mut carousel = Carousel::new(
        CarouselConfig::horizontal()
            .with_content(content)
            .with_infinite(false),
    );
    initialize_now(&mut carousel, &mut scene).expect("initialize");

    let first = nodes(&carousel)[0];
    scene.set_anchored_position(first, Point::new(-1_000.0, 0.0));
    let before: Vec<Point> = nodes(&carousel)
        .iter()
        .map(|&node| scene.anchored_position(node))
        .collect();

    run_frames(&mut carousel, &mut scene, 5, FRAME_DELTA);

    let after: Vec<Point> = nodes(&carousel)
        .iter()
        .map(|&node| scene.anchored_position(node))
        .collect();
    assert_eq!(before, after);
    assert_eq!(carousel.offsets()[0], 1_000.0);
}

#[test]
fn focus_is_reported_every_frame() {
    let (mut scene, _content, mut carousel) = ready_strip(Axis::Horizontal);
    let (recorder, _) = FocusRecorder::attach(&mut carousel);

    run_frames(&mut carousel, &mut scene, 3, FRAME_DELTA);

    assert_eq!(recorder.events(), vec![0, 0, 0]);
}

#[test]
fn ties_report_each_index_and_keep_the_last() {
    let (mut scene, _content, mut carousel) = ready_strip(Axis::Horizontal);
    let (recorder, _) = FocusRecorder::attach(&mut carousel);
    for (node, x) in nodes(&carousel).into_iter().zip([-50.0, 50.0, 150.0, -150.0]) {
        scene.set_anchored_position(node, Point::new(x, 0.0));
    }

    carousel.update(&mut scene, FRAME_DELTA);

    assert_eq!(carousel.distances(), &[50.0, 50.0, 150.0, 150.0]);
    assert_eq!(recorder.events(), vec![0, 1]);
    assert_eq!(carousel.focused_index(), 1);
}

#[test]
fn focus_follows_the_nearest_child() {
    let (mut scene, content, mut carousel) = ready_strip(Axis::Horizontal);
    let (recorder, _) = FocusRecorder::attach(&mut carousel);

    scene.scroll_by(content, Point::new(-180.0, 0.0));
    carousel.update(&mut scene, FRAME_DELTA);

    assert_eq!(carousel.offsets(), &[180.0, 80.0, -20.0, -120.0]);
    assert_eq!(recorder.last(), Some(2));
}

#[test]
fn vertical_carousel_scrolls_on_y() {
    let (mut scene, content, mut carousel) = ready_strip(Axis::Vertical);

    scene.scroll_by(content, Point::new(55.0, -180.0));
    carousel.update(&mut scene, FRAME_DELTA);

    assert_eq!(carousel.offsets(), &[180.0, 80.0, -20.0, -120.0]);
    assert_eq!(carousel.focused_index(), 2);
}

#[test]
fn removed_listener_stops_receiving() {
    let (mut scene, _content, mut carousel) = ready_strip(Axis::Horizontal);
    let (recorder, subscription) = FocusRecorder::attach(&mut carousel);

    carousel.update(&mut scene, FRAME_DELTA);
    assert!(carousel.remove_focus_listener(subscription));
    carousel.update(&mut scene, FRAME_DELTA);

    assert_eq!(recorder.len(), 1);
}

#[test]
fn update_before_initialization_is_a_no_op() {
    let (mut scene, content) = TestScene::strip(Axis::Horizontal, 300.0, 100.0, 4);
    scene.scroll_by(content, Point::new(-130.0, 0.0));
    let mut carousel = Carousel::new(
        CarouselConfig::horizontal()
            .with_content(content)
            .with_magnetic(true),
    );
    let (recorder, _) = FocusRecorder::attach(&mut carousel);

    run_frames(&mut carousel, &mut scene, 10, FRAME_DELTA);

    assert!(recorder.is_empty());
    assert_eq!(scene.anchored_position(content), Point::new(-130.0, 0.0));
}
