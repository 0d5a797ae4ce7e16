//! Drives a magnetic, infinite carousel over three cards: a simulated fling
//! to the left, then the release and snap. Focus changes are logged.

use std::cell::Cell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use carousel_animation::FrameClock;
use carousel_testing::TestScene;
use carousel_ui::{
    Axis, Carousel, CarouselConfig, CarouselHost, IdentityProjection, NodeId, Point, Size,
};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const DRAG_FRAMES: usize = 45;
const SETTLE_FRAMES: usize = 90;
const DRAG_STEP: f32 = -11.0;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let (mut scene, content) = TestScene::strip(Axis::Horizontal, 720.0, 240.0, 3);
    scene.set_size(content, Size::new(1440.0, 240.0));

    let mut carousel = Carousel::new(
        CarouselConfig::horizontal()
            .with_content(content)
            .with_magnetic(true)
            .with_init_on_start(true),
    );

    let last_focus = Rc::new(Cell::new(None::<usize>));
    {
        let last_focus = Rc::clone(&last_focus);
        carousel.on_focused(move |index| {
            if last_focus.replace(Some(index)) != Some(index) {
                log::info!("focus -> card {index}");
            }
        });
    }

    let pending = carousel
        .start(&mut scene)
        .context("starting carousel")?
        .context("init_on_start should return a pending initialization")?;
    scene.layout_pass();
    carousel
        .complete_initialization(&mut scene, &IdentityProjection, pending)
        .context("completing initialization")?;
    log::info!(
        "{} cards, dest {}, child world size {}",
        carousel.child_count(),
        carousel.dest(),
        carousel.child_world_size()
    );

    let mut clock = FrameClock::new();
    carousel.begin_drag();
    for _ in 0..DRAG_FRAMES {
        scene.scroll_by(content, Point::new(DRAG_STEP, 0.0));
        carousel.update(&mut scene, clock.tick());
        thread::sleep(FRAME_INTERVAL);
    }
    carousel.end_drag();
    log::info!("released at x = {}", scene_x(&scene, content));

    for _ in 0..SETTLE_FRAMES {
        carousel.update(&mut scene, clock.tick());
        thread::sleep(FRAME_INTERVAL);
    }
    log::info!(
        "settled on card {} at x = {} after {} frames",
        carousel.focused_index(),
        scene_x(&scene, content),
        clock.frame_count()
    );
    Ok(())
}

fn scene_x(scene: &TestScene, content: NodeId) -> f32 {
    scene.anchored_position(content).x
}
