//! Drivers that play the host's part in the carousel lifecycle.

use std::cell::RefCell;
use std::rc::Rc;

use carousel_ui::{Carousel, CarouselError, FocusSubscription, IdentityProjection};

use crate::TestScene;

/// Delta of one frame at 60 FPS.
pub const FRAME_DELTA: f32 = 1.0 / 60.0;

/// Runs both initialization phases with a layout pass in between and an
/// identity screen-to-world projection.
pub fn initialize_now(carousel: &mut Carousel, scene: &mut TestScene) -> Result<(), CarouselError> {
    let pending = carousel.initialize(scene)?;
    scene.layout_pass();
    carousel.complete_initialization(scene, &IdentityProjection, pending)
}

/// Runs `frames` updates of `delta` seconds each.
pub fn run_frames(carousel: &mut Carousel, scene: &mut TestScene, frames: usize, delta: f32) {
    for _ in 0..frames {
        carousel.update(scene, delta);
    }
}

/// Collects every focus notification a carousel fires.
#[derive(Clone, Default, Debug)]
pub struct FocusRecorder {
    events: Rc<RefCell<Vec<usize>>>,
}

impl FocusRecorder {
    pub fn attach(carousel: &mut Carousel) -> (Self, FocusSubscription) {
        let recorder = Self::default();
        let events = Rc::clone(&recorder.events);
        let subscription = carousel.on_focused(move |index| events.borrow_mut().push(index));
        (recorder, subscription)
    }

    pub fn events(&self) -> Vec<usize> {
        self.events.borrow().clone()
    }

    pub fn last(&self) -> Option<usize> {
        self.events.borrow().last().copied()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}
