use carousel_animation::SNAP_RATE;
use carousel_ui_layout::Axis;

use crate::NodeId;

/// Infinite mode pads the child set until it holds at least this many
/// children.
pub const MIN_INFINITE_CHILDREN: usize = 4;

/// Settings applied before the first `start`.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    pub axis: Axis,
    /// Ease toward the focused child while not dragging.
    pub magnetic: bool,
    /// Wrap children around to fake endless content.
    pub infinite: bool,
    /// Run `initialize` from `start`.
    pub init_on_start: bool,
    /// Host node holding the scrolling children.
    pub content: Option<NodeId>,
    /// Fraction of the remaining snap distance covered per second.
    pub snap_rate: f32,
    /// Normalize the content container's pivot when initialization completes.
    pub reset_pivot_on_init: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Horizontal,
            magnetic: false,
            infinite: true,
            init_on_start: false,
            content: None,
            snap_rate: SNAP_RATE,
            reset_pivot_on_init: false,
        }
    }
}

impl CarouselConfig {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            ..Self::default()
        }
    }

    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    pub fn with_content(mut self, content: NodeId) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_magnetic(mut self, magnetic: bool) -> Self {
        self.magnetic = magnetic;
        self
    }

    pub fn with_infinite(mut self, infinite: bool) -> Self {
        self.infinite = infinite;
        self
    }

    pub fn with_init_on_start(mut self, init_on_start: bool) -> Self {
        self.init_on_start = init_on_start;
        self
    }

    pub fn with_snap_rate(mut self, snap_rate: f32) -> Self {
        self.snap_rate = snap_rate;
        self
    }

    pub fn with_reset_pivot_on_init(mut self, reset: bool) -> Self {
        self.reset_pivot_on_init = reset;
        self
    }
}
