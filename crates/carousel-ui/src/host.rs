//! Capabilities the host engine provides to a carousel.

use carousel_ui_graphics::{Point, Rect};
use carousel_ui_layout::{Axis, LinearLayout};

/// Host-side identity of a visual node.
pub type NodeId = usize;

/// Layout, transform and instantiation services of the host engine.
///
/// "Position" is the node's world-space position; "anchored position" is its
/// offset relative to its parent's anchor, which is what the carousel
/// writes. The carousel itself is the viewport.
pub trait CarouselHost {
    /// The carousel's own rectangle.
    fn viewport_rect(&self) -> Rect;

    /// World-space position of the carousel's anchor.
    fn viewport_position(&self) -> Point;

    fn rect(&self, node: NodeId) -> Rect;

    fn position(&self, node: NodeId) -> Point;

    fn anchored_position(&self, node: NodeId) -> Point;

    fn set_anchored_position(&mut self, node: NodeId, position: Point);

    fn pivot(&self, node: NodeId) -> Point;

    fn set_pivot(&mut self, node: NodeId, pivot: Point);

    /// Appends the direct children of `node`, in order, to `out`.
    fn children(&self, node: NodeId, out: &mut Vec<NodeId>);

    /// The automatic linear layout attached to `node`, if any.
    fn linear_layout(&self, node: NodeId) -> Option<LinearLayout> {
        let _ = node;
        None
    }

    /// Clones `template` and appends the clone as the last child of
    /// `parent`.
    fn instantiate(&mut self, template: NodeId, parent: NodeId) -> NodeId;

    /// The scroll-behavior sibling of the carousel, if one is attached.
    fn scroll_behavior(&mut self) -> Option<&mut dyn ScrollBehavior> {
        None
    }

    /// Whether a drag event source is attached that will call
    /// `begin_drag`/`end_drag`.
    fn has_drag_events(&self) -> bool {
        false
    }
}

/// Scroll-behavior provider sitting next to the carousel.
pub trait ScrollBehavior {
    /// Restricts scrolling to `axis`.
    fn lock_axis(&mut self, axis: Axis);

    fn set_inertia(&mut self, enabled: bool);
}

/// Screen-to-world projection used once when initialization completes.
pub trait WorldProjection {
    fn screen_to_world(&self, screen: Point) -> Point;
}

impl<F> WorldProjection for F
where
    F: Fn(Point) -> Point,
{
    fn screen_to_world(&self, screen: Point) -> Point {
        self(screen)
    }
}

/// Screen and world units coincide.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IdentityProjection;

impl WorldProjection for IdentityProjection {
    fn screen_to_world(&self, screen: Point) -> Point {
        screen
    }
}
