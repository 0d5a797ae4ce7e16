//! Per-axis arithmetic used by the carousel controller.
//!
//! The controller is written once against [`AxisStrategy`]; the two concrete
//! strategies are zero-sized and [`Axis`] picks between them with a `match`,
//! so no trait objects are involved on the frame path.

use carousel_ui_graphics::{Point, Rect};

/// Pivot fraction applied along the scroll axis by
/// [`AxisStrategy::reset_pivot_and_position`].
pub const SCROLL_AXIS_PIVOT: f32 = 0.5;

/// Orientation-specific operations on points and rectangles.
pub trait AxisStrategy {
    /// Projects a point onto the scroll axis.
    fn scalar(&self, point: Point) -> f32;

    /// Returns a copy of `point` with its scroll-axis component replaced.
    fn set_scalar(&self, point: Point, value: f32) -> Point;

    /// Increases the scroll-axis component in place.
    fn shift_positive(&self, point: &mut Point, amount: f32);

    /// Decreases the scroll-axis component in place.
    fn shift_negative(&self, point: &mut Point, amount: f32);

    /// Extent of `rect` along the scroll axis.
    fn axis_size(&self, rect: Rect) -> f32;

    /// Centers the pivot on the scroll axis and zeroes the scroll-axis
    /// component of the anchored position. The cross axis is untouched.
    fn reset_pivot_and_position(&self, pivot: &mut Point, anchored: &mut Point) {
        *pivot = self.set_scalar(*pivot, SCROLL_AXIS_PIVOT);
        *anchored = self.set_scalar(*anchored, 0.0);
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HorizontalAxis;

impl AxisStrategy for HorizontalAxis {
    #[inline]
    fn scalar(&self, point: Point) -> f32 {
        point.x
    }

    #[inline]
    fn set_scalar(&self, point: Point, value: f32) -> Point {
        point.with_x(value)
    }

    #[inline]
    fn shift_positive(&self, point: &mut Point, amount: f32) {
        point.x += amount;
    }

    #[inline]
    fn shift_negative(&self, point: &mut Point, amount: f32) {
        point.x -= amount;
    }

    #[inline]
    fn axis_size(&self, rect: Rect) -> f32 {
        rect.width
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VerticalAxis;

impl AxisStrategy for VerticalAxis {
    #[inline]
    fn scalar(&self, point: Point) -> f32 {
        point.y
    }

    #[inline]
    fn set_scalar(&self, point: Point, value: f32) -> Point {
        point.with_y(value)
    }

    #[inline]
    fn shift_positive(&self, point: &mut Point, amount: f32) {
        point.y += amount;
    }

    #[inline]
    fn shift_negative(&self, point: &mut Point, amount: f32) {
        point.y -= amount;
    }

    #[inline]
    fn axis_size(&self, rect: Rect) -> f32 {
        rect.height
    }
}

/// The scroll axis of a carousel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Children scroll left/right.
    #[default]
    Horizontal,
    /// Children scroll up/down.
    Vertical,
}

impl Axis {
    /// Returns the opposite axis.
    #[inline]
    pub fn cross_axis(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Axis::Horizontal)
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Axis::Vertical)
    }
}

macro_rules! dispatch_axis {
    ($axis:expr, $strategy:ident => $body:expr) => {
        match $axis {
            Axis::Horizontal => {
                let $strategy = HorizontalAxis;
                $body
            }
            Axis::Vertical => {
                let $strategy = VerticalAxis;
                $body
            }
        }
    };
}

impl AxisStrategy for Axis {
    #[inline]
    fn scalar(&self, point: Point) -> f32 {
        dispatch_axis!(self, s => s.scalar(point))
    }

    #[inline]
    fn set_scalar(&self, point: Point, value: f32) -> Point {
        dispatch_axis!(self, s => s.set_scalar(point, value))
    }

    #[inline]
    fn shift_positive(&self, point: &mut Point, amount: f32) {
        dispatch_axis!(self, s => s.shift_positive(point, amount))
    }

    #[inline]
    fn shift_negative(&self, point: &mut Point, amount: f32) {
        dispatch_axis!(self, s => s.shift_negative(point, amount))
    }

    #[inline]
    fn axis_size(&self, rect: Rect) -> f32 {
        dispatch_axis!(self, s => s.axis_size(rect))
    }
}
