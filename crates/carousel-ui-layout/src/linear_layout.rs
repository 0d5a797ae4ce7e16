//! Automatic linear layout attached to a content container.

use crate::{Axis, AxisStrategy};
use carousel_ui_graphics::Point;

/// A row or column layout that places children back to back with a fixed
/// gap. Hosts report one of these for a container that lays its own
/// children out, so the carousel can account for the gap in its child size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearLayout {
    pub axis: Axis,
    pub spacing: f32,
}

impl LinearLayout {
    pub fn new(axis: Axis, spacing: f32) -> Self {
        Self { axis, spacing }
    }

    pub fn row(spacing: f32) -> Self {
        Self::new(Axis::Horizontal, spacing)
    }

    pub fn column(spacing: f32) -> Self {
        Self::new(Axis::Vertical, spacing)
    }

    /// Distance between the leading edges of two neighbours of `child_size`.
    pub fn pitch(&self, child_size: f32) -> f32 {
        child_size + self.spacing
    }

    /// Writes the leading-edge offset of each child along the layout axis,
    /// starting from `start`.
    pub fn place(&self, start: f32, sizes: &[f32], out_positions: &mut [f32]) {
        debug_assert_eq!(sizes.len(), out_positions.len());
        let mut cursor = start;
        for (size, position) in sizes.iter().zip(out_positions.iter_mut()) {
            *position = cursor;
            cursor += size + self.spacing;
        }
    }

    /// Places children and returns their anchored positions, keeping the
    /// cross-axis component of `origin`.
    pub fn place_points(&self, origin: Point, sizes: &[f32]) -> Vec<Point> {
        let mut offsets = vec![0.0; sizes.len()];
        self.place(self.axis.scalar(origin), sizes, &mut offsets);
        offsets
            .into_iter()
            .map(|offset| self.axis.set_scalar(origin, offset))
            .collect()
    }
}
