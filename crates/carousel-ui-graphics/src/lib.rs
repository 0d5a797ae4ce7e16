//! Pure geometry data for the Carousel layout
//!
//! Points, sizes and rectangles shared by the axis strategies, the
//! controller and host adapters. Nothing here knows about a scroll axis.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
}
