//! Scroll-axis strategies and linear layout contracts for Carousel

mod axis;
mod linear_layout;

pub use axis::*;
pub use linear_layout::*;

pub mod prelude {
    pub use crate::axis::{Axis, AxisStrategy, HorizontalAxis, VerticalAxis};
    pub use crate::linear_layout::LinearLayout;
}
