//! Interpolation and frame timing for Carousel
//!
//! The magnetic snap is a per-frame exponential approach: each frame moves a
//! fixed fraction of the remaining distance, scaled by the frame delta. There
//! is no completion deadline; the value converges asymptotically.

mod frame_clock;
mod lerp;

pub use frame_clock::*;
pub use lerp::*;

#[cfg(test)]
mod tests;
