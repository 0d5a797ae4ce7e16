//! Testing utilities and in-memory host for Carousel

pub mod assertions;
pub mod harness;
pub mod scene;

pub use assertions::*;
pub use harness::*;
pub use scene::*;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::harness::*;
    pub use crate::scene::{TestScene, TestScrollBehavior};
}
