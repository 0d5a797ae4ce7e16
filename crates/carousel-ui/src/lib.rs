//! Infinite, magnetic carousel layout controller
//!
//! A [`Carousel`] scrolls a fixed, ordered set of host nodes along one axis.
//! Children that drift more than half a viewport away from the anchor are
//! translated by one full content length, which fakes endless content
//! without reordering anything. Every frame the child nearest the anchor
//! becomes the focus, and in magnetic mode the content container eases
//! toward it while no drag is in progress.
//!
//! The host engine stays outside: geometry, cloning and the drag source all
//! come in through [`CarouselHost`].

mod carousel;
mod config;
mod drag;
mod error;
mod focus;
mod frame;
mod host;
mod initializer;
mod slots;

pub use carousel::Carousel;
pub use config::{CarouselConfig, MIN_INFINITE_CHILDREN};
pub use drag::DragState;
pub use error::CarouselError;
pub use focus::{FocusListeners, FocusSubscription};
pub use host::{CarouselHost, IdentityProjection, NodeId, ScrollBehavior, WorldProjection};
pub use initializer::PendingInitialization;
pub use slots::ChildSlots;

pub use carousel_ui_graphics::{Point, Rect, Size};
pub use carousel_ui_layout::{Axis, AxisStrategy, LinearLayout};

pub mod prelude {
    pub use crate::{
        Axis, Carousel, CarouselConfig, CarouselError, CarouselHost, LinearLayout, NodeId,
        PendingInitialization, Point, Rect, Size, WorldProjection,
    };
}

#[cfg(test)]
mod tests;
