//! Two-phase initialization.
//!
//! Phase one discovers and measures the children and pads the set by cloning
//! when infinite mode needs more of them. The host then runs a layout pass so
//! the clones get real geometry, and phase two projects the container size to
//! world units and commits the slots.

use carousel_ui_layout::AxisStrategy;

use crate::{
    Carousel, CarouselError, CarouselHost, ChildSlots, NodeId, WorldProjection,
    MIN_INFINITE_CHILDREN,
};

/// Result of [`Carousel::initialize`], consumed by
/// [`Carousel::complete_initialization`] after the host's next layout pass.
#[must_use = "pass the token to `complete_initialization` after the host layout pass"]
#[derive(Debug)]
pub struct PendingInitialization {
    generation: u64,
    slots: ChildSlots,
    viewport_size: f32,
    child_size: f32,
    spacing: f32,
    uses_layout: bool,
}

impl PendingInitialization {
    pub fn child_count(&self) -> usize {
        self.slots.len()
    }
}

impl Carousel {
    /// First phase: discovers the content container's children, measures the
    /// child size and clones children until infinite mode has enough of them.
    ///
    /// The carousel keeps running on its previous slot data, if any, until
    /// the returned token is completed.
    pub fn initialize<H: CarouselHost>(
        &mut self,
        host: &mut H,
    ) -> Result<PendingInitialization, CarouselError> {
        let content = self.content()?;
        let axis = self.config.axis;

        let viewport_size = axis.axis_size(host.viewport_rect());

        let mut nodes = Vec::new();
        host.children(content, &mut nodes);

        let mut child_size = 0.0;
        let mut spacing = 0.0;
        let mut uses_layout = false;
        if nodes.len() > 1 {
            child_size = axis.axis_size(host.rect(nodes[0]));
            if child_size <= 0.0 {
                child_size = viewport_size;
            }

            if let Some(layout) = host.linear_layout(content) {
                child_size += layout.spacing;
                spacing = layout.spacing;
                uses_layout = true;
            }
        } else {
            log::warn!(
                "Carousel: {} child(ren) under container {}, child size left at 0",
                nodes.len(),
                content
            );
        }

        if self.config.infinite && nodes.len() < MIN_INFINITE_CHILDREN {
            if nodes.is_empty() {
                log::warn!("Carousel: container {} has no children to repeat", content);
            } else {
                pad_children(host, content, &nodes);
                nodes.clear();
                host.children(content, &mut nodes);
            }
        }

        self.generation += 1;
        log::debug!(
            "Carousel: initialize #{} found {} children, child size {}",
            self.generation,
            nodes.len(),
            child_size
        );

        Ok(PendingInitialization {
            generation: self.generation,
            slots: ChildSlots::new(nodes),
            viewport_size,
            child_size,
            spacing,
            uses_layout,
        })
    }

    /// Second phase, run once the host has finished laying out any clones.
    ///
    /// Derives `dest` from the content container's size projected to world
    /// units and commits the slot data, after which `update` becomes active.
    pub fn complete_initialization<H: CarouselHost, P: WorldProjection + ?Sized>(
        &mut self,
        host: &mut H,
        projection: &P,
        pending: PendingInitialization,
    ) -> Result<(), CarouselError> {
        if pending.generation != self.generation {
            log::warn!(
                "Carousel: dropping stale initialization #{} (current #{})",
                pending.generation,
                self.generation
            );
            return Err(CarouselError::StaleInitialization {
                expected: self.generation,
                found: pending.generation,
            });
        }

        let content = self.content()?;
        let axis = self.config.axis;

        let content_rect = host.rect(content);
        let world = projection.screen_to_world(content_rect.size().to_point());
        let count = pending.slots.len();

        self.dest = axis.scalar(world) / 2.0;
        self.child_world_size = if count > 0 {
            self.dest / count as f32
        } else {
            0.0
        };
        self.viewport_size = pending.viewport_size;
        self.content_size = axis.axis_size(content_rect);
        self.child_size = pending.child_size;
        self.spacing = pending.spacing;
        self.uses_layout = pending.uses_layout;
        self.focused_index = 0;
        self.slots = Some(pending.slots);

        if self.config.reset_pivot_on_init {
            self.reset_pivot_and_position(host)?;
        }

        log::debug!(
            "Carousel: ready with {} children, dest {}, child world size {}",
            count,
            self.dest,
            self.child_world_size
        );
        Ok(())
    }
}

/// Appends clones of the whole `originals` set to `content` until there are
/// at least [`MIN_INFINITE_CHILDREN`] children. The final count is a
/// multiple of `originals.len()`.
fn pad_children<H: CarouselHost>(host: &mut H, content: NodeId, originals: &[NodeId]) {
    let mut count = originals.len();
    while count < MIN_INFINITE_CHILDREN {
        for &template in originals {
            host.instantiate(template, content);
            count += 1;
        }
    }
    log::debug!(
        "Carousel: padded {} children to {} for infinite scrolling",
        originals.len(),
        count
    );
}
