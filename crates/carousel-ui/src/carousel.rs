use carousel_ui_layout::{Axis, AxisStrategy};

use crate::{
    CarouselConfig, CarouselError, CarouselHost, ChildSlots, DragState, FocusListeners,
    FocusSubscription, NodeId, PendingInitialization,
};

/// Infinite, optionally magnetic carousel over the children of one host
/// container.
///
/// Lifecycle: [`start`](Self::start) validates the configuration,
/// [`initialize`](Self::initialize) and
/// [`complete_initialization`](Self::complete_initialization) build the
/// slot data across one host layout pass, then [`update`](Self::update) runs
/// once per frame. Until initialization completes `update` does nothing.
#[derive(Debug)]
pub struct Carousel {
    pub(crate) config: CarouselConfig,
    pub(crate) drag: DragState,
    pub(crate) focus_listeners: FocusListeners,
    pub(crate) slots: Option<ChildSlots>,
    /// Bumped by every `initialize`; pending tokens must match it.
    pub(crate) generation: u64,
    pub(crate) focused_index: usize,
    pub(crate) dest: f32,
    pub(crate) child_size: f32,
    pub(crate) child_world_size: f32,
    pub(crate) spacing: f32,
    pub(crate) uses_layout: bool,
    pub(crate) viewport_size: f32,
    pub(crate) content_size: f32,
}

impl Carousel {
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            drag: DragState::new(),
            focus_listeners: FocusListeners::new(),
            slots: None,
            generation: 0,
            focused_index: 0,
            dest: 0.0,
            child_size: 0.0,
            child_world_size: 0.0,
            spacing: 0.0,
            uses_layout: false,
            viewport_size: 0.0,
            content_size: 0.0,
        }
    }

    /// Horizontal carousel over `content` with default settings.
    pub fn horizontal(content: NodeId) -> Self {
        Self::new(CarouselConfig::horizontal().with_content(content))
    }

    /// Vertical carousel over `content` with default settings.
    pub fn vertical(content: NodeId) -> Self {
        Self::new(CarouselConfig::vertical().with_content(content))
    }

    /// Attaches the carousel to its host.
    ///
    /// Configures the scroll-behavior sibling when there is one, fails when
    /// no content container is set, and runs the first initialization phase
    /// when `init_on_start` is on. A missing scroll behavior or drag source
    /// only degrades behavior: without drag events snapping never pauses.
    pub fn start<H: CarouselHost>(
        &mut self,
        host: &mut H,
    ) -> Result<Option<PendingInitialization>, CarouselError> {
        let axis = self.config.axis;
        match host.scroll_behavior() {
            Some(behavior) => {
                behavior.lock_axis(axis);
                behavior.set_inertia(false);
            }
            None => log::warn!("Carousel: scroll behavior is missing, axis lock not applied"),
        }

        let content = self.content()?;

        let pending = if self.config.init_on_start {
            Some(self.initialize(host)?)
        } else {
            None
        };

        if !host.has_drag_events() {
            log::warn!("Carousel: drag event source is missing, snapping will not pause");
        }

        log::debug!(
            "Carousel: started on container {} ({:?}, magnetic={}, infinite={})",
            content,
            axis,
            self.config.magnetic,
            self.config.infinite
        );
        Ok(pending)
    }

    pub(crate) fn content(&self) -> Result<NodeId, CarouselError> {
        self.config.content.ok_or_else(|| {
            log::error!("Carousel: content container is empty, attach the viewport or content view");
            CarouselError::MissingContentContainer
        })
    }

    /// Centers the content container's pivot on the scroll axis and zeroes
    /// its scroll-axis position.
    pub fn reset_pivot_and_position<H: CarouselHost>(
        &self,
        host: &mut H,
    ) -> Result<(), CarouselError> {
        let content = self.content()?;
        let mut pivot = host.pivot(content);
        let mut anchored = host.anchored_position(content);
        self.config
            .axis
            .reset_pivot_and_position(&mut pivot, &mut anchored);
        host.set_pivot(content, pivot);
        host.set_anchored_position(content, anchored);
        Ok(())
    }

    /// Called by the host input system when a drag starts.
    pub fn begin_drag(&mut self) {
        self.drag.begin();
    }

    /// Called by the host input system when a drag ends.
    pub fn end_drag(&mut self) {
        self.drag.end();
    }

    /// Registers a listener for the focused index.
    pub fn on_focused(&mut self, callback: impl FnMut(usize) + 'static) -> FocusSubscription {
        self.focus_listeners.subscribe(callback)
    }

    pub fn remove_focus_listener(&mut self, subscription: FocusSubscription) -> bool {
        self.focus_listeners.unsubscribe(subscription)
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn axis(&self) -> Axis {
        self.config.axis
    }

    pub fn set_magnetic(&mut self, magnetic: bool) {
        self.config.magnetic = magnetic;
    }

    pub fn set_infinite(&mut self, infinite: bool) {
        self.config.infinite = infinite;
    }

    /// Whether slot data is committed and `update` does work.
    pub fn is_ready(&self) -> bool {
        self.slots.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn focused_index(&self) -> usize {
        self.focused_index
    }

    /// Wrap threshold: half the content container's size in world units.
    pub fn dest(&self) -> f32 {
        self.dest
    }

    /// Size of one child along the scroll axis, spacing included.
    pub fn child_size(&self) -> f32 {
        self.child_size
    }

    pub fn child_world_size(&self) -> f32 {
        self.child_world_size
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Whether the container's linear layout supplied the spacing.
    pub fn uses_layout(&self) -> bool {
        self.uses_layout
    }

    pub fn viewport_size(&self) -> f32 {
        self.viewport_size
    }

    pub fn content_size(&self) -> f32 {
        self.content_size
    }

    pub fn child_count(&self) -> usize {
        self.slots.as_ref().map_or(0, ChildSlots::len)
    }

    pub fn children(&self) -> &[NodeId] {
        self.slots.as_ref().map(ChildSlots::nodes).unwrap_or_default()
    }

    pub fn offsets(&self) -> &[f32] {
        self.slots.as_ref().map(ChildSlots::offsets).unwrap_or_default()
    }

    pub fn distances(&self) -> &[f32] {
        self.slots.as_ref().map(ChildSlots::distances).unwrap_or_default()
    }
}
