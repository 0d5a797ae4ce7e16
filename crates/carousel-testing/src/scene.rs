//! In-memory host scene.
//!
//! Nodes form a tree under the carousel's viewport. A node's world position
//! is the viewport position plus the anchored positions of the node and all
//! its ancestors, so moving a container moves its children with it. Linear
//! layouts only re-place children when [`TestScene::layout_pass`] runs,
//! which stands in for the host's end-of-frame layout.

use carousel_ui::{CarouselHost, NodeId, ScrollBehavior};
use carousel_ui_graphics::{Point, Rect, Size};
use carousel_ui_layout::{Axis, AxisStrategy, LinearLayout};

#[derive(Clone, Debug)]
struct TestNode {
    label: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    size: Size,
    anchored: Point,
    pivot: Point,
    layout: Option<LinearLayout>,
}

/// Scroll-behavior sibling that records what the carousel configured.
#[derive(Clone, Debug, PartialEq)]
pub struct TestScrollBehavior {
    pub locked_axis: Option<Axis>,
    pub inertia: bool,
}

impl Default for TestScrollBehavior {
    fn default() -> Self {
        Self {
            locked_axis: None,
            inertia: true,
        }
    }
}

impl ScrollBehavior for TestScrollBehavior {
    fn lock_axis(&mut self, axis: Axis) {
        self.locked_axis = Some(axis);
    }

    fn set_inertia(&mut self, enabled: bool) {
        self.inertia = enabled;
    }
}

#[derive(Clone, Debug)]
pub struct TestScene {
    viewport: Rect,
    viewport_position: Point,
    nodes: Vec<TestNode>,
    scroll_behavior: Option<TestScrollBehavior>,
    drag_events: bool,
    instantiated: usize,
}

impl TestScene {
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport: Rect::from_size(viewport),
            viewport_position: Point::ZERO,
            nodes: Vec::new(),
            scroll_behavior: Some(TestScrollBehavior::default()),
            drag_events: true,
            instantiated: 0,
        }
    }

    /// A content container the size of the viewport holding `count`
    /// equally sized children placed back to back along `axis` by a
    /// zero-spacing linear layout, child 0 sitting on the viewport anchor.
    pub fn strip(axis: Axis, viewport_length: f32, child_length: f32, count: usize) -> (Self, NodeId) {
        let viewport = axis.set_scalar(Point::new(100.0, 100.0), viewport_length);
        let child = axis.set_scalar(Point::new(100.0, 100.0), child_length);
        let mut scene = Self::new(Size::new(viewport.x, viewport.y));
        let content = scene.add_container(Size::new(viewport.x, viewport.y));
        for index in 0..count {
            let node = scene.add_child(content, Size::new(child.x, child.y));
            scene.set_label(node, format!("item {index}"));
        }
        scene.set_layout(content, LinearLayout::new(axis, 0.0));
        scene.layout_pass();
        (scene, content)
    }

    /// Adds a root-level node, positioned relative to the viewport.
    pub fn add_container(&mut self, size: Size) -> NodeId {
        self.push_node(None, size)
    }

    pub fn add_child(&mut self, parent: NodeId, size: Size) -> NodeId {
        self.push_node(Some(parent), size)
    }

    fn push_node(&mut self, parent: Option<NodeId>, size: Size) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(TestNode {
            label: format!("node {id}"),
            parent,
            children: Vec::new(),
            size,
            anchored: Point::ZERO,
            pivot: Point::new(0.0, 1.0),
            layout: None,
        });
        if let Some(parent) = parent {
            self.nodes[parent].children.push(id);
        }
        id
    }

    pub fn set_label(&mut self, node: NodeId, label: impl Into<String>) {
        self.nodes[node].label = label.into();
    }

    pub fn label(&self, node: NodeId) -> &str {
        &self.nodes[node].label
    }

    pub fn set_size(&mut self, node: NodeId, size: Size) {
        self.nodes[node].size = size;
    }

    pub fn set_layout(&mut self, node: NodeId, layout: LinearLayout) {
        self.nodes[node].layout = Some(layout);
    }

    pub fn clear_layout(&mut self, node: NodeId) {
        self.nodes[node].layout = None;
    }

    pub fn set_viewport_position(&mut self, position: Point) {
        self.viewport_position = position;
    }

    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport = Rect::from_size(size);
    }

    pub fn without_scroll_behavior(mut self) -> Self {
        self.scroll_behavior = None;
        self
    }

    pub fn without_drag_events(mut self) -> Self {
        self.drag_events = false;
        self
    }

    pub fn scroll_behavior_state(&self) -> Option<&TestScrollBehavior> {
        self.scroll_behavior.as_ref()
    }

    /// Number of clones made through `instantiate`.
    pub fn instantiated(&self) -> usize {
        self.instantiated
    }

    pub fn child_count(&self, node: NodeId) -> usize {
        self.nodes[node].children.len()
    }

    /// Moves `node` by `delta` in its parent's space, the way a drag moves
    /// the content container.
    pub fn scroll_by(&mut self, node: NodeId, delta: Point) {
        let anchored = self.nodes[node].anchored;
        self.nodes[node].anchored = anchored + delta;
    }

    /// Re-places the children of every node that has a linear layout,
    /// starting at the parent's origin. Wrapped positions are overwritten.
    pub fn layout_pass(&mut self) {
        for parent in 0..self.nodes.len() {
            let Some(layout) = self.nodes[parent].layout else {
                continue;
            };
            let children = self.nodes[parent].children.clone();
            let sizes: Vec<f32> = children
                .iter()
                .map(|&child| layout.axis.axis_size(Rect::from_size(self.nodes[child].size)))
                .collect();
            for (child, point) in children.iter().zip(layout.place_points(Point::ZERO, &sizes)) {
                self.nodes[*child].anchored = point;
            }
        }
    }
}

impl CarouselHost for TestScene {
    fn viewport_rect(&self) -> Rect {
        self.viewport
    }

    fn viewport_position(&self) -> Point {
        self.viewport_position
    }

    fn rect(&self, node: NodeId) -> Rect {
        Rect::from_size(self.nodes[node].size)
    }

    fn position(&self, node: NodeId) -> Point {
        let mut position = self.viewport_position;
        let mut current = Some(node);
        while let Some(id) = current {
            position = position + self.nodes[id].anchored;
            current = self.nodes[id].parent;
        }
        position
    }

    fn anchored_position(&self, node: NodeId) -> Point {
        self.nodes[node].anchored
    }

    fn set_anchored_position(&mut self, node: NodeId, position: Point) {
        self.nodes[node].anchored = position;
    }

    fn pivot(&self, node: NodeId) -> Point {
        self.nodes[node].pivot
    }

    fn set_pivot(&mut self, node: NodeId, pivot: Point) {
        self.nodes[node].pivot = pivot;
    }

    fn children(&self, node: NodeId, out: &mut Vec<NodeId>) {
        out.extend_from_slice(&self.nodes[node].children);
    }

    fn linear_layout(&self, node: NodeId) -> Option<LinearLayout> {
        self.nodes[node].layout
    }

    fn instantiate(&mut self, template: NodeId, parent: NodeId) -> NodeId {
        let source = self.nodes[template].clone();
        let id = self.push_node(Some(parent), source.size);
        let node = &mut self.nodes[id];
        node.label = format!("{} (clone)", source.label);
        node.anchored = source.anchored;
        node.pivot = source.pivot;
        node.layout = source.layout;
        self.instantiated += 1;
        id
    }

    fn scroll_behavior(&mut self) -> Option<&mut dyn ScrollBehavior> {
        self.scroll_behavior
            .as_mut()
            .map(|behavior| behavior as &mut dyn ScrollBehavior)
    }

    fn has_drag_events(&self) -> bool {
        self.drag_events
    }
}
