//! Drag flag written by the host's input system.

/// Whether the user is currently dragging the carousel. Magnetic snapping is
/// suppressed exactly while this is set.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    dragging: bool,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) {
        self.dragging = true;
    }

    pub fn end(&mut self) {
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}
