//! Focus-changed notification sink.
//!
//! Listeners receive the index of the nearest child every time the frame
//! updater resolves it. Nothing is deduplicated: an unchanged focus is
//! reported again on the next frame, and an exact tie reports each tied
//! index in scan order.

use smallvec::SmallVec;

/// Handle returned by [`FocusListeners::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusSubscription(usize);

type FocusCallback = Box<dyn FnMut(usize)>;

/// Ordered set of focus callbacks.
pub struct FocusListeners {
    listeners: SmallVec<[(FocusSubscription, FocusCallback); 2]>,
    next_id: usize,
}

impl Default for FocusListeners {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FocusListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FocusListeners")
            .field("len", &self.listeners.len())
            .finish()
    }
}

impl FocusListeners {
    pub fn new() -> Self {
        Self {
            listeners: SmallVec::new(),
            next_id: 1,
        }
    }

    pub fn subscribe(&mut self, callback: impl FnMut(usize) + 'static) -> FocusSubscription {
        let id = FocusSubscription(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(callback)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: FocusSubscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Invokes every listener, in subscription order.
    pub fn notify(&mut self, index: usize) {
        for (_, callback) in self.listeners.iter_mut() {
            callback(index);
        }
    }
}
