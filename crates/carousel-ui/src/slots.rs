//! Per-child buffers reused on every frame.

use crate::NodeId;

/// The ordered children of the content container together with their
/// signed offset and distance to the viewport anchor.
///
/// All three buffers share one length, fixed when the slots are built.
/// Order is the container's child order at that time and never changes;
/// wrapping moves nodes, not slots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChildSlots {
    nodes: Vec<NodeId>,
    offsets: Vec<f32>,
    distances: Vec<f32>,
}

impl ChildSlots {
    pub fn new(nodes: Vec<NodeId>) -> Self {
        let len = nodes.len();
        Self {
            nodes,
            offsets: vec![0.0; len],
            distances: vec![0.0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> NodeId {
        self.nodes[index]
    }

    pub fn offsets(&self) -> &[f32] {
        &self.offsets
    }

    pub fn distances(&self) -> &[f32] {
        &self.distances
    }

    /// Stores the signed offset of slot `index` and its absolute distance.
    #[inline]
    pub fn record(&mut self, index: usize, offset: f32) {
        self.offsets[index] = offset;
        self.distances[index] = offset.abs();
    }

    /// Smallest recorded distance, or `None` without slots.
    pub fn min_distance(&self) -> Option<f32> {
        self.distances.iter().copied().reduce(f32::min)
    }

    /// Indices whose distance equals the minimum, in scan order. The last
    /// one yielded is the focus.
    pub fn nearest(&self) -> impl Iterator<Item = usize> + '_ {
        let min = self.min_distance();
        self.distances
            .iter()
            .enumerate()
            .filter(move |(_, distance)| Some(**distance) == min)
            .map(|(index, _)| index)
    }
}
