//! Weighted-random-order iteration

use std::fmt;
use std::iter::FusedIterator;

use rand::Rng;

use super::tree::{NodeId, NodeKind, SumTree};

/// Iterator over a [`WeightedRandomSet`](super::WeightedRandomSet) in
/// weighted-random order, without replacement
///
/// Each step draws one of the elements not yet yielded, with probability
/// proportional to its weight among those elements. The iterator keeps its own
/// per-node bookkeeping, so any number of iterators can walk the same set at
/// once.
pub struct Iter<'a, E, R> {
    tree: &'a SumTree<E>,
    rng: R,
    /// Weight of each subtree still to be yielded
    remaining: Vec<f32>,
    /// Subtree fully yielded
    done: Vec<bool>,
    left: usize,
}

impl<'a, E, R: Rng> Iter<'a, E, R> {
    pub(super) fn new(tree: &'a SumTree<E>, len: usize, rng: R) -> Self {
        let count = tree.node_count();
        Self {
            tree,
            rng,
            remaining: (0..count).map(|id| tree.node(id).weight).collect(),
            done: vec![false; count],
            left: len,
        }
    }

    /// Mark a leaf yielded and rebuild the remaining sums above it
    fn mark_done(&mut self, leaf: NodeId) {
        self.remaining[leaf] = 0.0;
        self.done[leaf] = true;

        let mut cursor = self.tree.node(leaf).parent;
        while let Some(id) = cursor {
            if let NodeKind::Internal { left, right } = self.tree.node(id).kind {
                self.remaining[id] = self.remaining[left] + self.remaining[right];
                self.done[id] = self.done[left] && self.done[right];
            }
            cursor = self.tree.node(id).parent;
        }
    }
}

impl<'a, E, R: Rng> Iterator for Iter<'a, E, R> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        if self.left == 0 {
            return None;
        }

        let mut id = self.tree.root()?;
        let mut value = self.rng.r#gen::<f32>() * self.remaining[id];

        while let NodeKind::Internal { left, right } = self.tree.node(id).kind {
            let go_left = if self.done[left] {
                false
            } else if self.done[right] {
                true
            } else {
                value < self.remaining[left]
            };

            if go_left {
                id = left;
            } else {
                if !self.done[left] {
                    value -= self.remaining[left];
                }
                id = right;
            }
        }

        self.mark_done(id);
        self.left -= 1;
        self.tree.element(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }
}

impl<E, R: Rng> ExactSizeIterator for Iter<'_, E, R> {}

impl<E, R: Rng> FusedIterator for Iter<'_, E, R> {}

impl<E, R> fmt::Debug for Iter<'_, E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("left", &self.left).finish_non_exhaustive()
    }
}
