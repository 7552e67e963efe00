//! Depth-grouped layer structure.
//!
//! Layers are rebuilt from scratch with a breadth-first walk from the root.
//! Each node lands in the bucket for its depth; buckets are allocated the
//! first time a depth is reached, so a childless node never affects how
//! many layers exist.

use std::collections::VecDeque;

use generational_arena::Index;
use tracing::instrument;

use crate::domain::arena::TreeArena;

/// Nodes grouped by depth, each layer in breadth-first discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layers(Vec<Vec<Index>>);

impl Layers {
    /// Number of layers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, depth: usize) -> Option<&[Index]> {
        self.0.get(depth).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = &[Index]> + '_ {
        self.0.iter().map(Vec::as_slice)
    }

    /// Node count per layer.
    pub fn sizes(&self) -> Vec<usize> {
        self.0.iter().map(Vec::len).collect()
    }

    /// Flattened layer-major order.
    pub fn flatten(&self) -> impl Iterator<Item = Index> + '_ {
        self.0.iter().flatten().copied()
    }

    /// Adjacent layer pairs `(Li, Li+1)`.
    pub fn pairs(&self) -> impl Iterator<Item = (&[Index], &[Index])> + '_ {
        self.0
            .windows(2)
            .map(|pair| (pair[0].as_slice(), pair[1].as_slice()))
    }
}

/// Recomputes the layer structure of the whole tree and writes each node's depth.
#[instrument(level = "debug", skip(arena))]
pub fn rebuild(arena: &mut TreeArena) -> Layers {
    let mut buckets: Vec<Vec<Index>> = Vec::new();
    let Some(root) = arena.root() else {
        return Layers(buckets);
    };

    let mut queue = VecDeque::from([(root, 0usize)]);
    while let Some((idx, depth)) = queue.pop_front() {
        let Some(node) = arena.get_node(idx) else {
            continue;
        };
        if buckets.len() <= depth {
            buckets.resize_with(depth + 1, Vec::new);
        }
        buckets[depth].push(idx);
        queue.extend(node.children.iter().map(|&child| (child, depth + 1)));
    }

    for (depth, bucket) in buckets.iter().enumerate() {
        for &idx in bucket {
            if let Some(node) = arena.get_node_mut(idx) {
                node.layer = depth;
            }
        }
    }

    Layers(buckets)
}
