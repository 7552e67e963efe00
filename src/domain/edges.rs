//! Parent → child adjacency between consecutive layers.

use generational_arena::Index;
use tracing::instrument;

use crate::domain::tree::LayeredTree;

/// One drawn connection between layer `layer_pair` and `layer_pair + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub layer_pair: usize,
    pub parent: Index,
    pub child: Index,
}

/// Emits one edge per parent/child pair, grouped by adjacent layer pair.
///
/// Walks each parent's child list instead of testing every node pair, so the
/// cost is linear in the number of nodes. Within a pair, edges follow the
/// order of the lower layer.
#[instrument(level = "debug", skip(tree))]
pub fn derive_edges(tree: &LayeredTree) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(tree.len().saturating_sub(1));
    for (layer_pair, (upper, _)) in tree.layers().pairs().enumerate() {
        for &parent in upper {
            let Some(node) = tree.get(parent) else {
                continue;
            };
            edges.extend(node.children.iter().map(|&child| Edge {
                layer_pair,
                parent,
                child,
            }));
        }
    }
    edges
}

/// `(parent_id, child_id)` pairs, one group per adjacent layer pair.
#[instrument(level = "debug", skip(tree))]
pub fn edge_groups(tree: &LayeredTree) -> Vec<Vec<(usize, usize)>> {
    let mut groups = vec![Vec::new(); tree.num_layers().saturating_sub(1)];
    for edge in derive_edges(tree) {
        if let (Some(parent), Some(child)) = (tree.get(edge.parent), tree.get(edge.child)) {
            groups[edge.layer_pair].push((parent.id, child.id));
        }
    }
    groups
}
