//! The layered tree: node store plus derived layer structure.

use std::fmt;

use generational_arena::Index;
use itertools::Itertools;
use tracing::instrument;

use crate::domain::arena::{TreeArena, TreeNode};
use crate::domain::layers::Layers;
use crate::domain::options::TreeOptions;

/// Read-only `(id, name)` projection of a node, as handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeView {
    pub id: usize,
    pub name: String,
}

/// A rooted tree whose nodes are grouped into depth layers and numbered in
/// flattened layer-major order.
///
/// Only [`crate::domain::TreeBuilder`] mutates it; everything exposed here is
/// a read-only view.
#[derive(Debug, Default)]
pub struct LayeredTree {
    pub(crate) store: TreeArena,
    pub(crate) layers: Layers,
    pub(crate) options: TreeOptions,
}

impl LayeredTree {
    pub fn new(options: TreeOptions) -> Self {
        Self {
            store: TreeArena::new(),
            layers: Layers::default(),
            options,
        }
    }

    pub fn options(&self) -> TreeOptions {
        self.options
    }

    pub fn store(&self) -> &TreeArena {
        &self.store
    }

    pub fn layers(&self) -> &Layers {
        &self.layers
    }

    pub fn root(&self) -> Option<Index> {
        self.store.root()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn get(&self, idx: Index) -> Option<&TreeNode> {
        self.store.get_node(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn find_by_name(&self, name: &str) -> Option<Index> {
        self.store.find_by_name(name)
    }

    /// Nodes in flattened layer-major order, i.e. ascending id.
    pub fn iter(&self) -> impl Iterator<Item = (Index, &TreeNode)> + '_ {
        self.layers
            .flatten()
            .filter_map(|idx| self.store.get_node(idx).map(|node| (idx, node)))
    }

    pub fn layer_sizes(&self) -> Vec<usize> {
        self.layers.sizes()
    }

    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Layer structure as `(id, name)` views, one inner vector per depth.
    #[instrument(level = "debug", skip(self))]
    pub fn node_views(&self) -> Vec<Vec<NodeView>> {
        self.layers
            .iter()
            .map(|layer| {
                layer
                    .iter()
                    .filter_map(|&idx| self.store.get_node(idx))
                    .map(|node| NodeView {
                        id: node.id,
                        name: node.data.name.clone(),
                    })
                    .collect()
            })
            .collect()
    }
}

/// Two lines: node names, then node ids, both in layer-major order.
impl fmt::Display for LayeredTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.iter().map(|(_, n)| n.name()).join(", "))?;
        write!(f, "[{}]", self.iter().map(|(_, n)| n.id).join(", "))
    }
}
