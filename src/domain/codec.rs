//! Conversion between a tree and its layer-indexed layout description.
//!
//! A layout lists, per layer, every node name together with the name of its
//! parent. The root is the single entry without a parent and must sit in
//! layer 0.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::builder::TreeBuilder;
use crate::domain::error::{DomainError, TreeResult};
use crate::domain::options::TreeOptions;
use crate::domain::tree::LayeredTree;

/// One `name → parent` entry; `parent: None` marks the root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayoutEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl LayoutEntry {
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
        }
    }

    pub fn child(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: Some(parent.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayoutLayer {
    pub index: usize,
    #[serde(default)]
    pub nodes: Vec<LayoutEntry>,
}

impl LayoutLayer {
    pub fn new(index: usize, nodes: Vec<LayoutEntry>) -> Self {
        Self { index, nodes }
    }
}

/// Layer-indexed description of a whole tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Layout {
    #[serde(default)]
    pub layers: Vec<LayoutLayer>,
}

impl Layout {
    pub fn new(layers: Vec<LayoutLayer>) -> Self {
        Self { layers }
    }

    pub fn node_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.nodes.len()).sum()
    }
}

/// Describes `tree` layer by layer, in layer-major order.
#[instrument(level = "debug", skip(tree))]
pub fn export(tree: &LayeredTree) -> Layout {
    let layers = tree
        .layers()
        .iter()
        .enumerate()
        .map(|(index, layer)| {
            let nodes = layer
                .iter()
                .filter_map(|&idx| tree.get(idx))
                .map(|node| LayoutEntry {
                    name: node.data.name.clone(),
                    parent: node
                        .parent
                        .and_then(|parent| tree.get(parent))
                        .map(|parent| parent.data.name.clone()),
                })
                .collect();
            LayoutLayer::new(index, nodes)
        })
        .collect();
    Layout::new(layers)
}

/// Rebuilds a tree by replaying `layout` through [`TreeBuilder::add_node`].
///
/// Layers are replayed in ascending index, entries in their listed order. The
/// first failure aborts the import and no tree is returned.
#[instrument(level = "debug", skip(layout))]
pub fn import(layout: &Layout, options: TreeOptions) -> TreeResult<LayeredTree> {
    let mut ordered: Vec<&LayoutLayer> = layout.layers.iter().collect();
    ordered.sort_by_key(|layer| layer.index);

    if let Some(pair) = ordered.windows(2).find(|pair| pair[0].index == pair[1].index) {
        return Err(DomainError::malformed(pair[1].index, "duplicate layer index"));
    }
    match ordered.first() {
        Some(first) if first.index == 0 && !first.nodes.is_empty() => {}
        _ => return Err(DomainError::malformed(0, "missing root entry")),
    }

    // first declaration of a name decides its layer
    let mut declared: HashMap<&str, usize> = HashMap::new();
    for layer in &ordered {
        for entry in &layer.nodes {
            declared.entry(entry.name.as_str()).or_insert(layer.index);
        }
    }

    let mut builder = TreeBuilder::new(options);
    for layer in &ordered {
        for entry in &layer.nodes {
            if let Some(parent) = entry.parent.as_deref() {
                check_parent_layer(layer.index, &entry.name, parent, &declared)?;
            }
            builder.add_node(&entry.name, entry.parent.as_deref())?;
        }
    }

    let tree = builder.into_tree();
    debug!(
        "imported {} nodes into {} layers",
        tree.len(),
        tree.num_layers()
    );
    Ok(tree)
}

/// A parent must be declared exactly one layer above its child.
fn check_parent_layer(
    layer: usize,
    name: &str,
    parent: &str,
    declared: &HashMap<&str, usize>,
) -> TreeResult<()> {
    if layer == 0 {
        return Err(DomainError::malformed(
            layer,
            format!("root layer entry {name} names parent {parent}"),
        ));
    }
    match declared.get(parent) {
        Some(&parent_layer) if parent_layer >= layer => Err(DomainError::malformed(
            layer,
            format!("parent {parent} of {name} is declared in layer {parent_layer}"),
        )),
        Some(&parent_layer) if parent_layer + 1 < layer => Err(DomainError::malformed(
            layer,
            format!("parent {parent} of {name} is declared in layer {parent_layer}, expected {}", layer - 1),
        )),
        // unknown parents are reported by the builder
        _ => Ok(()),
    }
}
