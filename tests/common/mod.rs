//! Shared helpers for integration tests

#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};

use generational_arena::Index;
use layertree::domain::{LayeredTree, TreeBuilder, TreeOptions};

/// Insertion sequences used across tests: `(name, parent)`.
pub type Script = &'static [(&'static str, Option<&'static str>)];

pub const SAMPLE: Script = &[
    ("A", None),
    ("B", Some("A")),
    ("D", Some("A")),
    ("C", Some("B")),
    ("E", Some("D")),
    ("F", Some("D")),
];

pub const CHAIN: Script = &[
    ("r", None),
    ("a", Some("r")),
    ("b", Some("a")),
    ("c", Some("b")),
];

pub const WIDE: Script = &[
    ("root", None),
    ("l1", Some("root")),
    ("l2", Some("root")),
    ("l3", Some("root")),
    ("l4", Some("root")),
];

/// Deep children inserted before shallow siblings.
pub const INTERLEAVED: Script = &[
    ("R", None),
    ("M", Some("R")),
    ("X", Some("M")),
    ("Y", Some("X")),
    ("L", Some("R")),
    ("Z", Some("M")),
    ("N", Some("R")),
    ("W", Some("L")),
];

pub fn build(script: Script) -> LayeredTree {
    let mut builder = TreeBuilder::new(TreeOptions::default());
    for (name, parent) in script {
        builder.add_node(name, *parent).expect("valid script");
    }
    builder.into_tree()
}

/// Breadth-first order computed directly from the child lists.
pub fn bfs_order(tree: &LayeredTree) -> Vec<Index> {
    let mut order = Vec::new();
    let mut queue: VecDeque<Index> = tree.root().into_iter().collect();
    while let Some(idx) = queue.pop_front() {
        order.push(idx);
        queue.extend(tree.get(idx).unwrap().children.iter().copied());
    }
    order
}

/// Checks the structural invariants every successful operation must keep.
pub fn assert_invariants(tree: &LayeredTree) {
    let n = tree.len();

    let ids: HashSet<usize> = tree.iter().map(|(_, node)| node.id).collect();
    assert_eq!(ids, (0..n).collect::<HashSet<_>>(), "ids must be dense");

    let order = bfs_order(tree);
    assert_eq!(order.len(), n);
    for (position, idx) in order.iter().enumerate() {
        assert_eq!(tree.get(*idx).unwrap().id, position, "id must equal BFS position");
    }

    let flattened: Vec<Index> = tree.layers().flatten().collect();
    assert_eq!(flattened, order, "layers must flatten to BFS order");

    for (idx, node) in tree.iter() {
        match node.parent {
            None => {
                assert_eq!(Some(idx), tree.root());
                assert_eq!(node.layer, 0);
            }
            Some(parent) => {
                assert_eq!(node.layer, tree.get(parent).unwrap().layer + 1);
            }
        }
    }
}

/// Node names per layer.
pub fn layer_names(tree: &LayeredTree) -> Vec<Vec<String>> {
    tree.node_views()
        .into_iter()
        .map(|layer| layer.into_iter().map(|view| view.name).collect())
        .collect()
}
