//! Arena-backed node store.
//!
//! All nodes live in one generational arena. Parent and child links, layer
//! membership and the name index hold plain `Index` values into that arena.

use std::collections::HashMap;
use std::fmt;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::error::{DomainError, TreeResult};

/// Data payload for tree nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    /// Name used to address the node when attaching children
    pub name: String,
}

impl fmt::Display for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug)]
pub struct TreeNode {
    /// Node payload
    pub data: NodeData,
    /// Position in flattened layer-major order, recomputed on every insertion
    pub id: usize,
    /// Distance from the root, recomputed on every insertion
    pub layer: usize,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in insertion order
    pub children: Vec<Index>,
}

impl TreeNode {
    pub fn name(&self) -> &str {
        &self.data.name
    }
}

/// Owning store for every node of one tree.
#[derive(Debug, Default)]
pub struct TreeArena {
    arena: Arena<TreeNode>,
    root: Option<Index>,
    name_index: HashMap<String, Index>,
}

impl TreeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the root node. Fails if the store already has one.
    #[instrument(level = "trace", skip(self))]
    pub fn create_root(&mut self, name: &str) -> TreeResult<Index> {
        if self.root.is_some() {
            return Err(DomainError::DuplicateRoot(name.to_string()));
        }
        let idx = self.insert_node(name, None);
        self.root = Some(idx);
        Ok(idx)
    }

    /// Creates a node below `parent`, appending it to the parent's children.
    ///
    /// `parent` must already be resolved against this store.
    #[instrument(level = "trace", skip(self))]
    pub fn create_child(&mut self, name: &str, parent: Index) -> Index {
        let idx = self.insert_node(name, Some(parent));
        if let Some(parent) = self.arena.get_mut(parent) {
            parent.children.push(idx);
        }
        idx
    }

    fn insert_node(&mut self, name: &str, parent: Option<Index>) -> Index {
        let node = TreeNode {
            data: NodeData {
                name: name.to_string(),
            },
            id: self.arena.len(),
            layer: 0,
            parent,
            children: Vec::new(),
        };
        let idx = self.arena.insert(node);
        // earliest insertion keeps the name
        self.name_index.entry(name.to_string()).or_insert(idx);
        idx
    }

    /// Looks a node up by name; with duplicate names the earliest-inserted wins.
    #[instrument(level = "trace", skip(self))]
    pub fn find_by_name(&self, name: &str) -> Option<Index> {
        self.name_index.get(name).copied()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.name_index.contains_key(name)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub(crate) fn get_node_mut(&mut self, idx: Index) -> Option<&mut TreeNode> {
        self.arena.get_mut(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Preorder traversal, children left to right.
    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }

    /// Number of levels in the tree; 0 for an empty store.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Names of all nodes without children, in preorder.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_nodes(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, node)| node.children.is_empty())
            .map(|(_, node)| node.data.name.clone())
            .collect()
    }
}

pub struct TreeIterator<'a> {
    arena: &'a TreeArena,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(arena: &'a TreeArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push(root);
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // reversed so the leftmost child is popped first
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}
