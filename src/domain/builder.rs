//! Validated, atomic node insertion.

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, TreeResult};
use crate::domain::options::TreeOptions;
use crate::domain::tree::LayeredTree;
use crate::domain::{ids, layers};

/// Grows a [`LayeredTree`] one node at a time.
///
/// Every insertion is validated completely before the store is touched, then
/// layers and ids are rebuilt for the whole tree.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    tree: LayeredTree,
}

impl TreeBuilder {
    pub fn new(options: TreeOptions) -> Self {
        Self {
            tree: LayeredTree::new(options),
        }
    }

    /// Continue building an existing tree.
    pub fn from_tree(tree: LayeredTree) -> Self {
        Self { tree }
    }

    pub fn tree(&self) -> &LayeredTree {
        &self.tree
    }

    pub fn into_tree(self) -> LayeredTree {
        self.tree
    }

    /// Adds `name` below the node called `parent`; `None` creates the root.
    ///
    /// # Errors
    /// - `NotFound` if `parent` names no existing node (including on an empty tree)
    /// - `DuplicateRoot` if `parent` is `None` and a root exists
    /// - `DuplicateName` if `name` is taken and duplicates are rejected
    #[instrument(level = "debug", skip(self))]
    pub fn add_node(&mut self, name: &str, parent: Option<&str>) -> TreeResult<Index> {
        let parent_idx = self.validate(name, parent).inspect_err(|e| {
            debug!("rejected insertion of {:?}: {}", name, e);
        })?;

        let store = &mut self.tree.store;
        let idx = match parent_idx {
            None => store.create_root(name)?,
            Some(parent_idx) => store.create_child(name, parent_idx),
        };

        self.tree.layers = layers::rebuild(store);
        let assigned = ids::rebuild(store, &self.tree.layers);
        debug!(
            "added {:?} under {:?}: {} nodes in {} layers",
            name,
            parent,
            assigned,
            self.tree.layers.len()
        );
        Ok(idx)
    }

    /// Resolves the parent without mutating anything.
    fn validate(&self, name: &str, parent: Option<&str>) -> TreeResult<Option<Index>> {
        let store = &self.tree.store;
        let parent_idx = match parent {
            None if store.root().is_some() => {
                return Err(DomainError::DuplicateRoot(name.to_string()))
            }
            None => None,
            Some(parent_name) => Some(
                store
                    .find_by_name(parent_name)
                    .ok_or_else(|| DomainError::NotFound(parent_name.to_string()))?,
            ),
        };
        if self.tree.options.reject_duplicate_names && store.contains_name(name) {
            return Err(DomainError::DuplicateName(name.to_string()));
        }
        Ok(parent_idx)
    }
}
