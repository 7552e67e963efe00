//! Text rendering of layered trees via termtree.

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::{LayeredTree, TreeNode};

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

fn label(node: &TreeNode) -> String {
    format!("{} (#{})", node.name(), node.id)
}

impl TreeNodeConvert for LayeredTree {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        let Some(root) = self.root().and_then(|idx| self.get(idx)) else {
            return Tree::new("Empty tree".to_string());
        };

        fn build_tree(tree: &LayeredTree, node_idx: Index, parent_tree: &mut Tree<String>) {
            if let Some(node) = tree.get(node_idx) {
                for &child_idx in &node.children {
                    if let Some(child) = tree.get(child_idx) {
                        let mut child_tree = Tree::new(label(child));
                        build_tree(tree, child_idx, &mut child_tree);
                        parent_tree.push(child_tree);
                    }
                }
            }
        }

        let mut rendered = Tree::new(label(root));
        if let Some(root_idx) = self.root() {
            build_tree(self, root_idx, &mut rendered);
        }
        rendered
    }
}
