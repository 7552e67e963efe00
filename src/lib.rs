//! Layered tree bookkeeping.
//!
//! Nodes are added one at a time below a parent found by name. After every
//! insertion the tree regroups its nodes into depth layers and renumbers them
//! so that each id equals the node's position in layer-major order. Renderers
//! consume [`domain::LayeredTree::node_views`] and [`domain::edge_groups`].
//!
//! ```
//! use layertree::domain::{edge_groups, TreeBuilder, TreeOptions};
//!
//! let mut builder = TreeBuilder::new(TreeOptions::default());
//! builder.add_node("A", None)?;
//! builder.add_node("B", Some("A"))?;
//! builder.add_node("C", Some("A"))?;
//!
//! let tree = builder.into_tree();
//! assert_eq!(tree.layer_sizes(), vec![1, 2]);
//! assert_eq!(edge_groups(&tree), vec![vec![(0, 1), (0, 2)]]);
//! # Ok::<(), layertree::domain::DomainError>(())
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod tree_traits;
pub mod util;

pub use domain::{LayeredTree, TreeBuilder, TreeOptions};
