//! Domain layer: the layered tree and its derived structures
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod codec;
pub mod edges;
pub mod error;
pub mod ids;
pub mod layers;
pub mod options;
pub mod tree;

pub use arena::{NodeData, TreeArena, TreeNode};
pub use builder::TreeBuilder;
pub use codec::{export, import, Layout, LayoutEntry, LayoutLayer};
pub use edges::{derive_edges, edge_groups, Edge};
pub use error::{DomainError, TreeResult};
pub use layers::Layers;
pub use options::TreeOptions;
pub use tree::{LayeredTree, NodeView};
