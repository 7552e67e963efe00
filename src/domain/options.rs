//! Construction-time options for a layered tree.

use serde::{Deserialize, Serialize};

/// Options handed to a tree when it is created.
///
/// There is no shared default instance: every tree owns its own copy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TreeOptions {
    /// Reject insertions whose name is already taken (strict mode).
    ///
    /// When disabled, duplicate names are admitted and lookups resolve
    /// to the earliest-inserted node carrying the name.
    pub reject_duplicate_names: bool,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            reject_duplicate_names: true,
        }
    }
}

impl TreeOptions {
    /// Lenient options: duplicate names are shadowed instead of rejected.
    pub fn lenient() -> Self {
        Self {
            reject_duplicate_names: false,
        }
    }
}
