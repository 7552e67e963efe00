//! Layout file service
//!
//! Reads and writes layout documents (TOML) and turns them into trees.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{self, LayeredTree, Layout, TreeBuilder, TreeOptions};
use crate::infrastructure::traits::FileSystem;

/// Service for persisting trees as layout documents.
pub struct LayoutService {
    fs: Arc<dyn FileSystem>,
    options: TreeOptions,
}

impl LayoutService {
    /// Create a new layout service; every imported tree gets `options`.
    pub fn new(fs: Arc<dyn FileSystem>, options: TreeOptions) -> Self {
        Self { fs, options }
    }

    /// Parse a layout document.
    pub fn parse(content: &str, path: &Path) -> ApplicationResult<Layout> {
        toml::from_str(content).map_err(|e| ApplicationError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Render a layout document.
    pub fn render(layout: &Layout) -> ApplicationResult<String> {
        toml::to_string_pretty(layout).map_err(|e| ApplicationError::Serialize {
            message: e.to_string(),
        })
    }

    /// Read a layout document from disk.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<Layout> {
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read layout", path)?;
        let layout = Self::parse(&content, path)?;
        debug!(
            "loaded {} entries in {} layers from {}",
            layout.node_count(),
            layout.layers.len(),
            path.display()
        );
        Ok(layout)
    }

    /// Read a layout document and import it.
    #[instrument(level = "debug", skip(self))]
    pub fn open(&self, path: &Path) -> ApplicationResult<LayeredTree> {
        let layout = self.load(path)?;
        Ok(domain::import(&layout, self.options)?)
    }

    /// Export `tree` and write it to `path`, creating parent directories.
    #[instrument(level = "debug", skip(self, tree))]
    pub fn save(&self, path: &Path, tree: &LayeredTree) -> ApplicationResult<()> {
        let content = Self::render(&domain::export(tree))?;
        self.fs
            .ensure_parent(path)
            .with_path_context("create layout directory", path)?;
        self.fs
            .write(path, &content)
            .with_path_context("write layout", path)?;
        debug!("saved {} nodes to {}", tree.len(), path.display());
        Ok(())
    }

    /// Add one node to the tree stored at `path` and write it back.
    ///
    /// The file is only rewritten when the insertion succeeds.
    #[instrument(level = "debug", skip(self))]
    pub fn append(
        &self,
        path: &Path,
        name: &str,
        parent: Option<&str>,
    ) -> ApplicationResult<LayeredTree> {
        let tree = if self.fs.exists(path) {
            self.open(path)?
        } else {
            LayeredTree::new(self.options)
        };
        let mut builder = TreeBuilder::from_tree(tree);
        builder.add_node(name, parent)?;
        let tree = builder.into_tree();
        self.save(path, &tree)?;
        Ok(tree)
    }
}
