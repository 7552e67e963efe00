//! Command dispatch for the inspector

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{edge_groups, NodeView};
use crate::infrastructure::di::ServiceContainer;
use crate::tree_traits::TreeNodeConvert;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage(
            "no command given, see `layertree --help`".into(),
        ));
    };
    if let Commands::Completion { shell } = command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);
    let container = ServiceContainer::new(settings);

    match command {
        Commands::Show { file } => show(&container, file),
        Commands::Tree { file } => tree(&container, file),
        Commands::Check { file } => check(&container, file),
        Commands::Add { file, name, parent } => add(&container, file, name, parent.as_deref()),
        Commands::Config => {
            output::info(&container.settings.to_toml()?);
            Ok(())
        }
        Commands::Completion { .. } => Ok(()),
    }
}

#[instrument(skip(container))]
fn show(container: &ServiceContainer, file: &Path) -> CliResult<()> {
    let tree = container.layouts.open(file)?;
    let max_shown = container.settings.display.max_shown_nodes;
    let views = tree.node_views();

    output::header(&format!("{} nodes in {} layers", tree.len(), tree.num_layers()));
    for (depth, layer) in views.iter().enumerate() {
        output::detail(&format!(
            "layer {} ({}): {}",
            depth,
            layer.len(),
            format_layer(layer, max_shown)
        ));
    }

    let groups = edge_groups(&tree);
    if !groups.is_empty() {
        output::header("edges");
    }
    for (pair, group) in groups.iter().enumerate() {
        output::detail(&format!(
            "{}-{}: {}",
            pair,
            pair + 1,
            group
                .iter()
                .map(|(parent, child)| format!("{} -> {}", parent, child))
                .join(", ")
        ));
    }
    Ok(())
}

#[instrument(skip(container))]
fn tree(container: &ServiceContainer, file: &Path) -> CliResult<()> {
    let tree = container.layouts.open(file)?;
    output::info(&tree.to_tree_string());
    Ok(())
}

#[instrument(skip(container))]
fn check(container: &ServiceContainer, file: &Path) -> CliResult<()> {
    let tree = container.layouts.open(file)?;
    output::success(&format!(
        "{}: {} nodes, layer sizes {:?}",
        file.display(),
        tree.len(),
        tree.layer_sizes()
    ));
    Ok(())
}

#[instrument(skip(container))]
fn add(
    container: &ServiceContainer,
    file: &Path,
    name: &str,
    parent: Option<&str>,
) -> CliResult<()> {
    if name.trim().is_empty() {
        return Err(CliError::InvalidArgs("node name must not be empty".into()));
    }
    let tree = container.layouts.append(file, name, parent)?;
    output::action("Added", &format!("{} ({} nodes)", name, tree.len()));
    output::info(&tree);
    Ok(())
}

/// `name#id` entries, elided after `max_shown` nodes.
pub fn format_layer(layer: &[NodeView], max_shown: usize) -> String {
    let shown = layer
        .iter()
        .take(max_shown)
        .map(|view| format!("{}#{}", view.name, view.id))
        .join(", ");
    match layer.len().checked_sub(max_shown) {
        Some(hidden) if hidden > 0 => format!("{}, … (+{} more)", shown, hidden),
        _ => shown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn views(n: usize) -> Vec<NodeView> {
        (0..n)
            .map(|id| NodeView {
                id,
                name: format!("N{}", id),
            })
            .collect()
    }

    #[test]
    fn test_format_layer_within_limit() {
        assert_eq!(format_layer(&views(2), 16), "N0#0, N1#1");
    }

    #[test]
    fn test_format_layer_elides_large_layers() {
        assert_eq!(format_layer(&views(5), 3), "N0#0, N1#1, N2#2, … (+2 more)");
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
