//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Inspect layered trees described by layout files
#[derive(Parser, Debug)]
#[command(name = "layertree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global settings
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show layers with ids and the edges between them
    Show {
        /// Layout file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Print the tree structure
    Tree {
        /// Layout file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Validate a layout file
    Check {
        /// Layout file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Add a node and write the layout back (creates the file if missing)
    Add {
        /// Layout file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Name of the new node
        name: String,
        /// Parent node name; omit to create the root
        #[arg(short, long)]
        parent: Option<String>,
    },

    /// Print the effective settings
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
