//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Message component builder: validated rows of buttons frozen into transport-ready payloads
#[derive(Parser, Debug)]
#[command(name = "msgcomp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a layout and print the message payload as JSON
    Build {
        /// Layout file, or a name under layout_dir
        #[arg(value_hint = ValueHint::FilePath)]
        layout: PathBuf,
        /// Single-line JSON instead of pretty output
        #[arg(long)]
        compact: bool,
    },

    /// Validate a layout without printing the payload
    Check {
        /// Layout file, or a name under layout_dir
        #[arg(value_hint = ValueHint::FilePath)]
        layout: PathBuf,
    },

    /// Show the built component tree
    Show {
        /// Layout file, or a name under layout_dir
        #[arg(value_hint = ValueHint::FilePath)]
        layout: PathBuf,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create global config template
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Show config paths
    Path,
}
