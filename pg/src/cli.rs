//! CLI argument parsing for pg

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pg")]
#[command(author, version, about = "Disposable playgrounds from reusable templates", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Playgrounds root to use instead of searching upward
    #[arg(short, long, global = true, env = "PG_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new playground called NAME
    New {
        #[arg(required = true)]
        name: String,

        /// Template to use (default: the default template)
        #[arg(short, long)]
        template: Option<String>,
    },

    /// Permanently delete the playground called NAME
    Raze {
        #[arg(required = true)]
        name: String,
    },

    /// List all playgrounds
    List,

    /// Show the playgrounds directory that will be used
    Locate,

    /// Manage templates
    Template {
        #[command(subcommand)]
        command: TemplateCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum TemplateCommand {
    /// Create a new template called NAME
    New {
        #[arg(required = true)]
        name: String,
    },

    /// Destroy the template called NAME
    Destroy {
        #[arg(required = true)]
        name: String,
    },

    /// List all templates
    List,

    /// Set the default template, or print it when NAME is omitted
    Default { name: Option<String> },
}
