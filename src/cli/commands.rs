//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "labbook")]
#[command(about = "Laboratory notebook with attachment-aware PDF export", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all sessions
    Sessions,

    /// List the entries of a session
    Entries {
        /// Session id as shown by `sessions`
        session_id: i64,
    },

    /// Create a new session
    New {
        /// Session title (a blank title is silently ignored)
        title: String,
    },

    /// Add an entry with an attached file to a session
    Add {
        /// Session id as shown by `sessions`
        session_id: i64,

        /// Entry description (a blank description is silently ignored)
        #[arg(short, long)]
        description: String,

        /// Path of the file to attach (must exist)
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Export a session to a PDF document
    Export {
        /// Session id as shown by `sessions`
        session_id: i64,

        /// Output directory (defaults to the configured export directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Open the interactive shell (the default when no command is given)
    Shell,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
