//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod shell;

pub use commands::{Cli, Commands};
pub use output::{format_entry_list, format_session_list};
pub use shell::Shell;
