//! CLI layer: argument parsing, prompts, and the interactive menus

pub mod args;
pub mod error;
pub mod input;
pub mod menu;
pub mod output;

pub use args::Cli;
pub use error::{CliError, CliResult};
