//! CLI argument parsing for the score TUI.

mod args;

pub use args::{parse_args, Args, CliConfig, VERSION};
