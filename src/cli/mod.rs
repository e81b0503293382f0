//! CLI layer for the Pokédex.
//!
//! Provides the command-line interface using clap, with commands for
//! serving the web application and printing the catalog.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
