//! Command-line front end for Missing Finder.

pub mod cli;
pub mod commands;
mod error;
pub mod list_commands;
pub mod logger;
pub mod report_commands;
pub mod runner;
pub mod session_file;

#[cfg(test)]
mod tests;

pub use error::{CliError, Result as CliResult};
pub use runner::Runner;
