//! ud-cli library
//!
//! Exports the CLI building blocks so the binary stays a thin dispatch loop
//! and the rendering/error plumbing stays unit-testable.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod render;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};

#[cfg(test)]
mod tests;
