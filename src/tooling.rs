//! Tooling & Integration Layer
//!
//! Command-line access to content files and their checksums.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
