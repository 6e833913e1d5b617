//! CLI command handlers for Resistor Bands.
//!
//! This module provides headless, scriptable access to the color catalog
//! and the resistor decoder, plus configuration management.

pub mod colors;
pub mod common;
pub mod config;
pub mod decode;

// Re-export types used by main.rs and tests
pub use colors::{ColorArgs, ColorsArgs};
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use decode::DecodeArgs;
