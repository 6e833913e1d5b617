//! Resistor Bands Library
//!
//! This library decodes resistor color-band encodings into resistance and
//! tolerance values. It provides the embedded color catalog, the four- and
//! five-band decoders, application configuration, CLI command handlers and,
//! with the `web` feature, a REST API.

// Module declarations
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
#[cfg(feature = "web")]
pub mod web;
