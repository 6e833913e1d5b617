//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and server defaults.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Resistor Bands";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "resistor-bands";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "ResistorBands";

/// Default host the web server binds to.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port the web server listens on.
pub const DEFAULT_PORT: u16 = 5000;

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "RESISTOR_BANDS_CONFIG_DIR";
