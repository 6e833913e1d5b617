//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, LogLevel};
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Host or IP address the web server binds to
    #[arg(long, value_name = "HOST")]
    host: Option<String>,

    /// Port the web server listens on
    #[arg(long, value_name = "PORT")]
    port: Option<u16>,

    /// Default log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            print_json(&config)
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.host.is_none() && self.port.is_none() && self.log_level.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --host, --port, or --log-level",
            ));
        }

        // An unreadable or invalid file is reported, never overwritten.
        let mut config = load_config()?;

        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }

        if let Some(port) = self.port {
            config.server.port = port;
        }

        if let Some(level) = &self.log_level {
            config.logging.level = parse_log_level(level)?;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e:#}")))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Loads the config file, mapping read failures to IO errors and
/// parse or validation failures to validation errors.
fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| {
        let message = format!("Failed to load configuration: {e:#}");
        if e.chain().any(|cause| cause.is::<std::io::Error>()) {
            CliError::io(message)
        } else {
            CliError::validation(message)
        }
    })
}

fn parse_log_level(level: &str) -> CliResult<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" => Ok(LogLevel::Error),
        "warn" => Ok(LogLevel::Warn),
        "info" => Ok(LogLevel::Info),
        "debug" => Ok(LogLevel::Debug),
        "trace" => Ok(LogLevel::Trace),
        _ => Err(CliError::validation(
            "Invalid log level. Must be 'error', 'warn', 'info', 'debug', or 'trace'",
        )),
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("Resistor Bands Configuration");
    println!("============================");
    println!();

    if let Ok(path) = Config::config_file_path() {
        println!("File: {}", path.display());
        println!();
    }

    println!("Server:");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);
    println!();

    println!("Logging:");
    println!("  Level: {}", config.logging.level.as_filter());
}
