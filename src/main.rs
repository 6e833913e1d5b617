//! Resistor Bands - decode resistor color bands from the terminal
//!
//! This binary gives headless access to the color catalog and the
//! resistor decoder. The REST API is served by `resistor-bands-web`.

use clap::{Parser, Subcommand};
use resistor_bands::cli::{CliResult, ColorArgs, ColorsArgs, ConfigArgs, DecodeArgs};
use resistor_bands::constants::APP_BINARY_NAME;

/// Resistor Bands - decode resistor color-band encodings
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all band colors
    Colors(ColorsArgs),
    /// Show the meaning of a single color
    Color(ColorArgs),
    /// Decode resistance and tolerance from 4 or 5 band colors
    Decode(DecodeArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn run(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Command::Colors(args) => args.execute(),
        Command::Color(args) => args.execute(),
        Command::Decode(args) => args.execute(),
        Command::Config(args) => args.execute(),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        if matches!(cli.command, Command::Decode(_)) {
            eprintln!();
            eprintln!("Example:");
            eprintln!("  {} decode red red brown gold", APP_BINARY_NAME);
        }
        std::process::exit(e.exit_code.code());
    }
}
