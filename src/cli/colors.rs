//! Color listing and lookup commands.

use crate::catalog::{ColorBand, ColorBandCatalog};
use crate::cli::common::{print_json, CliError, CliResult};
use clap::Args;

/// List all resistor band colors
#[derive(Debug, Clone, Args)]
pub struct ColorsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Show the meaning of a single color band
#[derive(Debug, Clone, Args)]
pub struct ColorArgs {
    /// Color name (case-insensitive)
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Loads the embedded catalog, mapping failures to an I/O exit code.
pub(crate) fn load_catalog() -> CliResult<ColorBandCatalog> {
    ColorBandCatalog::load()
        .map_err(|e| CliError::io(format!("Failed to load color catalog: {e:#}")))
}

impl ColorsArgs {
    /// Execute the colors command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = load_catalog()?;

        if self.json {
            return print_json(&catalog.list_colors());
        }

        println!("{:<8} {:>5} {:>10} {:>10}", "Color", "Value", "Multiplier", "Tolerance");
        for (name, band) in catalog.iter() {
            println!(
                "{:<8} {:>5} {:>10} {:>10}",
                name,
                band.value,
                format!("10^{}", band.multiplier_exponent),
                band.tolerance_percent
            );
        }

        Ok(())
    }
}

impl ColorArgs {
    /// Execute the color command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = load_catalog()?;
        let band = catalog
            .lookup(&self.name)
            .map_err(|e| CliError::validation(e.to_string()))?;

        if self.json {
            print_json(&band)
        } else {
            print_band(&self.name.to_lowercase(), &band);
            Ok(())
        }
    }
}

fn print_band(name: &str, band: &ColorBand) {
    println!("Color:      {}", name);
    println!("Value:      {}", band.value);
    println!(
        "Multiplier: x{} (10^{})",
        band.multiplier_factor(),
        band.multiplier_exponent
    );
    println!("Tolerance:  {}", band.tolerance_percent);
}
