//! Resistor decode command.

use crate::catalog::{BandColors, CalculatedResistor};
use crate::cli::colors::load_catalog;
use crate::cli::common::{print_json, CliError, CliResult};
use clap::Args;

/// Decode resistance and tolerance from 4 or 5 band colors
#[derive(Debug, Clone, Args)]
pub struct DecodeArgs {
    /// Band colors in order: digits, multiplier, tolerance (4 or 5 colors)
    #[arg(value_name = "COLOR", required = true, num_args = 1..)]
    pub colors: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl DecodeArgs {
    /// Execute the decode command
    pub fn execute(&self) -> CliResult<()> {
        let colors = BandColors::from_slice(self.colors.as_slice()).ok_or_else(|| {
            CliError::validation(format!(
                "Expected 4 or 5 band colors, got {}",
                self.colors.len()
            ))
        })?;

        let catalog = load_catalog()?;
        let resistor = catalog
            .decode(&colors)
            .map_err(|e| CliError::validation(e.to_string()))?;

        if self.json {
            print_json(&resistor)
        } else {
            print_resistor(&colors, &resistor);
            Ok(())
        }
    }
}

fn print_resistor(colors: &BandColors, resistor: &CalculatedResistor) {
    println!("Bands:      {}", colors.as_slice().join(" "));
    println!("Resistance: {}", format_ohms(resistor.resistance_ohms));
    println!("Tolerance:  {}", resistor.tolerance_percent);
}

/// Formats a resistance with an SI prefix, e.g. `4700.0` -> `"4.7 kΩ"`.
pub fn format_ohms(ohms: f64) -> String {
    const PREFIXES: [(f64, &str); 3] = [(1e9, "G"), (1e6, "M"), (1e3, "k")];

    for (scale, prefix) in PREFIXES {
        if ohms.abs() >= scale {
            return format!("{} {}Ω", trim_decimals(ohms / scale), prefix);
        }
    }

    format!("{} Ω", trim_decimals(ohms))
}

/// Three decimals, trailing zeros dropped.
fn trim_decimals(value: f64) -> String {
    let formatted = format!("{value:.3}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ohms_plain() {
        assert_eq!(format_ohms(220.0), "220 Ω");
        assert_eq!(format_ohms(10.0), "10 Ω");
        assert_eq!(format_ohms(0.0), "0 Ω");
    }

    #[test]
    fn test_format_ohms_fractional() {
        assert_eq!(format_ohms(2.2), "2.2 Ω");
        assert_eq!(format_ohms(22.0 * 0.1), "2.2 Ω");
        assert_eq!(format_ohms(0.47), "0.47 Ω");
    }

    #[test]
    fn test_format_ohms_prefixes() {
        assert_eq!(format_ohms(4700.0), "4.7 kΩ");
        assert_eq!(format_ohms(1000.0), "1 kΩ");
        assert_eq!(format_ohms(2_200_000.0), "2.2 MΩ");
        assert_eq!(format_ohms(99e9), "99 GΩ");
    }
}
