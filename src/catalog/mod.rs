//! Resistor color-band catalog and decoding.
//!
//! This module provides the embedded table of resistor band colors,
//! case-insensitive lookup, and the four- and five-band decode operations.
//! The catalog is immutable after load and can be shared freely between
//! threads.

mod band;

pub use band::{BandColors, CalculatedResistor, ColorBand, UnknownColor};

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;

/// Single row of colors.json.
#[derive(Debug, Deserialize)]
struct ColorEntry {
    name: String,
    value: u8,
    multiplier: i32,
    tolerance: f64,
}

/// Schema of colors.json.
#[derive(Debug, Deserialize)]
struct ColorTable {
    colors: Vec<ColorEntry>,
}

/// Table of resistor band colors with O(1) case-insensitive lookup.
///
/// Colors keep the order of the embedded table (black..white, gold, silver).
#[derive(Debug, Clone)]
pub struct ColorBandCatalog {
    /// Lowercase color names in table order
    names: Vec<String>,
    /// Band meaning, parallel to `names`
    bands: Vec<ColorBand>,
    /// Lowercase name -> index
    lookup: HashMap<String, usize>,
}

impl ColorBandCatalog {
    /// Loads the catalog from the embedded colors.json table.
    pub fn load() -> Result<Self> {
        Self::from_json(include_str!("colors.json")).context("Failed to load embedded colors.json")
    }

    /// Builds a catalog from a JSON color table.
    ///
    /// Names are stored lowercase. Duplicate names (after lowercasing),
    /// empty names and digit values above 9 are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let table: ColorTable =
            serde_json::from_str(json).context("Failed to parse color table")?;

        let mut names = Vec::with_capacity(table.colors.len());
        let mut bands = Vec::with_capacity(table.colors.len());
        let mut lookup = HashMap::with_capacity(table.colors.len());

        for entry in table.colors {
            let name = entry.name.trim().to_lowercase();
            if name.is_empty() {
                anyhow::bail!("Color table contains an entry without a name");
            }
            if entry.value > 9 {
                anyhow::bail!(
                    "Color '{}' has digit value {} (expected 0-9)",
                    name,
                    entry.value
                );
            }
            if lookup.insert(name.clone(), names.len()).is_some() {
                anyhow::bail!("Duplicate color in table: '{}'", name);
            }

            names.push(name);
            bands.push(ColorBand::new(entry.value, entry.multiplier, entry.tolerance));
        }

        Ok(Self {
            names,
            bands,
            lookup,
        })
    }

    /// Returns all registered color names in table order.
    #[must_use]
    pub fn list_colors(&self) -> &[String] {
        &self.names
    }

    /// Iterates over `(name, band)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorBand)> {
        self.names.iter().map(String::as_str).zip(self.bands.iter())
    }

    /// Looks up a color by name, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use resistor_bands::catalog::ColorBandCatalog;
    ///
    /// let catalog = ColorBandCatalog::load().unwrap();
    /// assert_eq!(catalog.lookup("Gold").unwrap().multiplier_exponent, -1);
    /// assert!(catalog.lookup("purple").is_err());
    /// ```
    pub fn lookup(&self, name: &str) -> Result<ColorBand, UnknownColor> {
        self.lookup
            .get(&name.to_lowercase())
            .and_then(|&idx| self.bands.get(idx))
            .copied()
            .ok_or_else(|| UnknownColor::new(name))
    }

    /// Decodes a four-band resistor: two digits, multiplier, tolerance.
    ///
    /// Bands are resolved in order and the first unknown color is returned
    /// as the error; later bands are not looked at.
    ///
    /// # Examples
    ///
    /// ```
    /// use resistor_bands::catalog::ColorBandCatalog;
    ///
    /// let catalog = ColorBandCatalog::load().unwrap();
    /// let resistor = catalog.decode_four_band(&["red", "red", "brown", "gold"]).unwrap();
    /// assert_eq!(resistor.resistance_ohms, 220.0);
    /// ```
    pub fn decode_four_band<S: AsRef<str>>(
        &self,
        colors: &[S; 4],
    ) -> Result<CalculatedResistor, UnknownColor> {
        let [first, second, multiplier, tolerance] = colors;

        let first = self.lookup(first.as_ref())?;
        let second = self.lookup(second.as_ref())?;
        let multiplier = self.lookup(multiplier.as_ref())?;
        let tolerance = self.lookup(tolerance.as_ref())?;

        let digits = f64::from(first.value) * 10.0 + f64::from(second.value);

        Ok(CalculatedResistor {
            resistance_ohms: digits * multiplier.multiplier_factor(),
            tolerance_percent: tolerance.tolerance_percent,
        })
    }

    /// Decodes a five-band resistor: three digits, multiplier, tolerance.
    ///
    /// Same resolution order and error behavior as [`Self::decode_four_band`].
    pub fn decode_five_band<S: AsRef<str>>(
        &self,
        colors: &[S; 5],
    ) -> Result<CalculatedResistor, UnknownColor> {
        let [first, second, third, multiplier, tolerance] = colors;

        let first = self.lookup(first.as_ref())?;
        let second = self.lookup(second.as_ref())?;
        let third = self.lookup(third.as_ref())?;
        let multiplier = self.lookup(multiplier.as_ref())?;
        let tolerance = self.lookup(tolerance.as_ref())?;

        let digits = f64::from(first.value) * 100.0
            + f64::from(second.value) * 10.0
            + f64::from(third.value);

        Ok(CalculatedResistor {
            resistance_ohms: digits * multiplier.multiplier_factor(),
            tolerance_percent: tolerance.tolerance_percent,
        })
    }

    /// Decodes either encoding, dispatching on the number of bands.
    pub fn decode(&self, colors: &BandColors) -> Result<CalculatedResistor, UnknownColor> {
        match colors {
            BandColors::Four(colors) => self.decode_four_band(colors),
            BandColors::Five(colors) => self.decode_five_band(colors),
        }
    }
}
