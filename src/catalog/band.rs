//! Value types for resistor color bands and decoded resistors.

use serde::{Deserialize, Serialize};

/// Meaning of a single color stripe on a resistor.
///
/// Serialized with the wire names `value`, `multiplier` and `tolerance`.
///
/// A tolerance of `0.0` is used both for "zero tolerance" and for colors
/// that have no defined tolerance (black, orange, yellow, white). The table
/// does not distinguish the two.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorBand {
    /// Digit value 0-9. Gold and silver carry 0.
    pub value: u8,
    /// Power of ten applied when the color is used as multiplier band.
    #[serde(rename = "multiplier")]
    pub multiplier_exponent: i32,
    /// Tolerance when the color is used as tolerance band.
    #[serde(rename = "tolerance")]
    pub tolerance_percent: f64,
}

impl ColorBand {
    /// Creates a new color band.
    #[must_use]
    pub const fn new(value: u8, multiplier_exponent: i32, tolerance_percent: f64) -> Self {
        Self {
            value,
            multiplier_exponent,
            tolerance_percent,
        }
    }

    /// Returns the multiplier factor `10^multiplier_exponent`.
    ///
    /// Computed in floating point so gold (0.1) and silver (0.01) keep
    /// their fractional value.
    #[must_use]
    pub fn multiplier_factor(&self) -> f64 {
        10f64.powi(self.multiplier_exponent)
    }
}

/// Result of decoding a set of color bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatedResistor {
    /// Resistance in ohms.
    #[serde(rename = "value")]
    pub resistance_ohms: f64,
    /// Tolerance taken from the tolerance band.
    #[serde(rename = "tolerance")]
    pub tolerance_percent: f64,
}

/// Ordered color names of a four- or five-band resistor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BandColors {
    /// Two digit bands, multiplier, tolerance.
    Four([String; 4]),
    /// Three digit bands, multiplier, tolerance.
    Five([String; 5]),
}

impl BandColors {
    /// Builds the band list from individually named bands.
    ///
    /// A present `third` band selects the five-band encoding.
    pub fn from_parts(
        first: impl Into<String>,
        second: impl Into<String>,
        third: Option<String>,
        multiplier: impl Into<String>,
        tolerance: impl Into<String>,
    ) -> Self {
        match third {
            Some(third) => Self::Five([
                first.into(),
                second.into(),
                third,
                multiplier.into(),
                tolerance.into(),
            ]),
            None => Self::Four([
                first.into(),
                second.into(),
                multiplier.into(),
                tolerance.into(),
            ]),
        }
    }

    /// Builds the band list from a slice of colors.
    ///
    /// Returns `None` unless exactly four or five colors are given.
    pub fn from_slice<S: AsRef<str>>(colors: &[S]) -> Option<Self> {
        let owned: Vec<String> = colors.iter().map(|c| c.as_ref().to_string()).collect();
        match owned.len() {
            4 => owned.try_into().ok().map(Self::Four),
            5 => owned.try_into().ok().map(Self::Five),
            _ => None,
        }
    }

    /// Number of bands in this encoding.
    #[must_use]
    pub const fn band_count(&self) -> usize {
        match self {
            Self::Four(_) => 4,
            Self::Five(_) => 5,
        }
    }

    /// The color names in band order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::Four(colors) => colors,
            Self::Five(colors) => colors,
        }
    }
}

/// A color name that is not part of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColor {
    name: String,
}

impl UnknownColor {
    /// Creates the error for the given (caller-supplied) color name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The color name as the caller spelled it.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for UnknownColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown color: '{}'", self.name)
    }
}

impl std::error::Error for UnknownColor {}
