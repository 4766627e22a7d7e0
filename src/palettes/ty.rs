use std::{fmt, str::FromStr};
use serde::{Deserialize, Serialize};
use crate::{Color, Error};

/// A named palette with certain characteristics.
pub(crate) struct PaletteData {
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
    pub(crate) colors: Vec<Color>, // Invariant: length ≥ 2
    pub(crate) typ: PaletteType,
    pub(crate) blind: Trivalent,
}

/// Type of Palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    /// Categorical color scheme.  Colors do not imply magnitude
    /// differences; hues create the primary visual differences
    /// between groups.  Best suited to nominal data.
    Categorical,
    /// Sequential color scheme, suited to ordered data that progress
    /// from low to high.  Lightness steps dominate the look of these
    /// schemes.
    Sequential,
    /// Divergent color scheme.  Puts equal emphasis on a critical
    /// mid-range value and on the extremes at both ends of the data
    /// range.  Always three anchors: low, midpoint, high.
    Divergent,
    /// Shades of a single neutral hue.
    Monochrome,
    /// Palettes for a specific purpose, such as highlighting one
    /// group against a neutral context.
    Special,
}

impl PaletteType {
    pub const ALL: [PaletteType; 5] = [
        PaletteType::Categorical, PaletteType::Sequential,
        PaletteType::Divergent, PaletteType::Monochrome, PaletteType::Special];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteType::Categorical => "categorical",
            PaletteType::Sequential => "sequential",
            PaletteType::Divergent => "divergent",
            PaletteType::Monochrome => "monochrome",
            PaletteType::Special => "special",
        }
    }
}

impl fmt::Display for PaletteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        PaletteType::ALL.into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let valid: Vec<_> = PaletteType::ALL.iter()
                    .map(|t| t.as_str()).collect();
                Error::invalid(format!("unknown palette type “{s}”; \
                                        valid types: {}", valid.join(", ")))
            })
    }
}

/// Trivalent logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trivalent {
    Yes,
    Maybe,
    No,
}
