//! WCAG 2.1 relative luminance and contrast ratios.
//!
//! - [`luminance`] and [`contrast_ratio`] follow the WCAG definitions.
//! - [`check_contrast`] scores a palette against given backgrounds.
//! - [`accessible_combinations`] lists every registry color that is
//!   readable on the reference light and dark backgrounds.

use std::{fmt, str::FromStr};
use serde::Serialize;
use crate::{palette, palettes, registry, Color, Error, Result};

/// WCAG conformance level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Standard {
    AA,
    AAA,
}

/// What the foreground color is used for; larger text and graphical
/// objects need less contrast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UseCase {
    Text,
    LargeText,
    Graphics,
}

impl Standard {
    /// Minimum contrast ratio for the use case.
    pub fn threshold(&self, use_case: UseCase) -> f64 {
        use self::{Standard::*, UseCase::*};
        match (self, use_case) {
            (AA, Text) => 4.5,
            (AAA, Text) => 7.0,
            (AA, LargeText) => 3.0,
            (AAA, LargeText) => 4.5,
            (AA, Graphics) | (AAA, Graphics) => 3.0,
        }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { Standard::AA => "AA", Standard::AAA => "AAA" })
    }
}

impl FromStr for Standard {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "AA" => Ok(Standard::AA),
            "AAA" => Ok(Standard::AAA),
            _ => Err(Error::invalid(format!(
                "unknown WCAG standard “{s}”; valid standards: AA, AAA"))),
        }
    }
}

impl FromStr for UseCase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(UseCase::Text),
            "large_text" => Ok(UseCase::LargeText),
            "graphics" => Ok(UseCase::Graphics),
            _ => Err(Error::invalid(format!(
                "unknown use case “{s}”; valid use cases: text, large_text, \
                 graphics"))),
        }
    }
}

/// The contrast of a foreground color on a background.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContrastResult {
    pub foreground: Color,
    pub background: Color,
    pub ratio: f64,
    pub passes: bool,
    pub standard: Standard,
    pub threshold: f64,
}

impl ContrastResult {
    pub(crate) fn new(foreground: Color, background: Color, standard: Standard,
           threshold: f64) -> Self {
        let ratio = contrast_ratio(&foreground, &background);
        ContrastResult { foreground, background, ratio,
                         passes: ratio >= threshold, standard, threshold }
    }
}

/// Linearize an sRGB channel in \[0, 1\].
#[inline]
fn linear(c: f64) -> f64 {
    if c <= 0.03928 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
}

/// Relative luminance in \[0, 1\]: 0 for black and 1 for white.
pub fn luminance(color: &Color) -> f64 {
    let rgb = color.rgb();
    let r = linear(f64::from(rgb.r) / 255.);
    let g = linear(f64::from(rgb.g) / 255.);
    let b = linear(f64::from(rgb.b) / 255.);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Contrast ratio in \[1, 21\], independent of the argument order.
///
/// # Example
///
/// ```
/// use furman_palettes::{contrast::contrast_ratio, Color};
/// let black = Color::new(0, 0, 0);
/// let white = Color::new(255, 255, 255);
/// assert!((contrast_ratio(&black, &white) - 21.).abs() < 1e-9);
/// ```
pub fn contrast_ratio(c1: &Color, c2: &Color) -> f64 {
    let l1 = luminance(c1);
    let l2 = luminance(c2);
    (l1.max(l2) + 0.05) / (l1.min(l2) + 0.05)
}

/// Score every color of the palette `name` on every background for
/// normal text.  Results are grouped by palette color.
pub fn check_contrast(name: &str, backgrounds: &[Color], standard: Standard)
                      -> Result<Vec<ContrastResult>> {
    let palette = palette(name)?;
    let threshold = standard.threshold(UseCase::Text);
    Ok(palette.colors().iter()
       .flat_map(|&fg| backgrounds.iter().map(move |&bg| {
           ContrastResult::new(fg, bg, standard, threshold)
       }))
       .collect())
}

/// Light reference backgrounds.
pub static LIGHT_BACKGROUNDS: [Color; 2] = [palettes::WHITE, palettes::LIGHT_GRAY];
/// Dark reference backgrounds.
pub static DARK_BACKGROUNDS: [Color; 2] = [palettes::BLACK, palettes::DARK_GRAY];

/// All registry colors readable on a reference background for
/// `use_case`, best contrast first.
pub fn accessible_combinations(standard: Standard, use_case: UseCase)
                               -> Vec<ContrastResult> {
    let threshold = standard.threshold(use_case);
    let mut results: Vec<_> = registry().iter()
        .flat_map(|&fg| {
            LIGHT_BACKGROUNDS.iter().chain(&DARK_BACKGROUNDS)
                .filter(move |&&bg| bg.rgb() != fg.rgb())
                .map(move |&bg| ContrastResult::new(fg, bg, standard,
                                                    threshold))
        })
        .filter(|r| r.passes)
        .collect();
    results.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
    results
}


#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Color { s.parse().unwrap() }

    #[test]
    fn luminance_extremes() {
        assert_eq!(luminance(&hex("#000000")), 0.);
        assert!((luminance(&hex("#ffffff")) - 1.).abs() < 1e-12);
    }

    #[test]
    fn luminance_primaries() {
        assert!((luminance(&hex("#ff0000")) - 0.2126).abs() < 1e-12);
        assert!((luminance(&hex("#00ff00")) - 0.7152).abs() < 1e-12);
        assert!((luminance(&hex("#0000ff")) - 0.0722).abs() < 1e-12);
    }

    #[test]
    fn low_channels_use_linear_segment() {
        // 10/255 ≈ 0.0392 ≤ 0.03928
        let l = luminance(&Color::new(10, 10, 10));
        assert!((l - 10. / 255. / 12.92).abs() < 1e-12);
    }

    #[test]
    fn contrast_same_color_is_one() {
        for c in registry() {
            assert_eq!(contrast_ratio(c, c), 1.);
        }
    }

    #[test]
    fn contrast_black_white_is_21() {
        let r = contrast_ratio(&hex("#000000"), &hex("#ffffff"));
        assert!((r - 21.).abs() < 1e-9, "{r}");
    }

    #[test]
    fn contrast_is_symmetric() {
        let (a, b) = (hex("#582c83"), hex("#f2be1a"));
        assert_eq!(contrast_ratio(&a, &b), contrast_ratio(&b, &a));
    }

    #[test]
    fn standards_parse() {
        assert_eq!("aa".parse::<Standard>().unwrap(), Standard::AA);
        assert_eq!("AAA".parse::<Standard>().unwrap(), Standard::AAA);
        assert!(matches!("A".parse::<Standard>(),
                         Err(Error::InvalidArgument(_))));
        assert_eq!("large_text".parse::<UseCase>().unwrap(),
                   UseCase::LargeText);
        assert!("headline".parse::<UseCase>().is_err());
    }

    #[test]
    fn threshold_table() {
        use super::{Standard::*, UseCase::*};
        assert_eq!(AA.threshold(Text), 4.5);
        assert_eq!(AAA.threshold(Text), 7.0);
        assert_eq!(AA.threshold(LargeText), 3.0);
        assert_eq!(AAA.threshold(LargeText), 4.5);
        assert_eq!(AA.threshold(Graphics), 3.0);
        assert_eq!(AAA.threshold(Graphics), 3.0);
    }

    #[test]
    fn main_palette_on_white() {
        let res = check_contrast("main", &[hex("#ffffff")], Standard::AA)
            .unwrap();
        assert_eq!(res.len(), palette("main").unwrap().len());
        let yellow = res.iter().find(|r| r.foreground.hex() == "#f2be1a")
            .unwrap();
        assert!(!yellow.passes, "yellow on white: {}", yellow.ratio);
        let purple = res.iter().find(|r| r.foreground.hex() == "#582c83")
            .unwrap();
        assert!(purple.passes, "purple on white: {}", purple.ratio);
        assert_eq!(purple.threshold, 4.5);
    }

    #[test]
    fn check_contrast_is_a_cross_product() {
        let bgs = [hex("#ffffff"), hex("#000000")];
        let res = check_contrast("cool", &bgs, Standard::AAA).unwrap();
        assert_eq!(res.len(), 6);
        assert_eq!(res[0].background, bgs[0]);
        assert_eq!(res[1].background, bgs[1]);
        assert_eq!(res[1].foreground, res[0].foreground);
        assert!(res.iter().all(|r| r.standard == Standard::AAA));
    }

    #[test]
    fn check_contrast_unknown_palette() {
        assert!(matches!(check_contrast("nonexistent", &[], Standard::AA),
                         Err(Error::UnknownPalette { .. })));
    }

    #[test]
    fn accessible_combinations_sorted_and_passing() {
        let res = accessible_combinations(Standard::AA, UseCase::Text);
        assert!(!res.is_empty());
        assert!(res.iter().all(|r| r.passes && r.ratio >= 4.5));
        assert!(res.windows(2).all(|w| w[0].ratio >= w[1].ratio));
        assert!(res.iter().all(|r| r.foreground.rgb() != r.background.rgb()));
        // Black on white comes first.
        assert!((res[0].ratio - 21.).abs() < 1e-9);
    }

    #[test]
    fn looser_use_cases_allow_more_pairs() {
        let text = accessible_combinations(Standard::AAA, UseCase::Text);
        let large = accessible_combinations(Standard::AAA, UseCase::LargeText);
        let graphics = accessible_combinations(Standard::AAA,
                                               UseCase::Graphics);
        assert!(text.len() < large.len());
        assert!(large.len() <= graphics.len());
    }

    #[test]
    fn results_serialize() {
        let res = check_contrast("highlight", &[hex("#ffffff")], Standard::AA)
            .unwrap();
        let v = serde_json::to_value(&res[0]).unwrap();
        assert_eq!(v["foreground"], "#582c83");
        assert_eq!(v["standard"], "AA");
        assert_eq!(v["passes"], true);
    }
}
