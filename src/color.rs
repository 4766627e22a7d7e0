//! 24-bit RGB colors with an optional human readable name.

use std::{fmt, str::FromStr};
use rgb::{RGB8, RGBA};
use serde::{Serialize, Serializer};
use crate::{Error, Result, RGBColor};

/// An immutable 24-bit RGB color.
///
/// Colors taken from the registry carry their name; colors parsed from
/// hex strings or produced by interpolation do not (except when an
/// interpolated position falls exactly on a palette anchor).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    rgb: RGB8,
    name: Option<&'static str>,
}

impl Color {
    /// An unnamed color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { rgb: RGB8 { r, g, b }, name: None }
    }

    /// A color carrying `name`.
    pub const fn named(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Color { rgb: RGB8 { r, g, b }, name: Some(name) }
    }

    /// Parse `#rrggbb`, `rrggbb` or the shorthand `#rgb`.
    ///
    /// # Example
    ///
    /// ```
    /// use furman_palettes::Color;
    /// let purple = Color::from_hex("#582C83").unwrap();
    /// assert_eq!(purple.hex(), "#582c83");
    /// ```
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let bad = || Error::invalid(format!(
            "“{s}” is not a hex color (expected #rrggbb)"));
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) { return Err(bad()) }
        let byte = |i: usize, len: usize| {
            u8::from_str_radix(&hex[i .. i + len], 16).map_err(|_| bad())
        };
        match hex.len() {
            6 => Ok(Color::new(byte(0, 2)?, byte(2, 2)?, byte(4, 2)?)),
            3 => {
                let (r, g, b) = (byte(0, 1)?, byte(1, 1)?, byte(2, 1)?);
                Ok(Color::new(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            _ => Err(bad()),
        }
    }

    /// The canonical `#rrggbb` (lowercase) representation.
    pub fn hex(&self) -> String {
        let RGB8 { r, g, b } = self.rgb;
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    #[inline]
    pub fn rgb(&self) -> RGB8 { self.rgb }

    #[inline]
    pub fn name(&self) -> Option<&'static str> { self.name }

    /// The same color without its name.
    #[inline]
    pub fn unnamed(self) -> Self { Color { name: None, ..self } }

    /// Convert to HSL: hue in degrees \[0, 360), saturation and
    /// lightness in \[0, 1\].  Achromatic colors have hue and
    /// saturation 0.
    pub fn to_hsl(&self) -> [f64; 3] {
        let r = f64::from(self.rgb.r) / 255.;
        let g = f64::from(self.rgb.g) / 255.;
        let b = f64::from(self.rgb.b) / 255.;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.;
        if self.rgb.r == self.rgb.g && self.rgb.g == self.rgb.b {
            return [0., 0., l]
        }
        let d = max - min;
        let s = d / (1. - (2. * l - 1.).abs());
        let h = if max == r { 60. * ((g - b) / d).rem_euclid(6.) }
                else if max == g { 60. * ((b - r) / d + 2.) }
                else { 60. * ((r - g) / d + 4.) };
        [h, s, l]
    }

    /// HSL with the hue rounded to whole degrees in \[0, 360) and
    /// saturation and lightness rounded to whole percentages.
    pub fn to_hsl_rounded(&self) -> (u16, u8, u8) {
        let [h, s, l] = self.to_hsl();
        (h.round() as u16 % 360, (100. * s).round() as u8,
         (100. * l).round() as u8)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> { Color::from_hex(s) }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.serialize_str(&self.hex())
    }
}

impl From<RGB8> for Color {
    fn from(rgb: RGB8) -> Self { Color { rgb, name: None } }
}

impl From<Color> for RGB8 {
    fn from(c: Color) -> Self { c.rgb }
}

impl RGBColor for Color {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { RGBColor::to_rgba(&self.rgb) }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { Color::from(RGB8::from_rgba(c)) }
}
