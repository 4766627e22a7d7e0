//! Furman brand color palettes for charts.
//!
//! - [`Color`] and the color registry ([`registry`], [`lookup_colors`])
//! - [`Palette`]s ([`palette`], [`list_palettes`], [`PaletteFind`])
//! - Interpolation and color scales ([`interpolate`],
//!   [`ContinuousScale`], [`PaletteGenerator`])
//! - WCAG contrast checks ([`contrast`])
//! - Export to hex, rgb, hsl, CSS and JSON ([`export`])
//! - The chart [`Theme`], [`fonts`] and an HTML [`preview`] of palettes.
//!
//! Palettes are static data.  Rendering is left to the charting
//! library: it receives colors, or a [`PaletteGenerator`] producing
//! `n` colors on demand.
//!
//! ```
//! use furman_palettes::{interpolate, contrast, Color};
//! let ramp = interpolate("cool", 5, false).unwrap();
//! assert_eq!(ramp.len(), 5);
//! let white = Color::from_hex("#ffffff").unwrap();
//! assert!(contrast::contrast_ratio(&ramp[4], &white) > 4.5);
//! ```

use std::marker::PhantomData;
use rgb::{RGBA, RGB8, RGB16, RGBA8, RGBA16};

mod color;
mod error;
mod palette;
mod palettes;
mod interpolate;
pub mod contrast;
pub mod export;
pub mod fonts;
pub mod preview;
pub mod theme;

pub use color::Color;
pub use error::{Error, Result};
pub use palette::{color, list_palettes, lookup_colors, palette, palettes,
                  registry, Palette, PaletteFind, PaletteGradient,
                  PaletteSummary};
pub use palettes::ty::{PaletteType, Trivalent};
pub use interpolate::{interpolate, scale_palette, ColorMap, ContinuousScale,
                      PaletteFn, PaletteGenerator, Rescale, ScaleCache};
pub use theme::Theme;

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;

    /// Return an iterator yielding uniform sampling of `n` points
    /// between `a` and `b` (with the bounds `a` and `b` included in
    /// the list of points) together with colors.  It is not required
    /// that `a <= b`.
    fn range(self, mut a: f64, mut b: f64, n: usize) -> Range<Self, Color>
    where Self: Sized {
        if a == f64::INFINITY { a = f64::MAX; }
        else if a == f64::NEG_INFINITY { a = f64::MIN };
        if b == f64::NEG_INFINITY { b = f64::MIN; }
        else if b == f64::INFINITY { b = f64::MAX };
        // `a` or `b` NaN will give an iterator yielding NaN.
        if n == 0 {
            Range { range: self,  color: PhantomData,
                    a, b, flast: 0., last: 0,
                    i: 1, j: 0 } // Empty iterator
        } else {
            Range { range: self,  color: PhantomData,
                    a, b, flast: (n - 1) as f64,
                    last: n - 1, i: 0, j: n - 1 }
        }
    }
}

/// An iterator yielding `f64` in a given range together with colors.
pub struct Range<R, Color> {
    range: R,
    color: PhantomData<Color>,
    a: f64, // finite or NaN
    b: f64, // finite or NaN
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<R, Color> Range<R, Color> where R: ColorRange<Color> {
    /// Return the float and RGB color of the position `k` (assuming
    /// it is in the range `0 ..= self.last`).
    fn rgb(&self, k: usize) -> (f64, Color) {
        if k == 0 {
            (self.a, R::rgb(&self.range, 0.))
        } else if k == self.last {
            (self.b, R::rgb(&self.range, 1.))
        } else {
            let alpha = (self.last - k) as f64;
            let beta = k as f64;
            let t = beta / self.flast;
            let mut x = (alpha * self.a + beta * self.b) / self.flast;
            if x.is_infinite() {
                x = (1. - t) * self.a + t * self.b;
            }
            (x, R::rgb(&self.range, t))
        }
    }
}

impl<R, Color> Iterator for Range<R, Color>
where R: ColorRange<Color> {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn len(&self) -> usize {
        if self.i > self.j { 0 } else { self.j - self.i + 1 }
    }
}

impl<R, Color> DoubleEndedIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.j);
            if self.j == 0 {
                self.i = 1
            } else {
                self.j -= 1;
            }
            Some(item)
        } else {
            None
        }
    }
}

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// Return a linear RGB gradient from color `c0` to color `c1`.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use furman_palettes::{RGBColor, ColorRange};
    /// let red = RGB8::new(255, 0, 0);
    /// let blue = RGB8::new(0, 0, 255);
    /// let grad = red.gradient(&blue);
    /// assert_eq!(grad.rgb(0.5), RGB8::new(128, 0, 128));
    /// ```
    fn gradient(&self, c1: &Self) -> Gradient<Self> {
        let c0 = Self::to_rgba(self);
        let c1 = Self::to_rgba(c1);
        Gradient { c0,
                   dc: RGBA { r: c1.r - c0.r, g: c1.g - c0.g,
                              b: c1.b - c0.b, a: c1.a - c0.a },
                   color: PhantomData }
    }

    /// Convert the color to grayscale.
    fn to_gray(&self) -> Self {
        let RGBA{ r, g, b, a } = Self::to_rgba(self);
        let x = 0.299 * r + 0.587 * g + 0.114 * b;
        Self::from_rgba(RGBA{ r: x, g: x, b: x, a })
    }
}

/// Round and saturate a channel in \[0, 255\].  `as` sends NaN to 0.
#[inline]
fn channel(x: f64) -> u8 { x.round() as u8 }

/// Same as [`channel`] in \[0, 65535\].
#[inline]
fn channel16(x: f64) -> u16 { x.round() as u16 }

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: channel(c.r),  g: channel(c.g),  b: channel(c.b) }
    }
}

impl RGBColor for RGB16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB16 { r: channel16(c.r),  g: channel16(c.g),  b: channel16(c.b) }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: channel(c.r),  g: channel(c.g),  b: channel(c.b),
                a: channel(c.a) }
    }
}

impl RGBColor for RGBA16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA16 { r: channel16(c.r),  g: channel16(c.g),  b: channel16(c.b),
                 a: channel16(c.a) }
    }
}


/// Linear RGB gradient between two colors.
///
/// Created by [`RGBColor::gradient`].  See the [`ColorRange`] trait
/// for methods.
pub struct Gradient<Color> {
    c0: RGBA<f64>, // first color
    dc: RGBA<f64>, // last - first color
    color: PhantomData<Color>,
}

impl<Color> Gradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\] but does
    /// not check the later condition.
    #[inline]
    fn rgb_unsafe(&self, t: f64) -> Color {
        let c = RGBA { r: self.c0.r + t * self.dc.r,
                       g: self.c0.g + t * self.dc.g,
                       b: self.c0.b + t * self.dc.b,
                       a: self.c0.a + t * self.dc.a };
        Color::from_rgba(c)
    }
}

impl<Color> ColorRange<Color> for Gradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\], where
    /// `t == 0.` returns the first color provided in the gradient and
    /// `t == 1.` the second.
    fn rgb(&self, t: f64) -> Color { self.rgb_unsafe(t.clamp(0., 1.)) }
}
