//! Expansion of palettes to `n` colors, continuous color maps and the
//! palette generators handed to chart color scales.

use std::collections::HashMap;
use log::{debug, warn};
use crate::{palette, ColorRange, Color, Error, Palette, PaletteGradient,
            PaletteType, Result};

/// Expand the palette `name` to `n` colors by piecewise linear RGB
/// interpolation between its anchors.
///
/// Anchors are evenly spaced on \[0, 1\] and so are the `n` returned
/// colors.  With `reverse`, the anchors are flipped first.  Positions
/// falling on an anchor return that anchor exactly, so `n` equal to
/// the palette length gives back the palette.
///
/// # Example
///
/// ```
/// use furman_palettes::{interpolate, palette};
/// let cool = palette("cool").unwrap();
/// assert_eq!(interpolate("cool", 3, false).unwrap(), cool.colors());
/// let c = interpolate("cool", 5, false).unwrap();
/// assert_eq!(c[2], cool.colors()[1]);
/// ```
pub fn interpolate(name: &str, n: usize, reverse: bool) -> Result<Vec<Color>> {
    palette(name)?.interpolate(n, reverse)
}

impl Palette {
    /// See [`interpolate`].
    pub fn interpolate(&self, n: usize, reverse: bool) -> Result<Vec<Color>> {
        ramp(self.colors(), n, reverse)
    }
}

/// Sample `n` colors on the piecewise linear ramp through `anchors`.
///
/// Output `i` sits at `i·(k-1)/(n-1)` in anchor coordinates (`k`
/// anchors); that position is kept as an exact fraction so anchors are
/// hit exactly and reversing is exactly symmetric.
pub(crate) fn ramp(anchors: &[Color], n: usize, reverse: bool)
                   -> Result<Vec<Color>> {
    if n == 0 {
        return Err(Error::invalid("the number of colors must be at least 1"))
    }
    let mut anchors = anchors.to_vec();
    if anchors.is_empty() {
        return Err(Error::invalid("cannot interpolate an empty palette"))
    }
    if reverse { anchors.reverse() }
    if n == 1 || anchors.len() == 1 {
        return Ok(vec![anchors[0]; n])
    }
    let den = n - 1;
    let segments = anchors.len() - 1;
    let colors = (0 .. n).map(|i| {
        let x = i * segments;
        let (j, num) = (x / den, x % den);
        if num == 0 { anchors[j] }
        else { lerp(&anchors[j], &anchors[j + 1], num, den) }
    }).collect();
    Ok(colors)
}

/// The color at `num/den` of the way from `a` to `b`.
fn lerp(a: &Color, b: &Color, num: usize, den: usize) -> Color {
    let ch = |x: u8, y: u8| {
        // Exact integer numerator: symmetric in (x, num) ↔ (y, den - num).
        let v = usize::from(x) * (den - num) + usize::from(y) * num;
        (v as f64 / den as f64).round() as u8
    };
    let (a, b) = (a.rgb(), b.rgb());
    Color::new(ch(a.r, b.r), ch(a.g, b.g), ch(a.b, b.b))
}


/// Maps data values to positions in \[0, 1\] through three breakpoints
/// `low ≤ mid ≤ high`, piecewise linearly: `low → 0`, `mid → 0.5`,
/// `high → 1`.  Values outside `[low, high]` are clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rescale {
    breaks: [f64; 3],
}

impl Rescale {
    /// Rescale for a divergent palette: `limits.0` goes to the first
    /// anchor, `midpoint` to the middle one, `limits.1` to the last.
    ///
    /// Non-distinct breakpoints only log a warning; values equal to
    /// a collapsed breakpoint map to the middle anchor.
    pub fn divergent(limits: (f64, f64), midpoint: f64) -> Result<Self> {
        let breaks = [limits.0, midpoint, limits.1];
        if breaks.iter().any(|b| !b.is_finite()) {
            return Err(Error::invalid(format!(
                "rescale breakpoints must be finite, got {breaks:?}")))
        }
        if !(limits.0 <= midpoint && midpoint <= limits.1) {
            return Err(Error::invalid(format!(
                "rescale breakpoints must be ordered as limits.0 ≤ midpoint \
                 ≤ limits.1, got {breaks:?}")))
        }
        if limits.0 == midpoint || midpoint == limits.1 {
            warn!("rescale breakpoints {breaks:?} are not distinct; \
                   some colors of the palette will not be used");
        }
        Ok(Rescale { breaks })
    }

    /// Linear rescale of `limits` onto \[0, 1\].
    pub fn linear(limits: (f64, f64)) -> Result<Self> {
        Self::divergent(limits, 0.5 * limits.0 + 0.5 * limits.1)
    }

    pub fn breaks(&self) -> [f64; 3] { self.breaks }

    /// The position in \[0, 1\] of `v`.  NaN maps to the middle.
    pub fn position(&self, v: f64) -> f64 {
        let [lo, mid, hi] = self.breaks;
        if v.is_nan() { return 0.5 }
        let v = v.clamp(lo, hi);
        if v < mid { 0.5 * (v - lo) / (mid - lo) }
        else if v > mid { 0.5 + 0.5 * (v - mid) / (hi - mid) }
        else { 0.5 }
    }
}

/// Configuration of a continuous color scale.
///
/// # Example
///
/// ```
/// use furman_palettes::{palette, ContinuousScale};
/// let map = ContinuousScale::new(palette("purple_gold").unwrap())
///     .limits(-10., 30.).midpoint(0.).build().unwrap();
/// assert_eq!(map.color_at(0.).name(), None);
/// assert_eq!(map.color_at(0.).hex(), "#d9d9d6");
/// assert_eq!(map.color_at(-10.).hex(), "#582c83");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ContinuousScale {
    palette: Palette,
    reverse: bool,
    limits: (f64, f64),
    midpoint: Option<f64>,
}

impl ContinuousScale {
    /// A scale mapping \[0, 1\] onto the whole palette.
    pub fn new(palette: Palette) -> Self {
        ContinuousScale { palette, reverse: false, limits: (0., 1.),
                          midpoint: None }
    }

    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Data values mapped to the first and last colors.
    pub fn limits(mut self, low: f64, high: f64) -> Self {
        self.limits = (low, high);
        self
    }

    /// Data value mapped to the middle color of a divergent palette.
    pub fn midpoint(mut self, midpoint: f64) -> Self {
        self.midpoint = Some(midpoint);
        self
    }

    pub fn build(self) -> Result<ColorMap> {
        let rescale = match self.midpoint {
            Some(mid) => {
                if self.palette.typ() != PaletteType::Divergent
                    || self.palette.len() != 3 {
                    return Err(Error::invalid(format!(
                        "a midpoint requires a divergent palette with 3 \
                         colors; “{}” is {} with {} colors",
                        self.palette.name(), self.palette.typ(),
                        self.palette.len())))
                }
                Rescale::divergent(self.limits, mid)?
            }
            None => Rescale::linear(self.limits)?,
        };
        let mut anchors = self.palette.colors().to_vec();
        if self.reverse { anchors.reverse() }
        Ok(ColorMap { gradient: PaletteGradient::new(&anchors), rescale })
    }
}

/// Maps data values to colors.  Built by [`ContinuousScale::build`].
pub struct ColorMap {
    gradient: PaletteGradient<Color>,
    rescale: Rescale,
}

impl ColorMap {
    pub fn color_at(&self, v: f64) -> Color {
        self.gradient.rgb(self.rescale.position(v))
    }

    pub fn colors_for(&self, values: &[f64]) -> Vec<Color> {
        values.iter().map(|&v| self.color_at(v)).collect()
    }

    pub fn rescale(&self) -> &Rescale { &self.rescale }

    /// `n` evenly spaced data values from the low to the high limit,
    /// with their colors, e.g. for the ticks of a color bar.
    pub fn legend(&self, n: usize) -> Vec<(f64, Color)> {
        let [lo, _, hi] = self.rescale.breaks;
        self.range(lo, hi, n).collect()
    }
}

/// `t` ∈ \[0, 1\] runs from the low to the high limit in data space,
/// so the colors follow the rescale.
impl ColorRange<Color> for &ColorMap {
    fn rgb(&self, t: f64) -> Color {
        let [lo, _, hi] = self.rescale.breaks;
        let t = t.clamp(0., 1.);
        self.color_at((1. - t) * lo + t * hi)
    }
}


/// Something producing `n` colors, as a discrete chart color scale
/// expects.
pub trait PaletteGenerator {
    fn generate(&self, n: usize) -> Result<Vec<Color>>;
}

impl<F> PaletteGenerator for F
where F: Fn(usize) -> Result<Vec<Color>> {
    fn generate(&self, n: usize) -> Result<Vec<Color>> { self(n) }
}

/// A palette resolved once and interpolated on demand.
#[derive(Clone, Copy, Debug)]
pub struct PaletteFn {
    palette: Palette,
    reverse: bool,
}

impl PaletteFn {
    pub fn palette(&self) -> Palette { self.palette }
}

impl PaletteGenerator for PaletteFn {
    fn generate(&self, n: usize) -> Result<Vec<Color>> {
        self.palette.interpolate(n, self.reverse)
    }
}

/// The generator to give a discrete color scale for palette `name`.
///
/// # Example
///
/// ```
/// use furman_palettes::{scale_palette, PaletteGenerator};
/// let generator = scale_palette("main", false).unwrap();
/// assert_eq!(generator.generate(4).unwrap().len(), 4);
/// ```
pub fn scale_palette(name: &str, reverse: bool) -> Result<PaletteFn> {
    Ok(PaletteFn { palette: palette(name)?, reverse })
}

/// Memoizes generated colors keyed by palette, direction and count.
///
/// Clearing it is always allowed and never changes results.
#[derive(Debug, Default)]
pub struct ScaleCache {
    entries: HashMap<(&'static str, bool, usize), Vec<Color>>,
}

impl ScaleCache {
    pub fn new() -> Self { Self::default() }

    /// Same as `scale_palette(name, reverse)?.generate(n)`.
    pub fn generate(&mut self, name: &str, reverse: bool, n: usize)
                    -> Result<Vec<Color>> {
        let palette = palette(name)?;
        let key = (palette.name(), reverse, n);
        if let Some(colors) = self.entries.get(&key) {
            debug!("scale cache hit for {key:?}");
            return Ok(colors.clone())
        }
        debug!("scale cache miss for {key:?}");
        let colors = palette.interpolate(n, reverse)?;
        self.entries.insert(key, colors.clone());
        Ok(colors)
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn clear(&mut self) { self.entries.clear() }
}
