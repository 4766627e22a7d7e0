//! Lookup of registry colors and palettes.

use std::{fmt, marker::PhantomData};
use serde::Serialize;
use crate::{palettes::{self, ty::PaletteData}, ColorRange, Error, Gradient,
            PaletteType, RGBColor, Result, Trivalent, Color};

/// All colors of the registry, in display order.
pub fn registry() -> &'static [Color] { &palettes::REGISTRY }

fn registry_names() -> Vec<String> {
    palettes::REGISTRY.iter().filter_map(|c| c.name())
        .map(str::to_string).collect()
}

/// Return the registry color called `name`.
pub fn color(name: &str) -> Result<Color> {
    palettes::REGISTRY.iter().find(|c| c.name() == Some(name)).copied()
        .ok_or_else(|| Error::UnknownColor { name: name.to_string(),
                                             valid: registry_names() })
}

/// Return the registry colors called `names`, in the same order.
///
/// # Example
///
/// ```
/// use furman_palettes::lookup_colors;
/// let c = lookup_colors(&["purple", "yellow"]).unwrap();
/// assert_eq!(c[1].hex(), "#f2be1a");
/// assert!(lookup_colors(&["mauve"]).is_err());
/// ```
pub fn lookup_colors<S: AsRef<str>>(names: &[S]) -> Result<Vec<Color>> {
    names.iter().map(|n| color(n.as_ref())).collect()
}

/// Return the palette called `name`.
pub fn palette(name: &str) -> Result<Palette> {
    palettes::PALETTES.iter().find(|p| p.name == name).map(Palette::new)
        .ok_or_else(|| Error::UnknownPalette {
            name: name.to_string(),
            valid: palettes().map(|p| p.name().to_string()).collect() })
}

/// Return an iterator on all known palettes.
pub fn palettes() -> impl Iterator<Item = Palette> {
    palettes::PALETTES.iter().map(Palette::new)
}

/// Summaries of all palettes, or of those of type `filter`.
pub fn list_palettes(filter: Option<PaletteType>) -> Vec<PaletteSummary> {
    let find = PaletteFind::new();
    let find = match filter { Some(t) => find.typ(t), None => find };
    find.find().map(|p| p.summary()).collect()
}


/// A named, ordered list of colors.
#[derive(Clone, Copy)]
pub struct Palette {
    palette: &'static PaletteData,
}

impl Palette {
    fn new(palette: &'static PaletteData) -> Self { Self { palette } }

    /// The unique name of the palette.
    pub fn name(&self) -> &'static str { self.palette.name }

    pub fn description(&self) -> &'static str { self.palette.description }

    /// Returns the number of colors in the palette.
    ///
    /// Palettes contain at least 2 colors.
    pub fn len(&self) -> usize { self.palette.colors.len() }

    /// Always `false`; present for symmetry with [`Palette::len`].
    pub fn is_empty(&self) -> bool { self.palette.colors.is_empty() }

    /// Says whether the palette is categorical, sequential,…
    pub fn typ(&self) -> PaletteType { self.palette.typ }

    /// Says whether the palette is colorblind safe.
    pub fn blind(&self) -> Trivalent { self.palette.blind }

    /// The colors (anchors) of the palette.
    pub fn colors(&self) -> &'static [Color] { &self.palette.colors }

    /// The colors of the palette in another RGB encoding.
    pub fn colors_as<C: RGBColor>(&self) -> Vec<C> {
        self.palette.colors.iter().map(|c| C::from_rgba(c.to_rgba()))
            .collect()
    }

    /// Returns a piecewise linear gradient through the palette colors,
    /// evenly spaced on \[0, 1\].
    /// It only makes sense for sequential, monochrome and divergent
    /// palettes.
    pub fn gradient<C: RGBColor>(&self) -> PaletteGradient<C> {
        PaletteGradient::new(&self.palette.colors)
    }

    pub fn summary(&self) -> PaletteSummary {
        PaletteSummary { name: self.name(), typ: self.typ(),
                         count: self.len(),
                         description: self.description() }
    }
}

impl fmt::Debug for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Palette")
            .field("name", &self.name())
            .field("typ", &self.typ())
            .field("colors", &self.colors())
            .finish()
    }
}

impl PartialEq for Palette {
    fn eq(&self, other: &Self) -> bool { self.name() == other.name() }
}

/// A short description of a [`Palette`], as listed by
/// [`list_palettes`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PaletteSummary {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub typ: PaletteType,
    pub count: usize,
    pub description: &'static str,
}


/// A gradient based on a [`Palette`].
pub struct PaletteGradient<C> {
    gradients: Vec<Gradient<C>>, // Invariant: non-empty
}

impl<C: RGBColor> PaletteGradient<C> {
    /// Gradient through `anchors` (at least one color).
    pub(crate) fn new(anchors: &[Color]) -> Self {
        let gradients = match anchors {
            [c] => vec![c.gradient(c)],
            _ => anchors.windows(2).map(|c| c[0].gradient(&c[1])).collect(),
        };
        let gradients = gradients.into_iter()
            .map(|g| Gradient { c0: g.c0, dc: g.dc, color: PhantomData })
            .collect();
        PaletteGradient { gradients }
    }
}

impl<C> ColorRange<C> for PaletteGradient<C>
where C: RGBColor {
    fn rgb(&self, t: f64) -> C {
        let n = self.gradients.len();
        let tn = t.clamp(0., 1.) * n as f64;
        let i = tn.trunc() as usize;
        if i < n { self.gradients[i].rgb_unsafe(tn.fract()) }
        else { self.gradients[n-1].rgb_unsafe(1.) }
    }
}


/// Set criteria to find matching palettes.
///
/// # Example
///
/// ```
/// use furman_palettes::{PaletteFind, PaletteType, Trivalent};
/// let seq: Vec<_> = PaletteFind::new().typ(PaletteType::Sequential)
///     .blind(Trivalent::Yes).min_len(4).find().collect();
/// assert_eq!(seq[0].name(), "purples");
/// ```
#[derive(Clone, Debug, Default)]
pub struct PaletteFind {
    len: usize,
    typ: Vec<PaletteType>,
    blind: Option<Trivalent>,
}

fn satisfy(prop: Trivalent, specified: Option<Trivalent>) -> bool {
    use Trivalent::*;
    match specified {
        Some(Yes) => matches!(prop, Yes),
        Some(Maybe) => matches!(prop, Yes | Maybe),
        Some(No) | None => true, // "no" means "not necessarily want"
    }
}

impl PaletteFind {
    /// No criteria: all palettes match.
    pub fn new() -> Self { Self::default() }

    /// Find palettes with at least `len` colors.
    pub fn min_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    /// Find [`Palette`]s with this type.  Use several times to
    /// specify more than one [`PaletteType`].
    pub fn typ(mut self, t: PaletteType) -> Self {
        self.typ.push(t);
        self
    }

    /// Search palettes possibly ([`Trivalent::Maybe`]) or definitely
    /// ([`Trivalent::Yes`]) suitable for color blind people.
    pub fn blind(mut self, at_least: Trivalent) -> Self {
        self.blind = Some(at_least);
        self
    }

    /// Return the palettes satisfying the criteria, in table order.
    pub fn find(self) -> impl Iterator<Item = Palette> {
        palettes().filter(move |p| {
            p.len() >= self.len
                && (self.typ.is_empty() || self.typ.contains(&p.typ()))
                && satisfy(p.blind(), self.blind)
        })
    }
}
