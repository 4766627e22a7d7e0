//! Registration of brand font files.
//!
//! Font files are expected to be named `<Family>-<Style>.ttf` (or
//! `.otf`), e.g. `Lato-BoldItalic.ttf`.  The charting library is given
//! the family name; families that were not registered resolve to
//! [`FALLBACK_FAMILY`].

use std::{collections::BTreeMap, fs, path::{Path, PathBuf}};
use log::{debug, warn};
use serde::Serialize;
use crate::{Error, Result};

/// Family used when a requested family is not registered.
pub const FALLBACK_FAMILY: &str = "sans";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
    BoldItalic,
    /// Any other style suffix (light, condensed,…).
    Other,
}

impl FontStyle {
    fn from_suffix(s: &str) -> Self {
        match s.to_ascii_lowercase().replace([' ', '_'], "").as_str() {
            "" | "regular" | "normal" | "book" => FontStyle::Regular,
            "bold" => FontStyle::Bold,
            "italic" | "oblique" => FontStyle::Italic,
            "bolditalic" | "boldoblique" => FontStyle::BoldItalic,
            _ => FontStyle::Other,
        }
    }
}

/// One font file.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FontFace {
    pub family: String,
    pub style: FontStyle,
    pub path: PathBuf,
}

fn is_font_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("ttf")
                     || e.eq_ignore_ascii_case("otf"))
}

/// Font families known to the theme.
#[derive(Clone, Debug, Default)]
pub struct RegisteredFonts {
    families: BTreeMap<String, Vec<FontFace>>,
}

impl RegisteredFonts {
    pub fn new() -> Self { Self::default() }

    /// Register the font file at `path`.  The file is not opened.
    pub fn register(&mut self, path: impl AsRef<Path>) -> Result<&FontFace> {
        let path = path.as_ref();
        let stem = path.file_stem().and_then(|s| s.to_str())
            .filter(|_| is_font_file(path))
            .ok_or_else(|| Error::invalid(format!(
                "{} is not a .ttf or .otf font file", path.display())))?;
        let (family, style) = match stem.rsplit_once('-') {
            Some((family, style)) if !family.is_empty() =>
                (family, FontStyle::from_suffix(style)),
            _ => (stem, FontStyle::Regular),
        };
        debug!("registering font {family} ({style:?}) from {}", path.display());
        let faces = self.families.entry(family.to_string()).or_default();
        faces.push(FontFace { family: family.to_string(), style,
                              path: path.to_path_buf() });
        faces.sort_by(|a, b| a.path.cmp(&b.path));
        let i = faces.iter().position(|f| f.path == path).unwrap_or(0);
        Ok(&faces[i])
    }

    /// Registered family names, sorted.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }

    pub fn contains(&self, family: &str) -> bool {
        self.families.contains_key(family)
    }

    /// The faces of `family` (empty if not registered).
    pub fn faces(&self, family: &str) -> &[FontFace] {
        self.families.get(family).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `family` if it is registered, [`FALLBACK_FAMILY`] otherwise.
    pub fn resolve<'a>(&self, family: &'a str) -> &'a str {
        if self.contains(family) {
            family
        } else {
            warn!("font family “{family}” is not registered; \
                   using “{FALLBACK_FAMILY}”");
            FALLBACK_FAMILY
        }
    }
}

/// Register all `.ttf` and `.otf` files directly inside `dir`.
pub fn register_fonts(dir: impl AsRef<Path>) -> Result<RegisteredFonts> {
    let dir = dir.as_ref();
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_font_file(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    let mut fonts = RegisteredFonts::new();
    for path in paths {
        fonts.register(path)?;
    }
    if fonts.families.is_empty() {
        warn!("no font files found in {}", dir.display());
    }
    Ok(fonts)
}
