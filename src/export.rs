//! Textual renderings of palettes: hex, `rgb()`, `hsl()`, CSS custom
//! properties and JSON.

use std::{fmt, fs::File, io::{BufWriter, Write}, path::Path, str::FromStr};
use log::debug;
use serde_json::{json, Map, Value};
use crate::{palette, Color, Error, Palette, Result};

/// Export format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Hex,
    Rgb,
    Hsl,
    Css,
    Json,
}

impl Format {
    pub const ALL: [Format; 5] = [Format::Hex, Format::Rgb, Format::Hsl,
                                  Format::Css, Format::Json];

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Hex => "hex",
            Format::Rgb => "rgb",
            Format::Hsl => "hsl",
            Format::Css => "css",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Format::ALL.into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnsupportedFormat {
                format: s.to_string(),
                valid: Format::ALL.iter().map(|f| f.to_string()).collect() })
    }
}

/// Render the palette `name` in `format`, first interpolated to `n`
/// colors if `n` is given.
///
/// # Example
///
/// ```
/// use furman_palettes::export::{export_palette, Format};
/// let css = export_palette("cool", Format::Css, None).unwrap();
/// assert!(css.starts_with(":root {"));
/// assert!(css.contains("  --furman-light-blue: #8db9e2;"));
/// ```
pub fn export_palette(name: &str, format: Format, n: Option<usize>)
                      -> Result<String> {
    palette(name)?.export(format, n)
}

/// Same as [`export_palette`] but writes the result to `path`.
pub fn export_to_file(name: &str, format: Format, n: Option<usize>,
                      path: impl AsRef<Path>) -> Result<()> {
    let text = export_palette(name, format, n)?;
    let path = path.as_ref();
    let mut fh = BufWriter::new(File::create(path)?);
    fh.write_all(text.as_bytes())?;
    fh.flush()?;
    debug!("exported palette {name} as {format} to {}", path.display());
    Ok(())
}

impl Palette {
    /// See [`export_palette`].
    pub fn export(&self, format: Format, n: Option<usize>) -> Result<String> {
        let colors = match n {
            Some(n) => self.interpolate(n, false)?,
            None => self.colors().to_vec(),
        };
        Ok(render(self.name(), &colors, format))
    }
}

/// The key of the `i`th color: its name, or `<palette>_<i+1>`.
fn key(palette: &str, i: usize, c: &Color) -> String {
    match c.name() {
        Some(name) => name.to_string(),
        None => format!("{palette}_{}", i + 1),
    }
}

fn slug(key: &str) -> String {
    key.to_lowercase().replace(' ', "-")
}

fn lines(colors: &[Color], f: impl Fn(&Color) -> String) -> String {
    colors.iter().map(|c| f(c) + "\n").collect()
}

pub(crate) fn render(palette: &str, colors: &[Color], format: Format) -> String {
    match format {
        Format::Hex => lines(colors, Color::hex),
        Format::Rgb => lines(colors, |c| {
            let rgb = c.rgb();
            format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b)
        }),
        Format::Hsl => lines(colors, |c| {
            let (h, s, l) = c.to_hsl_rounded();
            format!("hsl({h}, {s}%, {l}%)")
        }),
        Format::Css => {
            let mut css = String::from(":root {\n");
            for (i, c) in colors.iter().enumerate() {
                css += &format!("  --furman-{}: {};\n",
                                slug(&key(palette, i, c)), c.hex());
            }
            css + "}\n"
        }
        Format::Json => {
            let map: Map<String, Value> = colors.iter().enumerate()
                .map(|(i, c)| (key(palette, i, c), Value::String(c.hex())))
                .collect();
            let doc = json!({ "palette_name": palette, "colors": map });
            // Serializing a `Value` cannot fail.
            serde_json::to_string_pretty(&doc).unwrap_or_default() + "\n"
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_parse() {
        assert_eq!("CSS".parse::<Format>().unwrap(), Format::Css);
        match "xml".parse::<Format>() {
            Err(Error::UnsupportedFormat { format, valid }) => {
                assert_eq!(format, "xml");
                assert_eq!(valid, ["hex", "rgb", "hsl", "css", "json"]);
            }
            r => panic!("unexpected {r:?}"),
        }
    }

    #[test]
    fn hex_reproduces_palette() {
        let p = palette("main").unwrap();
        let out = export_palette("main", Format::Hex, None).unwrap();
        let hex: Vec<_> = out.lines().collect();
        let expected: Vec<_> = p.colors().iter().map(Color::hex).collect();
        assert_eq!(hex, expected);
    }

    #[test]
    fn rgb_lines() {
        let out = export_palette("highlight", Format::Rgb, None).unwrap();
        assert_eq!(out, "rgb(88, 44, 131)\nrgb(217, 217, 214)\n");
    }

    #[test]
    fn hsl_lines() {
        let out = export_palette("grays", Format::Hsl, None).unwrap();
        let first = out.lines().next().unwrap();
        assert_eq!(first, "hsl(60, 4%, 85%)");
        let out = export_palette("highlight", Format::Hsl, None).unwrap();
        assert_eq!(out.lines().next().unwrap(), "hsl(270, 50%, 34%)");
    }

    #[test]
    fn css_block_for_cool() {
        let css = export_palette("cool", Format::Css, None).unwrap();
        assert!(css.starts_with(":root {\n"));
        assert!(css.ends_with("}\n"));
        let props: Vec<_> = css.lines()
            .filter(|l| l.trim_start().starts_with("--furman-")).collect();
        assert_eq!(props, ["  --furman-light-blue: #8db9e2;",
                           "  --furman-teal: #00788c;",
                           "  --furman-purple: #582c83;"]);
    }

    #[test]
    fn css_synthesizes_names_for_interpolated_colors() {
        let css = export_palette("warm", Format::Css, Some(5)).unwrap();
        assert!(css.contains("--furman-yellow: #f2be1a;"));
        assert!(css.contains("--furman-warm_2: "));
        assert!(css.contains("--furman-orange: #dd7a21;"));
        assert!(css.contains("--furman-warm_4: "));
        assert!(css.contains("--furman-red: #a6262b;"));
    }

    #[test]
    fn json_object() {
        let out = export_palette("purple_gold", Format::Json, Some(4)).unwrap();
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["palette_name"], "purple_gold");
        let colors = v["colors"].as_object().unwrap();
        let keys: Vec<_> = colors.keys().map(String::as_str).collect();
        assert_eq!(keys, ["purple", "purple_gold_2", "purple_gold_3",
                          "yellow"]);
        assert_eq!(colors["purple"], "#582c83");
    }

    #[test]
    fn interpolated_export_has_n_lines() {
        let out = export_palette("cool", Format::Hex, Some(11)).unwrap();
        assert_eq!(out.lines().count(), 11);
        assert!(export_palette("cool", Format::Hex, Some(0)).is_err());
    }

    #[test]
    fn unknown_palette() {
        assert!(matches!(export_palette("nonexistent", Format::Hex, None),
                         Err(Error::UnknownPalette { .. })));
    }

    #[test]
    fn export_to_file_writes_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cool.css");
        export_to_file("cool", Format::Css, None, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, export_palette("cool", Format::Css, None).unwrap());
    }

    #[test]
    fn export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("cool.json");
        assert!(matches!(export_to_file("cool", Format::Json, None, &path),
                         Err(Error::Io(_))));
    }
}
