//! HTML swatches of palettes, with a grayscale strip under each palette
//! to judge how it prints in black and white.

use std::io::Write;
use log::debug;
use crate::{palette, Color, Palette, RGBColor, Result};

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn table_of_colors(fh: &mut impl Write, colors: &[Color], width: u32,
                   comment: &str) -> Result<()> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for c in colors {
        writeln!(fh, "  <td title=\"{}\" style=\"width: {width}px; \
                      height: 30px; background-color: {}\"></td>",
                 c.name().unwrap_or(""), c.hex())?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>",
                 c.to_gray().hex())?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn swatch(fh: &mut impl Write, p: Palette, n: Option<usize>) -> Result<()> {
    let colors = match n {
        Some(n) => p.interpolate(n, false)?,
        None => p.colors().to_vec(),
    };
    // Keep long ramps about as wide as short ones.
    let width = (400 / colors.len().max(1)).clamp(1, 40) as u32;
    let comment = format!("<b>{}</b> ({}, {} colors)<br/>{}",
                          p.name(), p.typ(), colors.len(),
                          escape(p.description()));
    table_of_colors(fh, &colors, width, &comment)
}

/// Write an HTML page showing the palettes `names` (all palettes if
/// `names` is empty), each interpolated to `n` colors if `n` is given.
pub fn write_preview<S: AsRef<str>>(fh: &mut impl Write, names: &[S],
                                    n: Option<usize>) -> Result<()> {
    let palettes: Vec<Palette> = if names.is_empty() {
        crate::palettes().collect()
    } else {
        names.iter().map(|s| palette(s.as_ref()))
            .collect::<Result<_>>()?
    };
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Furman palettes</title>\n\
                  </head>\n\
                  <body>")?;
    for &p in &palettes {
        swatch(fh, p, n)?;
    }
    writeln!(fh, "</body>\n\
                  </html>")?;
    debug!("rendered preview of {} palettes", palettes.len());
    Ok(())
}

/// Same as [`write_preview`] but returns the page.
///
/// # Example
///
/// ```
/// let html = furman_palettes::preview::preview_html(&["cool"], None).unwrap();
/// assert!(html.contains("background-color: #00788c"));
/// ```
pub fn preview_html<S: AsRef<str>>(names: &[S], n: Option<usize>)
                                   -> Result<String> {
    let mut buf = Vec::new();
    write_preview(&mut buf, names, n)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn cells(html: &str) -> usize {
        html.matches("height: 30px").count()
    }

    #[test]
    fn one_table_per_palette() {
        let html = preview_html(&["cool", "warm"], None).unwrap();
        assert_eq!(html.matches("<table").count(), 2);
        assert_eq!(cells(&html), 6);
        assert_eq!(html.matches("height: 12px").count(), 6);
        assert!(html.contains("<b>cool</b> (sequential, 3 colors)"));
        assert!(html.starts_with("<html>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn grayscale_row() {
        let html = preview_html(&["highlight"], None).unwrap();
        let gray = gray_of("#582c83");
        assert!(html.contains(&format!("height: 12px; background-color: {gray}")));
    }

    fn gray_of(hex: &str) -> String {
        hex.parse::<Color>().unwrap().to_gray().hex()
    }

    #[test]
    fn interpolated_preview() {
        let html = preview_html(&["purple_teal"], Some(25)).unwrap();
        assert_eq!(cells(&html), 25);
        assert!(html.contains("width: 16px"));
    }

    #[test]
    fn empty_selection_shows_everything() {
        let html = preview_html::<&str>(&[], None).unwrap();
        assert_eq!(html.matches("<table").count(), crate::palettes().count());
    }

    #[test]
    fn unknown_palette() {
        assert!(matches!(preview_html(&["cool", "nonexistent"], None),
                         Err(Error::UnknownPalette { .. })));
    }
}
