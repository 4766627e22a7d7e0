use furman_palettes::{contrast::{check_contrast, contrast_ratio, luminance,
                                 Standard},
                      export::{export_palette, export_to_file, Format},
                      interpolate, palette, palettes, preview::preview_html,
                      registry, scale_palette, Color, Error, PaletteGenerator,
                      ScaleCache};

fn is_unknown_palette<T: std::fmt::Debug>(r: Result<T, Error>) -> bool {
    matches!(r, Err(Error::UnknownPalette { ref name, .. }) if name == "nonexistent")
}

#[test]
fn interpolating_to_the_anchor_count_is_the_identity() {
    for p in palettes() {
        let colors = interpolate(p.name(), p.len(), false).unwrap();
        assert_eq!(colors, p.colors(), "palette {}", p.name());
    }
}

#[test]
fn reversing_commutes_with_interpolation() {
    for p in palettes() {
        for n in [p.len(), p.len() + 1, 2 * p.len() + 3, 50] {
            let mut fwd = interpolate(p.name(), n, false).unwrap();
            fwd.reverse();
            let rev = interpolate(p.name(), n, true).unwrap();
            assert_eq!(fwd, rev, "palette {} with n = {n}", p.name());
        }
    }
}

#[test]
fn interpolation_has_the_requested_length() {
    for n in 1 ..= 40 {
        assert_eq!(interpolate("extended", n, false).unwrap().len(), n);
    }
}

#[test]
fn contrast_bounds() {
    let black = Color::new(0, 0, 0);
    let white = Color::new(255, 255, 255);
    assert_eq!(luminance(&black), 0.);
    assert!((luminance(&white) - 1.).abs() < 1e-12);
    assert!((contrast_ratio(&black, &white) - 21.).abs() < 1e-9);
    for a in registry() {
        assert_eq!(contrast_ratio(a, a), 1.);
        for b in registry() {
            let r = contrast_ratio(a, b);
            assert!((1. ..= 21.).contains(&r));
            assert_eq!(r, contrast_ratio(b, a));
        }
    }
}

#[test]
fn hex_export_parses_back() {
    for p in palettes() {
        let out = export_palette(p.name(), Format::Hex, None).unwrap();
        let parsed: Vec<Color> = out.lines().map(|l| l.parse().unwrap())
            .collect();
        let expected: Vec<Color> = p.colors().iter().map(|c| c.unnamed())
            .collect();
        assert_eq!(parsed, expected);
    }
}

#[test]
fn main_palette_on_white() {
    let white = Color::new(255, 255, 255);
    let res = check_contrast("main", &[white], Standard::AA).unwrap();
    let by_hex = |h: &str| res.iter().find(|r| r.foreground.hex() == h)
        .unwrap().passes;
    assert!(!by_hex("#f2be1a"));
    assert!(by_hex("#582c83"));
}

#[test]
fn cool_css_has_one_property_per_anchor() {
    let css = export_palette("cool", Format::Css, None).unwrap();
    assert_eq!(css.lines().filter(|l| l.contains("--furman-")).count(), 3);
}

#[test]
fn scale_palette_matches_interpolate() {
    let f = scale_palette("purple_teal", true).unwrap();
    let mut cache = ScaleCache::new();
    for n in [1, 3, 8] {
        let direct = interpolate("purple_teal", n, true).unwrap();
        assert_eq!(f.generate(n).unwrap(), direct);
        assert_eq!(cache.generate("purple_teal", true, n).unwrap(), direct);
        assert_eq!(cache.generate("purple_teal", true, n).unwrap(), direct);
    }
    assert_eq!(cache.len(), 3);
}

#[test]
fn unknown_palette_everywhere() {
    let dir = tempfile::tempdir().unwrap();
    assert!(is_unknown_palette(palette("nonexistent")));
    assert!(is_unknown_palette(interpolate("nonexistent", 5, false)));
    assert!(is_unknown_palette(scale_palette("nonexistent", false)));
    assert!(is_unknown_palette(check_contrast("nonexistent", &[],
                                              Standard::AA)));
    assert!(is_unknown_palette(export_palette("nonexistent", Format::Css,
                                              None)));
    assert!(is_unknown_palette(export_to_file(
        "nonexistent", Format::Hex, None, dir.path().join("x.txt"))));
    assert!(!dir.path().join("x.txt").exists());
    assert!(is_unknown_palette(preview_html(&["nonexistent"], None)));
    assert!(is_unknown_palette(ScaleCache::new()
                               .generate("nonexistent", false, 3)));
}

#[test]
fn unknown_palette_lists_valid_names() {
    match palette("nonexistent") {
        Err(e @ Error::UnknownPalette { .. }) => {
            let msg = e.to_string();
            for p in palettes() {
                assert!(msg.contains(p.name()), "{msg}");
            }
        }
        r => panic!("unexpected {r:?}"),
    }
}
