//! The Furman chart theme, as plain data for the charting library.

use serde::{Deserialize, Serialize};
use crate::{contrast::{ContrastResult, Standard, UseCase},
            fonts::{RegisteredFonts, FALLBACK_FAMILY}, palettes, Color};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Light,
    Dark,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Right,
    Bottom,
    Top,
    Left,
    None,
}

/// Font sizes in points, derived from the base size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TextSizes {
    pub title: f64,
    pub subtitle: f64,
    pub axis_title: f64,
    pub axis_text: f64,
    pub legend_text: f64,
    pub caption: f64,
}

impl TextSizes {
    fn from_base(base: f64) -> Self {
        TextSizes { title: 1.4 * base,
                    subtitle: 1.1 * base,
                    axis_title: base,
                    axis_text: 0.85 * base,
                    legend_text: 0.85 * base,
                    caption: 0.75 * base }
    }
}

/// Near-black background of the dark variant.
const NIGHT: Color = Color::new(0x23, 0x1f, 0x20);

/// Colors, fonts and layout options of a chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Theme {
    pub variant: Variant,
    pub font_family: String,
    pub base_size: f64,
    pub sizes: TextSizes,
    pub background: Color,
    pub panel_background: Color,
    pub grid: Color,
    pub text: Color,
    pub title: Color,
    pub accent: Color,
    pub legend_position: LegendPosition,
    /// Default palette for discrete scales.
    pub palette: &'static str,
}

impl Default for Theme {
    fn default() -> Self { Theme::furman() }
}

impl Theme {
    pub const DEFAULT_BASE_SIZE: f64 = 12.;

    /// The light Furman theme: white background, purple titles.
    pub fn furman() -> Self {
        Theme { variant: Variant::Light,
                font_family: FALLBACK_FAMILY.to_string(),
                base_size: Self::DEFAULT_BASE_SIZE,
                sizes: TextSizes::from_base(Self::DEFAULT_BASE_SIZE),
                background: palettes::WHITE,
                panel_background: palettes::WHITE,
                grid: palettes::LIGHT_GRAY,
                text: palettes::DARK_GRAY,
                title: palettes::PURPLE,
                accent: palettes::YELLOW,
                legend_position: LegendPosition::Right,
                palette: "main" }
    }

    /// The dark Furman theme.
    pub fn furman_dark() -> Self {
        Theme { variant: Variant::Dark,
                background: NIGHT,
                panel_background: NIGHT,
                grid: palettes::DARK_GRAY,
                text: palettes::WHITE,
                title: palettes::LAVENDER,
                ..Theme::furman() }
    }

    /// Set the base font size; all other sizes scale with it.
    pub fn base_size(mut self, size: f64) -> Self {
        self.base_size = size;
        self.sizes = TextSizes::from_base(size);
        self
    }

    /// Use `family` as is, without checking it was registered.
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Use `family` if registered in `fonts`, the fallback otherwise.
    pub fn font(self, fonts: &RegisteredFonts, family: &str) -> Self {
        let family = fonts.resolve(family);
        self.font_family(family)
    }

    pub fn legend_position(mut self, position: LegendPosition) -> Self {
        self.legend_position = position;
        self
    }

    /// Contrast of the text and title colors on the background.
    pub fn text_contrast(&self, standard: Standard) -> Vec<ContrastResult> {
        let threshold = standard.threshold(UseCase::Text);
        [self.text, self.title].into_iter()
            .map(|fg| ContrastResult::new(fg, self.background, standard,
                                          threshold))
            .collect()
    }

    /// The theme as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
