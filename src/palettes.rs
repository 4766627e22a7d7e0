//! Furman brand colors and the palettes built from them.

use lazy_static::lazy_static;
pub(crate) mod ty;
use ty::*;
use crate::Color;

pub(crate) const PURPLE: Color = Color::named("purple", 0x58, 0x2c, 0x83);
pub(crate) const DARK_PURPLE: Color = Color::named("dark purple", 0x3c, 0x1d, 0x5b);
pub(crate) const LIGHT_PURPLE: Color = Color::named("light purple", 0x94, 0x74, 0xb8);
pub(crate) const LAVENDER: Color = Color::named("lavender", 0xcb, 0xbb, 0xe0);
pub(crate) const YELLOW: Color = Color::named("yellow", 0xf2, 0xbe, 0x1a);
pub(crate) const GOLD: Color = Color::named("gold", 0xb5, 0x85, 0x00);
pub(crate) const GRAY: Color = Color::named("gray", 0x70, 0x73, 0x72);
pub(crate) const LIGHT_GRAY: Color = Color::named("light gray", 0xd9, 0xd9, 0xd6);
pub(crate) const DARK_GRAY: Color = Color::named("dark gray", 0x3f, 0x44, 0x44);
pub(crate) const TEAL: Color = Color::named("teal", 0x00, 0x78, 0x8c);
pub(crate) const GREEN: Color = Color::named("green", 0x2f, 0x7d, 0x32);
pub(crate) const BLUE: Color = Color::named("blue", 0x1c, 0x5e, 0x9e);
pub(crate) const LIGHT_BLUE: Color = Color::named("light blue", 0x8d, 0xb9, 0xe2);
pub(crate) const ORANGE: Color = Color::named("orange", 0xdd, 0x7a, 0x21);
pub(crate) const RED: Color = Color::named("red", 0xa6, 0x26, 0x2b);
pub(crate) const WHITE: Color = Color::named("white", 0xff, 0xff, 0xff);
pub(crate) const BLACK: Color = Color::named("black", 0x00, 0x00, 0x00);

/// The color registry, in display order.
pub(crate) const REGISTRY: [Color; 17] = [
    PURPLE, DARK_PURPLE, LIGHT_PURPLE, LAVENDER, YELLOW, GOLD,
    GRAY, LIGHT_GRAY, DARK_GRAY, TEAL, GREEN, BLUE, LIGHT_BLUE,
    ORANGE, RED, WHITE, BLACK];

lazy_static! {
  pub(crate) static ref PALETTES: Vec<PaletteData> = vec![
    PaletteData {
      name: "main",
      description: "Primary brand colors for categorical data",
      typ: PaletteType::Categorical,
      blind: Trivalent::Maybe,
      colors: vec![PURPLE, YELLOW, GRAY, TEAL, ORANGE, GREEN],
    },
    PaletteData {
      name: "extended",
      description: "Brand and secondary colors for many categories",
      typ: PaletteType::Categorical,
      blind: Trivalent::No,
      colors: vec![PURPLE, YELLOW, TEAL, ORANGE, GREEN, BLUE, RED, GRAY,
                   LIGHT_PURPLE],
    },
    PaletteData {
      name: "purples",
      description: "Light to dark purple",
      typ: PaletteType::Sequential,
      blind: Trivalent::Yes,
      colors: vec![LAVENDER, LIGHT_PURPLE, PURPLE, DARK_PURPLE],
    },
    PaletteData {
      name: "cool",
      description: "Light blue to teal to purple",
      typ: PaletteType::Sequential,
      blind: Trivalent::Yes,
      colors: vec![LIGHT_BLUE, TEAL, PURPLE],
    },
    PaletteData {
      name: "warm",
      description: "Yellow to orange to red",
      typ: PaletteType::Sequential,
      blind: Trivalent::Yes,
      colors: vec![YELLOW, ORANGE, RED],
    },
    PaletteData {
      name: "grays",
      description: "Light to dark gray",
      typ: PaletteType::Monochrome,
      blind: Trivalent::Yes,
      colors: vec![LIGHT_GRAY, GRAY, DARK_GRAY],
    },
    PaletteData {
      name: "purple_gold",
      description: "Purple to light gray to gold",
      typ: PaletteType::Divergent,
      blind: Trivalent::Yes,
      colors: vec![PURPLE, LIGHT_GRAY, YELLOW],
    },
    PaletteData {
      name: "purple_teal",
      description: "Purple to white to teal",
      typ: PaletteType::Divergent,
      blind: Trivalent::Maybe,
      colors: vec![PURPLE, WHITE, TEAL],
    },
    PaletteData {
      name: "highlight",
      description: "Brand purple against a neutral gray context",
      typ: PaletteType::Special,
      blind: Trivalent::Yes,
      colors: vec![PURPLE, LIGHT_GRAY],
    },
  ];
}
