// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colors.

use alloc::borrow::ToOwned;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::error::ValueParseError;
use crate::length::custom_name;
use crate::number::write_number;

keyword_enum! {
    /// Named CSS colors.
    pub enum NamedColor("named color") {
        Black = "black",
        White = "white",
        Silver = "silver",
        Gray = "gray",
        DarkGray = "darkgray",
        LightGray = "lightgray",
        Red = "red",
        DarkRed = "darkred",
        Crimson = "crimson",
        Maroon = "maroon",
        Orange = "orange",
        DarkOrange = "darkorange",
        Gold = "gold",
        Yellow = "yellow",
        Olive = "olive",
        Lime = "lime",
        Green = "green",
        DarkGreen = "darkgreen",
        SeaGreen = "seagreen",
        Teal = "teal",
        Cyan = "cyan",
        Aqua = "aqua",
        Turquoise = "turquoise",
        Blue = "blue",
        Navy = "navy",
        RoyalBlue = "royalblue",
        SteelBlue = "steelblue",
        SkyBlue = "skyblue",
        DodgerBlue = "dodgerblue",
        Purple = "purple",
        Indigo = "indigo",
        Violet = "violet",
        Magenta = "magenta",
        Fuchsia = "fuchsia",
        Pink = "pink",
        HotPink = "hotpink",
        Brown = "brown",
        Chocolate = "chocolate",
        Tan = "tan",
        Beige = "beige",
        Ivory = "ivory",
        WhiteSmoke = "whitesmoke",
        Gainsboro = "gainsboro",
        SlateGray = "slategray",
        RebeccaPurple = "rebeccapurple",
    }
}

/// A CSS `<color>`.
///
/// ```rust
/// use cascada_values::{Color, NamedColor};
///
/// assert_eq!(Color::hex(0xff8800).to_string(), "#ff8800");
/// assert_eq!(Color::rgba(0, 0, 0, 0.5).to_string(), "rgba(0, 0, 0, 0.5)");
/// assert_eq!(Color::from(NamedColor::RebeccaPurple).to_string(), "rebeccapurple");
/// assert_eq!("#abc".parse::<Color>().unwrap(), Color::hex(0xaabbcc));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    /// A named color keyword.
    Named(NamedColor),
    /// `#rrggbb`, stored as `0xRRGGBB`.
    Hex(u32),
    /// `#rrggbbaa`, stored as `0xRRGGBBAA`.
    HexAlpha(u32),
    /// `rgb(r, g, b)`
    Rgb(u8, u8, u8),
    /// `rgba(r, g, b, a)`
    Rgba(u8, u8, u8, f32),
    /// `hsl(h, s%, l%)`
    Hsl(f32, f32, f32),
    /// `hsla(h, s%, l%, a)`
    Hsla(f32, f32, f32, f32),
    /// `transparent`
    Transparent,
    /// `currentcolor`
    CurrentColor,
    /// `var(--name)`
    Var(String),
}

impl Color {
    /// `black`
    pub const BLACK: Self = Self::Named(NamedColor::Black);
    /// `white`
    pub const WHITE: Self = Self::Named(NamedColor::White);
    /// `red`
    pub const RED: Self = Self::Named(NamedColor::Red);
    /// `green`
    pub const GREEN: Self = Self::Named(NamedColor::Green);
    /// `blue`
    pub const BLUE: Self = Self::Named(NamedColor::Blue);

    /// Creates a color from a `0xRRGGBB` literal.
    #[must_use]
    pub const fn hex(rgb: u32) -> Self {
        Self::Hex(rgb & 0x00ff_ffff)
    }

    /// Creates an opaque `rgb()` color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(r, g, b)
    }

    /// Creates an `rgba()` color; alpha is clamped to `0..=1`.
    #[must_use]
    pub fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self::Rgba(r, g, b, alpha.clamp(0.0, 1.0))
    }

    /// Creates an `hsl()` color from hue in degrees and saturation/lightness
    /// in percent.
    #[must_use]
    pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self::Hsl(hue, saturation, lightness)
    }

    /// Creates an `hsla()` color; alpha is clamped to `0..=1`.
    #[must_use]
    pub fn hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        Self::Hsla(hue, saturation, lightness, alpha.clamp(0.0, 1.0))
    }

    /// Creates a `var()` reference; the leading `--` is added when missing.
    #[must_use]
    pub fn var(name: impl AsRef<str>) -> Self {
        Self::Var(custom_name(name.as_ref()))
    }

    fn parse_hex(digits: &str, input: &str) -> Result<Self, ValueParseError> {
        let invalid = || ValueParseError::InvalidHex(input.to_owned());
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let expanded: String = match digits.len() {
            3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => digits.to_owned(),
            _ => return Err(invalid()),
        };
        let value = u32::from_str_radix(&expanded, 16).map_err(|_| invalid())?;
        Ok(if expanded.len() == 8 {
            Self::HexAlpha(value)
        } else {
            Self::Hex(value)
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(named) => named.fmt(f),
            Self::Hex(rgb) => write!(f, "#{rgb:06x}"),
            Self::HexAlpha(rgba) => write!(f, "#{rgba:08x}"),
            Self::Rgb(r, g, b) => write!(f, "rgb({r}, {g}, {b})"),
            Self::Rgba(r, g, b, a) => {
                write!(f, "rgba({r}, {g}, {b}, ")?;
                write_number(f, *a)?;
                f.write_str(")")
            }
            Self::Hsl(h, s, l) => {
                f.write_str("hsl(")?;
                write_hsl(f, *h, *s, *l)?;
                f.write_str(")")
            }
            Self::Hsla(h, s, l, a) => {
                f.write_str("hsla(")?;
                write_hsl(f, *h, *s, *l)?;
                f.write_str(", ")?;
                write_number(f, *a)?;
                f.write_str(")")
            }
            Self::Transparent => f.write_str("transparent"),
            Self::CurrentColor => f.write_str("currentcolor"),
            Self::Var(name) => write!(f, "var({name})"),
        }
    }
}

fn write_hsl(f: &mut fmt::Formatter<'_>, h: f32, s: f32, l: f32) -> fmt::Result {
    write_number(f, h)?;
    f.write_str(", ")?;
    write_number(f, s)?;
    f.write_str("%, ")?;
    write_number(f, l)?;
    f.write_str("%")
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        Self::Named(named)
    }
}

bind_from!(NamedColor => Color);

impl FromStr for Color {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(ValueParseError::Empty);
        }
        if let Some(digits) = input.strip_prefix('#') {
            return Self::parse_hex(digits, input);
        }
        if input.eq_ignore_ascii_case("transparent") {
            return Ok(Self::Transparent);
        }
        if input.eq_ignore_ascii_case("currentcolor") {
            return Ok(Self::CurrentColor);
        }
        input
            .parse::<NamedColor>()
            .map(Self::Named)
            .map_err(|_| ValueParseError::UnknownKeyword {
                keyword: input.to_owned(),
                expected: "color",
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn functional_notations() {
        assert_eq!(Color::rgb(255, 0, 10).to_string(), "rgb(255, 0, 10)");
        assert_eq!(Color::hsl(120.0, 50.0, 25.0).to_string(), "hsl(120, 50%, 25%)");
        assert_eq!(
            Color::hsla(0.0, 100.0, 50.0, 0.25).to_string(),
            "hsla(0, 100%, 50%, 0.25)"
        );
    }

    #[test]
    fn hex_is_zero_padded() {
        assert_eq!(Color::hex(0x0000ff).to_string(), "#0000ff");
        assert_eq!(Color::HexAlpha(0x11223344).to_string(), "#11223344");
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(Color::rgba(1, 2, 3, 4.0), Color::Rgba(1, 2, 3, 1.0));
    }

    #[test]
    fn keywords() {
        assert_eq!(Color::Transparent.to_string(), "transparent");
        assert_eq!(Color::CurrentColor.to_string(), "currentcolor");
        assert_eq!(Color::var("accent").to_string(), "var(--accent)");
        assert_eq!(Color::WHITE.to_string(), "white");
    }

    #[test]
    fn parse_hex_forms() {
        assert_eq!("#fff".parse::<Color>(), Ok(Color::Hex(0xffffff)));
        assert_eq!("#1234".parse::<Color>(), Ok(Color::HexAlpha(0x11223344)));
        assert_eq!("#A0B1C2".parse::<Color>(), Ok(Color::Hex(0xa0b1c2)));
        assert_eq!(
            "#12345".parse::<Color>(),
            Err(ValueParseError::InvalidHex(String::from("#12345")))
        );
        assert_eq!(
            "#ggg".parse::<Color>(),
            Err(ValueParseError::InvalidHex(String::from("#ggg")))
        );
    }

    #[test]
    fn parse_names() {
        assert_eq!("Red".parse::<Color>(), Ok(Color::RED));
        assert_eq!("currentColor".parse::<Color>(), Ok(Color::CurrentColor));
        assert!(matches!(
            "blurple".parse::<Color>(),
            Err(ValueParseError::UnknownKeyword { expected: "color", .. })
        ));
    }
}
