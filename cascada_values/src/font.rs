// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font values and the `font` shorthand.

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use cascada_state::{Binding, Observe, combine_latest};

use crate::keyword::{FontStretch, FontStyle, FontVariant};
use crate::length::Length;
use crate::number::{Joiner, Number};
use crate::parts::{current, source};
use crate::unit::UnitValue;

keyword_enum! {
    /// Generic font families.
    pub enum GenericFamily("generic font family") {
        Serif = "serif",
        SansSerif = "sans-serif",
        Monospace = "monospace",
        Cursive = "cursive",
        Fantasy = "fantasy",
        SystemUi = "system-ui",
        UiSerif = "ui-serif",
        UiSansSerif = "ui-sans-serif",
        UiMonospace = "ui-monospace",
        Math = "math",
        Emoji = "emoji",
    }
}

/// One entry of a `font-family` list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FamilyName {
    /// A concrete family, quoted when it is not a plain identifier.
    Named(String),
    /// A generic family keyword.
    Generic(GenericFamily),
}

impl fmt::Display for FamilyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic(generic) => generic.fmt(f),
            Self::Named(name) if is_plain_identifier(name) => f.write_str(name),
            Self::Named(name) => {
                f.write_str("\"")?;
                for c in name.chars() {
                    if matches!(c, '"' | '\\') {
                        f.write_str("\\")?;
                    }
                    write!(f, "{c}")?;
                }
                f.write_str("\"")
            }
        }
    }
}

fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        && GenericFamily::ALL
            .iter()
            .all(|generic| !generic.as_str().eq_ignore_ascii_case(name))
}

impl From<&str> for FamilyName {
    fn from(name: &str) -> Self {
        Self::Named(name.to_owned())
    }
}

impl From<String> for FamilyName {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<GenericFamily> for FamilyName {
    fn from(generic: GenericFamily) -> Self {
        Self::Generic(generic)
    }
}

/// A `font-family` fallback list.
///
/// Family names that are not plain identifiers are quoted; a name that
/// collides with a generic keyword is quoted too, so it is not mistaken for
/// the generic.
///
/// ```rust
/// use cascada_values::{FontFamily, GenericFamily};
///
/// let family = FontFamily::new(["Open Sans", "Arial"]).fallback(GenericFamily::SansSerif);
/// assert_eq!(family.to_string(), "\"Open Sans\", Arial, sans-serif");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FontFamily(pub Vec<FamilyName>);

impl FontFamily {
    /// A list of families in preference order.
    #[must_use]
    pub fn new<N: Into<FamilyName>>(names: impl IntoIterator<Item = N>) -> Self {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Appends a family to the end of the list.
    #[must_use]
    pub fn fallback(mut self, name: impl Into<FamilyName>) -> Self {
        self.0.push(name.into());
        self
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Joiner::new(f, ", ").all(&self.0)
    }
}

impl From<GenericFamily> for FontFamily {
    fn from(generic: GenericFamily) -> Self {
        Self(vec![FamilyName::Generic(generic)])
    }
}

impl From<&str> for FontFamily {
    fn from(name: &str) -> Self {
        Self(vec![FamilyName::from(name)])
    }
}

bind_from!(GenericFamily => FontFamily);

keyword_enum! {
    /// Absolute and relative `font-size` keywords.
    pub enum FontSizeKeyword("font-size keyword") {
        XxSmall = "xx-small",
        XSmall = "x-small",
        Small = "small",
        Medium = "medium",
        Large = "large",
        XLarge = "x-large",
        XxLarge = "xx-large",
        XxxLarge = "xxx-large",
        Smaller = "smaller",
        Larger = "larger",
    }
}

/// The `font-size` value.
#[derive(Clone, Debug, PartialEq)]
pub enum FontSize {
    /// A size keyword.
    Keyword(FontSizeKeyword),
    /// An explicit length.
    Length(Length),
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword(keyword) => keyword.fmt(f),
            Self::Length(length) => length.fmt(f),
        }
    }
}

impl From<FontSizeKeyword> for FontSize {
    fn from(keyword: FontSizeKeyword) -> Self {
        Self::Keyword(keyword)
    }
}

impl From<Length> for FontSize {
    fn from(length: Length) -> Self {
        Self::Length(length)
    }
}

impl From<UnitValue> for FontSize {
    fn from(value: UnitValue) -> Self {
        Self::Length(Length::Value(value))
    }
}

bind_from!(
    FontSizeKeyword => FontSize,
    Length => FontSize,
    UnitValue => FontSize,
);

/// The `font-weight` value.
///
/// ```rust
/// use cascada_values::FontWeight;
///
/// assert_eq!(FontWeight::Bold.to_string(), "bold");
/// assert_eq!(FontWeight::Number(600).to_string(), "600");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// `normal`
    Normal,
    /// `bold`
    Bold,
    /// `bolder`
    Bolder,
    /// `lighter`
    Lighter,
    /// A numeric weight between 1 and 1000.
    Number(u16),
}

impl FontWeight {
    /// A numeric weight, clamped to `1..=1000`.
    #[must_use]
    pub fn number(weight: u16) -> Self {
        Self::Number(weight.clamp(1, 1000))
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => f.write_str("normal"),
            Self::Bold => f.write_str("bold"),
            Self::Bolder => f.write_str("bolder"),
            Self::Lighter => f.write_str("lighter"),
            Self::Number(weight) => write!(f, "{weight}"),
        }
    }
}

/// The `line-height` value.
#[derive(Clone, Debug, PartialEq)]
pub enum LineHeight {
    /// `normal`
    Normal,
    /// A unitless multiplier of the font size.
    Number(Number),
    /// An explicit length.
    Length(Length),
}

impl fmt::Display for LineHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => f.write_str("normal"),
            Self::Number(number) => number.fmt(f),
            Self::Length(length) => length.fmt(f),
        }
    }
}

impl From<Number> for LineHeight {
    fn from(number: Number) -> Self {
        Self::Number(number)
    }
}

impl From<f32> for LineHeight {
    fn from(number: f32) -> Self {
        Self::Number(Number(number))
    }
}

impl From<Length> for LineHeight {
    fn from(length: Length) -> Self {
        Self::Length(length)
    }
}

impl From<UnitValue> for LineHeight {
    fn from(value: UnitValue) -> Self {
        Self::Length(Length::Value(value))
    }
}

bind_from!(
    Number => LineHeight,
    Length => LineHeight,
    UnitValue => LineHeight,
);

/// The `font` shorthand:
/// `[style] [variant] [weight] [stretch] size[/line-height] family`.
///
/// Size and family are required by CSS; every other component is omitted
/// when absent.
///
/// ```rust
/// use cascada_values::{Font, FontFamily, FontWeight, GenericFamily, LineHeight, px};
///
/// let font = Font::new(px(14), FontFamily::from(GenericFamily::Serif));
/// assert_eq!(font.to_string(), "14px serif");
///
/// let font = Font {
///     weight: Some(FontWeight::Bold),
///     line_height: Some(LineHeight::from(1.5_f32)),
///     ..font
/// };
/// assert_eq!(font.to_string(), "bold 14px/1.5 serif");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// `font-style`
    pub style: Option<FontStyle>,
    /// `font-variant`
    pub variant: Option<FontVariant>,
    /// `font-weight`
    pub weight: Option<FontWeight>,
    /// `font-stretch`
    pub stretch: Option<FontStretch>,
    /// `font-size`
    pub size: FontSize,
    /// `line-height`
    pub line_height: Option<LineHeight>,
    /// `font-family`
    pub family: FontFamily,
}

impl Font {
    /// A font with only the required components.
    #[must_use]
    pub fn new(size: impl Into<FontSize>, family: impl Into<FontFamily>) -> Self {
        Self {
            style: None,
            variant: None,
            weight: None,
            stretch: None,
            size: size.into(),
            line_height: None,
            family: family.into(),
        }
    }

    /// Starts a builder whose components may be bound to state.
    pub fn builder(
        size: impl Into<Binding<FontSize>>,
        family: impl Into<Binding<FontFamily>>,
    ) -> FontBuilder {
        FontBuilder {
            style: None,
            variant: None,
            weight: None,
            stretch: None,
            size: size.into(),
            line_height: None,
            family: family.into(),
        }
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = Joiner::new(f, " ");
        out.opt(self.style.as_ref())?;
        out.opt(self.variant.as_ref())?;
        out.opt(self.weight.as_ref())?;
        out.opt(self.stretch.as_ref())?;
        match &self.line_height {
            Some(line_height) => out.item(&format_args!("{}/{line_height}", self.size))?,
            None => out.item(&self.size)?,
        }
        if self.family.0.is_empty() {
            return Ok(());
        }
        out.item(&self.family)
    }
}

/// Builds a [`Font`] whose components may each be bound to state.
///
/// ```rust
/// use cascada_state::State;
/// use cascada_values::{Font, FontStyle, FontSize, GenericFamily, px};
///
/// let size = State::new(FontSize::from(px(12)));
/// let font = Font::builder(&size, GenericFamily::Monospace)
///     .style(FontStyle::Italic)
///     .build();
/// assert_eq!(font.get().to_string(), "italic 12px monospace");
///
/// size.set(FontSize::from(px(16)));
/// assert_eq!(font.get().to_string(), "italic 16px monospace");
/// ```
#[derive(Clone, Debug)]
pub struct FontBuilder {
    style: Option<Binding<FontStyle>>,
    variant: Option<Binding<FontVariant>>,
    weight: Option<Binding<FontWeight>>,
    stretch: Option<Binding<FontStretch>>,
    size: Binding<FontSize>,
    line_height: Option<Binding<LineHeight>>,
    family: Binding<FontFamily>,
}

impl FontBuilder {
    /// Sets the style.
    #[must_use]
    pub fn style(mut self, style: impl Into<Binding<FontStyle>>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Sets the variant.
    #[must_use]
    pub fn variant(mut self, variant: impl Into<Binding<FontVariant>>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    /// Sets the weight.
    #[must_use]
    pub fn weight(mut self, weight: impl Into<Binding<FontWeight>>) -> Self {
        self.weight = Some(weight.into());
        self
    }

    /// Sets the stretch.
    #[must_use]
    pub fn stretch(mut self, stretch: impl Into<Binding<FontStretch>>) -> Self {
        self.stretch = Some(stretch.into());
        self
    }

    /// Sets the line height.
    #[must_use]
    pub fn line_height(mut self, line_height: impl Into<Binding<LineHeight>>) -> Self {
        self.line_height = Some(line_height.into());
        self
    }

    fn snapshot(&self) -> Font {
        Font {
            style: current(&self.style),
            variant: current(&self.variant),
            weight: current(&self.weight),
            stretch: current(&self.stretch),
            size: self.size.get(),
            line_height: current(&self.line_height),
            family: self.family.get(),
        }
    }

    /// Finishes the shorthand.
    pub fn build(self) -> Binding<Font> {
        let sources: Vec<&dyn Observe> = [
            source(&self.style),
            source(&self.variant),
            source(&self.weight),
            source(&self.stretch),
            Some(&self.size as &dyn Observe),
            source(&self.line_height),
            Some(&self.family as &dyn Observe),
        ]
        .into_iter()
        .flatten()
        .collect();
        let parts = self.clone();
        combine_latest(&sources, move || parts.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use crate::unit::{em, px, rem};
    use cascada_state::State;

    #[test]
    fn family_quoting() {
        assert_eq!(FamilyName::from("Inter").to_string(), "Inter");
        assert_eq!(FamilyName::from("Fira Code").to_string(), "\"Fira Code\"");
        assert_eq!(FamilyName::from("serif").to_string(), "\"serif\"");
        assert_eq!(FamilyName::from("3D").to_string(), "\"3D\"");
        assert_eq!(
            FamilyName::Generic(GenericFamily::SystemUi).to_string(),
            "system-ui"
        );
    }

    #[test]
    fn sizes_and_line_heights() {
        assert_eq!(FontSize::from(FontSizeKeyword::XxLarge).to_string(), "xx-large");
        assert_eq!(FontSize::from(rem(1.25)).to_string(), "1.25rem");
        assert_eq!(LineHeight::from(1.4_f32).to_string(), "1.4");
        assert_eq!(LineHeight::from(px(20)).to_string(), "20px");
        assert_eq!(FontWeight::number(2000), FontWeight::Number(1000));
    }

    #[test]
    fn shorthand_full_order() {
        let font = Font {
            style: Some(FontStyle::Italic),
            variant: Some(FontVariant::SmallCaps),
            weight: Some(FontWeight::Number(700)),
            stretch: Some(FontStretch::Condensed),
            size: FontSize::from(em(1)),
            line_height: Some(LineHeight::Normal),
            family: FontFamily::new(["Helvetica Neue"]).fallback(GenericFamily::SansSerif),
        };
        assert_eq!(
            font.to_string(),
            "italic small-caps 700 condensed 1em/normal \"Helvetica Neue\", sans-serif"
        );
    }

    #[test]
    fn shorthand_minimal() {
        let font = Font::new(FontSizeKeyword::Small, "Georgia");
        assert_eq!(font.to_string(), "small Georgia");
    }

    #[test]
    fn empty_family_leaves_no_trailing_space() {
        assert_eq!(Font::new(px(14), FontFamily::default()).to_string(), "14px");
        let font = Font {
            line_height: Some(LineHeight::from(1.5_f32)),
            weight: Some(FontWeight::Bold),
            ..Font::new(px(14), FontFamily::default())
        };
        assert_eq!(font.to_string(), "bold 14px/1.5");
    }

    #[test]
    fn builder_tracks_weight() {
        let weight = State::new(FontWeight::Normal);
        let font = Font::builder(px(12), FontFamily::from("Inter")).weight(&weight).build();
        assert_eq!(font.get().to_string(), "normal 12px Inter");
        weight.set(FontWeight::Bold);
        assert_eq!(font.get().to_string(), "bold 12px Inter");
    }

    #[test]
    fn builder_without_state_is_constant() {
        let font = Font::builder(px(10), GenericFamily::Serif)
            .line_height(LineHeight::from(1.2_f32))
            .build();
        assert!(!font.is_reactive());
        assert_eq!(font.get().to_string(), "10px/1.2 serif");
    }
}
