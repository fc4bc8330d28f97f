// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backgrounds, images and gradients.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use cascada_state::{Binding, Combine, Observe, combine_latest};

use crate::color::{Color, NamedColor};
use crate::keyword::{BackgroundAttachment, BackgroundRepeat, BoxEdge};
use crate::length::Length;
use crate::number::Joiner;
use crate::parts::{current, source};
use crate::unit::UnitValue;

/// The `background-size` value.
///
/// ```rust
/// use cascada_state::State;
/// use cascada_values::{BackgroundSize, Length, px};
///
/// let h = State::new(Length::from(px(10)));
/// let size = BackgroundSize::new(&h, px(20));
/// assert_eq!(size.get().to_string(), "10px 20px");
///
/// h.set(Length::from(px(15)));
/// assert_eq!(size.get().to_string(), "15px 20px");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum BackgroundSize {
    /// `cover`
    Cover,
    /// `contain`
    Contain,
    /// Width, then optional height.
    Size(Length, Option<Length>),
}

impl BackgroundSize {
    /// Explicit horizontal and vertical sizes.
    pub fn new(
        horizontal: impl Into<Binding<Length>>,
        vertical: impl Into<Binding<Length>>,
    ) -> Binding<Self> {
        let horizontal: Binding<Length> = horizontal.into();
        let vertical: Binding<Length> = vertical.into();
        (horizontal, vertical).combine(|(h, v)| Self::Size(h, Some(v)))
    }

    /// Explicit width; the height is `auto`.
    pub fn width(horizontal: impl Into<Binding<Length>>) -> Binding<Self> {
        let horizontal: Binding<Length> = horizontal.into();
        horizontal.map(|h| Self::Size(h.clone(), None))
    }
}

impl fmt::Display for BackgroundSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cover => f.write_str("cover"),
            Self::Contain => f.write_str("contain"),
            Self::Size(h, v) => {
                let mut out = Joiner::new(f, " ");
                out.item(h)?;
                out.opt(v.as_ref())
            }
        }
    }
}

impl From<UnitValue> for BackgroundSize {
    fn from(width: UnitValue) -> Self {
        Self::Size(Length::Value(width), None)
    }
}

bind_from!(UnitValue => BackgroundSize);

keyword_enum! {
    /// Keywords of a `<position>` component.
    pub enum PositionKeyword("position keyword") {
        Left = "left",
        Center = "center",
        Right = "right",
        Top = "top",
        Bottom = "bottom",
    }
}

/// One axis of a `<position>`.
#[derive(Clone, Debug, PartialEq)]
pub enum PositionComponent {
    /// A keyword such as `center`.
    Keyword(PositionKeyword),
    /// An offset from the start edge.
    Length(Length),
}

impl fmt::Display for PositionComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword(keyword) => keyword.fmt(f),
            Self::Length(length) => length.fmt(f),
        }
    }
}

impl From<PositionKeyword> for PositionComponent {
    fn from(keyword: PositionKeyword) -> Self {
        Self::Keyword(keyword)
    }
}

impl From<Length> for PositionComponent {
    fn from(length: Length) -> Self {
        Self::Length(length)
    }
}

impl From<UnitValue> for PositionComponent {
    fn from(value: UnitValue) -> Self {
        Self::Length(Length::Value(value))
    }
}

bind_from!(
    PositionKeyword => PositionComponent,
    Length => PositionComponent,
    UnitValue => PositionComponent,
);

/// A two-axis `<position>`, used by `background-position`,
/// `object-position` and `transform-origin`.
///
/// ```rust
/// use cascada_values::{BackgroundPosition, PositionKeyword, percent};
///
/// let position = BackgroundPosition::at(PositionKeyword::Center, percent(25));
/// assert_eq!(position.to_string(), "center 25%");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundPosition {
    /// Horizontal component.
    pub x: PositionComponent,
    /// Vertical component.
    pub y: PositionComponent,
}

impl BackgroundPosition {
    /// A static position.
    #[must_use]
    pub fn at(x: impl Into<PositionComponent>, y: impl Into<PositionComponent>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// A position whose axes may be bound to state.
    pub fn new(
        x: impl Into<Binding<PositionComponent>>,
        y: impl Into<Binding<PositionComponent>>,
    ) -> Binding<Self> {
        let x: Binding<PositionComponent> = x.into();
        let y: Binding<PositionComponent> = y.into();
        (x, y).combine(|(x, y)| Self { x, y })
    }

    /// `center center`
    #[must_use]
    pub fn center() -> Self {
        Self::at(PositionKeyword::Center, PositionKeyword::Center)
    }
}

impl fmt::Display for BackgroundPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

keyword_enum! {
    /// Ending shape of a radial gradient.
    pub enum RadialShape("radial shape") {
        Circle = "circle",
        Ellipse = "ellipse",
    }
}

/// A gradient color stop with an optional position.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorStop {
    /// Stop color.
    pub color: Color,
    /// Where the stop sits along the gradient line.
    pub position: Option<Length>,
}

impl ColorStop {
    /// A stop at an explicit position.
    #[must_use]
    pub fn at(color: impl Into<Color>, position: impl Into<Length>) -> Self {
        Self {
            color: color.into(),
            position: Some(position.into()),
        }
    }
}

impl From<Color> for ColorStop {
    fn from(color: Color) -> Self {
        Self {
            color,
            position: None,
        }
    }
}

impl From<NamedColor> for ColorStop {
    fn from(color: NamedColor) -> Self {
        Self::from(Color::Named(color))
    }
}

impl fmt::Display for ColorStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = Joiner::new(f, " ");
        out.item(&self.color)?;
        out.opt(self.position.as_ref())
    }
}

/// `linear-gradient(...)`
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    /// Gradient line angle; CSS defaults to `180deg` when absent.
    pub angle: Option<UnitValue>,
    /// Color stops, in order.
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    /// A top-to-bottom gradient through `stops`.
    #[must_use]
    pub fn new<S: Into<ColorStop>>(stops: impl IntoIterator<Item = S>) -> Self {
        Self {
            angle: None,
            stops: stops.into_iter().map(Into::into).collect(),
        }
    }

    /// Sets the gradient line angle.
    #[must_use]
    pub fn angle(mut self, angle: UnitValue) -> Self {
        self.angle = Some(angle);
        self
    }
}

/// `radial-gradient(...)`
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    /// Ending shape; CSS defaults to `ellipse` when absent.
    pub shape: Option<RadialShape>,
    /// Color stops, in order.
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    /// An elliptical gradient through `stops`.
    #[must_use]
    pub fn new<S: Into<ColorStop>>(stops: impl IntoIterator<Item = S>) -> Self {
        Self {
            shape: None,
            stops: stops.into_iter().map(Into::into).collect(),
        }
    }

    /// Sets the ending shape.
    #[must_use]
    pub fn shape(mut self, shape: RadialShape) -> Self {
        self.shape = Some(shape);
        self
    }
}

/// A CSS `<image>` as used by `background-image`, `list-style-image` and
/// `mask-image`.
///
/// ```rust
/// use cascada_values::{Color, Image, LinearGradient, deg};
///
/// let image = Image::from(LinearGradient::new([Color::RED, Color::BLUE]).angle(deg(90)));
/// assert_eq!(image.to_string(), "linear-gradient(90deg, red, blue)");
/// assert_eq!(Image::url("a.png").to_string(), "url(\"a.png\")");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Image {
    /// `none`
    None,
    /// `url("...")`
    Url(String),
    /// `linear-gradient(...)`
    Linear(LinearGradient),
    /// `radial-gradient(...)`
    Radial(RadialGradient),
}

impl Image {
    /// A `url()` image.
    #[must_use]
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }
}

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Url(url) => {
                f.write_str("url(\"")?;
                for c in url.chars() {
                    if matches!(c, '"' | '\\') {
                        f.write_str("\\")?;
                    }
                    write!(f, "{c}")?;
                }
                f.write_str("\")")
            }
            Self::Linear(gradient) => {
                f.write_str("linear-gradient(")?;
                let mut out = Joiner::new(f, ", ");
                out.opt(gradient.angle.as_ref())?;
                out.all(&gradient.stops)?;
                f.write_str(")")
            }
            Self::Radial(gradient) => {
                f.write_str("radial-gradient(")?;
                let mut out = Joiner::new(f, ", ");
                out.opt(gradient.shape.as_ref())?;
                out.all(&gradient.stops)?;
                f.write_str(")")
            }
        }
    }
}

impl From<LinearGradient> for Image {
    fn from(gradient: LinearGradient) -> Self {
        Self::Linear(gradient)
    }
}

impl From<RadialGradient> for Image {
    fn from(gradient: RadialGradient) -> Self {
        Self::Radial(gradient)
    }
}

bind_from!(LinearGradient => Image, RadialGradient => Image);

/// The `background` shorthand.
///
/// Components are written in the order
/// `color image position [/ size] repeat attachment origin clip`, skipping
/// the ones that are absent. A size without a position is written after the
/// initial position `0% 0%`, since CSS only accepts a size behind a
/// position.
///
/// ```rust
/// use cascada_values::{Background, BackgroundRepeat, Color, Image};
///
/// let background = Background {
///     color: Some(Color::hex(0xffffff)),
///     image: Some(Image::url("bg.png")),
///     repeat: Some(BackgroundRepeat::NoRepeat),
///     ..Background::default()
/// };
/// assert_eq!(background.to_string(), "#ffffff url(\"bg.png\") no-repeat");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Background {
    /// `background-color`
    pub color: Option<Color>,
    /// `background-image`
    pub image: Option<Image>,
    /// `background-position`
    pub position: Option<BackgroundPosition>,
    /// `background-size`
    pub size: Option<BackgroundSize>,
    /// `background-repeat`
    pub repeat: Option<BackgroundRepeat>,
    /// `background-attachment`
    pub attachment: Option<BackgroundAttachment>,
    /// `background-origin`
    pub origin: Option<BoxEdge>,
    /// `background-clip`
    pub clip: Option<BoxEdge>,
}

impl Background {
    /// Starts a builder whose components may be bound to state.
    #[must_use]
    pub fn builder() -> BackgroundBuilder {
        BackgroundBuilder::default()
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::default() {
            return f.write_str("none");
        }
        let mut out = Joiner::new(f, " ");
        out.opt(self.color.as_ref())?;
        out.opt(self.image.as_ref())?;
        match (&self.position, &self.size) {
            (Some(position), Some(size)) => out.item(&format_args!("{position} / {size}"))?,
            (None, Some(size)) => out.item(&format_args!("0% 0% / {size}"))?,
            (Some(position), None) => out.item(position)?,
            (None, None) => {}
        }
        out.opt(self.repeat.as_ref())?;
        out.opt(self.attachment.as_ref())?;
        out.opt(self.origin.as_ref())?;
        out.opt(self.clip.as_ref())
    }
}

impl From<Color> for Background {
    fn from(color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }
}

bind_from!(Color => Background);

/// Builds a [`Background`] whose components may each be bound to state.
///
/// ```rust
/// use cascada_state::State;
/// use cascada_values::{Background, BackgroundRepeat, Color};
///
/// let tint = State::new(Color::hex(0x000000));
/// let background = Background::builder()
///     .color(&tint)
///     .repeat(BackgroundRepeat::RepeatX)
///     .build();
/// assert_eq!(background.get().to_string(), "#000000 repeat-x");
///
/// tint.set(Color::hex(0x336699));
/// assert_eq!(background.get().to_string(), "#336699 repeat-x");
/// ```
#[derive(Clone, Debug, Default)]
pub struct BackgroundBuilder {
    color: Option<Binding<Color>>,
    image: Option<Binding<Image>>,
    position: Option<Binding<BackgroundPosition>>,
    size: Option<Binding<BackgroundSize>>,
    repeat: Option<Binding<BackgroundRepeat>>,
    attachment: Option<Binding<BackgroundAttachment>>,
    origin: Option<Binding<BoxEdge>>,
    clip: Option<Binding<BoxEdge>>,
}

impl BackgroundBuilder {
    /// Sets the color.
    #[must_use]
    pub fn color(mut self, color: impl Into<Binding<Color>>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the image.
    #[must_use]
    pub fn image(mut self, image: impl Into<Binding<Image>>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Sets the position.
    #[must_use]
    pub fn position(mut self, position: impl Into<Binding<BackgroundPosition>>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Sets the size.
    #[must_use]
    pub fn size(mut self, size: impl Into<Binding<BackgroundSize>>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Sets the repeat style.
    #[must_use]
    pub fn repeat(mut self, repeat: impl Into<Binding<BackgroundRepeat>>) -> Self {
        self.repeat = Some(repeat.into());
        self
    }

    /// Sets the attachment.
    #[must_use]
    pub fn attachment(mut self, attachment: impl Into<Binding<BackgroundAttachment>>) -> Self {
        self.attachment = Some(attachment.into());
        self
    }

    /// Sets the origin box.
    #[must_use]
    pub fn origin(mut self, origin: impl Into<Binding<BoxEdge>>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Sets the clip box.
    #[must_use]
    pub fn clip(mut self, clip: impl Into<Binding<BoxEdge>>) -> Self {
        self.clip = Some(clip.into());
        self
    }

    fn snapshot(&self) -> Background {
        Background {
            color: current(&self.color),
            image: current(&self.image),
            position: current(&self.position),
            size: current(&self.size),
            repeat: current(&self.repeat),
            attachment: current(&self.attachment),
            origin: current(&self.origin),
            clip: current(&self.clip),
        }
    }

    /// Finishes the shorthand. The result is constant unless a component is
    /// bound to state.
    pub fn build(self) -> Binding<Background> {
        let sources: Vec<&dyn Observe> = [
            source(&self.color),
            source(&self.image),
            source(&self.position),
            source(&self.size),
            source(&self.repeat),
            source(&self.attachment),
            source(&self.origin),
            source(&self.clip),
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
    use crate::unit::{deg, percent, px};
    use cascada_state::State;

    #[test]
    fn size_keywords_and_pairs() {
        assert_eq!(BackgroundSize::Cover.to_string(), "cover");
        assert_eq!(BackgroundSize::from(px(10)).to_string(), "10px");
        let size = BackgroundSize::new(px(10), Length::Auto);
        assert_eq!(size.get().to_string(), "10px auto");
        assert!(!size.is_reactive());
    }

    #[test]
    fn size_follows_horizontal_state() {
        let h = State::new(Length::from(px(10)));
        let size = BackgroundSize::new(&h, px(20));
        assert_eq!(size.get().to_string(), "10px 20px");
        h.set(Length::from(px(15)));
        assert_eq!(size.get().to_string(), "15px 20px");
    }

    #[test]
    fn gradients() {
        let linear = LinearGradient::new([
            ColorStop::from(Color::RED),
            ColorStop::at(Color::BLUE, percent(50)),
        ])
        .angle(deg(45));
        assert_eq!(
            Image::from(linear).to_string(),
            "linear-gradient(45deg, red, blue 50%)"
        );
        let radial = RadialGradient::new([Color::WHITE, Color::BLACK]).shape(RadialShape::Circle);
        assert_eq!(
            Image::from(radial).to_string(),
            "radial-gradient(circle, white, black)"
        );
    }

    #[test]
    fn url_is_escaped() {
        assert_eq!(Image::url("a\"b.png").to_string(), "url(\"a\\\"b.png\")");
        assert_eq!(Image::None.to_string(), "none");
    }

    #[test]
    fn background_skips_absent_parts() {
        assert_eq!(Background::default().to_string(), "none");
        assert_eq!(Background::from(Color::RED).to_string(), "red");
        let background = Background {
            image: Some(Image::url("x.png")),
            position: Some(BackgroundPosition::center()),
            size: Some(BackgroundSize::Cover),
            ..Background::default()
        };
        assert_eq!(
            background.to_string(),
            "url(\"x.png\") center center / cover"
        );
        let background = Background {
            size: Some(BackgroundSize::Contain),
            clip: Some(BoxEdge::PaddingBox),
            ..Background::default()
        };
        assert_eq!(background.to_string(), "0% 0% / contain padding-box");
    }

    #[test]
    fn builder_without_state_is_constant() {
        let background = Background::builder()
            .color(Color::BLACK)
            .attachment(BackgroundAttachment::Fixed)
            .build();
        assert!(!background.is_reactive());
        assert_eq!(background.get().to_string(), "black fixed");
    }

    #[test]
    fn builder_tracks_position_state() {
        let x = State::new(PositionComponent::from(px(0)));
        let background = Background::builder()
            .position(BackgroundPosition::new(&x, PositionKeyword::Top))
            .build();
        assert_eq!(background.get().to_string(), "0px top");
        x.set(PositionComponent::from(percent(100)));
        assert_eq!(background.get().to_string(), "100% top");
    }
}
