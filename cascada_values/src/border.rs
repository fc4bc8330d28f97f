// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Border and outline shorthands.

use alloc::boxed::Box;
use core::fmt;

use cascada_state::{Binding, Combine};

use crate::color::Color;
use crate::keyword::BorderStyle;
use crate::length::Length;
use crate::number::Joiner;
use crate::unit::UnitValue;

/// The `border-radius` shorthand.
///
/// Corners are written clockwise from the top-left; corners that were never
/// set are skipped rather than filled in. An elliptical radius carries its
/// vertical radii as a second `BorderRadius` written after `/`.
///
/// ```rust
/// use cascada_values::{BorderRadius, percent, px};
///
/// let radius = BorderRadius::default().top_left(px(10)).bottom_right(px(5));
/// assert_eq!(radius.to_string(), "10px 5px");
///
/// let oval = BorderRadius::from(percent(50)).elliptical(BorderRadius::from(percent(30)));
/// assert_eq!(oval.to_string(), "50% / 30%");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BorderRadius {
    /// Top-left corner.
    pub top_left: Option<Length>,
    /// Top-right corner.
    pub top_right: Option<Length>,
    /// Bottom-right corner.
    pub bottom_right: Option<Length>,
    /// Bottom-left corner.
    pub bottom_left: Option<Length>,
    /// Vertical radii of an elliptical corner shape.
    pub vertical: Option<Box<Self>>,
}

impl BorderRadius {
    /// The same radius on every corner.
    pub fn all(radius: impl Into<Binding<Length>>) -> Binding<Self> {
        let radius: Binding<Length> = radius.into();
        radius.map(|radius| Self {
            top_left: Some(radius.clone()),
            ..Self::default()
        })
    }

    /// Every corner separately, clockwise from the top-left.
    pub fn corners(
        top_left: impl Into<Binding<Length>>,
        top_right: impl Into<Binding<Length>>,
        bottom_right: impl Into<Binding<Length>>,
        bottom_left: impl Into<Binding<Length>>,
    ) -> Binding<Self> {
        let top_left: Binding<Length> = top_left.into();
        let top_right: Binding<Length> = top_right.into();
        let bottom_right: Binding<Length> = bottom_right.into();
        let bottom_left: Binding<Length> = bottom_left.into();
        (top_left, top_right, bottom_right, bottom_left).combine(|(tl, tr, br, bl)| Self {
            top_left: Some(tl),
            top_right: Some(tr),
            bottom_right: Some(br),
            bottom_left: Some(bl),
            vertical: None,
        })
    }

    /// Sets the top-left corner.
    #[must_use]
    pub fn top_left(mut self, radius: impl Into<Length>) -> Self {
        self.top_left = Some(radius.into());
        self
    }

    /// Sets the top-right corner.
    #[must_use]
    pub fn top_right(mut self, radius: impl Into<Length>) -> Self {
        self.top_right = Some(radius.into());
        self
    }

    /// Sets the bottom-right corner.
    #[must_use]
    pub fn bottom_right(mut self, radius: impl Into<Length>) -> Self {
        self.bottom_right = Some(radius.into());
        self
    }

    /// Sets the bottom-left corner.
    #[must_use]
    pub fn bottom_left(mut self, radius: impl Into<Length>) -> Self {
        self.bottom_left = Some(radius.into());
        self
    }

    /// Sets the vertical radii, making every corner elliptical.
    #[must_use]
    pub fn elliptical(mut self, vertical: Self) -> Self {
        self.vertical = Some(Box::new(vertical));
        self
    }

    fn is_empty(&self) -> bool {
        self.top_left.is_none()
            && self.top_right.is_none()
            && self.bottom_right.is_none()
            && self.bottom_left.is_none()
    }
}

impl fmt::Display for BorderRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("0");
        }
        let mut out = Joiner::new(f, " ");
        out.opt(self.top_left.as_ref())?;
        out.opt(self.top_right.as_ref())?;
        out.opt(self.bottom_right.as_ref())?;
        out.opt(self.bottom_left.as_ref())?;
        if let Some(vertical) = &self.vertical {
            write!(f, " / {vertical}")?;
        }
        Ok(())
    }
}

impl From<Length> for BorderRadius {
    fn from(radius: Length) -> Self {
        Self::default().top_left(radius)
    }
}

impl From<UnitValue> for BorderRadius {
    fn from(radius: UnitValue) -> Self {
        Self::default().top_left(radius)
    }
}

bind_from!(UnitValue => BorderRadius, Length => BorderRadius);

/// The `border`, `border-<side>` and `outline` shorthands.
///
/// ```rust
/// use cascada_values::{Border, BorderStyle, Color, px};
///
/// let border = Border::default().width(px(1)).style(BorderStyle::Solid).color(Color::hex(0xdddddd));
/// assert_eq!(border.to_string(), "1px solid #dddddd");
/// assert_eq!(Border::default().style(BorderStyle::Dashed).to_string(), "dashed");
/// assert_eq!(Border::default().to_string(), "none");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Border {
    /// Line width.
    pub width: Option<Length>,
    /// Line style.
    pub style: Option<BorderStyle>,
    /// Line color.
    pub color: Option<Color>,
}

impl Border {
    /// A border with every component bound.
    pub fn new(
        width: impl Into<Binding<Length>>,
        style: impl Into<Binding<BorderStyle>>,
        color: impl Into<Binding<Color>>,
    ) -> Binding<Self> {
        let width: Binding<Length> = width.into();
        let style: Binding<BorderStyle> = style.into();
        let color: Binding<Color> = color.into();
        (width, style, color).combine(|(width, style, color)| Self {
            width: Some(width),
            style: Some(style),
            color: Some(color),
        })
    }

    /// Sets the line width.
    #[must_use]
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Sets the line style.
    #[must_use]
    pub fn style(mut self, style: BorderStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Sets the line color.
    #[must_use]
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width.is_none() && self.style.is_none() && self.color.is_none() {
            return f.write_str("none");
        }
        let mut out = Joiner::new(f, " ");
        out.opt(self.width.as_ref())?;
        out.opt(self.style.as_ref())?;
        out.opt(self.color.as_ref())
    }
}

impl From<BorderStyle> for Border {
    fn from(style: BorderStyle) -> Self {
        Self::default().style(style)
    }
}

bind_from!(BorderStyle => Border);
