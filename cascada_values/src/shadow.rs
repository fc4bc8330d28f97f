// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shadows and filters.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::color::Color;
use crate::length::Length;
use crate::number::{Joiner, write_number};
use crate::unit::UnitValue;

/// One `box-shadow` or `text-shadow` layer.
///
/// A spread radius needs a blur radius in front of it, so `0` is written for
/// the blur when only a spread was given.
///
/// ```rust
/// use cascada_values::{Color, Shadow, px};
///
/// let shadow = Shadow::new(px(0), px(2)).blur(px(4)).color(Color::rgba(0, 0, 0, 0.2));
/// assert_eq!(shadow.to_string(), "0px 2px 4px rgba(0, 0, 0, 0.2)");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Shadow {
    /// Draw inside the border box.
    pub inset: bool,
    /// Horizontal offset.
    pub x: Length,
    /// Vertical offset.
    pub y: Length,
    /// Blur radius.
    pub blur: Option<Length>,
    /// Spread radius.
    pub spread: Option<Length>,
    /// Shadow color; `currentcolor` when absent.
    pub color: Option<Color>,
}

impl Shadow {
    /// A hard shadow at the given offset.
    #[must_use]
    pub fn new(x: impl Into<Length>, y: impl Into<Length>) -> Self {
        Self {
            inset: false,
            x: x.into(),
            y: y.into(),
            blur: None,
            spread: None,
            color: None,
        }
    }

    /// Sets the blur radius.
    #[must_use]
    pub fn blur(mut self, blur: impl Into<Length>) -> Self {
        self.blur = Some(blur.into());
        self
    }

    /// Sets the spread radius.
    #[must_use]
    pub fn spread(mut self, spread: impl Into<Length>) -> Self {
        self.spread = Some(spread.into());
        self
    }

    /// Sets the color.
    #[must_use]
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Makes this an inner shadow.
    #[must_use]
    pub fn inset(mut self) -> Self {
        self.inset = true;
        self
    }
}

impl fmt::Display for Shadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = Joiner::new(f, " ");
        if self.inset {
            out.item(&"inset")?;
        }
        out.item(&self.x)?;
        out.item(&self.y)?;
        match (&self.blur, &self.spread) {
            (Some(blur), spread) => {
                out.item(blur)?;
                out.opt(spread.as_ref())?;
            }
            (None, Some(spread)) => {
                out.item(&Length::Zero)?;
                out.item(spread)?;
            }
            (None, None) => {}
        }
        out.opt(self.color.as_ref())
    }
}

/// A comma-separated list of shadows. An empty list serializes as `none`.
///
/// ```rust
/// use cascada_values::{Color, Shadow, Shadows, px};
///
/// let shadows = Shadows::from(Shadow::new(px(1), px(1)))
///     .and(Shadow::new(px(0), px(0)).spread(px(2)).color(Color::BLUE).inset());
/// assert_eq!(shadows.to_string(), "1px 1px, inset 0px 0px 0 2px blue");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Shadows(pub Vec<Shadow>);

impl Shadows {
    /// Appends another layer on top.
    #[must_use]
    pub fn and(mut self, shadow: Shadow) -> Self {
        self.0.push(shadow);
        self
    }
}

impl fmt::Display for Shadows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("none");
        }
        Joiner::new(f, ", ").all(&self.0)
    }
}

impl From<Shadow> for Shadows {
    fn from(shadow: Shadow) -> Self {
        Self(vec![shadow])
    }
}

bind_from!(Shadow => Shadows);

/// A filter function, as used by `filter` and `backdrop-filter`.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterFunction {
    /// `blur(radius)`
    Blur(Length),
    /// `brightness(amount)`
    Brightness(f32),
    /// `contrast(amount)`
    Contrast(f32),
    /// `grayscale(amount)`
    Grayscale(f32),
    /// `hue-rotate(angle)`
    HueRotate(UnitValue),
    /// `invert(amount)`
    Invert(f32),
    /// `opacity(amount)`
    Opacity(f32),
    /// `saturate(amount)`
    Saturate(f32),
    /// `sepia(amount)`
    Sepia(f32),
    /// `drop-shadow(shadow)`
    DropShadow(Shadow),
}

impl fmt::Display for FilterFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, amount) = match self {
            Self::Blur(radius) => return write!(f, "blur({radius})"),
            Self::HueRotate(angle) => return write!(f, "hue-rotate({angle})"),
            Self::DropShadow(shadow) => return write!(f, "drop-shadow({shadow})"),
            Self::Brightness(amount) => ("brightness", amount),
            Self::Contrast(amount) => ("contrast", amount),
            Self::Grayscale(amount) => ("grayscale", amount),
            Self::Invert(amount) => ("invert", amount),
            Self::Opacity(amount) => ("opacity", amount),
            Self::Saturate(amount) => ("saturate", amount),
            Self::Sepia(amount) => ("sepia", amount),
        };
        write!(f, "{name}(")?;
        write_number(f, *amount)?;
        f.write_str(")")
    }
}

/// The `filter` and `backdrop-filter` value. An empty list serializes as
/// `none`.
///
/// ```rust
/// use cascada_values::{Filter, FilterFunction, Length, px};
///
/// let filter = Filter::from(FilterFunction::Blur(Length::from(px(8))))
///     .and(FilterFunction::Saturate(1.8));
/// assert_eq!(filter.to_string(), "blur(8px) saturate(1.8)");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filter(pub Vec<FilterFunction>);

impl Filter {
    /// Appends another function.
    #[must_use]
    pub fn and(mut self, function: FilterFunction) -> Self {
        self.0.push(function);
        self
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("none");
        }
        Joiner::new(f, " ").all(&self.0)
    }
}

impl From<FilterFunction> for Filter {
    fn from(function: FilterFunction) -> Self {
        Self(vec![function])
    }
}

bind_from!(FilterFunction => Filter);

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use crate::unit::{deg, px};

    #[test]
    fn shadow_parts() {
        assert_eq!(Shadow::new(px(1), px(2)).to_string(), "1px 2px");
        assert_eq!(
            Shadow::new(px(1), px(2)).blur(px(3)).spread(px(4)).to_string(),
            "1px 2px 3px 4px"
        );
        assert_eq!(
            Shadow::new(px(0), px(1)).color(Color::BLACK).inset().to_string(),
            "inset 0px 1px black"
        );
    }

    #[test]
    fn empty_lists_are_none() {
        assert_eq!(Shadows::default().to_string(), "none");
        assert_eq!(Filter::default().to_string(), "none");
    }

    #[test]
    fn filter_functions() {
        assert_eq!(FilterFunction::Grayscale(1.0).to_string(), "grayscale(1)");
        assert_eq!(
            FilterFunction::HueRotate(deg(90)).to_string(),
            "hue-rotate(90deg)"
        );
        assert_eq!(
            FilterFunction::DropShadow(Shadow::new(px(0), px(0)).blur(px(2))).to_string(),
            "drop-shadow(0px 0px 2px)"
        );
    }
}
