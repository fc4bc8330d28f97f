// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Four-sided shorthands such as `margin` and `padding`.

use core::fmt;

use cascada_state::{Binding, Combine};

use crate::color::{Color, NamedColor};
use crate::keyword::BorderStyle;
use crate::length::Length;
use crate::number::Joiner;
use crate::unit::UnitValue;

/// The one-to-four value form used by `margin`, `padding`, `inset` and
/// friends.
///
/// Values are stored in the shortest form that was requested; no collapsing
/// of equal sides takes place.
///
/// ```rust
/// use cascada_values::{Edges, Length, px};
///
/// let edges = Edges::Axes(Length::from(px(4)), Length::Auto);
/// assert_eq!(edges.to_string(), "4px auto");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Edges<T> {
    /// Same value on every side.
    All(T),
    /// Vertical, then horizontal.
    Axes(T, T),
    /// Top, horizontal, then bottom.
    Three(T, T, T),
    /// Top, right, bottom, left.
    Each(T, T, T, T),
}

impl<T: Clone + 'static> Edges<T> {
    /// All four sides, bound to one value.
    pub fn all(value: impl Into<Binding<T>>) -> Binding<Self> {
        let value: Binding<T> = value.into();
        value.map(|value| Self::All(value.clone()))
    }

    /// Vertical and horizontal sides.
    pub fn axes(
        vertical: impl Into<Binding<T>>,
        horizontal: impl Into<Binding<T>>,
    ) -> Binding<Self> {
        let vertical: Binding<T> = vertical.into();
        let horizontal: Binding<T> = horizontal.into();
        (vertical, horizontal).combine(|(v, h)| Self::Axes(v, h))
    }

    /// Every side separately, clockwise from the top.
    pub fn each(
        top: impl Into<Binding<T>>,
        right: impl Into<Binding<T>>,
        bottom: impl Into<Binding<T>>,
        left: impl Into<Binding<T>>,
    ) -> Binding<Self> {
        let top: Binding<T> = top.into();
        let right: Binding<T> = right.into();
        let bottom: Binding<T> = bottom.into();
        let left: Binding<T> = left.into();
        (top, right, bottom, left).combine(|(t, r, b, l)| Self::Each(t, r, b, l))
    }
}

impl<T: fmt::Display> fmt::Display for Edges<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = Joiner::new(f, " ");
        match self {
            Self::All(a) => out.item(a),
            Self::Axes(a, b) => out.all([a, b]),
            Self::Three(a, b, c) => out.all([a, b, c]),
            Self::Each(a, b, c, d) => out.all([a, b, c, d]),
        }
    }
}

impl<T> From<T> for Edges<T> {
    fn from(value: T) -> Self {
        Self::All(value)
    }
}

impl From<UnitValue> for Edges<Length> {
    fn from(value: UnitValue) -> Self {
        Self::All(Length::Value(value))
    }
}

impl From<NamedColor> for Edges<Color> {
    fn from(value: NamedColor) -> Self {
        Self::All(Color::Named(value))
    }
}

bind_from!(
    UnitValue => Edges<Length>,
    Length => Edges<Length>,
    Color => Edges<Color>,
    NamedColor => Edges<Color>,
    BorderStyle => Edges<BorderStyle>,
);

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use crate::unit::{em, px};
    use cascada_state::State;

    #[test]
    fn forms() {
        assert_eq!(Edges::All(px(1)).to_string(), "1px");
        assert_eq!(Edges::Three(px(1), px(2), px(3)).to_string(), "1px 2px 3px");
        assert_eq!(
            Edges::Each(px(1), px(2), px(3), em(4)).to_string(),
            "1px 2px 3px 4em"
        );
    }

    #[test]
    fn plain_length_binds_as_all() {
        let binding: Binding<Edges<Length>> = px(8).into();
        assert_eq!(binding.get().to_string(), "8px");
        assert!(!binding.is_reactive());
    }

    #[test]
    fn axes_track_state() {
        let vertical = State::new(Length::from(px(2)));
        let edges = Edges::<Length>::axes(&vertical, Length::Auto);
        assert_eq!(edges.get().to_string(), "2px auto");
        vertical.set(Length::Zero);
        assert_eq!(edges.get().to_string(), "0 auto");
    }

    #[test]
    fn each_stays_constant_without_state() {
        let edges = Edges::<Length>::each(px(1), px(2), px(3), px(4));
        assert!(!edges.is_reactive());
        assert_eq!(edges.get().to_string(), "1px 2px 3px 4px");
    }

    #[test]
    fn colors_and_styles_bind_as_all() {
        let colors: Binding<Edges<Color>> = NamedColor::Silver.into();
        assert_eq!(colors.get().to_string(), "silver");
        let styles = Edges::<BorderStyle>::axes(BorderStyle::Solid, BorderStyle::Dashed);
        assert_eq!(styles.get().to_string(), "solid dashed");
    }
}
