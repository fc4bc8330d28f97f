// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `flex` shorthand.

use core::fmt;

use cascada_state::{Binding, Combine};

use crate::length::Length;
use crate::number::{IntoCssNumber, Number, write_number};
use crate::unit::UnitValue;

/// The `flex` shorthand.
///
/// ```rust
/// use cascada_values::{Flex, Length, px};
///
/// assert_eq!(Flex::None.to_string(), "none");
/// assert_eq!(Flex::grow(1).to_string(), "1");
/// assert_eq!(Flex::Full { grow: 2.0, shrink: 1.0, basis: Length::from(px(100)) }.to_string(), "2 1 100px");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Flex {
    /// `none`, the same as `0 0 auto`.
    None,
    /// `auto`, the same as `1 1 auto`.
    Auto,
    /// A lone grow factor, which CSS expands to `<grow> 1 0`.
    Grow(f32),
    /// All three components.
    Full {
        /// `flex-grow`
        grow: f32,
        /// `flex-shrink`
        shrink: f32,
        /// `flex-basis`
        basis: Length,
    },
}

impl Flex {
    /// A single grow factor, such as `flex: 1`.
    #[must_use]
    pub fn grow(grow: impl IntoCssNumber) -> Self {
        Self::Grow(grow.into_css_number())
    }

    /// All three components, each of which may be bound to state.
    pub fn new(
        grow: impl Into<Binding<Number>>,
        shrink: impl Into<Binding<Number>>,
        basis: impl Into<Binding<Length>>,
    ) -> Binding<Self> {
        let grow: Binding<Number> = grow.into();
        let shrink: Binding<Number> = shrink.into();
        let basis: Binding<Length> = basis.into();
        (grow, shrink, basis).combine(|(grow, shrink, basis)| Self::Full {
            grow: grow.get(),
            shrink: shrink.get(),
            basis,
        })
    }
}

impl fmt::Display for Flex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Auto => f.write_str("auto"),
            Self::Grow(grow) => write_number(f, *grow),
            Self::Full {
                grow,
                shrink,
                basis,
            } => {
                write_number(f, *grow)?;
                f.write_str(" ")?;
                write_number(f, *shrink)?;
                write!(f, " {basis}")
            }
        }
    }
}

impl From<UnitValue> for Flex {
    fn from(basis: UnitValue) -> Self {
        Self::Full {
            grow: 1.0,
            shrink: 1.0,
            basis: Length::Value(basis),
        }
    }
}

impl From<Number> for Flex {
    fn from(grow: Number) -> Self {
        Self::Grow(grow.get())
    }
}

bind_from!(UnitValue => Flex, Number => Flex);

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use crate::unit::{percent, px};
    use cascada_state::State;

    #[test]
    fn keywords_and_single_values() {
        assert_eq!(Flex::Auto.to_string(), "auto");
        assert_eq!(Flex::grow(0.5).to_string(), "0.5");
        assert_eq!(Flex::from(px(200)).to_string(), "1 1 200px");
    }

    #[test]
    fn grow_follows_state() {
        let grow = State::new(Number::new(1));
        let flex = Flex::new(&grow, Number::new(0), percent(25));
        assert_eq!(flex.get().to_string(), "1 0 25%");
        grow.set(Number::new(3));
        assert_eq!(flex.get().to_string(), "3 0 25%");
    }

    #[test]
    fn constant_without_state() {
        let flex = Flex::new(Number::new(0), Number::new(0), Length::Auto);
        assert!(!flex.is_reactive());
        assert_eq!(flex.get().to_string(), "0 0 auto");
    }
}
