// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sizes and offsets.

use alloc::borrow::ToOwned;
use alloc::format;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::error::ValueParseError;
use crate::unit::UnitValue;

/// A length, percentage or sizing keyword.
///
/// This is the value domain shared by widths, heights, margins, offsets and
/// the components of most shorthands.
///
/// ```rust
/// use cascada_values::{Length, px};
///
/// assert_eq!(Length::from(px(12)).to_string(), "12px");
/// assert_eq!(Length::Auto.to_string(), "auto");
/// assert_eq!(Length::calc("100% - 2em").to_string(), "calc(100% - 2em)");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Length {
    /// A dimension such as `10px` or `50%`.
    Value(UnitValue),
    /// Unitless `0`.
    Zero,
    /// `auto`
    Auto,
    /// `min-content`
    MinContent,
    /// `max-content`
    MaxContent,
    /// `fit-content`
    FitContent,
    /// `calc(<expression>)`
    Calc(String),
    /// `var(<custom property>)`
    Var(String),
}

impl Length {
    /// Creates a `calc()` length from a raw expression.
    #[must_use]
    pub fn calc(expression: impl Into<String>) -> Self {
        Self::Calc(expression.into())
    }

    /// Creates a `var()` reference; the leading `--` is added when missing.
    #[must_use]
    pub fn var(name: impl AsRef<str>) -> Self {
        Self::Var(custom_name(name.as_ref()))
    }
}

pub(crate) fn custom_name(name: &str) -> String {
    if name.starts_with("--") {
        name.to_owned()
    } else {
        format!("--{name}")
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => value.fmt(f),
            Self::Zero => f.write_str("0"),
            Self::Auto => f.write_str("auto"),
            Self::MinContent => f.write_str("min-content"),
            Self::MaxContent => f.write_str("max-content"),
            Self::FitContent => f.write_str("fit-content"),
            Self::Calc(expression) => write!(f, "calc({expression})"),
            Self::Var(name) => write!(f, "var({name})"),
        }
    }
}

impl From<UnitValue> for Length {
    fn from(value: UnitValue) -> Self {
        Self::Value(value)
    }
}

bind_from!(UnitValue => Length);

impl FromStr for Length {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        match input.to_ascii_lowercase().as_str() {
            "" => Err(ValueParseError::Empty),
            "0" => Ok(Self::Zero),
            "auto" => Ok(Self::Auto),
            "min-content" => Ok(Self::MinContent),
            "max-content" => Ok(Self::MaxContent),
            "fit-content" => Ok(Self::FitContent),
            _ => input.parse().map(Self::Value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use crate::unit::{percent, px};
    use cascada_state::{Binding, State};

    #[test]
    fn keywords() {
        assert_eq!(Length::Zero.to_string(), "0");
        assert_eq!(Length::MinContent.to_string(), "min-content");
        assert_eq!(Length::FitContent.to_string(), "fit-content");
    }

    #[test]
    fn var_adds_dashes() {
        assert_eq!(Length::var("gutter").to_string(), "var(--gutter)");
        assert_eq!(Length::var("--gutter").to_string(), "var(--gutter)");
    }

    #[test]
    fn parse() {
        assert_eq!("auto".parse::<Length>(), Ok(Length::Auto));
        assert_eq!("0".parse::<Length>(), Ok(Length::Zero));
        assert_eq!("50%".parse::<Length>(), Ok(Length::Value(percent(50))));
        assert_eq!("  ".parse::<Length>(), Err(ValueParseError::Empty));
    }

    #[test]
    fn unit_value_binds_as_length() {
        let binding: Binding<Length> = px(3).into();
        assert_eq!(binding.get(), Length::Value(px(3)));

        let state = State::new(px(1));
        let mapped = Binding::<UnitValue>::from(&state).map(|v| Length::from(*v));
        state.set(px(2));
        assert_eq!(mapped.get().to_string(), "2px");
    }
}
