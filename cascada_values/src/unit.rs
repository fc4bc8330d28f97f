// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dimensions: a number paired with a CSS unit.

use alloc::borrow::ToOwned;
use core::fmt;
use core::str::FromStr;

use crate::error::ValueParseError;
use crate::number::{IntoCssNumber, write_number};

/// A CSS unit suffix.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Unit {
    /// `px`
    Px,
    /// `em`
    Em,
    /// `rem`
    Rem,
    /// `%`
    Percent,
    /// `vw`
    Vw,
    /// `vh`
    Vh,
    /// `vmin`
    Vmin,
    /// `vmax`
    Vmax,
    /// `ch`
    Ch,
    /// `ex`
    Ex,
    /// `cm`
    Cm,
    /// `mm`
    Mm,
    /// `in`
    In,
    /// `pt`
    Pt,
    /// `pc`
    Pc,
    /// `fr`
    Fr,
    /// `deg`
    Deg,
    /// `rad`
    Rad,
    /// `grad`
    Grad,
    /// `turn`
    Turn,
    /// `s`
    S,
    /// `ms`
    Ms,
    /// `dpi`
    Dpi,
    /// `dppx`
    Dppx,
}

impl Unit {
    const ALL: [Self; 24] = [
        Self::Px,
        Self::Em,
        Self::Rem,
        Self::Percent,
        Self::Vw,
        Self::Vh,
        Self::Vmin,
        Self::Vmax,
        Self::Ch,
        Self::Ex,
        Self::Cm,
        Self::Mm,
        Self::In,
        Self::Pt,
        Self::Pc,
        Self::Fr,
        Self::Deg,
        Self::Rad,
        Self::Grad,
        Self::Turn,
        Self::S,
        Self::Ms,
        Self::Dpi,
        Self::Dppx,
    ];

    /// Returns the unit as written in CSS.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Em => "em",
            Self::Rem => "rem",
            Self::Percent => "%",
            Self::Vw => "vw",
            Self::Vh => "vh",
            Self::Vmin => "vmin",
            Self::Vmax => "vmax",
            Self::Ch => "ch",
            Self::Ex => "ex",
            Self::Cm => "cm",
            Self::Mm => "mm",
            Self::In => "in",
            Self::Pt => "pt",
            Self::Pc => "pc",
            Self::Fr => "fr",
            Self::Deg => "deg",
            Self::Rad => "rad",
            Self::Grad => "grad",
            Self::Turn => "turn",
            Self::S => "s",
            Self::Ms => "ms",
            Self::Dpi => "dpi",
            Self::Dppx => "dppx",
        }
    }

    /// Looks up a unit by its CSS suffix, ignoring ASCII case.
    #[must_use]
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.as_str().eq_ignore_ascii_case(suffix))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A number with a unit, such as `10px` or `50%`.
///
/// ```rust
/// use cascada_values::{Unit, UnitValue, px};
///
/// assert_eq!(px(10).to_string(), "10px");
/// assert_eq!(UnitValue::new(1.5, Unit::Em).to_string(), "1.5em");
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UnitValue {
    /// The numeric part.
    pub value: f32,
    /// The unit suffix.
    pub unit: Unit,
}

impl UnitValue {
    /// Creates a dimension.
    #[must_use]
    pub fn new(value: impl IntoCssNumber, unit: Unit) -> Self {
        Self {
            value: value.into_css_number(),
            unit,
        }
    }

    /// Returns the same unit with a negated value.
    #[must_use]
    pub fn negate(self) -> Self {
        Self {
            value: -self.value,
            unit: self.unit,
        }
    }
}

impl fmt::Display for UnitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_number(f, self.value)?;
        f.write_str(self.unit.as_str())
    }
}

impl FromStr for UnitValue {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(ValueParseError::Empty);
        }
        let split = input
            .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+')))
            .unwrap_or(input.len());
        let (number, suffix) = input.split_at(split);
        let value: f32 = number
            .parse()
            .map_err(|_| ValueParseError::InvalidNumber(input.to_owned()))?;
        let unit = Unit::from_suffix(suffix).ok_or_else(|| ValueParseError::UnknownUnit {
            unit: suffix.to_owned(),
            input: input.to_owned(),
        })?;
        Ok(Self { value, unit })
    }
}

macro_rules! unit_constructors {
    ($($(#[$meta:meta])* $name:ident => $unit:ident;)*) => {
        $(
            $(#[$meta])*
            #[must_use]
            pub fn $name(value: impl IntoCssNumber) -> UnitValue {
                UnitValue::new(value, Unit::$unit)
            }
        )*
    };
}

unit_constructors! {
    /// Pixels: `px(10)` is `10px`.
    px => Px;
    /// Font-relative: `em(1.5)` is `1.5em`.
    em => Em;
    /// Root font-relative: `rem(2)` is `2rem`.
    rem => Rem;
    /// Percentage: `percent(50)` is `50%`.
    percent => Percent;
    /// Viewport width: `vw(100)` is `100vw`.
    vw => Vw;
    /// Viewport height: `vh(100)` is `100vh`.
    vh => Vh;
    /// Smaller viewport dimension.
    vmin => Vmin;
    /// Larger viewport dimension.
    vmax => Vmax;
    /// Width of the `0` glyph.
    ch => Ch;
    /// Points.
    pt => Pt;
    /// Grid fraction: `fr(1)` is `1fr`.
    fr => Fr;
    /// Degrees: `deg(45)` is `45deg`.
    deg => Deg;
    /// Radians.
    rad => Rad;
    /// Full turns.
    turn => Turn;
    /// Seconds: `s(0.3)` is `0.3s`.
    s => S;
    /// Milliseconds: `ms(200)` is `200ms`.
    ms => Ms;
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn constructors_serialize() {
        assert_eq!(px(10).to_string(), "10px");
        assert_eq!(percent(50).to_string(), "50%");
        assert_eq!(em(1.25).to_string(), "1.25em");
        assert_eq!(ms(200).to_string(), "200ms");
        assert_eq!(s(0.3).to_string(), "0.3s");
        assert_eq!(fr(1).to_string(), "1fr");
        assert_eq!(px(0).to_string(), "0px");
    }

    #[test]
    fn negate() {
        assert_eq!(px(4).negate().to_string(), "-4px");
    }

    #[test]
    fn parse_dimension() {
        assert_eq!("10px".parse::<UnitValue>(), Ok(px(10)));
        assert_eq!(" 1.5EM ".parse::<UnitValue>(), Ok(em(1.5)));
        assert_eq!("-2rem".parse::<UnitValue>(), Ok(rem(-2)));
        assert_eq!("50%".parse::<UnitValue>(), Ok(percent(50)));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<UnitValue>(), Err(ValueParseError::Empty));
        assert!(matches!(
            "10parsecs".parse::<UnitValue>(),
            Err(ValueParseError::UnknownUnit { .. })
        ));
        assert!(matches!(
            "px".parse::<UnitValue>(),
            Err(ValueParseError::InvalidNumber(_))
        ));
    }
}
