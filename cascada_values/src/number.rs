// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain numbers and the joining helper used by every composite value.

use core::fmt;

/// Conversion of Rust numeric types into CSS numbers.
///
/// Implemented for the common integer and float types so that unit
/// constructors such as [`px`](crate::px) accept `10`, `10_u32` or `1.5`
/// alike.
pub trait IntoCssNumber {
    /// Returns the value as a CSS number.
    fn into_css_number(self) -> f32;
}

macro_rules! impl_into_css_number {
    ($($ty:ty),*) => {
        $(
            impl IntoCssNumber for $ty {
                #[inline]
                fn into_css_number(self) -> f32 {
                    self as f32
                }
            }
        )*
    };
}

impl_into_css_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl IntoCssNumber for f64 {
    #[inline]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "CSS numbers are single precision"
    )]
    fn into_css_number(self) -> f32 {
        self as f32
    }
}

impl IntoCssNumber for f32 {
    #[inline]
    fn into_css_number(self) -> f32 {
        self
    }
}

/// A unitless CSS `<number>`.
///
/// Serializes without a trailing `.0`, and negative zero renders as `0`.
///
/// ```rust
/// use cascada_values::Number;
///
/// assert_eq!(Number::new(2).to_string(), "2");
/// assert_eq!(Number::new(0.5).to_string(), "0.5");
/// assert_eq!(Number::new(-0.0).to_string(), "0");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Number(pub f32);

impl Number {
    /// Creates a number from any supported numeric type.
    #[must_use]
    pub fn new(value: impl IntoCssNumber) -> Self {
        Self(value.into_css_number())
    }

    /// Returns the raw value.
    #[must_use]
    pub fn get(self) -> f32 {
        self.0
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_number(f, self.0)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Self(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

pub(crate) fn write_number(f: &mut fmt::Formatter<'_>, value: f32) -> fmt::Result {
    if value == 0.0 {
        f.write_str("0")
    } else {
        write!(f, "{value}")
    }
}

/// Writes items separated by `sep`, skipping absent ones.
///
/// Separators are only emitted between items that are actually written, so
/// omitted components never leave doubled or dangling separators behind.
pub(crate) struct Joiner<'a, 'f> {
    f: &'a mut fmt::Formatter<'f>,
    sep: &'static str,
    first: bool,
}

impl<'a, 'f> Joiner<'a, 'f> {
    pub(crate) fn new(f: &'a mut fmt::Formatter<'f>, sep: &'static str) -> Self {
        Self {
            f,
            sep,
            first: true,
        }
    }

    pub(crate) fn item(&mut self, value: &dyn fmt::Display) -> fmt::Result {
        if !self.first {
            self.f.write_str(self.sep)?;
        }
        self.first = false;
        write!(self.f, "{value}")
    }

    pub(crate) fn opt<T: fmt::Display>(&mut self, value: Option<&T>) -> fmt::Result {
        match value {
            Some(value) => self.item(value),
            None => Ok(()),
        }
    }

    pub(crate) fn all<T: fmt::Display>(
        &mut self,
        values: impl IntoIterator<Item = T>,
    ) -> fmt::Result {
        for value in values {
            self.item(&value)?;
        }
        Ok(())
    }
}
