// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors produced when parsing values from text.

use alloc::string::String;

use thiserror::Error;

/// Error returned by the `FromStr` implementations in this crate.
///
/// Typed constructors never fail; only parsing from CSS text does.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValueParseError {
    /// The input was empty or only whitespace.
    #[error("empty value")]
    Empty,
    /// A `#` color did not have 3, 4, 6 or 8 hex digits.
    #[error("invalid hex color `{0}`")]
    InvalidHex(String),
    /// The numeric part of a dimension could not be parsed.
    #[error("invalid number in `{0}`")]
    InvalidNumber(String),
    /// The unit suffix is not a known CSS unit.
    #[error("unknown unit `{unit}` in `{input}`")]
    UnknownUnit {
        /// The unit as written.
        unit: String,
        /// The whole input.
        input: String,
    },
    /// The keyword is not valid for the target type.
    #[error("unknown keyword `{keyword}` for {expected}")]
    UnknownKeyword {
        /// The keyword as written.
        keyword: String,
        /// Human-readable name of the value domain.
        expected: &'static str,
    },
}
