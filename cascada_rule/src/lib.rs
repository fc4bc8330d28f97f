// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cascada Rule: style rules and stylesheets.
//!
//! A [`Rule`] is a selector plus an ordered list of
//! [`Property`](cascada_property::Property) declarations. Rules implement
//! [`CssRulable`], the trait property catalogues extend with one fluent
//! method per CSS property.
//!
//! Rules watch their reactive declarations. When an observed value changes,
//! the rule records the declaration as changed and tells its observers, so a
//! renderer can patch just that declaration.
//!
//! ## Quick Start
//!
//! ```rust
//! use cascada_property::PropertyKey;
//! use cascada_rule::{CssRulable, Rule, SerializeOptions, StyleSheet};
//! use cascada_state::State;
//! use cascada_values::{Color, NamedColor};
//!
//! const COLOR: PropertyKey<Color> = PropertyKey::new("color");
//!
//! let theme = State::new(Color::from(NamedColor::Black));
//! let mut heading = Rule::new("h1");
//! heading.add_value(COLOR, &theme);
//!
//! let sheet = StyleSheet::new().rule(heading);
//! theme.set(Color::WHITE);
//! assert_eq!(sheet.to_css(&SerializeOptions::MINIFIED), "h1{color:white}");
//! ```
//!
//! Rendering is configured with [`SerializeOptions`].
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod options;
mod rulable;
mod rule;
mod sheet;

pub use options::SerializeOptions;
pub use rulable::CssRulable;
pub use rule::Rule;
pub use sheet::StyleSheet;
