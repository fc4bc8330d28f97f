// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cascada Property: typed keys and reactive declarations.
//!
//! A [`PropertyKey`] pairs a CSS property name with the type of value it
//! accepts. A [`Property`] is one declaration built from a key and a value,
//! or from a [`State`](cascada_state::State) or derived value that it
//! follows for as long as it lives.
//!
//! ## Core Concepts
//!
//! - [`PropertyKey<V>`] - a `&'static str` name carrying the value type
//! - [`Property`] - the declaration, with its current CSS text
//! - [`VendorPrefix`] - prefixes a declaration is duplicated under
//! - [`ErasedValue`] - the typed value behind a declaration, type-erased
//!
//! ## Quick Start
//!
//! ```rust
//! use cascada_property::{Property, PropertyKey};
//! use cascada_state::State;
//! use cascada_values::{Color, NamedColor};
//!
//! const COLOR: PropertyKey<Color> = PropertyKey::new("color");
//!
//! let accent = State::new(Color::from(NamedColor::Teal));
//! let property = Property::new(COLOR, &accent);
//! assert_eq!(property.to_css(false), "color: teal;");
//!
//! accent.set(Color::hex(0xff8800));
//! assert_eq!(property.to_css(true), "color:#ff8800");
//! ```
//!
//! ## Change Notification
//!
//! Each mutation of an observed value re-serializes the declaration once and
//! then calls the handler installed with [`Property::set_change_handler`].
//! Rules use this hook to track which declarations changed.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod error;
mod key;
mod prefix;
mod property;
mod value;

pub use error::PropertyError;
pub use key::PropertyKey;
pub use prefix::VendorPrefix;
pub use property::Property;
pub use value::{ErasedValue, PropertyValue};
