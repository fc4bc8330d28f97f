// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cascada Values: typed CSS value domains.
//!
//! Every property in Cascada takes a value from one of the types in this
//! crate. Each type renders the exact CSS text a person would write for it
//! through [`core::fmt::Display`], so serialization is simply `to_string()`.
//!
//! ## Core Concepts
//!
//! ### Scalars
//!
//! - [`UnitValue`] pairs a number with a [`Unit`]. Free constructors such as
//!   [`px`], [`percent`] and [`ms`] accept integers and floats alike.
//! - [`Length`] adds the sizing keywords and `calc()`/`var()` to dimensions.
//! - [`Color`] covers hex, functional and named colors.
//! - Keyword-only properties get a dedicated enum each, see [`keyword`].
//!
//! ### Shorthands
//!
//! Composite values ([`Background`], [`Font`], [`Border`], [`Edges`],
//! [`GridTemplate`], [`Transition`] and friends) join their components the
//! way CSS does: spaces between components, commas between list entries and
//! `/` between halves. Optional components that are absent are skipped
//! without leaving stray separators.
//!
//! ### Reactive constructors
//!
//! Constructors that return [`Binding<Self>`](cascada_state::Binding) accept
//! `impl Into<Binding<_>>` for every component, so any mix of plain values
//! and [`State`](cascada_state::State)s may be passed. The result
//! recomputes whenever one of the observed components changes, and stays a
//! plain constant when none of them is observable.
//!
//! ```rust
//! use cascada_state::State;
//! use cascada_values::{BackgroundSize, Length, px};
//!
//! let h = State::new(Length::from(px(10)));
//! let size = BackgroundSize::new(&h, px(20));
//! assert_eq!(size.get().to_string(), "10px 20px");
//!
//! h.set(Length::from(px(15)));
//! assert_eq!(size.get().to_string(), "15px 20px");
//! ```
//!
//! ### Parsing
//!
//! Scalars and keywords also implement [`core::str::FromStr`], returning
//! [`ValueParseError`] for malformed text. Typed construction never fails.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

#[macro_use]
mod macros;

mod background;
mod border;
mod color;
mod edges;
mod error;
mod flex;
mod font;
mod grid;
mod length;
mod number;
mod parts;
mod shadow;
mod transform;
mod unit;

pub mod keyword;

pub use background::{
    Background, BackgroundBuilder, BackgroundPosition, BackgroundSize, ColorStop, Image,
    LinearGradient, PositionComponent, PositionKeyword, RadialGradient, RadialShape,
};
pub use border::{Border, BorderRadius};
pub use color::{Color, NamedColor};
pub use edges::Edges;
pub use error::ValueParseError;
pub use flex::Flex;
pub use font::{
    FamilyName, Font, FontBuilder, FontFamily, FontSize, FontSizeKeyword, FontWeight,
    GenericFamily, LineHeight,
};
pub use grid::{
    GridArea, GridLine, GridPlacement, GridTemplate, GridTemplateAreas, RepeatCount, TrackList,
    TrackListItem, TrackSize,
};
pub use keyword::*;
pub use length::Length;
pub use number::{IntoCssNumber, Number};
pub use shadow::{Filter, FilterFunction, Shadow, Shadows};
pub use transform::{
    StepPosition, TimingFunction, Transform, TransformFunction, Transition, TransitionItem,
};
pub use unit::{
    Unit, UnitValue, ch, deg, em, fr, ms, pt, percent, px, rad, rem, s, turn, vh, vmax, vmin, vw,
};
