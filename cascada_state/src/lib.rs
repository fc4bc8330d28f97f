// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cascada State: observable values for reactive style declarations.
//!
//! This crate provides the change-propagation layer that lets a CSS
//! declaration follow application state. It is deliberately small:
//! single-threaded, synchronous, with no scheduler and no batching.
//!
//! ## Core Concepts
//!
//! - [`State<T>`]: a shared cell with synchronous listeners.
//! - [`Derived<T>`]: a read-only value computed from other observables.
//! - [`Binding<T>`]: a constructor argument that is either a plain value or an
//!   observable. Every value constructor in Cascada accepts
//!   `impl Into<Binding<T>>`.
//! - [`Subscription`]: an RAII listener handle. Dropping it detaches the
//!   listener, so nothing outlives its owner.
//! - [`combine_latest`] and [`Combine`]: compose any number of static and
//!   observable inputs into one derived value.
//!
//! ## Quick Start
//!
//! ```rust
//! use cascada_state::{Binding, Combine, State};
//!
//! let h = State::new(10);
//! let v = State::new(20);
//!
//! let size = (Binding::<i32>::from(&h), Binding::<i32>::from(&v))
//!     .combine(|(h, v)| format!("{h}px {v}px"));
//! assert_eq!(size.get(), "10px 20px");
//!
//! h.set(15);
//! assert_eq!(size.get(), "15px 20px");
//! ```
//!
//! ## Threading
//!
//! All types here are `!Send`. Listeners run inline on the thread that
//! mutates the state.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod binding;
mod combine;
mod derived;
mod state;
mod subscription;

pub use binding::{Binding, Observe};
pub use combine::{Combine, combine_latest};
pub use derived::Derived;
pub use state::State;
pub use subscription::Subscription;
