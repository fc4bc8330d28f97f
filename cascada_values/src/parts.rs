// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional reactive components of a shorthand builder.

use cascada_state::{Binding, Observe};

/// The current value of an optional component.
pub(crate) fn current<T: Clone + 'static>(part: &Option<Binding<T>>) -> Option<T> {
    part.as_ref().map(Binding::get)
}

/// An optional component as a combine source.
pub(crate) fn source<T: Clone + 'static>(part: &Option<Binding<T>>) -> Option<&dyn Observe> {
    part.as_ref().map(|part| part as &dyn Observe)
}
