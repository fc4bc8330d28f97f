// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed property keys.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

/// A CSS property name tagged with the type of value it accepts.
///
/// The phantom type `V` is what makes the DSL typed: a key for
/// `border-style` only accepts a [`BorderStyle`](cascada_values::BorderStyle),
/// never a length.
///
/// # Example
///
/// ```rust
/// use cascada_property::PropertyKey;
/// use cascada_values::Length;
///
/// const WIDTH: PropertyKey<Length> = PropertyKey::new("width");
/// assert_eq!(WIDTH.name(), "width");
/// ```
///
/// Names are assumed to be unique and lowercase; nothing checks either.
pub struct PropertyKey<V> {
    name: &'static str,
    _marker: PhantomData<fn() -> V>,
}

impl<V> PropertyKey<V> {
    /// Creates a key for the given CSS property name.
    #[must_use]
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// Returns the CSS property name.
    #[must_use]
    #[inline]
    pub const fn name(self) -> &'static str {
        self.name
    }
}

// Manual trait implementations to avoid requiring V: Clone, etc.

impl<V> Copy for PropertyKey<V> {}

impl<V> Clone for PropertyKey<V> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> PartialEq for PropertyKey<V> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<V> Eq for PropertyKey<V> {}

impl<V> Hash for PropertyKey<V> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl<V> fmt::Debug for PropertyKey<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyKey")
            .field("name", &self.name)
            .field("type", &core::any::type_name::<V>())
            .finish()
    }
}

impl<V> fmt::Display for PropertyKey<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use alloc::format;
    use alloc::string::ToString;
    use cascada_values::{Color, Length};
    use std::collections::HashSet;

    const COLOR: PropertyKey<Color> = PropertyKey::new("color");

    #[test]
    fn key_is_copy_without_value_bounds() {
        struct NotClone;
        let key: PropertyKey<NotClone> = PropertyKey::new("x");
        let copy = key;
        assert_eq!(key, copy);
    }

    #[test]
    fn key_hash_uses_name() {
        let mut set = HashSet::new();
        set.insert(COLOR);
        set.insert(PropertyKey::new("color"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn key_debug_and_display() {
        let key: PropertyKey<Length> = PropertyKey::new("width");
        assert_eq!(key.to_string(), "width");
        let debug = format!("{key:?}");
        assert!(debug.contains("PropertyKey"));
        assert!(debug.contains("Length"));
    }
}
