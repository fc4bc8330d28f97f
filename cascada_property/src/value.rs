// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property values and their type-erased snapshots.
//!
//! A [`Property`](crate::Property) stores the last typed value it saw as an
//! [`ErasedValue`], so rules can hold declarations of every value type in one
//! list and still hand the typed value back.

use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

/// A value that can sit on the right-hand side of a declaration.
///
/// Anything that renders itself as CSS text and can be cloned qualifies.
pub trait PropertyValue: fmt::Display + Clone + 'static {}

impl<T: fmt::Display + Clone + 'static> PropertyValue for T {}

/// A type-erased property value.
///
/// `Display` renders the wrapped value's CSS text.
///
/// # Example
///
/// ```rust
/// use cascada_property::ErasedValue;
/// use cascada_values::{Length, px};
///
/// let value = ErasedValue::new(Length::from(px(4)));
/// assert!(value.is::<Length>());
/// assert_eq!(value.downcast_ref::<Length>(), Some(&Length::from(px(4))));
/// assert_eq!(value.to_string(), "4px");
/// ```
pub struct ErasedValue {
    inner: Box<dyn ErasedValueTrait>,
    type_id: TypeId,
}

impl ErasedValue {
    /// Wraps a concrete value.
    #[must_use]
    pub fn new<T: PropertyValue>(value: T) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            inner: Box::new(value),
        }
    }

    /// Returns the [`TypeId`] of the contained value.
    #[must_use]
    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns `true` if the contained value is of type `T`.
    #[must_use]
    #[inline]
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Attempts to downcast to a reference of type `T`.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        if self.is::<T>() {
            self.inner.as_any().downcast_ref()
        } else {
            None
        }
    }
}

impl Clone for ErasedValue {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone_boxed(),
            type_id: self.type_id,
        }
    }
}

impl fmt::Display for ErasedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.write_css(f)
    }
}

impl fmt::Debug for ErasedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedValue")
            .field("type_id", &self.type_id)
            .field("css", &format_args!("{self}"))
            .finish()
    }
}

trait ErasedValueTrait: Any {
    fn as_any(&self) -> &dyn Any;
    fn clone_boxed(&self) -> Box<dyn ErasedValueTrait>;
    fn write_css(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<T: PropertyValue> ErasedValueTrait for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_boxed(&self) -> Box<dyn ErasedValueTrait> {
        Box::new(self.clone())
    }

    fn write_css(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;
    use cascada_values::{Color, Length, NamedColor};

    #[test]
    fn downcast_checks_type() {
        let value = ErasedValue::new(Color::RED);
        assert!(value.is::<Color>());
        assert!(!value.is::<NamedColor>());
        assert_eq!(value.downcast_ref::<Color>(), Some(&Color::RED));
        assert_eq!(value.downcast_ref::<Length>(), None);
        assert_eq!(value.type_id(), TypeId::of::<Color>());
    }

    #[test]
    fn clone_keeps_value_and_css() {
        let value = ErasedValue::new(Length::Auto);
        let cloned = value.clone();
        assert_eq!(cloned.downcast_ref::<Length>(), Some(&Length::Auto));
        assert_eq!(cloned.to_string(), "auto");
        assert_eq!(value.to_string(), "auto");
    }

    #[test]
    fn debug_shows_css() {
        let value = ErasedValue::new(Color::hex(0x00ff00));
        let debug = format!("{value:?}");
        assert!(debug.contains("ErasedValue"));
        assert!(debug.contains("#00ff00"));
    }
}
