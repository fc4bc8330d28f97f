// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rule-building trait.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use cascada_property::{Property, PropertyKey, PropertyValue};
use cascada_state::Binding;
use cascada_values::CssWide;

/// Something declarations can be appended to.
///
/// Only [`add_property`](Self::add_property) is required; the other methods
/// build a [`Property`] and forward to it. Property catalogues add their
/// fluent methods through extension traits blanket-implemented for every
/// `CssRulable`.
///
/// Declarations keep insertion order. Adding the same property twice keeps
/// both declarations.
pub trait CssRulable {
    /// Appends a declaration, vendor aliases included.
    fn add_property(&mut self, property: Property);

    /// Appends a typed declaration for `key`.
    fn add_value<V: PropertyValue>(&mut self, key: PropertyKey<V>, value: impl Into<Binding<V>>)
    where
        Self: Sized,
    {
        self.add_property(Property::new(key, value));
    }

    /// Appends a declaration from raw CSS text.
    fn add_raw(&mut self, name: impl Into<Cow<'static, str>>, css: impl Into<String>)
    where
        Self: Sized,
    {
        self.add_property(Property::raw(name, css));
    }

    /// Appends a declaration setting `key` to a CSS-wide keyword.
    fn reset<V>(&mut self, key: PropertyKey<V>, keyword: CssWide)
    where
        Self: Sized,
    {
        self.add_property(Property::wide(key, keyword));
    }
}

impl<R: CssRulable + ?Sized> CssRulable for &mut R {
    fn add_property(&mut self, property: Property) {
        (**self).add_property(property);
    }
}

/// A plain list of declarations.
///
/// `Vec`'s inherent methods shadow catalogue methods of the same name, so
/// `clear` and `resize` must be called through their trait on a list, as in
/// `BoxModelProperties::clear(list, Clear::Both)`. [`Rule`](crate::Rule) has
/// no such conflicts.
impl CssRulable for Vec<Property> {
    fn add_property(&mut self, property: Property) {
        self.push(property);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascada_values::{Color, Length, px};

    const WIDTH: PropertyKey<Length> = PropertyKey::new("width");
    const COLOR: PropertyKey<Color> = PropertyKey::new("color");

    #[test]
    fn provided_methods_forward() {
        let mut list: Vec<Property> = Vec::new();
        list.add_value(WIDTH, px(3));
        list.add_raw("display", "grid");
        list.reset(COLOR, CssWide::Unset);
        let css: Vec<_> = list.iter().map(|p| p.to_css(true)).collect();
        assert_eq!(css, ["width:3px", "display:grid", "color:unset"]);
    }

    #[test]
    fn mutable_references_are_rulable() {
        fn add_twice(mut target: impl CssRulable) {
            target.add_raw("order", "1");
            target.add_raw("order", "2");
        }
        let mut list: Vec<Property> = Vec::new();
        add_twice(&mut list);
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].css_value(), "2");
    }
}
