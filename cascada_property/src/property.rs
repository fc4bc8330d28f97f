// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reactive declarations.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::string::{String, ToString};
use core::any::Any;
use core::cell::RefCell;
use core::fmt;

use cascada_state::{Binding, Subscription};
use cascada_values::CssWide;
use smallvec::SmallVec;
use tracing::trace;

use crate::error::PropertyError;
use crate::key::PropertyKey;
use crate::prefix::VendorPrefix;
use crate::value::{ErasedValue, PropertyValue};

type ChangeHandler = Rc<dyn Fn(&str)>;

/// The value side of a declaration, shared by the property and its listener.
struct ValueCell {
    css: RefCell<String>,
    typed: RefCell<Option<ErasedValue>>,
    handler: RefCell<Option<ChangeHandler>>,
}

impl ValueCell {
    fn new(css: String, typed: Option<ErasedValue>) -> Rc<Self> {
        Rc::new(Self {
            css: RefCell::new(css),
            typed: RefCell::new(typed),
            handler: RefCell::new(None),
        })
    }

    fn store<V: PropertyValue>(&self, name: &str, value: &V) {
        let css = value.to_string();
        trace!(property = name, value = %css, "declaration updated");
        *self.typed.borrow_mut() = Some(ErasedValue::new(value.clone()));
        *self.css.borrow_mut() = css;
        let handler = self.handler.borrow().clone();
        if let Some(handler) = handler {
            let css = self.css.borrow().clone();
            handler(&css);
        }
    }
}

/// One CSS declaration: a property name and its serialized value.
///
/// A property built from a [`State`](cascada_state::State) or a derived
/// value follows it: every notification re-serializes the value in place
/// and then calls the change handler exactly once. The listener is owned by
/// the property and is removed when the property is dropped.
///
/// Vendor-prefixed aliases share the value cell of the unprefixed
/// declaration, so they can never serialize differently.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use cascada_property::{Property, PropertyKey, VendorPrefix};
/// use cascada_state::State;
/// use cascada_values::{Hyphens, Length, px};
///
/// const WIDTH: PropertyKey<Length> = PropertyKey::new("width");
///
/// let width = State::new(Length::from(px(100)));
/// let property = Property::new(WIDTH, &width);
/// assert_eq!(property.css_value(), "100px");
///
/// let calls = Rc::new(Cell::new(0));
/// property.set_change_handler({
///     let calls = calls.clone();
///     move |_| calls.set(calls.get() + 1)
/// });
/// width.set(Length::Auto);
/// assert_eq!(property.css_value(), "auto");
/// assert_eq!(calls.get(), 1);
///
/// const HYPHENS: PropertyKey<Hyphens> = PropertyKey::new("hyphens");
/// let hyphens = Property::new(HYPHENS, Hyphens::Auto).with_prefixes(VendorPrefix::WEBKIT);
/// assert_eq!(hyphens.to_css(true), "-webkit-hyphens:auto;hyphens:auto");
/// ```
pub struct Property {
    name: Cow<'static, str>,
    cell: Rc<ValueCell>,
    prefixes: VendorPrefix,
    important: bool,
    subscription: Option<Subscription>,
    // Keeps derived sources alive; their upstream listeners die with them.
    _upstream: Option<Box<dyn Any>>,
}

impl Property {
    /// Creates a declaration for `key` from a plain or observable value.
    pub fn new<V: PropertyValue>(key: PropertyKey<V>, value: impl Into<Binding<V>>) -> Self {
        Self::bind(Cow::Borrowed(key.name()), value.into())
    }

    fn bind<V: PropertyValue>(name: Cow<'static, str>, binding: Binding<V>) -> Self {
        let current = binding.get();
        let cell = ValueCell::new(current.to_string(), Some(ErasedValue::new(current)));
        let subscription = binding.listen({
            let cell: Weak<ValueCell> = Rc::downgrade(&cell);
            let name = name.clone();
            move |value: &V| {
                if let Some(cell) = cell.upgrade() {
                    cell.store(&name, value);
                }
            }
        });
        let upstream: Option<Box<dyn Any>> = match binding {
            Binding::Derived(derived) => Some(Box::new(derived)),
            Binding::Constant(_) | Binding::State(_) => None,
        };
        trace!(
            property = %name,
            reactive = subscription.is_some(),
            "declaration created"
        );
        Self {
            name,
            cell,
            prefixes: VendorPrefix::empty(),
            important: false,
            subscription,
            _upstream: upstream,
        }
    }

    /// Creates a declaration from raw CSS text, bypassing typing.
    pub fn raw(name: impl Into<Cow<'static, str>>, css: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cell: ValueCell::new(css.into(), None),
            prefixes: VendorPrefix::empty(),
            important: false,
            subscription: None,
            _upstream: None,
        }
    }

    /// Creates a custom property declaration such as `--accent: red`.
    ///
    /// The value may be observable like any other.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidCustomName`] when `name` does not start
    /// with `--`, and [`PropertyError::EmptyName`] for `--` alone.
    pub fn custom<V: PropertyValue>(
        name: impl Into<Cow<'static, str>>,
        value: impl Into<Binding<V>>,
    ) -> Result<Self, PropertyError> {
        let name = name.into();
        match name.strip_prefix("--").map(str::is_empty) {
            None => Err(PropertyError::InvalidCustomName(name.into_owned())),
            Some(true) => Err(PropertyError::EmptyName),
            Some(false) => Ok(Self::bind(name, value.into())),
        }
    }

    /// Creates a declaration that sets `key` to a CSS-wide keyword.
    #[must_use]
    pub fn wide<V>(key: PropertyKey<V>, keyword: CssWide) -> Self {
        Self::raw(key.name(), keyword.as_str())
    }

    /// Duplicates the declaration under the given vendor prefixes.
    #[must_use]
    pub fn with_prefixes(mut self, prefixes: VendorPrefix) -> Self {
        self.prefixes |= prefixes;
        self
    }

    /// Marks the declaration `!important`, aliases included.
    #[must_use]
    pub fn important(mut self) -> Self {
        self.important = true;
        self
    }

    /// Returns the unprefixed property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current serialized value.
    #[must_use]
    pub fn css_value(&self) -> String {
        self.cell.css.borrow().clone()
    }

    /// Returns the current typed value, if this declaration holds a `V`.
    ///
    /// Raw declarations never hold a typed value.
    #[must_use]
    pub fn value<V: PropertyValue>(&self) -> Option<V> {
        self.cell
            .typed
            .borrow()
            .as_ref()
            .and_then(|typed| typed.downcast_ref::<V>())
            .cloned()
    }

    /// Returns the vendor prefixes this declaration is duplicated under.
    #[must_use]
    pub fn prefixes(&self) -> VendorPrefix {
        self.prefixes
    }

    /// Returns the prefixed alias names, in emission order.
    #[must_use]
    pub fn aliases(&self) -> SmallVec<[String; 3]> {
        self.prefixes.apply(&self.name)
    }

    /// Returns `true` when the value follows an observable.
    #[must_use]
    pub fn is_reactive(&self) -> bool {
        self.subscription.is_some()
    }

    /// Returns `true` when the declaration is `!important`.
    #[must_use]
    pub fn is_important(&self) -> bool {
        self.important
    }

    /// Installs the callback run after each re-serialization.
    ///
    /// The callback receives the new CSS text. It replaces any previous
    /// handler. Static declarations never call it.
    pub fn set_change_handler(&self, handler: impl Fn(&str) + 'static) {
        *self.cell.handler.borrow_mut() = Some(Rc::new(handler));
    }

    /// Removes the change handler.
    pub fn clear_change_handler(&self) {
        self.cell.handler.borrow_mut().take();
    }

    /// Writes one `name: value;` line for `name`, which is either the
    /// property name or one of its aliases.
    ///
    /// Minified output drops the optional whitespace.
    pub fn write_declaration(
        &self,
        out: &mut impl fmt::Write,
        name: &str,
        minify: bool,
    ) -> fmt::Result {
        let css = self.cell.css.borrow();
        match (minify, self.important) {
            (false, false) => write!(out, "{name}: {css}"),
            (false, true) => write!(out, "{name}: {css} !important"),
            (true, false) => write!(out, "{name}:{css}"),
            (true, true) => write!(out, "{name}:{css}!important"),
        }
    }

    /// Serializes the declaration and its aliases, aliases first.
    ///
    /// Pretty output puts each declaration on its own line with a trailing
    /// `;`. Minified output separates declarations with `;` and leaves no
    /// trailing separator.
    #[must_use]
    pub fn to_css(&self, minify: bool) -> String {
        let mut out = String::new();
        let names = self
            .aliases()
            .into_iter()
            .map(Cow::Owned)
            .chain([Cow::Borrowed(self.name())]);
        for (i, name) in names.enumerate() {
            let result = if minify {
                let sep = if i > 0 { ";" } else { "" };
                out.push_str(sep);
                self.write_declaration(&mut out, &name, true)
            } else {
                let sep = if i > 0 { "\n" } else { "" };
                out.push_str(sep);
                self.write_declaration(&mut out, &name, false)
                    .map(|()| out.push(';'))
            };
            // Writing into a String cannot fail.
            debug_assert!(result.is_ok(), "formatting into a String failed");
        }
        out
    }
}

impl fmt::Debug for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.name)
            .field("css", &*self.cell.css.borrow())
            .field("prefixes", &self.prefixes)
            .field("important", &self.important)
            .field("reactive", &self.is_reactive())
            .finish_non_exhaustive()
    }
}
