// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style rules.

use alloc::borrow::ToOwned;
use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use cascada_property::{Property, PropertyKey, PropertyValue};
use hashbrown::HashSet;
use tracing::{debug, trace};

use crate::options::SerializeOptions;
use crate::rulable::CssRulable;

type Observer = Rc<dyn Fn(&str, &str)>;

/// Declarations changed since the last drain, in first-change order.
#[derive(Debug, Default)]
struct ChangeSet {
    seen: HashSet<usize>,
    order: Vec<usize>,
}

impl ChangeSet {
    /// Returns `true` if the index was newly recorded.
    fn mark(&mut self, index: usize) -> bool {
        let inserted = self.seen.insert(index);
        if inserted {
            self.order.push(index);
        }
        inserted
    }

    fn drain(&mut self) -> Vec<usize> {
        self.seen.clear();
        core::mem::take(&mut self.order)
    }
}

#[derive(Default)]
struct ChangeTracker {
    changed: RefCell<ChangeSet>,
    observers: RefCell<Vec<Observer>>,
}

impl ChangeTracker {
    fn record(&self, index: usize, name: &str, css: &str) {
        let first = self.changed.borrow_mut().mark(index);
        trace!(index, property = name, first, "declaration changed");
        let observers = self.observers.borrow().clone();
        for observer in observers {
            observer(name, css);
        }
    }
}

/// A style rule: a selector and its ordered declarations.
///
/// Every declaration added to a rule reports back to it when its value
/// changes. The rule records which declarations changed, for a renderer to
/// collect with [`take_changed`](Self::take_changed), and forwards the new
/// value to every observer registered with [`on_change`](Self::on_change).
///
/// Duplicate declarations are kept in insertion order; the rule does not
/// decide which one wins.
///
/// # Example
///
/// ```rust
/// use cascada_property::PropertyKey;
/// use cascada_rule::{CssRulable, Rule};
/// use cascada_state::State;
/// use cascada_values::{Length, px};
///
/// const WIDTH: PropertyKey<Length> = PropertyKey::new("width");
///
/// let width = State::new(Length::from(px(120)));
/// let mut rule = Rule::new(".panel");
/// rule.add_value(WIDTH, &width);
/// rule.add_raw("display", "flex");
/// assert_eq!(rule.to_string(), ".panel {\n  width: 120px;\n  display: flex;\n}\n");
///
/// width.set(Length::Auto);
/// assert_eq!(rule.take_changed(), [0]);
/// assert_eq!(rule.values(WIDTH), [Length::Auto]);
/// ```
pub struct Rule {
    selector: String,
    declarations: Vec<Property>,
    tracker: Rc<ChangeTracker>,
}

impl Rule {
    /// Creates an empty rule for `selector`.
    #[must_use]
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
            tracker: Rc::default(),
        }
    }

    /// Returns the selector text.
    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Returns the number of declarations, not counting aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns `true` if the rule has no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Returns the declarations in insertion order.
    #[must_use]
    pub fn declarations(&self) -> &[Property] {
        &self.declarations
    }

    /// Returns the current value of every declaration for `key`, in
    /// insertion order.
    #[must_use]
    pub fn values<V: PropertyValue>(&self, key: PropertyKey<V>) -> Vec<V> {
        self.declarations
            .iter()
            .filter(|property| property.name() == key.name())
            .filter_map(Property::value::<V>)
            .collect()
    }

    /// Returns `true` if some declaration sets the property `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.declarations.iter().any(|property| property.name() == name)
    }

    /// Registers a callback run with the name and new CSS value of every
    /// declaration that changes.
    pub fn on_change(&self, observer: impl Fn(&str, &str) + 'static) {
        self.tracker.observers.borrow_mut().push(Rc::new(observer));
    }

    /// Returns `true` if some declaration changed since the last
    /// [`take_changed`](Self::take_changed).
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.tracker.changed.borrow().order.is_empty()
    }

    /// Drains the indices of declarations changed since the last call, in
    /// the order they first changed.
    pub fn take_changed(&self) -> Vec<usize> {
        self.tracker.changed.borrow_mut().drain()
    }

    /// Renders the rule.
    #[must_use]
    pub fn to_css(&self, options: &SerializeOptions) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let result = self.write_css(&mut out, options);
        debug_assert!(result.is_ok(), "formatting into a String failed");
        out
    }

    pub(crate) fn write_css(
        &self,
        out: &mut impl fmt::Write,
        options: &SerializeOptions,
    ) -> fmt::Result {
        let minify = options.is_minified();
        if minify {
            write!(out, "{}{{", self.selector)?;
        } else {
            writeln!(out, "{} {{", self.selector)?;
        }
        let mut first = true;
        for property in &self.declarations {
            let aliases = options
                .emits_aliases()
                .then(|| property.aliases())
                .unwrap_or_default();
            let names = aliases.iter().map(String::as_str).chain([property.name()]);
            for name in names {
                if minify {
                    if !first {
                        out.write_char(';')?;
                    }
                    property.write_declaration(out, name, true)?;
                } else {
                    write!(out, "{:indent$}", "", indent = options.indent_width())?;
                    property.write_declaration(out, name, false)?;
                    out.write_str(";\n")?;
                }
                first = false;
            }
        }
        if minify {
            out.write_char('}')
        } else {
            out.write_str("}\n")
        }
    }
}

impl CssRulable for Rule {
    fn add_property(&mut self, property: Property) {
        let index = self.declarations.len();
        debug!(
            selector = %self.selector,
            property = property.name(),
            index,
            aliases = property.aliases().len(),
            "declaration added"
        );
        if property.is_reactive() {
            let tracker: Weak<ChangeTracker> = Rc::downgrade(&self.tracker);
            let name = property.name().to_owned();
            property.set_change_handler(move |css| {
                if let Some(tracker) = tracker.upgrade() {
                    tracker.record(index, &name, css);
                }
            });
        }
        self.declarations.push(property);
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_css(f, &SerializeOptions::default())
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("selector", &self.selector)
            .field("declarations", &self.declarations)
            .field("changed", &self.tracker.changed.borrow().order)
            .finish_non_exhaustive()
    }
}
