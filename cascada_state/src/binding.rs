// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Values that are either fixed or observed.

use alloc::rc::Rc;
use core::fmt;

use crate::derived::Derived;
use crate::state::State;
use crate::subscription::Subscription;

/// Anything that can report "my value changed".
///
/// This is the type-erased view used by [`combine_latest`](crate::combine_latest)
/// to subscribe to sources of different value types.
pub trait Observe {
    /// Returns `true` if the value can change after construction.
    fn is_reactive(&self) -> bool;

    /// Calls `on_change` after every future change.
    ///
    /// Returns `None` for sources that never change.
    fn observe(&self, on_change: Rc<dyn Fn()>) -> Option<Subscription>;

    /// Identifies the underlying observable.
    ///
    /// Handles to the same observable report the same id, so a combination
    /// subscribes to it only once. Sources that never change return `None`.
    fn source_id(&self) -> Option<usize> {
        None
    }
}

/// A property input: either a plain value or an observable one.
///
/// Every value constructor in Cascada accepts `impl Into<Binding<T>>`, so a
/// caller can pass a `T`, a [`State<T>`] (by value or by reference) or a
/// [`Derived<T>`] interchangeably.
///
/// # Example
///
/// ```rust
/// use cascada_state::{Binding, State};
///
/// let fixed: Binding<u32> = 4.into();
/// assert!(!fixed.is_reactive());
///
/// let state = State::new(4_u32);
/// let observed: Binding<u32> = (&state).into();
/// assert!(observed.is_reactive());
///
/// state.set(8);
/// assert_eq!(observed.get(), 8);
/// ```
pub enum Binding<T> {
    /// A value that never changes.
    Constant(T),
    /// A value tracked through a [`State`].
    State(State<T>),
    /// A value computed from other observables.
    Derived(Derived<T>),
}

impl<T: Clone + 'static> Binding<T> {
    /// Returns the current value.
    #[must_use]
    pub fn get(&self) -> T {
        match self {
            Self::Constant(value) => value.clone(),
            Self::State(state) => state.get(),
            Self::Derived(derived) => derived.get(),
        }
    }

    /// Returns `true` unless this is a [`Binding::Constant`].
    #[must_use]
    pub fn is_reactive(&self) -> bool {
        !matches!(self, Self::Constant(_))
    }

    /// Attaches a listener receiving each new value.
    ///
    /// Returns `None` for constants.
    pub fn listen(&self, listener: impl Fn(&T) + 'static) -> Option<Subscription> {
        match self {
            Self::Constant(_) => None,
            Self::State(state) => Some(state.listen(listener)),
            Self::Derived(derived) => Some(derived.listen(listener)),
        }
    }

    /// Maps the value, preserving reactivity.
    ///
    /// Constants are mapped eagerly; observables produce a [`Derived`].
    pub fn map<U: Clone + 'static>(&self, f: impl Fn(&T) -> U + 'static) -> Binding<U> {
        match self {
            Self::Constant(value) => Binding::Constant(f(value)),
            Self::State(state) => Binding::Derived(state.map(f)),
            Self::Derived(derived) => Binding::Derived(derived.map(f)),
        }
    }
}

impl<T: Clone + 'static> Observe for Binding<T> {
    fn is_reactive(&self) -> bool {
        Self::is_reactive(self)
    }

    fn observe(&self, on_change: Rc<dyn Fn()>) -> Option<Subscription> {
        self.listen(move |_| on_change())
    }

    fn source_id(&self) -> Option<usize> {
        match self {
            Self::Constant(_) => None,
            Self::State(state) => Some(state.id()),
            Self::Derived(derived) => Some(derived.id()),
        }
    }
}

impl<T: Clone + 'static> Observe for State<T> {
    fn is_reactive(&self) -> bool {
        true
    }

    fn observe(&self, on_change: Rc<dyn Fn()>) -> Option<Subscription> {
        Some(self.listen(move |_| on_change()))
    }

    fn source_id(&self) -> Option<usize> {
        Some(self.id())
    }
}

impl<T: Clone + 'static> Observe for Derived<T> {
    fn is_reactive(&self) -> bool {
        true
    }

    fn observe(&self, on_change: Rc<dyn Fn()>) -> Option<Subscription> {
        Some(self.listen(move |_| on_change()))
    }

    fn source_id(&self) -> Option<usize> {
        Some(self.id())
    }
}

impl<T> From<T> for Binding<T> {
    fn from(value: T) -> Self {
        Self::Constant(value)
    }
}

impl<T> From<State<T>> for Binding<T> {
    fn from(state: State<T>) -> Self {
        Self::State(state)
    }
}

impl<T> From<&State<T>> for Binding<T> {
    fn from(state: &State<T>) -> Self {
        Self::State(state.clone())
    }
}

impl<T> From<Derived<T>> for Binding<T> {
    fn from(derived: Derived<T>) -> Self {
        Self::Derived(derived)
    }
}

impl<T> From<&Derived<T>> for Binding<T> {
    fn from(derived: &Derived<T>) -> Self {
        Self::Derived(derived.clone())
    }
}

impl<T: Clone> Clone for Binding<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Constant(value) => Self::Constant(value.clone()),
            Self::State(state) => Self::State(state.clone()),
            Self::Derived(derived) => Self::Derived(derived.clone()),
        }
    }
}

impl<T: Default> Default for Binding<T> {
    fn default() -> Self {
        Self::Constant(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Self::State(state) => f.debug_tuple("State").field(state).finish(),
            Self::Derived(derived) => f.debug_tuple("Derived").field(derived).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::String;
    use core::cell::Cell;

    #[test]
    fn constant_has_no_subscription() {
        let binding: Binding<i32> = 3.into();
        assert_eq!(binding.get(), 3);
        assert!(binding.listen(|_| {}).is_none());
    }

    #[test]
    fn state_binding_follows_state() {
        let state = State::new(1_i32);
        let binding = Binding::<i32>::from(&state);
        state.set(9);
        assert_eq!(binding.get(), 9);
    }

    #[test]
    fn map_constant_stays_constant() {
        let binding: Binding<i32> = 3.into();
        let mapped = binding.map(|v| v + 1);
        assert!(!mapped.is_reactive());
        assert_eq!(mapped.get(), 4);
    }

    #[test]
    fn map_state_is_reactive() {
        let state = State::new(3_i32);
        let mapped = Binding::<i32>::from(&state).map(|v| format!("{v}px"));
        assert!(mapped.is_reactive());

        state.set(5);
        assert_eq!(mapped.get(), "5px");
    }

    #[test]
    fn handles_to_one_state_share_an_id() {
        let state = State::new(1_i32);
        let other = State::new(1_i32);
        let a = Binding::<i32>::from(&state);
        let b = Binding::<i32>::from(state.clone());
        assert_eq!(a.source_id(), b.source_id());
        assert_ne!(a.source_id(), Binding::<i32>::from(&other).source_id());
        assert_eq!(Binding::Constant(1_i32).source_id(), None);
    }

    #[test]
    fn observe_erases_value_type() {
        let state = State::new(String::from("a"));
        let binding = Binding::<String>::from(&state);
        let hits = Rc::new(Cell::new(0));
        let hits2 = hits.clone();
        let source: &dyn Observe = &binding;
        let _sub = source.observe(Rc::new(move || hits2.set(hits2.get() + 1)));

        state.set(String::from("b"));
        state.set(String::from("c"));
        assert_eq!(hits.get(), 2);
    }
}
