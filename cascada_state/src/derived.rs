// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only observables computed from other observables.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt;

use smallvec::SmallVec;

use crate::state::State;
use crate::subscription::Subscription;

/// Keeps the upstream side of a [`Derived`] alive.
///
/// Dropping the guard removes every upstream listener, which also releases
/// whatever those listeners captured.
struct Guard {
    subscriptions: SmallVec<[Subscription; 2]>,
    _upstream: Option<Rc<dyn Any>>,
}

/// An observable whose value is computed from one or more sources.
///
/// A `Derived` is produced by [`State::map`], [`Derived::map`] or
/// [`combine_latest`](crate::combine_latest). It owns its upstream
/// subscriptions: while at least one clone of the `Derived` is alive the value
/// tracks its sources, and once the last clone is dropped the upstream
/// listeners are removed.
///
/// # Example
///
/// ```rust
/// use cascada_state::State;
///
/// let size = State::new(10);
/// let label = size.map(|v| format!("{v}px"));
/// assert_eq!(label.get(), "10px");
///
/// size.set(12);
/// assert_eq!(label.get(), "12px");
/// ```
pub struct Derived<T> {
    state: State<T>,
    guard: Rc<Guard>,
}

impl<T: Clone + 'static> Derived<T> {
    pub(crate) fn from_parts(
        state: State<T>,
        subscriptions: Vec<Subscription>,
        upstream: Option<Rc<dyn Any>>,
    ) -> Self {
        Self {
            state,
            guard: Rc::new(Guard {
                subscriptions: subscriptions.into_iter().collect(),
                _upstream: upstream,
            }),
        }
    }

    /// Returns a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.state.get()
    }

    /// Calls `f` with a reference to the current value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.state.with(f)
    }

    /// Attaches a listener that runs every time the derived value is recomputed.
    pub fn listen(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        self.state.listen(listener)
    }

    /// Derives a further value from this one.
    ///
    /// The result keeps this value, and therefore its own sources, alive.
    pub fn map<U: Clone + 'static>(&self, f: impl Fn(&T) -> U + 'static) -> Derived<U> {
        let mapped = self.state.map(f);
        let upstream: Rc<dyn Any> = Rc::new(self.clone());
        let subscriptions = Rc::try_unwrap(mapped.guard)
            .map(|guard| guard.subscriptions)
            .unwrap_or_default();
        Derived {
            state: mapped.state,
            guard: Rc::new(Guard {
                subscriptions,
                _upstream: Some(upstream),
            }),
        }
    }

    pub(crate) fn id(&self) -> usize {
        self.state.id()
    }

    /// Returns the number of listeners attached to this derived value.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.state.listener_count()
    }
}

impl<T> Clone for Derived<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            guard: self.guard.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Derived<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Derived")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use core::cell::Cell;

    #[test]
    fn map_of_map_keeps_chain_alive() {
        let source = State::new(1_i32);
        let plus_one = source.map(|v| v + 1);
        let label = plus_one.map(|v| format!("{v}"));
        drop(plus_one);

        source.set(41);
        assert_eq!(label.get(), "42");
        assert_eq!(source.listener_count(), 1);

        drop(label);
        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn clones_share_subscriptions() {
        let source = State::new(1_i32);
        let derived = source.map(|v| v * 10);
        let clone = derived.clone();
        drop(derived);

        source.set(3);
        assert_eq!(clone.get(), 30);
        assert_eq!(source.listener_count(), 1);
    }

    #[test]
    fn listen_to_derived() {
        let source = State::new(1_i32);
        let derived = source.map(|v| v * 2);
        let seen = Rc::new(Cell::new(0));
        let seen2 = seen.clone();
        let _sub = derived.listen(move |v| seen2.set(*v));

        source.set(4);
        assert_eq!(seen.get(), 8);
        assert_eq!(derived.listener_count(), 1);
    }
}
