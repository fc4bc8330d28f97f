// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observable value containers.
//!
//! This module provides [`State<T>`], a shared cell that notifies its
//! listeners synchronously whenever the value is replaced or updated.

use alloc::rc::{Rc, Weak};
use alloc::vec;
use core::cell::{Cell, RefCell};
use core::fmt;

use smallvec::SmallVec;
use tracing::trace;

use crate::derived::Derived;
use crate::subscription::{ListenerId, Subscription, Unsubscribe};

type Listener<T> = Rc<dyn Fn(&T)>;

pub(crate) struct StateInner<T> {
    value: RefCell<T>,
    listeners: RefCell<SmallVec<[(ListenerId, Listener<T>); 2]>>,
    next_id: Cell<ListenerId>,
    generation: Cell<u64>,
}

impl<T> Unsubscribe for StateInner<T> {
    fn unsubscribe(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
    }
}

/// A shared, observable value.
///
/// `State` is a cheap handle (`Rc`) to a value cell. Cloning the handle shares
/// the cell. Every call to [`set`](Self::set) or [`update`](Self::update)
/// invokes all listeners synchronously, in subscription order, exactly once.
/// There is no equality check: setting the same value notifies again.
///
/// Listeners receive the new value by reference. Dispatch runs over a snapshot
/// of the listener list, so listeners may subscribe, unsubscribe or even set
/// the state again from inside a notification. A nested change is delivered
/// to every listener before the outer dispatch resumes, and the outer
/// dispatch then stops: no listener sees the older value after the newer one.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use cascada_state::State;
///
/// let width = State::new(10);
/// let seen = Rc::new(Cell::new(0));
///
/// let seen_in_listener = seen.clone();
/// let _subscription = width.listen(move |value| seen_in_listener.set(*value));
///
/// width.set(15);
/// assert_eq!(seen.get(), 15);
/// assert_eq!(width.get(), 15);
/// ```
pub struct State<T> {
    inner: Rc<StateInner<T>>,
}

impl<T: Clone + 'static> State<T> {
    /// Creates a new state holding `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(StateInner {
                value: RefCell::new(value),
                listeners: RefCell::new(SmallVec::new()),
                next_id: Cell::new(0),
                generation: Cell::new(0),
            }),
        }
    }

    /// Returns a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Calls `f` with a reference to the current value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    /// Replaces the value and notifies every listener.
    pub fn set(&self, value: T) {
        *self.inner.value.borrow_mut() = value;
        self.notify();
    }

    /// Mutates the value in place and notifies every listener.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.inner.value.borrow_mut());
        self.notify();
    }

    /// Attaches a listener that runs on every future change.
    ///
    /// The listener is not called with the current value. It stays attached
    /// until the returned [`Subscription`] is dropped.
    pub fn listen(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));

        let weak: Weak<StateInner<T>> = Rc::downgrade(&self.inner);
        Subscription::new(weak, id)
    }

    /// Returns the number of attached listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Creates a derived observable that applies `f` to every value.
    ///
    /// The derived value is computed immediately and then recomputed each
    /// time this state changes.
    pub fn map<U: Clone + 'static>(&self, f: impl Fn(&T) -> U + 'static) -> Derived<U> {
        let out = State::new(self.with(&f));
        let weak = out.downgrade();
        let subscription = self.listen(move |value| {
            if let Some(out) = weak.upgrade() {
                out.set(f(value));
            }
        });
        Derived::from_parts(out, vec![subscription], None)
    }

    /// Returns `true` if both handles share the same cell.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Identity of the shared cell, equal for all clones.
    pub(crate) fn id(&self) -> usize {
        Rc::as_ptr(&self.inner).cast::<()>().addr()
    }

    pub(crate) fn downgrade(&self) -> WeakState<T> {
        WeakState(Rc::downgrade(&self.inner))
    }

    fn notify(&self) {
        let snapshot: SmallVec<[Listener<T>; 4]> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        if snapshot.is_empty() {
            return;
        }
        let generation = self.inner.generation.get().wrapping_add(1);
        self.inner.generation.set(generation);
        trace!(listeners = snapshot.len(), generation, "dispatching state change");
        let value = self.get();
        for listener in snapshot {
            if self.inner.generation.get() != generation {
                trace!(generation, "dispatch superseded by a nested change");
                break;
            }
            listener(&value);
        }
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Default + Clone + 'static> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("value", &*self.inner.value.borrow())
            .field("listeners", &self.inner.listeners.borrow().len())
            .finish()
    }
}

/// Non-owning reference to a [`State`].
pub(crate) struct WeakState<T>(Weak<StateInner<T>>);

impl<T> WeakState<T> {
    pub(crate) fn upgrade(&self) -> Option<State<T>> {
        self.0.upgrade().map(|inner| State { inner })
    }
}
