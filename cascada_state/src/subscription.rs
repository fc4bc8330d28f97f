// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped listener registrations.
//!
//! This module provides [`Subscription`], the handle returned whenever a
//! listener is attached to an observable. Dropping the handle removes the
//! listener again.

use alloc::rc::Weak;
use core::fmt;

/// Identifier of a listener within a single observable.
pub(crate) type ListenerId = u64;

/// Implemented by observable storage that can remove a listener by id.
pub(crate) trait Unsubscribe {
    fn unsubscribe(&self, id: ListenerId);
}

/// A live listener registration.
///
/// The listener stays attached for as long as the `Subscription` is alive.
/// When the handle is dropped, the listener is removed from its source. The
/// handle only holds a weak reference to the source, so it never keeps the
/// observable alive on its own.
///
/// # Example
///
/// ```rust
/// use cascada_state::State;
///
/// let state = State::new(1);
/// let subscription = state.listen(|_| {});
/// assert_eq!(state.listener_count(), 1);
///
/// drop(subscription);
/// assert_eq!(state.listener_count(), 0);
/// ```
#[must_use = "dropping a Subscription immediately removes the listener"]
pub struct Subscription {
    source: Option<Weak<dyn Unsubscribe>>,
    id: ListenerId,
}

impl Subscription {
    pub(crate) fn new(source: Weak<dyn Unsubscribe>, id: ListenerId) -> Self {
        Self {
            source: Some(source),
            id,
        }
    }

    /// Returns `true` while the source is alive and the listener is attached.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.source
            .as_ref()
            .is_some_and(|source| source.strong_count() > 0)
    }

    /// Consumes the handle without removing the listener.
    ///
    /// The listener then lives as long as the source itself.
    pub fn detach(mut self) {
        self.source = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(source) = self.source.take().and_then(|weak| weak.upgrade()) {
            source.unsubscribe(self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::State;
    use alloc::format;

    #[test]
    fn drop_removes_listener() {
        let state = State::new(0_u32);
        let a = state.listen(|_| {});
        let b = state.listen(|_| {});
        assert_eq!(state.listener_count(), 2);

        drop(a);
        assert_eq!(state.listener_count(), 1);
        drop(b);
        assert_eq!(state.listener_count(), 0);
    }

    #[test]
    fn detach_keeps_listener() {
        let state = State::new(0_u32);
        state.listen(|_| {}).detach();
        assert_eq!(state.listener_count(), 1);
    }

    #[test]
    fn outliving_the_source_is_harmless() {
        let state = State::new(0_u32);
        let subscription = state.listen(|_| {});
        assert!(subscription.is_active());

        drop(state);
        assert!(!subscription.is_active());
        drop(subscription);
    }

    #[test]
    fn debug_output() {
        let state = State::new(0_u32);
        let subscription = state.listen(|_| {});
        let debug = format!("{subscription:?}");
        assert!(debug.contains("Subscription"));
        assert!(debug.contains("active: true"));
    }
}
