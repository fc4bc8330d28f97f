// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composition of several observables into one derived value.

use alloc::rc::Rc;
use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::binding::{Binding, Observe};
use crate::derived::Derived;
use crate::state::State;

/// Derives one value from any mix of static and observable sources.
///
/// `compute` reads the current value of every input it captured and builds
/// the combined result. If none of `sources` is reactive the result is a
/// [`Binding::Constant`] computed once. Otherwise each distinct source gets
/// one listener, and every notification from any source recomputes the value
/// from the latest inputs. A source listed twice is still observed once. Two source changes produce two recomputations;
/// nothing is batched.
///
/// # Example
///
/// ```rust
/// use cascada_state::{Binding, State, combine_latest};
///
/// let h = State::new(10);
/// let v: Binding<i32> = 20.into();
///
/// let joined = combine_latest(&[&h, &v], {
///     let (h, v) = (h.clone(), v.clone());
///     move || format!("{}px {}px", h.get(), v.get())
/// });
/// assert_eq!(joined.get(), "10px 20px");
///
/// h.set(15);
/// assert_eq!(joined.get(), "15px 20px");
/// ```
pub fn combine_latest<T: Clone + 'static>(
    sources: &[&dyn Observe],
    compute: impl Fn() -> T + 'static,
) -> Binding<T> {
    if !sources.iter().any(|source| source.is_reactive()) {
        return Binding::Constant(compute());
    }

    let out = State::new(compute());
    let weak = out.downgrade();
    let on_change: Rc<dyn Fn()> = Rc::new(move || {
        if let Some(out) = weak.upgrade() {
            out.set(compute());
        }
    });
    let mut seen: SmallVec<[usize; 6]> = SmallVec::new();
    let subscriptions: Vec<_> = sources
        .iter()
        .filter(|source| match source.source_id() {
            Some(id) if seen.contains(&id) => false,
            Some(id) => {
                seen.push(id);
                true
            }
            None => true,
        })
        .filter_map(|source| source.observe(on_change.clone()))
        .collect();
    Binding::Derived(Derived::from_parts(out, subscriptions, None))
}

/// Tuples of bindings that can be combined into one value.
///
/// This is the typed counterpart of [`combine_latest`]: the closure receives
/// the current value of every element of the tuple.
///
/// ```rust
/// use cascada_state::{Binding, Combine, State};
///
/// let width = State::new(1_u32);
/// let style: Binding<&str> = "solid".into();
///
/// let border = (Binding::<u32>::from(&width), style)
///     .combine(|(w, s)| format!("{w}px {s}"));
/// assert_eq!(border.get(), "1px solid");
///
/// width.set(2);
/// assert_eq!(border.get(), "2px solid");
/// ```
pub trait Combine {
    /// The tuple of current values handed to the combining closure.
    type Values;

    /// Combines the current values with `f`, recomputing on every change.
    fn combine<T, F>(self, f: F) -> Binding<T>
    where
        T: Clone + 'static,
        F: Fn(Self::Values) -> T + 'static;
}

macro_rules! impl_combine {
    ($($name:ident: $ty:ident),+) => {
        impl<$($ty: Clone + 'static),+> Combine for ($(Binding<$ty>,)+) {
            type Values = ($($ty,)+);

            fn combine<T, F>(self, f: F) -> Binding<T>
            where
                T: Clone + 'static,
                F: Fn(Self::Values) -> T + 'static,
            {
                let ($($name,)+) = self;
                combine_latest(&[$(&$name as &dyn Observe),+], {
                    let ($($name,)+) = ($($name.clone(),)+);
                    move || f(($($name.get(),)+))
                })
            }
        }
    };
}

impl_combine!(a: A);
impl_combine!(a: A, b: B);
impl_combine!(a: A, b: B, c: C);
impl_combine!(a: A, b: B, c: C, d: D);
impl_combine!(a: A, b: B, c: C, d: D, e: E);
impl_combine!(a: A, b: B, c: C, d: D, e: E, g: G);
