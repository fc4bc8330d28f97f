// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transforms, easing functions and transitions.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use cascada_state::{Binding, Combine};

use crate::length::Length;
use crate::number::{Joiner, write_number};
use crate::unit::UnitValue;

/// A single transform function.
#[derive(Clone, Debug, PartialEq)]
pub enum TransformFunction {
    /// `translate(x, y)`
    Translate(Length, Length),
    /// `translateX(x)`
    TranslateX(Length),
    /// `translateY(y)`
    TranslateY(Length),
    /// `scale(x, y)`
    Scale(f32, f32),
    /// `scaleX(x)`
    ScaleX(f32),
    /// `scaleY(y)`
    ScaleY(f32),
    /// `rotate(angle)`
    Rotate(UnitValue),
    /// `skew(x, y)`
    Skew(UnitValue, UnitValue),
    /// `skewX(angle)`
    SkewX(UnitValue),
    /// `skewY(angle)`
    SkewY(UnitValue),
    /// `matrix(a, b, c, d, e, f)`
    Matrix([f32; 6]),
    /// `perspective(d)`
    Perspective(Length),
}

struct Numbers<'a>(&'a [f32]);

impl fmt::Display for Numbers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_number(f, *value)?;
        }
        Ok(())
    }
}

impl fmt::Display for TransformFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Translate(x, y) => write!(f, "translate({x}, {y})"),
            Self::TranslateX(x) => write!(f, "translateX({x})"),
            Self::TranslateY(y) => write!(f, "translateY({y})"),
            Self::Scale(x, y) if x == y => write!(f, "scale({})", Numbers(&[*x])),
            Self::Scale(x, y) => write!(f, "scale({})", Numbers(&[*x, *y])),
            Self::ScaleX(x) => write!(f, "scaleX({})", Numbers(&[*x])),
            Self::ScaleY(y) => write!(f, "scaleY({})", Numbers(&[*y])),
            Self::Rotate(angle) => write!(f, "rotate({angle})"),
            Self::Skew(x, y) => write!(f, "skew({x}, {y})"),
            Self::SkewX(angle) => write!(f, "skewX({angle})"),
            Self::SkewY(angle) => write!(f, "skewY({angle})"),
            Self::Matrix(values) => write!(f, "matrix({})", Numbers(values)),
            Self::Perspective(distance) => write!(f, "perspective({distance})"),
        }
    }
}

/// The `transform` value: a list of functions applied left to right.
///
/// ```rust
/// use cascada_values::{Transform, deg, percent, px};
///
/// let transform = Transform::new().translate(percent(-50), px(0)).rotate(deg(45)).scale(1.5);
/// assert_eq!(transform.to_string(), "translate(-50%, 0px) rotate(45deg) scale(1.5)");
/// assert_eq!(Transform::new().to_string(), "none");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transform(pub Vec<TransformFunction>);

impl Transform {
    /// The identity transform, `none`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an arbitrary function.
    #[must_use]
    pub fn then(mut self, function: TransformFunction) -> Self {
        self.0.push(function);
        self
    }

    /// Appends `translate(x, y)`.
    #[must_use]
    pub fn translate(self, x: impl Into<Length>, y: impl Into<Length>) -> Self {
        self.then(TransformFunction::Translate(x.into(), y.into()))
    }

    /// Appends a uniform `scale()`.
    #[must_use]
    pub fn scale(self, factor: f32) -> Self {
        self.then(TransformFunction::Scale(factor, factor))
    }

    /// Appends `rotate(angle)`.
    #[must_use]
    pub fn rotate(self, angle: UnitValue) -> Self {
        self.then(TransformFunction::Rotate(angle))
    }

    /// Appends `skew(x, y)`.
    #[must_use]
    pub fn skew(self, x: UnitValue, y: UnitValue) -> Self {
        self.then(TransformFunction::Skew(x, y))
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("none");
        }
        Joiner::new(f, " ").all(&self.0)
    }
}

impl From<TransformFunction> for Transform {
    fn from(function: TransformFunction) -> Self {
        Self(vec![function])
    }
}

bind_from!(TransformFunction => Transform);

keyword_enum! {
    /// Where a `steps()` jump happens.
    pub enum StepPosition("step position") {
        JumpStart = "jump-start",
        JumpEnd = "jump-end",
        JumpNone = "jump-none",
        JumpBoth = "jump-both",
        Start = "start",
        End = "end",
    }
}

/// An easing function, as used by `transition-timing-function` and
/// `animation-timing-function`.
///
/// ```rust
/// use cascada_values::TimingFunction;
///
/// assert_eq!(TimingFunction::EaseInOut.to_string(), "ease-in-out");
/// assert_eq!(
///     TimingFunction::CubicBezier(0.4, 0.0, 0.2, 1.0).to_string(),
///     "cubic-bezier(0.4, 0, 0.2, 1)"
/// );
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TimingFunction {
    /// `linear`
    Linear,
    /// `ease`
    Ease,
    /// `ease-in`
    EaseIn,
    /// `ease-out`
    EaseOut,
    /// `ease-in-out`
    EaseInOut,
    /// `step-start`
    StepStart,
    /// `step-end`
    StepEnd,
    /// `cubic-bezier(x1, y1, x2, y2)`
    CubicBezier(f32, f32, f32, f32),
    /// `steps(n[, position])`
    Steps(u32, Option<StepPosition>),
}

impl fmt::Display for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("linear"),
            Self::Ease => f.write_str("ease"),
            Self::EaseIn => f.write_str("ease-in"),
            Self::EaseOut => f.write_str("ease-out"),
            Self::EaseInOut => f.write_str("ease-in-out"),
            Self::StepStart => f.write_str("step-start"),
            Self::StepEnd => f.write_str("step-end"),
            Self::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({})", Numbers(&[*x1, *y1, *x2, *y2]))
            }
            Self::Steps(count, None) => write!(f, "steps({count})"),
            Self::Steps(count, Some(position)) => write!(f, "steps({count}, {position})"),
        }
    }
}

/// One comma-separated entry of the `transition` shorthand:
/// `property duration [timing] [delay]`.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionItem {
    /// Property name, or `all`.
    pub property: String,
    /// Duration.
    pub duration: UnitValue,
    /// Easing; omitted when absent.
    pub timing: Option<TimingFunction>,
    /// Delay; omitted when absent.
    pub delay: Option<UnitValue>,
}

impl TransitionItem {
    /// A transition of `property` over `duration`.
    #[must_use]
    pub fn new(property: impl Into<String>, duration: UnitValue) -> Self {
        Self {
            property: property.into(),
            duration,
            timing: None,
            delay: None,
        }
    }

    /// Sets the easing function.
    #[must_use]
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = Some(timing);
        self
    }

    /// Sets the delay.
    #[must_use]
    pub fn delay(mut self, delay: UnitValue) -> Self {
        self.delay = Some(delay);
        self
    }
}

impl fmt::Display for TransitionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = Joiner::new(f, " ");
        out.item(&self.property)?;
        out.item(&self.duration)?;
        out.opt(self.timing.as_ref())?;
        out.opt(self.delay.as_ref())
    }
}

/// The `transition` shorthand: a comma-separated list of
/// [`TransitionItem`]s. An empty list serializes as `none`.
///
/// ```rust
/// use cascada_values::{TimingFunction, Transition, TransitionItem, ms};
///
/// let transition = Transition::from(TransitionItem::new("opacity", ms(200)))
///     .and(TransitionItem::new("transform", ms(300)).timing(TimingFunction::EaseOut).delay(ms(50)));
/// assert_eq!(
///     transition.to_string(),
///     "opacity 200ms, transform 300ms ease-out 50ms"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transition(pub Vec<TransitionItem>);

impl Transition {
    /// Appends another entry.
    #[must_use]
    pub fn and(mut self, item: TransitionItem) -> Self {
        self.0.push(item);
        self
    }

    /// A single entry whose duration may be bound to state.
    pub fn bound(
        property: impl Into<String>,
        duration: impl Into<Binding<UnitValue>>,
        timing: impl Into<Binding<TimingFunction>>,
    ) -> Binding<Self> {
        let property = property.into();
        let duration: Binding<UnitValue> = duration.into();
        let timing: Binding<TimingFunction> = timing.into();
        (duration, timing).combine(move |(duration, timing)| {
            Self::from(TransitionItem::new(property.clone(), duration).timing(timing))
        })
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("none");
        }
        Joiner::new(f, ", ").all(&self.0)
    }
}

impl From<TransitionItem> for Transition {
    fn from(item: TransitionItem) -> Self {
        Self(vec![item])
    }
}

bind_from!(TransitionItem => Transition);

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use crate::unit::{deg, ms, px, s};
    use cascada_state::State;

    #[test]
    fn functions() {
        assert_eq!(
            TransformFunction::Scale(2.0, 0.5).to_string(),
            "scale(2, 0.5)"
        );
        assert_eq!(
            TransformFunction::Matrix([1.0, 0.0, 0.0, 1.0, 10.0, 20.0]).to_string(),
            "matrix(1, 0, 0, 1, 10, 20)"
        );
        assert_eq!(
            TransformFunction::TranslateY(Length::from(px(-4))).to_string(),
            "translateY(-4px)"
        );
        assert_eq!(
            Transform::new().skew(deg(10), deg(0)).to_string(),
            "skew(10deg, 0deg)"
        );
    }

    #[test]
    fn steps() {
        assert_eq!(TimingFunction::Steps(4, None).to_string(), "steps(4)");
        assert_eq!(
            TimingFunction::Steps(2, Some(StepPosition::JumpEnd)).to_string(),
            "steps(2, jump-end)"
        );
    }

    #[test]
    fn empty_transition_is_none() {
        assert_eq!(Transition::default().to_string(), "none");
    }

    #[test]
    fn bound_transition_follows_duration() {
        let duration = State::new(ms(100));
        let transition = Transition::bound("height", &duration, TimingFunction::Linear);
        assert_eq!(transition.get().to_string(), "height 100ms linear");
        duration.set(s(1));
        assert_eq!(transition.get().to_string(), "height 1s linear");
    }
}
