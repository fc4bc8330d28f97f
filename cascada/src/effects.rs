// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Opacity, shadows, filters, transforms and transitions.

use cascada_values::{
    BackgroundPosition, BlendMode, Filter, Number, Shadows, TimingFunction, Transform, Transition,
};

define_properties! {
    /// Fluent visual effect declarations.
    pub trait EffectProperties {
        OPACITY, opacity: Number = "opacity";
        BOX_SHADOW, box_shadow: Shadows = "box-shadow";
        FILTER, filter: Filter = "filter";
        BACKDROP_FILTER, backdrop_filter: Filter = "backdrop-filter" [WEBKIT];
        MIX_BLEND_MODE, mix_blend_mode: BlendMode = "mix-blend-mode";
        TRANSFORM, transform: Transform = "transform";
        TRANSFORM_ORIGIN, transform_origin: BackgroundPosition = "transform-origin";
        TRANSITION, transition: Transition = "transition";
        TRANSITION_TIMING_FUNCTION, transition_timing_function: TimingFunction =
            "transition-timing-function";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascada_rule::{Rule, SerializeOptions};
    use cascada_state::State;
    use cascada_values::{
        Color, FilterFunction, Length, Shadow, TransitionItem, UnitValue, deg, ms, px,
    };

    #[test]
    fn backdrop_filter_carries_webkit_alias() {
        let property = backdrop_filter(FilterFunction::Blur(Length::from(px(12))));
        assert_eq!(
            property.to_css(true),
            "-webkit-backdrop-filter:blur(12px);backdrop-filter:blur(12px)"
        );
    }

    #[test]
    fn opacity_follows_mapped_state() {
        let visible = State::new(false);
        let rule = Rule::new(".toast")
            .opacity(visible.map(|shown| Number::new(if *shown { 1 } else { 0 })))
            .transition(TransitionItem::new("opacity", ms(150)).timing(TimingFunction::EaseOut));
        assert_eq!(
            rule.to_css(&SerializeOptions::MINIFIED),
            ".toast{opacity:0;transition:opacity 150ms ease-out}"
        );

        visible.set(true);
        assert_eq!(rule.values(OPACITY), [Number::new(1)]);
        assert_eq!(rule.take_changed(), [0]);
    }

    #[test]
    fn transform_and_shadow() {
        let angle = State::new(deg(0));
        let rule = Rule::new(".spinner")
            .transform(angle.map(|angle| Transform::new().rotate(*angle)))
            .box_shadow(Shadow::new(px(0), px(2)).blur(px(6)).color(Color::rgba(0, 0, 0, 0.25)));
        angle.set(deg(90));
        assert_eq!(
            rule.to_css(&SerializeOptions::MINIFIED),
            ".spinner{transform:rotate(90deg);box-shadow:0px 2px 6px rgba(0, 0, 0, 0.25)}"
        );
    }

    #[test]
    fn transition_duration_can_be_bound() {
        let duration: State<UnitValue> = State::new(ms(200));
        let property = transition(Transition::bound("transform", &duration, TimingFunction::Linear));
        duration.set(ms(400));
        assert_eq!(property.css_value(), "transform 400ms linear");
    }
}
