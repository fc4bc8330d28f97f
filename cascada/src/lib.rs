// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cascada: typed, reactive CSS.
//!
//! Every supported CSS property has three faces here:
//!
//! - a typed key such as [`background::BACKGROUND_COLOR`], which only
//!   accepts a [`Color`](values::Color),
//! - a constructor such as [`background::background_color`] returning the
//!   [`Property`](property::Property),
//! - a fluent method on an extension trait such as
//!   [`BackgroundProperties`](background::BackgroundProperties), available on
//!   every [`CssRulable`](rule::CssRulable).
//!
//! Values can be plain, or bound to a [`State`](state::State) or anything
//! derived from one. Bound declarations re-serialize whenever their inputs
//! change, and the rule holding them records the change.
//!
//! ## Quick Start
//!
//! ```rust
//! use cascada::prelude::*;
//!
//! let accent = State::new(Color::from(NamedColor::Teal));
//! let width = State::new(Length::from(px(10)));
//!
//! let card = Rule::new(".card")
//!     .display(Display::Flex)
//!     .padding(Edges::<Length>::axes(px(8), px(16)))
//!     .background_color(&accent)
//!     .background_size(BackgroundSize::new(&width, px(20)))
//!     .user_select(UserSelect::None);
//!
//! width.set(Length::from(px(15)));
//! accent.set(Color::hex(0x0088cc));
//! assert_eq!(card.take_changed(), [3, 2]);
//!
//! assert_eq!(
//!     card.to_css(&SerializeOptions::MINIFIED),
//!     ".card{display:flex;padding:8px 16px;background-color:#0088cc;\
//!      background-size:15px 20px;-webkit-user-select:none;-moz-user-select:none;\
//!      -ms-user-select:none;user-select:none}"
//! );
//! ```
//!
//! ## Crates
//!
//! Cascada is split into layers, each re-exported here:
//!
//! - [`state`]: observable values and subscriptions
//! - [`values`]: CSS value types
//! - [`property`]: keys and reactive declarations
//! - [`rule`]: rules, stylesheets and rendering
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

#[macro_use]
mod macros;

pub mod background;
pub mod border;
pub mod box_model;
pub mod effects;
pub mod flexbox;
pub mod grid;
pub mod interaction;
pub mod typography;

pub use cascada_property as property;
pub use cascada_rule as rule;
pub use cascada_state as state;
pub use cascada_values as values;

/// Everything needed to write style rules.
///
/// Brings in every extension trait, the rule and state types, and all value
/// types and unit constructors. Property keys and constructor functions stay
/// in their modules.
pub mod prelude {
    pub use crate::background::BackgroundProperties;
    pub use crate::border::BorderProperties;
    pub use crate::box_model::BoxModelProperties;
    pub use crate::effects::EffectProperties;
    pub use crate::flexbox::FlexboxProperties;
    pub use crate::grid::GridProperties;
    pub use crate::interaction::InteractionProperties;
    pub use crate::typography::TypographyProperties;

    pub use cascada_property::{Property, PropertyKey, VendorPrefix};
    pub use cascada_rule::{CssRulable, Rule, SerializeOptions, StyleSheet};
    pub use cascada_state::{Binding, Combine, Derived, State, Subscription, combine_latest};
    pub use cascada_values::*;
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use alloc::format;
    use alloc::rc::Rc;
    use alloc::string::ToString;
    use alloc::vec;
    use core::cell::Cell;

    #[test]
    fn handler_fires_once_per_mutation() {
        let h = State::new(Length::from(px(10)));
        let v = State::new(Length::from(px(20)));
        let rule = Rule::new(".hero").background_size(BackgroundSize::new(&h, &v));
        let calls = Rc::new(Cell::new(0));
        rule.on_change({
            let calls = calls.clone();
            move |_, _| calls.set(calls.get() + 1)
        });

        h.set(Length::from(px(15)));
        assert_eq!(calls.get(), 1);
        assert_eq!(
            rule.to_css(&SerializeOptions::MINIFIED),
            ".hero{background-size:15px 20px}"
        );

        h.set(Length::from(px(15)));
        v.set(Length::Auto);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn shared_source_fires_once_per_mutation() {
        let gap = State::new(Length::from(px(4)));
        let radius = State::new(Length::from(px(2)));
        let rule = Rule::new(".chip")
            .padding(Edges::<Length>::axes(&gap, &gap))
            .border_radius(BorderRadius::corners(&radius, &radius, &radius, &radius));
        let calls = Rc::new(Cell::new(0));
        rule.on_change({
            let calls = calls.clone();
            move |_, _| calls.set(calls.get() + 1)
        });
        assert_eq!(gap.listener_count(), 1);
        assert_eq!(radius.listener_count(), 1);

        gap.set(Length::from(px(8)));
        assert_eq!(calls.get(), 1);
        radius.set(Length::from(px(3)));
        assert_eq!(calls.get(), 2);
        assert_eq!(
            rule.to_css(&SerializeOptions::MINIFIED),
            ".chip{padding:8px 8px;border-radius:3px 3px 3px 3px}"
        );
    }

    #[test]
    fn declaration_follows_a_nested_correction() {
        let width = State::new(Length::from(px(50)));
        let _resolve_auto = width.listen({
            let width = width.clone();
            move |value| {
                if *value == Length::Auto {
                    width.set(Length::from(px(100)));
                }
            }
        });
        let rule = Rule::new(".panel").width(&width);

        width.set(Length::Auto);
        assert_eq!(width.get(), Length::from(px(100)));
        assert_eq!(rule.to_css(&SerializeOptions::MINIFIED), ".panel{width:100px}");
        assert_eq!(rule.take_changed(), [0]);
    }

    #[test]
    fn vendor_aliases_are_identical() {
        let rule = Rule::new("p")
            .box_decoration_break(BoxDecorationBreak::Slice)
            .hyphens(Hyphens::Manual)
            .user_select(UserSelect::Text)
            .flex(Flex::Auto);
        for property in rule.declarations() {
            let value = property.css_value();
            let css = property.to_css(true);
            for declaration in css.split(';') {
                assert!(
                    declaration.ends_with(&format!(":{value}")),
                    "{declaration} does not end with {value}"
                );
            }
            assert_eq!(css.split(';').count(), property.aliases().len() + 1);
        }
    }

    #[test]
    fn stylesheet_of_catalogue_rules() {
        let theme = State::new(Color::WHITE);
        let sheet = StyleSheet::new()
            .rule(Rule::new("body").margin(Length::Zero).color(&theme))
            .rule(
                Rule::new(".grid")
                    .display(Display::Grid)
                    .grid_template_columns(TrackList::new().repeat(2_u32, [fr(1)]))
                    .gap(rem(1)),
            );
        theme.set(Color::BLACK);
        assert_eq!(
            sheet.to_string(),
            "body {\n  margin: 0;\n  color: black;\n}\n\n.grid {\n  display: grid;\n  \
             grid-template-columns: repeat(2, 1fr);\n  gap: 1rem;\n}\n"
        );
        assert_eq!(sheet.take_changed(), [(0, vec![1])]);
    }

    #[test]
    fn dropping_a_rule_releases_its_states() {
        let width = State::new(Length::Auto);
        let rule = Rule::new("aside").width(&width).max_width(width.map(Clone::clone));
        assert_eq!(width.listener_count(), 2);
        drop(rule);
        assert_eq!(width.listener_count(), 0);
    }
}
