// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flexible box layout and box alignment.

use cascada_values::{
    AlignContent, AlignItems, AlignSelf, Flex, FlexDirection, FlexWrap, JustifyContent,
    JustifyItems, JustifySelf, Length, Number,
};

define_properties! {
    /// Fluent flexbox and alignment declarations.
    pub trait FlexboxProperties {
        FLEX, flex: Flex = "flex" [WEBKIT | MS];
        FLEX_DIRECTION, flex_direction: FlexDirection = "flex-direction";
        FLEX_WRAP, flex_wrap: FlexWrap = "flex-wrap";
        FLEX_GROW, flex_grow: Number = "flex-grow";
        FLEX_SHRINK, flex_shrink: Number = "flex-shrink";
        FLEX_BASIS, flex_basis: Length = "flex-basis";
        ORDER, order: i32 = "order";
        JUSTIFY_CONTENT, justify_content: JustifyContent = "justify-content";
        JUSTIFY_ITEMS, justify_items: JustifyItems = "justify-items";
        JUSTIFY_SELF, justify_self: JustifySelf = "justify-self";
        ALIGN_CONTENT, align_content: AlignContent = "align-content";
        ALIGN_ITEMS, align_items: AlignItems = "align-items";
        ALIGN_SELF, align_self: AlignSelf = "align-self";
        GAP, gap: Length = "gap";
        ROW_GAP, row_gap: Length = "row-gap";
        COLUMN_GAP, column_gap: Length = "column-gap";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascada_rule::{Rule, SerializeOptions};
    use cascada_state::State;
    use cascada_values::{percent, px};
    use alloc::rc::Rc;
    use core::cell::Cell;

    #[test]
    fn flex_carries_webkit_and_ms_aliases() {
        let property = flex(Flex::grow(1));
        assert_eq!(
            property.to_css(false),
            "-webkit-flex: 1;\n-ms-flex: 1;\nflex: 1;"
        );
    }

    #[test]
    fn aliases_follow_state_together() {
        let grow = State::new(Number::new(1));
        let rule = Rule::new(".item").flex(Flex::new(&grow, Number::new(0), percent(25)));
        let changes = Rc::new(Cell::new(0));
        rule.on_change({
            let changes = changes.clone();
            move |_, _| changes.set(changes.get() + 1)
        });

        grow.set(Number::new(3));
        assert_eq!(changes.get(), 1);
        assert_eq!(
            rule.to_css(&SerializeOptions::MINIFIED),
            ".item{-webkit-flex:3 0 25%;-ms-flex:3 0 25%;flex:3 0 25%}"
        );
    }

    #[test]
    fn container_alignment() {
        let rule = Rule::new(".toolbar")
            .flex_direction(FlexDirection::Row)
            .flex_wrap(FlexWrap::Wrap)
            .justify_content(JustifyContent::SpaceBetween)
            .align_items(AlignItems::Center)
            .gap(px(8));
        assert_eq!(
            rule.to_css(&SerializeOptions::MINIFIED),
            ".toolbar{flex-direction:row;flex-wrap:wrap;justify-content:space-between;\
             align-items:center;gap:8px}"
        );
    }

    #[test]
    fn item_longhands() {
        let rule = Rule::new(".grow")
            .flex_grow(Number::new(2))
            .flex_shrink(Number::new(0.5))
            .flex_basis(Length::Auto)
            .order(-1_i32)
            .align_self(AlignSelf::Center);
        assert_eq!(
            rule.to_css(&SerializeOptions::MINIFIED),
            ".grow{flex-grow:2;flex-shrink:0.5;flex-basis:auto;order:-1;align-self:center}"
        );
    }
}
