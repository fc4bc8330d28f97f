// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display, positioning, sizing and spacing.

use cascada_values::{
    BoxSizing, Clear, Display, Edges, Float, Isolation, Length, ObjectFit, Overflow, Position,
    TableLayout, VerticalAlign, Visibility,
};

define_properties! {
    /// Fluent box model declarations.
    pub trait BoxModelProperties {
        DISPLAY, display: Display = "display";
        POSITION, position: Position = "position";
        TOP, top: Length = "top";
        RIGHT, right: Length = "right";
        BOTTOM, bottom: Length = "bottom";
        LEFT, left: Length = "left";
        INSET, inset: Edges<Length> = "inset";
        Z_INDEX, z_index: i32 = "z-index";
        WIDTH, width: Length = "width";
        HEIGHT, height: Length = "height";
        MIN_WIDTH, min_width: Length = "min-width";
        MIN_HEIGHT, min_height: Length = "min-height";
        MAX_WIDTH, max_width: Length = "max-width";
        MAX_HEIGHT, max_height: Length = "max-height";
        BOX_SIZING, box_sizing: BoxSizing = "box-sizing";
        MARGIN, margin: Edges<Length> = "margin";
        MARGIN_TOP, margin_top: Length = "margin-top";
        MARGIN_RIGHT, margin_right: Length = "margin-right";
        MARGIN_BOTTOM, margin_bottom: Length = "margin-bottom";
        MARGIN_LEFT, margin_left: Length = "margin-left";
        PADDING, padding: Edges<Length> = "padding";
        PADDING_TOP, padding_top: Length = "padding-top";
        PADDING_RIGHT, padding_right: Length = "padding-right";
        PADDING_BOTTOM, padding_bottom: Length = "padding-bottom";
        PADDING_LEFT, padding_left: Length = "padding-left";
        OVERFLOW, overflow: Overflow = "overflow";
        OVERFLOW_X, overflow_x: Overflow = "overflow-x";
        OVERFLOW_Y, overflow_y: Overflow = "overflow-y";
        VISIBILITY, visibility: Visibility = "visibility";
        FLOAT, float: Float = "float";
        CLEAR, clear: Clear = "clear";
        VERTICAL_ALIGN, vertical_align: VerticalAlign = "vertical-align";
        OBJECT_FIT, object_fit: ObjectFit = "object-fit";
        ISOLATION, isolation: Isolation = "isolation";
        TABLE_LAYOUT, table_layout: TableLayout = "table-layout";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascada_rule::{CssRulable, Rule, SerializeOptions};
    use cascada_state::State;
    use alloc::vec::Vec;
    use cascada_property::Property;
    use cascada_values::{CssWide, percent, px, rem};

    #[test]
    fn sizing_and_spacing() {
        let rule = Rule::new(".card")
            .display(Display::Block)
            .box_sizing(BoxSizing::BorderBox)
            .width(percent(100))
            .max_width(rem(40))
            .margin(Edges::<Length>::axes(Length::Zero, Length::Auto))
            .padding(px(16));
        assert_eq!(
            rule.to_css(&SerializeOptions::MINIFIED),
            ".card{display:block;box-sizing:border-box;width:100%;max-width:40rem;\
             margin:0 auto;padding:16px}"
        );
    }

    #[test]
    fn padding_sides_track_state() {
        let gutter = State::new(Length::from(px(8)));
        let rule = Rule::new(".row").padding(Edges::<Length>::axes(Length::Zero, &gutter));
        gutter.set(Length::from(px(12)));
        assert_eq!(rule.to_css(&SerializeOptions::MINIFIED), ".row{padding:0 12px}");
        assert_eq!(rule.take_changed(), [0]);
    }

    #[test]
    fn z_index_and_position() {
        let layer = State::new(1_i32);
        let rule = Rule::new(".modal")
            .position(Position::Fixed)
            .inset(Length::Zero)
            .z_index(&layer);
        layer.set(100);
        assert_eq!(
            rule.to_css(&SerializeOptions::MINIFIED),
            ".modal{position:fixed;inset:0;z-index:100}"
        );
    }

    #[test]
    fn declaration_lists_reach_shadowed_methods_through_the_trait() {
        let list: Vec<Property> = Vec::new();
        let list = BoxModelProperties::clear(list, Clear::Both).float(Float::Left);
        let css: Vec<_> = list.iter().map(|property| property.to_css(true)).collect();
        assert_eq!(css, ["clear:both", "float:left"]);
    }

    #[test]
    fn fluent_calls_work_through_references() {
        let mut rule = Rule::new("img");
        {
            let target = &mut rule;
            target.object_fit(ObjectFit::Cover).vertical_align(VerticalAlign::Middle);
        }
        rule.reset(WIDTH, CssWide::Unset);
        assert_eq!(
            rule.to_css(&SerializeOptions::MINIFIED),
            "img{object-fit:cover;vertical-align:middle;width:unset}"
        );
        assert!(rule.contains(OBJECT_FIT.name()));
    }
}
