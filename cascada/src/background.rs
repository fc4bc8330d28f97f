// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backgrounds and masks.

use cascada_values::{
    Background, BackgroundAttachment, BackgroundPosition, BackgroundRepeat, BackgroundSize,
    BlendMode, BoxDecorationBreak, BoxEdge, Color, Image,
};

define_properties! {
    /// Fluent background declarations.
    pub trait BackgroundProperties {
        BACKGROUND, background: Background = "background";
        BACKGROUND_COLOR, background_color: Color = "background-color";
        BACKGROUND_IMAGE, background_image: Image = "background-image";
        BACKGROUND_POSITION, background_position: BackgroundPosition = "background-position";
        BACKGROUND_SIZE, background_size: BackgroundSize = "background-size";
        BACKGROUND_REPEAT, background_repeat: BackgroundRepeat = "background-repeat";
        BACKGROUND_ATTACHMENT, background_attachment: BackgroundAttachment = "background-attachment";
        BACKGROUND_ORIGIN, background_origin: BoxEdge = "background-origin";
        BACKGROUND_CLIP, background_clip: BoxEdge = "background-clip";
        BACKGROUND_BLEND_MODE, background_blend_mode: BlendMode = "background-blend-mode";
        BOX_DECORATION_BREAK, box_decoration_break: BoxDecorationBreak = "box-decoration-break" [WEBKIT];
        MASK_IMAGE, mask_image: Image = "mask-image" [WEBKIT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use cascada_rule::{Rule, SerializeOptions};
    use cascada_state::State;
    use cascada_values::{Length, LinearGradient, NamedColor, deg, px};
    use alloc::rc::Rc;
    use core::cell::Cell;

    #[test]
    fn background_size_follows_its_sources() {
        let h = State::new(Length::from(px(10)));
        let v = State::new(Length::from(px(20)));
        let property = background_size(BackgroundSize::new(&h, &v));
        let calls = Rc::new(Cell::new(0));
        property.set_change_handler({
            let calls = calls.clone();
            move |_| calls.set(calls.get() + 1)
        });
        assert_eq!(property.css_value(), "10px 20px");

        h.set(Length::from(px(15)));
        assert_eq!(property.css_value(), "15px 20px");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn shorthand_omits_absent_parts() {
        let color_only = background(Background::builder().color(Color::RED).build());
        assert_eq!(color_only.css_value(), "red");

        let layered = background(
            Background::builder()
                .image(LinearGradient::new([NamedColor::White, NamedColor::Black]).angle(deg(90)))
                .repeat(BackgroundRepeat::NoRepeat)
                .build(),
        );
        assert_eq!(
            layered.css_value(),
            "linear-gradient(90deg, white, black) no-repeat"
        );
    }

    #[test]
    fn box_decoration_break_carries_webkit_alias() {
        let rule = Rule::new(".tag").box_decoration_break(BoxDecorationBreak::Clone);
        assert_eq!(
            rule.to_css(&SerializeOptions::MINIFIED),
            ".tag{-webkit-box-decoration-break:clone;box-decoration-break:clone}"
        );
    }

    #[test]
    fn fluent_methods_chain() {
        let rule = Rule::new(".hero")
            .background_color(NamedColor::Navy)
            .background_image(Image::url("hero.png"))
            .background_size(BackgroundSize::Cover)
            .mask_image(Image::None);
        assert_eq!(
            rule.to_string(),
            ".hero {\n  background-color: navy;\n  background-image: url(\"hero.png\");\n  \
             background-size: cover;\n  -webkit-mask-image: none;\n  mask-image: none;\n}\n"
        );
        assert_eq!(rule.values(BACKGROUND_SIZE), [BackgroundSize::Cover]);
    }
}
