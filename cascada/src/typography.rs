// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fonts, text and lists.

use cascada_values::{
    Color, Direction, Font, FontFamily, FontSize, FontStretch, FontStyle, FontVariant,
    FontWeight, Hyphens, Length, LineHeight, ListStylePosition, ListStyleType, OverflowWrap,
    Shadows, TextAlign, TextDecorationLine, TextDecorationStyle, TextOverflow, TextTransform,
    WhiteSpace, WordBreak, WritingMode,
};

define_properties! {
    /// Fluent typography declarations.
    pub trait TypographyProperties {
        COLOR, color: Color = "color";
        FONT, font: Font = "font";
        FONT_FAMILY, font_family: FontFamily = "font-family";
        FONT_SIZE, font_size: FontSize = "font-size";
        FONT_WEIGHT, font_weight: FontWeight = "font-weight";
        FONT_STYLE, font_style: FontStyle = "font-style";
        FONT_VARIANT, font_variant: FontVariant = "font-variant";
        FONT_STRETCH, font_stretch: FontStretch = "font-stretch";
        LINE_HEIGHT, line_height: LineHeight = "line-height";
        LETTER_SPACING, letter_spacing: Length = "letter-spacing";
        WORD_SPACING, word_spacing: Length = "word-spacing";
        TEXT_ALIGN, text_align: TextAlign = "text-align";
        TEXT_INDENT, text_indent: Length = "text-indent";
        TEXT_TRANSFORM, text_transform: TextTransform = "text-transform";
        TEXT_DECORATION_LINE, text_decoration_line: TextDecorationLine = "text-decoration-line";
        TEXT_DECORATION_STYLE, text_decoration_style: TextDecorationStyle = "text-decoration-style";
        TEXT_DECORATION_COLOR, text_decoration_color: Color = "text-decoration-color";
        TEXT_OVERFLOW, text_overflow: TextOverflow = "text-overflow";
        TEXT_SHADOW, text_shadow: Shadows = "text-shadow";
        WHITE_SPACE, white_space: WhiteSpace = "white-space";
        WORD_BREAK, word_break: WordBreak = "word-break";
        OVERFLOW_WRAP, overflow_wrap: OverflowWrap = "overflow-wrap";
        HYPHENS, hyphens: Hyphens = "hyphens" [WEBKIT | MS];
        DIRECTION, direction: Direction = "direction";
        WRITING_MODE, writing_mode: WritingMode = "writing-mode";
        LIST_STYLE_TYPE, list_style_type: ListStyleType = "list-style-type";
        LIST_STYLE_POSITION, list_style_position: ListStylePosition = "list-style-position";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use cascada_rule::{Rule, SerializeOptions};
    use cascada_state::State;
    use cascada_values::{GenericFamily, Number, Shadow, px, rem};

    #[test]
    fn font_shorthand_omits_absent_parts() {
        let plain = font(Font::new(px(16), FontFamily::from(GenericFamily::SansSerif)));
        assert_eq!(plain.css_value(), "16px sans-serif");

        let styled = font(
            Font::builder(rem(1), FontFamily::new(["Open Sans", "Arial"]))
                .weight(FontWeight::Bold)
                .line_height(LineHeight::from(Number::new(1.4)))
                .build(),
        );
        assert_eq!(styled.css_value(), "bold 1rem/1.4 \"Open Sans\", Arial");
    }

    #[test]
    fn font_size_follows_state() {
        let size = State::new(FontSize::from(px(14)));
        let rule = Rule::new("body")
            .font(Font::builder(&size, GenericFamily::Serif).build())
            .color(Color::hex(0x333333));
        size.set(FontSize::from(px(18)));
        assert_eq!(
            rule.to_css(&SerializeOptions::MINIFIED),
            "body{font:18px serif;color:#333333}"
        );
        assert_eq!(rule.values(FONT).len(), 1);
    }

    #[test]
    fn hyphens_carry_webkit_and_ms_aliases() {
        let rule = Rule::new("article").hyphens(Hyphens::Auto).text_align(TextAlign::Justify);
        assert_eq!(
            rule.to_string(),
            "article {\n  -webkit-hyphens: auto;\n  -ms-hyphens: auto;\n  hyphens: auto;\n  \
             text-align: justify;\n}\n"
        );
    }

    #[test]
    fn text_details() {
        let rule = Rule::new("h1")
            .font_weight(FontWeight::number(650))
            .letter_spacing(px(-1))
            .text_transform(TextTransform::Uppercase)
            .text_shadow(Shadow::new(px(0), px(1)).color(Color::BLACK));
        assert_eq!(
            rule.to_css(&SerializeOptions::MINIFIED),
            "h1{font-weight:650;letter-spacing:-1px;text-transform:uppercase;\
             text-shadow:0px 1px black}"
        );
    }
}
