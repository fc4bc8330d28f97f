// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyword-only value domains.
//!
//! Every type here is a closed set of CSS identifiers. A value of one
//! property's keyword type cannot be passed where another property expects a
//! different set, so mixing up `border-style` and `display` keywords does not
//! compile.

keyword_enum! {
    /// CSS-wide keywords accepted by every property.
    pub enum CssWide("CSS-wide keyword") {
        Inherit = "inherit",
        Initial = "initial",
        Unset = "unset",
        Revert = "revert",
        RevertLayer = "revert-layer",
    }
}

keyword_enum! {
    /// `display` values.
    pub enum Display("display") {
        Block = "block",
        Inline = "inline",
        InlineBlock = "inline-block",
        Flex = "flex",
        InlineFlex = "inline-flex",
        Grid = "grid",
        InlineGrid = "inline-grid",
        FlowRoot = "flow-root",
        Contents = "contents",
        Table = "table",
        TableRow = "table-row",
        TableCell = "table-cell",
        ListItem = "list-item",
        None = "none",
    }
}

keyword_enum! {
    /// `position` values.
    pub enum Position("position") {
        Static = "static",
        Relative = "relative",
        Absolute = "absolute",
        Fixed = "fixed",
        Sticky = "sticky",
    }
}

keyword_enum! {
    /// `overflow`, `overflow-x` and `overflow-y` values.
    pub enum Overflow("overflow") {
        Visible = "visible",
        Hidden = "hidden",
        Clip = "clip",
        Scroll = "scroll",
        Auto = "auto",
    }
}

keyword_enum! {
    /// `visibility` values.
    pub enum Visibility("visibility") {
        Visible = "visible",
        Hidden = "hidden",
        Collapse = "collapse",
    }
}

keyword_enum! {
    /// `box-sizing` values.
    pub enum BoxSizing("box-sizing") {
        ContentBox = "content-box",
        BorderBox = "border-box",
    }
}

keyword_enum! {
    /// `border-style` and `outline-style` values.
    pub enum BorderStyle("border style") {
        None = "none",
        Hidden = "hidden",
        Dotted = "dotted",
        Dashed = "dashed",
        Solid = "solid",
        Double = "double",
        Groove = "groove",
        Ridge = "ridge",
        Inset = "inset",
        Outset = "outset",
    }
}

keyword_enum! {
    /// `float` values.
    pub enum Float("float") {
        Left = "left",
        Right = "right",
        None = "none",
        InlineStart = "inline-start",
        InlineEnd = "inline-end",
    }
}

keyword_enum! {
    /// `clear` values.
    pub enum Clear("clear") {
        None = "none",
        Left = "left",
        Right = "right",
        Both = "both",
        InlineStart = "inline-start",
        InlineEnd = "inline-end",
    }
}

keyword_enum! {
    /// `vertical-align` keywords.
    pub enum VerticalAlign("vertical-align") {
        Baseline = "baseline",
        Sub = "sub",
        Super = "super",
        TextTop = "text-top",
        TextBottom = "text-bottom",
        Middle = "middle",
        Top = "top",
        Bottom = "bottom",
    }
}

keyword_enum! {
    /// `flex-direction` values.
    pub enum FlexDirection("flex-direction") {
        Row = "row",
        RowReverse = "row-reverse",
        Column = "column",
        ColumnReverse = "column-reverse",
    }
}

keyword_enum! {
    /// `flex-wrap` values.
    pub enum FlexWrap("flex-wrap") {
        NoWrap = "nowrap",
        Wrap = "wrap",
        WrapReverse = "wrap-reverse",
    }
}

keyword_enum! {
    /// `justify-content` values.
    pub enum JustifyContent("justify-content") {
        Normal = "normal",
        FlexStart = "flex-start",
        FlexEnd = "flex-end",
        Start = "start",
        End = "end",
        Center = "center",
        Left = "left",
        Right = "right",
        SpaceBetween = "space-between",
        SpaceAround = "space-around",
        SpaceEvenly = "space-evenly",
        Stretch = "stretch",
    }
}

keyword_enum! {
    /// `align-items` values.
    pub enum AlignItems("align-items") {
        Normal = "normal",
        Stretch = "stretch",
        Center = "center",
        Start = "start",
        End = "end",
        FlexStart = "flex-start",
        FlexEnd = "flex-end",
        SelfStart = "self-start",
        SelfEnd = "self-end",
        Baseline = "baseline",
    }
}

keyword_enum! {
    /// `align-content` values.
    pub enum AlignContent("align-content") {
        Normal = "normal",
        Center = "center",
        Start = "start",
        End = "end",
        FlexStart = "flex-start",
        FlexEnd = "flex-end",
        SpaceBetween = "space-between",
        SpaceAround = "space-around",
        SpaceEvenly = "space-evenly",
        Stretch = "stretch",
        Baseline = "baseline",
    }
}

keyword_enum! {
    /// `align-self` values.
    pub enum AlignSelf("align-self") {
        Auto = "auto",
        Normal = "normal",
        Center = "center",
        Start = "start",
        End = "end",
        SelfStart = "self-start",
        SelfEnd = "self-end",
        FlexStart = "flex-start",
        FlexEnd = "flex-end",
        Baseline = "baseline",
        Stretch = "stretch",
    }
}

keyword_enum! {
    /// `justify-items` values.
    pub enum JustifyItems("justify-items") {
        Normal = "normal",
        Stretch = "stretch",
        Center = "center",
        Start = "start",
        End = "end",
        Left = "left",
        Right = "right",
        Baseline = "baseline",
        Legacy = "legacy",
    }
}

keyword_enum! {
    /// `justify-self` values.
    pub enum JustifySelf("justify-self") {
        Auto = "auto",
        Normal = "normal",
        Stretch = "stretch",
        Center = "center",
        Start = "start",
        End = "end",
        Left = "left",
        Right = "right",
        Baseline = "baseline",
    }
}

keyword_enum! {
    /// `grid-auto-flow` values.
    pub enum GridAutoFlow("grid-auto-flow") {
        Row = "row",
        Column = "column",
        Dense = "dense",
        RowDense = "row dense",
        ColumnDense = "column dense",
    }
}

keyword_enum! {
    /// `text-align` values.
    pub enum TextAlign("text-align") {
        Left = "left",
        Right = "right",
        Center = "center",
        Justify = "justify",
        Start = "start",
        End = "end",
        MatchParent = "match-parent",
    }
}

keyword_enum! {
    /// `text-transform` values.
    pub enum TextTransform("text-transform") {
        None = "none",
        Capitalize = "capitalize",
        Uppercase = "uppercase",
        Lowercase = "lowercase",
        FullWidth = "full-width",
    }
}

keyword_enum! {
    /// `text-decoration-line` values.
    pub enum TextDecorationLine("text-decoration-line") {
        None = "none",
        Underline = "underline",
        Overline = "overline",
        LineThrough = "line-through",
    }
}

keyword_enum! {
    /// `text-decoration-style` values.
    pub enum TextDecorationStyle("text-decoration-style") {
        Solid = "solid",
        Double = "double",
        Dotted = "dotted",
        Dashed = "dashed",
        Wavy = "wavy",
    }
}

keyword_enum! {
    /// `text-overflow` values.
    pub enum TextOverflow("text-overflow") {
        Clip = "clip",
        Ellipsis = "ellipsis",
    }
}

keyword_enum! {
    /// `white-space` values.
    pub enum WhiteSpace("white-space") {
        Normal = "normal",
        NoWrap = "nowrap",
        Pre = "pre",
        PreWrap = "pre-wrap",
        PreLine = "pre-line",
        BreakSpaces = "break-spaces",
    }
}

keyword_enum! {
    /// `word-break` values.
    pub enum WordBreak("word-break") {
        Normal = "normal",
        BreakAll = "break-all",
        KeepAll = "keep-all",
        BreakWord = "break-word",
    }
}

keyword_enum! {
    /// `overflow-wrap` values.
    pub enum OverflowWrap("overflow-wrap") {
        Normal = "normal",
        BreakWord = "break-word",
        Anywhere = "anywhere",
    }
}

keyword_enum! {
    /// `font-style` values.
    pub enum FontStyle("font-style") {
        Normal = "normal",
        Italic = "italic",
        Oblique = "oblique",
    }
}

keyword_enum! {
    /// `font-variant` values (CSS 2.1 subset usable in the `font` shorthand).
    pub enum FontVariant("font-variant") {
        Normal = "normal",
        SmallCaps = "small-caps",
    }
}

keyword_enum! {
    /// `font-stretch` keywords.
    pub enum FontStretch("font-stretch") {
        UltraCondensed = "ultra-condensed",
        ExtraCondensed = "extra-condensed",
        Condensed = "condensed",
        SemiCondensed = "semi-condensed",
        Normal = "normal",
        SemiExpanded = "semi-expanded",
        Expanded = "expanded",
        ExtraExpanded = "extra-expanded",
        UltraExpanded = "ultra-expanded",
    }
}

keyword_enum! {
    /// `cursor` keywords.
    pub enum Cursor("cursor") {
        Auto = "auto",
        Default = "default",
        None = "none",
        Pointer = "pointer",
        Text = "text",
        Move = "move",
        Wait = "wait",
        Progress = "progress",
        Help = "help",
        Crosshair = "crosshair",
        NotAllowed = "not-allowed",
        Grab = "grab",
        Grabbing = "grabbing",
        ZoomIn = "zoom-in",
        ZoomOut = "zoom-out",
        ColResize = "col-resize",
        RowResize = "row-resize",
        EwResize = "ew-resize",
        NsResize = "ns-resize",
        ContextMenu = "context-menu",
        Cell = "cell",
        Copy = "copy",
    }
}

keyword_enum! {
    /// `pointer-events` values (HTML subset).
    pub enum PointerEvents("pointer-events") {
        Auto = "auto",
        None = "none",
    }
}

keyword_enum! {
    /// `user-select` values.
    pub enum UserSelect("user-select") {
        Auto = "auto",
        None = "none",
        Text = "text",
        All = "all",
        Contain = "contain",
    }
}

keyword_enum! {
    /// `hyphens` values.
    pub enum Hyphens("hyphens") {
        None = "none",
        Manual = "manual",
        Auto = "auto",
    }
}

keyword_enum! {
    /// `box-decoration-break` values.
    pub enum BoxDecorationBreak("box-decoration-break") {
        Slice = "slice",
        Clone = "clone",
    }
}

keyword_enum! {
    /// `appearance` values.
    pub enum Appearance("appearance") {
        None = "none",
        Auto = "auto",
        Button = "button",
        Textfield = "textfield",
        Menulist = "menulist",
    }
}

keyword_enum! {
    /// `background-repeat` values.
    pub enum BackgroundRepeat("background-repeat") {
        Repeat = "repeat",
        RepeatX = "repeat-x",
        RepeatY = "repeat-y",
        NoRepeat = "no-repeat",
        Space = "space",
        Round = "round",
    }
}

keyword_enum! {
    /// `background-attachment` values.
    pub enum BackgroundAttachment("background-attachment") {
        Scroll = "scroll",
        Fixed = "fixed",
        Local = "local",
    }
}

keyword_enum! {
    /// Box edges used by `background-clip` and `background-origin`.
    pub enum BoxEdge("box edge") {
        BorderBox = "border-box",
        PaddingBox = "padding-box",
        ContentBox = "content-box",
        Text = "text",
    }
}

keyword_enum! {
    /// `object-fit` values.
    pub enum ObjectFit("object-fit") {
        Fill = "fill",
        Contain = "contain",
        Cover = "cover",
        None = "none",
        ScaleDown = "scale-down",
    }
}

keyword_enum! {
    /// `resize` values.
    pub enum Resize("resize") {
        None = "none",
        Both = "both",
        Horizontal = "horizontal",
        Vertical = "vertical",
        Block = "block",
        Inline = "inline",
    }
}

keyword_enum! {
    /// `list-style-type` keywords.
    pub enum ListStyleType("list-style-type") {
        None = "none",
        Disc = "disc",
        Circle = "circle",
        Square = "square",
        Decimal = "decimal",
        DecimalLeadingZero = "decimal-leading-zero",
        LowerRoman = "lower-roman",
        UpperRoman = "upper-roman",
        LowerAlpha = "lower-alpha",
        UpperAlpha = "upper-alpha",
        LowerGreek = "lower-greek",
    }
}

keyword_enum! {
    /// `list-style-position` values.
    pub enum ListStylePosition("list-style-position") {
        Inside = "inside",
        Outside = "outside",
    }
}

keyword_enum! {
    /// `table-layout` values.
    pub enum TableLayout("table-layout") {
        Auto = "auto",
        Fixed = "fixed",
    }
}

keyword_enum! {
    /// `border-collapse` values.
    pub enum BorderCollapse("border-collapse") {
        Collapse = "collapse",
        Separate = "separate",
    }
}

keyword_enum! {
    /// `direction` values.
    pub enum Direction("direction") {
        Ltr = "ltr",
        Rtl = "rtl",
    }
}

keyword_enum! {
    /// `writing-mode` values.
    pub enum WritingMode("writing-mode") {
        HorizontalTb = "horizontal-tb",
        VerticalRl = "vertical-rl",
        VerticalLr = "vertical-lr",
    }
}

keyword_enum! {
    /// `isolation` values.
    pub enum Isolation("isolation") {
        Auto = "auto",
        Isolate = "isolate",
    }
}

keyword_enum! {
    /// `mix-blend-mode` and `background-blend-mode` values.
    pub enum BlendMode("blend mode") {
        Normal = "normal",
        Multiply = "multiply",
        Screen = "screen",
        Overlay = "overlay",
        Darken = "darken",
        Lighten = "lighten",
        ColorDodge = "color-dodge",
        ColorBurn = "color-burn",
        HardLight = "hard-light",
        SoftLight = "soft-light",
        Difference = "difference",
        Exclusion = "exclusion",
        Hue = "hue",
        Saturation = "saturation",
        Color = "color",
        Luminosity = "luminosity",
    }
}

keyword_enum! {
    /// `scroll-behavior` values.
    pub enum ScrollBehavior("scroll-behavior") {
        Auto = "auto",
        Smooth = "smooth",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};
    use crate::ValueParseError;

    #[test]
    fn display_uses_css_spelling() {
        assert_eq!(Display::InlineBlock.to_string(), "inline-block");
        assert_eq!(FlexWrap::NoWrap.to_string(), "nowrap");
        assert_eq!(GridAutoFlow::RowDense.to_string(), "row dense");
        assert_eq!(CssWide::RevertLayer.as_str(), "revert-layer");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(" Space-Between ".parse::<JustifyContent>(), Ok(JustifyContent::SpaceBetween));
        assert_eq!("NONE".parse::<UserSelect>(), Ok(UserSelect::None));
    }

    #[test]
    fn parse_rejects_foreign_keywords() {
        assert_eq!(
            "flex".parse::<BorderStyle>(),
            Err(ValueParseError::UnknownKeyword {
                keyword: String::from("flex"),
                expected: "border style",
            })
        );
    }

    #[test]
    fn all_round_trips() {
        for keyword in Cursor::ALL {
            assert_eq!(keyword.as_str().parse::<Cursor>(), Ok(*keyword));
        }
    }
}
