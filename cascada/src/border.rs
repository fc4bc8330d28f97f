// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Borders, corners and outlines.

use cascada_values::{Border, BorderCollapse, BorderRadius, BorderStyle, Color, Edges, Length};

define_properties! {
    /// Fluent border declarations.
    pub trait BorderProperties {
        BORDER, border: Border = "border";
        BORDER_TOP, border_top: Border = "border-top";
        BORDER_RIGHT, border_right: Border = "border-right";
        BORDER_BOTTOM, border_bottom: Border = "border-bottom";
        BORDER_LEFT, border_left: Border = "border-left";
        BORDER_WIDTH, border_width: Edges<Length> = "border-width";
        BORDER_STYLE, border_style: Edges<BorderStyle> = "border-style";
        BORDER_COLOR, border_color: Edges<Color> = "border-color";
        BORDER_RADIUS, border_radius: BorderRadius = "border-radius";
        BORDER_COLLAPSE, border_collapse: BorderCollapse = "border-collapse";
        BORDER_SPACING, border_spacing: Length = "border-spacing";
        OUTLINE, outline: Border = "outline";
        OUTLINE_OFFSET, outline_offset: Length = "outline-offset";
    }
}
