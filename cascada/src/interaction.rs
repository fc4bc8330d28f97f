// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cursor, selection and user-interface behavior.

use cascada_values::{Appearance, Color, Cursor, PointerEvents, Resize, ScrollBehavior, UserSelect};

define_properties! {
    /// Fluent interaction declarations.
    pub trait InteractionProperties {
        CURSOR, cursor: Cursor = "cursor";
        POINTER_EVENTS, pointer_events: PointerEvents = "pointer-events";
        USER_SELECT, user_select: UserSelect = "user-select" [WEBKIT | MOZ | MS];
        APPEARANCE, appearance: Appearance = "appearance" [WEBKIT | MOZ];
        RESIZE, resize: Resize = "resize";
        SCROLL_BEHAVIOR, scroll_behavior: ScrollBehavior = "scroll-behavior";
        CARET_COLOR, caret_color: Color = "caret-color";
        ACCENT_COLOR, accent_color: Color = "accent-color";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascada_property::VendorPrefix;
    use cascada_rule::{Rule, SerializeOptions};
    use cascada_state::State;

    #[test]
    fn user_select_aliases_match_the_value() {
        let selectable = State::new(UserSelect::None);
        let property = user_select(&selectable);
        assert_eq!(
            property.prefixes(),
            VendorPrefix::WEBKIT | VendorPrefix::MOZ | VendorPrefix::MS
        );

        selectable.set(UserSelect::All);
        assert_eq!(
            property.to_css(true),
            "-webkit-user-select:all;-moz-user-select:all;-ms-user-select:all;user-select:all"
        );
    }

    #[test]
    fn appearance_reset() {
        let rule = Rule::new("button")
            .appearance(Appearance::None)
            .cursor(Cursor::Pointer);
        assert_eq!(
            rule.to_css(&SerializeOptions::MINIFIED),
            "button{-webkit-appearance:none;-moz-appearance:none;appearance:none;cursor:pointer}"
        );
        let unprefixed = SerializeOptions::MINIFIED.emit_aliases(false);
        assert_eq!(rule.to_css(&unprefixed), "button{appearance:none;cursor:pointer}");
    }

    #[test]
    fn disabled_state_toggles_pointer_events() {
        let disabled = State::new(false);
        let rule = Rule::new(".control").pointer_events(
            disabled.map(|off| if *off { PointerEvents::None } else { PointerEvents::Auto }),
        );
        disabled.set(true);
        assert_eq!(rule.values(POINTER_EVENTS), [PointerEvents::None]);
    }
}
