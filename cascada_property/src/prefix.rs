// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vendor prefixes.

use alloc::format;
use alloc::string::String;

use smallvec::SmallVec;

bitflags::bitflags! {
    /// Vendor prefixes a declaration is duplicated under.
    ///
    /// Prefixed aliases are written in flag order: `-webkit-`, `-moz-`,
    /// `-ms-`, `-o-`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct VendorPrefix: u8 {
        /// `-webkit-`
        const WEBKIT = 0b0000_0001;
        /// `-moz-`
        const MOZ    = 0b0000_0010;
        /// `-ms-`
        const MS     = 0b0000_0100;
        /// `-o-`
        const O      = 0b0000_1000;
    }
}

impl VendorPrefix {
    /// Returns the prefix text for a single flag, or `""` for an empty or
    /// combined set.
    #[must_use]
    pub fn prefix_str(self) -> &'static str {
        if self == Self::WEBKIT {
            "-webkit-"
        } else if self == Self::MOZ {
            "-moz-"
        } else if self == Self::MS {
            "-ms-"
        } else if self == Self::O {
            "-o-"
        } else {
            ""
        }
    }

    /// Returns `name` under every prefix in this set.
    ///
    /// ```rust
    /// use cascada_property::VendorPrefix;
    ///
    /// let aliases = (VendorPrefix::WEBKIT | VendorPrefix::MS).apply("hyphens");
    /// assert_eq!(aliases.as_slice(), ["-webkit-hyphens", "-ms-hyphens"]);
    /// ```
    #[must_use]
    pub fn apply(self, name: &str) -> SmallVec<[String; 3]> {
        self.iter()
            .map(|prefix| format!("{}{name}", prefix.prefix_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_flags_have_text() {
        assert_eq!(VendorPrefix::MOZ.prefix_str(), "-moz-");
        assert_eq!(VendorPrefix::O.prefix_str(), "-o-");
        assert_eq!(VendorPrefix::empty().prefix_str(), "");
        assert_eq!(VendorPrefix::all().prefix_str(), "");
    }

    #[test]
    fn apply_keeps_flag_order() {
        let prefixes = VendorPrefix::MS | VendorPrefix::WEBKIT | VendorPrefix::MOZ;
        let aliases = prefixes.apply("user-select");
        assert_eq!(
            aliases.as_slice(),
            ["-webkit-user-select", "-moz-user-select", "-ms-user-select"]
        );
        assert!(VendorPrefix::empty().apply("flex").is_empty());
    }
}
