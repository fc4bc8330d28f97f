// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Defines a CSS keyword enum.
///
/// Each variant maps to exactly one keyword. The generated type gets
/// `as_str`, `ALL`, `Display` and a case-insensitive `FromStr`.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($expected:literal) {
            $($variant:ident = $css:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                #[doc = concat!("`", $css, "`")]
                $variant,
            )+
        }

        impl $name {
            /// Every keyword of this type, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the keyword as written in CSS.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $css,)+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::ValueParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let keyword = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.as_str().eq_ignore_ascii_case(keyword))
                    .ok_or_else(|| $crate::ValueParseError::UnknownKeyword {
                        keyword: ::alloc::string::String::from(keyword),
                        expected: $expected,
                    })
            }
        }
    };
}

/// Lets a plain value be passed where a binding of a wider type is expected.
///
/// `bind_from!(UnitValue => Length)` makes `px(10)` usable as an
/// `impl Into<Binding<Length>>` argument.
macro_rules! bind_from {
    ($($from:ty => $to:ty),+ $(,)?) => {
        $(
            impl From<$from> for ::cascada_state::Binding<$to> {
                fn from(value: $from) -> Self {
                    Self::Constant(<$to>::from(value))
                }
            }
        )+
    };
}
