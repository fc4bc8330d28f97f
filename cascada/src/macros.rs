// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Defines a group of CSS properties.
///
/// Each entry `KEY, method: Type = "css-name" [PREFIX | ...];` produces:
///
/// - `KEY`, a `PropertyKey<Type>` constant,
/// - `method(value)`, a free function returning the `Property`, with the
///   listed vendor aliases attached,
/// - a fluent `method` on the group's extension trait, which is implemented
///   for every `CssRulable`.
///
/// The prefix list is optional.
macro_rules! define_properties {
    (
        $(#[$trait_meta:meta])*
        $vis:vis trait $trait_name:ident {
            $(
                $key:ident, $method:ident: $ty:ty = $css:literal
                $([$($prefix:ident)|+])?;
            )+
        }
    ) => {
        $(
            #[doc = concat!("Key of the `", $css, "` property.")]
            $vis const $key: $crate::property::PropertyKey<$ty> =
                $crate::property::PropertyKey::new($css);

            #[doc = concat!("Creates a `", $css, "` declaration.")]
            $(
                #[doc = ""]
                #[doc = concat!(
                    "Also emitted under the vendor prefixes",
                    $(" `", stringify!($prefix), "`",)+
                    "."
                )]
            )?
            $vis fn $method(
                value: impl Into<$crate::state::Binding<$ty>>,
            ) -> $crate::property::Property {
                $crate::property::Property::new($key, value).with_prefixes(
                    $crate::property::VendorPrefix::empty()
                        $($(| $crate::property::VendorPrefix::$prefix)+)?,
                )
            }
        )+

        $(#[$trait_meta])*
        $vis trait $trait_name: $crate::rule::CssRulable + Sized {
            $(
                #[doc = concat!("Adds a `", $css, "` declaration.")]
                fn $method(mut self, value: impl Into<$crate::state::Binding<$ty>>) -> Self {
                    self.add_property($method(value));
                    self
                }
            )+
        }

        impl<R: $crate::rule::CssRulable> $trait_name for R {}
    };
}
