// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering options.

/// Controls how rules and stylesheets are rendered to CSS text.
///
/// The default is pretty output with a two-space indent and vendor aliases
/// included.
///
/// ```rust
/// use cascada_rule::SerializeOptions;
///
/// let options = SerializeOptions::new().indent(4).emit_aliases(false);
/// assert!(!options.is_minified());
/// assert_eq!(options.indent_width(), 4);
/// assert!(!options.emits_aliases());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SerializeOptions {
    minify: bool,
    indent: usize,
    emit_aliases: bool,
}

impl SerializeOptions {
    /// Pretty output, two-space indent, aliases on.
    pub const PRETTY: Self = Self {
        minify: false,
        indent: 2,
        emit_aliases: true,
    };

    /// Minified output with aliases.
    pub const MINIFIED: Self = Self {
        minify: true,
        indent: 0,
        emit_aliases: true,
    };

    /// Creates the default options.
    #[must_use]
    pub const fn new() -> Self {
        Self::PRETTY
    }

    /// Drops all optional whitespace when `minify` is `true`.
    #[must_use]
    pub const fn minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    /// Sets the number of spaces declarations are indented by.
    ///
    /// Ignored when minifying.
    #[must_use]
    pub const fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Chooses whether vendor-prefixed aliases are written.
    #[must_use]
    pub const fn emit_aliases(mut self, emit_aliases: bool) -> Self {
        self.emit_aliases = emit_aliases;
        self
    }

    /// Returns `true` for minified output.
    #[must_use]
    pub const fn is_minified(&self) -> bool {
        self.minify
    }

    /// Returns the indent width in spaces.
    #[must_use]
    pub const fn indent_width(&self) -> usize {
        self.indent
    }

    /// Returns `true` when vendor aliases are written.
    #[must_use]
    pub const fn emits_aliases(&self) -> bool {
        self.emit_aliases
    }
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_pretty() {
        let options = SerializeOptions::default();
        assert_eq!(options, SerializeOptions::PRETTY);
        assert!(!options.is_minified());
        assert_eq!(options.indent_width(), 2);
        assert!(options.emits_aliases());
    }

    #[test]
    fn setters_chain() {
        let options = SerializeOptions::new().minify(true).indent(0);
        assert_eq!(options, SerializeOptions::MINIFIED);
    }
}
