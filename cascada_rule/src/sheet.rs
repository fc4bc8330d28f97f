// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stylesheets.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use tracing::debug;

use crate::options::SerializeOptions;
use crate::rule::Rule;

/// An ordered list of rules.
///
/// # Example
///
/// ```rust
/// use cascada_rule::{CssRulable, Rule, SerializeOptions, StyleSheet};
///
/// let mut body = Rule::new("body");
/// body.add_raw("margin", "0");
/// let mut link = Rule::new("a");
/// link.add_raw("color", "inherit");
///
/// let sheet = StyleSheet::new().rule(body).rule(link);
/// assert_eq!(sheet.to_string(), "body {\n  margin: 0;\n}\n\na {\n  color: inherit;\n}\n");
/// assert_eq!(
///     sheet.to_css(&SerializeOptions::MINIFIED),
///     "body{margin:0}a{color:inherit}"
/// );
/// ```
#[derive(Debug, Default)]
pub struct StyleSheet {
    rules: Vec<Rule>,
}

impl StyleSheet {
    /// Creates an empty stylesheet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule, builder style.
    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.push(rule);
        self
    }

    /// Appends a rule.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the sheet has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the rules in order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> + '_ {
        self.rules.iter()
    }

    /// Returns the rules whose declarations changed since they were last
    /// drained, with the changed indices, and drains them.
    pub fn take_changed(&self) -> Vec<(usize, Vec<usize>)> {
        self.rules
            .iter()
            .enumerate()
            .filter(|(_, rule)| rule.has_changes())
            .map(|(index, rule)| (index, rule.take_changed()))
            .collect()
    }

    /// Renders every rule.
    ///
    /// Pretty output separates rules with a blank line; minified output
    /// concatenates them.
    #[must_use]
    pub fn to_css(&self, options: &SerializeOptions) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let result = self.write_css(&mut out, options);
        debug_assert!(result.is_ok(), "formatting into a String failed");
        out
    }

    fn write_css(&self, out: &mut impl fmt::Write, options: &SerializeOptions) -> fmt::Result {
        debug!(
            rules = self.rules.len(),
            minify = options.is_minified(),
            "rendering stylesheet"
        );
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 && !options.is_minified() {
                out.write_char('\n')?;
            }
            rule.write_css(out, options)?;
        }
        Ok(())
    }
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_css(f, &SerializeOptions::default())
    }
}

impl FromIterator<Rule> for StyleSheet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl Extend<Rule> for StyleSheet {
    fn extend<I: IntoIterator<Item = Rule>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CssRulable;
    use alloc::string::ToString;
    use alloc::vec;
    use cascada_property::PropertyKey;
    use cascada_state::State;
    use cascada_values::{Color, NamedColor};

    const COLOR: PropertyKey<Color> = PropertyKey::new("color");

    #[test]
    fn empty_sheet_renders_nothing() {
        let sheet = StyleSheet::new();
        assert!(sheet.is_empty());
        assert_eq!(sheet.to_string(), "");
    }

    #[test]
    fn rules_keep_order() {
        let sheet: StyleSheet = ["h1", "h2", "h3"].into_iter().map(Rule::new).collect();
        let selectors: Vec<_> = sheet.rules().map(Rule::selector).collect();
        assert_eq!(selectors, ["h1", "h2", "h3"]);
        assert_eq!(
            sheet.to_css(&SerializeOptions::MINIFIED),
            "h1{}h2{}h3{}"
        );
    }

    #[test]
    fn take_changed_reports_rules_with_changes() {
        let accent = State::new(Color::from(NamedColor::Navy));
        let mut title = Rule::new(".title");
        title.add_raw("margin", "0");
        title.add_value(COLOR, &accent);
        let mut plain = Rule::new(".plain");
        plain.add_value(COLOR, Color::BLACK);

        let mut sheet = StyleSheet::new();
        sheet.push(plain);
        sheet.push(title);
        assert!(sheet.take_changed().is_empty());

        accent.set(Color::hex(0x000080));
        assert_eq!(sheet.take_changed(), [(1, vec![1])]);
        assert!(sheet.take_changed().is_empty());
        assert_eq!(
            sheet.to_css(&SerializeOptions::MINIFIED),
            ".plain{color:black}.title{margin:0;color:#000080}"
        );
    }
}
