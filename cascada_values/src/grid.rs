// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid track lists, templates and placement.

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use cascada_state::{Binding, Combine};

use crate::length::Length;
use crate::number::Joiner;
use crate::unit::UnitValue;

/// One track sizing function.
///
/// ```rust
/// use cascada_values::{Length, TrackSize, fr, px};
///
/// assert_eq!(TrackSize::from(fr(1)).to_string(), "1fr");
/// assert_eq!(TrackSize::minmax(px(100), fr(1)).to_string(), "minmax(100px, 1fr)");
/// assert_eq!(TrackSize::FitContent(Length::from(px(40))).to_string(), "fit-content(40px)");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum TrackSize {
    /// A fixed breadth, flexible `fr` or sizing keyword.
    Breadth(Length),
    /// `minmax(min, max)`
    MinMax(Length, Length),
    /// `fit-content(limit)`
    FitContent(Length),
}

impl TrackSize {
    /// `minmax(min, max)`
    #[must_use]
    pub fn minmax(min: impl Into<Length>, max: impl Into<Length>) -> Self {
        Self::MinMax(min.into(), max.into())
    }
}

impl fmt::Display for TrackSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Breadth(breadth) => breadth.fmt(f),
            Self::MinMax(min, max) => write!(f, "minmax({min}, {max})"),
            Self::FitContent(limit) => write!(f, "fit-content({limit})"),
        }
    }
}

impl From<Length> for TrackSize {
    fn from(breadth: Length) -> Self {
        Self::Breadth(breadth)
    }
}

impl From<UnitValue> for TrackSize {
    fn from(breadth: UnitValue) -> Self {
        Self::Breadth(Length::Value(breadth))
    }
}

/// The count argument of `repeat()`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RepeatCount {
    /// A fixed number of repetitions.
    Count(u32),
    /// `auto-fill`
    AutoFill,
    /// `auto-fit`
    AutoFit,
}

impl fmt::Display for RepeatCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(count) => write!(f, "{count}"),
            Self::AutoFill => f.write_str("auto-fill"),
            Self::AutoFit => f.write_str("auto-fit"),
        }
    }
}

impl From<u32> for RepeatCount {
    fn from(count: u32) -> Self {
        Self::Count(count)
    }
}

/// An entry of a [`TrackList`].
#[derive(Clone, Debug, PartialEq)]
pub enum TrackListItem {
    /// A single track.
    Track(TrackSize),
    /// `repeat(count, tracks)`
    Repeat(RepeatCount, Vec<TrackSize>),
    /// `[name ...]`
    LineNames(Vec<String>),
}

impl fmt::Display for TrackListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Track(track) => track.fmt(f),
            Self::Repeat(count, tracks) => {
                write!(f, "repeat({count}, ")?;
                Joiner::new(f, " ").all(tracks)?;
                f.write_str(")")
            }
            Self::LineNames(names) => {
                f.write_str("[")?;
                Joiner::new(f, " ").all(names)?;
                f.write_str("]")
            }
        }
    }
}

/// The value of `grid-template-rows` and `grid-template-columns`.
///
/// An empty list serializes as `none`.
///
/// ```rust
/// use cascada_values::{RepeatCount, TrackList, TrackSize, fr, px};
///
/// let columns = TrackList::new()
///     .names(["full-start"])
///     .track(px(200))
///     .repeat(RepeatCount::AutoFill, [TrackSize::minmax(px(100), fr(1))]);
/// assert_eq!(
///     columns.to_string(),
///     "[full-start] 200px repeat(auto-fill, minmax(100px, 1fr))"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackList(pub Vec<TrackListItem>);

impl TrackList {
    /// An empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a track.
    #[must_use]
    pub fn track(mut self, track: impl Into<TrackSize>) -> Self {
        self.0.push(TrackListItem::Track(track.into()));
        self
    }

    /// Appends a `repeat()` of `tracks`.
    #[must_use]
    pub fn repeat<S: Into<TrackSize>>(
        mut self,
        count: impl Into<RepeatCount>,
        tracks: impl IntoIterator<Item = S>,
    ) -> Self {
        let tracks = tracks.into_iter().map(Into::into).collect();
        self.0.push(TrackListItem::Repeat(count.into(), tracks));
        self
    }

    /// Appends a set of line names.
    #[must_use]
    pub fn names<N: Into<String>>(mut self, names: impl IntoIterator<Item = N>) -> Self {
        let names = names.into_iter().map(Into::into).collect();
        self.0.push(TrackListItem::LineNames(names));
        self
    }
}

impl fmt::Display for TrackList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("none");
        }
        Joiner::new(f, " ").all(&self.0)
    }
}

impl<S: Into<TrackSize>> FromIterator<S> for TrackList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|track| TrackListItem::Track(track.into()))
                .collect(),
        )
    }
}

impl From<TrackSize> for TrackList {
    fn from(track: TrackSize) -> Self {
        Self(vec![TrackListItem::Track(track)])
    }
}

bind_from!(TrackSize => TrackList);

/// The `grid-template` shorthand: `rows / columns`.
///
/// ```rust
/// use cascada_values::{GridTemplate, TrackList, fr, px};
///
/// let rows: TrackList = [px(60)].into_iter().collect();
/// let columns: TrackList = [fr(1), fr(2)].into_iter().collect();
/// let template = GridTemplate::new(rows, columns);
/// assert_eq!(template.get().to_string(), "60px / 1fr 2fr");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridTemplate {
    /// Row tracks.
    pub rows: TrackList,
    /// Column tracks.
    pub columns: TrackList,
}

impl GridTemplate {
    /// Rows and columns, each of which may be bound to state.
    pub fn new(
        rows: impl Into<Binding<TrackList>>,
        columns: impl Into<Binding<TrackList>>,
    ) -> Binding<Self> {
        let rows: Binding<TrackList> = rows.into();
        let columns: Binding<TrackList> = columns.into();
        (rows, columns).combine(|(rows, columns)| Self { rows, columns })
    }
}

impl fmt::Display for GridTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.0.is_empty() && self.columns.0.is_empty() {
            return f.write_str("none");
        }
        write!(f, "{} / {}", self.rows, self.columns)
    }
}

/// The `grid-template-areas` value: one string per row.
///
/// ```rust
/// use cascada_values::GridTemplateAreas;
///
/// let areas = GridTemplateAreas::new(["header header", "sidebar main"]);
/// assert_eq!(areas.to_string(), "\"header header\" \"sidebar main\"");
/// assert_eq!(GridTemplateAreas::default().to_string(), "none");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridTemplateAreas(pub Vec<String>);

impl GridTemplateAreas {
    /// Rows of area names, top to bottom.
    #[must_use]
    pub fn new<R: Into<String>>(rows: impl IntoIterator<Item = R>) -> Self {
        Self(rows.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for GridTemplateAreas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("none");
        }
        let mut out = Joiner::new(f, " ");
        for row in &self.0 {
            out.item(&format_args!("\"{row}\""))?;
        }
        Ok(())
    }
}

/// A grid line reference, as used by `grid-row-start` and friends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridLine {
    /// `auto`
    Auto,
    /// A line number; negative numbers count from the end.
    Line(i32),
    /// `span n`
    Span(u32),
    /// A named line or area.
    Named(String),
    /// The nth line with a given name.
    NamedLine(String, i32),
}

impl fmt::Display for GridLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Line(line) => write!(f, "{line}"),
            Self::Span(span) => write!(f, "span {span}"),
            Self::Named(name) => f.write_str(name),
            Self::NamedLine(name, nth) => write!(f, "{name} {nth}"),
        }
    }
}

impl From<i32> for GridLine {
    fn from(line: i32) -> Self {
        Self::Line(line)
    }
}

impl From<&str> for GridLine {
    fn from(name: &str) -> Self {
        Self::Named(name.to_owned())
    }
}

/// The `grid-row` and `grid-column` shorthands: `start [/ end]`.
///
/// ```rust
/// use cascada_values::{GridLine, GridPlacement};
///
/// let placement = GridPlacement::new(GridLine::Line(1), GridLine::Span(2));
/// assert_eq!(placement.get().to_string(), "1 / span 2");
/// assert_eq!(GridPlacement::from(GridLine::Line(3)).to_string(), "3");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridPlacement {
    /// Start line.
    pub start: GridLine,
    /// End line; omitted when absent.
    pub end: Option<GridLine>,
}

impl GridPlacement {
    /// Start and end lines, each of which may be bound to state.
    pub fn new(
        start: impl Into<Binding<GridLine>>,
        end: impl Into<Binding<GridLine>>,
    ) -> Binding<Self> {
        let start: Binding<GridLine> = start.into();
        let end: Binding<GridLine> = end.into();
        (start, end).combine(|(start, end)| Self {
            start,
            end: Some(end),
        })
    }
}

impl fmt::Display for GridPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = Joiner::new(f, " / ");
        out.item(&self.start)?;
        out.opt(self.end.as_ref())
    }
}

impl From<GridLine> for GridPlacement {
    fn from(start: GridLine) -> Self {
        Self { start, end: None }
    }
}

bind_from!(GridLine => GridPlacement);

/// The `grid-area` shorthand.
///
/// ```rust
/// use cascada_values::{GridArea, GridLine};
///
/// assert_eq!(GridArea::named("main").to_string(), "main");
/// let area = GridArea::Lines {
///     row_start: GridLine::Line(1),
///     column_start: GridLine::Line(2),
///     row_end: GridLine::Span(2),
///     column_end: GridLine::Line(-1),
/// };
/// assert_eq!(area.to_string(), "1 / 2 / span 2 / -1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridArea {
    /// A named area from `grid-template-areas`.
    Named(String),
    /// Explicit lines in `row-start / column-start / row-end / column-end`
    /// order.
    Lines {
        /// `grid-row-start`
        row_start: GridLine,
        /// `grid-column-start`
        column_start: GridLine,
        /// `grid-row-end`
        row_end: GridLine,
        /// `grid-column-end`
        column_end: GridLine,
    },
}

impl GridArea {
    /// A named area.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

impl fmt::Display for GridArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Lines {
                row_start,
                column_start,
                row_end,
                column_end,
            } => Joiner::new(f, " / ").all([row_start, column_start, row_end, column_end]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use crate::unit::{fr, px};
    use cascada_state::State;

    #[test]
    fn empty_track_list_is_none() {
        assert_eq!(TrackList::new().to_string(), "none");
        assert_eq!(GridTemplate::default().to_string(), "none");
        let columns: TrackList = [fr(1)].into_iter().collect();
        let half_empty = GridTemplate {
            rows: TrackList::new(),
            columns,
        };
        assert_eq!(half_empty.to_string(), "none / 1fr");
    }

    #[test]
    fn repeat_with_count() {
        let list = TrackList::new().repeat(3_u32, [fr(1)]);
        assert_eq!(list.to_string(), "repeat(3, 1fr)");
        let list = TrackList::new()
            .repeat(RepeatCount::AutoFit, [px(100), px(200)])
            .names(["end", "last"]);
        assert_eq!(list.to_string(), "repeat(auto-fit, 100px 200px) [end last]");
    }

    #[test]
    fn template_follows_columns_state() {
        let columns = State::new([fr(1)].into_iter().collect::<TrackList>());
        let rows: TrackList = [Length::Auto].into_iter().collect();
        let template = GridTemplate::new(rows, &columns);
        assert_eq!(template.get().to_string(), "auto / 1fr");
        columns.set([fr(1), fr(1), fr(1)].into_iter().collect());
        assert_eq!(template.get().to_string(), "auto / 1fr 1fr 1fr");
    }

    #[test]
    fn lines() {
        assert_eq!(GridLine::from(-1).to_string(), "-1");
        assert_eq!(GridLine::from("content").to_string(), "content");
        assert_eq!(
            GridLine::NamedLine(String::from("col"), 2).to_string(),
            "col 2"
        );
        assert_eq!(GridLine::Auto.to_string(), "auto");
    }

    #[test]
    fn placement_follows_state() {
        let end = State::new(GridLine::Span(1));
        let placement = GridPlacement::new(GridLine::Line(2), &end);
        assert_eq!(placement.get().to_string(), "2 / span 1");
        end.set(GridLine::Line(-1));
        assert_eq!(placement.get().to_string(), "2 / -1");
    }
}
