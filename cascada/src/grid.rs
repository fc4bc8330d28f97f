// Copyright 2025 the Cascada Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid layout.

use cascada_values::{
    GridArea, GridAutoFlow, GridLine, GridPlacement, GridTemplate, GridTemplateAreas, TrackList,
};

define_properties! {
    /// Fluent grid declarations.
    pub trait GridProperties {
        GRID_TEMPLATE, grid_template: GridTemplate = "grid-template";
        GRID_TEMPLATE_ROWS, grid_template_rows: TrackList = "grid-template-rows";
        GRID_TEMPLATE_COLUMNS, grid_template_columns: TrackList = "grid-template-columns";
        GRID_TEMPLATE_AREAS, grid_template_areas: GridTemplateAreas = "grid-template-areas";
        GRID_AUTO_ROWS, grid_auto_rows: TrackList = "grid-auto-rows";
        GRID_AUTO_COLUMNS, grid_auto_columns: TrackList = "grid-auto-columns";
        GRID_AUTO_FLOW, grid_auto_flow: GridAutoFlow = "grid-auto-flow";
        GRID_ROW, grid_row: GridPlacement = "grid-row";
        GRID_COLUMN, grid_column: GridPlacement = "grid-column";
        GRID_ROW_START, grid_row_start: GridLine = "grid-row-start";
        GRID_ROW_END, grid_row_end: GridLine = "grid-row-end";
        GRID_COLUMN_START, grid_column_start: GridLine = "grid-column-start";
        GRID_COLUMN_END, grid_column_end: GridLine = "grid-column-end";
        GRID_AREA, grid_area: GridArea = "grid-area";
    }
}
