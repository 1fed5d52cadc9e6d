//! Responsive grid engine.
//!
//! Composes the dimension planner (`supergrid-layout`) and the row
//! partitioner (`supergrid-rows`) into the two grid flavors a host list
//! renderer consumes: [`FlatGrid`] over a flat item slice and
//! [`SectionGrid`] over named sections. Each produces per-row render
//! descriptors carrying the computed styles, row keys, and flat item
//! indices; the host draws each item through its own callback.

mod flat;
mod render;
mod section_grid;
mod styles;

pub use flat::*;
pub use render::*;
pub use section_grid::*;
pub use styles::*;

pub use supergrid_layout::{
    adjusted_total_dimension, compute_plan, style_spaces, Axis, DimensionTracker, GridConfig,
    GridConfigError, LayoutPlan, PlanCache, Style, StyleSpaces, DEFAULT_ITEM_DIMENSION,
    DEFAULT_SPACING,
};
pub use supergrid_rows::{
    chunk_rows, row_key, section_rows, GridItem, KeyExtractor, RowIndices, RowSpan, Section,
    SectionRow,
};
