//! Per-row render descriptors handed to the host.

use smallvec::SmallVec;
use supergrid_rows::{GridItem, RowSpan};

use crate::RowStyle;

/// One item within a row descriptor.
#[derive(Debug)]
pub struct ItemRender<'a, T> {
    pub item: &'a T,
    /// The item's index in the host's flat data order, as reported to the
    /// host's per-item callback. Under row inversion this is remapped so
    /// the reported index keeps counting in visual order.
    pub flat_index: usize,
    /// Marks the item for the full-width container style.
    pub full_width: bool,
}

/// One row of a flat grid, handed to the render host in order.
#[derive(Debug)]
pub struct RowRender<'a, T> {
    /// Stable identity for incremental re-render.
    pub key: String,
    pub row_index: usize,
    pub is_last_row: bool,
    /// Row capacity the plan was computed with; partial rows carry fewer
    /// items than this.
    pub items_per_row: usize,
    /// One spacing unit of trailing scroll-axis margin on the last row, to
    /// balance the grid's leading padding.
    pub margin_trailing: f32,
    /// True when the row hosts a full-width item. Items in such a row take
    /// the full-width container style instead of the normal one.
    pub has_full_width_item: bool,
    /// Computed row container style, already adjusted for full-width rows.
    pub row_style: RowStyle,
    pub items: SmallVec<[ItemRender<'a, T>; 8]>,
}

/// One row of a sectioned grid.
#[derive(Debug)]
pub struct SectionRowRender<'a, T> {
    pub key: String,
    /// Index of the owning section in the host's section list.
    pub section_index: usize,
    /// Ordinal of this row within its section.
    pub row_index: usize,
    pub is_first_row: bool,
    /// One spacing unit of leading scroll-axis margin on each section's
    /// first row, separating it from the section header.
    pub margin_leading: f32,
    pub items_per_row: usize,
    pub has_full_width_item: bool,
    /// Computed row container style, already adjusted for full-width rows.
    pub row_style: RowStyle,
    pub items: SmallVec<[ItemRender<'a, T>; 8]>,
}

/// Builds the item descriptors for one row in render order.
///
/// Returns the items and whether any of them is full-width.
pub(crate) fn row_items<'a, T: GridItem>(
    items: &'a [T],
    span: RowSpan,
    row_index: usize,
    items_per_row: usize,
    inverted: bool,
) -> (SmallVec<[ItemRender<'a, T>; 8]>, bool) {
    let mut out = SmallVec::with_capacity(span.len());
    let mut has_full_width = false;

    for (within_row, index) in span.indices(inverted).enumerate() {
        let item = &items[index];
        let full_width = item.full_width();
        has_full_width |= full_width;
        let slot = if inverted {
            items_per_row - 1 - within_row
        } else {
            within_row
        };
        out.push(ItemRender {
            item,
            flat_index: row_index * items_per_row + slot,
            full_width,
        });
    }

    (out, has_full_width)
}
