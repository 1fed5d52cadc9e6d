//! Row chunking with full-width breaks.

use std::ops::Range;

/// Marker the partitioner inspects on items.
///
/// Application payloads are otherwise opaque; the only thing the engine
/// reads is whether an item must occupy an entire row by itself.
pub trait GridItem {
    /// True when the item never shares a row with anything.
    fn full_width(&self) -> bool {
        false
    }
}

/// Half-open index span of one rendered row over the source slice.
///
/// Spans are never empty. Inversion is applied at iteration time via
/// [`RowSpan::indices`]; the boundaries themselves are unaffected by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowSpan {
    start: usize,
    end: usize,
}

impl RowSpan {
    pub(crate) fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end);
        Self { start, end }
    }

    /// Number of items in the row, always at least 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The span as a range into the source slice.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Iterates the item indices of this row in render order.
    ///
    /// With `inverted` set, intra-row order flips; row membership does not.
    pub fn indices(&self, inverted: bool) -> RowIndices {
        RowIndices {
            range: self.range(),
            inverted,
        }
    }
}

/// Iterator over a row's item indices, honoring row inversion.
#[derive(Clone, Debug)]
pub struct RowIndices {
    range: Range<usize>,
    inverted: bool,
}

impl Iterator for RowIndices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.inverted {
            self.range.next_back()
        } else {
            self.range.next()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for RowIndices {
    fn next_back(&mut self) -> Option<usize> {
        if self.inverted {
            self.range.next()
        } else {
            self.range.next_back()
        }
    }
}

impl ExactSizeIterator for RowIndices {}

/// Partitions `items` into render rows of at most `items_per_row` items.
///
/// A row closes when it is full, or when a full-width item is about to
/// enter or already leads it. An item arriving at an empty row always
/// starts that row, full-width or not, so no row is ever empty and a
/// full-width item always sits alone.
pub fn chunk_rows<T: GridItem>(items: &[T], items_per_row: usize) -> Vec<RowSpan> {
    let capacity = items_per_row.max(1);
    let mut rows = Vec::with_capacity(items.len().div_ceil(capacity));
    let mut row_start = 0;

    for (index, item) in items.iter().enumerate() {
        if index == row_start {
            // This item just opened the current row.
            continue;
        }
        let row_full = index - row_start >= capacity;
        if row_full || items[row_start].full_width() || item.full_width() {
            rows.push(RowSpan::new(row_start, index));
            row_start = index;
        }
    }

    if row_start < items.len() {
        rows.push(RowSpan::new(row_start, items.len()));
    }
    rows
}

#[cfg(test)]
#[path = "tests/chunk_tests.rs"]
mod tests;
