//! Sectioned grids: independent chunking per named section.

use crate::{chunk_rows, GridItem, RowSpan};

/// One named group of items.
///
/// Section boundaries are hard row breaks: a row never spans two sections.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Section<T> {
    pub title: Option<String>,
    pub data: Vec<T>,
}

impl<T> Section<T> {
    pub fn new(title: impl Into<String>, data: Vec<T>) -> Self {
        Self {
            title: Some(title.into()),
            data,
        }
    }

    pub fn untitled(data: Vec<T>) -> Self {
        Self { title: None, data }
    }
}

/// One row of a sectioned grid.
///
/// The span indexes into the owning section's `data`, not a flattened list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionRow {
    /// Index of the owning section in the input slice.
    pub section_index: usize,
    /// Ordinal of this row within its section.
    pub row_index: usize,
    /// First row below the section header; receives extra leading spacing.
    pub is_first_row: bool,
    pub span: RowSpan,
}

/// Partitions every section independently.
///
/// Empty sections contribute no rows.
pub fn section_rows<T: GridItem>(sections: &[Section<T>], items_per_row: usize) -> Vec<SectionRow> {
    let mut out = Vec::new();
    for (section_index, section) in sections.iter().enumerate() {
        for (row_index, span) in chunk_rows(&section.data, items_per_row)
            .into_iter()
            .enumerate()
        {
            out.push(SectionRow {
                section_index,
                row_index,
                is_first_row: row_index == 0,
                span,
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tile(bool);

    impl GridItem for Tile {
        fn full_width(&self) -> bool {
            self.0
        }
    }

    fn tiles(n: usize) -> Vec<Tile> {
        (0..n).map(|_| Tile(false)).collect()
    }

    #[test]
    fn test_rows_never_span_sections() {
        let sections = vec![
            Section::new("first", tiles(3)),
            Section::new("second", tiles(1)),
        ];
        let rows = section_rows(&sections, 2);

        // 3 items -> 2 rows, then 1 item -> 1 row; no row mixes sections.
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].section_index, 0);
        assert_eq!(rows[1].section_index, 0);
        assert_eq!(rows[2].section_index, 1);
        assert_eq!(rows[1].span.len(), 1);
        assert_eq!(rows[2].span.len(), 1);
    }

    #[test]
    fn test_first_row_flag_resets_per_section() {
        let sections = vec![
            Section::new("first", tiles(4)),
            Section::new("second", tiles(2)),
        ];
        let rows = section_rows(&sections, 2);
        let first_flags: Vec<bool> = rows.iter().map(|r| r.is_first_row).collect();
        assert_eq!(first_flags, vec![true, false, true]);
    }

    #[test]
    fn test_empty_section_contributes_nothing() {
        let sections = vec![
            Section::new("empty", tiles(0)),
            Section::untitled(tiles(2)),
        ];
        let rows = section_rows(&sections, 2);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].section_index, 1);
        assert!(rows[0].is_first_row);
    }

    #[test]
    fn test_full_width_breaks_apply_within_sections() {
        let sections = vec![Section::untitled(vec![
            Tile(false),
            Tile(true),
            Tile(false),
        ])];
        let rows = section_rows(&sections, 3);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.span.len() == 1));
    }
}
