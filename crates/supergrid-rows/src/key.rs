//! Row identity for incremental re-render.

use crate::RowSpan;

/// Per-item key function supplied by the host.
///
/// Called with the item and its index within the rendered row.
pub type KeyExtractor<T> = dyn Fn(&T, usize) -> String;

/// Computes a stable key for one row.
///
/// With a key extractor the key is the `_`-joined item keys in render
/// order, so it only changes when the row's membership or order changes.
/// Without one the ordinal row index is used.
pub fn row_key<T>(
    items: &[T],
    span: RowSpan,
    row_index: usize,
    inverted: bool,
    key_extractor: Option<&KeyExtractor<T>>,
) -> String {
    match key_extractor {
        Some(extract) => {
            let mut key = String::new();
            for (within_row, index) in span.indices(inverted).enumerate() {
                if within_row > 0 {
                    key.push('_');
                }
                key.push_str(&extract(&items[index], within_row));
            }
            key
        }
        None => format!("row_{row_index}"),
    }
}
