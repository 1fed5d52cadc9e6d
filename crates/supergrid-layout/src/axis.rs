/// Scroll direction of the grid.
///
/// The grid measures its total dimension along the wrap axis, which is the
/// cross of the scroll direction: a vertically scrolling grid wraps items
/// across the container width, a horizontally scrolling grid wraps them
/// down the container height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Vertical scrolling (default).
    /// Rows run left to right; total dimension is the container width.
    Vertical,

    /// Horizontal scrolling.
    /// Rows run top to bottom; total dimension is the container height.
    Horizontal,
}

impl Axis {
    /// Returns true if this is the horizontal scroll axis.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Axis::Horizontal)
    }

    /// Returns true if this is the vertical scroll axis.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Axis::Vertical)
    }
}

impl Default for Axis {
    fn default() -> Self {
        Axis::Vertical
    }
}
