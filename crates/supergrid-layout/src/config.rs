//! Grid layout configuration.

use thiserror::Error;

use crate::Axis;

/// Default target size of one item along the wrap axis.
pub const DEFAULT_ITEM_DIMENSION: f32 = 120.0;

/// Default gap between items and around the grid edge.
pub const DEFAULT_SPACING: f32 = 10.0;

/// Configuration errors reported at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GridConfigError {
    #[error("item dimension must be a finite positive number, got {0}")]
    InvalidItemDimension(f32),

    #[error("spacing must be a finite non-negative number, got {0}")]
    InvalidSpacing(f32),
}

/// Layout configuration for a grid.
///
/// Built once with named defaults and validated up front via
/// [`GridConfig::validated`] rather than re-checked on every computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// Target size of one item along the wrap axis.
    pub item_dimension: f32,
    /// Gap between items and around the grid edge.
    pub spacing: f32,
    /// Fixed mode: items render at exactly `item_dimension` and leftover
    /// space is redistributed into the gaps. Flexible mode (default):
    /// item size stretches to fill the row evenly.
    pub fixed: bool,
    /// Hard cap on row capacity. `None` means no cap.
    pub max_items_per_row: Option<usize>,
    /// Scroll direction; decides which container dimension the grid wraps on.
    pub axis: Axis,
    /// Caller-supplied container dimension that bypasses measurement.
    pub static_dimension: Option<f32>,
    /// Upper bound applied to the measured dimension before planning.
    pub max_dimension: Option<f32>,
}

impl GridConfig {
    /// Creates a configuration with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item_dimension(mut self, dimension: f32) -> Self {
        self.item_dimension = dimension;
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    /// Caps row capacity. A cap of zero is a best-effort hint with no valid
    /// reading, so it is treated as "no cap".
    pub fn max_items_per_row(mut self, max: usize) -> Self {
        self.max_items_per_row = if max == 0 { None } else { Some(max) };
        self
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn static_dimension(mut self, dimension: f32) -> Self {
        self.static_dimension = Some(dimension);
        self
    }

    pub fn max_dimension(mut self, dimension: f32) -> Self {
        self.max_dimension = Some(dimension);
        self
    }

    /// Validates the configuration, consuming it.
    ///
    /// Fails fast on contract violations (`item_dimension <= 0`, negative
    /// spacing, non-finite values) instead of producing silent nonsense
    /// downstream.
    pub fn validated(self) -> Result<Self, GridConfigError> {
        if !self.item_dimension.is_finite() || self.item_dimension <= 0.0 {
            return Err(GridConfigError::InvalidItemDimension(self.item_dimension));
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(GridConfigError::InvalidSpacing(self.spacing));
        }
        Ok(self)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            item_dimension: DEFAULT_ITEM_DIMENSION,
            spacing: DEFAULT_SPACING,
            fixed: false,
            max_items_per_row: None,
            axis: Axis::Vertical,
            static_dimension: None,
            max_dimension: None,
        }
    }
}
