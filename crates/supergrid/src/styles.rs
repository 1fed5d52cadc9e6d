//! Render styles derived from the layout plan.
//!
//! Plain value records the host maps onto its own style system. The
//! wrap-axis edges ("leading"/"trailing") are left/right for a vertical
//! grid and top/bottom for a horizontal one.

use supergrid_layout::{Axis, GridConfig, LayoutPlan};

/// Direction children stack inside a container, in absolute terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackDirection {
    /// Children laid out left to right.
    Horizontal,
    /// Children laid out top to bottom.
    Vertical,
}

impl StackDirection {
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            StackDirection::Horizontal => StackDirection::Vertical,
            StackDirection::Vertical => StackDirection::Horizontal,
        }
    }
}

/// Computed style for one row container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowStyle {
    /// Rows stack their items along the wrap axis.
    pub direction: StackDirection,
    /// Padding on the row's leading wrap-axis edge. In fixed mode this is
    /// the recomputed gap, so items tile at their exact size.
    pub padding_leading: f32,
    /// Padding on the row's trailing scroll-axis edge.
    pub padding_trailing: f32,
}

/// Computed style for one item container within a row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemContainerStyle {
    pub direction: StackDirection,
    /// Container size along the wrap axis.
    pub main_size: f32,
    /// Gap to the next item along the wrap axis.
    pub margin_trailing: f32,
}

/// Computed style for a full-width item's container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FullWidthItemStyle {
    /// Spans the whole row: every item slot minus the trailing gap.
    pub main_size: f32,
    /// Gap after the full-width item on the scroll axis.
    pub margin_trailing: f32,
}

/// The computed style bundle for one grid configuration and plan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridStyles {
    /// Leading scroll-axis padding of the whole grid (one spacing unit).
    pub grid_padding_leading: f32,
    pub row: RowStyle,
    pub item: ItemContainerStyle,
    pub full_width_item: FullWidthItemStyle,
}

impl GridStyles {
    /// Row style adjusted for full-width rows: the container stacks along
    /// the scroll axis and drops its trailing padding, since the full-width
    /// item carries its own trailing margin.
    pub fn row_style_for(&self, has_full_width_item: bool) -> RowStyle {
        if has_full_width_item {
            RowStyle {
                direction: self.row.direction.flipped(),
                padding_trailing: 0.0,
                ..self.row
            }
        } else {
            self.row
        }
    }
}

/// Derives the style bundle from a configuration and its current plan.
pub fn generate_styles(config: &GridConfig, plan: &LayoutPlan) -> GridStyles {
    let spacing = config.spacing;
    // Fixed mode replaces the configured gap with the recomputed one.
    let gap = match plan.fixed_spacing {
        Some(fixed_spacing) if config.fixed => fixed_spacing,
        _ => spacing,
    };
    // A vertical grid wraps horizontally: rows run left to right and each
    // item container stacks its content top to bottom.
    let row_direction = match config.axis {
        Axis::Vertical => StackDirection::Horizontal,
        Axis::Horizontal => StackDirection::Vertical,
    };

    GridStyles {
        grid_padding_leading: spacing,
        row: RowStyle {
            direction: row_direction,
            padding_leading: gap,
            padding_trailing: spacing,
        },
        item: ItemContainerStyle {
            direction: row_direction.flipped(),
            main_size: if config.fixed {
                config.item_dimension
            } else {
                plan.item_container_size - spacing
            },
            margin_trailing: gap,
        },
        full_width_item: FullWidthItemStyle {
            main_size: plan.item_container_size * plan.items_per_row as f32 - spacing,
            margin_trailing: spacing,
        },
    }
}
