//! Derived layout plan.

/// Output of the dimension planner.
///
/// Derived from a measured dimension and a [`crate::GridConfig`]; valid only
/// for the lifetime of the inputs that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutPlan {
    /// Row capacity, always at least 1.
    pub items_per_row: usize,
    /// Space allotted to one item's container along the wrap axis.
    pub item_container_size: f32,
    /// Recomputed gap in fixed mode, `None` in flexible mode. Makes
    /// fixed-size items tile exactly across the usable dimension.
    pub fixed_spacing: Option<f32>,
    /// True when the plan was produced without a usable measurement and
    /// falls back to a single column.
    pub provisional: bool,
}

impl LayoutPlan {
    /// Safe single-column fallback used until a positive dimension arrives.
    pub fn fallback(fixed: bool) -> Self {
        Self {
            items_per_row: 1,
            item_container_size: 0.0,
            fixed_spacing: fixed.then_some(0.0),
            provisional: true,
        }
    }
}
