//! Items-per-row and per-item sizing math.

use crate::{GridConfig, LayoutPlan};

/// Computes the layout plan for a measured total dimension.
///
/// One spacing unit is reserved up front for the grid's leading edge; the
/// rest is divided into item slots of `item_dimension + spacing`, clipped so
/// a single oversized item never overflows the container. The result is
/// capped by `max_items_per_row` and floored to one column.
pub fn compute_plan(total_dimension: f32, config: &GridConfig) -> LayoutPlan {
    let usable = config.static_dimension.unwrap_or(total_dimension);
    if !usable.is_finite() || usable <= 0.0 {
        return LayoutPlan::fallback(config.fixed);
    }

    let available = usable - config.spacing;
    if available <= 0.0 {
        return LayoutPlan::fallback(config.fixed);
    }

    let item_slot = (config.item_dimension + config.spacing).min(available);
    let natural = (available / item_slot).floor() as usize;
    let capped = match config.max_items_per_row {
        Some(max) => natural.min(max),
        None => natural,
    };
    let items_per_row = capped.max(1);
    let item_container_size = available / items_per_row as f32;

    let fixed_spacing = config.fixed.then(|| {
        let gaps = items_per_row as f32 + 1.0;
        let raw = (usable - config.item_dimension * items_per_row as f32) / gaps;
        if raw < 0.0 {
            log::warn!(
                "fixed items ({} x {}) exceed usable dimension {}; clamping gap to 0",
                items_per_row,
                config.item_dimension,
                usable
            );
            0.0
        } else {
            raw
        }
    });

    LayoutPlan {
        items_per_row,
        item_container_size,
        fixed_spacing,
        provisional: false,
    }
}

/// Input tuple a plan is memoized on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanInputs {
    total_dimension: f32,
    config: GridConfig,
}

/// Single-slot plan memo.
///
/// The plan is a pure function of `(total_dimension, config)`; caching the
/// last input tuple is enough to skip recomputation across renders where
/// nothing changed.
#[derive(Debug, Default)]
pub struct PlanCache {
    slot: Option<(PlanInputs, LayoutPlan)>,
}

impl PlanCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the plan for the given inputs, recomputing only when the
    /// input tuple differs from the cached one.
    pub fn plan(&mut self, total_dimension: f32, config: &GridConfig) -> LayoutPlan {
        let inputs = PlanInputs {
            total_dimension,
            config: *config,
        };
        if let Some((cached, plan)) = &self.slot {
            if *cached == inputs {
                return *plan;
            }
        }
        let plan = compute_plan(total_dimension, config);
        self.slot = Some((inputs, plan));
        plan
    }
}

#[cfg(test)]
#[path = "tests/planner_tests.rs"]
mod tests;
