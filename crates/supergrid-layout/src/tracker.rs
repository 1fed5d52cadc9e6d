//! Measured-dimension tracking and change notification.
//!
//! The only retained state in the engine: the last measurement delivered by
//! the host and the last items-per-row value reported to the observer. Both
//! exist purely for change detection; every plan is still a pure function
//! of its inputs.

use crate::{GridConfig, LayoutPlan, PlanCache};

/// Observer invoked whenever the computed items-per-row changes.
pub type ItemsPerRowObserver = Box<dyn FnMut(usize)>;

/// Retains the last-known measured dimension, memoizes the plan derived
/// from it, and notifies an optional observer on items-per-row changes.
#[derive(Default)]
pub struct DimensionTracker {
    total_dimension: Option<f32>,
    cache: PlanCache,
    last_reported: Option<usize>,
    observer: Option<ItemsPerRowObserver>,
    warned_invalid: bool,
}

impl DimensionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the items-per-row observer, replacing any previous one.
    pub fn set_observer(&mut self, observer: ItemsPerRowObserver) {
        self.observer = Some(observer);
    }

    /// Feeds a measurement from the host's layout event.
    ///
    /// Returns true when the retained dimension changed and the host should
    /// re-render. Repeated deliveries of the same value are a no-op, and
    /// non-positive values are treated as "not yet measurable" and ignored.
    pub fn on_layout(&mut self, measured: f32) -> bool {
        if !measured.is_finite() || measured <= 0.0 {
            if !self.warned_invalid {
                log::warn!("ignoring non-positive grid measurement {measured}");
                self.warned_invalid = true;
            }
            return false;
        }
        if self.total_dimension == Some(measured) {
            return false;
        }
        self.total_dimension = Some(measured);
        true
    }

    /// The last accepted measurement, if any.
    #[inline]
    pub fn total_dimension(&self) -> Option<f32> {
        self.total_dimension
    }

    /// Returns the current plan, recomputing only when inputs changed.
    ///
    /// The observer fires at most once per distinct recomputation: only when
    /// the resulting items-per-row differs from the last reported value.
    pub fn plan(&mut self, config: &GridConfig) -> LayoutPlan {
        let plan = match self.total_dimension {
            Some(dimension) => self.cache.plan(dimension, config),
            // Not measured yet; a static dimension still produces a real plan.
            None if config.static_dimension.is_some() => self.cache.plan(0.0, config),
            None => LayoutPlan::fallback(config.fixed),
        };

        if self.last_reported != Some(plan.items_per_row) {
            self.last_reported = Some(plan.items_per_row);
            if let Some(observer) = &mut self.observer {
                observer(plan.items_per_row);
            }
        }

        plan
    }
}
