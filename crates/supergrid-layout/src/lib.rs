//! Dimension planning for responsive grid layouts.
//!
//! This crate holds the pure numeric half of the grid engine: given a
//! measured container dimension and a [`GridConfig`], it computes how many
//! items fit per row and how much space each item's container receives
//! ([`LayoutPlan`]). It also provides the container-dimension adjustment
//! that accounts for host padding/max constraints before planning, and a
//! [`DimensionTracker`] that retains the last measurement for change
//! detection and items-per-row notifications.
//!
//! Row grouping lives in `supergrid-rows`; both are composed by the
//! `supergrid` crate.

mod adjust;
mod axis;
mod config;
mod plan;
mod planner;
mod tracker;

pub use adjust::*;
pub use axis::*;
pub use config::*;
pub use plan::*;
pub use planner::*;
pub use tracker::*;
