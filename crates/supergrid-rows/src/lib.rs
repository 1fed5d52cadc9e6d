//! Row partitioning for grid layouts.
//!
//! Splits an ordered item slice into render rows given a row capacity,
//! honoring full-width breaks, row-local inversion, stable row keys, and
//! sectioned input. Rows are represented as index spans over the caller's
//! slice; nothing here allocates per item.

mod chunk;
mod key;
mod section;

pub use chunk::*;
pub use key::*;
pub use section::*;
