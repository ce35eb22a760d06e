//! Uniform grid over the scan's horizontal plane.
//!
//! Three stages live here, in pipeline order:
//!
//! - [`GridIndexer`]: world (x, z) to clamped [`CellKey`] conversion
//! - [`CellSamples`]: per-cell height sample buckets (aggregation)
//! - [`classify_cell`]: the walkability heuristic (classification)

mod classify;
mod index;
mod samples;

pub use classify::{classify_cell, CellResult, MapParams};
pub use index::{CellKey, GridIndexer};
pub use samples::CellSamples;
