//! Collision map assembly.
//!
//! [`CollisionMap::build`] runs the whole pipeline over an in-memory
//! cloud: bounds, grid indexing, height aggregation, per-cell
//! classification. The result is immutable; its life ends at the export
//! boundary ([`crate::io::map_json`]).

use crate::core::PointCloud;
use crate::error::{BhumiError, Result};
use crate::grid::{classify_cell, CellKey, CellResult, CellSamples, GridIndexer, MapParams};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Coordinate-transform parameters persisted with the map.
///
/// A consumer reconstructs the world position of cell (col, row) as
/// `(min_x + col * cell_size, min_z + row * cell_size)`; `min_y` is the
/// global floor reference for the whole scan.
///
/// Field names and order match the exported document, with `cell_size`
/// written as `grid_size`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridMetadata {
    /// World x of grid column 0
    pub min_x: f32,
    /// World z of grid row 0
    pub min_z: f32,
    /// Global minimum height across the entire input
    pub min_y: f32,
    /// Cell edge length in world units
    #[serde(rename = "grid_size")]
    pub cell_size: f32,
    /// Number of columns
    pub cols: u32,
    /// Number of rows
    pub rows: u32,
}

/// A classified navigation grid: metadata plus sparse per-cell results.
///
/// Only populated cells carry an entry. A missing key means no points
/// were observed there: unknown, which consumers must not conflate with
/// walkable. Cells are stored in a BTreeMap so iteration (and the
/// exported document) is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionMap {
    metadata: GridMetadata,
    cells: BTreeMap<CellKey, CellResult>,
}

impl CollisionMap {
    /// Run the full pipeline over a cloud.
    ///
    /// Single pass: compute bounds, derive the grid, bucket every
    /// point's height into its cell, classify each populated cell.
    /// Fails on an empty cloud (bounds are undefined) or invalid
    /// parameters; classification itself cannot fail.
    pub fn build(cloud: &PointCloud, params: &MapParams) -> Result<Self> {
        params.validate()?;

        let bounds = cloud.bounds().ok_or(BhumiError::EmptyCloud)?;
        let indexer = GridIndexer::new(&bounds, params.cell_size)?;
        debug!(
            "grid {}x{} cells over {:.2}m x {:.2}m",
            indexer.cols(),
            indexer.rows(),
            bounds.width(),
            bounds.depth()
        );

        let samples = CellSamples::collect(cloud, &indexer);
        debug!(
            "aggregated {} samples into {} populated cells",
            samples.sample_count(),
            samples.len()
        );

        let mut cells = BTreeMap::new();
        for (key, mut heights) in samples {
            cells.insert(key, classify_cell(&mut heights, params));
        }

        let metadata = GridMetadata {
            min_x: bounds.min.x,
            min_z: bounds.min.z,
            min_y: bounds.min.y,
            cell_size: params.cell_size,
            cols: indexer.cols(),
            rows: indexer.rows(),
        };

        Ok(Self { metadata, cells })
    }

    /// Reassemble a map from its persisted parts.
    pub(crate) fn from_parts(
        metadata: GridMetadata,
        cells: BTreeMap<CellKey, CellResult>,
    ) -> Self {
        Self { metadata, cells }
    }

    /// Coordinate-transform metadata.
    #[inline]
    pub fn metadata(&self) -> &GridMetadata {
        &self.metadata
    }

    /// Result for one cell, if populated.
    pub fn cell(&self, key: CellKey) -> Option<&CellResult> {
        self.cells.get(&key)
    }

    /// Number of populated cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if no cell was populated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of populated cells classified blocked.
    pub fn blocked_cells(&self) -> usize {
        self.cells.values().filter(|c| c.blocked).count()
    }

    /// Number of populated cells classified walkable.
    pub fn walkable_cells(&self) -> usize {
        self.len() - self.blocked_cells()
    }

    /// Iterate over populated cells in deterministic (col, row) order.
    pub fn iter(&self) -> impl Iterator<Item = (CellKey, &CellResult)> {
        self.cells.iter().map(|(&key, result)| (key, result))
    }
}
