//! Height sample aggregation.

use super::index::{CellKey, GridIndexer};
use crate::core::PointCloud;
use std::collections::HashMap;

/// Per-cell height sample buckets.
///
/// Maps every populated cell to the unordered heights observed in it.
/// Buckets are created lazily on first insertion; cells nothing fell
/// into have no entry at all. No ordering is imposed here; the
/// classifier sorts each bucket on its own.
///
/// Aggregation is append-only, so a parallel build works by giving each
/// worker a disjoint slice of the cloud, collecting into independent
/// `CellSamples`, and combining them with [`merge`](Self::merge). Merge
/// is bucket concatenation: associative, and order-independent once the
/// classifier sorts.
#[derive(Debug, Clone, Default)]
pub struct CellSamples {
    cells: HashMap<CellKey, Vec<f32>>,
}

impl CellSamples {
    /// Create an empty sample map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bucket every point of `cloud` into its cell.
    ///
    /// Reads x/z for the cell index and y for the sample; the cloud is
    /// untouched.
    pub fn collect(cloud: &PointCloud, indexer: &GridIndexer) -> Self {
        let mut samples = Self::new();
        for i in 0..cloud.len() {
            let key = indexer.cell_for(cloud.xs[i], cloud.zs[i]);
            samples.insert(key, cloud.ys[i]);
        }
        samples
    }

    /// Append one height sample to a cell's bucket.
    #[inline]
    pub fn insert(&mut self, key: CellKey, height: f32) {
        self.cells.entry(key).or_default().push(height);
    }

    /// Fold another sample map into this one by concatenating buckets
    /// that share a key.
    pub fn merge(&mut self, other: CellSamples) {
        for (key, mut heights) in other.cells {
            self.cells.entry(key).or_default().append(&mut heights);
        }
    }

    /// Number of populated cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if no cell holds any sample.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Total number of samples across all cells.
    pub fn sample_count(&self) -> usize {
        self.cells.values().map(Vec::len).sum()
    }

    /// Heights recorded for one cell, if populated.
    pub fn heights(&self, key: CellKey) -> Option<&[f32]> {
        self.cells.get(&key).map(Vec::as_slice)
    }

    /// Iterate over populated cells and their buckets.
    pub fn iter(&self) -> impl Iterator<Item = (CellKey, &[f32])> {
        self.cells.iter().map(|(&key, heights)| (key, heights.as_slice()))
    }
}

impl IntoIterator for CellSamples {
    type Item = (CellKey, Vec<f32>);
    type IntoIter = std::collections::hash_map::IntoIter<CellKey, Vec<f32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}
