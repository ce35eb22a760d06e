//! Cell walkability classification.
//!
//! The heart of the pipeline. Each populated cell carries an unordered
//! set of height samples; this module decides the cell's floor height
//! and whether an agent can stand there:
//!
//! ```text
//! sort samples ascending
//! floor  = lowest sample          (assumed ground)
//! spread = highest - floor
//!
//! spread > player_height                    -> blocked  (wall)
//! any h in (floor+ankle, floor+player)      -> blocked  (body zone)
//! otherwise                                 -> walkable
//! ```
//!
//! The body-zone band is exclusive at both ends: a sample exactly at
//! ankle or head height does not block. Consumers of the exported map
//! depend on these exact comparisons.

use crate::error::{BhumiError, Result};

/// Tunable parameters of the grid pipeline.
///
/// Threaded explicitly into the indexer and classifier; nothing in the
/// pipeline reads process-wide constants, so tests can vary these per
/// case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapParams {
    /// Cell edge length in meters.
    pub cell_size: f32,
    /// Vertical clearance an agent needs to pass through a cell (meters).
    pub player_height: f32,
    /// Height above the floor below which samples count as floor
    /// texture or debris, not obstacles (meters).
    pub ankle_height: f32,
}

impl Default for MapParams {
    fn default() -> Self {
        Self {
            cell_size: 0.10,
            player_height: 1.5,
            ankle_height: 0.2,
        }
    }
}

impl MapParams {
    /// Check parameter sanity.
    ///
    /// Cell size and player height must be positive and finite, ankle
    /// height non-negative and strictly below player height (an ankle
    /// band covering the whole body zone would classify every cell
    /// walkable).
    pub fn validate(&self) -> Result<()> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(BhumiError::Config(format!(
                "cell size must be positive, got {}",
                self.cell_size
            )));
        }
        if !self.player_height.is_finite() || self.player_height <= 0.0 {
            return Err(BhumiError::Config(format!(
                "player height must be positive, got {}",
                self.player_height
            )));
        }
        if !self.ankle_height.is_finite() || self.ankle_height < 0.0 {
            return Err(BhumiError::Config(format!(
                "ankle height must be non-negative, got {}",
                self.ankle_height
            )));
        }
        if self.ankle_height >= self.player_height {
            return Err(BhumiError::Config(format!(
                "ankle height ({}) must be below player height ({})",
                self.ankle_height, self.player_height
            )));
        }
        Ok(())
    }
}

/// Classification outcome for one cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellResult {
    /// Floor elevation, rounded to millimeters.
    pub floor_height: f32,
    /// True when an agent cannot occupy the cell.
    pub blocked: bool,
}

/// Classify one cell from its height samples.
///
/// Sorts `heights` in place (ascending) as a side effect. The lowest
/// sample is taken as the floor with no outlier rejection; the wall rule
/// fires on vertical spread alone, and only when it does not fire is the
/// body zone scanned. The scan stops at the first sample inside the
/// band.
///
/// Pure per-cell: no shared state, safe to run on many cells in
/// parallel.
///
/// # Panics
/// Panics if `heights` is empty. Cells are only classified if populated.
pub fn classify_cell(heights: &mut [f32], params: &MapParams) -> CellResult {
    heights.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let floor = heights[0];
    let highest = heights[heights.len() - 1];

    let blocked = if highest - floor > params.player_height {
        true
    } else {
        let band_low = floor + params.ankle_height;
        let band_high = floor + params.player_height;
        heights.iter().any(|&h| h > band_low && h < band_high)
    };

    CellResult {
        floor_height: round_mm(floor),
        blocked,
    }
}

/// Round to 3 decimal places (millimeters).
#[inline]
fn round_mm(height: f32) -> f32 {
    (height * 1000.0).round() / 1000.0
}
