//! Grid configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Grid configuration section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridSection {
    /// Cell edge length (meters)
    #[serde(default = "defaults::cell_size")]
    pub cell_size: f32,
}

impl Default for GridSection {
    fn default() -> Self {
        Self { cell_size: 0.10 }
    }
}
