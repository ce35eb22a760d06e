//! Agent clearance configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Agent clearance configuration section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AgentSection {
    /// Vertical clearance the agent needs to pass under an overhang (meters)
    #[serde(default = "defaults::player_height")]
    pub player_height: f32,

    /// Obstacles at or below this height above the floor are stepped over (meters)
    #[serde(default = "defaults::ankle_height")]
    pub ankle_height: f32,
}

impl Default for AgentSection {
    fn default() -> Self {
        Self {
            player_height: 1.5,
            ankle_height: 0.2,
        }
    }
}
