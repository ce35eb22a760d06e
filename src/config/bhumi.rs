//! Main BhumiConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BhumiError, Result};
use crate::grid::MapParams;

use super::agent::AgentSection;
use super::grid::GridSection;

/// Full bhumi-map configuration loaded from TOML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct BhumiConfig {
    /// Grid settings
    #[serde(default)]
    pub grid: GridSection,

    /// Agent clearance settings
    #[serde(default)]
    pub agent: AgentSection,
}

impl BhumiConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| BhumiError::Config(format!("failed to read config file: {}", e)))?;
        Self::from_toml(&contents)
    }

    /// Parse from TOML string
    pub fn from_toml(toml: &str) -> Result<Self> {
        Ok(toml::from_str(toml)?)
    }

    /// Convert to MapParams for CollisionMap::build
    pub fn to_map_params(&self) -> MapParams {
        MapParams {
            cell_size: self.grid.cell_size,
            player_height: self.agent.player_height,
            ankle_height: self.agent.ankle_height,
        }
    }

    /// Check that the configured values form a usable parameter set
    pub fn validate(&self) -> Result<()> {
        self.to_map_params().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BhumiConfig::default();
        assert_eq!(config.grid.cell_size, 0.10);
        assert_eq!(config.agent.player_height, 1.5);
        assert_eq!(config.agent.ankle_height, 0.2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = BhumiConfig::default();
        let toml = toml::to_string(&config).unwrap();
        let parsed = BhumiConfig::from_toml(&toml).unwrap();
        assert_eq!(parsed.grid.cell_size, config.grid.cell_size);
        assert_eq!(parsed.agent.player_height, config.agent.player_height);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = BhumiConfig::from_toml("[grid]\ncell_size = 0.25\n").unwrap();
        assert_eq!(parsed.grid.cell_size, 0.25);
        assert_eq!(parsed.agent.player_height, 1.5);
        assert_eq!(parsed.agent.ankle_height, 0.2);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let parsed = BhumiConfig::from_toml("").unwrap();
        assert_eq!(parsed.grid.cell_size, 0.10);
    }

    #[test]
    fn test_malformed_toml_fails() {
        assert!(BhumiConfig::from_toml("[grid\ncell_size = oops").is_err());
    }

    #[test]
    fn test_to_map_params() {
        let parsed = BhumiConfig::from_toml(
            "[grid]\ncell_size = 0.5\n\n[agent]\nplayer_height = 2.0\nankle_height = 0.3\n",
        )
        .unwrap();
        let params = parsed.to_map_params();
        assert_eq!(params.cell_size, 0.5);
        assert_eq!(params.player_height, 2.0);
        assert_eq!(params.ankle_height, 0.3);
    }

    #[test]
    fn test_validate_rejects_inverted_heights() {
        let parsed = BhumiConfig::from_toml(
            "[agent]\nplayer_height = 0.1\nankle_height = 0.5\n",
        )
        .unwrap();
        assert!(parsed.validate().is_err());
    }
}
