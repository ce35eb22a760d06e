//! Unified configuration loading for bhumi-map.
//!
//! Loads all configuration from a single TOML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bhumi_map::config::BhumiConfig;
//!
//! // Load from a file
//! let config = BhumiConfig::load(Path::new("bhumi.toml"))?;
//!
//! // Or use built-in defaults (no file needed)
//! let config = BhumiConfig::default();
//!
//! // Convert to runtime parameters
//! let params = config.to_map_params();
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`GridSection`] | Cell size of the output grid |
//! | [`AgentSection`] | Agent clearance thresholds |
//!
//! ## Example TOML
//!
//! ```toml
//! [grid]
//! cell_size = 0.10       # 10cm cells
//!
//! [agent]
//! player_height = 1.5    # vertical clearance the agent needs
//! ankle_height = 0.2     # obstacles below this are stepped over
//! ```
//!
//! Every key is optional; omitted keys take the defaults above. Values
//! are range-checked by [`BhumiConfig::validate`], which map building
//! also runs, so a bad file fails before any points are processed.

mod agent;
mod bhumi;
mod defaults;
mod grid;

// Re-export main type
pub use bhumi::BhumiConfig;

// Re-export section types
pub use agent::AgentSection;
pub use grid::GridSection;
