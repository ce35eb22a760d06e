//! # BhumiMap
//!
//! Converts a 3D point cloud scan of a physical space into a 2D
//! collision grid for navigation.
//!
//! ## Overview
//!
//! Points are bucketed into horizontal grid cells, a floor height is
//! determined per cell, and each cell is classified walkable or blocked
//! from its vertical sample distribution:
//!
//! ```text
//! PLY scan --> PointCloud --> Bounds3 --> GridIndexer --> CellSamples
//!                                                             |
//!           collision_map.json <-- CollisionMap <-- classify_cell
//! ```
//!
//! A cell is **blocked** when its vertical spread exceeds the player
//! height (a wall) or any sample falls strictly inside the body zone
//! between ankle and player height above the cell floor. Cells that
//! received no samples are absent from the map: unknown, not walkable.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bhumi_map::{io, CollisionMap, MapParams};
//! use std::path::Path;
//!
//! let cloud = io::load_ply(Path::new("scan.ply"))?;
//! let map = CollisionMap::build(&cloud, &MapParams::default())?;
//! io::save_json(&map, Path::new("collision_map.json"))?;
//! ```
//!
//! ## Coordinate System
//!
//! World coordinates are (x, y, z) with y up; the grid spans the x/z
//! plane. Column 0 / row 0 sit at the minimum x / z of the input:
//! `col = floor((x - min_x) / cell_size)`, and likewise for rows.

#![warn(missing_docs)]

// Geometry primitives
pub mod core;

// Grid indexing, aggregation, classification
pub mod grid;

// Unified configuration
pub mod config;

// Collision map assembly
pub mod map;

// Point cloud input and map persistence
pub mod io;

// Crate-wide error type
pub mod error;

// Re-export commonly used types
pub use crate::core::{Bounds3, Point3, PointCloud};

pub use grid::{CellKey, CellResult, CellSamples, GridIndexer, MapParams};

pub use config::BhumiConfig;

pub use map::{CollisionMap, GridMetadata};

pub use error::{BhumiError, Result};
