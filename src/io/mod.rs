//! Point cloud input and map persistence.
//!
//! This module covers both ends of the pipeline:
//!
//! - **PLY reader**: ascii and binary little-endian scans (the Point Source)
//! - **Map JSON**: the persisted collision map document
//!
//! ## Loading a scan
//!
//! ```rust,ignore
//! use bhumi_map::io::load_ply;
//! use std::path::Path;
//!
//! let cloud = load_ply(Path::new("scan.ply"))?;
//! ```
//!
//! ## Saving and loading maps
//!
//! ```rust,ignore
//! use bhumi_map::io::{save_json, load_json};
//! use std::path::Path;
//!
//! save_json(&map, Path::new("collision_map.json"))?;
//! let map = load_json(Path::new("collision_map.json"))?;
//! ```

pub mod map_json;
pub mod ply;

pub use ply::{load_ply, read_ply};

pub use map_json::{load_json, read_json, save_json, write_json};
