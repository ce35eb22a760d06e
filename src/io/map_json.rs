//! Persisted collision map format.
//!
//! Format (one JSON document):
//!
//! ```json
//! {
//!   "metadata": {
//!     "min_x": -3.2, "min_z": -1.0, "min_y": 0.0,
//!     "grid_size": 0.1, "cols": 64, "rows": 40
//!   },
//!   "map": {
//!     "12,7": { "y": 0.013, "b": 0 }
//!   }
//! }
//! ```
//!
//! `map` is keyed by `"col,row"`; `y` is the cell floor height rounded
//! to millimeters, `b` is 1 for blocked. Cells that received no samples
//! are absent, which consumers must treat as unknown rather than
//! walkable. Saving stages the document in a sibling temporary file and
//! renames it over the target, so a failed run never clobbers an
//! earlier map.

use crate::error::{BhumiError, Result};
use crate::grid::{CellKey, CellResult};
use crate::map::{CollisionMap, GridMetadata};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Serialized form of one cell
#[derive(Debug, Serialize, Deserialize)]
struct CellEntry {
    /// Floor height
    y: f32,
    /// 1 blocked, 0 walkable
    b: u8,
}

/// Top-level persisted document
#[derive(Debug, Serialize, Deserialize)]
struct MapDocument {
    metadata: GridMetadata,
    map: BTreeMap<String, CellEntry>,
}

/// Save a collision map to a JSON file, all-or-nothing
pub fn save_json(map: &CollisionMap, path: &Path) -> Result<()> {
    let mut tmp_name = path.file_name().map(OsString::from).unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    if let Err(e) = write_to_file(map, &tmp_path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e);
    }

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    Ok(())
}

fn write_to_file(map: &CollisionMap, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_json(map, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a collision map to a writer as JSON
pub fn write_json<W: Write>(map: &CollisionMap, writer: &mut W) -> Result<()> {
    let cells = map
        .iter()
        .map(|(key, result)| {
            let entry = CellEntry {
                y: result.floor_height,
                b: result.blocked as u8,
            };
            (format!("{},{}", key.col, key.row), entry)
        })
        .collect();

    let doc = MapDocument {
        metadata: *map.metadata(),
        map: cells,
    };

    serde_json::to_writer(writer, &doc)?;
    Ok(())
}

/// Load a collision map from a JSON file
pub fn load_json(path: &Path) -> Result<CollisionMap> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    read_json(&mut reader)
}

/// Read a collision map from a reader
pub fn read_json<R: Read>(reader: &mut R) -> Result<CollisionMap> {
    let doc: MapDocument = serde_json::from_reader(reader)
        .map_err(|e| BhumiError::Load(format!("invalid map file: {}", e)))?;

    let mut cells = BTreeMap::new();
    for (raw_key, entry) in doc.map {
        if entry.b > 1 {
            return Err(BhumiError::Load(format!(
                "invalid blocked flag {} for cell '{}'",
                entry.b, raw_key
            )));
        }
        let result = CellResult {
            floor_height: entry.y,
            blocked: entry.b == 1,
        };
        cells.insert(parse_cell_key(&raw_key)?, result);
    }

    Ok(CollisionMap::from_parts(doc.metadata, cells))
}

/// Parse a `"col,row"` map key back into a CellKey
fn parse_cell_key(raw: &str) -> Result<CellKey> {
    raw.split_once(',')
        .and_then(|(col, row)| Some(CellKey::new(col.parse().ok()?, row.parse().ok()?)))
        .ok_or_else(|| BhumiError::Load(format!("invalid cell key '{}'", raw)))
}
