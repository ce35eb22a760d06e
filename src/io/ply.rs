//! PLY point cloud reader.
//!
//! Supports the subset of PLY that room-scan exports use:
//! - `format ascii 1.0` and `format binary_little_endian 1.0`
//! - a `vertex` element declared before any other element, carrying
//!   scalar properties only; `x`, `y` and `z` must be float or double
//! - other scalar vertex properties (color, confidence, normals) are
//!   skipped by size; elements after `vertex` (e.g. `face`) are
//!   declared in the header but their data is never read
//!
//! Doubles are narrowed to `f32`, the crate's world currency.

use crate::core::PointCloud;
use crate::error::{BhumiError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// PLY body encodings this reader accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlyFormat {
    Ascii,
    BinaryLittleEndian,
}

/// One located coordinate property inside the vertex element
#[derive(Debug, Clone, Copy)]
struct CoordField {
    /// Position among the vertex properties (ascii column)
    index: usize,
    /// Byte offset inside a binary row
    offset: usize,
    /// Eight-byte double rather than four-byte float
    double: bool,
}

/// Vertex element layout recovered from the header
#[derive(Debug)]
struct VertexLayout {
    count: usize,
    /// Total bytes per binary row, all scalar properties included
    stride: usize,
    /// Number of scalar properties per vertex
    field_count: usize,
    x: CoordField,
    y: CoordField,
    z: CoordField,
}

/// Load a point cloud from a PLY file
pub fn load_ply(path: &Path) -> Result<PointCloud> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => BhumiError::InputNotFound(path.to_path_buf()),
        _ => BhumiError::Io(e),
    })?;

    let mut reader = BufReader::new(file);
    read_ply(&mut reader)
}

/// Read a point cloud from a reader positioned at the PLY magic
pub fn read_ply<R: BufRead>(reader: &mut R) -> Result<PointCloud> {
    let (format, layout) = read_header(reader)?;

    match format {
        PlyFormat::Ascii => read_ascii_body(reader, &layout),
        PlyFormat::BinaryLittleEndian => read_binary_body(reader, &layout),
    }
}

/// Parse the header up to and including `end_header`
fn read_header<R: BufRead>(reader: &mut R) -> Result<(PlyFormat, VertexLayout)> {
    let mut line = String::new();

    if reader.read_line(&mut line)? == 0 || line.trim() != "ply" {
        return Err(BhumiError::Load("not a PLY file (missing magic)".into()));
    }

    let mut format = None;
    let mut vertex_count: Option<usize> = None;
    // Collecting vertex properties until another element starts
    let mut in_vertex = false;
    let mut sizes: Vec<usize> = Vec::new();
    // (property index, is-double) per coordinate
    let mut x = None;
    let mut y = None;
    let mut z = None;

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(BhumiError::Load("unexpected end of header".into()));
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "end_header" {
            break;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        match tokens[0] {
            "comment" | "obj_info" => {}
            "format" => {
                if tokens.len() != 3 || tokens[2] != "1.0" {
                    return Err(BhumiError::Load(format!(
                        "unsupported format declaration '{}'",
                        trimmed
                    )));
                }
                format = Some(match tokens[1] {
                    "ascii" => PlyFormat::Ascii,
                    "binary_little_endian" => PlyFormat::BinaryLittleEndian,
                    other => {
                        return Err(BhumiError::Load(format!(
                            "unsupported PLY format '{}'",
                            other
                        )))
                    }
                });
            }
            "element" => {
                if tokens.len() != 3 {
                    return Err(BhumiError::Load(format!(
                        "malformed element declaration '{}'",
                        trimmed
                    )));
                }
                if tokens[1] == "vertex" {
                    if vertex_count.is_some() {
                        return Err(BhumiError::Load("duplicate vertex element".into()));
                    }
                    let count = tokens[2].parse::<usize>().map_err(|_| {
                        BhumiError::Load(format!("invalid vertex count '{}'", tokens[2]))
                    })?;
                    vertex_count = Some(count);
                    in_vertex = true;
                } else {
                    // Body data follows declaration order, so an element
                    // ahead of vertex would sit between header and the
                    // rows this reader wants
                    if vertex_count.is_none() {
                        return Err(BhumiError::Load(format!(
                            "unsupported element '{}' before vertex data",
                            tokens[1]
                        )));
                    }
                    in_vertex = false;
                }
            }
            "property" => {
                if !in_vertex {
                    if vertex_count.is_none() {
                        return Err(BhumiError::Load(
                            "property declared before any element".into(),
                        ));
                    }
                    // Belongs to a trailing element whose data is never read
                    continue;
                }
                if tokens.len() >= 2 && tokens[1] == "list" {
                    return Err(BhumiError::Load(
                        "list property in vertex element".into(),
                    ));
                }
                if tokens.len() != 3 {
                    return Err(BhumiError::Load(format!(
                        "malformed property declaration '{}'",
                        trimmed
                    )));
                }
                let size = scalar_size(tokens[1]).ok_or_else(|| {
                    BhumiError::Load(format!("unknown property type '{}'", tokens[1]))
                })?;
                let coord = match tokens[2] {
                    "x" => Some(&mut x),
                    "y" => Some(&mut y),
                    "z" => Some(&mut z),
                    _ => None,
                };
                if let Some(slot) = coord {
                    if !is_float_type(tokens[1]) {
                        return Err(BhumiError::Load(format!(
                            "vertex property '{}' must be float or double",
                            tokens[2]
                        )));
                    }
                    *slot = Some((sizes.len(), size == 8));
                }
                sizes.push(size);
            }
            other => {
                return Err(BhumiError::Load(format!(
                    "unexpected header line '{}'",
                    other
                )));
            }
        }
    }

    let format = format.ok_or_else(|| BhumiError::Load("missing format declaration".into()))?;
    let count = vertex_count.ok_or_else(|| BhumiError::Load("missing vertex element".into()))?;

    let locate = |slot: Option<(usize, bool)>, name: &str| {
        slot.map(|(index, double)| CoordField {
            index,
            offset: sizes[..index].iter().sum(),
            double,
        })
        .ok_or_else(|| BhumiError::Load(format!("vertex element has no '{}' property", name)))
    };

    let layout = VertexLayout {
        count,
        stride: sizes.iter().sum(),
        field_count: sizes.len(),
        x: locate(x, "x")?,
        y: locate(y, "y")?,
        z: locate(z, "z")?,
    };

    Ok((format, layout))
}

fn read_ascii_body<R: BufRead>(reader: &mut R, layout: &VertexLayout) -> Result<PointCloud> {
    let mut cloud = PointCloud::with_capacity(layout.count);
    let mut line = String::new();

    for row in 0..layout.count {
        if !next_data_line(reader, &mut line)? {
            return Err(BhumiError::Load(format!(
                "vertex data ends after {} of {} vertices",
                row, layout.count
            )));
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < layout.field_count {
            return Err(BhumiError::Load(format!(
                "vertex row {} has {} fields, expected {}",
                row,
                fields.len(),
                layout.field_count
            )));
        }

        cloud.push_xyz(
            parse_coord(fields[layout.x.index], row)?,
            parse_coord(fields[layout.y.index], row)?,
            parse_coord(fields[layout.z.index], row)?,
        );
    }

    Ok(cloud)
}

fn read_binary_body<R: BufRead>(reader: &mut R, layout: &VertexLayout) -> Result<PointCloud> {
    let mut cloud = PointCloud::with_capacity(layout.count);
    let mut row_buf = vec![0u8; layout.stride];

    for row in 0..layout.count {
        reader.read_exact(&mut row_buf).map_err(|e| {
            if e.kind() == ErrorKind::UnexpectedEof {
                BhumiError::Load(format!(
                    "vertex data ends after {} of {} vertices",
                    row, layout.count
                ))
            } else {
                BhumiError::Io(e)
            }
        })?;

        cloud.push_xyz(
            decode_coord(&row_buf, &layout.x),
            decode_coord(&row_buf, &layout.y),
            decode_coord(&row_buf, &layout.z),
        );
    }

    Ok(cloud)
}

/// Advance to the next non-blank line; false means end of input
fn next_data_line<R: BufRead>(reader: &mut R, line: &mut String) -> Result<bool> {
    loop {
        line.clear();
        if reader.read_line(line)? == 0 {
            return Ok(false);
        }
        if !line.trim().is_empty() {
            return Ok(true);
        }
    }
}

fn parse_coord(field: &str, row: usize) -> Result<f32> {
    field.parse::<f32>().map_err(|_| {
        BhumiError::Load(format!("invalid vertex coordinate '{}' in row {}", field, row))
    })
}

fn decode_coord(row: &[u8], field: &CoordField) -> f32 {
    if field.double {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(&row[field.offset..field.offset + 8]);
        f64::from_le_bytes(raw) as f32
    } else {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(&row[field.offset..field.offset + 4]);
        f32::from_le_bytes(raw)
    }
}

/// Byte width of a PLY scalar type, long and short spellings
fn scalar_size(type_name: &str) -> Option<usize> {
    match type_name {
        "char" | "uchar" | "int8" | "uint8" => Some(1),
        "short" | "ushort" | "int16" | "uint16" => Some(2),
        "int" | "uint" | "int32" | "uint32" | "float" | "float32" => Some(4),
        "double" | "float64" => Some(8),
        _ => None,
    }
}

fn is_float_type(type_name: &str) -> bool {
    matches!(type_name, "float" | "float32" | "double" | "float64")
}
