//! End-to-end pipeline tests: PLY bytes in, collision map JSON out.
//!
//! Each test drives the same path an operator does: write a scan file,
//! load it, build the map, export it, then verify the persisted
//! document or the reloaded map.

use std::path::Path;

use bhumi_map::io::{load_json, load_ply, save_json};
use bhumi_map::{BhumiConfig, BhumiError, CollisionMap, MapParams};

/// Four-cell scene on a 0.5m grid: a wall cell, a body-zone obstacle
/// cell, a single-sample cell, and one cell with no samples at all.
const SCENE: &[[f32; 3]] = &[
    // Cell (0,0): 1.8m vertical spread, a wall
    [0.0, 0.0, 0.0],
    [0.1, 1.8, 0.1],
    // Cell (1,0): sample at 0.5m sits inside the body zone
    [0.6, 0.0, 0.2],
    [0.7, 0.5, 0.3],
    // Cell (1,1): single sample
    [0.9, 0.05, 0.9],
    // Cell (0,1): empty
];

fn scene_params() -> MapParams {
    MapParams {
        cell_size: 0.5,
        player_height: 1.5,
        ankle_height: 0.2,
    }
}

fn ascii_ply(points: &[[f32; 3]]) -> String {
    let mut text = format!(
        "ply\nformat ascii 1.0\nelement vertex {}\n\
         property float x\nproperty float y\nproperty float z\nend_header\n",
        points.len()
    );
    for p in points {
        text.push_str(&format!("{} {} {}\n", p[0], p[1], p[2]));
    }
    text
}

fn binary_ply(points: &[[f32; 3]]) -> Vec<u8> {
    let mut data = format!(
        "ply\nformat binary_little_endian 1.0\nelement vertex {}\n\
         property float x\nproperty float y\nproperty float z\nend_header\n",
        points.len()
    )
    .into_bytes();
    for p in points {
        for v in p {
            data.extend_from_slice(&v.to_le_bytes());
        }
    }
    data
}

fn build_from_ascii(dir: &Path, points: &[[f32; 3]], params: &MapParams) -> CollisionMap {
    let scan_path = dir.join("scan.ply");
    std::fs::write(&scan_path, ascii_ply(points)).unwrap();
    let cloud = load_ply(&scan_path).unwrap();
    CollisionMap::build(&cloud, params).unwrap()
}

#[test]
fn test_scan_to_map_document() {
    let dir = tempfile::tempdir().unwrap();
    let map = build_from_ascii(dir.path(), SCENE, &scene_params());

    let out_path = dir.path().join("collision_map.json");
    save_json(&map, &out_path).unwrap();

    let raw = std::fs::read(&out_path).unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&raw).unwrap();

    assert_eq!(doc["metadata"]["cols"], 2);
    assert_eq!(doc["metadata"]["rows"], 2);
    assert_eq!(doc["metadata"]["grid_size"], 0.5);
    assert_eq!(doc["metadata"]["min_x"], 0.0);
    assert_eq!(doc["metadata"]["min_z"], 0.0);
    assert_eq!(doc["metadata"]["min_y"], 0.0);

    let cells = doc["map"].as_object().unwrap();
    assert_eq!(cells.len(), 3, "empty cell must be absent: {:?}", cells);
    assert!(!cells.contains_key("0,1"));

    // Wall cell
    assert_eq!(doc["map"]["0,0"]["b"], 1);
    assert_eq!(doc["map"]["0,0"]["y"], 0.0);
    // Body-zone obstacle
    assert_eq!(doc["map"]["1,0"]["b"], 1);
    assert_eq!(doc["map"]["1,0"]["y"], 0.0);
    // Single sample, walkable
    assert_eq!(doc["map"]["1,1"]["b"], 0);
    let floor = doc["map"]["1,1"]["y"].as_f64().unwrap();
    assert!((floor - 0.05).abs() < 1e-6, "floor {} != 0.05", floor);
}

#[test]
fn test_binary_scan_matches_ascii() {
    let dir = tempfile::tempdir().unwrap();
    let params = scene_params();

    let from_ascii = build_from_ascii(dir.path(), SCENE, &params);

    let bin_path = dir.path().join("scan_binary.ply");
    std::fs::write(&bin_path, binary_ply(SCENE)).unwrap();
    let from_binary = CollisionMap::build(&load_ply(&bin_path).unwrap(), &params).unwrap();

    assert_eq!(from_ascii, from_binary);
}

#[test]
fn test_output_is_byte_identical_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let params = scene_params();

    let first_path = dir.path().join("first.json");
    let second_path = dir.path().join("second.json");

    save_json(&build_from_ascii(dir.path(), SCENE, &params), &first_path).unwrap();
    save_json(&build_from_ascii(dir.path(), SCENE, &params), &second_path).unwrap();

    let first = std::fs::read(&first_path).unwrap();
    let second = std::fs::read(&second_path).unwrap();
    assert_eq!(first, second, "identical input and parameters must reproduce the file");
}

#[test]
fn test_saved_map_reloads_equal() {
    let dir = tempfile::tempdir().unwrap();
    let map = build_from_ascii(dir.path(), SCENE, &scene_params());

    let out_path = dir.path().join("map.json");
    save_json(&map, &out_path).unwrap();

    assert_eq!(load_json(&out_path).unwrap(), map);
}

#[test]
fn test_point_at_max_bound_lands_in_last_cell() {
    let dir = tempfile::tempdir().unwrap();
    let corners = [[0.0, 0.0, 0.0], [1.0, 0.0, 1.0]];
    let map = build_from_ascii(dir.path(), &corners, &scene_params());

    let meta = map.metadata();
    assert_eq!(meta.cols, 2);
    assert_eq!(meta.rows, 2);

    // The exact-max point floors to index 2 and must clamp into the grid
    assert_eq!(map.len(), 2);
    for (key, _) in map.iter() {
        assert!(
            key.col < meta.cols && key.row < meta.rows,
            "cell {:?} outside {}x{} grid",
            key,
            meta.cols,
            meta.rows
        );
    }
}

#[test]
fn test_empty_scan_fails_with_empty_cloud() {
    let dir = tempfile::tempdir().unwrap();
    let scan_path = dir.path().join("empty.ply");
    std::fs::write(&scan_path, ascii_ply(&[])).unwrap();

    let cloud = load_ply(&scan_path).unwrap();
    assert!(cloud.is_empty());

    let err = CollisionMap::build(&cloud, &scene_params()).unwrap_err();
    assert!(matches!(err, BhumiError::EmptyCloud), "got {:?}", err);
}

#[test]
fn test_missing_scan_fails_with_input_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_ply(&dir.path().join("nowhere.ply")).unwrap_err();
    assert!(matches!(err, BhumiError::InputNotFound(_)), "got {:?}", err);
}

#[test]
fn test_failed_export_leaves_no_residue() {
    let dir = tempfile::tempdir().unwrap();
    let map = build_from_ascii(dir.path(), SCENE, &scene_params());

    // A directory squatting on the target path makes the final rename fail
    let target = dir.path().join("occupied");
    std::fs::create_dir(&target).unwrap();

    let err = save_json(&map, &target).unwrap_err();
    assert!(matches!(err, BhumiError::Io(_)), "got {:?}", err);

    assert!(target.is_dir(), "existing target must be untouched");
    assert!(
        !dir.path().join("occupied.tmp").exists(),
        "staging file must be cleaned up"
    );
}

#[test]
fn test_config_parameters_flow_through_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    // One 0.25m obstacle above a flat floor in a single cell
    let points = [[0.0, 0.0, 0.0], [0.1, 0.25, 0.1]];

    let strict = BhumiConfig::from_toml("[agent]\nankle_height = 0.2\n").unwrap();
    let map = build_from_ascii(dir.path(), &points, &strict.to_map_params());
    let (_, only_cell) = map.iter().next().unwrap();
    assert!(only_cell.blocked, "0.25m obstacle above a 0.2m ankle threshold blocks");

    let lenient = BhumiConfig::from_toml("[agent]\nankle_height = 0.3\n").unwrap();
    let map = build_from_ascii(dir.path(), &points, &lenient.to_map_params());
    let (_, only_cell) = map.iter().next().unwrap();
    assert!(!only_cell.blocked, "0.25m obstacle below a 0.3m ankle threshold is stepped over");
}
