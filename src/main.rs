//! CLI tool for converting point cloud scans into collision maps.
//!
//! Reads a PLY scan, classifies every populated grid cell walkable or
//! blocked, and writes the collision map JSON.
//!
//! # Usage
//!
//! ```bash
//! bhumi-map scan.ply
//! bhumi-map scan.ply -o maps/room.json --cell-size 0.05
//! ```

use std::env;
use std::path::PathBuf;

use bhumi_map::{io, BhumiConfig, CollisionMap};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let cli = match parse_args(&args) {
        Ok(Some(cli)) => cli,
        Ok(None) => {
            print_usage(&args[0]);
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(&args[0]);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct CliArgs {
    input: PathBuf,
    output: PathBuf,
    config: Option<PathBuf>,
    cell_size: Option<f32>,
    player_height: Option<f32>,
    ankle_height: Option<f32>,
}

/// Parse arguments; Ok(None) means help was requested.
fn parse_args(args: &[String]) -> Result<Option<CliArgs>, String> {
    let mut input = None;
    let mut output = None;
    let mut config = None;
    let mut cell_size = None;
    let mut player_height = None;
    let mut ankle_height = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                return Ok(None);
            }
            "--output" | "-o" => {
                i += 1;
                let value = args.get(i).ok_or("--output requires a value")?;
                output = Some(PathBuf::from(value));
            }
            "--config" | "-c" => {
                i += 1;
                let value = args.get(i).ok_or("--config requires a value")?;
                config = Some(PathBuf::from(value));
            }
            "--cell-size" => {
                i += 1;
                cell_size = Some(parse_meters(args.get(i), "--cell-size")?);
            }
            "--player-height" => {
                i += 1;
                player_height = Some(parse_meters(args.get(i), "--player-height")?);
            }
            "--ankle-height" => {
                i += 1;
                ankle_height = Some(parse_meters(args.get(i), "--ankle-height")?);
            }
            arg if !arg.starts_with('-') => {
                if input.is_some() {
                    return Err("Multiple input files specified".to_string());
                }
                input = Some(PathBuf::from(arg));
            }
            _ => {
                return Err(format!("Unknown argument: {}", args[i]));
            }
        }
        i += 1;
    }

    let input = input.ok_or("Missing input scan argument")?;

    Ok(Some(CliArgs {
        input,
        output: output.unwrap_or_else(|| PathBuf::from("collision_map.json")),
        config,
        cell_size,
        player_height,
        ankle_height,
    }))
}

fn parse_meters(value: Option<&String>, flag: &str) -> Result<f32, String> {
    let raw = value.ok_or_else(|| format!("{} requires a value", flag))?;
    raw.parse::<f32>()
        .map_err(|_| format!("invalid {} value '{}'", flag, raw))
}

fn print_usage(program: &str) {
    eprintln!(
        r#"
Usage: {} <SCAN.PLY> [OPTIONS]

Convert a 3D point cloud scan into a 2D collision grid.

OPTIONS:
    -o, --output <PATH>       Output JSON path (default: collision_map.json)
    -c, --config <PATH>       TOML configuration file
        --cell-size <M>       Grid cell edge length in meters
        --player-height <M>   Clearance required to pass, in meters
        --ankle-height <M>    Step-over threshold in meters
    -h, --help                Show this help message

EXAMPLES:
    {} room.ply
    {} room.ply -o maps/room.json --cell-size 0.05
"#,
        program, program, program
    );
}

fn run(args: CliArgs) -> bhumi_map::Result<()> {
    let config = match &args.config {
        Some(path) => BhumiConfig::load(path)?,
        None => BhumiConfig::default(),
    };

    let mut params = config.to_map_params();
    if let Some(v) = args.cell_size {
        params.cell_size = v;
    }
    if let Some(v) = args.player_height {
        params.player_height = v;
    }
    if let Some(v) = args.ankle_height {
        params.ankle_height = v;
    }

    log::info!("Loading {}", args.input.display());
    let cloud = io::load_ply(&args.input)?;
    log::info!("Loaded {} points", cloud.len());

    let map = CollisionMap::build(&cloud, &params)?;
    let meta = map.metadata();
    log::info!(
        "Grid {}x{} cells at {:.2}m: {} populated, {} walkable, {} blocked",
        meta.cols,
        meta.rows,
        meta.cell_size,
        map.len(),
        map.walkable_cells(),
        map.blocked_cells()
    );

    io::save_json(&map, &args.output)?;
    log::info!("Map written to {}", args.output.display());

    Ok(())
}
