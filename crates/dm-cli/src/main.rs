//! Dungeon map checker
//!
//! Reads a map file, reports its dimensions and contents, and renders it
//! back out.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser};
use log::{error, info};
use thiserror::Error;

use dm_core::{Grid, MapError, RoomStyle, StyleError, measure_map, parse_map, render_map};

/// Check and render dungeon map files
#[derive(Parser, Debug)]
#[command(name = "dungeon-map")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Map file, or `-` for stdin
    map: PathBuf,

    /// JSON style file with wall and door glyphs
    #[arg(short = 's', long = "style")]
    style: Option<PathBuf>,

    /// Only print the grid dimensions
    #[arg(short = 'm', long = "measure")]
    measure: bool,

    /// Print the loaded grid as JSON
    #[arg(long = "json", conflicts_with = "measure")]
    json: bool,

    /// Verbose output (repeat for more)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("cannot read map: {0}")]
    Io(#[from] io::Error),
    #[error("bad style: {0}")]
    Style(#[from] StyleError),
    #[error("{0}")]
    Map(#[from] MapError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        error!("{e:?}");
        eprintln!("dungeon-map: {e}");
        process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn read_map(path: &Path) -> Result<String, CliError> {
    if path.as_os_str() == "-" {
        let mut contents = String::new();
        io::stdin().read_to_string(&mut contents)?;
        return Ok(contents);
    }
    Ok(std::fs::read_to_string(path)?)
}

fn run(args: &Args) -> Result<(), CliError> {
    let style = match &args.style {
        Some(path) => RoomStyle::load_from_file(path)?,
        None => RoomStyle::classic(),
    };
    let text = read_map(&args.map)?;
    info!("read {} bytes from {}", text.len(), args.map.display());

    if args.measure {
        let (width, height) = measure_map(&text, &style)?;
        println!("{width}x{height}");
        return Ok(());
    }

    let grid = parse_map(&text, &style)?;
    if args.json {
        let json = serde_json::to_string_pretty(&grid)?;
        println!("{json}");
    } else {
        print_summary(&grid, &style);
    }
    Ok(())
}

fn print_summary(grid: &Grid, style: &RoomStyle) {
    println!("{}x{} grid", grid.width(), grid.height());
    print!("{}", render_map(grid, style));
    for room in grid.rooms().filter(|r| !r.is_empty()) {
        let doors: Vec<String> = room.doors().directions().map(|d| d.to_string()).collect();
        println!(
            "room {}: doors [{}] contents '{}'",
            room.coords,
            doors.join(", "),
            room.content_glyphs()
        );
    }
}
