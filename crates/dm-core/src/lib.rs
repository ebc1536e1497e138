//! dm-core: dungeon map grid model, parser and renderer
//!
//! A dungeon is a rectangular [`Grid`] of rooms. Maps are plain text: rows of
//! rooms framed by corner glyphs and wall segments, with door glyphs in the
//! walls and content markers inside each room cell.
//!
//! This crate does no I/O beyond optionally reading a style file.

pub mod grid;
pub mod parser;
pub mod render;
pub mod style;

pub use grid::{Coords, Direction, Doors, Grid, GridError, Pillar, Room};
pub use parser::{MapError, load_map, measure_map, parse_map};
pub use render::render_map;
pub use style::{RoomStyle, StyleError};
