//! Map text parser
//!
//! A map is an optional header of blank and `#` comment lines followed by
//! `2 * height + 1` grid lines. Grid lines alternate between lateral lines
//! (corners and horizontal wall/door segments) and content lines (vertical
//! walls/doors and room interiors), starting and ending on a lateral line:
//!
//! ```text
//! # two rooms side by side, a door between them
//! +-----+-----+
//! | i   =  O  |
//! +-----+-----+
//! ```
//!
//! Two entry points share the same grammar:
//! - [`measure_map`] infers grid dimensions from the first grid line and the
//!   line count, without looking any further.
//! - [`load_map`] walks every line and fills in doors and contents of a grid
//!   that already has the right size.
//!
//! [`parse_map`] does both.

use log::{debug, trace};
use thiserror::Error;

use crate::grid::{Coords, Direction, Grid, GridError};
use crate::style::{RoomStyle, StyleError};

#[derive(Error, Debug)]
pub enum MapError {
    #[error("line {line}: {reason}")]
    Dimension { line: usize, reason: String },

    #[error("line {line}: expected {expected} chars, found {found}")]
    LineLength {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}, column {column}: expected {expected}, found '{found}'")]
    Grammar {
        line: usize,
        column: usize,
        expected: String,
        found: String,
    },

    #[error("room {coords}: unrecognized symbol '{symbol}'")]
    UnrecognizedSymbol { coords: Coords, symbol: char },

    #[error("line {line}: map ended early, expected {expected_lines} grid lines")]
    Truncated { line: usize, expected_lines: usize },

    #[error("line {line}: unexpected line after the bottom wall")]
    TrailingLine { line: usize },

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Style(#[from] StyleError),
}

/// Header lines are blank or start with a comment marker
fn is_header_line(line: &str) -> bool {
    line.is_empty() || line.starts_with('#')
}

/// Split map text into lines with trailing whitespace removed, and find the
/// index of the first grid line.
fn grid_lines(text: &str) -> (Vec<&str>, Option<usize>) {
    let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
    let first = lines.iter().position(|line| !is_header_line(line));
    (lines, first)
}

/// Infer `(width, height)` of the grid described by `text`.
///
/// Only the first grid line and the number of lines after it are looked at.
pub fn measure_map(text: &str, style: &RoomStyle) -> Result<(usize, usize), MapError> {
    style.validate()?;
    let stride = style.wall_len() + 1;

    let (lines, first) = grid_lines(text);
    let Some(first) = first else {
        return Err(MapError::Dimension {
            line: lines.len().max(1),
            reason: "no grid lines found".to_string(),
        });
    };
    let line_num = first + 1;

    let len = lines[first].chars().count();
    if len % stride != 1 {
        return Err(MapError::Dimension {
            line: line_num,
            reason: format!("expected line length of form {stride}*N+1, got {len}"),
        });
    }
    let width = (len - 1) / stride;

    let remaining = lines.len() - line_num;
    if remaining % 2 != 0 {
        return Err(MapError::Dimension {
            line: line_num,
            reason: format!("expected line count of form 2*N+1, got {}", remaining + 1),
        });
    }
    let height = remaining / 2;

    debug!("measured grid {width}x{height} from line {line_num}");
    Ok((width, height))
}

/// Populate `grid` from `text`.
///
/// The grid must already have the dimensions the text describes, see
/// [`measure_map`]. On error the grid may be partially filled.
pub fn load_map(text: &str, grid: &mut Grid, style: &RoomStyle) -> Result<(), MapError> {
    style.validate()?;

    let (lines, first) = grid_lines(text);
    let mut loader = MapLoader::new(grid, style);
    if let Some(first) = first {
        for (idx, line) in lines.iter().enumerate().skip(first) {
            loader.line(idx + 1, line)?;
        }
    }
    loader.finish(lines.len())
}

/// Measure `text`, build a grid of that size and load it
pub fn parse_map(text: &str, style: &RoomStyle) -> Result<Grid, MapError> {
    let (width, height) = measure_map(text, style)?;
    let mut grid = Grid::new(width, height);
    load_map(text, &mut grid, style)?;
    Ok(grid)
}

/// Which half of the lateral/content rhythm comes next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Lateral,
    Content,
}

/// Position of the loader within the grid body
#[derive(Debug, Clone, Copy)]
struct Cursor {
    kind: LineKind,
    /// Row whose content line is next, or the last row once `south_edge`
    row: usize,
    /// The next lateral line is the bottom boundary
    south_edge: bool,
    /// Bottom boundary consumed
    done: bool,
}

impl Cursor {
    fn new(height: usize) -> Self {
        Self {
            kind: LineKind::Lateral,
            row: 0,
            south_edge: height == 0,
            done: false,
        }
    }

    /// Cursor for the line after the current one
    fn advance(self, height: usize) -> Self {
        match self.kind {
            LineKind::Lateral => Self {
                kind: LineKind::Content,
                done: self.south_edge,
                ..self
            },
            LineKind::Content if self.row + 1 < height => Self {
                kind: LineKind::Lateral,
                row: self.row + 1,
                ..self
            },
            LineKind::Content => Self {
                kind: LineKind::Lateral,
                south_edge: true,
                ..self
            },
        }
    }
}

/// State for one full-load pass over a map
struct MapLoader<'a> {
    grid: &'a mut Grid,
    style: &'a RoomStyle,
    wall_n: Vec<char>,
    door_n: Vec<char>,
    door_s: Vec<char>,
    wall_len: usize,
    line_len: usize,
    cursor: Cursor,
    lines_seen: usize,
}

impl<'a> MapLoader<'a> {
    fn new(grid: &'a mut Grid, style: &'a RoomStyle) -> Self {
        let wall_len = style.wall_len();
        let line_len = grid.width() * (wall_len + 1) + 1;
        let cursor = Cursor::new(grid.height());
        debug!(
            "loading {}x{} grid, line length {line_len}",
            grid.width(),
            grid.height()
        );
        Self {
            grid,
            style,
            wall_n: style.wall_n.chars().collect(),
            door_n: style.door_n.chars().collect(),
            door_s: style.door_s.chars().collect(),
            wall_len,
            line_len,
            cursor,
            lines_seen: 0,
        }
    }

    fn expected_lines(&self) -> usize {
        2 * self.grid.height() + 1
    }

    /// Process one grid line; `line_num` is 1-indexed
    fn line(&mut self, line_num: usize, line: &str) -> Result<(), MapError> {
        if self.cursor.done {
            return Err(MapError::TrailingLine { line: line_num });
        }

        let chars: Vec<char> = line.chars().collect();
        if chars.len() != self.line_len {
            return Err(MapError::LineLength {
                line: line_num,
                expected: self.line_len,
                found: chars.len(),
            });
        }

        debug!(
            "L{line_num}: {:?} row {} south_edge={}",
            self.cursor.kind, self.cursor.row, self.cursor.south_edge
        );
        match self.cursor.kind {
            LineKind::Lateral => self.lateral_line(line_num, &chars)?,
            LineKind::Content => self.content_line(line_num, &chars)?,
        }

        self.lines_seen += 1;
        self.cursor = self.cursor.advance(self.grid.height());
        Ok(())
    }

    fn finish(self, total_lines: usize) -> Result<(), MapError> {
        if !self.cursor.done {
            return Err(MapError::Truncated {
                line: total_lines,
                expected_lines: self.expected_lines(),
            });
        }
        debug!("loaded {} grid lines", self.lines_seen);
        Ok(())
    }

    /// Start of the separator before room column `col`
    fn column_start(&self, col: usize) -> usize {
        col * (self.wall_len + 1)
    }

    /// Rows above and below the current lateral line, where they exist
    fn lateral_rows(&self) -> (Option<usize>, Option<usize>) {
        let row = self.cursor.row;
        if self.grid.height() == 0 {
            (None, None)
        } else if self.cursor.south_edge {
            (Some(row), None)
        } else {
            (row.checked_sub(1), Some(row))
        }
    }

    fn lateral_line(&mut self, line_num: usize, chars: &[char]) -> Result<(), MapError> {
        let south_edge = self.cursor.south_edge;
        let (above, below) = self.lateral_rows();

        for col in 0..self.grid.width() {
            let pos = self.column_start(col);
            self.expect_corner(line_num, pos, chars[pos])?;

            let start = pos + 1;
            let segment = &chars[start..start + self.wall_len];
            let is_wall = segment == self.wall_n.as_slice();
            let is_door = if south_edge {
                segment == self.door_s.as_slice()
            } else {
                segment == self.door_n.as_slice()
            };
            if !is_wall && !is_door && segment != self.door_n.as_slice() {
                return Err(MapError::Grammar {
                    line: line_num,
                    column: start,
                    expected: format!(
                        "north wall '{}' or door '{}'",
                        self.style.wall_n, self.style.door_n
                    ),
                    found: segment.iter().collect(),
                });
            }
            if !is_door {
                continue;
            }

            trace!("L{line_num}: door in column {col}");
            if let Some(row) = below {
                self.grid.room_mut(col, row)?.add_door(Direction::North);
            }
            if let Some(row) = above {
                self.grid.room_mut(col, row)?.add_door(Direction::South);
            }
        }

        let pos = self.column_start(self.grid.width());
        self.expect_corner(line_num, pos, chars[pos])
    }

    fn expect_corner(&self, line_num: usize, pos: usize, c: char) -> Result<(), MapError> {
        if c != self.style.corner {
            return Err(MapError::Grammar {
                line: line_num,
                column: pos,
                expected: format!("corner '{}'", self.style.corner),
                found: c.to_string(),
            });
        }
        Ok(())
    }

    fn expect_separator(&self, line_num: usize, pos: usize, c: char) -> Result<(), MapError> {
        let style = self.style;
        if c != style.wall_w && c != style.door_w && c != style.door_e {
            return Err(MapError::Grammar {
                line: line_num,
                column: pos,
                expected: format!("wall '{}' or door '{}'", style.wall_w, style.door_w),
                found: c.to_string(),
            });
        }
        Ok(())
    }

    fn content_line(&mut self, line_num: usize, chars: &[char]) -> Result<(), MapError> {
        let row = self.cursor.row;
        let width = self.grid.width();

        for col in 0..width {
            let pos = self.column_start(col);
            let sep = chars[pos];
            self.expect_separator(line_num, pos, sep)?;
            let is_door = sep == self.style.door_w || sep == self.style.door_e;
            if col > 0 && is_door {
                // shared wall, both rooms get their side
                self.grid.add_door_between(Coords::new(col, row), Direction::West)?;
            } else if sep == self.style.door_w {
                self.grid.room_mut(col, row)?.add_door(Direction::West);
            }

            let start = pos + 1;
            let cell: String = chars[start..start + self.wall_len].iter().collect();
            let room = self.grid.room_mut(col, row)?;
            trace!("room {}: '{}'", room.coords, cell.trim());
            for symbol in cell.trim().chars() {
                if !room.apply_glyph(symbol) {
                    return Err(MapError::UnrecognizedSymbol {
                        coords: room.coords,
                        symbol,
                    });
                }
            }
        }

        // east side of the last room
        let pos = self.column_start(width);
        let sep = chars[pos];
        self.expect_separator(line_num, pos, sep)?;
        if sep == self.style.door_e && width > 0 {
            self.grid.room_mut(width - 1, row)?.add_door(Direction::East);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Doors, Pillar};

    const PLAIN: &str = "\
+-----+-----+-----+
| i   |     |     |
+-----+-----+-----+
|     |     | O   |
+-----+-----+-----+
";

    const DOORS: &str = "\
# This is my other dungeon
+-----+-----+-----+
| i   |     = O   |
+--H--+--H--+-----+
| P   = XV  = HH  |
+-----+-----+-----+
";

    fn classic() -> RoomStyle {
        RoomStyle::classic()
    }

    fn doors_at(grid: &Grid, col: usize, row: usize) -> Doors {
        grid.room(col, row).unwrap().doors()
    }

    #[test]
    fn test_measure_plain() {
        assert_eq!(measure_map(PLAIN, &classic()).unwrap(), (3, 2));
    }

    #[test]
    fn test_measure_skips_header() {
        let text = format!("\n   \n# comment\n#another\n{PLAIN}");
        assert_eq!(measure_map(&text, &classic()).unwrap(), (3, 2));
    }

    #[test]
    fn test_measure_ignores_content() {
        // measuring only looks at the first grid line and the line count
        let text = "+-----+-----+\nnonsense\n???\nmore\nlines\n";
        assert_eq!(measure_map(text, &classic()).unwrap(), (2, 2));
    }

    #[test]
    fn test_measure_bad_width() {
        let text = "# hdr\n+-----+-----+----\n|\n+\n";
        let err = measure_map(text, &classic()).unwrap_err();
        assert!(matches!(err, MapError::Dimension { line: 2, .. }));
    }

    #[test]
    fn test_measure_odd_line_count() {
        let text = "+-----+\n|     |\n+-----+\n|     |\n";
        let err = measure_map(text, &classic()).unwrap_err();
        assert!(matches!(err, MapError::Dimension { line: 1, .. }));
    }

    #[test]
    fn test_measure_empty_text() {
        let err = measure_map("\n# nothing here\n", &classic()).unwrap_err();
        assert!(matches!(err, MapError::Dimension { line: 2, .. }));
    }

    #[test]
    fn test_measure_no_lines_reports_line_one() {
        let err = measure_map("", &classic()).unwrap_err();
        assert!(matches!(err, MapError::Dimension { line: 1, .. }));
        assert!(err.to_string().starts_with("line 1:"));
    }

    #[test]
    fn test_load_plain_markers() {
        let grid = parse_map(PLAIN, &classic()).unwrap();
        assert!(grid.room(0, 0).unwrap().is_entrance);
        assert!(grid.room(2, 1).unwrap().is_exit);
        let flagged = grid
            .rooms()
            .filter(|r| r.is_entrance || r.is_exit)
            .count();
        assert_eq!(flagged, 2);
        assert!(grid.rooms().all(|r| r.doors().is_empty()));
    }

    #[test]
    fn test_load_doors_and_contents() {
        let grid = parse_map(DOORS, &classic()).unwrap();
        assert_eq!(grid.dimensions(), (3, 2));

        assert_eq!(doors_at(&grid, 0, 0), Doors::SOUTH);
        assert_eq!(doors_at(&grid, 1, 0), Doors::EAST | Doors::SOUTH);
        assert_eq!(doors_at(&grid, 2, 0), Doors::WEST);
        assert_eq!(doors_at(&grid, 0, 1), Doors::NORTH | Doors::EAST);
        assert_eq!(
            doors_at(&grid, 1, 1),
            Doors::NORTH | Doors::EAST | Doors::WEST
        );
        assert_eq!(doors_at(&grid, 2, 1), Doors::WEST);

        let p = grid.room(0, 1).unwrap();
        assert_eq!(p.pillar, Some(Pillar::Polymorphism));

        let xv = grid.room(1, 1).unwrap();
        assert!(xv.has_pit);
        assert_eq!(xv.vision_potions, 1);
        assert_eq!(xv.healing_potions, 0);

        let hh = grid.room(2, 1).unwrap();
        assert_eq!(hh.healing_potions, 2);
        assert!(grid.room(2, 0).unwrap().is_exit);
    }

    #[test]
    fn test_boundary_doors_single_side() {
        let text = "\
+--H--+-----+
=     |     =
+-----+--H--+
";
        let grid = parse_map(text, &classic()).unwrap();
        assert_eq!(doors_at(&grid, 0, 0), Doors::NORTH | Doors::WEST);
        assert_eq!(doors_at(&grid, 1, 0), Doors::SOUTH | Doors::EAST);
    }

    #[test]
    fn test_distinct_east_and_west_glyphs() {
        let mut style = classic();
        style.door_w = '<';
        style.door_e = '>';
        let text = "\
+-----+-----+-----+
<     >     <     >
+-----+-----+-----+
";
        let grid = parse_map(text, &style).unwrap();
        assert_eq!(doors_at(&grid, 0, 0), Doors::WEST | Doors::EAST);
        assert_eq!(doors_at(&grid, 1, 0), Doors::WEST | Doors::EAST);
        assert_eq!(doors_at(&grid, 2, 0), Doors::WEST | Doors::EAST);
    }

    #[test]
    fn test_distinct_door_glyphs_render_and_reload() {
        let mut style = classic();
        style.door_w = '<';
        style.door_e = '>';
        let mut grid = Grid::new(2, 1);
        grid.add_door_between(Coords::new(0, 0), Direction::East).unwrap();

        let text = crate::render::render_map(&grid, &style);
        assert_eq!(text, "+-----+-----+\n|     <     |\n+-----+-----+\n");
        let back = parse_map(&text, &style).unwrap();
        assert_eq!(doors_at(&back, 0, 0), Doors::EAST);
        assert_eq!(doors_at(&back, 1, 0), Doors::WEST);
        assert_eq!(back, grid);
    }

    #[test]
    fn test_boundary_glyph_swap_stays_single_sided() {
        let mut style = classic();
        style.door_w = '<';
        style.door_e = '>';
        // an east glyph on the west edge and a west glyph on the east edge
        // open nothing
        let text = "+-----+\n>     <\n+-----+\n";
        let grid = parse_map(text, &style).unwrap();
        assert_eq!(doors_at(&grid, 0, 0), Doors::empty());
    }

    #[test]
    fn test_distinct_south_door() {
        let mut style = classic();
        style.door_s = "--S--".to_string();
        let text = "\
+-----+
|     |
+--S--+
";
        let grid = parse_map(text, &style).unwrap();
        assert_eq!(doors_at(&grid, 0, 0), Doors::SOUTH);

        // a south door glyph is only valid on the bottom line
        let text = "\
+--S--+
|     |
+-----+
";
        let err = parse_map(text, &style).unwrap_err();
        assert!(matches!(
            err,
            MapError::Grammar {
                line: 1,
                column: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_trailing_whitespace_and_crlf() {
        let text = "+-----+   \r\n| i   |\t\r\n+-----+\r\n";
        let grid = parse_map(text, &classic()).unwrap();
        assert!(grid.room(0, 0).unwrap().is_entrance);
    }

    #[test]
    fn test_content_cell_counts_repeats() {
        let text = "\
+-----+-----+
| HH  |XV   |
+-----+-----+
";
        let grid = parse_map(text, &classic()).unwrap();
        assert_eq!(grid.room(0, 0).unwrap().healing_potions, 2);
        let r = grid.room(1, 0).unwrap();
        assert!(r.has_pit);
        assert_eq!(r.vision_potions, 1);
    }

    #[test]
    fn test_multiple_pillars_last_wins() {
        let text = "+-----+\n| AEI |\n+-----+\n";
        let grid = parse_map(text, &classic()).unwrap();
        assert_eq!(grid.room(0, 0).unwrap().pillar, Some(Pillar::Inheritance));
    }

    #[test]
    fn test_many_entrances_accepted() {
        let text = "+-----+-----+\n| ii  | i   |\n+-----+-----+\n";
        let grid = parse_map(text, &classic()).unwrap();
        assert!(grid.rooms().all(|r| r.is_entrance));
    }

    #[test]
    fn test_short_line() {
        let text = "\
+-----+-----+-----+
| i   |     |     |
+-----+-----+----
|     |     | O   |
+-----+-----+-----+
";
        let mut grid = Grid::new(3, 2);
        let err = load_map(text, &mut grid, &classic()).unwrap_err();
        assert!(matches!(
            err,
            MapError::LineLength {
                line: 3,
                expected: 19,
                found: 17
            }
        ));
    }

    #[test]
    fn test_first_line_checked_against_grid() {
        let mut grid = Grid::new(2, 2);
        let err = load_map(PLAIN, &mut grid, &classic()).unwrap_err();
        assert!(matches!(err, MapError::LineLength { line: 1, .. }));
    }

    #[test]
    fn test_unrecognized_symbol() {
        let text = "\
+-----+-----+-----+
| i   |     |     |
+-----+-----+-----+
|     | Z   | O   |
+-----+-----+-----+
";
        let err = parse_map(text, &classic()).unwrap_err();
        match err {
            MapError::UnrecognizedSymbol { coords, symbol } => {
                assert_eq!(coords, Coords::new(1, 1));
                assert_eq!(symbol, 'Z');
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_inner_space_is_unrecognized() {
        let text = "+-----+\n| H H |\n+-----+\n";
        let err = parse_map(text, &classic()).unwrap_err();
        assert!(matches!(
            err,
            MapError::UnrecognizedSymbol { symbol: ' ', .. }
        ));
    }

    #[test]
    fn test_bad_corner() {
        let text = "\
+-----#-----+
|     |     |
+-----+-----+
";
        let err = parse_map(text, &classic()).unwrap_err();
        match err {
            MapError::Grammar {
                line,
                column,
                found,
                ..
            } => {
                assert_eq!((line, column), (1, 6));
                assert_eq!(found, "#");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_bad_wall_segment() {
        let text = "\
+-----+-----+
|     |     |
+-----+--X--+
";
        let err = parse_map(text, &classic()).unwrap_err();
        match err {
            MapError::Grammar {
                line,
                column,
                found,
                ..
            } => {
                assert_eq!((line, column), (3, 7));
                assert_eq!(found, "--X--");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_bad_vertical_separator() {
        let text = "\
+-----+-----+
|     #     |
+-----+-----+
";
        let err = parse_map(text, &classic()).unwrap_err();
        assert!(matches!(
            err,
            MapError::Grammar {
                line: 2,
                column: 6,
                ..
            }
        ));
    }

    #[test]
    fn test_error_line_numbers_count_header() {
        let text = "# hdr\n\n+-----+\n|  Q  |\n+-----+\n";
        let err = parse_map(text, &classic()).unwrap_err();
        assert!(matches!(err, MapError::UnrecognizedSymbol { .. }));

        let text = "# hdr\n\n+-----+\n|     #\n+-----+\n";
        let err = parse_map(text, &classic()).unwrap_err();
        assert!(matches!(
            err,
            MapError::Grammar {
                line: 4,
                column: 6,
                ..
            }
        ));
    }

    #[test]
    fn test_truncated_map() {
        let text = "+-----+\n|     |\n+-----+\n|     |\n";
        let mut grid = Grid::new(1, 2);
        let err = load_map(text, &mut grid, &classic()).unwrap_err();
        assert!(matches!(
            err,
            MapError::Truncated {
                line: 4,
                expected_lines: 5
            }
        ));
    }

    #[test]
    fn test_trailing_line() {
        let text = "+-----+\n|     |\n+-----+\n|     |\n+-----+\n";
        let mut grid = Grid::new(1, 1);
        let err = load_map(text, &mut grid, &classic()).unwrap_err();
        assert!(matches!(err, MapError::TrailingLine { line: 4 }));
    }

    #[test]
    fn test_zero_height_grid() {
        let grid = parse_map("+-----+-----+\n", &classic()).unwrap();
        assert_eq!(grid.dimensions(), (2, 0));
        assert_eq!(grid.rooms().count(), 0);
    }

    #[test]
    fn test_invalid_style_rejected() {
        let mut style = classic();
        style.door_n = "H".to_string();
        assert!(matches!(
            measure_map(PLAIN, &style),
            Err(MapError::Style(StyleError::SegmentLength { .. }))
        ));
        let mut grid = Grid::new(3, 2);
        assert!(matches!(
            load_map(PLAIN, &mut grid, &style),
            Err(MapError::Style(_))
        ));
    }

    #[test]
    fn test_narrow_style() {
        let style = RoomStyle {
            corner: '*',
            wall_n: "~~~".to_string(),
            door_n: "~D~".to_string(),
            door_s: "~D~".to_string(),
            wall_w: '!',
            door_w: ':',
            door_e: ':',
        };
        let text = "\
*~~~*~D~*
!i  :O  !
*~~~*~~~*
";
        let grid = parse_map(text, &style).unwrap();
        assert_eq!(grid.dimensions(), (2, 1));
        assert_eq!(doors_at(&grid, 0, 0), Doors::EAST);
        assert_eq!(doors_at(&grid, 1, 0), Doors::NORTH | Doors::WEST);
        assert!(grid.room(1, 0).unwrap().is_exit);
    }

    #[test]
    fn test_cursor_sequence() {
        let height = 2;
        let mut cursor = Cursor::new(height);
        let mut seen = Vec::new();
        while !cursor.done {
            seen.push((cursor.kind, cursor.row, cursor.south_edge));
            cursor = cursor.advance(height);
        }
        assert_eq!(
            seen,
            vec![
                (LineKind::Lateral, 0, false),
                (LineKind::Content, 0, false),
                (LineKind::Lateral, 1, false),
                (LineKind::Content, 1, false),
                (LineKind::Lateral, 1, true),
            ]
        );
    }
}
