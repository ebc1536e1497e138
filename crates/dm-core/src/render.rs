//! Grid to map text
//!
//! Output uses the same grammar [`crate::parser`] reads, so a rendered grid
//! loads back into an identical one as long as every shared door is set on
//! both rooms and each cell's contents fit. Cells with too many glyphs fall
//! back to a summary with a single `M` for all items; that form is for
//! display only.

use core::fmt;

use crate::grid::{Direction, Grid, Room};
use crate::style::RoomStyle;

/// Render `grid` in `style`, one `\n`-terminated line per grid line
pub fn render_map(grid: &Grid, style: &RoomStyle) -> String {
    let mut out = String::new();
    let rows: Vec<&[Room]> = grid.rows().collect();

    if rows.is_empty() {
        lateral_line(&mut out, style, grid.width(), |_| false, &style.wall_n);
        return out;
    }

    lateral_line(
        &mut out,
        style,
        grid.width(),
        |col| rows[0][col].has_door(Direction::North),
        &style.door_n,
    );
    for (r, row) in rows.iter().enumerate() {
        if r > 0 {
            let above = rows[r - 1];
            lateral_line(
                &mut out,
                style,
                grid.width(),
                |col| {
                    row[col].has_door(Direction::North) || above[col].has_door(Direction::South)
                },
                &style.door_n,
            );
        }
        content_line(&mut out, style, row);
    }
    let last = rows[rows.len() - 1];
    lateral_line(
        &mut out,
        style,
        grid.width(),
        |col| last[col].has_door(Direction::South),
        &style.door_s,
    );
    out
}

fn lateral_line(
    out: &mut String,
    style: &RoomStyle,
    width: usize,
    has_door: impl Fn(usize) -> bool,
    door: &str,
) {
    for col in 0..width {
        out.push(style.corner);
        out.push_str(if has_door(col) { door } else { style.wall_n.as_str() });
    }
    out.push(style.corner);
    out.push('\n');
}

fn content_line(out: &mut String, style: &RoomStyle, row: &[Room]) {
    let wall_len = style.wall_len();
    for (col, room) in row.iter().enumerate() {
        let west_open = room.has_door(Direction::West);
        let east_open = col > 0 && row[col - 1].has_door(Direction::East);
        out.push(if west_open {
            style.door_w
        } else if east_open {
            style.door_e
        } else {
            style.wall_w
        });
        out.push_str(&cell_text(room, wall_len));
    }
    let east_edge = row
        .last()
        .is_some_and(|room| room.has_door(Direction::East));
    out.push(if east_edge { style.door_e } else { style.wall_w });
    out.push('\n');
}

/// Room interior padded to exactly `wall_len` characters
fn cell_text(room: &Room, wall_len: usize) -> String {
    let mut glyphs = room.content_glyphs();
    if glyphs.chars().count() > wall_len {
        glyphs = room.summary_glyphs();
    }
    let len = glyphs.chars().count();
    if len < wall_len {
        format!(" {glyphs:<pad$}", pad = wall_len - 1)
    } else {
        glyphs.chars().take(wall_len).collect()
    }
}

impl fmt::Display for Grid {
    /// Renders in the classic style
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_map(self, &RoomStyle::classic()))
    }
}
