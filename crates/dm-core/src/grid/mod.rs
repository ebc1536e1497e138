//! Grid of rooms
//!
//! A fixed-size rectangle of rooms addressed by column and row. Columns grow
//! eastward and rows grow southward, both from zero.

mod direction;
mod room;

pub use direction::{Direction, Doors};
pub use room::{
    Pillar, Room, ENTRANCE, EXIT, HEALING_POTION, MIXED_ITEMS, PIT, VISION_POTION,
};

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Position of a room in a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coords {
    pub col: usize,
    pub row: usize,
}

impl Coords {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("room ({col},{row}) is outside the {width}x{height} grid")]
    OutOfBounds {
        col: usize,
        row: usize,
        width: usize,
        height: usize,
    },
}

/// Rectangular collection of rooms, stored row by row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    rooms: Vec<Room>,
}

impl Grid {
    /// Create a grid of empty rooms
    pub fn new(width: usize, height: usize) -> Self {
        let rooms = (0..height)
            .flat_map(|row| (0..width).map(move |col| Room::new(Coords::new(col, row))))
            .collect();
        Self {
            width,
            height,
            rooms,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn index(&self, col: usize, row: usize) -> Result<usize, GridError> {
        if col >= self.width || row >= self.height {
            return Err(GridError::OutOfBounds {
                col,
                row,
                width: self.width,
                height: self.height,
            });
        }
        Ok(row * self.width + col)
    }

    pub fn room(&self, col: usize, row: usize) -> Result<&Room, GridError> {
        let idx = self.index(col, row)?;
        Ok(&self.rooms[idx])
    }

    pub fn room_mut(&mut self, col: usize, row: usize) -> Result<&mut Room, GridError> {
        let idx = self.index(col, row)?;
        Ok(&mut self.rooms[idx])
    }

    /// All rooms in row-major order
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// Rooms grouped by row, north to south
    pub fn rows(&self) -> impl Iterator<Item = &[Room]> {
        (0..self.height).map(move |row| &self.rooms[row * self.width..(row + 1) * self.width])
    }

    /// Coordinates of the room on the given side, if inside the grid
    pub fn neighbor(&self, coords: Coords, direction: Direction) -> Option<Coords> {
        let (dc, dr) = direction.delta();
        let col = coords.col.checked_add_signed(dc)?;
        let row = coords.row.checked_add_signed(dr)?;
        (col < self.width && row < self.height).then_some(Coords::new(col, row))
    }

    /// Open a door on one side of a room and the matching side of its
    /// neighbor. Rooms on the boundary only get their own side.
    pub fn add_door_between(
        &mut self,
        coords: Coords,
        direction: Direction,
    ) -> Result<(), GridError> {
        self.room_mut(coords.col, coords.row)?.add_door(direction);
        if let Some(other) = self.neighbor(coords, direction) {
            self.room_mut(other.col, other.row)?.add_door(direction.opposite());
        }
        Ok(())
    }
}
