//! Compass directions and per-room door sets

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// One of the four sides of a room
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions, in the order doors are reported
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The side facing this one across a shared wall
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Column/row step towards the neighbor on this side
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// The door flag for this side
    pub const fn door(self) -> Doors {
        match self {
            Direction::North => Doors::NORTH,
            Direction::South => Doors::SOUTH,
            Direction::East => Doors::EAST,
            Direction::West => Doors::WEST,
        }
    }
}

bitflags! {
    /// Which sides of a room have a door
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Doors: u8 {
        const NORTH = 0x01;
        const SOUTH = 0x02;
        const EAST = 0x04;
        const WEST = 0x08;
    }
}

impl Doors {
    /// Directions present in this set, in `Direction::ALL` order
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |dir| self.contains(dir.door()))
    }
}

// Serialized as the raw bit pattern
impl Serialize for Doors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Doors {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Doors::from_bits_truncate(bits))
    }
}
