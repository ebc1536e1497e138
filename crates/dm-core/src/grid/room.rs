//! Rooms and their contents
//!
//! A room records which of its sides carry a door plus the markers and
//! items drawn inside its cell on the map:
//! - entrance `i`, exit `O`, pit `X`
//! - healing potions `H` and vision potions `V` (counted)
//! - at most one pillar, `A`, `E`, `I` or `P`

use serde::{Deserialize, Serialize};
use strum::Display;

use super::direction::{Direction, Doors};
use super::Coords;

/// Entrance marker
pub const ENTRANCE: char = 'i';
/// Exit marker
pub const EXIT: char = 'O';
/// Pit marker
pub const PIT: char = 'X';
/// Healing potion marker, one per potion
pub const HEALING_POTION: char = 'H';
/// Vision potion marker, one per potion
pub const VISION_POTION: char = 'V';
/// Rendered in place of item glyphs that do not fit a cell
pub const MIXED_ITEMS: char = 'M';

/// The four pillars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Pillar {
    Abstraction,
    Encapsulation,
    Inheritance,
    Polymorphism,
}

impl Pillar {
    pub const ALL: [Pillar; 4] = [
        Pillar::Abstraction,
        Pillar::Encapsulation,
        Pillar::Inheritance,
        Pillar::Polymorphism,
    ];

    /// Map glyph for this pillar
    pub const fn glyph(self) -> char {
        match self {
            Pillar::Abstraction => 'A',
            Pillar::Encapsulation => 'E',
            Pillar::Inheritance => 'I',
            Pillar::Polymorphism => 'P',
        }
    }

    pub const fn from_glyph(c: char) -> Option<Self> {
        match c {
            'A' => Some(Pillar::Abstraction),
            'E' => Some(Pillar::Encapsulation),
            'I' => Some(Pillar::Inheritance),
            'P' => Some(Pillar::Polymorphism),
            _ => None,
        }
    }
}

/// A single room of a grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Where this room sits in its grid
    pub coords: Coords,

    doors: Doors,

    pub is_entrance: bool,
    pub is_exit: bool,
    pub has_pit: bool,

    pub healing_potions: u32,
    pub vision_potions: u32,

    /// Last pillar glyph seen in the cell wins
    pub pillar: Option<Pillar>,
}

impl Room {
    /// Create an empty room with no doors
    pub const fn new(coords: Coords) -> Self {
        Self {
            coords,
            doors: Doors::empty(),
            is_entrance: false,
            is_exit: false,
            has_pit: false,
            healing_potions: 0,
            vision_potions: 0,
            pillar: None,
        }
    }

    /// Put a door on one side. Adding an existing door is a no-op.
    pub fn add_door(&mut self, direction: Direction) {
        self.doors.insert(direction.door());
    }

    pub fn has_door(&self, direction: Direction) -> bool {
        self.doors.contains(direction.door())
    }

    pub fn doors(&self) -> Doors {
        self.doors
    }

    /// Potions plus the pillar, if any
    pub fn item_count(&self) -> u32 {
        self.healing_potions + self.vision_potions + u32::from(self.pillar.is_some())
    }

    /// No doors, markers, hazards or items
    pub fn is_empty(&self) -> bool {
        self.doors.is_empty()
            && !self.is_entrance
            && !self.is_exit
            && !self.has_pit
            && self.item_count() == 0
    }

    /// Glyphs describing this room's contents, in canonical order
    pub fn content_glyphs(&self) -> String {
        let mut glyphs = String::new();
        if self.is_entrance {
            glyphs.push(ENTRANCE);
        }
        if self.is_exit {
            glyphs.push(EXIT);
        }
        if self.has_pit {
            glyphs.push(PIT);
        }
        if let Some(pillar) = self.pillar {
            glyphs.push(pillar.glyph());
        }
        glyphs.extend(std::iter::repeat_n(HEALING_POTION, self.healing_potions as usize));
        glyphs.extend(std::iter::repeat_n(VISION_POTION, self.vision_potions as usize));
        glyphs
    }

    /// Like `content_glyphs`, but with all items folded into one `M` marker
    pub fn summary_glyphs(&self) -> String {
        let mut glyphs = String::new();
        if self.is_entrance {
            glyphs.push(ENTRANCE);
        }
        if self.is_exit {
            glyphs.push(EXIT);
        }
        if self.has_pit {
            glyphs.push(PIT);
        }
        if self.item_count() > 0 {
            glyphs.push(MIXED_ITEMS);
        }
        glyphs
    }

    /// Apply one content glyph to this room.
    ///
    /// Returns false if the glyph is not a content marker; the room is left
    /// untouched in that case.
    pub fn apply_glyph(&mut self, glyph: char) -> bool {
        match glyph {
            ENTRANCE => self.is_entrance = true,
            EXIT => self.is_exit = true,
            PIT => self.has_pit = true,
            HEALING_POTION => self.healing_potions += 1,
            VISION_POTION => self.vision_potions += 1,
            c => match Pillar::from_glyph(c) {
                Some(pillar) => self.pillar = Some(pillar),
                None => return false,
            },
        }
        true
    }
}
