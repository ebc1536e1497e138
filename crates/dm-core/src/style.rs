//! Map rendering style
//!
//! Glyphs used for the structural parts of a map: corners, horizontal wall
//! and door segments, and the single-character vertical walls and doors.
//! Content markers inside rooms are fixed and live in [`crate::grid`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StyleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("style segment '{role}' is empty")]
    EmptySegment { role: &'static str },
    #[error("style segment '{role}' is {found} chars, expected {expected}")]
    SegmentLength {
        role: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Glyph roles for walls and doors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomStyle {
    /// Where lateral walls meet
    pub corner: char,
    /// Plain horizontal wall
    pub wall_n: String,
    /// Horizontal wall with a door
    pub door_n: String,
    /// Door on the bottom boundary of the grid
    pub door_s: String,
    /// Plain vertical wall
    pub wall_w: char,
    /// Vertical door read as the west side of the room that follows
    pub door_w: char,
    /// Vertical door read as the east side of the room before it
    pub door_e: char,
}

impl Default for RoomStyle {
    fn default() -> Self {
        Self::classic()
    }
}

impl RoomStyle {
    /// `+-----+` walls, `--H--` and `=` doors
    pub fn classic() -> Self {
        Self {
            corner: '+',
            wall_n: "-----".to_string(),
            door_n: "--H--".to_string(),
            door_s: "--H--".to_string(),
            wall_w: '|',
            door_w: '=',
            door_e: '=',
        }
    }

    /// Width in characters of one horizontal wall segment
    pub fn wall_len(&self) -> usize {
        self.wall_n.chars().count()
    }

    /// Check that all horizontal segments are non-empty and equally wide
    pub fn validate(&self) -> Result<(), StyleError> {
        let expected = self.wall_len();
        if expected == 0 {
            return Err(StyleError::EmptySegment { role: "wall_n" });
        }
        for (role, segment) in [("door_n", &self.door_n), ("door_s", &self.door_s)] {
            let found = segment.chars().count();
            if found != expected {
                return Err(StyleError::SegmentLength {
                    role,
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }

    /// Parse a style from JSON. Missing roles keep their classic glyphs.
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        let style: RoomStyle = serde_json::from_str(json)?;
        style.validate()?;
        Ok(style)
    }

    /// Load a style from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, StyleError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn to_json(&self) -> Result<String, StyleError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
