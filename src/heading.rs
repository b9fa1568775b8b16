//! Cardinal headings and quarter-turn rotation.

use crate::error::{Error, Result};
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The direction the robot faces.
///
/// Discriminants follow clockwise order, so a clockwise quarter turn is `+1 mod 4`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Heading {
    #[default]
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Heading {
    /// All headings in clockwise order, starting from North.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Result<Self> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(Error::InvalidHeading(index))
    }

    /// Returns the heading one quarter turn away.
    ///
    /// Counter-clockwise adds 3 rather than subtracting 1 so the sum never goes negative.
    pub fn rotated(self, clockwise: bool) -> Self {
        let delta = if clockwise { 1 } else { 3 };
        Self::ALL[((self.index() + delta) % 4) as usize]
    }

    pub fn clockwise(self) -> Self {
        self.rotated(true)
    }

    pub fn counter_clockwise(self) -> Self {
        self.rotated(false)
    }

    pub fn opposite(self) -> Self {
        Self::ALL[((self.index() + 2) % 4) as usize]
    }

    /// The unit grid offset of one forward step.
    ///
    /// Row 0 is the top of the grid, so North decrements y.
    pub fn step(self) -> IVec2 {
        match self {
            Heading::North => IVec2::NEG_Y,
            Heading::East => IVec2::X,
            Heading::South => IVec2::Y,
            Heading::West => IVec2::NEG_X,
        }
    }

    /// Single-letter code used by the grid renderer.
    pub fn code(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TryFrom<u8> for Heading {
    type Error = Error;

    fn try_from(index: u8) -> Result<Self> {
        Self::from_index(index)
    }
}

impl TryFrom<char> for Heading {
    type Error = Error;

    fn try_from(code: char) -> Result<Self> {
        match code.to_ascii_uppercase() {
            'N' => Ok(Heading::North),
            'E' => Ok(Heading::East),
            'S' => Ok(Heading::South),
            'W' => Ok(Heading::West),
            _ => Err(Error::InvalidHeadingCode(code)),
        }
    }
}

impl FromStr for Heading {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Heading::try_from(c),
            _ => Err(Error::InvalidHeadingText(s.to_owned())),
        }
    }
}
