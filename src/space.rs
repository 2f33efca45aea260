//! Space identifiers and move directions on the hexagonal Abalone board.
//!
//! A space is named by a row letter (`A` at the bottom to `I` at the top) and
//! a diagonal digit (`1` to `9`). Only 61 of the 81 combinations lie on the
//! board; every row covers a contiguous run of diagonals.

use alloc::string::{String, ToString};
use core::fmt;
use core::ops::Range;
use core::str::FromStr;

use crate::config::{DIAGONALS, NUM_SPACES, ROWS, ROW_OFFSETS};

/// Errors produced while parsing or constructing a [`Space`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Notation must be exactly one letter and one digit.
    InvalidLength(usize),
    /// Characters are not a row letter and a diagonal digit.
    InvalidNotation(String),
    /// Row/diagonal pair lies outside the hexagon.
    OffBoard { row: u8, diagonal: u8 },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpaceError::InvalidLength(len) => {
                write!(f, "invalid space length {} (2 expected)", len)
            }
            SpaceError::InvalidNotation(s) => write!(f, "invalid space notation '{}'", s),
            SpaceError::OffBoard { row, diagonal } => {
                write!(f, "row {} diagonal {} is not on the board", row, diagonal)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SpaceError {}

/// Diagonals (0-based, end exclusive) present in `row`.
pub const fn diagonal_range(row: u8) -> Range<u8> {
    if row <= 4 {
        0..5 + row
    } else {
        row - 4..9
    }
}

/// A single space of the board, stored as 0-based row and diagonal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Space {
    row: u8,
    diagonal: u8,
}

impl Space {
    /// Build a space from 0-based row and diagonal indices.
    pub fn new(row: u8, diagonal: u8) -> Result<Self, SpaceError> {
        if row as usize >= ROWS.len() || !diagonal_range(row).contains(&diagonal) {
            return Err(SpaceError::OffBoard { row, diagonal });
        }
        Ok(Space { row, diagonal })
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn diagonal(self) -> u8 {
        self.diagonal
    }

    pub fn row_letter(self) -> char {
        ROWS[self.row as usize]
    }

    pub fn diagonal_digit(self) -> char {
        DIAGONALS[self.diagonal as usize]
    }

    /// Dense index in `0..NUM_SPACES`, row by row from `A1`.
    pub fn index(self) -> usize {
        ROW_OFFSETS[self.row as usize] + (self.diagonal - diagonal_range(self.row).start) as usize
    }

    /// Inverse of [`Space::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= NUM_SPACES {
            return None;
        }
        let row = ROW_OFFSETS.iter().rposition(|&offset| offset <= index)?;
        let row = row as u8;
        let diagonal = diagonal_range(row).start + (index - ROW_OFFSETS[row as usize]) as u8;
        Some(Space { row, diagonal })
    }

    /// Every space on the board in index order.
    pub fn all() -> impl Iterator<Item = Space> {
        (0..NUM_SPACES).filter_map(Space::from_index)
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.diagonal_digit())
    }
}

impl FromStr for Space {
    type Err = SpaceError;

    /// Case-insensitive; accepts both `A1` and `1A`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: [char; 2] = {
            let mut it = s.chars();
            match (it.next(), it.next(), it.next()) {
                (Some(a), Some(b), None) => [a.to_ascii_uppercase(), b.to_ascii_uppercase()],
                _ => return Err(SpaceError::InvalidLength(s.chars().count())),
            }
        };
        let position = |letter: char, digit: char| {
            let row = ROWS.iter().position(|&r| r == letter)?;
            let diagonal = DIAGONALS.iter().position(|&d| d == digit)?;
            Some((row as u8, diagonal as u8))
        };
        let (row, diagonal) = position(chars[0], chars[1])
            .or_else(|| position(chars[1], chars[0]))
            .ok_or_else(|| SpaceError::InvalidNotation(s.to_string()))?;
        Space::new(row, diagonal)
    }
}

/// One of the six directions a move can push marbles in.
///
/// ```text
///  6 1
/// 5 · 2
///  4 3
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    SouthWest = 4,
    West = 5,
    NorthWest = 6,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Map the numeric code used in game logs.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.code() == code)
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Compass abbreviation, e.g. `NE`.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}
