//! Common types for replays: players, scores and log validation errors.

use alloc::string::String;
use core::fmt;

use crate::space::SpaceError;

/// One of the two sides. The numeric codes match the game logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    /// Player 1, drawn as `X`.
    Black = 1,
    /// Player 2, drawn as `O`.
    White = 2,
}

impl Player {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Player::Black),
            2 => Some(Player::White),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

/// Score pair as recorded in the log: marbles each side may still lose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new(left: u32, right: u32) -> Self {
        Score { left, right }
    }
}

/// Reasons a game log is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidLogError {
    /// The log contains no board snapshot.
    EmptyBoardHistory,
    /// `scoreHistory` is not aligned with `boardHistory`.
    ScoreHistoryLength { boards: usize, scores: usize },
    /// `moveHistory` must hold one entry per transition, plus at most one
    /// trailing entry.
    MoveHistoryLength { boards: usize, moves: usize },
    /// A board snapshot names something that is not a space.
    InvalidBoardSpace { ply: usize, error: SpaceError },
    /// A board snapshot holds an occupant code other than 0, 1 or 2.
    InvalidOccupant { ply: usize, space: String, code: u8 },
    /// A move entry is not a `[marbles, destination]` pair.
    MalformedMove { index: usize },
    /// A move names something that is not a space.
    InvalidMoveSpace { index: usize, error: SpaceError },
    /// A move direction outside 1..=6.
    InvalidDirection { index: usize, code: u8 },
    /// `startPlayer` or `winner` is not 1 or 2.
    InvalidPlayer { field: &'static str, code: u8 },
}

impl fmt::Display for InvalidLogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidLogError::EmptyBoardHistory => write!(f, "board history is empty"),
            InvalidLogError::ScoreHistoryLength { boards, scores } => write!(
                f,
                "score history has {} entries but board history has {}",
                scores, boards
            ),
            InvalidLogError::MoveHistoryLength { boards, moves } => write!(
                f,
                "move history has {} entries; {} or {} expected for {} boards",
                moves,
                boards.saturating_sub(1),
                boards,
                boards
            ),
            InvalidLogError::InvalidBoardSpace { ply, error } => {
                write!(f, "board {}: {}", ply, error)
            }
            InvalidLogError::InvalidOccupant { ply, space, code } => {
                write!(f, "board {}: space {} has invalid occupant {}", ply, space, code)
            }
            InvalidLogError::MalformedMove { index } => {
                write!(f, "move {}: not a [marbles, destination] pair", index)
            }
            InvalidLogError::InvalidMoveSpace { index, error } => {
                write!(f, "move {}: {}", index, error)
            }
            InvalidLogError::InvalidDirection { index, code } => {
                write!(f, "move {}: invalid direction {} (1-6 expected)", index, code)
            }
            InvalidLogError::InvalidPlayer { field, code } => {
                write!(f, "{}: invalid player {} (1 or 2 expected)", field, code)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidLogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InvalidLogError::InvalidBoardSpace { error, .. }
            | InvalidLogError::InvalidMoveSpace { error, .. } => Some(error),
            _ => None,
        }
    }
}
