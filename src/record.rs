//! The recorded course of a game, validated once and never mutated.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::board::Board;
use crate::common::{InvalidLogError, Player, Score};
use crate::space::{Direction, Space};

/// Where a move sends its marbles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveTarget {
    /// Direction code as written by the game runner.
    Direction(Direction),
    /// Explicit destination space.
    Space(Space),
}

impl fmt::Display for MoveTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveTarget::Direction(d) => fmt::Display::fmt(d, f),
            MoveTarget::Space(s) => fmt::Display::fmt(s, f),
        }
    }
}

/// A single recorded move: the marbles involved and where they go.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub marbles: Vec<Space>,
    pub target: MoveTarget,
}

impl Move {
    pub fn new(marbles: Vec<Space>, target: MoveTarget) -> Self {
        Move { marbles, target }
    }
}

impl fmt::Display for Move {
    /// `(C3, C4) → NE`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, space) in self.marbles.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", space)?;
        }
        write!(f, ") → {}", self.target)
    }
}

/// The move the runner recorded after the final board.
///
/// The runner stores whatever a player returned before checking it, so the
/// entry may not describe a move at all. Such entries are kept as their JSON
/// text for display.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RejectedMove {
    Parsed(Move),
    Raw(String),
}

impl fmt::Display for RejectedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectedMove::Parsed(mv) => fmt::Display::fmt(mv, f),
            RejectedMove::Raw(text) => f.write_str(text),
        }
    }
}

/// Immutable record of a finished or interrupted game.
///
/// Board `0` is the position before the first move; `moves()[i]` is the move
/// that produced board `i + 1`. When the runner aborts a game on an illegal
/// move, that move is recorded without a following board and is available as
/// [`GameLog::rejected_move`] only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameLog {
    boards: Vec<Board>,
    moves: Vec<Move>,
    rejected_move: Option<RejectedMove>,
    scores: Vec<Score>,
    start_player: Player,
    winner: Option<Player>,
    exit_reason: Option<String>,
}

impl GameLog {
    /// Validate the length invariants and build the log.
    ///
    /// `moves` holds one move per transition, optionally followed by the
    /// move that was refused after the final board.
    pub fn new(
        boards: Vec<Board>,
        mut moves: Vec<Move>,
        scores: Vec<Score>,
        start_player: Player,
        winner: Option<Player>,
        exit_reason: Option<String>,
    ) -> Result<Self, InvalidLogError> {
        let rejected_move = if !boards.is_empty() && moves.len() == boards.len() {
            moves.pop().map(RejectedMove::Parsed)
        } else {
            None
        };
        Self::with_rejected_move(
            boards,
            moves,
            rejected_move,
            scores,
            start_player,
            winner,
            exit_reason,
        )
    }

    /// Like [`GameLog::new`], but `moves` holds exactly one move per
    /// transition and the trailing entry is given separately.
    pub fn with_rejected_move(
        boards: Vec<Board>,
        moves: Vec<Move>,
        rejected_move: Option<RejectedMove>,
        scores: Vec<Score>,
        start_player: Player,
        winner: Option<Player>,
        exit_reason: Option<String>,
    ) -> Result<Self, InvalidLogError> {
        if boards.is_empty() {
            return Err(InvalidLogError::EmptyBoardHistory);
        }
        if scores.len() != boards.len() {
            return Err(InvalidLogError::ScoreHistoryLength {
                boards: boards.len(),
                scores: scores.len(),
            });
        }
        if moves.len() + 1 != boards.len() {
            return Err(InvalidLogError::MoveHistoryLength {
                boards: boards.len(),
                moves: moves.len() + usize::from(rejected_move.is_some()),
            });
        }
        let exit_reason = exit_reason.filter(|reason| !reason.is_empty());
        Ok(GameLog {
            boards,
            moves,
            rejected_move,
            scores,
            start_player,
            winner,
            exit_reason,
        })
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Moves that produced a board; the rejected trailing move is not included.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    pub fn start_player(&self) -> Player {
        self.start_player
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn exit_reason(&self) -> Option<&str> {
        self.exit_reason.as_deref()
    }

    /// Index of the final board. Never smaller than zero since a log holds at
    /// least one board.
    pub fn last_index(&self) -> usize {
        self.boards.len() - 1
    }

    pub fn board(&self, ply: usize) -> Option<&Board> {
        self.boards.get(ply)
    }

    pub fn score(&self, ply: usize) -> Option<Score> {
        self.scores.get(ply).copied()
    }

    /// The move that produced board `ply`; `None` for the opening board.
    pub fn move_into(&self, ply: usize) -> Option<&Move> {
        ply.checked_sub(1).and_then(|i| self.moves.get(i))
    }

    /// A trailing move that never produced a board.
    pub fn rejected_move(&self) -> Option<&RejectedMove> {
        self.rejected_move.as_ref()
    }

    /// Side whose turn it is at board `ply`.
    pub fn side_to_move(&self, ply: usize) -> Player {
        if ply % 2 == 0 {
            self.start_player
        } else {
            self.start_player.opponent()
        }
    }
}
