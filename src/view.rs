//! Read-only data handed to a renderer for one cursor position.

use alloc::string::String;
use core::fmt;

use crate::board::Board;
use crate::common::{Player, Score};
use crate::record::{Move, RejectedMove};

/// Which step requests would currently change the position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Controls {
    pub can_step_backward: bool,
    pub can_step_forward: bool,
}

/// Outcome shown once the cursor reaches the final ply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TerminalBanner<'a> {
    /// Abnormal-termination message; rendered as an error.
    pub exit_reason: Option<&'a str>,
    pub winner: Option<Player>,
    /// Move recorded after the final board, if any.
    pub rejected_move: Option<&'a RejectedMove>,
}

impl TerminalBanner<'_> {
    /// Whether the game ended abnormally.
    pub fn is_error(&self) -> bool {
        self.exit_reason.is_some()
    }

    /// `Player 2 won the game`
    pub fn winner_line(&self) -> Option<String> {
        self.winner
            .map(|p| alloc::format!("Player {} won the game", p.code()))
    }
}

impl fmt::Display for TerminalBanner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        if let Some(reason) = self.exit_reason {
            f.write_str(reason)?;
            first = false;
        }
        if let Some(line) = self.winner_line() {
            if !first {
                f.write_str("\n")?;
            }
            f.write_str(&line)?;
        }
        Ok(())
    }
}

/// Everything needed to draw one ply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplayView<'a> {
    pub position: usize,
    pub last_index: usize,
    pub board: &'a Board,
    /// Move that produced this board.
    pub last_move: Option<&'a Move>,
    /// `last_move` formatted as `(C3, C4) → NE`.
    pub move_annotation: Option<String>,
    /// Side to move from this board.
    pub move_side: Player,
    pub scores: Option<Score>,
    pub controls: Controls,
    pub is_terminal: bool,
    pub terminal_banner: Option<TerminalBanner<'a>>,
}
