#![cfg(feature = "std")]

use serde::Serialize;

use crate::config::STARTING_SCORE;
use crate::record::GameLog;

/// Machine-readable overview of a recorded game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    /// Number of boards, including the opening position.
    pub plies: usize,
    /// Recorded moves, counting a rejected trailing move.
    pub moves: usize,
    pub start_player: u8,
    pub winner: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_reason: Option<String>,
    pub final_score: (u32, u32),
    /// Marbles each side has lost by the final board.
    pub pushed_off: (u32, u32),
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_move: Option<String>,
}

impl From<&GameLog> for GameSummary {
    fn from(log: &GameLog) -> Self {
        let final_score = log
            .score(log.last_index())
            .map(|s| (s.left, s.right))
            .unwrap_or((STARTING_SCORE, STARTING_SCORE));
        GameSummary {
            plies: log.boards().len(),
            moves: log.moves().len() + usize::from(log.rejected_move().is_some()),
            start_player: log.start_player().code(),
            winner: log.winner().map(|p| p.code()),
            exit_reason: log.exit_reason().map(str::to_string),
            final_score,
            pushed_off: (
                STARTING_SCORE.saturating_sub(final_score.0),
                STARTING_SCORE.saturating_sub(final_score.1),
            ),
            rejected_move: log.rejected_move().map(|mv| mv.to_string()),
        }
    }
}
