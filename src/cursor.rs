//! Replay state machine: a position within a [`GameLog`] and the view derived
//! from it.
//!
//! Every operation after construction is total. Step requests past either end
//! of the game leave the position unchanged.

use alloc::string::ToString;

use crate::record::GameLog;
use crate::view::{Controls, ReplayView, TerminalBanner};

/// Current ply within a borrowed, already validated game log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayCursor<'a> {
    log: &'a GameLog,
    position: usize,
}

impl<'a> ReplayCursor<'a> {
    /// Start at the opening board.
    pub fn new(log: &'a GameLog) -> Self {
        ReplayCursor { log, position: 0 }
    }

    pub fn log(&self) -> &'a GameLog {
        self.log
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn last_index(&self) -> usize {
        self.log.last_index()
    }

    pub fn can_step_forward(&self) -> bool {
        self.position < self.last_index()
    }

    pub fn can_step_backward(&self) -> bool {
        self.position > 0
    }

    pub fn is_terminal(&self) -> bool {
        self.position == self.last_index()
    }

    /// Advance one ply. Returns `false` when already at the final ply.
    pub fn step_forward(&mut self) -> bool {
        if !self.can_step_forward() {
            return false;
        }
        self.position += 1;
        log::trace!("replay cursor -> {}", self.position);
        true
    }

    /// Go back one ply. Returns `false` when already at the opening board.
    pub fn step_backward(&mut self) -> bool {
        if !self.can_step_backward() {
            return false;
        }
        self.position -= 1;
        log::trace!("replay cursor -> {}", self.position);
        true
    }

    /// Jump to `ply`, clamped to the final ply.
    pub fn seek(&mut self, ply: usize) {
        self.position = ply.min(self.last_index());
        log::trace!("replay cursor -> {}", self.position);
    }

    pub fn rewind(&mut self) {
        self.seek(0);
    }

    pub fn fast_forward(&mut self) {
        self.seek(self.last_index());
    }

    /// Derive what should be shown at the current position.
    pub fn current_view(&self) -> ReplayView<'a> {
        let log = self.log;
        let position = self.position;
        let is_terminal = self.is_terminal();
        let last_move = log.move_into(position);
        let terminal_banner = is_terminal.then(|| TerminalBanner {
            exit_reason: log.exit_reason(),
            winner: log.winner(),
            rejected_move: log.rejected_move(),
        });
        ReplayView {
            position,
            last_index: self.last_index(),
            board: &log.boards()[position],
            last_move,
            move_annotation: last_move.map(|mv| mv.to_string()),
            move_side: log.side_to_move(position),
            scores: log.score(position),
            controls: Controls {
                can_step_backward: self.can_step_backward(),
                can_step_forward: self.can_step_forward(),
            },
            is_terminal,
            terminal_banner,
        }
    }
}
