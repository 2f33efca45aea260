#![cfg(feature = "std")]

//! Text rendering of replay views for terminals.

use crate::board::{Board, Occupant};
use crate::common::Player;
use crate::config::{DIAGONALS, ROWS};
use crate::view::ReplayView;

/// Glyphs used to draw the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderStyle {
    pub black: char,
    pub white: char,
    pub empty: char,
}

impl Default for RenderStyle {
    fn default() -> Self {
        RenderStyle {
            black: 'X',
            white: 'O',
            empty: '·',
        }
    }
}

impl RenderStyle {
    /// Plain ASCII glyphs for terminals without UTF-8.
    pub fn ascii() -> Self {
        RenderStyle {
            empty: '.',
            ..Self::default()
        }
    }

    pub fn glyph(&self, occupant: Occupant) -> char {
        match occupant {
            Occupant::Empty => self.empty,
            Occupant::Black => self.black,
            Occupant::White => self.white,
        }
    }

    fn player_glyph(&self, player: Player) -> char {
        self.glyph(Occupant::from(player))
    }
}

/// Draw the hexagon with row `I` on top, row letters on the left and the
/// diagonal digits along the lower right edge.
///
/// ```text
///     I O O O O O
///    H O O O O O O
///   G · · O O O · ·
///  F · · · · · · · ·
/// E · · · · · · · · ·
///  D · · · · · · · · 9
///   C · · X X X · · 8
///    B X X X X X X 7
///     A X X X X X 6
///        1 2 3 4 5
/// ```
pub fn render_board(board: &Board, style: &RenderStyle) -> String {
    let mut out = String::new();
    for row in (0..ROWS.len() as u8).rev() {
        let indent = (row as i32 - 4).unsigned_abs() as usize;
        out.push_str(&" ".repeat(indent));
        out.push(ROWS[row as usize]);
        for occupant in board.row(row) {
            out.push(' ');
            out.push(style.glyph(occupant));
        }
        if row < 4 {
            out.push(' ');
            out.push(DIAGONALS[row as usize + 5]);
        }
        out.push('\n');
    }
    out.push_str("       1 2 3 4 5");
    out
}

/// Draw a full view: header, board, controls and, at the final ply, the
/// game outcome.
pub fn render_view(view: &ReplayView<'_>, style: &RenderStyle) -> String {
    let mut out = format!("Ply {}/{}", view.position, view.last_index);
    if let Some(score) = view.scores {
        out.push_str(&format!("  Score {} : {}", score.left, score.right));
    }
    out.push('\n');
    out.push_str(&format!(
        "{} ({}) to move\n",
        view.move_side,
        style.player_glyph(view.move_side)
    ));
    let annotation = view.move_annotation.as_deref().unwrap_or("-");
    out.push_str(&format!("Last move: {}\n\n", annotation));
    out.push_str(&render_board(view.board, style));
    out.push_str("\n\n");

    let prev = if view.controls.can_step_backward { "[p]" } else { "[-]" };
    let next = if view.controls.can_step_forward { "[n]" } else { "[-]" };
    out.push_str(&format!("{} prev  {} next  [q] quit\n", prev, next));

    if let Some(banner) = &view.terminal_banner {
        out.push('\n');
        if let Some(reason) = banner.exit_reason {
            out.push_str(&format!("! {}\n", reason));
        }
        if let Some(mv) = banner.rejected_move {
            out.push_str(&format!("Rejected move: {}\n", mv));
        }
        match banner.winner_line() {
            Some(line) => {
                out.push_str(&line);
                out.push('\n');
            }
            None => out.push_str("Game over\n"),
        }
    }
    out
}
