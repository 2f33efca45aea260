use std::path::Path;

use abalone_replay::{load_log, render_board, render_view, Board, RenderStyle, ReplayCursor};

const STANDARD_BOARD: &str = "    I O O O O O
   H O O O O O O
  G · · O O O · ·
 F · · · · · · · ·
E · · · · · · · · ·
 D · · · · · · · · 9
  C · · X X X · · 8
   B X X X X X X 7
    A X X X X X 6
       1 2 3 4 5";

#[test]
fn test_standard_board_layout() {
    assert_eq!(
        render_board(&Board::standard(), &RenderStyle::default()),
        STANDARD_BOARD
    );
}

#[test]
fn test_ascii_style() {
    let text = render_board(&Board::new(), &RenderStyle::ascii());
    assert!(!text.contains('·'));
    assert!(text.starts_with("    I . . . . ."));
}

#[test]
fn test_view_at_opening_and_end() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/illegal_move.js");
    let log = load_log(&path).unwrap();
    let style = RenderStyle::default();
    let mut cursor = ReplayCursor::new(&log);

    let opening = render_view(&cursor.current_view(), &style);
    assert!(opening.starts_with("Ply 0/2  Score 6 : 6\nBlack (X) to move\nLast move: -\n"));
    assert!(opening.contains(STANDARD_BOARD));
    assert!(opening.contains("[-] prev  [n] next"));
    assert!(!opening.contains("won the game"));

    cursor.fast_forward();
    let end = render_view(&cursor.current_view(), &style);
    assert!(end.contains("Last move: (G5) → SW"));
    assert!(end.contains("[p] prev  [-] next"));
    assert!(end.contains("! Player 1 made an illegal move\n"));
    assert!(end.contains("Rejected move: (A1) → SW\n"));
    assert!(end.ends_with("Player 2 won the game\n"));
}
