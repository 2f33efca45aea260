use abalone_replay::{Board, Occupant, Player, Space, NUM_SPACES};

fn space(s: &str) -> Space {
    s.parse().unwrap()
}

#[test]
fn test_standard_opening_counts() {
    let board = Board::standard();
    assert_eq!(board.marbles(Player::Black).count_ones(), 14);
    assert_eq!(board.marbles(Player::White).count_ones(), 14);
    assert_eq!(board.empty_spaces().count_ones(), NUM_SPACES - 28);
    assert_eq!(board.get(space("C3")), Occupant::Black);
    assert_eq!(board.get(space("C2")), Occupant::Empty);
    assert_eq!(board.get(space("G7")), Occupant::White);
    assert_eq!(board.get(space("E5")), Occupant::Empty);
}

#[test]
fn test_set_replaces_occupant() {
    let mut board = Board::new();
    let e5 = space("E5");
    board.set(e5, Occupant::Black);
    assert_eq!(board.get(e5), Occupant::Black);
    board.set(e5, Occupant::White);
    assert_eq!(board.get(e5), Occupant::White);
    assert!(!board.marbles(Player::Black).contains(e5));
    board.set(e5, Occupant::Empty);
    assert_eq!(board, Board::new());
}

#[test]
fn test_mask_iter_in_index_order() {
    let mut board = Board::new();
    for s in ["I9", "A1", "E5"] {
        board.set(space(s), Occupant::White);
    }
    let spaces: Vec<String> = board
        .marbles(Player::White)
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(spaces, vec!["A1", "E5", "I9"]);
}

#[test]
fn test_occupant_codes() {
    for code in 0..=2 {
        assert_eq!(Occupant::from_code(code).unwrap().code(), code);
    }
    assert_eq!(Occupant::from_code(3), None);
    assert_eq!(Occupant::Black.player(), Some(Player::Black));
    assert_eq!(Occupant::Empty.player(), None);
}

#[test]
fn test_row_iteration_lengths() {
    let board = Board::standard();
    let lengths: Vec<usize> = (0..9).map(|r| board.row(r).count()).collect();
    assert_eq!(lengths, vec![5, 6, 7, 8, 9, 8, 7, 6, 5]);
    assert!(board.row(0).all(|o| o == Occupant::Black));
}
