use std::path::Path;

use abalone_replay::{
    load_log, parse_log, render_view, InvalidLogError, LoadError, LogFile, Occupant, Player,
    RejectedMove, RenderStyle, ReplayCursor, Score, Space, SpaceError,
};
use serde_json::json;

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn minimal(board_history: serde_json::Value, move_history: serde_json::Value) -> String {
    json!({
        "boardHistory": board_history,
        "moveHistory": move_history,
        "scoreHistory": [[6, 6], [6, 6]],
        "startPlayer": 1,
        "winner": 2
    })
    .to_string()
}

#[test]
fn test_load_plain_json() {
    let log = load_log(&fixture("short_game.json")).unwrap();
    assert_eq!(log.boards().len(), 3);
    assert_eq!(log.moves().len(), 2);
    assert_eq!(log.start_player(), Player::Black);
    assert_eq!(log.winner(), Some(Player::White));
    assert_eq!(log.exit_reason(), None);
    assert_eq!(log.rejected_move(), None);
    assert_eq!(log.score(2), Some(Score::new(6, 6)));

    let d4: Space = "D4".parse().unwrap();
    assert_eq!(log.boards()[0].get(d4), Occupant::Empty);
    assert_eq!(log.boards()[1].get(d4), Occupant::Black);
}

#[test]
fn test_load_runner_script() {
    let log = load_log(&fixture("illegal_move.js")).unwrap();
    assert_eq!(log.last_index(), 2);
    assert_eq!(log.exit_reason(), Some("Player 1 made an illegal move"));
    assert_eq!(
        log.rejected_move().map(|m| m.to_string()).as_deref(),
        Some("(A1) → SW")
    );

    let mut cursor = ReplayCursor::new(&log);
    cursor.fast_forward();
    let banner = cursor.current_view().terminal_banner.unwrap();
    assert_eq!(
        banner.to_string(),
        "Player 1 made an illegal move\nPlayer 2 won the game"
    );
}

#[test]
fn test_missing_file_reports_path() {
    let err = load_log(Path::new("does/not/exist.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("does/not/exist.json"));
}

#[test]
fn test_not_a_log() {
    assert!(matches!(
        parse_log("console.log('hi')").unwrap_err(),
        LoadError::MissingDocument
    ));
    assert!(matches!(
        parse_log("{\"boardHistory\": 3}").unwrap_err(),
        LoadError::Json(_)
    ));
}

#[test]
fn test_missing_spaces_are_empty() {
    let text = minimal(json!([{"E5": 1}, {}]), json!([[["E5"], 2]]));
    let log = parse_log(&text).unwrap();
    let e5: Space = "E5".parse().unwrap();
    assert_eq!(log.boards()[0].get(e5), Occupant::Black);
    assert_eq!(log.boards()[1].get(e5), Occupant::Empty);
}

#[test]
fn test_space_destination() {
    let text = minimal(json!([{}, {}]), json!([[["e5", "e6"], "f7"]]));
    let log = parse_log(&text).unwrap();
    assert_eq!(log.moves()[0].to_string(), "(E5, E6) → F7");
}

#[test]
fn test_rejects_unknown_space() {
    let text = minimal(json!([{"A9": 0}, {}]), json!([[["E5"], 2]]));
    match parse_log(&text).unwrap_err() {
        LoadError::Invalid(InvalidLogError::InvalidBoardSpace { ply, error }) => {
            assert_eq!(ply, 0);
            assert_eq!(error, SpaceError::OffBoard { row: 0, diagonal: 8 });
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_rejects_bad_codes() {
    let text = minimal(json!([{"E5": 3}, {}]), json!([[["E5"], 2]]));
    assert!(matches!(
        parse_log(&text).unwrap_err(),
        LoadError::Invalid(InvalidLogError::InvalidOccupant { ply: 0, code: 3, .. })
    ));

    let text = minimal(json!([{}, {}]), json!([[["E5"], 7]]));
    assert!(matches!(
        parse_log(&text).unwrap_err(),
        LoadError::Invalid(InvalidLogError::InvalidDirection { index: 0, code: 7 })
    ));

    let text = minimal(json!([{}, {}]), json!([[["Z9"], 2]]));
    match parse_log(&text).unwrap_err() {
        LoadError::Invalid(InvalidLogError::InvalidMoveSpace { index, error }) => {
            assert_eq!(index, 0);
            assert_eq!(error, SpaceError::InvalidNotation("Z9".to_string()));
        }
        other => panic!("unexpected error {other:?}"),
    }

    let text = minimal(json!([{}, {}]), json!([null]));
    assert!(matches!(
        parse_log(&text).unwrap_err(),
        LoadError::Invalid(InvalidLogError::MalformedMove { index: 0 })
    ));

    let text = json!({
        "boardHistory": [{}],
        "moveHistory": [],
        "scoreHistory": [[6, 6]],
        "startPlayer": 3
    })
    .to_string();
    assert!(matches!(
        parse_log(&text).unwrap_err(),
        LoadError::Invalid(InvalidLogError::InvalidPlayer { field: "startPlayer", code: 3 })
    ));

    let text = json!({
        "boardHistory": [{}],
        "moveHistory": [],
        "scoreHistory": [[6, 6]],
        "startPlayer": 1,
        "winner": 5
    })
    .to_string();
    assert!(matches!(
        parse_log(&text).unwrap_err(),
        LoadError::Invalid(InvalidLogError::InvalidPlayer { field: "winner", code: 5 })
    ));
}

#[test]
fn test_rejects_misaligned_histories() {
    let text = minimal(json!([{}, {}]), json!([]));
    assert!(matches!(
        parse_log(&text).unwrap_err(),
        LoadError::Invalid(InvalidLogError::MoveHistoryLength { boards: 2, moves: 0 })
    ));

    let text = minimal(
        json!([{}, {}]),
        json!([[["E5"], 2], [["E6"], 2], [["E7"], 2]]),
    );
    assert!(matches!(
        parse_log(&text).unwrap_err(),
        LoadError::Invalid(InvalidLogError::MoveHistoryLength { boards: 2, moves: 3 })
    ));
}

/// Runner logs from games stopped by an exception carry whatever the player
/// returned as the last move.
fn exception_log(answer: serde_json::Value) -> String {
    let document = json!({
        "boardHistory": [{"A1": 1}, {"B2": 1}],
        "moveHistory": [[["A1"], 1], answer],
        "scoreHistory": [[6, 6], [6, 6]],
        "startPlayer": 1,
        "winner": 1,
        "exitReason": "The move of Player 2 caused an exception"
    });
    format!("const courseOfTheGame = {}\nupdate.all()\n", document)
}

#[test]
fn test_unreadable_last_move_is_kept_verbatim() {
    let log = parse_log(&exception_log(json!(null))).unwrap();
    assert_eq!(log.moves().len(), 1);
    assert_eq!(log.rejected_move(), Some(&RejectedMove::Raw("null".to_string())));

    let log = parse_log(&exception_log(json!([["A1"], 9]))).unwrap();
    assert_eq!(
        log.rejected_move(),
        Some(&RejectedMove::Raw("[[\"A1\"],9]".to_string()))
    );

    let log = parse_log(&exception_log(json!([["J1", "A2"], 3]))).unwrap();
    assert_eq!(
        log.rejected_move().map(|m| m.to_string()).as_deref(),
        Some("[[\"J1\",\"A2\"],3]")
    );

    let mut cursor = ReplayCursor::new(&log);
    cursor.fast_forward();
    let text = render_view(&cursor.current_view(), &RenderStyle::ascii());
    assert!(text.contains("! The move of Player 2 caused an exception\n"));
    assert!(text.contains("Rejected move: [[\"J1\",\"A2\"],3]\n"));
    assert!(text.ends_with("Player 1 won the game\n"));
}

#[test]
fn test_unreadable_last_move_survives_conversion() {
    let log = parse_log(&exception_log(json!(null))).unwrap();
    let json = serde_json::to_value(LogFile::from(&log)).unwrap();
    assert_eq!(json["moveHistory"][1], serde_json::Value::Null);
    assert_eq!(parse_log(&json.to_string()).unwrap(), log);
}

#[test]
fn test_convert_script_to_plain_json() {
    let log = load_log(&fixture("illegal_move.js")).unwrap();
    let json = serde_json::to_string(&LogFile::from(&log)).unwrap();
    assert!(json.starts_with('{'));
    let reparsed = parse_log(&json).unwrap();
    assert_eq!(reparsed, log);
}
