#![cfg(feature = "std")]

//! Reading game logs from their JSON transport format.
//!
//! The game runner writes its results as a script,
//! `const courseOfTheGame = {...}` followed by a call into the viewer. Both
//! that script and the bare JSON document are accepted.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::board::{Board, Occupant};
use crate::common::{InvalidLogError, Player, Score};
use crate::record::{GameLog, Move, MoveTarget, RejectedMove};
use crate::space::{Direction, Space};

/// Destination of a move on the wire: a direction code or a space id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireTarget {
    Direction(u8),
    Space(String),
}

/// `[origins, destination]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireMove(pub Vec<String>, pub WireTarget);

/// One `moveHistory` entry. The runner appends a player's answer before
/// checking it, so the last entry can be anything JSON allows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireEntry {
    Move(WireMove),
    Other(serde_json::Value),
}

/// The JSON document exactly as written by the game runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogFile {
    pub board_history: Vec<BTreeMap<String, u8>>,
    pub move_history: Vec<WireEntry>,
    pub score_history: Vec<(u32, u32)>,
    pub start_player: u8,
    #[serde(default)]
    pub winner: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_reason: Option<String>,
}

/// Errors raised while loading a log.
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: std::io::Error },
    Json(serde_json::Error),
    /// Input holds neither a JSON object nor a `courseOfTheGame` script.
    MissingDocument,
    Invalid(InvalidLogError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            LoadError::Json(e) => write!(f, "malformed game log: {}", e),
            LoadError::MissingDocument => write!(f, "no game log document found"),
            LoadError::Invalid(e) => write!(f, "invalid game log: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Json(e) => Some(e),
            LoadError::MissingDocument => None,
            LoadError::Invalid(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Json(err)
    }
}

impl From<InvalidLogError> for LoadError {
    fn from(err: InvalidLogError) -> Self {
        LoadError::Invalid(err)
    }
}

/// Locate the JSON object inside `text`, unwrapping the runner's script form.
fn extract_document(text: &str) -> Option<&str> {
    let trimmed = text.trim_start_matches('\u{feff}').trim();
    if trimmed.starts_with('{') {
        return Some(trimmed);
    }
    let (head, rest) = trimmed.split_once('=')?;
    if !head.trim_end().ends_with("courseOfTheGame") {
        return None;
    }
    let start = rest.find('{')?;
    let end = rest.rfind('}')?;
    (start < end).then(|| &rest[start..=end])
}

/// Parse a log from JSON or from the runner's script wrapper.
pub fn parse_log(text: &str) -> Result<GameLog, LoadError> {
    let document = extract_document(text).ok_or(LoadError::MissingDocument)?;
    let file: LogFile = serde_json::from_str(document)?;
    log::debug!(
        "parsed log: {} boards, {} moves",
        file.board_history.len(),
        file.move_history.len()
    );
    Ok(GameLog::try_from(file)?)
}

/// Read and parse a log file.
pub fn load_log(path: &Path) -> Result<GameLog, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes from {}", text.len(), path.display());
    parse_log(&text)
}

fn player_from_code(field: &'static str, code: u8) -> Result<Player, InvalidLogError> {
    Player::from_code(code).ok_or(InvalidLogError::InvalidPlayer { field, code })
}

fn board_from_wire(ply: usize, cells: &BTreeMap<String, u8>) -> Result<Board, InvalidLogError> {
    let mut board = Board::new();
    for (name, &code) in cells {
        let space: Space = name
            .parse()
            .map_err(|error| InvalidLogError::InvalidBoardSpace { ply, error })?;
        let occupant = Occupant::from_code(code).ok_or_else(|| InvalidLogError::InvalidOccupant {
            ply,
            space: name.clone(),
            code,
        })?;
        board.set(space, occupant);
    }
    Ok(board)
}

fn move_from_wire(index: usize, mv: &WireMove) -> Result<Move, InvalidLogError> {
    let parse_space = |name: &str| {
        name.parse::<Space>()
            .map_err(|error| InvalidLogError::InvalidMoveSpace { index, error })
    };
    let marbles = mv.0.iter().map(|m| parse_space(m)).collect::<Result<Vec<_>, _>>()?;
    let target = match &mv.1 {
        WireTarget::Direction(code) => Direction::from_code(*code)
            .map(MoveTarget::Direction)
            .ok_or(InvalidLogError::InvalidDirection { index, code: *code })?,
        WireTarget::Space(name) => MoveTarget::Space(parse_space(name)?),
    };
    Ok(Move::new(marbles, target))
}

fn entry_from_wire(index: usize, entry: &WireEntry) -> Result<Move, InvalidLogError> {
    match entry {
        WireEntry::Move(mv) => move_from_wire(index, mv),
        WireEntry::Other(_) => Err(InvalidLogError::MalformedMove { index }),
    }
}

/// The entry after the final board never moved anything, so it is only
/// parsed as far as it can be and otherwise kept verbatim.
fn rejected_from_wire(index: usize, entry: &WireEntry) -> RejectedMove {
    match entry_from_wire(index, entry) {
        Ok(mv) => RejectedMove::Parsed(mv),
        Err(err) => {
            log::debug!("keeping rejected move verbatim: {}", err);
            let text = match entry {
                WireEntry::Move(mv) => serde_json::to_string(mv).unwrap_or_default(),
                WireEntry::Other(value) => value.to_string(),
            };
            RejectedMove::Raw(text)
        }
    }
}

fn move_to_wire(mv: &Move) -> WireMove {
    let target = match mv.target {
        MoveTarget::Direction(d) => WireTarget::Direction(d.code()),
        MoveTarget::Space(s) => WireTarget::Space(s.to_string()),
    };
    WireMove(mv.marbles.iter().map(|s| s.to_string()).collect(), target)
}

impl TryFrom<LogFile> for GameLog {
    type Error = InvalidLogError;

    fn try_from(file: LogFile) -> Result<Self, Self::Error> {
        let boards = file
            .board_history
            .iter()
            .enumerate()
            .map(|(ply, cells)| board_from_wire(ply, cells))
            .collect::<Result<Vec<_>, _>>()?;
        let rejected_index = file.board_history.len().checked_sub(1);
        let mut moves = Vec::with_capacity(file.move_history.len());
        let mut rejected_move = None;
        for (index, entry) in file.move_history.iter().enumerate() {
            if Some(index) == rejected_index {
                rejected_move = Some(rejected_from_wire(index, entry));
            } else {
                moves.push(entry_from_wire(index, entry)?);
            }
        }
        let scores = file
            .score_history
            .iter()
            .map(|&(left, right)| Score::new(left, right))
            .collect();
        let start_player = player_from_code("startPlayer", file.start_player)?;
        let winner = file
            .winner
            .map(|code| player_from_code("winner", code))
            .transpose()?;
        GameLog::with_rejected_move(
            boards,
            moves,
            rejected_move,
            scores,
            start_player,
            winner,
            file.exit_reason,
        )
    }
}

impl From<&GameLog> for LogFile {
    fn from(log: &GameLog) -> Self {
        let board_history = log
            .boards()
            .iter()
            .map(|board| {
                board
                    .iter()
                    .map(|(space, occupant)| (space.to_string(), occupant.code()))
                    .collect()
            })
            .collect();
        let mut move_history: Vec<WireEntry> = log
            .moves()
            .iter()
            .map(|mv| WireEntry::Move(move_to_wire(mv)))
            .collect();
        match log.rejected_move() {
            Some(RejectedMove::Parsed(mv)) => move_history.push(WireEntry::Move(move_to_wire(mv))),
            Some(RejectedMove::Raw(text)) => move_history.push(WireEntry::Other(
                serde_json::from_str(text)
                    .unwrap_or_else(|_| serde_json::Value::String(text.clone())),
            )),
            None => {}
        }
        LogFile {
            board_history,
            move_history,
            score_history: log.scores().iter().map(|s| (s.left, s.right)).collect(),
            start_player: log.start_player().code(),
            winner: log.winner().map(Player::code),
            exit_reason: log.exit_reason().map(str::to_string),
        }
    }
}
