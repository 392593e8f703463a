//! Position notation encoding and decoding.
//!
//! A compact single-line notation for a full Oware position, used to store
//! and transmit positions.
//!
//! Format: `<status>/<player>/<pit0>,...,<pit11>/<score0>,<score1>/<moves>`
//!
//! `status` is the numeric [`GameStatus`] code, `player` is 0 or 1, and
//! `moves` is the comma-separated, ascending legal-move list (empty when
//! there are none, which leaves a trailing `/`).
//! The initial position is `0/0/4,4,4,4,4,4,4,4,4,4,4,4/0,0/0,1,2,3,4,5`.

use std::fmt;
use std::str::FromStr;

use crate::board::state::ValidationError;
use crate::board::{GameStatus, Position};

/// Errors that can occur during notation parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("expected 5 sections separated by '/', got {0}")]
    WrongSectionCount(usize),

    #[error("invalid {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("negative {field}: {value}")]
    Negative { field: &'static str, value: i64 },

    #[error("unknown status code {0}")]
    UnknownStatus(u64),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Parses one non-negative integer field.
///
/// Only canonical decimal is accepted: no sign prefix `+`, no leading zeros,
/// and no `-0`, so every accepted string encodes back to itself.
fn parse_count(field: &'static str, s: &str) -> Result<u64, NotationError> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if s.starts_with('+') || s == "-0" || (digits.len() > 1 && digits.starts_with('0')) {
        return Err(NotationError::InvalidNumber {
            field,
            value: s.to_string(),
        });
    }
    let value: i64 = s.parse().map_err(|_| NotationError::InvalidNumber {
        field,
        value: s.to_string(),
    })?;
    if value < 0 {
        return Err(NotationError::Negative { field, value });
    }
    Ok(value as u64)
}

/// Parses a non-negative integer field into a narrower type.
fn parse_field<T: TryFrom<u64>>(field: &'static str, s: &str) -> Result<T, NotationError> {
    let value = parse_count(field, s)?;
    T::try_from(value).map_err(|_| NotationError::InvalidNumber {
        field,
        value: s.to_string(),
    })
}

/// Parses a comma-separated list. An empty section yields an empty list.
fn parse_list<T: TryFrom<u64>>(field: &'static str, s: &str) -> Result<Vec<T>, NotationError> {
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split(',').map(|entry| parse_field(field, entry)).collect()
}

/// Parses a notation string into a validated [`Position`].
///
/// The legal-move list is taken as written; it is not recomputed from the board.
pub fn parse_notation(s: &str) -> Result<Position, NotationError> {
    let sections: Vec<&str> = s.split('/').collect();
    if sections.len() != 5 {
        return Err(NotationError::WrongSectionCount(sections.len()));
    }

    let code = parse_count("status", sections[0])?;
    let status = u8::try_from(code)
        .ok()
        .and_then(GameStatus::from_code)
        .ok_or(NotationError::UnknownStatus(code))?;
    let player: usize = parse_field("player", sections[1])?;
    let pits: Vec<u32> = parse_list("pit", sections[2])?;
    let scores: Vec<u32> = parse_list("score", sections[3])?;
    let moves: Vec<usize> = parse_list("move", sections[4])?;

    Ok(Position::new(status, player, &scores, &pits, &moves)?)
}

/// Encodes a position into its canonical notation string.
pub fn encode_notation(position: &Position) -> String {
    let pits: Vec<String> = position.pits().iter().map(|s| s.to_string()).collect();
    let moves: Vec<String> = position.legal_moves().iter().map(|m| m.to_string()).collect();
    let [score0, score1] = position.scores();

    format!(
        "{}/{}/{}/{},{}/{}",
        position.status().code(),
        position.to_move().index(),
        pits.join(","),
        score0,
        score1,
        moves.join(",")
    )
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_notation(self))
    }
}

impl FromStr for Position {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_notation(s)
    }
}

impl TryFrom<String> for Position {
    type Error = NotationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        parse_notation(&s)
    }
}

impl From<Position> for String {
    fn from(position: Position) -> String {
        encode_notation(&position)
    }
}
