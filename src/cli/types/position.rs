//! Fantasy football position types and utilities.

use crate::error::LineupError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Base positions a player can hold in the pool.
///
/// FLEX is deliberately absent: it is a roster slot, not a position a player
/// is listed at. See [`crate::roster::SlotEligibility`].
///
/// # Examples
///
/// ```rust
/// use dfs_lineup::Position;
///
/// let dst: Position = "D/ST".parse().unwrap();
/// assert_eq!(dst, Position::DST);
/// assert_eq!(dst.to_string(), "DST");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    DST,
    K,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::DST,
        Position::K,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::DST => "DST",
            Position::K => "K",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "DST" | "D/ST" | "DEF" | "D" => Ok(Position::DST),
            "K" => Ok(Position::K),
            _ => Err(LineupError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Position {
    type Error = LineupError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Position> for String {
    fn from(p: Position) -> String {
        p.as_str().to_string()
    }
}
