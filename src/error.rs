//! Error types for the DFS lineup engine and CLI
//!
//! Structural lineup problems (an empty slot, a player over the cap, ...) are
//! not errors in this sense: they are reported as data through
//! [`crate::engine::ValidationError`]. The variants here are usage errors and
//! I/O failures.

use crate::cli::types::{LineupId, PlayerId};
use crate::engine::ValidationError;
use crate::lineup::LineupStatus;
use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, LineupError>;

#[derive(Error, Debug)]
pub enum LineupError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to parse identifier: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Invalid roster configuration: {reason}")]
    InvalidRosterConfig { reason: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid roster slot: {slot}")]
    InvalidSlot { slot: String },

    #[error("Lineup {lineup_id} is not valid and cannot be exported ({} error(s))", .errors.len())]
    ExportOfInvalidLineup {
        lineup_id: LineupId,
        errors: Vec<ValidationError>,
    },

    #[error("Invalid lineup status: {status}")]
    InvalidStatus { status: String },

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidStatusTransition { from: LineupStatus, to: LineupStatus },

    #[error("Lineup {lineup_id} is {status} and can no longer be edited")]
    LineupLocked {
        lineup_id: LineupId,
        status: LineupStatus,
    },

    #[error("Player {player_id} appears more than once in the pool snapshot")]
    DuplicatePoolEntry { player_id: PlayerId },

    #[error("Player {player_id} has no external draftable id")]
    MissingDraftableId { player_id: PlayerId },

    #[error("Lineup not found: {lineup_id}")]
    LineupNotFound { lineup_id: LineupId },

    #[error("Malformed export file: {message}")]
    MalformedExport { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl From<anyhow::Error> for LineupError {
    fn from(err: anyhow::Error) -> Self {
        LineupError::Storage {
            message: err.to_string(),
        }
    }
}
