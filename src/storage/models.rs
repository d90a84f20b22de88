//! Data models for the storage layer

use crate::cli::types::{LineupId, Week};
use crate::lineup::LineupStatus;
use serde::{Deserialize, Serialize};

/// One row of a lineup listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupSummary {
    pub lineup_id: LineupId,
    pub week: Week,
    pub name: String,
    pub status: LineupStatus,
    pub filled_slots: u32,
    pub tags: Vec<String>,
    pub created_at: u64,
    pub updated_at: u64,
}
