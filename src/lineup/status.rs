//! Lineup lifecycle status and the edit policy applied once a lineup has left
//! the `created` state.

use crate::error::LineupError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle of a lineup: `created -> exported -> uploaded -> submitted`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum LineupStatus {
    /// Being built or edited; never exported in its current form
    #[default]
    Created,
    /// Written to an upload CSV
    Exported,
    /// CSV uploaded to the contest platform
    Uploaded,
    /// Entered into a contest
    Submitted,
}

impl LineupStatus {
    /// The only status this one may move to, if any.
    pub fn successor(&self) -> Option<LineupStatus> {
        match self {
            LineupStatus::Created => Some(LineupStatus::Exported),
            LineupStatus::Exported => Some(LineupStatus::Uploaded),
            LineupStatus::Uploaded => Some(LineupStatus::Submitted),
            LineupStatus::Submitted => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineupStatus::Created => "created",
            LineupStatus::Exported => "exported",
            LineupStatus::Uploaded => "uploaded",
            LineupStatus::Submitted => "submitted",
        }
    }
}

/// Whether `current -> next` is a single step forward in the lifecycle.
///
/// Skipping a step, staying put and moving backwards are all rejected.
pub fn can_transition(current: LineupStatus, next: LineupStatus) -> bool {
    current.successor() == Some(next)
}

impl fmt::Display for LineupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineupStatus {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "created" => Ok(LineupStatus::Created),
            "exported" => Ok(LineupStatus::Exported),
            "uploaded" => Ok(LineupStatus::Uploaded),
            "submitted" => Ok(LineupStatus::Submitted),
            _ => Err(LineupError::InvalidStatus {
                status: s.to_string(),
            }),
        }
    }
}

/// What happens when a slot of a lineup that is past `created` is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum EditPolicy {
    /// Apply the edit and keep the current status
    Allow,
    /// Apply the edit and send the lineup back to `created`
    #[default]
    ResetToCreated,
    /// Refuse the edit
    Reject,
}
