//! Player-pool snapshot and read-only lookup
//!
//! The pool is owned by whoever fetched it; the engine only ever reads from it
//! through [`PlayerPoolIndex`].

use crate::cli::types::{DraftableId, PlayerId, Position, Week};
use crate::error::{LineupError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;
use tracing::debug;


/// One player available on a slate.
///
/// Fields needed by validation are required and typed. Anything else the
/// platform sends (name, team, game info, ...) lives in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPoolEntry {
    pub player_id: PlayerId,
    pub base_position: Position,
    pub salary: u32,
    #[serde(default)]
    pub projected_points: Option<f64>,
    #[serde(default)]
    pub is_excluded: bool,
    #[serde(default)]
    pub is_disabled: bool,
    pub external_draftable_id: DraftableId,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl PlayerPoolEntry {
    pub fn new(
        player_id: PlayerId,
        base_position: Position,
        salary: u32,
        external_draftable_id: DraftableId,
    ) -> Self {
        Self {
            player_id,
            base_position,
            salary,
            projected_points: None,
            is_excluded: false,
            is_disabled: false,
            external_draftable_id,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_projection(mut self, points: f64) -> Self {
        self.projected_points = Some(points);
        self
    }

    /// Why this player cannot be rostered, if they cannot.
    ///
    /// Exclusion is reported ahead of disabling when both flags are set.
    pub fn unavailable_reason(&self) -> Option<UnavailableReason> {
        if self.is_excluded {
            Some(UnavailableReason::Excluded)
        } else if self.is_disabled {
            Some(UnavailableReason::Disabled)
        } else {
            None
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        self.extra.get("name").and_then(|v| v.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnavailableReason {
    /// Removed from the pool by the user.
    Excluded,
    /// Locked or pulled by the platform.
    Disabled,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UnavailableReason::Excluded => "excluded",
            UnavailableReason::Disabled => "disabled",
        };
        f.write_str(s)
    }
}

/// Read-only lookup from player id to pool entry.
pub trait PlayerPoolIndex {
    fn lookup(&self, player_id: PlayerId) -> Option<&PlayerPoolEntry>;
}

impl PlayerPoolIndex for HashMap<PlayerId, PlayerPoolEntry> {
    fn lookup(&self, player_id: PlayerId) -> Option<&PlayerPoolEntry> {
        self.get(&player_id)
    }
}

impl PlayerPoolIndex for BTreeMap<PlayerId, PlayerPoolEntry> {
    fn lookup(&self, player_id: PlayerId) -> Option<&PlayerPoolEntry> {
        self.get(&player_id)
    }
}

/// Player pool for one week / draft group, indexed by player id.
#[derive(Debug, Clone, Default)]
pub struct PlayerPool {
    entries: HashMap<PlayerId, PlayerPoolEntry>,
}

impl PlayerPool {
    /// Index a list of entries, rejecting any player id that appears twice or
    /// any entry without a draftable id.
    pub fn from_entries(entries: impl IntoIterator<Item = PlayerPoolEntry>) -> Result<Self> {
        let mut map = HashMap::new();
        for entry in entries {
            let player_id = entry.player_id;
            if entry.external_draftable_id.is_blank() {
                return Err(LineupError::MissingDraftableId { player_id });
            }
            if map.insert(player_id, entry).is_some() {
                return Err(LineupError::DuplicatePoolEntry { player_id });
            }
        }
        Ok(Self { entries: map })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerPoolEntry> {
        self.entries.values()
    }
}

impl PlayerPoolIndex for PlayerPool {
    fn lookup(&self, player_id: PlayerId) -> Option<&PlayerPoolEntry> {
        self.entries.get(&player_id)
    }
}

/// Pool snapshot as delivered by the backend for one week / draft group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolSnapshot {
    pub week: Week,
    #[serde(default)]
    pub draft_group_id: Option<u64>,
    pub players: Vec<PlayerPoolEntry>,
}

impl PoolSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("Loading pool snapshot from {:?}", path.as_ref());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn into_pool(self) -> Result<PlayerPool> {
        PlayerPool::from_entries(self.players)
    }
}
