//! Mutable lineup draft: slot assignments plus lineup metadata.

use super::status::{can_transition, EditPolicy, LineupStatus};
use crate::cli::types::{LineupId, PlayerId, Week};
use crate::error::{LineupError, Result};
use crate::roster::SlotId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// A lineup being built or edited.
///
/// Slot assignments are unconditional: any player can be placed in any slot,
/// so incomplete or illegal intermediate states are representable. Whether
/// the result is submittable is decided by [`crate::engine::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupDraft {
    pub id: LineupId,
    pub week_id: Week,
    name: String,
    #[serde(default)]
    tags: BTreeSet<String>,
    #[serde(default)]
    slots: BTreeMap<SlotId, PlayerId>,
    #[serde(default)]
    status: LineupStatus,
    #[serde(skip)]
    edit_policy: EditPolicy,
}

impl LineupDraft {
    /// Start a new, empty lineup in the `created` state.
    pub fn new(id: LineupId, week_id: Week, name: impl Into<String>) -> Self {
        Self {
            id,
            week_id,
            name: name.into(),
            tags: BTreeSet::new(),
            slots: BTreeMap::new(),
            status: LineupStatus::Created,
            edit_policy: EditPolicy::default(),
        }
    }

    /// Rebuild a draft from persisted parts.
    pub(crate) fn restore(
        id: LineupId,
        week_id: Week,
        name: String,
        tags: BTreeSet<String>,
        slots: BTreeMap<SlotId, PlayerId>,
        status: LineupStatus,
    ) -> Self {
        Self {
            id,
            week_id,
            name,
            tags,
            slots,
            status,
            edit_policy: EditPolicy::default(),
        }
    }

    pub fn with_edit_policy(mut self, policy: EditPolicy) -> Self {
        self.edit_policy = policy;
        self
    }

    pub fn set_edit_policy(&mut self, policy: EditPolicy) {
        self.edit_policy = policy;
    }

    pub fn edit_policy(&self) -> EditPolicy {
        self.edit_policy
    }

    /// Assign a player to a slot, or clear it with `None`.
    ///
    /// No eligibility or cap checks happen here. The only thing that can
    /// refuse the edit is an [`EditPolicy::Reject`] lineup that has already
    /// left `created`. Under [`EditPolicy::ResetToCreated`] an edit that
    /// changes anything sends the lineup back to `created`. An edit that
    /// leaves the slot as it was is accepted under every policy.
    pub fn set_slot(&mut self, slot: impl Into<SlotId>, player: Option<PlayerId>) -> Result<()> {
        let slot = slot.into();
        if self.slots.get(&slot).copied() == player {
            return Ok(());
        }
        self.ensure_editable()?;

        match player {
            Some(player_id) => self.slots.insert(slot.clone(), player_id),
            None => self.slots.remove(&slot),
        };

        debug!(lineup = %self.id, %slot, ?player, "slot updated");
        self.note_edit();
        Ok(())
    }

    /// Remove every assignment.
    pub fn clear(&mut self) -> Result<()> {
        if self.slots.is_empty() {
            return Ok(());
        }
        self.ensure_editable()?;
        self.slots.clear();
        self.note_edit();
        Ok(())
    }

    pub fn slot(&self, slot: &SlotId) -> Option<PlayerId> {
        self.slots.get(slot).copied()
    }

    /// All non-empty assignments, keyed by slot.
    pub fn assignments(&self) -> &BTreeMap<SlotId, PlayerId> {
        &self.slots
    }

    /// The non-empty slot assignments, as `(slot, player)` pairs.
    pub fn occupied_players(&self) -> BTreeSet<(SlotId, PlayerId)> {
        self.slots
            .iter()
            .map(|(slot, player)| (slot.clone(), *player))
            .collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Add a tag; returns false if it was blank or already present.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        !tag.is_empty() && self.tags.insert(tag.to_string())
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.tags.remove(tag.trim())
    }

    pub fn status(&self) -> LineupStatus {
        self.status
    }

    /// Move one step forward in the lifecycle.
    pub fn transition_to(&mut self, next: LineupStatus) -> Result<()> {
        if !can_transition(self.status, next) {
            return Err(LineupError::InvalidStatusTransition {
                from: self.status,
                to: next,
            });
        }
        debug!(lineup = %self.id, from = %self.status, to = %next, "status transition");
        self.status = next;
        Ok(())
    }

    fn ensure_editable(&self) -> Result<()> {
        if self.edit_policy == EditPolicy::Reject && self.status != LineupStatus::Created {
            return Err(LineupError::LineupLocked {
                lineup_id: self.id,
                status: self.status,
            });
        }
        Ok(())
    }

    fn note_edit(&mut self) {
        if self.edit_policy == EditPolicy::ResetToCreated && self.status != LineupStatus::Created {
            debug!(lineup = %self.id, from = %self.status, "edit resets status to created");
            self.status = LineupStatus::Created;
        }
    }
}
