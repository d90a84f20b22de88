//! Roster configuration: the shape every lineup must fill.

use super::slot::{RosterSlot, SlotEligibility, SlotId};
use crate::cli::types::Position;
use crate::error::{LineupError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Salary cap of a DraftKings NFL Classic contest.
pub const NFL_CLASSIC_SALARY_CAP: i64 = 50_000;

/// Slot order of a DraftKings NFL Classic lineup, matching its upload template.
pub const NFL_CLASSIC_SLOTS: [&str; 9] = [
    "QB", "RB1", "RB2", "WR1", "WR2", "WR3", "TE", "FLEX", "DST",
];

/// Immutable description of a lineup's shape.
///
/// The slot sequence is the single source of truth for ordering: validation
/// reports errors in it, analysis lists slots in it and export writes columns
/// in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfiguration {
    slots: Vec<RosterSlot>,
    flex_eligibility: BTreeSet<Position>,
    salary_cap: i64,
}

impl RosterConfiguration {
    /// Build a configuration, rejecting illegal parameters.
    ///
    /// Fails if there are no slots, if the flex set is empty, if the cap is not
    /// positive or if two slots share an identifier.
    pub fn new(
        slots: Vec<RosterSlot>,
        flex_eligibility: impl IntoIterator<Item = Position>,
        salary_cap: i64,
    ) -> Result<Self> {
        let flex_eligibility: BTreeSet<Position> = flex_eligibility.into_iter().collect();

        if slots.is_empty() {
            return Err(invalid("roster must contain at least one slot"));
        }
        if flex_eligibility.is_empty() {
            return Err(invalid("flex eligibility set must not be empty"));
        }
        if salary_cap <= 0 {
            let reason = format!("salary cap must be positive, got {salary_cap}");
            return Err(invalid(reason));
        }

        let mut seen = HashSet::new();
        for slot in &slots {
            if !seen.insert(&slot.id) {
                return Err(invalid(format!("duplicate slot identifier {}", slot.id)));
            }
        }

        Ok(Self {
            slots,
            flex_eligibility,
            salary_cap,
        })
    }

    /// Build a configuration from slot identifier strings (`"RB1"`, `"FLEX"`, ...).
    pub fn from_slot_ids<S: AsRef<str>>(
        slot_ids: &[S],
        flex_eligibility: impl IntoIterator<Item = Position>,
        salary_cap: i64,
    ) -> Result<Self> {
        let slots = slot_ids
            .iter()
            .map(|id| RosterSlot::parse(id.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(slots, flex_eligibility, salary_cap)
    }

    /// DraftKings NFL Classic: QB, 2 RB, 3 WR, TE, FLEX (RB/WR/TE), DST under $50,000.
    pub fn nfl_classic() -> Self {
        let slots = NFL_CLASSIC_SLOTS
            .iter()
            .map(|id| RosterSlot {
                id: SlotId::new(id),
                eligibility: classic_eligibility(id),
            })
            .collect();

        Self {
            slots,
            flex_eligibility: default_flex_eligibility().into_iter().collect(),
            salary_cap: NFL_CLASSIC_SALARY_CAP,
        }
    }

    /// Slots in UI and export order.
    pub fn ordered_slots(&self) -> &[RosterSlot] {
        &self.slots
    }

    /// Mapping of every non-FLEX slot to the base position it requires.
    pub fn base_slot_positions(&self) -> BTreeMap<SlotId, Position> {
        self.slots
            .iter()
            .filter_map(|slot| slot.base_position().map(|pos| (slot.id.clone(), pos)))
            .collect()
    }

    pub fn slot(&self, id: &SlotId) -> Option<&RosterSlot> {
        self.slots.iter().find(|slot| &slot.id == id)
    }

    pub fn contains_slot(&self, id: &SlotId) -> bool {
        self.slot(id).is_some()
    }

    pub fn flex_eligibility(&self) -> &BTreeSet<Position> {
        &self.flex_eligibility
    }

    pub fn is_flex_eligible(&self, position: Position) -> bool {
        self.flex_eligibility.contains(&position)
    }

    pub fn salary_cap(&self) -> i64 {
        self.salary_cap
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Serializable form of this configuration.
    pub fn to_file(&self) -> RosterConfigFile {
        RosterConfigFile {
            slots: self.slots.iter().map(|s| s.id.to_string()).collect(),
            flex_eligibility: self.flex_eligibility.iter().copied().collect(),
            salary_cap: self.salary_cap,
        }
    }
}

impl Default for RosterConfiguration {
    fn default() -> Self {
        Self::nfl_classic()
    }
}

/// On-disk (JSON) form of a roster configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterConfigFile {
    pub slots: Vec<String>,
    #[serde(default = "default_flex_eligibility")]
    pub flex_eligibility: Vec<Position>,
    pub salary_cap: i64,
}

impl Default for RosterConfigFile {
    fn default() -> Self {
        RosterConfiguration::nfl_classic().to_file()
    }
}

impl TryFrom<RosterConfigFile> for RosterConfiguration {
    type Error = LineupError;

    fn try_from(file: RosterConfigFile) -> Result<Self> {
        RosterConfiguration::from_slot_ids(&file.slots, file.flex_eligibility, file.salary_cap)
    }
}

fn default_flex_eligibility() -> Vec<Position> {
    vec![Position::RB, Position::WR, Position::TE]
}

fn classic_eligibility(id: &str) -> SlotEligibility {
    match id.trim_end_matches(|c: char| c.is_ascii_digit()) {
        "QB" => SlotEligibility::Base(Position::QB),
        "RB" => SlotEligibility::Base(Position::RB),
        "WR" => SlotEligibility::Base(Position::WR),
        "TE" => SlotEligibility::Base(Position::TE),
        "DST" => SlotEligibility::Base(Position::DST),
        _ => SlotEligibility::Flex,
    }
}

fn invalid(reason: impl Into<String>) -> LineupError {
    LineupError::InvalidRosterConfig {
        reason: reason.into(),
    }
}
