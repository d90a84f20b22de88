//! Lineup validation.
//!
//! [`validate`] never fails: every structural problem is collected into the
//! returned [`ValidationResult`], in a fixed order:
//! 1. per-slot problems, in roster order (incomplete, unknown, unavailable,
//!    position / flex)
//! 2. duplicate players, ordered by the first slot each one occupies
//! 3. the salary-cap error, last

use super::Totals;
use crate::cli::types::{PlayerId, Position};
use crate::lineup::LineupDraft;
use crate::pool::{PlayerPoolIndex, UnavailableReason};
use crate::roster::{RosterConfiguration, SlotEligibility, SlotId};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;


/// A structural problem with a lineup that the user can fix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ValidationError {
    IncompleteSlot {
        slot: SlotId,
    },
    PositionMismatch {
        slot: SlotId,
        player_id: PlayerId,
        expected: Position,
        actual: Position,
    },
    FlexIneligible {
        slot: SlotId,
        player_id: PlayerId,
        actual: Position,
    },
    DuplicatePlayer {
        player_id: PlayerId,
        slots: Vec<SlotId>,
    },
    UnknownPlayer {
        slot: SlotId,
        player_id: PlayerId,
    },
    PlayerUnavailable {
        slot: SlotId,
        player_id: PlayerId,
        reason: UnavailableReason,
    },
    SalaryCapExceeded {
        amount_over: i64,
    },
}

impl ValidationError {
    /// The slot this error should be rendered beside, if it belongs to one.
    ///
    /// Duplicates report their first slot; the cap error is lineup-wide.
    pub fn slot(&self) -> Option<&SlotId> {
        match self {
            ValidationError::IncompleteSlot { slot }
            | ValidationError::PositionMismatch { slot, .. }
            | ValidationError::FlexIneligible { slot, .. }
            | ValidationError::UnknownPlayer { slot, .. }
            | ValidationError::PlayerUnavailable { slot, .. } => Some(slot),
            ValidationError::DuplicatePlayer { slots, .. } => slots.first(),
            ValidationError::SalaryCapExceeded { .. } => None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::IncompleteSlot { slot } => write!(f, "{slot}: no player assigned"),
            ValidationError::PositionMismatch {
                slot,
                player_id,
                expected,
                actual,
            } => write!(
                f,
                "{slot}: player {player_id} is a {actual}, slot requires {expected}"
            ),
            ValidationError::FlexIneligible {
                slot,
                player_id,
                actual,
            } => write!(f, "{slot}: player {player_id} ({actual}) is not flex-eligible"),
            ValidationError::DuplicatePlayer { player_id, slots } => {
                let slots: Vec<&str> = slots.iter().map(|s| s.as_str()).collect();
                write!(f, "player {player_id} used in {}", slots.join(", "))
            }
            ValidationError::UnknownPlayer { slot, player_id } => {
                write!(f, "{slot}: player {player_id} is not in the player pool")
            }
            ValidationError::PlayerUnavailable {
                slot,
                player_id,
                reason,
            } => write!(f, "{slot}: player {player_id} is {reason}"),
            ValidationError::SalaryCapExceeded { amount_over } => {
                write!(f, "salary cap exceeded by ${amount_over}")
            }
        }
    }
}

/// Outcome of validating one lineup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub salary_used: i64,
    /// Negative when over the cap.
    pub salary_remaining: i64,
    /// Absent when any assigned, known player has no projection.
    pub projected_points_total: Option<f64>,
}

impl ValidationResult {
    pub fn errors_for_slot<'a>(
        &'a self,
        slot: &'a SlotId,
    ) -> impl Iterator<Item = &'a ValidationError> + 'a {
        self.errors.iter().filter(move |e| match e {
            ValidationError::DuplicatePlayer { slots, .. } => slots.contains(slot),
            other => other.slot() == Some(slot),
        })
    }
}

/// Check a draft against a roster configuration and a pool snapshot.
///
/// Pure: the same inputs always produce the same result.
pub fn validate<P>(
    draft: &LineupDraft,
    config: &RosterConfiguration,
    pool: &P,
) -> ValidationResult
where
    P: PlayerPoolIndex + ?Sized,
{
    let mut errors = Vec::new();
    let mut totals = Totals::new();
    // Player -> slots it occupies, in order of first appearance
    let mut occupants: Vec<(PlayerId, Vec<SlotId>)> = Vec::new();

    for slot in config.ordered_slots() {
        let Some(player_id) = draft.slot(&slot.id) else {
            errors.push(ValidationError::IncompleteSlot {
                slot: slot.id.clone(),
            });
            continue;
        };

        match occupants.iter_mut().find(|(id, _)| *id == player_id) {
            Some((_, slots)) => slots.push(slot.id.clone()),
            None => occupants.push((player_id, vec![slot.id.clone()])),
        }

        let Some(entry) = pool.lookup(player_id) else {
            errors.push(ValidationError::UnknownPlayer {
                slot: slot.id.clone(),
                player_id,
            });
            continue;
        };

        totals.add(entry);

        if let Some(reason) = entry.unavailable_reason() {
            errors.push(ValidationError::PlayerUnavailable {
                slot: slot.id.clone(),
                player_id,
                reason,
            });
        }

        let actual = entry.base_position;
        match slot.eligibility {
            SlotEligibility::Flex => {
                if !config.is_flex_eligible(actual) {
                    errors.push(ValidationError::FlexIneligible {
                        slot: slot.id.clone(),
                        player_id,
                        actual,
                    });
                }
            }
            SlotEligibility::Base(expected) => {
                if expected != actual {
                    errors.push(ValidationError::PositionMismatch {
                        slot: slot.id.clone(),
                        player_id,
                        expected,
                        actual,
                    });
                }
            }
        }
    }

    errors.extend(
        occupants
            .into_iter()
            .filter(|(_, slots)| slots.len() > 1)
            .map(|(player_id, slots)| ValidationError::DuplicatePlayer { player_id, slots }),
    );

    let salary_cap = config.salary_cap();
    if totals.salary_used > salary_cap {
        errors.push(ValidationError::SalaryCapExceeded {
            amount_over: totals.salary_used - salary_cap,
        });
    }

    debug!(
        lineup = %draft.id,
        errors = errors.len(),
        salary_used = totals.salary_used,
        "validated lineup"
    );

    ValidationResult {
        valid: errors.is_empty(),
        errors,
        salary_used: totals.salary_used,
        salary_remaining: totals.salary_remaining(salary_cap),
        projected_points_total: totals.projected_points,
    }
}
