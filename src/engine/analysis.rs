//! Best-effort lineup totals for live feedback while editing.

use super::Totals;
use crate::cli::types::{PlayerId, Position};
use crate::lineup::LineupDraft;
use crate::pool::PlayerPoolIndex;
use crate::roster::{RosterConfiguration, SlotId};
use serde::{Deserialize, Serialize};


/// One row of the per-slot breakdown, in roster order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotBreakdown {
    pub slot: SlotId,
    pub player_id: Option<PlayerId>,
    /// False for an assigned player missing from the pool.
    pub known: bool,
    pub base_position: Option<Position>,
    /// Zero when the slot is empty or the player is unknown.
    pub salary: u32,
    pub projected_points: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub salary_used: i64,
    pub salary_remaining: i64,
    pub projected_points_total: Option<f64>,
    pub filled_slots: usize,
    pub open_slots: usize,
    /// Salary left per still-empty slot.
    pub average_remaining_per_open_slot: Option<f64>,
    /// Projected points per $1,000 of salary used.
    pub points_per_thousand: Option<f64>,
    pub per_slot: Vec<SlotBreakdown>,
}

/// Aggregate whatever is assigned, valid or not.
///
/// Totals are computed exactly as in [`super::validate`]; unlike validation,
/// nothing here is an error.
pub fn analyze<P>(draft: &LineupDraft, config: &RosterConfiguration, pool: &P) -> AnalysisResult
where
    P: PlayerPoolIndex + ?Sized,
{
    let mut totals = Totals::new();

    let per_slot: Vec<SlotBreakdown> = config
        .ordered_slots()
        .iter()
        .map(|slot| {
            let player_id = draft.slot(&slot.id);
            let entry = player_id.and_then(|id| pool.lookup(id));
            if let Some(entry) = entry {
                totals.add(entry);
            }

            SlotBreakdown {
                slot: slot.id.clone(),
                player_id,
                known: player_id.is_none() || entry.is_some(),
                base_position: entry.map(|e| e.base_position),
                salary: entry.map(|e| e.salary).unwrap_or(0),
                projected_points: entry.and_then(|e| e.projected_points),
            }
        })
        .collect();

    let filled_slots = per_slot.iter().filter(|s| s.player_id.is_some()).count();
    let open_slots = per_slot.len() - filled_slots;
    let salary_remaining = totals.salary_remaining(config.salary_cap());

    let average_remaining_per_open_slot =
        (open_slots > 0).then(|| salary_remaining as f64 / open_slots as f64);
    let points_per_thousand = match totals.projected_points {
        Some(points) if totals.salary_used > 0 => {
            Some(points / (totals.salary_used as f64 / 1000.0))
        }
        _ => None,
    };

    AnalysisResult {
        salary_used: totals.salary_used,
        salary_remaining,
        projected_points_total: totals.projected_points,
        filled_slots,
        open_slots,
        average_remaining_per_open_slot,
        points_per_thousand,
        per_slot,
    }
}
