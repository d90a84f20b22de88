//! Lineup engines
//!
//! Pure, synchronous functions over a [`LineupDraft`](crate::lineup::LineupDraft),
//! a [`RosterConfiguration`](crate::roster::RosterConfiguration) and a read-only
//! [`PlayerPoolIndex`](crate::pool::PlayerPoolIndex):
//! - `validation`: is the lineup legal and submittable
//! - `analysis`: running salary / projection totals, valid or not
//! - `export`: contest-platform upload CSV for valid lineups

pub mod analysis;
pub mod export;
pub mod validation;

pub use analysis::{analyze, AnalysisResult, SlotBreakdown};
pub use export::{
    export_csv, export_csv_batch, export_csv_batch_with, export_csv_with, parse_export,
    ExportOptions, ExportedRow, HeaderStyle,
};
pub use validation::{validate, ValidationError, ValidationResult};

use crate::pool::PlayerPoolEntry;

/// Salary and projection running totals over resolved players.
///
/// A single missing projection makes the points total absent for good, so
/// "no projection" is never confused with "projected for zero".
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Totals {
    pub salary_used: i64,
    pub projected_points: Option<f64>,
}

impl Totals {
    pub fn new() -> Self {
        Self {
            salary_used: 0,
            projected_points: Some(0.0),
        }
    }

    pub fn add(&mut self, entry: &PlayerPoolEntry) {
        self.salary_used += i64::from(entry.salary);
        self.projected_points = match (self.projected_points, entry.projected_points) {
            (Some(total), Some(points)) => Some(total + points),
            _ => None,
        };
    }

    pub fn salary_remaining(&self, salary_cap: i64) -> i64 {
        salary_cap - self.salary_used
    }
}

#[cfg(test)]
pub(crate) mod test_support;
