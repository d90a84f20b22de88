//! Show and validate commands.

use super::common::{load_pool, CommandContext};
use crate::{
    cli::LineupSelection,
    engine::{analyze, validate, AnalysisResult, ValidationResult},
    error::Result,
    lineup::LineupDraft,
    pool::{PlayerPool, PlayerPoolIndex},
    LineupId,
};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

/// Validation outcome for one lineup, as printed by `validate --json`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupReport {
    pub lineup_id: LineupId,
    pub name: String,
    pub result: ValidationResult,
}

/// Handle the show command
pub fn handle_show(
    ctx: &CommandContext,
    lineup_id: LineupId,
    pool_path: &Path,
    as_json: bool,
) -> Result<()> {
    let pool = load_pool(pool_path)?;
    let draft = ctx.load_lineup(lineup_id)?;
    let analysis = analyze(&draft, &ctx.roster, &pool);
    let result = validate(&draft, &ctx.roster, &pool);

    if as_json {
        let output = serde_json::json!({
            "lineupId": draft.id,
            "name": draft.name(),
            "status": draft.status(),
            "analysis": analysis,
            "validation": result,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", format_analysis(&draft, &analysis, &pool));
        print!("{}", format_validation(&draft, &result));
    }
    Ok(())
}

/// Handle the validate command; returns whether every selected lineup is valid
pub fn handle_validate(
    ctx: &CommandContext,
    selection: &LineupSelection,
    pool_path: &Path,
    as_json: bool,
) -> Result<bool> {
    let pool = load_pool(pool_path)?;
    let drafts = ctx.load_selection(selection)?;
    let reports = validate_all(&drafts, ctx, &pool);
    let all_valid = reports.iter().all(|r| r.result.valid);

    info!(
        lineups = reports.len(),
        invalid = reports.iter().filter(|r| !r.result.valid).count(),
        "validation finished"
    );

    if as_json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else if reports.is_empty() {
        println!("No lineups selected");
    } else {
        for (draft, report) in drafts.iter().zip(&reports) {
            print!("{}", format_validation(draft, &report.result));
        }
    }
    Ok(all_valid)
}

/// Validate lineups in parallel; reports come back in input order.
pub fn validate_all(
    drafts: &[LineupDraft],
    ctx: &CommandContext,
    pool: &PlayerPool,
) -> Vec<LineupReport> {
    let roster = &ctx.roster;
    drafts
        .par_iter()
        .map(|draft| LineupReport {
            lineup_id: draft.id,
            name: draft.name().to_string(),
            result: validate(draft, roster, pool),
        })
        .collect()
}

/// Per-slot table plus running totals
pub fn format_analysis<P>(draft: &LineupDraft, analysis: &AnalysisResult, pool: &P) -> String
where
    P: PlayerPoolIndex + ?Sized,
{
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Lineup {} \"{}\" (week {}, {})",
        draft.id,
        draft.name(),
        draft.week_id,
        draft.status()
    );

    for row in &analysis.per_slot {
        let player = match row.player_id {
            None => "-".to_string(),
            Some(id) if !row.known => format!("{} (unknown)", id),
            Some(id) => pool
                .lookup(id)
                .and_then(|e| e.display_name())
                .map(|name| format!("{} {}", id, name))
                .unwrap_or_else(|| id.to_string()),
        };
        let position = row.base_position.map(|p| p.as_str()).unwrap_or("");
        let points = row
            .projected_points
            .map(|p| format!("{:.2}", p))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "  {:<5} {:<32} {:<4} {:>6} {:>7}",
            row.slot.as_str(),
            player,
            position,
            row.salary,
            points
        );
    }

    let total = analysis
        .projected_points_total
        .map(|p| format!("{:.2}", p))
        .unwrap_or_else(|| "n/a".to_string());
    let _ = writeln!(
        out,
        "  Salary: {} used, {} remaining | Projected: {} | {}/{} slots filled",
        analysis.salary_used,
        analysis.salary_remaining,
        total,
        analysis.filled_slots,
        analysis.filled_slots + analysis.open_slots
    );
    if let Some(avg) = analysis.average_remaining_per_open_slot {
        let _ = writeln!(out, "  Avg remaining per open slot: {:.0}", avg);
    }
    out
}

/// Summary line plus one line per validation error
pub fn format_validation(draft: &LineupDraft, result: &ValidationResult) -> String {
    let mut out = String::new();
    let verdict = if result.valid { "VALID" } else { "INVALID" };
    let _ = writeln!(
        out,
        "Lineup {} \"{}\": {} (salary {}, remaining {})",
        draft.id,
        draft.name(),
        verdict,
        result.salary_used,
        result.salary_remaining
    );
    for error in &result.errors {
        let _ = writeln!(out, "  - {}", error);
    }
    out
}
