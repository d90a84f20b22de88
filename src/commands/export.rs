//! Export and check-export commands.

use super::common::{load_pool, CommandContext};
use crate::{
    cli::LineupSelection,
    engine::{export_csv_batch_with, parse_export, ExportOptions, HeaderStyle},
    error::Result,
    lineup::LineupStatus,
};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::{info, warn};

/// Handle the export command; returns the number of exported lineups
///
/// Nothing is written and no status changes if any selected lineup is invalid.
pub fn handle_export(
    ctx: &mut CommandContext,
    selection: &LineupSelection,
    pool_path: &Path,
    out: Option<&Path>,
    header: HeaderStyle,
) -> Result<usize> {
    let pool = load_pool(pool_path)?;
    let drafts = ctx.load_selection(selection)?;
    if drafts.is_empty() {
        warn!("exporting an empty selection; output holds the header only");
    }

    let bytes = export_csv_batch_with(&drafts, &ctx.roster, &pool, &ExportOptions { header })?;

    match out {
        Some(path) => {
            fs::write(path, &bytes)?;
            println!("Wrote {} lineup(s) to {}", drafts.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
        }
    }

    for mut draft in drafts.iter().cloned() {
        if draft.status() == LineupStatus::Created {
            draft.transition_to(LineupStatus::Exported)?;
            ctx.save_lineup(&draft)?;
        }
    }
    info!(lineups = drafts.len(), "export complete");
    Ok(drafts.len())
}

/// Handle the check-export command; returns the number of data rows
pub fn handle_check_export(ctx: &CommandContext, file: &Path) -> Result<usize> {
    let bytes = fs::read(file)?;
    let rows = parse_export(&bytes, &ctx.roster)?;

    println!("{}: {} lineup row(s)", file.display(), rows.len());
    for (i, row) in rows.iter().enumerate() {
        let cells: Vec<String> = ctx
            .roster
            .ordered_slots()
            .iter()
            .filter_map(|slot| row.get(&slot.id).map(|id| format!("{}={}", slot.id, id)))
            .collect();
        println!("  {:>3}: {}", i + 1, cells.join(" "));
    }
    Ok(rows.len())
}
