//! Contest-platform upload CSV.
//!
//! One column per roster slot in [`RosterConfiguration::ordered_slots`] order,
//! one row per lineup, each cell the player's external draftable id. The
//! platform's importer rejects reordered or missing columns, so the column
//! order is never derived from anything but the roster configuration.

use super::validation::{validate, ValidationError};
use crate::cli::types::DraftableId;
use crate::error::{LineupError, Result};
use crate::lineup::LineupDraft;
use crate::pool::PlayerPoolIndex;
use crate::roster::{RosterConfiguration, SlotId};
use std::collections::BTreeMap;
use tracing::{debug, info};

#[cfg(test)]
mod tests;

/// How header cells are labelled. Column order is the same either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum HeaderStyle {
    /// Slot identifiers: `QB,RB1,RB2,...,FLEX,DST`
    #[default]
    #[value(name = "slot")]
    SlotId,
    /// The platform template's labels: `QB,RB,RB,...,FLEX,DST`
    #[value(name = "position")]
    BasePosition,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    pub header: HeaderStyle,
}

/// Slot -> draftable id mapping of one exported row.
pub type ExportedRow = BTreeMap<SlotId, DraftableId>;

/// Export a single lineup with default options.
pub fn export_csv<P>(draft: &LineupDraft, config: &RosterConfiguration, pool: &P) -> Result<Vec<u8>>
where
    P: PlayerPoolIndex + ?Sized,
{
    export_csv_with(draft, config, pool, &ExportOptions::default())
}

pub fn export_csv_with<P>(
    draft: &LineupDraft,
    config: &RosterConfiguration,
    pool: &P,
    options: &ExportOptions,
) -> Result<Vec<u8>>
where
    P: PlayerPoolIndex + ?Sized,
{
    export_csv_batch_with(std::slice::from_ref(draft), config, pool, options)
}

/// Export several lineups under one header, in input order.
///
/// Fails on the first lineup (in input order) that does not validate; nothing
/// is emitted in that case. An empty batch yields just the header.
pub fn export_csv_batch<P>(
    drafts: &[LineupDraft],
    config: &RosterConfiguration,
    pool: &P,
) -> Result<Vec<u8>>
where
    P: PlayerPoolIndex + ?Sized,
{
    export_csv_batch_with(drafts, config, pool, &ExportOptions::default())
}

pub fn export_csv_batch_with<P>(
    drafts: &[LineupDraft],
    config: &RosterConfiguration,
    pool: &P,
    options: &ExportOptions,
) -> Result<Vec<u8>>
where
    P: PlayerPoolIndex + ?Sized,
{
    let rows = drafts
        .iter()
        .map(|draft| export_row(draft, config, pool))
        .collect::<Result<Vec<_>>>()?;

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(header_labels(config, options.header))?;
    for row in &rows {
        writer.write_record(row.iter().map(|id| id.as_str()))?;
    }

    let bytes = writer.into_inner().map_err(|e| LineupError::Io(e.into_error()))?;

    info!(lineups = rows.len(), bytes = bytes.len(), "exported lineups");
    Ok(bytes)
}

/// Read an export back into slot -> draftable id rows.
///
/// The header must list the configuration's slots in order, labelled in
/// either [`HeaderStyle`].
pub fn parse_export(bytes: &[u8], config: &RosterConfiguration) -> Result<Vec<ExportedRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let matches_style = |style| header_labels(config, style) == header;
    if !matches_style(HeaderStyle::SlotId) && !matches_style(HeaderStyle::BasePosition) {
        return Err(LineupError::MalformedExport {
            message: format!("unexpected header {:?}", header.join(",")),
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row = config
            .ordered_slots()
            .iter()
            .zip(record.iter())
            .map(|(slot, cell)| (slot.id.clone(), DraftableId::new(cell)))
            .collect();
        rows.push(row);
    }

    debug!(rows = rows.len(), "parsed export");
    Ok(rows)
}

fn header_labels(config: &RosterConfiguration, style: HeaderStyle) -> Vec<String> {
    config
        .ordered_slots()
        .iter()
        .map(|slot| match style {
            HeaderStyle::SlotId => slot.id.to_string(),
            HeaderStyle::BasePosition => slot.template_label().to_string(),
        })
        .collect()
}

fn export_row<P>(
    draft: &LineupDraft,
    config: &RosterConfiguration,
    pool: &P,
) -> Result<Vec<DraftableId>>
where
    P: PlayerPoolIndex + ?Sized,
{
    let result = validate(draft, config, pool);
    if !result.valid {
        return Err(LineupError::ExportOfInvalidLineup {
            lineup_id: draft.id,
            errors: result.errors,
        });
    }

    config
        .ordered_slots()
        .iter()
        .map(|slot| {
            let player_id = draft.slot(&slot.id).ok_or_else(|| {
                invalid(
                    draft,
                    ValidationError::IncompleteSlot {
                        slot: slot.id.clone(),
                    },
                )
            })?;
            let entry = pool.lookup(player_id).ok_or_else(|| {
                invalid(
                    draft,
                    ValidationError::UnknownPlayer {
                        slot: slot.id.clone(),
                        player_id,
                    },
                )
            })?;
            if entry.external_draftable_id.is_blank() {
                return Err(LineupError::MissingDraftableId { player_id });
            }
            Ok(entry.external_draftable_id.clone())
        })
        .collect()
}

fn invalid(draft: &LineupDraft, error: ValidationError) -> LineupError {
    LineupError::ExportOfInvalidLineup {
        lineup_id: draft.id,
        errors: vec![error],
    }
}
