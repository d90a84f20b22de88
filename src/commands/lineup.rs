//! Lineup editing commands: create, set slots, tag, rename, status, list, delete.

use super::common::CommandContext;
use crate::{
    error::{LineupError, Result},
    lineup::{LineupDraft, LineupStatus},
    roster::SlotId,
    LineupId, PlayerId, Week,
};
use tracing::{info, warn};

/// Handle the new command; returns the id of the created lineup
pub fn handle_new(
    ctx: &mut CommandContext,
    week: Week,
    name: &str,
    tags: &[String],
) -> Result<LineupId> {
    let lineup_id = ctx.db.next_lineup_id()?;
    let mut draft =
        LineupDraft::new(lineup_id, week, name).with_edit_policy(ctx.settings.edit_policy);
    for tag in tags {
        draft.add_tag(tag);
    }

    ctx.save_lineup(&draft)?;
    info!(lineup = %lineup_id, %week, "created lineup");
    println!("Created lineup {} ({}) for week {}", lineup_id, name, week);
    Ok(lineup_id)
}

/// Handle the set command
///
/// The slot must exist in the roster configuration; the player is not
/// checked here, so incomplete or illegal lineups can be saved while editing.
pub fn handle_set(
    ctx: &mut CommandContext,
    lineup_id: LineupId,
    slot: &str,
    player: Option<PlayerId>,
) -> Result<()> {
    let slot = SlotId::new(slot);
    if !ctx.roster.contains_slot(&slot) {
        return Err(LineupError::InvalidSlot {
            slot: slot.to_string(),
        });
    }

    let mut draft = ctx.load_lineup(lineup_id)?;
    let before = draft.status();
    draft.set_slot(slot.clone(), player)?;
    ctx.save_lineup(&draft)?;

    if draft.status() != before {
        warn!(
            lineup = %lineup_id,
            from = %before,
            to = %draft.status(),
            "editing reset lineup status"
        );
    }

    match player {
        Some(player_id) => println!("Lineup {}: {} <- {}", lineup_id, slot, player_id),
        None => println!("Lineup {}: {} cleared", lineup_id, slot),
    }
    Ok(())
}

/// Handle the tag command
pub fn handle_tag(
    ctx: &mut CommandContext,
    lineup_id: LineupId,
    add: &[String],
    remove: &[String],
) -> Result<()> {
    let mut draft = ctx.load_lineup(lineup_id)?;
    for tag in add {
        draft.add_tag(tag);
    }
    for tag in remove {
        draft.remove_tag(tag);
    }
    ctx.save_lineup(&draft)?;

    let tags: Vec<&str> = draft.tags().iter().map(String::as_str).collect();
    println!("Lineup {} tags: [{}]", lineup_id, tags.join(", "));
    Ok(())
}

/// Handle the rename command
pub fn handle_rename(ctx: &mut CommandContext, lineup_id: LineupId, name: &str) -> Result<()> {
    let mut draft = ctx.load_lineup(lineup_id)?;
    draft.rename(name);
    ctx.save_lineup(&draft)?;
    println!("Lineup {} renamed to {}", lineup_id, name);
    Ok(())
}

/// Handle the status command
pub fn handle_status(
    ctx: &mut CommandContext,
    lineup_id: LineupId,
    to: LineupStatus,
) -> Result<()> {
    let mut draft = ctx.load_lineup(lineup_id)?;
    let from = draft.status();
    draft.transition_to(to)?;
    ctx.save_lineup(&draft)?;
    println!("Lineup {}: {} -> {}", lineup_id, from, to);
    Ok(())
}

/// Handle the list command
pub fn handle_list(ctx: &CommandContext, week: Option<Week>, as_json: bool) -> Result<()> {
    let summaries = ctx.db.list_lineups(week)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("No lineups found");
        return Ok(());
    }

    for s in summaries {
        let tags = if s.tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", s.tags.join(", "))
        };
        println!(
            "{:>4}  week {:>2}  {:<10}  {}/{} slots  {}{}",
            s.lineup_id.as_u64(),
            s.week.as_u16(),
            s.status.as_str(),
            s.filled_slots,
            ctx.roster.slot_count(),
            s.name,
            tags
        );
    }
    Ok(())
}

/// Handle the delete command
pub fn handle_delete(ctx: &mut CommandContext, lineup_id: LineupId) -> Result<()> {
    if !ctx.db.delete_lineup(lineup_id)? {
        return Err(LineupError::LineupNotFound { lineup_id });
    }
    println!("Deleted lineup {}", lineup_id);
    Ok(())
}
