//! Lineup CRUD operations

use super::{models::*, schema::LineupDatabase};
use crate::lineup::{LineupDraft, LineupStatus};
use crate::roster::SlotId;
use crate::{LineupId, PlayerId, Week};
use anyhow::Result;
use rusqlite::{params, OptionalExtension};
use std::collections::{BTreeMap, BTreeSet};
use std::time::{SystemTime, UNIX_EPOCH};

impl LineupDatabase {
    /// Insert or replace a lineup with its tags and slot assignments.
    ///
    /// `created_at` of an existing lineup is preserved.
    pub fn save_lineup(&mut self, draft: &LineupDraft) -> Result<()> {
        let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        let lineup_id = draft.id.as_u64();
        let tx = self.conn.transaction()?;

        tx.execute(
            "INSERT INTO lineups (lineup_id, week, name, status, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)
             ON CONFLICT(lineup_id) DO UPDATE SET
                week = excluded.week,
                name = excluded.name,
                status = excluded.status,
                updated_at = excluded.updated_at",
            params![
                lineup_id,
                draft.week_id.as_u16(),
                draft.name(),
                draft.status().as_str(),
                now,
                now
            ],
        )?;

        tx.execute("DELETE FROM lineup_slots WHERE lineup_id = ?", params![lineup_id])?;
        tx.execute("DELETE FROM lineup_tags WHERE lineup_id = ?", params![lineup_id])?;

        for (slot, player_id) in draft.assignments() {
            tx.execute(
                "INSERT INTO lineup_slots (lineup_id, slot, player_id) VALUES (?, ?, ?)",
                params![lineup_id, slot.as_str(), player_id.as_u64()],
            )?;
        }
        for tag in draft.tags() {
            tx.execute(
                "INSERT INTO lineup_tags (lineup_id, tag) VALUES (?, ?)",
                params![lineup_id, tag],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    /// Load a lineup by id
    pub fn load_lineup(&self, lineup_id: LineupId) -> Result<Option<LineupDraft>> {
        let row = self
            .conn
            .query_row(
                "SELECT week, name, status FROM lineups WHERE lineup_id = ?",
                params![lineup_id.as_u64()],
                |row| {
                    Ok((
                        row.get::<_, u16>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                    ))
                },
            )
            .optional()?;

        let Some((week, name, status)) = row else {
            return Ok(None);
        };
        let status: LineupStatus = status.parse()?;

        Ok(Some(LineupDraft::restore(
            lineup_id,
            Week::new(week),
            name,
            self.lineup_tags(lineup_id)?,
            self.lineup_slots(lineup_id)?,
            status,
        )))
    }

    /// Load every lineup for a week, ordered by id
    pub fn load_lineups_for_week(&self, week: Week) -> Result<Vec<LineupDraft>> {
        let mut stmt = self
            .conn
            .prepare("SELECT lineup_id FROM lineups WHERE week = ? ORDER BY lineup_id")?;
        let ids = stmt
            .query_map(params![week.as_u16()], |row| row.get::<_, u64>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut drafts = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(draft) = self.load_lineup(LineupId::new(id))? {
                drafts.push(draft);
            }
        }
        Ok(drafts)
    }

    /// List lineups, optionally for a single week, ordered by id
    pub fn list_lineups(&self, week: Option<Week>) -> Result<Vec<LineupSummary>> {
        let mut query = String::from(
            "SELECT l.lineup_id, l.week, l.name, l.status, l.created_at, l.updated_at,
                    (SELECT COUNT(*) FROM lineup_slots s WHERE s.lineup_id = l.lineup_id)
             FROM lineups l",
        );
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(w) = week {
            query.push_str(" WHERE l.week = ?");
            params.push(Box::new(w.as_u16()));
        }
        query.push_str(" ORDER BY l.lineup_id");

        let mut stmt = self.conn.prepare(&query)?;
        let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        let rows = stmt.query_map(&param_refs[..], |row| {
            Ok((
                row.get::<_, u64>(0)?,
                row.get::<_, u16>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, u64>(4)?,
                row.get::<_, u64>(5)?,
                row.get::<_, u32>(6)?,
            ))
        })?;

        let mut summaries = Vec::new();
        for row in rows {
            let (id, week, name, status, created_at, updated_at, filled_slots) = row?;
            let lineup_id = LineupId::new(id);
            summaries.push(LineupSummary {
                lineup_id,
                week: Week::new(week),
                name,
                status: status.parse()?,
                filled_slots,
                tags: self.lineup_tags(lineup_id)?.into_iter().collect(),
                created_at,
                updated_at,
            });
        }
        Ok(summaries)
    }

    /// Delete a lineup; returns false if it did not exist
    pub fn delete_lineup(&mut self, lineup_id: LineupId) -> Result<bool> {
        let rows_affected = self.conn.execute(
            "DELETE FROM lineups WHERE lineup_id = ?",
            params![lineup_id.as_u64()],
        )?;
        Ok(rows_affected > 0)
    }

    /// Next unused lineup id
    pub fn next_lineup_id(&self) -> Result<LineupId> {
        let next: u64 = self.conn.query_row(
            "SELECT COALESCE(MAX(lineup_id), 0) + 1 FROM lineups",
            [],
            |row| row.get(0),
        )?;
        Ok(LineupId::new(next))
    }

    fn lineup_tags(&self, lineup_id: LineupId) -> Result<BTreeSet<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT tag FROM lineup_tags WHERE lineup_id = ?")?;
        let tags = stmt
            .query_map(params![lineup_id.as_u64()], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<BTreeSet<_>>>()?;
        Ok(tags)
    }

    fn lineup_slots(&self, lineup_id: LineupId) -> Result<BTreeMap<SlotId, PlayerId>> {
        let mut stmt = self
            .conn
            .prepare("SELECT slot, player_id FROM lineup_slots WHERE lineup_id = ?")?;
        let slots = stmt
            .query_map(params![lineup_id.as_u64()], |row| {
                Ok((
                    SlotId::new(row.get::<_, String>(0)?),
                    PlayerId::new(row.get::<_, u64>(1)?),
                ))
            })?
            .collect::<rusqlite::Result<BTreeMap<_, _>>>()?;
        Ok(slots)
    }
}
