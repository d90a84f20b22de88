//! Common utilities and helper functions shared across commands.

use crate::{
    cli::LineupSelection,
    config::Settings,
    error::{LineupError, Result},
    lineup::LineupDraft,
    pool::{PlayerPool, PoolSnapshot},
    roster::RosterConfiguration,
    storage::LineupDatabase,
    LineupId,
};
use std::path::Path;
use tracing::{debug, warn};

/// Context containing common resources needed by most commands
pub struct CommandContext {
    pub settings: Settings,
    pub roster: RosterConfiguration,
    pub db: LineupDatabase,
}

impl CommandContext {
    /// Resolve settings, check the roster configuration and open the database
    pub fn new(config_path: Option<&Path>, db_path: Option<&Path>) -> Result<Self> {
        let settings = Settings::resolve(config_path)?;
        let db_path = settings.resolve_database_path(db_path)?;
        let db = LineupDatabase::open(&db_path)?;
        Self::with_database(settings, db)
    }

    /// Build a context around an already-open database
    pub fn with_database(settings: Settings, db: LineupDatabase) -> Result<Self> {
        let roster = settings.roster_configuration()?;
        debug!(
            slots = roster.slot_count(),
            salary_cap = roster.salary_cap(),
            "roster configuration loaded"
        );
        Ok(Self {
            settings,
            roster,
            db,
        })
    }

    /// Load a saved lineup with the configured edit policy applied
    pub fn load_lineup(&self, lineup_id: LineupId) -> Result<LineupDraft> {
        let draft = self
            .db
            .load_lineup(lineup_id)?
            .ok_or(LineupError::LineupNotFound { lineup_id })?;
        Ok(draft.with_edit_policy(self.settings.edit_policy))
    }

    /// Explicit lineup ids in the given order, else every lineup of the week
    pub fn load_selection(&self, selection: &LineupSelection) -> Result<Vec<LineupDraft>> {
        if !selection.lineups.is_empty() {
            return selection
                .lineups
                .iter()
                .map(|id| self.load_lineup(*id))
                .collect();
        }

        match selection.week {
            Some(week) => {
                let drafts = self.db.load_lineups_for_week(week)?;
                if drafts.is_empty() {
                    warn!("No lineups saved for week {}", week);
                }
                Ok(drafts
                    .into_iter()
                    .map(|d| d.with_edit_policy(self.settings.edit_policy))
                    .collect())
            }
            None => Ok(Vec::new()),
        }
    }

    pub fn save_lineup(&mut self, draft: &LineupDraft) -> Result<()> {
        self.db.save_lineup(draft)?;
        Ok(())
    }
}

/// Load a pool snapshot file and index it
pub fn load_pool(path: &Path) -> Result<PlayerPool> {
    let snapshot = PoolSnapshot::load_from_file(path)?;
    debug!(
        week = %snapshot.week,
        players = snapshot.players.len(),
        "pool snapshot loaded"
    );
    snapshot.into_pool()
}
