//! Database schema and connection management

use crate::error::LineupError;
use crate::DB_PATH_ENV_VAR;
use anyhow::Result;
use dirs::data_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Database connection manager for lineup drafts
pub struct LineupDatabase {
    pub(crate) conn: Connection,
}

impl LineupDatabase {
    /// Open the default database file and ensure tables exist
    pub fn new() -> Result<Self> {
        Self::open(Self::default_path()?)
    }

    /// Open (or create) a database at `path` and ensure tables exist
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        debug!("Opening lineup database at {:?}", path);
        Self::from_connection(Connection::open(path)?)
    }

    /// Open a throwaway in-memory database
    pub fn new_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON")?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Default database path: `DFS_LINEUP_DB`, else the platform data directory
    pub fn default_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(DB_PATH_ENV_VAR) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path.trim()));
            }
        }
        let data_dir = data_dir().ok_or_else(|| LineupError::Storage {
            message: "Could not determine data directory".to_string(),
        })?;
        Ok(data_dir.join("dfs-lineup").join("lineups.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS lineups (
                lineup_id INTEGER PRIMARY KEY,
                week INTEGER NOT NULL,
                name TEXT NOT NULL,
                status TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS lineup_slots (
                lineup_id INTEGER NOT NULL,
                slot TEXT NOT NULL,
                player_id INTEGER NOT NULL,
                PRIMARY KEY (lineup_id, slot),
                FOREIGN KEY (lineup_id) REFERENCES lineups(lineup_id) ON DELETE CASCADE
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS lineup_tags (
                lineup_id INTEGER NOT NULL,
                tag TEXT NOT NULL,
                PRIMARY KEY (lineup_id, tag),
                FOREIGN KEY (lineup_id) REFERENCES lineups(lineup_id) ON DELETE CASCADE
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_lineups_week ON lineups(week)",
            [],
        )?;

        Ok(())
    }

    /// Remove every lineup
    pub fn clear_all(&mut self) -> Result<()> {
        self.conn.execute("DELETE FROM lineup_slots", [])?;
        self.conn.execute("DELETE FROM lineup_tags", [])?;
        self.conn.execute("DELETE FROM lineups", [])?;
        Ok(())
    }
}
