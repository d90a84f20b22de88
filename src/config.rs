//! Runtime settings for the CLI: roster shape, edit policy and database location.
//!
//! Settings are read from a JSON file given by `--config` or the
//! `DFS_LINEUP_CONFIG` env var. With neither, the DraftKings NFL Classic roster
//! and the default edit policy are used.

use crate::error::Result;
use crate::lineup::EditPolicy;
use crate::roster::{RosterConfigFile, RosterConfiguration};
use crate::storage::LineupDatabase;
use crate::CONFIG_ENV_VAR;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub roster: RosterConfigFile,
    pub edit_policy: EditPolicy,
    pub database_path: Option<PathBuf>,
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("Loading settings from {:?}", path.as_ref());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from the explicit path, else the env var, else defaults.
    pub fn resolve(config_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::load_from_file(path.trim()),
            _ => Ok(Self::default()),
        }
    }

    /// Build and check the roster configuration these settings describe.
    pub fn roster_configuration(&self) -> Result<RosterConfiguration> {
        RosterConfiguration::try_from(self.roster.clone())
    }

    /// Database file: CLI override, then settings, then `DFS_LINEUP_DB`, then
    /// the platform data directory.
    pub fn resolve_database_path(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = cli_override {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = &self.database_path {
            return Ok(path.clone());
        }
        Ok(LineupDatabase::default_path()?)
    }
}
