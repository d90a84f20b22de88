//! Daily Fantasy Sports Lineup Library
//!
//! Builds, validates and exports daily-fantasy lineups under positional and
//! salary-cap constraints.
//!
//! ## Features
//!
//! - **Roster Configuration**: Ordered slot list, FLEX eligibility and salary cap
//! - **Lineup Drafts**: Unconditional slot edits with a forward-only status lifecycle
//! - **Validation**: Every structural problem collected as data, in a fixed order
//! - **Analysis**: Running salary and projection totals while a lineup is edited
//! - **Export**: Contest-platform upload CSV, byte-exact column order
//! - **Storage**: Local SQLite repository for lineup drafts
//!
//! ## Quick Start
//!
//! ```rust
//! use dfs_lineup::{
//!     engine::{analyze, validate},
//!     pool::{PlayerPool, PlayerPoolEntry},
//!     DraftableId, LineupDraft, LineupId, PlayerId, Position, RosterConfiguration, Week,
//! };
//!
//! let config = RosterConfiguration::nfl_classic();
//! let pool = PlayerPool::from_entries(vec![PlayerPoolEntry::new(
//!     PlayerId::new(1),
//!     Position::QB,
//!     7200,
//!     DraftableId::new("38201734"),
//! )])?;
//!
//! let mut draft = LineupDraft::new(LineupId::new(1), Week::new(3), "Main slate");
//! draft.set_slot("QB", Some(PlayerId::new(1)))?;
//!
//! let result = validate(&draft, &config, &pool);
//! assert!(!result.valid); // eight slots still empty
//! assert_eq!(analyze(&draft, &config, &pool).salary_remaining, 42_800);
//! # Ok::<(), dfs_lineup::LineupError>(())
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export DFS_LINEUP_CONFIG=~/.config/dfs-lineup/settings.json
//! export DFS_LINEUP_DB=~/lineups.db
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod lineup;
pub mod pool;
pub mod roster;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{DraftableId, LineupId, PlayerId, Position, Week};
pub use error::{LineupError, Result};
pub use lineup::{EditPolicy, LineupDraft, LineupStatus};
pub use roster::{RosterConfiguration, RosterSlot, SlotId};

pub const CONFIG_ENV_VAR: &str = "DFS_LINEUP_CONFIG";
pub const DB_PATH_ENV_VAR: &str = "DFS_LINEUP_DB";
