//! CLI argument definitions and parsing.

pub mod types;

use crate::engine::HeaderStyle;
use crate::lineup::LineupStatus;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{LineupId, PlayerId, Week};

/// Lineup selection shared by commands that act on several lineups
#[derive(Debug, Args)]
pub struct LineupSelection {
    /// Lineup ID (repeatable): `-l 1 -l 2`.
    #[clap(long = "lineup", short = 'l')]
    pub lineups: Vec<LineupId>,

    /// Every lineup saved for this week (used when no `--lineup` is given).
    #[clap(long, short)]
    pub week: Option<Week>,
}

#[derive(Debug, Parser)]
#[clap(name = "dfs-lineup", about = "Daily fantasy lineup builder and validator")]
pub struct DfsLineup {
    /// Settings file (or set `DFS_LINEUP_CONFIG` env var).
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Lineup database file (or set `DFS_LINEUP_DB` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); `RUST_LOG` takes precedence.
    #[clap(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start a new, empty lineup
    New {
        /// Week the lineup is for.
        #[clap(long, short)]
        week: Week,

        /// Display name.
        #[clap(long, short)]
        name: String,

        /// Tag (repeatable): `-t cash -t stack`.
        #[clap(long = "tag", short = 't')]
        tags: Vec<String>,
    },

    /// Assign a player to a slot, or clear the slot
    Set {
        #[clap(long, short)]
        lineup: LineupId,

        /// Slot identifier, e.g. `RB1` or `FLEX`.
        #[clap(long, short)]
        slot: String,

        /// Player to assign.
        #[clap(long, short, conflicts_with = "clear", required_unless_present = "clear")]
        player: Option<PlayerId>,

        /// Empty the slot instead.
        #[clap(long)]
        clear: bool,
    },

    /// Add or remove lineup tags
    Tag {
        #[clap(long, short)]
        lineup: LineupId,

        /// Tag to add (repeatable).
        #[clap(long = "add")]
        add: Vec<String>,

        /// Tag to remove (repeatable).
        #[clap(long = "remove")]
        remove: Vec<String>,
    },

    /// Rename a lineup
    Rename {
        #[clap(long, short)]
        lineup: LineupId,

        #[clap(long, short)]
        name: String,
    },

    /// Show a lineup with running salary and projection totals
    Show {
        #[clap(long, short)]
        lineup: LineupId,

        /// Player-pool snapshot (JSON).
        #[clap(long)]
        pool: PathBuf,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Validate one or more lineups against the roster rules
    Validate {
        #[clap(flatten)]
        selection: LineupSelection,

        /// Player-pool snapshot (JSON).
        #[clap(long)]
        pool: PathBuf,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Write valid lineups to a contest upload CSV and mark them exported
    Export {
        #[clap(flatten)]
        selection: LineupSelection,

        /// Player-pool snapshot (JSON).
        #[clap(long)]
        pool: PathBuf,

        /// Output CSV path; prints to stdout when omitted.
        #[clap(long, short)]
        out: Option<PathBuf>,

        /// Header labels: slot ids (`RB1`) or template positions (`RB`).
        #[clap(long, value_enum, default_value_t = HeaderStyle::SlotId)]
        header: HeaderStyle,
    },

    /// Move a lineup one step forward in its lifecycle
    Status {
        #[clap(long, short)]
        lineup: LineupId,

        /// Target status.
        #[clap(long, value_enum)]
        to: LineupStatus,
    },

    /// List saved lineups
    List {
        /// Only lineups for this week.
        #[clap(long, short)]
        week: Option<Week>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Delete a saved lineup
    Delete {
        #[clap(long, short)]
        lineup: LineupId,
    },

    /// Read an export file back and report its rows
    CheckExport {
        /// CSV file to check.
        #[clap(long, short)]
        file: PathBuf,
    },
}
