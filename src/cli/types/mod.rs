//! Type-safe wrappers and enums for lineup data.

pub mod ids;
pub mod position;

pub use ids::{DraftableId, LineupId, PlayerId, Week};
pub use position::Position;
