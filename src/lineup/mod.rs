//! Lineup drafts and their lifecycle
//!
//! - `draft`: the mutable slot -> player assignment plus metadata
//! - `status`: the forward-only status machine and the edit policy

pub mod draft;
pub mod status;


pub use draft::LineupDraft;
pub use status::{can_transition, EditPolicy, LineupStatus};
