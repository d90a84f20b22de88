//! Roster configuration layer
//!
//! - `slot`: slot identifiers and eligibility (base position or FLEX)
//! - `config`: the ordered slot list, flex set and salary cap of a contest

pub mod config;
pub mod slot;


pub use config::{RosterConfigFile, RosterConfiguration, NFL_CLASSIC_SALARY_CAP, NFL_CLASSIC_SLOTS};
pub use slot::{RosterSlot, SlotEligibility, SlotId};
