//! Roster slot identifiers and their eligibility rules.

use crate::cli::types::Position;
use crate::error::{LineupError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a named slot in a lineup, e.g. `QB`, `RB2` or `FLEX`.
///
/// Always stored trimmed and uppercased, so `rb1` and `RB1` name the same slot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SlotId(String);

impl SlotId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(id.as_ref().trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id with any trailing ordinal stripped (`WR3` -> `WR`).
    pub fn stem(&self) -> &str {
        self.0.trim_end_matches(|c: char| c.is_ascii_digit())
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SlotId {
    fn from(s: &str) -> Self {
        SlotId::new(s)
    }
}

impl From<String> for SlotId {
    fn from(s: String) -> Self {
        SlotId::new(s)
    }
}

impl From<SlotId> for String {
    fn from(id: SlotId) -> Self {
        id.0
    }
}

/// Which players a slot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotEligibility {
    /// Only players listed at exactly this base position.
    Base(Position),
    /// Any player whose base position is in the configuration's flex set.
    Flex,
}

/// A single slot of a roster configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RosterSlot {
    pub id: SlotId,
    pub eligibility: SlotEligibility,
}

impl RosterSlot {
    pub const FLEX_STEM: &'static str = "FLEX";

    /// Parse a slot identifier, deriving its base position from the id.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dfs_lineup::{Position, roster::{RosterSlot, SlotEligibility}};
    ///
    /// let slot = RosterSlot::parse("RB1").unwrap();
    /// assert_eq!(slot.eligibility, SlotEligibility::Base(Position::RB));
    /// assert!(RosterSlot::parse("FLEX").unwrap().is_flex());
    /// ```
    pub fn parse(id: &str) -> Result<Self> {
        let id = SlotId::new(id);
        let stem = id.stem();

        if stem.is_empty() {
            return Err(LineupError::InvalidSlot {
                slot: id.to_string(),
            });
        }

        let eligibility = if stem == Self::FLEX_STEM {
            SlotEligibility::Flex
        } else {
            let position = stem.parse::<Position>().map_err(|_| LineupError::InvalidSlot {
                slot: id.to_string(),
            })?;
            SlotEligibility::Base(position)
        };

        Ok(Self { id, eligibility })
    }

    pub fn is_flex(&self) -> bool {
        matches!(self.eligibility, SlotEligibility::Flex)
    }

    /// Base position for non-FLEX slots; `None` for FLEX.
    pub fn base_position(&self) -> Option<Position> {
        match self.eligibility {
            SlotEligibility::Base(position) => Some(position),
            SlotEligibility::Flex => None,
        }
    }

    /// Column label used by the platform's own upload template (`RB`, not `RB1`).
    pub fn template_label(&self) -> &str {
        match self.eligibility {
            SlotEligibility::Base(position) => position.as_str(),
            SlotEligibility::Flex => Self::FLEX_STEM,
        }
    }
}

impl FromStr for RosterSlot {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self> {
        RosterSlot::parse(s)
    }
}

impl fmt::Display for RosterSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
