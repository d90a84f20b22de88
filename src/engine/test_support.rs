//! Shared fixtures for engine unit tests

use crate::cli::types::{DraftableId, LineupId, PlayerId, Position, Week};
use crate::lineup::LineupDraft;
use crate::pool::{PlayerPool, PlayerPoolEntry};

pub fn player(id: u64, position: Position, salary: u32, points: Option<f64>) -> PlayerPoolEntry {
    let mut entry = PlayerPoolEntry::new(
        PlayerId::new(id),
        position,
        salary,
        DraftableId::new(format!("{}", 38_200_000 + id)),
    );
    entry.projected_points = points;
    entry
}

/// Week-3 style pool covering every NFL Classic position.
pub fn classic_pool() -> PlayerPool {
    let mut excluded = player(12, Position::TE, 3000, Some(5.0));
    excluded.is_excluded = true;
    let mut disabled = player(13, Position::RB, 4000, Some(8.0));
    disabled.is_disabled = true;

    PlayerPool::from_entries(vec![
        player(1, Position::QB, 7200, Some(22.5)),
        player(2, Position::RB, 7800, Some(18.0)),
        player(3, Position::RB, 6000, Some(14.2)),
        player(4, Position::WR, 7400, Some(19.1)),
        player(5, Position::WR, 5200, Some(12.4)),
        player(6, Position::WR, 4800, Some(11.0)),
        player(7, Position::TE, 4200, Some(9.6)),
        player(8, Position::WR, 5000, Some(12.0)),
        player(9, Position::DST, 3000, Some(7.0)),
        player(10, Position::RB, 7200, Some(16.5)),
        player(11, Position::QB, 5000, None),
        excluded,
        disabled,
        player(14, Position::QB, 6000, Some(18.3)),
    ])
    .unwrap()
}

pub fn lineup_with(id: u64, assignments: &[(&str, u64)]) -> LineupDraft {
    let mut draft = LineupDraft::new(LineupId::new(id), Week::new(3), format!("Lineup {id}"));
    for (slot, player_id) in assignments {
        draft.set_slot(*slot, Some(PlayerId::new(*player_id))).unwrap();
    }
    draft
}

/// Fully assigned, legal lineup at exactly $50,000.
pub fn valid_lineup(id: u64) -> LineupDraft {
    lineup_with(
        id,
        &[
            ("QB", 1),
            ("RB1", 10),
            ("RB2", 3),
            ("WR1", 4),
            ("WR2", 5),
            ("WR3", 6),
            ("TE", 7),
            ("FLEX", 8),
            ("DST", 9),
        ],
    )
}

/// Fully assigned lineup whose salaries sum to $50,600.
pub fn over_cap_lineup(id: u64) -> LineupDraft {
    lineup_with(
        id,
        &[
            ("QB", 1),
            ("RB1", 2),
            ("RB2", 3),
            ("WR1", 4),
            ("WR2", 5),
            ("WR3", 6),
            ("TE", 7),
            ("FLEX", 8),
            ("DST", 9),
        ],
    )
}
