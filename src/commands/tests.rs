//! Tests for command handlers against an in-memory database

use super::export::{handle_check_export, handle_export};
use super::lineup::*;
use super::validate::*;
use super::*;
use crate::{
    cli::LineupSelection,
    config::Settings,
    engine::{analyze, test_support::classic_pool, validate, HeaderStyle},
    error::LineupError,
    lineup::{EditPolicy, LineupStatus},
    pool::PoolSnapshot,
    storage::LineupDatabase,
    LineupId, PlayerId, Week,
};
use std::io::Write;
use tempfile::NamedTempFile;

const VALID: [(&str, u64); 9] = [
    ("QB", 1),
    ("RB1", 10),
    ("RB2", 3),
    ("WR1", 4),
    ("WR2", 5),
    ("WR3", 6),
    ("TE", 7),
    ("FLEX", 8),
    ("DST", 9),
];

fn test_context(edit_policy: EditPolicy) -> CommandContext {
    let settings = Settings {
        edit_policy,
        ..Settings::default()
    };
    CommandContext::with_database(settings, LineupDatabase::new_in_memory().unwrap()).unwrap()
}

fn pool_file() -> NamedTempFile {
    let mut players: Vec<_> = classic_pool().iter().cloned().collect();
    for player in players.iter_mut().filter(|p| p.player_id == PlayerId::new(1)) {
        player
            .extra
            .insert("name".to_string(), serde_json::json!("Josh Allen"));
    }
    let snapshot = PoolSnapshot {
        week: Week::new(3),
        draft_group_id: Some(99_001),
        players,
    };

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&snapshot).unwrap().as_bytes())
        .unwrap();
    file
}

fn create_lineup(ctx: &mut CommandContext, name: &str, assignments: &[(&str, u64)]) -> LineupId {
    let id = handle_new(ctx, Week::new(3), name, &[]).unwrap();
    for (slot, player) in assignments {
        handle_set(ctx, id, slot, Some(PlayerId::new(*player))).unwrap();
    }
    id
}

fn select(ids: &[LineupId]) -> LineupSelection {
    LineupSelection {
        lineups: ids.to_vec(),
        week: None,
    }
}

#[test]
fn test_new_and_set_persist() {
    let mut ctx = test_context(EditPolicy::default());
    let id = handle_new(&mut ctx, Week::new(3), "Cash", &["cash".to_string()]).unwrap();
    assert_eq!(id, LineupId::new(1));

    handle_set(&mut ctx, id, "rb1", Some(PlayerId::new(10))).unwrap();
    let draft = ctx.load_lineup(id).unwrap();
    assert_eq!(draft.name(), "Cash");
    assert!(draft.tags().contains("cash"));
    assert_eq!(draft.assignments().len(), 1);
    assert_eq!(
        draft.slot(&crate::roster::SlotId::new("RB1")),
        Some(PlayerId::new(10))
    );

    handle_set(&mut ctx, id, "RB1", None).unwrap();
    assert!(ctx.load_lineup(id).unwrap().assignments().is_empty());
}

#[test]
fn test_set_rejects_unknown_slot() {
    let mut ctx = test_context(EditPolicy::default());
    let id = handle_new(&mut ctx, Week::new(3), "GPP", &[]).unwrap();

    let result = handle_set(&mut ctx, id, "SUPERFLEX", Some(PlayerId::new(1)));
    assert!(matches!(result, Err(LineupError::InvalidSlot { slot }) if slot == "SUPERFLEX"));
}

#[test]
fn test_missing_lineup() {
    let mut ctx = test_context(EditPolicy::default());
    let result = handle_set(&mut ctx, LineupId::new(42), "QB", Some(PlayerId::new(1)));
    assert!(matches!(result, Err(LineupError::LineupNotFound { .. })));

    let result = handle_delete(&mut ctx, LineupId::new(42));
    assert!(matches!(result, Err(LineupError::LineupNotFound { .. })));
}

#[test]
fn test_edit_after_export_resets_status() {
    let mut ctx = test_context(EditPolicy::ResetToCreated);
    let id = create_lineup(&mut ctx, "Reset", &VALID);
    handle_status(&mut ctx, id, LineupStatus::Exported).unwrap();

    handle_set(&mut ctx, id, "FLEX", Some(PlayerId::new(2))).unwrap();
    assert_eq!(ctx.load_lineup(id).unwrap().status(), LineupStatus::Created);
}

#[test]
fn test_edit_after_export_rejected() {
    let mut ctx = test_context(EditPolicy::Reject);
    let id = create_lineup(&mut ctx, "Locked", &VALID);
    handle_status(&mut ctx, id, LineupStatus::Exported).unwrap();

    let result = handle_set(&mut ctx, id, "FLEX", Some(PlayerId::new(2)));
    assert!(matches!(result, Err(LineupError::LineupLocked { .. })));

    let draft = ctx.load_lineup(id).unwrap();
    assert_eq!(draft.status(), LineupStatus::Exported);
    assert_eq!(
        draft.slot(&crate::roster::SlotId::new("FLEX")),
        Some(PlayerId::new(8))
    );
}

#[test]
fn test_status_must_move_one_step() {
    let mut ctx = test_context(EditPolicy::default());
    let id = handle_new(&mut ctx, Week::new(3), "Skip", &[]).unwrap();

    let result = handle_status(&mut ctx, id, LineupStatus::Submitted);
    assert!(matches!(
        result,
        Err(LineupError::InvalidStatusTransition { .. })
    ));
    assert_eq!(ctx.load_lineup(id).unwrap().status(), LineupStatus::Created);
}

#[test]
fn test_tag_and_rename() {
    let mut ctx = test_context(EditPolicy::default());
    let id = handle_new(&mut ctx, Week::new(3), "Old", &["a".to_string()]).unwrap();

    handle_tag(&mut ctx, id, &["b".to_string()], &["a".to_string()]).unwrap();
    handle_rename(&mut ctx, id, "New").unwrap();

    let draft = ctx.load_lineup(id).unwrap();
    assert_eq!(draft.name(), "New");
    assert_eq!(draft.tags().iter().collect::<Vec<_>>(), vec!["b"]);
}

#[test]
fn test_validate_reports_in_input_order() {
    let mut ctx = test_context(EditPolicy::default());
    let valid = create_lineup(&mut ctx, "Valid", &VALID);
    let partial = create_lineup(&mut ctx, "Partial", &[("QB", 1)]);
    let pool = pool_file();

    assert!(handle_validate(&ctx, &select(&[valid]), pool.path(), false).unwrap());
    assert!(!handle_validate(&ctx, &select(&[valid, partial]), pool.path(), true).unwrap());

    let drafts = ctx.load_selection(&select(&[partial, valid])).unwrap();
    let reports = validate_all(&drafts, &ctx, &load_pool(pool.path()).unwrap());
    let ids: Vec<_> = reports.iter().map(|r| r.lineup_id).collect();
    assert_eq!(ids, vec![partial, valid]);
    assert!(!reports[0].result.valid);
    assert!(reports[1].result.valid);
}

#[test]
fn test_week_selection() {
    let mut ctx = test_context(EditPolicy::default());
    let first = create_lineup(&mut ctx, "One", &[]);
    let second = create_lineup(&mut ctx, "Two", &[]);
    handle_new(&mut ctx, Week::new(4), "Other week", &[]).unwrap();

    let selection = LineupSelection {
        lineups: Vec::new(),
        week: Some(Week::new(3)),
    };
    let ids: Vec<_> = ctx
        .load_selection(&selection)
        .unwrap()
        .iter()
        .map(|d| d.id)
        .collect();
    assert_eq!(ids, vec![first, second]);

    let empty = LineupSelection {
        lineups: Vec::new(),
        week: None,
    };
    assert!(ctx.load_selection(&empty).unwrap().is_empty());
}

#[test]
fn test_export_then_check() {
    let mut ctx = test_context(EditPolicy::default());
    let first = create_lineup(&mut ctx, "A", &VALID);
    let second = create_lineup(&mut ctx, "B", &VALID);
    let pool = pool_file();
    let out = NamedTempFile::new().unwrap();

    let count = handle_export(
        &mut ctx,
        &select(&[first, second]),
        pool.path(),
        Some(out.path()),
        HeaderStyle::SlotId,
    )
    .unwrap();
    assert_eq!(count, 2);

    let written = std::fs::read_to_string(out.path()).unwrap();
    let mut lines = written.lines();
    assert_eq!(lines.next(), Some("QB,RB1,RB2,WR1,WR2,WR3,TE,FLEX,DST"));
    assert_eq!(
        lines.next(),
        Some("38200001,38200010,38200003,38200004,38200005,38200006,38200007,38200008,38200009")
    );
    assert_eq!(written.lines().count(), 3);

    for id in [first, second] {
        assert_eq!(ctx.load_lineup(id).unwrap().status(), LineupStatus::Exported);
    }
    assert_eq!(handle_check_export(&ctx, out.path()).unwrap(), 2);
}

#[test]
fn test_export_invalid_writes_nothing() {
    let mut ctx = test_context(EditPolicy::default());
    let valid = create_lineup(&mut ctx, "Valid", &VALID);
    let partial = create_lineup(&mut ctx, "Partial", &[("QB", 1), ("DST", 9)]);
    let pool = pool_file();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("upload.csv");

    let result = handle_export(
        &mut ctx,
        &select(&[valid, partial]),
        pool.path(),
        Some(&out),
        HeaderStyle::SlotId,
    );
    match result {
        Err(LineupError::ExportOfInvalidLineup { lineup_id, errors }) => {
            assert_eq!(lineup_id, partial);
            assert!(!errors.is_empty());
        }
        other => panic!("Expected ExportOfInvalidLineup, got {:?}", other),
    }

    assert!(!out.exists());
    assert_eq!(ctx.load_lineup(valid).unwrap().status(), LineupStatus::Created);
}

#[test]
fn test_check_export_rejects_foreign_header() {
    let ctx = test_context(EditPolicy::default());
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"QB,RB,WR\n1,2,3\n").unwrap();

    let result = handle_check_export(&ctx, file.path());
    assert!(matches!(result, Err(LineupError::MalformedExport { .. })));
}

#[test]
fn test_format_analysis_and_validation() {
    let mut ctx = test_context(EditPolicy::default());
    let id = create_lineup(&mut ctx, "Partial", &[("QB", 1), ("RB1", 99)]);
    let pool = load_pool(pool_file().path()).unwrap();
    let draft = ctx.load_lineup(id).unwrap();

    let analysis = analyze(&draft, &ctx.roster, &pool);
    let text = format_analysis(&draft, &analysis, &pool);
    assert!(text.contains("1 Josh Allen"));
    assert!(text.contains("99 (unknown)"));
    assert!(text.contains("2/9 slots filled"));

    let result = validate(&draft, &ctx.roster, &pool);
    let text = format_validation(&draft, &result);
    assert!(text.starts_with("Lineup 1 \"Partial\": INVALID"));
    assert_eq!(text.lines().count(), 1 + result.errors.len());
}

#[test]
fn test_list_and_delete() {
    let mut ctx = test_context(EditPolicy::default());
    let id = create_lineup(&mut ctx, "Gone", &[("QB", 1)]);
    handle_list(&ctx, None, false).unwrap();
    handle_list(&ctx, Some(Week::new(3)), true).unwrap();

    handle_delete(&mut ctx, id).unwrap();
    assert!(ctx.db.list_lineups(None).unwrap().is_empty());
    handle_list(&ctx, None, false).unwrap();
}
