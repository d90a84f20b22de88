//! Unit tests for CSV export

use super::*;
use crate::cli::types::{LineupId, PlayerId};
use crate::engine::test_support::*;
use crate::pool::PlayerPoolEntry;
use std::collections::HashMap;

const CLASSIC_HEADER: &str = "QB,RB1,RB2,WR1,WR2,WR3,TE,FLEX,DST";

fn config() -> RosterConfiguration {
    RosterConfiguration::nfl_classic()
}

#[test]
fn test_single_lineup_exact_bytes() {
    let pool = classic_pool();
    let bytes = export_csv(&valid_lineup(1), &config(), &pool).unwrap();

    let expected = format!(
        "{CLASSIC_HEADER}\n38200001,38200010,38200003,38200004,38200005,38200006,38200007,38200008,38200009\n"
    );
    assert_eq!(String::from_utf8(bytes).unwrap(), expected);
}

#[test]
fn test_batch_one_header_rows_in_input_order() {
    let pool = classic_pool();
    let mut second = valid_lineup(2);
    second.set_slot("QB", Some(PlayerId::new(11))).unwrap();

    let bytes = export_csv_batch(&[second, valid_lineup(1)], &config(), &pool).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], CLASSIC_HEADER);
    assert!(lines[1].starts_with("38200011,"));
    assert!(lines[2].starts_with("38200001,"));
}

#[test]
fn test_empty_batch_is_header_only() {
    let pool = classic_pool();
    let bytes = export_csv_batch(&[], &config(), &pool).unwrap();
    assert_eq!(String::from_utf8(bytes).unwrap(), format!("{CLASSIC_HEADER}\n"));
}

#[test]
fn test_export_refuses_invalid_lineup() {
    let pool = classic_pool();
    match export_csv(&over_cap_lineup(7), &config(), &pool) {
        Err(LineupError::ExportOfInvalidLineup { lineup_id, errors }) => {
            assert_eq!(lineup_id, LineupId::new(7));
            assert_eq!(
                errors,
                vec![ValidationError::SalaryCapExceeded { amount_over: 600 }]
            );
        }
        other => panic!("Expected ExportOfInvalidLineup, got {other:?}"),
    }
}

#[test]
fn test_batch_fails_on_first_invalid_lineup() {
    let pool = classic_pool();
    let mut incomplete = valid_lineup(3);
    incomplete.set_slot("DST", None).unwrap();

    let result = export_csv_batch(
        &[valid_lineup(1), over_cap_lineup(2), incomplete],
        &config(),
        &pool,
    );
    match result {
        Err(LineupError::ExportOfInvalidLineup { lineup_id, .. }) => {
            assert_eq!(lineup_id, LineupId::new(2))
        }
        other => panic!("Expected ExportOfInvalidLineup, got {other:?}"),
    }
}

#[test]
fn test_template_header_style() {
    let pool = classic_pool();
    let options = ExportOptions {
        header: HeaderStyle::BasePosition,
    };
    let bytes = export_csv_with(&valid_lineup(1), &config(), &pool, &options).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert_eq!(text.lines().next(), Some("QB,RB,RB,WR,WR,WR,TE,FLEX,DST"));
}

#[test]
fn test_round_trip_reproduces_slot_mapping() {
    let pool = classic_pool();
    let draft = valid_lineup(1);
    let bytes = export_csv(&draft, &config(), &pool).unwrap();

    let rows = parse_export(&bytes, &config()).unwrap();
    assert_eq!(rows.len(), 1);

    for slot in config().ordered_slots() {
        let player_id = draft.slot(&slot.id).unwrap();
        let expected = &pool.lookup(player_id).unwrap().external_draftable_id;
        assert_eq!(rows[0].get(&slot.id), Some(expected));
    }
}

#[test]
fn test_parse_accepts_template_header() {
    let pool = classic_pool();
    let options = ExportOptions {
        header: HeaderStyle::BasePosition,
    };
    let bytes = export_csv_with(&valid_lineup(1), &config(), &pool, &options).unwrap();
    let rows = parse_export(&bytes, &config()).unwrap();
    assert_eq!(
        rows[0].get(&SlotId::new("FLEX")),
        Some(&DraftableId::new("38200008"))
    );
}

#[test]
fn test_parse_rejects_reordered_header() {
    let bytes = b"RB1,QB,RB2,WR1,WR2,WR3,TE,FLEX,DST\n1,2,3,4,5,6,7,8,9\n";
    match parse_export(bytes, &config()) {
        Err(LineupError::MalformedExport { message }) => assert!(message.contains("RB1,QB")),
        other => panic!("Expected MalformedExport, got {other:?}"),
    }
}

#[test]
fn test_parse_rejects_short_row() {
    let bytes = format!("{CLASSIC_HEADER}\n1,2,3\n");
    assert!(matches!(
        parse_export(bytes.as_bytes(), &config()),
        Err(LineupError::Csv(_))
    ));
}

#[test]
fn test_identifiers_needing_quotes_are_quoted() {
    let mut pool = classic_pool().iter().cloned().collect::<Vec<_>>();
    for entry in &mut pool {
        if entry.player_id == PlayerId::new(9) {
            entry.external_draftable_id = DraftableId::new("Bills, DST");
        }
    }
    let pool = crate::pool::PlayerPool::from_entries(pool).unwrap();

    let bytes = export_csv(&valid_lineup(1), &config(), &pool).unwrap();
    let text = String::from_utf8(bytes.clone()).unwrap();
    assert!(text.ends_with(",\"Bills, DST\"\n"));
    // Plain numeric ids stay unquoted
    assert!(text.contains("\n38200001,"));

    let rows = parse_export(&bytes, &config()).unwrap();
    assert_eq!(
        rows[0].get(&SlotId::new("DST")),
        Some(&DraftableId::new("Bills, DST"))
    );
}

#[test]
fn test_blank_draftable_id_is_never_written() {
    // A plain map index skips the pool's own checks
    let mut pool: HashMap<PlayerId, PlayerPoolEntry> = classic_pool()
        .iter()
        .map(|entry| (entry.player_id, entry.clone()))
        .collect();
    if let Some(entry) = pool.get_mut(&PlayerId::new(5)) {
        entry.external_draftable_id = DraftableId::new("");
    }

    let result = export_csv(&valid_lineup(1), &config(), &pool);
    match result {
        Err(LineupError::MissingDraftableId { player_id }) => {
            assert_eq!(player_id, PlayerId::new(5))
        }
        other => panic!("Expected MissingDraftableId, got {other:?}"),
    }
}
