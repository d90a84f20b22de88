//! Unit tests for error handling

use super::*;
use crate::roster::SlotId;
use std::io;

#[cfg(test)]
mod lineup_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = LineupError::from(json_error);

        match error {
            LineupError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = LineupError::from(io_error);

        match error {
            LineupError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_csv_error_conversion() {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader("a,b\nc\n".as_bytes());
        let csv_error = reader
            .records()
            .find_map(|r| r.err())
            .expect("ragged rows should fail");
        let error = LineupError::from(csv_error);

        match error {
            LineupError::Csv(_) => (),
            _ => panic!("Expected Csv error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "abc".parse::<u64>().unwrap_err();
        let error = LineupError::from(parse_error);

        match error {
            LineupError::InvalidId(_) => (),
            _ => panic!("Expected InvalidId error variant"),
        }
    }

    #[test]
    fn test_anyhow_error_becomes_storage() {
        let error = LineupError::from(anyhow::anyhow!("disk full"));

        match error {
            LineupError::Storage { message } => assert_eq!(message, "disk full"),
            _ => panic!("Expected Storage error variant"),
        }
    }

    #[test]
    fn test_error_display() {
        let error = LineupError::InvalidRosterConfig {
            reason: "salary cap must be positive".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid roster configuration: salary cap must be positive"
        );

        let error = LineupError::InvalidStatusTransition {
            from: LineupStatus::Created,
            to: LineupStatus::Submitted,
        };
        assert_eq!(
            error.to_string(),
            "Invalid status transition: created -> submitted"
        );

        let error = LineupError::LineupLocked {
            lineup_id: LineupId::new(4),
            status: LineupStatus::Uploaded,
        };
        assert_eq!(
            error.to_string(),
            "Lineup 4 is uploaded and can no longer be edited"
        );
    }

    #[test]
    fn test_export_of_invalid_lineup_counts_errors() {
        let error = LineupError::ExportOfInvalidLineup {
            lineup_id: LineupId::new(7),
            errors: vec![
                ValidationError::IncompleteSlot {
                    slot: SlotId::new("QB"),
                },
                ValidationError::IncompleteSlot {
                    slot: SlotId::new("DST"),
                },
            ],
        };
        assert_eq!(
            error.to_string(),
            "Lineup 7 is not valid and cannot be exported (2 error(s))"
        );
    }

    #[test]
    fn test_missing_draftable_id_display() {
        let error = LineupError::MissingDraftableId {
            player_id: PlayerId::new(5),
        };
        assert_eq!(error.to_string(), "Player 5 has no external draftable id");
    }

    #[test]
    fn test_error_debug() {
        let error = LineupError::LineupNotFound {
            lineup_id: LineupId::new(12),
        };
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("LineupNotFound"));
        assert!(debug_str.contains("12"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<u64> {
            Ok(42)
        }

        fn returns_error() -> Result<u64> {
            Err(LineupError::InvalidSlot {
                slot: "SUPERFLEX".to_string(),
            })
        }

        assert_eq!(returns_result().unwrap(), 42);
        assert!(returns_error().is_err());
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LineupError>();
    }
}
