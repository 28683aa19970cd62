//! Framing properties and file round trips.

use eda_block::{
    BLOCK_LEN, BlockError, EdaWriter, FrameOptions, frame, frame_to_string, parse_eda, read_eda,
    write_eda, write_eda_with_options,
};
use proptest::prelude::*;
use tempfile::TempDir;

proptest! {
    #[test]
    fn every_line_is_one_block(payload in "[^\n\r]{0,600}") {
        for line in frame(&payload, &FrameOptions::default()) {
            prop_assert_eq!(line.chars().count(), BLOCK_LEN);
        }
    }

    #[test]
    fn payload_survives_framing(payload in "[^\n\r]{0,600}[^\n\r ]") {
        let text = frame_to_string(&payload, &FrameOptions::default());
        let container = parse_eda(&text).unwrap();
        prop_assert_eq!(container.payload(), payload);
    }

    #[test]
    fn block_count_matches_length(payload in "[a-z<>/]{0,1000}") {
        let lines = frame(&payload, &FrameOptions::default());
        let expected = payload.chars().count().div_ceil(BLOCK_LEN);
        prop_assert_eq!(lines.len(), expected + 2);
    }

    #[test]
    fn writer_agrees_with_frame(payload in "[^\n\r]{0,400}") {
        let mut buf = Vec::new();
        EdaWriter::new(&mut buf).write_payload(&payload).unwrap();
        prop_assert_eq!(
            String::from_utf8(buf).unwrap(),
            frame_to_string(&payload, &FrameOptions::default())
        );
    }
}

#[test]
fn file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("antrag.eda");
    let payload = format!("<Mahnantrag>{}</Mahnantrag>", "Ä".repeat(300));

    write_eda(&path, &payload).unwrap();
    let container = read_eda(&path).unwrap();

    assert_eq!(container.payload(), payload);
    assert_eq!(container.header.procedure, "MAHNV.EDA");

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.lines().all(|l| l.chars().count() == BLOCK_LEN));
    assert!(!raw.ends_with('\n'));
}

#[test]
fn file_round_trip_with_options() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("antrag.eda");
    let options = FrameOptions::new().with_version("V05").with_sequence("02");

    write_eda_with_options(&path, "<x/>", &options).unwrap();
    let container = read_eda(&path).unwrap();

    assert_eq!(container.header.version, "V05");
    assert_eq!(container.header.sequence, "02");
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let err = read_eda(&dir.path().join("absent.eda")).unwrap_err();
    assert!(matches!(err, BlockError::FileNotFound { .. }));
}
