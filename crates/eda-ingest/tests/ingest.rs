use std::fs;
use std::path::PathBuf;

use eda_ingest::{IngestError, InputFormat, RawInput, load_claim, read_input};
use eda_model::{DEFAULT_COURT, DEFAULT_SUBJECT};
use tempfile::TempDir;

const CSV_HEADER: &str = "glaeubiger_name,glaeubiger_strasse,glaeubiger_hausnummer,glaeubiger_plz,glaeubiger_ort,\
schuldner_name,schuldner_strasse,schuldner_hausnummer,schuldner_plz,schuldner_ort,hauptforderung";

const JSON_CLAIM: &str = r#"{
  "glaeubiger": {"name": "ACME GmbH", "strasse": "Hauptstr.", "hausnummer": "1", "plz": "10115", "ort": "Berlin"},
  "schuldner": {"name": "Max Mustermann", "strasse": "Nebenweg", "hausnummer": "2", "plz": "80331", "ort": "München"},
  "forderung": {"hauptforderung": 1500.50}
}"#;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write input");
    path
}

fn csv_claim(amount: &str) -> String {
    format!(
        "{CSV_HEADER}\nACME GmbH,Hauptstr.,1,10115,Berlin,Max Mustermann,Nebenweg,2,80331,München,{amount}\n"
    )
}

#[test]
fn json_example_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "antrag.json", JSON_CLAIM);
    let record = load_claim(&path).expect("load json");
    assert_eq!(record.creditor.name, "ACME GmbH");
    assert_eq!(record.debtor.city, "München");
    assert_eq!(record.claim.amount_text(), "1500.50");
    assert_eq!(record.claim.subject, DEFAULT_SUBJECT);
    assert_eq!(record.context.competent_court, DEFAULT_COURT);
}

#[test]
fn csv_and_json_produce_same_record() {
    let dir = TempDir::new().unwrap();
    let csv = write_file(&dir, "antrag.csv", &csv_claim("1500.50"));
    let json = write_file(&dir, "antrag.json", JSON_CLAIM);
    assert_eq!(load_claim(&csv).unwrap(), load_claim(&json).unwrap());
}

#[test]
fn csv_only_first_row_is_used() {
    let dir = TempDir::new().unwrap();
    let mut contents = csv_claim("10");
    contents.push_str("Other,Weg,3,12345,Hamburg,Someone,Gasse,4,54321,Köln,99\n");
    let path = write_file(&dir, "antrag.csv", &contents);
    let record = load_claim(&path).unwrap();
    assert_eq!(record.creditor.name, "ACME GmbH");
    assert_eq!(record.claim.amount_text(), "10.00");
}

#[test]
fn detects_format_from_extension() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "antrag.JSON", JSON_CLAIM);
    let raw = read_input(&path).unwrap();
    assert_eq!(raw.format(), InputFormat::Json);
    assert!(matches!(raw, RawInput::Structured(_)));
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "antrag.xml", "<x/>");
    assert!(matches!(
        load_claim(&path),
        Err(IngestError::InputFormat { .. })
    ));
}

#[test]
fn non_numeric_amount_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "antrag.csv", &csv_claim("zwölf"));
    assert!(matches!(
        load_claim(&path),
        Err(IngestError::InvalidAmount { .. })
    ));
}

#[test]
fn json_missing_address_field_is_named() {
    let dir = TempDir::new().unwrap();
    let contents = JSON_CLAIM.replace(r#""plz": "80331", "#, "");
    let path = write_file(&dir, "antrag.json", &contents);
    match load_claim(&path) {
        Err(IngestError::MissingField { field }) => assert_eq!(field, "schuldner.plz"),
        other => panic!("expected missing field, got {other:?}"),
    }
}

#[test]
fn json_amount_as_string() {
    let dir = TempDir::new().unwrap();
    let contents = JSON_CLAIM.replace("1500.50", "\"250\"");
    let path = write_file(&dir, "antrag.json", &contents);
    let record = load_claim(&path).unwrap();
    assert_eq!(record.claim.amount_text(), "250.00");
}

#[test]
fn missing_file_reports_path() {
    let err = load_claim(std::path::Path::new("/nonexistent/antrag.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileRead { .. }));
}
