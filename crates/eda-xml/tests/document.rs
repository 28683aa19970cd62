//! Integration tests for document building and serialization.

use chrono::{NaiveDate, NaiveDateTime};
use eda_model::{CaseContext, Claim, ClaimRecord, Party, parse_amount};
use eda_xml::{
    DocumentBuilder, EDA_NS, FixedClock, FixedIdSource, UuidIdSource, build_document,
    to_xml_document, to_xml_string,
};

const FILE_ID: &str = "00000000-0000-4000-8000-000000000001";

fn created() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_milli_opt(14, 7, 9, 750)
        .unwrap()
}

fn record() -> ClaimRecord {
    ClaimRecord::new(
        Party::new("ACME GmbH", "Hauptstr.", "1", "10115", "Berlin"),
        Party::new("Max Mustermann", "Nebenweg", "2", "80331", "München"),
        Claim::new(parse_amount("1500.50").unwrap(), None),
        CaseContext::default(),
    )
    .expect("valid record")
}

fn expected_xml() -> String {
    [
        r#"<Mahnantrag xmlns="http://www.egvp.de/Nachrichtentypen/EDA/1.4" verfahrensart="Mahn" version="1.4" "#,
        r#"dateiID="00000000-0000-4000-8000-000000000001" erstellungszeitpunkt="2024-03-05T14:07:09">"#,
        "<Header><Absender>ACME GmbH</Absender><Empfaenger>Zentrales Mahngericht</Empfaenger></Header>",
        "<Parteien>",
        r#"<Partei parteiTyp="Antragsteller" parteiNr="G1"><Name>ACME GmbH</Name>"#,
        "<Anschrift><Strasse>Hauptstr.</Strasse><Hausnummer>1</Hausnummer>",
        "<Postleitzahl>10115</Postleitzahl><Ort>Berlin</Ort></Anschrift></Partei>",
        r#"<Partei parteiTyp="Antragsgegner" parteiNr="S1"><Name>Max Mustermann</Name>"#,
        "<Anschrift><Strasse>Nebenweg</Strasse><Hausnummer>2</Hausnummer>",
        "<Postleitzahl>80331</Postleitzahl><Ort>München</Ort></Anschrift></Partei>",
        "</Parteien>",
        r#"<Forderungen><Forderung forderungstyp="Hauptforderung" forderungID="F1">"#,
        "<GlaeubigerRef>G1</GlaeubigerRef><SchuldnerRef>S1</SchuldnerRef>",
        r#"<Betrag waehrung="EUR">1500.50</Betrag><Gegenstand>Forderung aus Vertrag</Gegenstand>"#,
        "</Forderung></Forderungen>",
        "<Verfahren><Amtsgericht>Zentrales Mahngericht</Amtsgericht>",
        "<Verfahrensgegenstand>Mahnverfahren</Verfahrensgegenstand>",
        "<Verfahrensart>Antrag auf Erlass eines Mahnbescheids</Verfahrensart>",
        "<Antragstyp>NormalerMahnantrag</Antragstyp></Verfahren>",
        "</Mahnantrag>",
    ]
    .concat()
}

#[test]
fn renders_fixed_layout() {
    let ids = FixedIdSource::new(FILE_ID);
    let clock = FixedClock(created());
    let doc = DocumentBuilder::new(&ids, &clock).build(&record());
    assert_eq!(doc.namespace, EDA_NS);
    assert_eq!(doc.file_id, FILE_ID);
    assert_eq!(to_xml_string(&doc).unwrap(), expected_xml());
}

#[test]
fn document_form_adds_declaration() {
    let ids = FixedIdSource::new(FILE_ID);
    let clock = FixedClock(created());
    let doc = DocumentBuilder::new(&ids, &clock).build(&record());
    let xml = to_xml_document(&doc).unwrap();
    assert_eq!(
        xml,
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}",
            expected_xml()
        )
    );
}

#[test]
fn rendering_is_deterministic_with_fixed_sources() {
    let ids = FixedIdSource::new(FILE_ID);
    let clock = FixedClock(created());
    let builder = DocumentBuilder::new(&ids, &clock);
    let first = to_xml_string(&builder.build(&record())).unwrap();
    let second = to_xml_string(&builder.build(&record())).unwrap();
    assert_eq!(first, second);
}

#[test]
fn fresh_documents_differ_only_in_identity() {
    let clock = FixedClock(created());
    let a = DocumentBuilder::new(&UuidIdSource, &clock).build(&record());
    let b = DocumentBuilder::new(&UuidIdSource, &clock).build(&record());
    assert_ne!(a.file_id, b.file_id);
    let a_xml = to_xml_string(&a).unwrap().replace(&a.file_id, "ID");
    let b_xml = to_xml_string(&b).unwrap().replace(&b.file_id, "ID");
    assert_eq!(a_xml, b_xml);
}

#[test]
fn tree_exposes_fields() {
    let doc = build_document(&record());
    assert_eq!(doc.root.name, "Mahnantrag");
    let amount = doc
        .find(&["Forderungen", "Forderung", "Betrag"])
        .expect("Betrag");
    assert_eq!(amount.text_value(), Some("1500.50"));
    assert_eq!(amount.attribute("waehrung"), Some("EUR"));
    let parties = doc.find(&["Parteien"]).expect("Parteien").children();
    assert_eq!(parties.len(), 2);
    assert_eq!(parties[1].attribute("parteiNr"), Some("S1"));
    let stamp = doc.root.attribute("erstellungszeitpunkt").unwrap();
    assert_eq!(stamp.len(), "YYYY-MM-DDTHH:MM:SS".len());
}

#[test]
fn custom_courts_are_rendered() {
    let mut record = record();
    record.context = CaseContext::new(
        Some("Amtsgericht Wedding".to_string()),
        Some("Mahngericht Berlin".to_string()),
    );
    let doc = build_document(&record);
    assert_eq!(
        doc.find(&["Header", "Empfaenger"]).and_then(|e| e.text_value()),
        Some("Mahngericht Berlin")
    );
    assert_eq!(
        doc.find(&["Verfahren", "Amtsgericht"])
            .and_then(|e| e.text_value()),
        Some("Amtsgericht Wedding")
    );
}
