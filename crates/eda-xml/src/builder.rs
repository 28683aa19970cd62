//! Mahnantrag document construction.

use eda_model::{CURRENCY, ClaimRecord, Party, PartyRole};

use crate::element::{EdaDocument, Element};
use crate::source::{Clock, IdSource, SystemClock, UuidIdSource};

/// Namespace of the EDA message types, version 1.4.
pub const EDA_NS: &str = "http://www.egvp.de/Nachrichtentypen/EDA/1.4";

/// Schema version written into the root's `version` attribute.
pub const EDA_VERSION: &str = "1.4";

/// Format of the `erstellungszeitpunkt` attribute.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Identifier of the single principal claim.
pub const CLAIM_ID: &str = "F1";

const PROCEDURE_SUBJECT: &str = "Mahnverfahren";
const PROCEDURE_KIND: &str = "Antrag auf Erlass eines Mahnbescheids";
const APPLICATION_TYPE: &str = "NormalerMahnantrag";

/// Builds documents with injected identity sources.
pub struct DocumentBuilder<'a> {
    ids: &'a dyn IdSource,
    clock: &'a dyn Clock,
}

impl<'a> DocumentBuilder<'a> {
    pub fn new(ids: &'a dyn IdSource, clock: &'a dyn Clock) -> Self {
        Self { ids, clock }
    }

    /// Render a claim record into the fixed EDA layout.
    ///
    /// Only `dateiID` and `erstellungszeitpunkt` depend on the sources; the
    /// rest of the tree is a pure function of the record.
    pub fn build(&self, record: &ClaimRecord) -> EdaDocument {
        let file_id = self.ids.next_id();
        let created = self.clock.now();
        let timestamp = created.format(TIMESTAMP_FORMAT).to_string();

        let root = Element::parent(
            "Mahnantrag",
            vec![
                header(record),
                parties(record),
                claims(record),
                procedure(record),
            ],
        )
        .with_attribute("verfahrensart", "Mahn")
        .with_attribute("version", EDA_VERSION)
        .with_attribute("dateiID", file_id.as_str())
        .with_attribute("erstellungszeitpunkt", timestamp);

        tracing::debug!(file_id = %file_id, "built Mahnantrag document");

        EdaDocument {
            namespace: EDA_NS,
            root,
            file_id,
            created,
        }
    }
}

/// Build a document with a random identifier and the local clock.
pub fn build_document(record: &ClaimRecord) -> EdaDocument {
    DocumentBuilder::new(&UuidIdSource, &SystemClock).build(record)
}

fn header(record: &ClaimRecord) -> Element {
    Element::parent(
        "Header",
        vec![
            Element::text("Absender", record.creditor.name.as_str()),
            Element::text("Empfaenger", record.context.recipient_authority.as_str()),
        ],
    )
}

fn parties(record: &ClaimRecord) -> Element {
    Element::parent(
        "Parteien",
        vec![
            party(PartyRole::Creditor, &record.creditor),
            party(PartyRole::Debtor, &record.debtor),
        ],
    )
}

fn party(role: PartyRole, party: &Party) -> Element {
    let address = Element::parent(
        "Anschrift",
        vec![
            Element::text("Strasse", party.street.as_str()),
            Element::text("Hausnummer", party.house_number.as_str()),
            Element::text("Postleitzahl", party.postal_code.as_str()),
            Element::text("Ort", party.city.as_str()),
        ],
    );
    Element::parent(
        "Partei",
        vec![Element::text("Name", party.name.as_str()), address],
    )
    .with_attribute("parteiTyp", role.party_type())
    .with_attribute("parteiNr", role.party_number())
}

fn claims(record: &ClaimRecord) -> Element {
    let claim = Element::parent(
        "Forderung",
        vec![
            Element::text("GlaeubigerRef", PartyRole::Creditor.party_number()),
            Element::text("SchuldnerRef", PartyRole::Debtor.party_number()),
            Element::text("Betrag", record.claim.amount_text()).with_attribute("waehrung", CURRENCY),
            Element::text("Gegenstand", record.claim.subject.as_str()),
        ],
    )
    .with_attribute("forderungstyp", "Hauptforderung")
    .with_attribute("forderungID", CLAIM_ID);
    Element::parent("Forderungen", vec![claim])
}

fn procedure(record: &ClaimRecord) -> Element {
    Element::parent(
        "Verfahren",
        vec![
            Element::text("Amtsgericht", record.context.competent_court.as_str()),
            Element::text("Verfahrensgegenstand", PROCEDURE_SUBJECT),
            Element::text("Verfahrensart", PROCEDURE_KIND),
            Element::text("Antragstyp", APPLICATION_TYPE),
        ],
    )
}
