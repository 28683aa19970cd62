//! EDA Mahnantrag XML generation.
//!
//! This crate renders a [`ClaimRecord`](eda_model::ClaimRecord) into the
//! namespaced EDA 1.4 element tree and serializes it:
//!
//! - **Builder**: fixed layout (`Header`, `Parteien`, `Forderungen`, `Verfahren`)
//! - **Sources**: injectable identifier and clock for `dateiID` / `erstellungszeitpunkt`
//! - **Writer**: compact serialization with or without XML declaration
//! - **Manifest**: EGVP manifest describing the payload file of a ZIP package
//!
//! # Example
//!
//! ```ignore
//! use eda_xml::{DocumentBuilder, FixedClock, FixedIdSource, to_xml_string};
//!
//! let ids = FixedIdSource::new("6f1c...");
//! let clock = FixedClock(created);
//! let doc = DocumentBuilder::new(&ids, &clock).build(&record);
//! let xml = to_xml_string(&doc)?;
//! ```

mod builder;
mod element;
mod error;
pub mod manifest;
mod source;
mod writer;

pub use builder::{
    CLAIM_ID, DocumentBuilder, EDA_NS, EDA_VERSION, TIMESTAMP_FORMAT, build_document,
};
pub use element::{Content, EdaDocument, Element};
pub use error::{Result, XmlError};
pub use manifest::{MANIFEST_NS, MANIFEST_PATH, compose_manifest};
pub use source::{Clock, FixedClock, FixedIdSource, IdSource, SystemClock, UuidIdSource};
pub use writer::{to_xml_document, to_xml_string, write_xml};
