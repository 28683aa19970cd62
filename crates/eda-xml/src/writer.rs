//! XML serialization of [`EdaDocument`] trees.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::element::{Content, EdaDocument, Element};
use crate::error::Result;

/// Serialize the root element only, without an XML declaration.
///
/// This is the payload framed into fixed-block containers.
pub fn to_xml_string(doc: &EdaDocument) -> Result<String> {
    let mut buffer = Vec::new();
    write_xml(&mut buffer, doc, false)?;
    Ok(String::from_utf8(buffer)?)
}

/// Serialize with a UTF-8 declaration, as stored in ZIP packages.
pub fn to_xml_document(doc: &EdaDocument) -> Result<String> {
    let mut buffer = Vec::new();
    write_xml(&mut buffer, doc, true)?;
    Ok(String::from_utf8(buffer)?)
}

/// Write a document to any sink.
///
/// The output never contains a raw line break inside the root element: CR
/// and LF in text values are written as character references.
pub fn write_xml<W: Write>(sink: W, doc: &EdaDocument, declaration: bool) -> Result<()> {
    let mut xml = Writer::new(sink);

    if declaration {
        xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        xml.get_mut().write_all(b"\n")?;
    }

    write_element(&mut xml, &doc.root, Some(doc.namespace))?;
    xml.get_mut().flush()?;
    Ok(())
}

fn write_element<W: Write>(
    xml: &mut Writer<W>,
    element: &Element,
    namespace: Option<&str>,
) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    if let Some(ns) = namespace {
        start.push_attribute(("xmlns", ns));
    }
    for (name, value) in &element.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    match &element.content {
        Content::Text(text) => {
            xml.write_event(Event::Start(start))?;
            xml.write_event(Event::Text(BytesText::from_escaped(escape_text(text))))?;
        }
        Content::Children(children) if children.is_empty() => {
            xml.write_event(Event::Empty(start))?;
            return Ok(());
        }
        Content::Children(children) => {
            xml.write_event(Event::Start(start))?;
            for child in children {
                write_element(xml, child, None)?;
            }
        }
    }
    xml.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}

fn escape_text(text: &str) -> String {
    partial_escape(text).replace('\r', "&#13;").replace('\n', "&#10;")
}
