//! EGVP manifest for ZIP packages.

use quick_xml::escape::escape;

/// Namespace of the EGVP manifest.
pub const MANIFEST_NS: &str = "http://www.egvp.de/namespace/20040922";

/// Archive-internal path of the manifest.
pub const MANIFEST_PATH: &str = "EDA-INF/manifest.xml";

/// Content type of the single payload item.
pub const MANIFEST_CONTENT_TYPE: &str = "text/xml";

/// Description of the single payload item.
pub const MANIFEST_DESCRIPTION: &str = "EDA-Mahnantrag XML-Datei";

/// Compose the manifest listing one XML payload file.
pub fn compose_manifest(xml_file_name: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <Manifest xmlns=\"{MANIFEST_NS}\">\n\
         \x20 <Item>\n\
         \x20   <Filename>{}</Filename>\n\
         \x20   <ContentType>{MANIFEST_CONTENT_TYPE}</ContentType>\n\
         \x20   <Description>{MANIFEST_DESCRIPTION}</Description>\n\
         \x20 </Item>\n\
         </Manifest>\n",
        escape(xml_file_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_template() {
        insta::assert_snapshot!(compose_manifest("antrag.xml"), @r#"
<?xml version="1.0" encoding="UTF-8"?>
<Manifest xmlns="http://www.egvp.de/namespace/20040922">
  <Item>
    <Filename>antrag.xml</Filename>
    <ContentType>text/xml</ContentType>
    <Description>EDA-Mahnantrag XML-Datei</Description>
  </Item>
</Manifest>
"#);
    }

    #[test]
    fn manifest_escapes_file_name() {
        let manifest = compose_manifest("a&b.xml");
        assert!(manifest.contains("<Filename>a&amp;b.xml</Filename>"));
    }
}
