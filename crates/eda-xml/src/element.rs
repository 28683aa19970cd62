//! In-memory element tree.

use chrono::NaiveDateTime;

/// Content of an element: a single text value or ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Children(Vec<Element>),
}

/// An element in the document's default namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub content: Content,
}

impl Element {
    /// Element with ordered children.
    pub fn parent(name: impl Into<String>, children: Vec<Element>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            content: Content::Children(children),
        }
    }

    /// Element holding a single text value.
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            content: Content::Text(text.into()),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn children(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            Content::Text(_) => &[],
        }
    }

    pub fn text_value(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            Content::Children(_) => None,
        }
    }

    /// First child with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children().iter().find(|child| child.name == name)
    }

    /// Descend through first matches of each name in `path`.
    pub fn find(&self, path: &[&str]) -> Option<&Element> {
        path.iter()
            .try_fold(self, |element, name| element.child(name))
    }
}

/// A rendered dunning application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdaDocument {
    /// Namespace declared as default on the root.
    pub namespace: &'static str,
    pub root: Element,
    /// Value of the root's `dateiID` attribute.
    pub file_id: String,
    pub created: NaiveDateTime,
}

impl EdaDocument {
    pub fn find(&self, path: &[&str]) -> Option<&Element> {
        self.root.find(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_descends_by_name() {
        let tree = Element::parent(
            "a",
            vec![
                Element::text("b", "first"),
                Element::parent("c", vec![Element::text("d", "deep")]),
            ],
        );
        assert_eq!(tree.find(&["c", "d"]).and_then(Element::text_value), Some("deep"));
        assert!(tree.find(&["c", "x"]).is_none());
        assert!(tree.child("b").unwrap().children().is_empty());
    }
}
