//! The element tree the assembler builds and the serializer consumes.

/// A single XML element.
///
/// Character data follows the text/tail model: `text` is the data
/// immediately after this element's open tag and before its first child;
/// `tail` is the data after this element's close tag and before the next
/// sibling. Attributes keep insertion order so output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Tag name.
    pub tag: String,

    /// Attributes in emission order.
    pub attributes: Vec<(String, String)>,

    /// Character data before the first child element.
    pub text: Option<String>,

    /// Character data following this element's close tag.
    pub tail: Option<String>,

    /// Child elements in document order.
    pub children: Vec<Element>,
}

impl Element {
    /// Create an empty element.
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Create an element holding only text.
    pub fn with_text(tag: impl Into<String>, text: impl Into<String>) -> Self {
        let mut element = Element::new(tag);
        element.text = Some(text.into());
        element
    }

    /// Set an attribute, replacing any existing value for the same name.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.attributes.push((name, value));
        }
    }

    /// Look up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Append a child and return a mutable reference to it.
    pub fn append(&mut self, child: Element) -> &mut Element {
        self.children.push(child);
        self.children.last_mut().unwrap()
    }

    /// Append a new empty child with the given tag.
    pub fn append_new(&mut self, tag: impl Into<String>) -> &mut Element {
        self.append(Element::new(tag))
    }

    /// First direct child with the given tag.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// All direct children with the given tag.
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        self.children.iter().filter(|c| c.tag == tag).collect()
    }

    /// All elements below this one, in document order.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_descendants(&mut out);
        out
    }

    /// First descendant with the given tag, in document order.
    pub fn find_descendant(&self, tag: &str) -> Option<&Element> {
        self.descendants().into_iter().find(|e| e.tag == tag)
    }

    fn collect_descendants<'a>(&'a self, out: &mut Vec<&'a Element>) {
        for child in &self.children {
            out.push(child);
            child.collect_descendants(out);
        }
    }
}
