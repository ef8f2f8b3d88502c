//! Compact document serialization with an exact DOCTYPE declaration.
//!
//! Output is deliberately not pretty-printed: indentation inside mixed
//! content changes the character data the downstream archival system
//! receives, so the document is emitted in one compact run.

use crate::error::{Error, Result};
use crate::types::Element;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

/// DOCTYPE identity of the output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctype {
    /// Document element name.
    pub name: String,
    /// Public identifier.
    pub public_id: String,
    /// System identifier.
    pub system_id: String,
}

impl Doctype {
    /// Render the DOCTYPE body. Identifiers are always double-quoted,
    /// which the downstream DTD tooling requires.
    fn body(&self) -> String {
        format!(
            r#"{} PUBLIC "{}" "{}""#,
            self.name, self.public_id, self.system_id
        )
    }
}

/// A complete output document.
///
/// The generation comment is emitted as the first child of the root
/// element, before any other content.
#[derive(Debug, Clone)]
pub struct Document {
    /// Root element.
    pub root: Element,
    /// DOCTYPE declaration.
    pub doctype: Doctype,
    /// Generation comment, if any.
    pub comment: Option<String>,
}

impl Document {
    /// Serialize to compact XML with an XML declaration and DOCTYPE.
    pub fn serialize(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::new());

        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
            .map_err(write_error)?;
        writer
            .write_event(Event::DocType(BytesText::from_escaped(self.doctype.body())))
            .map_err(write_error)?;

        write_element(&mut writer, &self.root, self.comment.as_deref())?;

        String::from_utf8(writer.into_inner()).map_err(|_| Error::Write {
            message: "serialized document was not valid UTF-8".to_string(),
        })
    }
}

fn write_element(
    writer: &mut Writer<Vec<u8>>,
    element: &Element,
    leading_comment: Option<&str>,
) -> Result<()> {
    let mut start = BytesStart::new(element.tag.as_str());
    for (name, value) in &element.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    let text = element.text.as_deref().filter(|t| !t.is_empty());
    let empty = text.is_none() && element.children.is_empty() && leading_comment.is_none();

    if empty {
        writer
            .write_event(Event::Empty(start))
            .map_err(write_error)?;
    } else {
        writer
            .write_event(Event::Start(start))
            .map_err(write_error)?;
        if let Some(comment) = leading_comment {
            writer
                .write_event(Event::Comment(BytesText::from_escaped(comment)))
                .map_err(write_error)?;
        }
        if let Some(text) = text {
            writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(write_error)?;
        }
        for child in &element.children {
            write_element(writer, child, None)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new(element.tag.as_str())))
            .map_err(write_error)?;
    }

    if let Some(tail) = element.tail.as_deref() {
        writer
            .write_event(Event::Text(BytesText::new(tail)))
            .map_err(write_error)?;
    }

    Ok(())
}

fn write_error(err: impl std::fmt::Display) -> Error {
    Error::Write {
        message: err.to_string(),
    }
}
