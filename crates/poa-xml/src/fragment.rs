//! Parser for wrapped inline fragments.
//!
//! Titles and abstracts arrive as short markup strings carrying a
//! restricted inline tag set. After sanitization they are wrapped in a
//! single enclosing tag and parsed here into a closed set of node
//! variants, which is all the merge step needs; no generic DOM.

use crate::error::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// An element inside a parsed fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentElement {
    /// Tag name.
    pub tag: String,
    /// Attributes in document order.
    pub attributes: Vec<(String, String)>,
    /// Mixed content in document order.
    pub children: Vec<FragmentNode>,
}

/// A node in a parsed fragment: an element or a run of character data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentNode {
    Element(FragmentElement),
    Text(String),
}

/// Parse a wrapped fragment into its single root element.
///
/// Text is not trimmed: interstitial whitespace in mixed content is
/// significant and must survive into the output tree.
///
/// # Errors
///
/// Returns [`Error::Syntax`] if the input is not well-formed,
/// [`Error::EmptyFragment`] if it contains no element, and
/// [`Error::MultipleRoots`] if it contains more than one root element.
pub fn parse_fragment(content: &str) -> Result<FragmentElement> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text_start = false;
    reader.config_mut().trim_text_end = false;

    let mut stack: Vec<FragmentElement> = Vec::new();
    let mut root: Option<FragmentElement> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                stack.push(FragmentElement {
                    tag: element_name(&e),
                    attributes: read_attributes(&e)?,
                    children: Vec::new(),
                });
            }
            Ok(Event::End(_)) => {
                let element = stack.pop().ok_or_else(|| Error::Syntax {
                    message: "closing tag without matching open tag".to_string(),
                })?;
                place(element, &mut stack, &mut root)?;
            }
            Ok(Event::Empty(e)) => {
                let element = FragmentElement {
                    tag: element_name(&e),
                    attributes: read_attributes(&e)?,
                    children: Vec::new(),
                };
                place(element, &mut stack, &mut root)?;
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape().map_err(syntax_error)?;
                push_text(&mut stack, &text);
            }
            Ok(Event::CData(e)) => {
                let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                push_text(&mut stack, &text);
            }
            Ok(Event::Comment(_) | Event::PI(_) | Event::Decl(_) | Event::DocType(_)) => {}
            Ok(Event::Eof) => break,
            Err(e) => return Err(syntax_error(e)),
        }
    }

    if let Some(unclosed) = stack.last() {
        return Err(Error::Syntax {
            message: format!("unclosed element <{}>", unclosed.tag),
        });
    }

    root.ok_or(Error::EmptyFragment)
}

fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

fn read_attributes(e: &BytesStart<'_>) -> Result<Vec<(String, String)>> {
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(syntax_error)?;
        let name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value().map_err(syntax_error)?.into_owned();
        attributes.push((name, value));
    }
    Ok(attributes)
}

/// Attach a completed element to its parent, or make it the root.
fn place(
    element: FragmentElement,
    stack: &mut [FragmentElement],
    root: &mut Option<FragmentElement>,
) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(FragmentNode::Element(element)),
        None => {
            if root.is_some() {
                return Err(Error::MultipleRoots);
            }
            *root = Some(element);
        }
    }
    Ok(())
}

/// Append character data to the innermost open element.
///
/// Adjacent text runs are coalesced; text outside the root element is
/// whitespace at most and is dropped.
fn push_text(stack: &mut [FragmentElement], text: &str) {
    if let Some(parent) = stack.last_mut() {
        if let Some(FragmentNode::Text(existing)) = parent.children.last_mut() {
            existing.push_str(text);
        } else {
            parent.children.push(FragmentNode::Text(text.to_string()));
        }
    }
}

fn syntax_error(err: impl std::fmt::Display) -> Error {
    Error::Syntax {
        message: err.to_string(),
    }
}
