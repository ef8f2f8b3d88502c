//! Grafting parsed inline fragments into the output tree.

use crate::error::Result;
use crate::fragment::{FragmentNode, parse_fragment};
use crate::types::Element;

/// Merge a sanitized inline fragment into `parent`.
///
/// Builds `<wrapper_tag>fragment</wrapper_tag>`, parses it as a standalone
/// document, and appends a corresponding `wrapper_tag` child under
/// `parent`. Character data is routed by position: before the first inline
/// element it lands in the new element's `text` slot; after an inline
/// element it lands in that element's `tail` slot. A fragment with N
/// inline elements therefore produces exactly N child elements in order,
/// with all interstitial text distributed across text/tail.
///
/// Returns a mutable reference to the newly created wrapper element.
///
/// # Errors
///
/// Fails if the wrapped fragment does not parse as well-formed XML; the
/// caller is expected to have sanitized the fragment first.
pub fn merge_fragment<'a>(
    parent: &'a mut Element,
    wrapper_tag: &str,
    fragment: &str,
) -> Result<&'a mut Element> {
    let wrapped = format!("<{wrapper_tag}>{fragment}</{wrapper_tag}>");
    let parsed = parse_fragment(&wrapped)?;

    let out = parent.append_new(wrapper_tag);
    graft(&parsed.children, out);
    Ok(out)
}

/// Depth-first copy of fragment nodes under `out`, in document order.
fn graft(nodes: &[FragmentNode], out: &mut Element) {
    for node in nodes {
        match node {
            FragmentNode::Text(text) => match out.children.last_mut() {
                Some(last) => append_to(&mut last.tail, text),
                None => append_to(&mut out.text, text),
            },
            FragmentNode::Element(fragment) => {
                let child = out.append_new(fragment.tag.as_str());
                for (name, value) in &fragment.attributes {
                    child.set_attribute(name.as_str(), value.as_str());
                }
                graft(&fragment.children, child);
            }
        }
    }
}

fn append_to(slot: &mut Option<String>, text: &str) {
    match slot {
        Some(existing) => existing.push_str(text),
        None => *slot = Some(text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_text_only() {
        let mut parent = Element::new("title-group");
        merge_fragment(&mut parent, "article-title", "Plain title").unwrap();

        let title = parent.find("article-title").unwrap();
        assert_eq!(title.text.as_deref(), Some("Plain title"));
        assert!(title.children.is_empty());
    }

    #[test]
    fn test_merge_mixed_content() {
        let mut parent = Element::new("article-meta");
        merge_fragment(&mut parent, "abstract", "pre <italic>mid</italic> post").unwrap();

        let abstract_el = parent.find("abstract").unwrap();
        assert_eq!(abstract_el.text.as_deref(), Some("pre "));
        assert_eq!(abstract_el.children.len(), 1);

        let italic = &abstract_el.children[0];
        assert_eq!(italic.tag, "italic");
        assert_eq!(italic.text.as_deref(), Some("mid"));
        assert_eq!(italic.tail.as_deref(), Some(" post"));
    }

    #[test]
    fn test_merge_multiple_inline_elements() {
        let mut parent = Element::new("title-group");
        merge_fragment(
            &mut parent,
            "article-title",
            "H<sub>2</sub>O and E=mc<sup>2</sup>",
        )
        .unwrap();

        let title = parent.find("article-title").unwrap();
        assert_eq!(title.text.as_deref(), Some("H"));
        assert_eq!(title.children.len(), 2);
        assert_eq!(title.children[0].tag, "sub");
        assert_eq!(title.children[0].text.as_deref(), Some("2"));
        assert_eq!(title.children[0].tail.as_deref(), Some("O and E=mc"));
        assert_eq!(title.children[1].tag, "sup");
        assert_eq!(title.children[1].text.as_deref(), Some("2"));
        assert_eq!(title.children[1].tail, None);
    }

    #[test]
    fn test_merge_nested_inline_elements() {
        let mut parent = Element::new("p");
        merge_fragment(&mut parent, "t", "a<italic>b<sup>c</sup>d</italic>e").unwrap();

        let t = parent.find("t").unwrap();
        assert_eq!(t.text.as_deref(), Some("a"));
        let italic = &t.children[0];
        assert_eq!(italic.text.as_deref(), Some("b"));
        assert_eq!(italic.tail.as_deref(), Some("e"));
        let sup = &italic.children[0];
        assert_eq!(sup.text.as_deref(), Some("c"));
        assert_eq!(sup.tail.as_deref(), Some("d"));
    }

    #[test]
    fn test_merge_empty_fragment() {
        let mut parent = Element::new("article-meta");
        merge_fragment(&mut parent, "abstract", "").unwrap();

        let abstract_el = parent.find("abstract").unwrap();
        assert_eq!(abstract_el.text, None);
        assert!(abstract_el.children.is_empty());
    }

    #[test]
    fn test_merge_malformed_fragment() {
        let mut parent = Element::new("title-group");
        let result = merge_fragment(&mut parent, "article-title", "bad <italic>markup");
        assert!(result.is_err());
    }
}
