//! XML tree construction and serialization for archival article generation.
//!
//! This crate provides the small XML toolkit the document assembler builds
//! on:
//!
//! - [`Element`]: a tree node with ElementTree-style `text`/`tail` slots,
//!   ordered attributes, and ordered children
//! - [`parse_fragment`]: parses a wrapped inline fragment (titles and
//!   abstracts carrying `<italic>`/`<sup>`/`<sub>` markup) into a closed
//!   set of [`FragmentNode`] variants
//! - [`merge_fragment`]: grafts a parsed fragment into a growing output
//!   tree while distributing interstitial text across `text`/`tail` slots
//! - [`Document`]: the serializer, producing compact output with an XML
//!   declaration and a double-quoted DOCTYPE
//!
//! # Text and tail
//!
//! Each element carries two character-data slots: `text` holds the data
//! immediately after the element's open tag and before its first child;
//! `tail` holds the data after the element's close tag and before the next
//! sibling. Mixed content such as `pre <italic>mid</italic> post` becomes
//! one parent with `text = "pre "` and one `italic` child with
//! `text = "mid"` and `tail = " post"`.

pub mod error;
pub mod fragment;
pub mod merge;
pub mod types;
pub mod writer;

pub use error::{Error, Result};
pub use fragment::{FragmentElement, FragmentNode, parse_fragment};
pub use merge::merge_fragment;
pub use types::Element;
pub use writer::{Doctype, Document};
