//! Journal boilerplate and archival DTD identity.
//!
//! These values are configuration data, not logic: adding a journal or
//! bumping the DTD version should never touch the assembler.

use poa_xml::Doctype;

/// The three `journal-id-type` labels emitted, in order. The nlm-ta id is
/// the lowercased journal id; the others use it verbatim.
pub const JOURNAL_ID_TYPES: [&str; 3] = ["nlm-ta", "hwp", "publisher-id"];

/// DTD version attribute on the root element.
pub const DTD_VERSION: &str = "1.1d1";

/// Namespace for embedded math markup.
pub const MATHML_NAMESPACE: &str = "http://www.w3.org/1998/Math/MathML";

/// Namespace for hyperlink attributes.
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

/// Fixed journal metadata emitted into every document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalConfig {
    /// Journal id used for all three journal-id entries.
    pub journal_id: String,
    /// Journal title.
    pub journal_title: String,
    /// Electronic ISSN.
    pub epub_issn: String,
    /// Publisher name.
    pub publisher_name: String,
}

impl JournalConfig {
    /// eLife production values.
    pub fn elife() -> Self {
        JournalConfig {
            journal_id: "eLife".to_string(),
            journal_title: "eLife".to_string(),
            epub_issn: "2050-084X".to_string(),
            publisher_name: "eLife Sciences Publications, Ltd".to_string(),
        }
    }
}

impl Default for JournalConfig {
    fn default() -> Self {
        JournalConfig::elife()
    }
}

/// DOCTYPE naming the archival JATS DTD the output must conform to.
pub fn archive_doctype() -> Doctype {
    Doctype {
        name: "article".to_string(),
        public_id: "-//NLM//DTD JATS (Z39.96) Journal Archiving and Interchange DTD v1.1d1 \
                    20130915//EN"
            .to_string(),
        system_id: "JATS-archivearticle1.dtd".to_string(),
    }
}
