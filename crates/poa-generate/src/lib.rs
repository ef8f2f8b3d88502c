//! Archival JATS document generation.
//!
//! This crate assembles a schema-exact archival XML document for one
//! scholarly article. Generation is a pure function of three inputs: the
//! article object model, a source-control revision string, and a
//! timestamp. One invocation emits exactly one document; there is no
//! shared state between runs.
//!
//! # Example
//!
//! ```rust
//! use poa_article::{Article, Contributor, ContributorRole};
//! use poa_generate::{generate_archive_xml, GenerationStamp, JournalConfig};
//!
//! let mut article = Article::new("10.7554/eLife.00929", "The Test Title");
//! article.add_contributor(Contributor::person(
//!     ContributorRole::Author,
//!     "Harrison",
//!     "Melissa",
//! ));
//!
//! let stamp = GenerationStamp {
//!     generated_at: "2013-10-03 12:00:00".to_string(),
//!     revision: "abc123".to_string(),
//! };
//! let xml = generate_archive_xml(&article, &JournalConfig::default(), &stamp).unwrap();
//! assert!(xml.starts_with("<?xml"));
//! ```
//!
//! # Error behavior
//!
//! Missing optional data (dates, license, keywords, categories) is never
//! an error; the corresponding section is omitted. A title or abstract
//! that still fails to parse after sanitization, or an inconsistent model
//! (bad manuscript number, contradictory contributor names), rejects the
//! run before any output is produced. A failed revision lookup only
//! degrades the generation comment.

pub mod config;
pub mod conflicts;
pub mod error;
pub mod generator;
pub mod revision;
pub mod sanitize;

pub use config::JournalConfig;
pub use conflicts::ConflictIndex;
pub use error::{GenerateError, Result};
pub use generator::{GenerationStamp, build_document, generate_archive_xml};
pub use revision::{GitRevisionSource, RevisionSource, resolve_revision};
