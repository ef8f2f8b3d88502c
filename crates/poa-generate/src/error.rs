//! Error types for document generation.

use thiserror::Error;

/// Result type alias for generation operations.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Errors that reject an assembly run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A markup-bearing field failed to parse even after sanitization.
    /// Terminal: malformed markup would corrupt the whole document.
    #[error("malformed markup in {field}: {source}")]
    MalformedFragment {
        /// The offending field ("title" or "abstract").
        field: String,
        #[source]
        source: poa_xml::Error,
    },

    /// The manuscript number is not a positive integer.
    #[error("manuscript number {value:?} is not a positive integer")]
    InvalidManuscriptNumber { value: String },

    /// A contributor carries both a personal name and a collab name.
    #[error("contributor {index} has both a personal name and a collab name")]
    AmbiguousContributorName { index: usize },

    /// A contributor carries neither a complete personal name nor a
    /// collab name.
    #[error("contributor {index} has no usable name")]
    MissingContributorName { index: usize },

    /// The assembled tree failed to serialize.
    #[error("failed to serialize document: {0}")]
    Serialize(#[from] poa_xml::Error),
}
