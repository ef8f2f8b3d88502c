//! Error types for fragment parsing and document serialization.

use thiserror::Error;

/// Result type alias for poa-xml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing fragments or writing documents.
#[derive(Debug, Error)]
pub enum Error {
    /// The fragment is not well-formed XML.
    #[error("XML syntax error: {message}")]
    Syntax { message: String },

    /// The fragment contained no root element.
    #[error("fragment contains no root element")]
    EmptyFragment,

    /// The fragment contained more than one root element.
    #[error("fragment contains more than one root element")]
    MultipleRoots,

    /// Serialization failed.
    #[error("failed to write XML: {message}")]
    Write { message: String },
}
