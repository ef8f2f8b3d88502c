//! Bibliographic references.
//!
//! References are carried on the model for downstream deposit generation;
//! the archival document itself does not render them.

/// A reference cited by the article.
#[derive(Debug, Clone, Default)]
pub struct Citation {
    /// Publication type, e.g. "journal" or "book".
    pub publication_type: Option<String>,

    /// Author display names, in input order.
    pub authors: Vec<String>,

    /// Title of the cited article.
    pub article_title: Option<String>,

    /// Source (journal) title.
    pub source: Option<String>,

    /// Volume number.
    pub volume: Option<String>,

    /// Volume title (books).
    pub volume_title: Option<String>,

    /// First page.
    pub fpage: Option<String>,

    /// Last page.
    pub lpage: Option<String>,

    /// DOI of the cited work.
    pub doi: Option<String>,

    /// Publication year.
    pub year: Option<i32>,
}

impl Citation {
    pub fn new() -> Self {
        Citation::default()
    }

    pub fn add_author(&mut self, author: impl Into<String>) {
        self.authors.push(author.into());
    }

    /// Alias for the source field.
    pub fn journal_title(&self) -> Option<&str> {
        self.source.as_deref()
    }
}
