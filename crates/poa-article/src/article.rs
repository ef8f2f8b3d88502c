//! The top-level article aggregate.

use crate::citation::Citation;
use crate::contributor::Contributor;
use crate::funding::FundingAward;
use crate::license::License;
use chrono::NaiveDate;
use std::collections::HashMap;

/// The kind of a dated event in the article's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateKind {
    Received,
    Accepted,
    Epub,
    License,
}

impl DateKind {
    /// The `date-type`/`pub-type` value emitted for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            DateKind::Received => "received",
            DateKind::Accepted => "accepted",
            DateKind::Epub => "epub",
            DateKind::License => "license",
        }
    }
}

/// A scholarly article and everything the archival document needs from it.
#[derive(Debug, Clone, Default)]
pub struct Article {
    /// Article type tag, e.g. "research-article".
    pub article_type: String,

    /// DOI, e.g. "10.7554/eLife.00929".
    pub doi: Option<String>,

    /// Manuscript number as received from upstream. Parsed and zero-padded
    /// at assembly time; a value that is not a positive integer rejects
    /// the run.
    pub manuscript: Option<String>,

    /// Title, as a raw markup string (may carry inline tags).
    pub title: String,

    /// Abstract body, as a raw markup string.
    pub abstract_text: String,

    /// Display channel, e.g. "Research article".
    pub display_channel: Option<String>,

    /// Heading category labels, in input order.
    pub categories: Vec<String>,

    /// Contributors, in input order. Order is significant: it drives both
    /// the contributor groups and competing-interest numbering.
    pub contributors: Vec<Contributor>,

    /// Dates keyed by kind; at most one per kind.
    pub dates: HashMap<DateKind, NaiveDate>,

    /// License, if one has been selected.
    pub license: Option<License>,

    /// Ethics statements, in input order.
    pub ethics_statements: Vec<String>,

    /// Author keywords, in input order.
    pub author_keywords: Vec<String>,

    /// Research-organism keywords, in input order.
    pub research_organisms: Vec<String>,

    /// Article-level fallback competing-interest statement.
    pub conflict_default: Option<String>,

    /// Funding awards, in input order.
    pub funding_awards: Vec<FundingAward>,

    /// Bibliographic references, in input order.
    pub references: Vec<Citation>,

    /// Journal volume, when known.
    pub volume: Option<u32>,
}

impl Article {
    /// Create an article with the default "research-article" type.
    pub fn new(doi: impl Into<String>, title: impl Into<String>) -> Self {
        Article {
            article_type: "research-article".to_string(),
            doi: Some(doi.into()),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn add_contributor(&mut self, contributor: Contributor) {
        self.contributors.push(contributor);
    }

    /// Record a date, replacing any earlier date of the same kind.
    pub fn add_date(&mut self, kind: DateKind, date: NaiveDate) {
        self.dates.insert(kind, date);
    }

    /// Look up the date of the given kind.
    pub fn date(&self, kind: DateKind) -> Option<NaiveDate> {
        self.dates.get(&kind).copied()
    }

    pub fn add_article_category(&mut self, category: impl Into<String>) {
        self.categories.push(category.into());
    }

    pub fn add_ethics_statement(&mut self, statement: impl Into<String>) {
        self.ethics_statements.push(statement.into());
    }

    pub fn add_author_keyword(&mut self, keyword: impl Into<String>) {
        self.author_keywords.push(keyword.into());
    }

    pub fn add_research_organism(&mut self, organism: impl Into<String>) {
        self.research_organisms.push(organism.into());
    }

    /// True if any contributor carries an explicit conflict statement.
    pub fn has_contributor_conflict(&self) -> bool {
        self.contributors.iter().any(|c| c.conflict.is_some())
    }
}
