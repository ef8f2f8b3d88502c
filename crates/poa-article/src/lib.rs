//! In-memory article object model.
//!
//! The model is constructed once by the caller (typically from an upstream
//! submission feed), stays immutable for the duration of one assembly run,
//! and owns everything by value: the [`Article`] owns its contributors,
//! dates, and license; each [`Contributor`] owns its affiliations.
//!
//! The generator never mutates the model; it only reads it and produces
//! an independent output tree.

pub mod article;
pub mod citation;
pub mod contributor;
pub mod funding;
pub mod license;

pub use article::{Article, DateKind};
pub use citation::Citation;
pub use contributor::{Affiliation, Contributor, ContributorRole};
pub use funding::FundingAward;
pub use license::{License, LicenseId};
