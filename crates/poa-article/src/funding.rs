//! Funding awards.

/// An award group within the article's funding information.
#[derive(Debug, Clone, Default)]
pub struct FundingAward {
    /// Funder name as parsed from the source data.
    pub institution_name: Option<String>,

    /// Funder identifier DOI, e.g. "http://dx.doi.org/10.13039/100004440".
    pub institution_id: Option<String>,

    /// Award numbers, in input order.
    pub award_ids: Vec<String>,
}

impl FundingAward {
    pub fn new() -> Self {
        FundingAward::default()
    }

    pub fn add_award_id(&mut self, award_id: impl Into<String>) {
        self.award_ids.push(award_id.into());
    }

    /// The unique funder identifier: the last path segment of the
    /// institution-id DOI, when one is present.
    pub fn funder_identifier(&self) -> Option<&str> {
        self.institution_id
            .as_deref()
            .and_then(|id| id.rsplit('/').next())
            .filter(|segment| !segment.is_empty())
    }
}
