//! Contributors and their affiliations.

/// The role a contributor plays on the article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContributorRole {
    Author,
    Editor,
}

impl ContributorRole {
    /// The `contrib-type` value emitted for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContributorRole::Author => "author",
            ContributorRole::Editor => "editor",
        }
    }
}

/// An author or reviewing editor.
///
/// Exactly one of {personal name, collab name} must be set; the generator
/// rejects the run otherwise. Both are kept as plain optional fields here
/// because upstream feeds deliver them that way, and an inconsistent
/// combination must surface as a descriptive error rather than a panic.
#[derive(Debug, Clone)]
pub struct Contributor {
    pub role: ContributorRole,

    /// Family name (personal contributors).
    pub surname: Option<String>,

    /// Given names (personal contributors).
    pub given_names: Option<String>,

    /// Collaborative/group name (group contributors).
    pub collab: Option<String>,

    /// Corresponding-author flag.
    pub corresponding: bool,

    /// Equal-contribution flag.
    pub equal_contribution: bool,

    /// Stable author identifier, when upstream provides one.
    pub author_id: Option<String>,

    /// ORCID URI.
    pub orcid: Option<String>,

    /// Explicit competing-interest statement.
    pub conflict: Option<String>,

    /// Affiliations, in input order. Owned by this contributor; there is
    /// no sharing between contributors.
    pub affiliations: Vec<Affiliation>,
}

impl Contributor {
    /// Create a personal contributor.
    pub fn person(
        role: ContributorRole,
        surname: impl Into<String>,
        given_names: impl Into<String>,
    ) -> Self {
        Contributor {
            role,
            surname: Some(surname.into()),
            given_names: Some(given_names.into()),
            collab: None,
            corresponding: false,
            equal_contribution: false,
            author_id: None,
            orcid: None,
            conflict: None,
            affiliations: Vec::new(),
        }
    }

    /// Create a collaborative (group) contributor.
    pub fn group(role: ContributorRole, collab: impl Into<String>) -> Self {
        Contributor {
            role,
            surname: None,
            given_names: None,
            collab: Some(collab.into()),
            corresponding: false,
            equal_contribution: false,
            author_id: None,
            orcid: None,
            conflict: None,
            affiliations: Vec::new(),
        }
    }

    pub fn add_affiliation(&mut self, affiliation: Affiliation) {
        self.affiliations.push(affiliation);
    }

    pub fn is_group(&self) -> bool {
        self.collab.is_some()
    }

    /// Name used in prose contexts such as footnote paragraphs.
    pub fn display_name(&self) -> String {
        if let Some(collab) = &self.collab {
            return collab.clone();
        }
        match (&self.given_names, &self.surname) {
            (Some(given), Some(surname)) => format!("{given} {surname}"),
            (Some(given), None) => given.clone(),
            (None, Some(surname)) => surname.clone(),
            (None, None) => String::new(),
        }
    }
}

/// A contributor's affiliation. All fields optional; absent fields are
/// simply omitted from the output.
#[derive(Debug, Clone, Default)]
pub struct Affiliation {
    pub department: Option<String>,
    pub institution: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub email: Option<String>,
}
