//! Competing-interest footnote numbering.
//!
//! Footnote identifiers (`conf1`, `conf2`, ...) are consumed in two
//! places: each contributor's cross-reference, emitted while the
//! contributor groups are built, and the back-matter footnote list,
//! emitted later. The assignment is computed once here, as a mapping from
//! contributor position to id plus the ordered footnote list, so the two
//! emission sites can never disagree, even if the contributor list were
//! one day filtered or reordered between them.

use poa_article::Contributor;

/// Fallback sentence used for the default footnote whenever explicit
/// per-contributor footnotes accompany it.
pub const SHARED_DEFAULT_STATEMENT: &str =
    "The other authors declare that no competing interests exist.";

/// One back-matter competing-interest footnote, ready to emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictFootnote {
    /// Footnote id, e.g. "conf2".
    pub id: String,
    /// Paragraph text.
    pub paragraph: String,
}

/// The precomputed id assignment for one article.
#[derive(Debug, Clone, Default)]
pub struct ConflictIndex {
    /// Cross-reference target per contributor, parallel to the
    /// contributor list. `None` when the contributor gets no xref.
    xref_ids: Vec<Option<String>>,

    /// Footnotes in emission order: explicit statements first, then the
    /// default footnote (always id "conf1") when one exists.
    footnotes: Vec<ConflictFootnote>,
}

impl ConflictIndex {
    /// Compute the assignment for a contributor list.
    ///
    /// When a default statement exists, `conf1` is reserved for it before
    /// any per-contributor allocation; contributors with an explicit
    /// statement then consume `conf2`, `conf3`, ... in list order, and
    /// contributors without one cross-reference `conf1`. Without a
    /// default, explicit statements start at `conf1` and contributors
    /// without one get no cross-reference.
    pub fn assign(contributors: &[Contributor], default_statement: Option<&str>) -> Self {
        let mut xref_ids = Vec::with_capacity(contributors.len());
        let mut footnotes = Vec::new();
        let mut next = if default_statement.is_some() { 2 } else { 1 };

        for contributor in contributors {
            match &contributor.conflict {
                Some(statement) => {
                    let id = format!("conf{next}");
                    next += 1;
                    footnotes.push(ConflictFootnote {
                        id: id.clone(),
                        paragraph: format!("{}, {}.", contributor.display_name(), statement),
                    });
                    xref_ids.push(Some(id));
                }
                None => xref_ids.push(default_statement.map(|_| "conf1".to_string())),
            }
        }

        if let Some(default) = default_statement {
            // The article-supplied sentence is used verbatim only when it
            // is the lone footnote.
            let paragraph = if footnotes.is_empty() {
                default.to_string()
            } else {
                SHARED_DEFAULT_STATEMENT.to_string()
            };
            footnotes.push(ConflictFootnote {
                id: "conf1".to_string(),
                paragraph,
            });
        }

        ConflictIndex {
            xref_ids,
            footnotes,
        }
    }

    /// Footnote id the contributor at `index` cross-references, if any.
    pub fn xref_id(&self, index: usize) -> Option<&str> {
        self.xref_ids.get(index).and_then(|id| id.as_deref())
    }

    /// Footnotes in emission order.
    pub fn footnotes(&self) -> &[ConflictFootnote] {
        &self.footnotes
    }

    /// True when there is nothing to emit: no explicit statements and no
    /// default.
    pub fn is_empty(&self) -> bool {
        self.footnotes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poa_article::ContributorRole;

    fn author(surname: &str, given: &str, conflict: Option<&str>) -> Contributor {
        let mut contributor = Contributor::person(ContributorRole::Author, surname, given);
        contributor.conflict = conflict.map(str::to_string);
        contributor
    }

    #[test]
    fn test_default_reserves_conf1_and_substitutes() {
        // [A: no conflict, B: explicit, C: no conflict] with a default
        let contributors = vec![
            author("Diaz", "Ana", None),
            author("Lee", "Bo", Some("funded by X")),
            author("Patel", "Chandra", None),
        ];
        let index = ConflictIndex::assign(
            &contributors,
            Some("The authors declare that no competing interests exist."),
        );

        assert_eq!(index.xref_id(0), Some("conf1"));
        assert_eq!(index.xref_id(1), Some("conf2"));
        assert_eq!(index.xref_id(2), Some("conf1"));

        let footnotes = index.footnotes();
        assert_eq!(footnotes.len(), 2);
        assert_eq!(footnotes[0].id, "conf2");
        assert_eq!(footnotes[0].paragraph, "Bo Lee, funded by X.");
        assert_eq!(footnotes[1].id, "conf1");
        // more than one footnote: the default sentence is substituted
        assert_eq!(footnotes[1].paragraph, SHARED_DEFAULT_STATEMENT);
    }

    #[test]
    fn test_single_explicit_conflict_no_default() {
        let contributors = vec![author("Diaz", "Ana", Some("is employed by the funder"))];
        let index = ConflictIndex::assign(&contributors, None);

        assert_eq!(index.xref_id(0), Some("conf1"));
        let footnotes = index.footnotes();
        assert_eq!(footnotes.len(), 1);
        assert_eq!(footnotes[0].id, "conf1");
        assert_eq!(footnotes[0].paragraph, "Ana Diaz, is employed by the funder.");
    }

    #[test]
    fn test_default_only_uses_supplied_sentence_verbatim() {
        let contributors = vec![author("Diaz", "Ana", None), author("Lee", "Bo", None)];
        let index = ConflictIndex::assign(&contributors, Some("No competing interests."));

        let footnotes = index.footnotes();
        assert_eq!(footnotes.len(), 1);
        assert_eq!(footnotes[0].id, "conf1");
        assert_eq!(footnotes[0].paragraph, "No competing interests.");
        assert_eq!(index.xref_id(0), Some("conf1"));
        assert_eq!(index.xref_id(1), Some("conf1"));
    }

    #[test]
    fn test_no_conflicts_no_default_is_empty() {
        let contributors = vec![author("Diaz", "Ana", None)];
        let index = ConflictIndex::assign(&contributors, None);
        assert!(index.is_empty());
        assert_eq!(index.xref_id(0), None);
    }

    #[test]
    fn test_sequential_ids_continue_past_reserved_slot() {
        let contributors = vec![
            author("Diaz", "Ana", Some("holds shares")),
            author("Lee", "Bo", Some("funded by X")),
        ];
        let index = ConflictIndex::assign(&contributors, Some("default"));

        assert_eq!(index.xref_id(0), Some("conf2"));
        assert_eq!(index.xref_id(1), Some("conf3"));
        let ids: Vec<&str> = index.footnotes().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["conf2", "conf3", "conf1"]);
    }

    #[test]
    fn test_group_contributor_uses_collab_name() {
        let mut group = Contributor::group(ContributorRole::Author, "Consortium Q");
        group.conflict = Some("provided equipment".to_string());
        let index = ConflictIndex::assign(&[group], None);
        assert_eq!(
            index.footnotes()[0].paragraph,
            "Consortium Q, provided equipment."
        );
    }

    #[test]
    fn test_both_passes_share_one_assignment() {
        // An editor with a conflict consumes an id like anyone else, and
        // the xref side sees the same numbering as the footnote side.
        let mut editor = Contributor::person(ContributorRole::Editor, "Kim", "Dana");
        editor.conflict = Some("advises the sponsor".to_string());
        let contributors = vec![editor, author("Diaz", "Ana", Some("holds shares"))];
        let index = ConflictIndex::assign(&contributors, None);

        assert_eq!(index.xref_id(0), Some("conf1"));
        assert_eq!(index.xref_id(1), Some("conf2"));
        let ids: Vec<&str> = index.footnotes().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["conf1", "conf2"]);
    }
}
