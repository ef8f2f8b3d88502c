//! Assembly of the archival article document.
//!
//! The assembler walks the article model in a fixed section order and
//! builds a fresh output tree: journal metadata, article metadata,
//! contributor groups, dates/permissions/abstract/keywords, then the
//! back-matter footnote groups. It never mutates the model. Running state
//! (the conflict id assignment) is computed up front and passed down, so
//! every build function is a plain function of its inputs.

use crate::config::{self, JournalConfig};
use crate::conflicts::ConflictIndex;
use crate::error::{GenerateError, Result};
use crate::revision::{RevisionSource, resolve_revision};
use crate::sanitize;
use chrono::{Datelike, Utc};
use poa_article::{Affiliation, Article, Contributor, ContributorRole, DateKind, License};
use poa_xml::{Document, Element, merge_fragment};

/// Per-run inputs that are not part of the article model, kept separate so
/// generation stays a pure function of its arguments.
#[derive(Debug, Clone)]
pub struct GenerationStamp {
    /// Timestamp rendered into the generation comment.
    pub generated_at: String,
    /// Source-control revision rendered into the generation comment.
    pub revision: String,
}

impl GenerationStamp {
    /// Stamp for the current wall-clock time, with the revision resolved
    /// from the given source (or the placeholder on failure).
    pub fn now(source: &dyn RevisionSource) -> Self {
        GenerationStamp {
            generated_at: Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            revision: resolve_revision(source),
        }
    }
}

/// Assemble and serialize the archival document for one article.
pub fn generate_archive_xml(
    article: &Article,
    journal: &JournalConfig,
    stamp: &GenerationStamp,
) -> Result<String> {
    let document = build_document(article, journal, stamp)?;
    Ok(document.serialize()?)
}

/// Build the output tree without serializing it.
///
/// # Errors
///
/// Rejects the run before producing any output when the model is
/// inconsistent (manuscript number not a positive integer, contributor
/// with both or neither name form), or when the title or abstract fails
/// to parse after sanitization.
pub fn build_document(
    article: &Article,
    journal: &JournalConfig,
    stamp: &GenerationStamp,
) -> Result<Document> {
    validate(article)?;
    tracing::debug!(doi = ?article.doi, "assembling archival document");

    let conflicts =
        ConflictIndex::assign(&article.contributors, article.conflict_default.as_deref());

    let mut root = Element::new("article");
    root.set_attribute("article-type", article.article_type.as_str());
    root.set_attribute("xmlns:mml", config::MATHML_NAMESPACE);
    root.set_attribute("xmlns:xlink", config::XLINK_NAMESPACE);
    root.set_attribute("dtd-version", config::DTD_VERSION);

    let front = root.append_new("front");
    build_journal_meta(front, journal);
    build_article_meta(front, article, &conflicts)?;

    let back = root.append_new("back");
    build_back_matter(back, article, &conflicts);

    Ok(Document {
        root,
        doctype: config::archive_doctype(),
        comment: Some(format!(
            "generated by {} at {} from version {}",
            journal.journal_id, stamp.generated_at, stamp.revision
        )),
    })
}

/// Reject inconsistent models before any output is produced.
fn validate(article: &Article) -> Result<()> {
    if let Some(manuscript) = article.manuscript.as_deref() {
        parse_manuscript(manuscript)?;
    }
    for (index, contributor) in article.contributors.iter().enumerate() {
        let has_person = contributor.surname.is_some() || contributor.given_names.is_some();
        if contributor.collab.is_some() && has_person {
            return Err(GenerateError::AmbiguousContributorName { index });
        }
        if contributor.collab.is_none()
            && (contributor.surname.is_none() || contributor.given_names.is_none())
        {
            return Err(GenerateError::MissingContributorName { index });
        }
    }
    Ok(())
}

fn parse_manuscript(raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| GenerateError::InvalidManuscriptNumber {
            value: raw.to_string(),
        })
}

fn build_journal_meta(parent: &mut Element, journal: &JournalConfig) {
    let journal_meta = parent.append_new("journal-meta");

    for id_type in config::JOURNAL_ID_TYPES {
        let text = if id_type == "nlm-ta" {
            journal.journal_id.to_lowercase()
        } else {
            journal.journal_id.clone()
        };
        let journal_id = journal_meta.append(Element::with_text("journal-id", text));
        journal_id.set_attribute("journal-id-type", id_type);
    }

    let title_group = journal_meta.append_new("journal-title-group");
    title_group.append(Element::with_text(
        "journal-title",
        journal.journal_title.as_str(),
    ));

    let issn = journal_meta.append(Element::with_text("issn", journal.epub_issn.as_str()));
    issn.set_attribute("publication-format", "electronic");

    let publisher = journal_meta.append_new("publisher");
    publisher.append(Element::with_text(
        "publisher-name",
        journal.publisher_name.as_str(),
    ));
}

fn build_article_meta(
    parent: &mut Element,
    article: &Article,
    conflicts: &ConflictIndex,
) -> Result<()> {
    let article_meta = parent.append_new("article-meta");

    if let Some(manuscript) = article.manuscript.as_deref() {
        // validated up front; both renderings must agree
        let number = parse_manuscript(manuscript)?;
        let article_id =
            article_meta.append(Element::with_text("article-id", format!("{number:05}")));
        article_id.set_attribute("pub-id-type", "publisher-id");
    }

    if let Some(doi) = article.doi.as_deref() {
        let article_id = article_meta.append(Element::with_text("article-id", doi));
        article_id.set_attribute("pub-id-type", "doi");
    }

    build_article_categories(article_meta, article);

    let title_group = article_meta.append_new("title-group");
    let title = sanitize::sanitize(&article.title);
    merge_fragment(title_group, "article-title", &title).map_err(|source| {
        GenerateError::MalformedFragment {
            field: "title".to_string(),
            source,
        }
    })?;

    for role in [ContributorRole::Author, ContributorRole::Editor] {
        build_contrib_group(article_meta, article, role, conflicts);
    }

    if let Some(date) = article.date(DateKind::Epub) {
        let pub_date = article_meta.append_new("pub-date");
        pub_date.set_attribute("pub-type", DateKind::Epub.as_str());
        pub_date.append(Element::with_text("year", date.year().to_string()));
    }

    if let Some(manuscript) = article.manuscript.as_deref() {
        let number = parse_manuscript(manuscript)?;
        article_meta.append(Element::with_text("elocation-id", format!("e{number:05}")));
    }

    build_history(article_meta, article);

    if let Some(license) = &article.license {
        build_permissions(article_meta, article, license);
    }

    let abstract_body = sanitize::sanitize(&article.abstract_text);
    merge_fragment(article_meta, "abstract", &abstract_body).map_err(|source| {
        GenerateError::MalformedFragment {
            field: "abstract".to_string(),
            source,
        }
    })?;

    if !article.author_keywords.is_empty() {
        build_kwd_group(
            article_meta,
            "author-keywords",
            "Author keywords",
            &article.author_keywords,
        );
    }
    if !article.research_organisms.is_empty() {
        build_kwd_group(
            article_meta,
            "research-organism",
            "Research organism",
            &article.research_organisms,
        );
    }

    Ok(())
}

fn build_article_categories(parent: &mut Element, article: &Article) {
    if article.display_channel.is_none() && article.categories.is_empty() {
        return;
    }
    let categories = parent.append_new("article-categories");

    if let Some(channel) = article.display_channel.as_deref() {
        let group = categories.append_new("subj-group");
        group.set_attribute("subj-group-type", "display-channel");
        group.append(Element::with_text("subject", channel));
    }
    for category in &article.categories {
        let group = categories.append_new("subj-group");
        group.set_attribute("subj-group-type", "heading");
        group.append(Element::with_text("subject", category.as_str()));
    }
}

/// One contributor group per role; the contributor list is iterated once
/// per role and filtered.
fn build_contrib_group(
    parent: &mut Element,
    article: &Article,
    role: ContributorRole,
    conflicts: &ConflictIndex,
) {
    let group = parent.append_new("contrib-group");
    if role == ContributorRole::Editor {
        group.set_attribute("content-type", "section");
    }

    for (index, contributor) in article.contributors.iter().enumerate() {
        if contributor.role != role {
            continue;
        }
        build_contrib(group, contributor, role, conflicts.xref_id(index));
    }
}

fn build_contrib(
    parent: &mut Element,
    contributor: &Contributor,
    role: ContributorRole,
    xref_id: Option<&str>,
) {
    let contrib = parent.append_new("contrib");
    contrib.set_attribute("contrib-type", role.as_str());
    if contributor.corresponding {
        contrib.set_attribute("corresp", "yes");
    }
    if contributor.equal_contribution {
        // underscore spelling is what the downstream consumer expects
        contrib.set_attribute("equal_contrib", "yes");
    }
    if let Some(id) = contributor.author_id.as_deref() {
        contrib.set_attribute("id", format!("author-{id}"));
    }

    if let Some(collab) = contributor.collab.as_deref() {
        contrib.append(Element::with_text("collab", collab));
    } else {
        let name = contrib.append_new("name");
        if let Some(surname) = contributor.surname.as_deref() {
            name.append(Element::with_text("surname", surname));
        }
        if let Some(given) = contributor.given_names.as_deref() {
            name.append(Element::with_text("given-names", given));
        }
    }

    if role == ContributorRole::Editor {
        contrib.append(Element::with_text("role", "Reviewing editor"));
    }

    if let Some(orcid) = contributor.orcid.as_deref() {
        let uri = contrib.append_new("uri");
        uri.set_attribute("content-type", "orcid");
        uri.set_attribute("xlink:href", orcid);
    }

    for affiliation in &contributor.affiliations {
        build_affiliation(contrib, affiliation, role);
    }

    if role != ContributorRole::Editor {
        if let Some(rid) = xref_id {
            let xref = contrib.append_new("xref");
            xref.set_attribute("ref-type", "fn");
            xref.set_attribute("rid", rid);
        }
    }
}

fn build_affiliation(parent: &mut Element, affiliation: &Affiliation, role: ContributorRole) {
    let aff = parent.append_new("aff");

    if role != ContributorRole::Editor {
        if let Some(department) = affiliation.department.as_deref() {
            let dept = aff.append(Element::with_text("institution", department));
            dept.set_attribute("content-type", "dept");
            dept.tail = Some(", ".to_string());
        }
    }

    if let Some(institution) = affiliation.institution.as_deref() {
        let element = aff.append(Element::with_text("institution", institution));
        element.tail = Some(", ".to_string());
    }

    if let Some(city) = affiliation.city.as_deref() {
        let addr_line = aff.append_new("addr-line");
        addr_line.tail = Some(", ".to_string());
        let named = addr_line.append(Element::with_text("named-content", city));
        named.set_attribute("content-type", "city");
    }

    if let Some(country) = affiliation.country.as_deref() {
        aff.append(Element::with_text("country", country));
    }
    if let Some(phone) = affiliation.phone.as_deref() {
        aff.append(Element::with_text("phone", phone));
    }
    if let Some(fax) = affiliation.fax.as_deref() {
        aff.append(Element::with_text("fax", fax));
    }
    if let Some(email) = affiliation.email.as_deref() {
        aff.append(Element::with_text("email", email));
    }
}

fn build_history(parent: &mut Element, article: &Article) {
    if article.dates.is_empty() {
        return;
    }
    let history = parent.append_new("history");

    for kind in [DateKind::Received, DateKind::Accepted] {
        if let Some(date) = article.date(kind) {
            let date_el = history.append_new("date");
            date_el.set_attribute("date-type", kind.as_str());
            date_el.append(Element::with_text("day", format!("{:02}", date.day())));
            date_el.append(Element::with_text("month", format!("{:02}", date.month())));
            date_el.append(Element::with_text("year", date.year().to_string()));
        }
    }
}

fn build_permissions(parent: &mut Element, article: &Article, license: &License) {
    let permissions = parent.append_new("permissions");
    if license.copyright {
        build_copyright(permissions, article);
    }

    let license_el = permissions.append_new("license");
    license_el.set_attribute("xlink:href", license.href.as_str());

    let license_p = license_el.append(Element::with_text(
        "license-p",
        license.paragraph_prefix.as_str(),
    ));
    let ext_link = license_p.append(Element::with_text("ext-link", license.name.as_str()));
    ext_link.set_attribute("ext-link-type", "uri");
    ext_link.set_attribute("xlink:href", license.href.as_str());
    ext_link.tail = Some(license.paragraph_suffix.clone());
}

fn build_copyright(parent: &mut Element, article: &Article) {
    let holder = copyright_holder(&article.contributors);
    let year = article
        .date(DateKind::License)
        .or_else(|| article.date(DateKind::Accepted))
        .map(|date| date.year().to_string())
        .unwrap_or_default();

    let statement = format!("\u{a9} {year}, {holder}");
    parent.append(Element::with_text("copyright-statement", statement));
    parent.append(Element::with_text("copyright-year", year));
    parent.append(Element::with_text("copyright-holder", holder));
}

/// Copyright holder from the non-editor contributor subsequence, in input
/// order. Group contributors carry no surname and are excluded.
fn copyright_holder(contributors: &[Contributor]) -> String {
    let surnames: Vec<&str> = contributors
        .iter()
        .filter(|c| c.role != ContributorRole::Editor)
        .filter_map(|c| c.surname.as_deref())
        .collect();

    match surnames.as_slice() {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, second] => format!("{first} & {second}"),
        [first, ..] => format!("{first} et al"),
    }
}

fn build_kwd_group(parent: &mut Element, group_type: &str, title: &str, keywords: &[String]) {
    let group = parent.append_new("kwd-group");
    group.set_attribute("kwd-group-type", group_type);
    group.append(Element::with_text("title", title));
    for keyword in keywords {
        group.append(Element::with_text("kwd", keyword.as_str()));
    }
}

fn build_back_matter(parent: &mut Element, article: &Article, conflicts: &ConflictIndex) {
    if !conflicts.is_empty() {
        let group = parent.append_new("fn-group");
        group.set_attribute("content-type", "competing-interest");
        group.append(Element::with_text("title", "Competing interest"));
        for footnote in conflicts.footnotes() {
            let fn_el = group.append_new("fn");
            fn_el.set_attribute("fn-type", "conflict");
            fn_el.set_attribute("id", footnote.id.as_str());
            fn_el.append(Element::with_text("p", footnote.paragraph.as_str()));
        }
    }

    if !article.ethics_statements.is_empty() {
        let group = parent.append_new("fn-group");
        group.set_attribute("content-type", "ethics-information");
        group.append(Element::with_text("title", "Ethics"));
        for statement in &article.ethics_statements {
            let fn_el = group.append_new("fn");
            fn_el.set_attribute("fn-type", "other");
            fn_el.append(Element::with_text("p", statement.as_str()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use poa_article::LicenseId;

    fn stamp() -> GenerationStamp {
        GenerationStamp {
            generated_at: "2013-10-03 12:00:00".to_string(),
            revision: "abc123".to_string(),
        }
    }

    fn author(surname: &str, given: &str) -> Contributor {
        Contributor::person(ContributorRole::Author, surname, given)
    }

    #[test]
    fn test_copyright_holder_by_count() {
        assert_eq!(copyright_holder(&[]), "");
        assert_eq!(copyright_holder(&[author("Diaz", "Ana")]), "Diaz");
        assert_eq!(
            copyright_holder(&[author("Diaz", "Ana"), author("Lee", "Bo")]),
            "Diaz & Lee"
        );
        assert_eq!(
            copyright_holder(&[
                author("Diaz", "Ana"),
                author("Lee", "Bo"),
                author("Patel", "Chandra"),
            ]),
            "Diaz et al"
        );
    }

    #[test]
    fn test_copyright_holder_skips_editors_and_groups() {
        let editor = Contributor::person(ContributorRole::Editor, "Kim", "Dana");
        let group = Contributor::group(ContributorRole::Author, "Consortium Q");
        assert_eq!(
            copyright_holder(&[editor, group, author("Diaz", "Ana")]),
            "Diaz"
        );
    }

    #[test]
    fn test_validate_rejects_bad_manuscript_number() {
        let mut article = Article::new("10.7554/eLife.00929", "Title");
        article.manuscript = Some("92x9".to_string());
        let err = build_document(&article, &JournalConfig::default(), &stamp()).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidManuscriptNumber { .. }));
    }

    #[test]
    fn test_validate_rejects_contradictory_names() {
        let mut article = Article::new("10.7554/eLife.00929", "Title");
        let mut contributor = author("Diaz", "Ana");
        contributor.collab = Some("Consortium Q".to_string());
        article.add_contributor(contributor);
        let err = build_document(&article, &JournalConfig::default(), &stamp()).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::AmbiguousContributorName { index: 0 }
        ));
    }

    #[test]
    fn test_validate_rejects_incomplete_personal_name() {
        let mut article = Article::new("10.7554/eLife.00929", "Title");
        let mut contributor = author("Diaz", "Ana");
        contributor.given_names = None;
        article.add_contributor(contributor);
        let err = build_document(&article, &JournalConfig::default(), &stamp()).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::MissingContributorName { index: 0 }
        ));
    }

    #[test]
    fn test_malformed_title_is_terminal_and_named() {
        let mut article = Article::new("10.7554/eLife.00929", "Title");
        // sanitization never produces this; simulate corrupted storage by
        // sneaking a raw unbalanced tag through an allow-listed token
        article.title = "<italic>unclosed".to_string();
        let err = build_document(&article, &JournalConfig::default(), &stamp()).unwrap_err();
        match err {
            GenerateError::MalformedFragment { field, .. } => assert_eq!(field, "title"),
            other => panic!("expected MalformedFragment, got {other:?}"),
        }
    }

    #[test]
    fn test_journal_meta_boilerplate() {
        let article = Article::new("10.7554/eLife.00929", "Title");
        let document = build_document(&article, &JournalConfig::default(), &stamp()).unwrap();

        let journal_meta = document.root.find_descendant("journal-meta").unwrap();
        let ids = journal_meta.find_all("journal-id");
        assert_eq!(ids.len(), 3);
        assert_eq!(ids[0].attribute("journal-id-type"), Some("nlm-ta"));
        assert_eq!(ids[0].text.as_deref(), Some("elife"));
        assert_eq!(ids[1].attribute("journal-id-type"), Some("hwp"));
        assert_eq!(ids[1].text.as_deref(), Some("eLife"));
        assert_eq!(ids[2].attribute("journal-id-type"), Some("publisher-id"));

        let issn = journal_meta.find("issn").unwrap();
        assert_eq!(issn.text.as_deref(), Some("2050-084X"));
        assert_eq!(issn.attribute("publication-format"), Some("electronic"));
        assert_eq!(
            journal_meta
                .find_descendant("publisher-name")
                .unwrap()
                .text
                .as_deref(),
            Some("eLife Sciences Publications, Ltd")
        );
    }

    #[test]
    fn test_root_attributes_and_comment() {
        let article = Article::new("10.7554/eLife.00929", "Title");
        let document = build_document(&article, &JournalConfig::default(), &stamp()).unwrap();

        assert_eq!(
            document.root.attribute("article-type"),
            Some("research-article")
        );
        assert_eq!(
            document.root.attribute("xmlns:mml"),
            Some("http://www.w3.org/1998/Math/MathML")
        );
        assert_eq!(
            document.root.attribute("xmlns:xlink"),
            Some("http://www.w3.org/1999/xlink")
        );
        assert_eq!(document.root.attribute("dtd-version"), Some("1.1d1"));
        assert_eq!(
            document.comment.as_deref(),
            Some("generated by eLife at 2013-10-03 12:00:00 from version abc123")
        );
    }

    #[test]
    fn test_history_dates_zero_padded_in_fixed_order() {
        let mut article = Article::new("10.7554/eLife.00929", "Title");
        article.add_date(
            DateKind::Accepted,
            NaiveDate::from_ymd_opt(2013, 10, 3).unwrap(),
        );
        article.add_date(
            DateKind::Received,
            NaiveDate::from_ymd_opt(2013, 7, 9).unwrap(),
        );
        let document = build_document(&article, &JournalConfig::default(), &stamp()).unwrap();

        let history = document.root.find_descendant("history").unwrap();
        let dates = history.find_all("date");
        assert_eq!(dates.len(), 2);
        assert_eq!(dates[0].attribute("date-type"), Some("received"));
        assert_eq!(dates[0].find("day").unwrap().text.as_deref(), Some("09"));
        assert_eq!(dates[0].find("month").unwrap().text.as_deref(), Some("07"));
        assert_eq!(dates[1].attribute("date-type"), Some("accepted"));
        assert_eq!(dates[1].find("day").unwrap().text.as_deref(), Some("03"));
    }

    #[test]
    fn test_permissions_cc_by() {
        let mut article = Article::new("10.7554/eLife.00929", "Title");
        article.add_contributor(author("Diaz", "Ana"));
        article.license = Some(License::from_id(LicenseId::CcBy));
        article.add_date(
            DateKind::License,
            NaiveDate::from_ymd_opt(2013, 10, 3).unwrap(),
        );
        let document = build_document(&article, &JournalConfig::default(), &stamp()).unwrap();

        let permissions = document.root.find_descendant("permissions").unwrap();
        assert_eq!(
            permissions
                .find("copyright-statement")
                .unwrap()
                .text
                .as_deref(),
            Some("\u{a9} 2013, Diaz")
        );
        assert_eq!(
            permissions.find("copyright-year").unwrap().text.as_deref(),
            Some("2013")
        );

        let license_el = permissions.find("license").unwrap();
        assert_eq!(
            license_el.attribute("xlink:href"),
            Some("http://creativecommons.org/licenses/by/4.0/")
        );
        let license_p = license_el.find("license-p").unwrap();
        assert!(
            license_p
                .text
                .as_deref()
                .unwrap()
                .starts_with("This article is distributed")
        );
        let ext_link = license_p.find("ext-link").unwrap();
        assert_eq!(ext_link.attribute("ext-link-type"), Some("uri"));
        assert_eq!(
            ext_link.text.as_deref(),
            Some("Creative Commons Attribution License")
        );
        assert!(ext_link.tail.as_deref().unwrap().starts_with(" permitting"));
    }

    #[test]
    fn test_permissions_cc0_has_no_copyright_block() {
        let mut article = Article::new("10.7554/eLife.00929", "Title");
        article.license = Some(License::from_id(LicenseId::Cc0));
        let document = build_document(&article, &JournalConfig::default(), &stamp()).unwrap();

        let permissions = document.root.find_descendant("permissions").unwrap();
        assert!(permissions.find("copyright-statement").is_none());
        assert!(permissions.find("license").is_some());
    }

    #[test]
    fn test_copyright_year_falls_back_to_accepted() {
        let mut article = Article::new("10.7554/eLife.00929", "Title");
        article.add_contributor(author("Diaz", "Ana"));
        article.license = Some(License::from_id(LicenseId::CcBy));
        article.add_date(
            DateKind::Accepted,
            NaiveDate::from_ymd_opt(2012, 6, 1).unwrap(),
        );
        let document = build_document(&article, &JournalConfig::default(), &stamp()).unwrap();

        let permissions = document.root.find_descendant("permissions").unwrap();
        assert_eq!(
            permissions.find("copyright-year").unwrap().text.as_deref(),
            Some("2012")
        );
    }

    #[test]
    fn test_editor_contrib_shape() {
        let mut article = Article::new("10.7554/eLife.00929", "Title");
        let mut editor = Contributor::person(ContributorRole::Editor, "Kim", "Dana");
        editor.add_affiliation(Affiliation {
            department: Some("Editorial Department".to_string()),
            institution: Some("eLife".to_string()),
            ..Default::default()
        });
        editor.conflict = Some("advises the sponsor".to_string());
        article.add_contributor(editor);
        let document = build_document(&article, &JournalConfig::default(), &stamp()).unwrap();

        let groups = document.root.find_descendant("article-meta").unwrap();
        let contrib_groups = groups.find_all("contrib-group");
        assert_eq!(contrib_groups.len(), 2);
        assert_eq!(contrib_groups[1].attribute("content-type"), Some("section"));

        let contrib = contrib_groups[1].find("contrib").unwrap();
        assert_eq!(contrib.attribute("contrib-type"), Some("editor"));
        assert_eq!(
            contrib.find("role").unwrap().text.as_deref(),
            Some("Reviewing editor")
        );
        // editors get no department sub-element and no conflict xref
        let aff = contrib.find("aff").unwrap();
        assert_eq!(aff.find_all("institution").len(), 1);
        assert!(contrib.find("xref").is_none());
    }

    #[test]
    fn test_keyword_groups_only_when_populated() {
        let mut article = Article::new("10.7554/eLife.00929", "Title");
        article.add_research_organism("E. coli");
        article.add_research_organism("Mouse");
        let document = build_document(&article, &JournalConfig::default(), &stamp()).unwrap();

        let article_meta = document.root.find_descendant("article-meta").unwrap();
        let groups = article_meta.find_all("kwd-group");
        assert_eq!(groups.len(), 1);
        assert_eq!(
            groups[0].attribute("kwd-group-type"),
            Some("research-organism")
        );
        assert_eq!(
            groups[0].find("title").unwrap().text.as_deref(),
            Some("Research organism")
        );
        assert_eq!(groups[0].find_all("kwd").len(), 2);
    }

    #[test]
    fn test_title_markup_merged_with_text_and_tail() {
        let mut article = Article::new("10.7554/eLife.00929", "Title");
        article.title = "Growth in <i>C. elegans</i> worms".to_string();
        let document = build_document(&article, &JournalConfig::default(), &stamp()).unwrap();

        let title = document.root.find_descendant("article-title").unwrap();
        assert_eq!(title.text.as_deref(), Some("Growth in "));
        assert_eq!(title.children.len(), 1);
        assert_eq!(title.children[0].tag, "italic");
        assert_eq!(title.children[0].text.as_deref(), Some("C. elegans"));
        assert_eq!(title.children[0].tail.as_deref(), Some(" worms"));
    }

    #[test]
    fn test_back_matter_groups_conditional() {
        let mut article = Article::new("10.7554/eLife.00929", "Title");
        let document = build_document(&article, &JournalConfig::default(), &stamp()).unwrap();
        let back = document.root.find("back").unwrap();
        assert!(back.children.is_empty());

        article.add_ethics_statement("Human subjects: approved by the IRB");
        let document = build_document(&article, &JournalConfig::default(), &stamp()).unwrap();
        let back = document.root.find("back").unwrap();
        let group = back.find("fn-group").unwrap();
        assert_eq!(group.attribute("content-type"), Some("ethics-information"));
        assert_eq!(group.find("title").unwrap().text.as_deref(), Some("Ethics"));
        let fn_el = group.find("fn").unwrap();
        assert_eq!(fn_el.attribute("fn-type"), Some("other"));
        assert_eq!(
            fn_el.find("p").unwrap().text.as_deref(),
            Some("Human subjects: approved by the IRB")
        );
    }
}
