//! The license catalog.
//!
//! Licenses are selected from a small fixed catalog rather than populated
//! field by field, so the exact statement wording lives in one place and
//! catalog growth never touches assembly logic.

/// Identifier of a catalog license.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseId {
    /// Creative Commons Attribution 4.0.
    CcBy,
    /// Creative Commons CC0 public domain dedication.
    Cc0,
}

/// A license and the fixed prose emitted with it.
///
/// The explanatory paragraph is a two-part template: the display name is
/// inserted between `paragraph_prefix` and `paragraph_suffix` as a
/// hyperlink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct License {
    pub id: LicenseId,

    /// License type attribute value, e.g. "open-access".
    pub license_type: String,

    /// Whether a copyright block applies. CC0 dedicates the work to the
    /// public domain, so no copyright statement is emitted for it.
    pub copyright: bool,

    /// License URI, used both as the license link and the ext-link target.
    pub href: String,

    /// Display name inserted into the explanatory paragraph.
    pub name: String,

    /// Paragraph text before the hyperlinked name.
    pub paragraph_prefix: String,

    /// Paragraph text after the hyperlinked name.
    pub paragraph_suffix: String,
}

impl License {
    /// Look up a catalog license by identifier.
    pub fn from_id(id: LicenseId) -> Self {
        match id {
            LicenseId::CcBy => License {
                id,
                license_type: "open-access".to_string(),
                copyright: true,
                href: "http://creativecommons.org/licenses/by/4.0/".to_string(),
                name: "Creative Commons Attribution License".to_string(),
                paragraph_prefix: "This article is distributed under the terms of the "
                    .to_string(),
                paragraph_suffix: " permitting unrestricted use and redistribution provided that \
                                   the original author and source are credited."
                    .to_string(),
            },
            LicenseId::Cc0 => License {
                id,
                license_type: "open-access".to_string(),
                copyright: false,
                href: "http://creativecommons.org/publicdomain/zero/1.0/".to_string(),
                name: "Creative Commons CC0".to_string(),
                paragraph_prefix: "This is an open-access article, free of all copyright, and may \
                                   be freely reproduced, distributed, transmitted, modified, built \
                                   upon, or otherwise used by anyone for any lawful purpose. The \
                                   work is made available under the "
                    .to_string(),
                paragraph_suffix: " public domain dedication.".to_string(),
            },
        }
    }
}
