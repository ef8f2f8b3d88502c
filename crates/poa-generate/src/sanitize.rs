//! Text sanitization applied to markup-bearing fields.
//!
//! Titles and abstracts arrive from upstream storage with HTML-era
//! artifacts: numeric character references, out-of-band bracket escapes,
//! presentation tags, raw ampersands, and the occasional stray angle
//! bracket typed as prose. [`sanitize`] runs a fixed-order pipeline that
//! leaves the text well-formed enough that wrapping it in one enclosing
//! tag pair always parses as standalone XML, which is the precondition
//! for the fragment merge step.
//!
//! The stage order is significant and must not be reordered: entity
//! decoding has to precede ampersand escaping, and tag renaming has to
//! precede the allow-list check.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Numeric character references of the form `&#xHHHH;` (four hex digits,
/// as the upstream feed emits them).
static NUMERIC_ENTITY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&#x(....);").unwrap());

/// Anything that looks like a tag, minimally matched.
static GENERIC_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.*?>").unwrap());

/// An ampersand already starting an entity reference: numeric, or a short
/// named reference such as `&amp;`.
static ENTITY_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^&(#|[a-zA-Z][a-zA-Z0-9]{1,7};)").unwrap());

/// Tag tokens that survive escaping. `<i>` never reaches this stage in
/// renamed text but is tolerated for robustness.
const ALLOWED_TAGS: [&str; 8] = [
    "<i>", "</i>", "<italic>", "</italic>", "<sup>", "</sup>", "<sub>", "</sub>",
];

/// Out-of-band escape sequences used when the source text encodes angle
/// brackets to survive an earlier storage step.
#[derive(Debug, Clone)]
pub struct BracketEscapes {
    pub less_than: String,
    pub greater_than: String,
}

impl Default for BracketEscapes {
    fn default() -> Self {
        BracketEscapes {
            less_than: "&lt;".to_string(),
            greater_than: "&gt;".to_string(),
        }
    }
}

/// Run the full sanitization pipeline with the default bracket escapes.
pub fn sanitize(raw: &str) -> String {
    sanitize_with(raw, &BracketEscapes::default())
}

/// Run the full sanitization pipeline.
pub fn sanitize_with(raw: &str, escapes: &BracketEscapes) -> String {
    let s = decode_numeric_entities(raw);
    let s = decode_brackets(&s, escapes);
    let s = rename_tags(&s);
    let s = escape_ampersands(&s);
    escape_unmatched_angle_brackets(&s)
}

/// Stage 1: decode `&#xHHHH;` references into literal characters.
///
/// This is a plain regex-driven decode, not a full entity table; a
/// reference that does not decode to a valid character is left alone.
pub fn decode_numeric_entities(s: &str) -> String {
    NUMERIC_ENTITY
        .replace_all(s, |caps: &Captures<'_>| {
            match u32::from_str_radix(&caps[1], 16)
                .ok()
                .and_then(char::from_u32)
            {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Stage 2: replace the out-of-band bracket escape sequences with literal
/// angle brackets.
pub fn decode_brackets(s: &str, escapes: &BracketEscapes) -> String {
    s.replace(&escapes.less_than, "<")
        .replace(&escapes.greater_than, ">")
}

/// Stage 3: rename presentation tags. `<i>` becomes `<italic>`; `<sup>`
/// and `<sub>` pass through. This does not validate markup.
pub fn rename_tags(s: &str) -> String {
    s.replace("<i>", "<italic>").replace("</i>", "</italic>")
}

/// Stage 4: escape ampersands that do not start an entity reference.
///
/// Idempotent for text whose ampersands are already in entity form:
/// `&amp;` and `&#x00e9;` pass through untouched.
pub fn escape_ampersands(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if ENTITY_START.is_match(tail) {
            out.push('&');
        } else {
            out.push_str("&amp;");
        }
        rest = &tail[1..];
    }
    out.push_str(rest);
    out
}

/// Stage 5: escape angle brackets that do not form an allow-listed tag.
///
/// The text is split on anything tag-shaped. A piece with balanced
/// bracket counts that is not an allow-listed tag token has all its
/// brackets escaped. An unbalanced piece has brackets escaped one at a
/// time until the counts agree, `<` before `>` while any remain, which
/// tolerates stray single brackets typed as prose and fully escapes a
/// piece where `>` outnumbers `<`.
pub fn escape_unmatched_angle_brackets(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last = 0;
    for m in GENERIC_TAG.find_iter(s) {
        if m.start() > last {
            escape_piece(&s[last..m.start()], &mut out);
        }
        escape_piece(m.as_str(), &mut out);
        last = m.end();
    }
    if last < s.len() {
        escape_piece(&s[last..], &mut out);
    }
    out
}

fn escape_piece(piece: &str, out: &mut String) {
    let lt = piece.matches('<').count();
    let gt = piece.matches('>').count();

    if lt == gt {
        if ALLOWED_TAGS.contains(&piece) {
            out.push_str(piece);
        } else {
            out.push_str(&piece.replace('<', "&lt;").replace('>', "&gt;"));
        }
        return;
    }

    let (mut lt, mut gt) = (lt, gt);
    let mut val = piece.to_string();
    while lt != gt {
        if lt > 0 {
            val = val.replacen('<', "&lt;", 1);
            lt -= 1;
        } else {
            val = val.replacen('>', "&gt;", 1);
            gt -= 1;
        }
    }
    out.push_str(&val);
}
