//! Entity decoding for worksheet text.
//!
//! Workbook parts carry sheet names, shared strings and inline strings with
//! the five standard XML entities escaped. Only the decode direction lives
//! here; output XML is produced by the writer crate, never by hand.

use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

// Leftmost-longest so "&amp;lt;" decodes its leading "&amp;" rather than
// the embedded "&lt;"
static ENTITY_DECODER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
        .expect("static entity patterns are valid")
});

/// Replace the five standard XML entities with their characters.
///
/// Anything that is not one of the five (unknown entities, a bare `&`, an
/// entity missing its semicolon) passes through untouched.
///
/// # Examples
///
/// ```
/// use brieftally::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("Smith &amp; Jones"), "Smith & Jones");
/// assert_eq!(unescape_xml("&quot;Q3 push&quot;"), "\"Q3 push\"");
/// assert_eq!(unescape_xml("P&L report"), "P&L report");
/// assert_eq!(unescape_xml("&amp;lt;"), "&lt;");
/// ```
#[inline]
pub fn unescape_xml(s: &str) -> String {
    ENTITY_DECODER.replace_all(s, &["&", "<", ">", "\"", "'"])
}
