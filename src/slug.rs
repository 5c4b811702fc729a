//! Slug minting shared by every entity kind.
//!
//! One slug function serves Address, Street, Neighborhood, Section, and
//! Parcel identifiers so the slugging rules cannot drift apart: ASCII
//! transliteration, spaces to hyphens, periods stripped, lowercased.

use std::sync::OnceLock;

use deunicode::deunicode;
use regex::Regex;

/// Converts a display string into an identifier fragment.
///
/// # Examples
///
/// ```
/// use concordans::slugify;
///
/// assert_eq!(slugify("Kalverstraat 10"), "kalverstraat-10");
/// assert_eq!(slugify("St. Jorisstraat"), "st-jorisstraat");
/// assert_eq!(slugify("Geldersekade Oostzĳde"), "geldersekade-oostzijde");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    deunicode(text).replace(' ', "-").replace('.', "").to_lowercase()
}

/// Mints a slug from multiple parts, skipping absent ones.
///
/// Parts are hyphen-joined before slugging, matching how parcel
/// identifiers combine section, number, and suffix.
#[must_use]
pub fn mint_slug<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let joined = parts.into_iter().collect::<Vec<_>>().join("-");
    slugify(&joined)
}

/// Strips a leading `buurt-` or `sectie-` token from a slug.
///
/// The BUURT/SECTIE tokens exist only to keep neighborhood-only and
/// section-only grouping labels from colliding with street labels; the
/// minted identifier drops them while the grouping key keeps them.
#[must_use]
pub fn strip_slug_prefix(slug: &str) -> &str {
    static PREFIX: OnceLock<Regex> = OnceLock::new();
    let re = PREFIX.get_or_init(|| Regex::new(r"^(?:buurt-|sectie-)").expect("valid regex"));
    match re.find(slug) {
        Some(m) => &slug[m.end()..],
        None => slug,
    }
}

/// Strips the literal `BUURT ` / `SECTIE ` tokens from a display label.
#[must_use]
pub fn strip_display_prefix(label: &str) -> String {
    label.replace("BUURT ", "").replace("SECTIE ", "")
}
