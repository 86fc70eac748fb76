//! Language code extraction from dictionary filenames.
//!
//! Dictionary packages name their files after the locale they cover, but not
//! always strictly: `en_GB-ise`, `de_AT_frami`, `sr-Latn-BA`. The extractor
//! reads a BCP 47 tag (RFC 5646 §2.1) off the front of such a stem and drops
//! whatever trails it.

use std::sync::LazyLock;

use regex::Regex;

static PRIMARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,3}$").unwrap());
/// ISO 15924 script
static SCRIPT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z][a-z]{3}$").unwrap());
/// ISO 3166-1 alpha-2 or UN M.49 ("US" in en-US, "419" in es-419)
static REGION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:[A-Z]{2}|[0-9]{3})$").unwrap());
/// Registered variants ("rozaj", "biske") or year-style ones ("1901").
/// Any word character except `_`, which is a separator here.
static VARIANT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[^\W_]{5,8}|[0-9]{4})$").unwrap());

const SEPARATORS: [char; 2] = ['-', '_'];

/// Extract the language tag a dictionary stem starts with.
///
/// Subtags may be separated by `-` or `_`; the result always uses `-`.
/// Returns `None` when the stem does not start with a 2–3 letter language
/// subtag.
pub fn extract_code(stem: &str) -> Option<String> {
    let mut subtags = stem.split(SEPARATORS).peekable();

    let primary = subtags.next().filter(|s| PRIMARY.is_match(s))?;
    let mut code = vec![primary];

    if let Some(script) = subtags.next_if(|s| SCRIPT.is_match(s)) {
        code.push(script);
    }
    if let Some(region) = subtags.next_if(|s| REGION.is_match(s)) {
        code.push(region);
    }
    while let Some(variant) = subtags.next_if(|s| VARIANT.is_match(s)) {
        code.push(variant);
    }

    Some(code.join("-"))
}
