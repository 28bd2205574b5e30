//! Logger and file names come from application code and may contain spaces, accents,
//! or path separators. Turning them into slugs keeps every path segment portable.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Substituted wherever a name slugifies to nothing.
pub const DEFAULT_NAME: &str = "default";

/// Longest slug produced. A `<slug>.log.YYYY-MM-DD.N` retired segment name
/// must stay under the common 255-byte file name limit.
pub const MAX_SLUG_LEN: usize = 200;

/// Anything that is not a word character, whitespace, or a hyphen.
static DISALLOWED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("Invalid disallowed-char regex"));

/// Separator runs collapse to a single underscore.
static SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+").expect("Invalid separator regex"));

/// Converts arbitrary text into a lowercase `[a-z0-9_]` identifier.
///
/// The input is decomposed (NFKD) so accented letters keep their base letter,
/// the non-ASCII remainder is dropped, and separator runs become one `_`.
/// The result is cut to [`MAX_SLUG_LEN`] bytes, then leading and trailing
/// underscores are trimmed, which makes the function idempotent. Input with
/// no usable characters yields an empty string.
#[must_use]
pub fn slugify(raw: &str) -> String {
    let ascii: String = raw.nfkd().filter(char::is_ascii).collect();
    let lowered = ascii.to_lowercase();
    let stripped = DISALLOWED_REGEX.replace_all(&lowered, "");
    let collapsed = SEPARATOR_REGEX.replace_all(stripped.trim(), "_");
    let trimmed = collapsed.trim_matches('_');
    // Only ASCII remains, so any byte index is a char boundary.
    let capped = &trimmed[..trimmed.len().min(MAX_SLUG_LEN)];
    capped.trim_matches('_').to_string()
}

/// Slugifies `raw`, substituting [`DEFAULT_NAME`] for absent or empty results so
/// an empty segment never reaches a path.
#[must_use]
pub fn segment_or_default(raw: Option<&str>) -> String {
    raw.map(slugify)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_NAME.to_string())
}
