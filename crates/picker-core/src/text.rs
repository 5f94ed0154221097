// crates/picker-core/src/text.rs
use serde::{Deserialize, Serialize};

/// Section title used for names that have no first character.
pub const EMPTY_NAME_SECTION: &str = "#";

/// How search queries are compared against country names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseMode {
    /// The bucket key is the uppercased first character of the query, but the
    /// prefix itself is matched exactly as typed: `"ca"` finds nothing.
    #[default]
    Exact,
    /// Bucket key and prefix are both compared after [`fold_key`]:
    /// `"ca"`, `"CA"` and `"Ča"` all find "Canada".
    Folded,
}

/// Convert a string into a folded key suitable for comparison.
///
/// Transliterates Unicode to ASCII with `deunicode` (`Åland` -> `Aland`)
/// and lowercases the result.
///
/// ```rust
/// use picker_core::text::fold_key;
///
/// assert_eq!(fold_key("Åland Islands"), "aland islands");
/// assert_eq!(fold_key("Côte d'Ivoire"), "cote d'ivoire");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after [`fold_key`].
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Section key for a name: its first character, uppercased.
///
/// Uppercasing can expand to several characters (`ß` -> `SS`), so the key is
/// a `String`. Empty names map to [`EMPTY_NAME_SECTION`].
pub fn section_key(name: &str) -> String {
    match name.chars().next() {
        Some(c) => c.to_uppercase().collect(),
        None => EMPTY_NAME_SECTION.to_string(),
    }
}

/// Prefix match of `name` against `query` under the given [`CaseMode`].
pub fn has_prefix(name: &str, query: &str, mode: CaseMode) -> bool {
    match mode {
        CaseMode::Exact => name.starts_with(query),
        CaseMode::Folded => fold_key(name).starts_with(&fold_key(query)),
    }
}
