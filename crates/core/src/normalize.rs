//! Name canonicalization used for identity comparison.

/// Lowercases, trims and strips everything except alphanumerics and
/// whitespace. Interior whitespace is kept as-is.
///
/// Uppercase letters with no lowercase mapping (mathematical bold capitals
/// and the like) are dropped. A name made only of punctuation normalizes to
/// the empty string.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    let kept: String = name
        .trim()
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| (c.is_alphanumeric() && !c.is_uppercase()) || c.is_whitespace())
        .collect();
    kept.trim().to_owned()
}
