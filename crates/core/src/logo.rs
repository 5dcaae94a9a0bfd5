//! Placeholder logo URLs built from institution initials.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::{LOGO_MAX_INITIALS, LOGO_SERVICE_BASE_URL, LOGO_SERVICE_PARAMS};

/// Everything but alphanumerics and `_ . - ~ /` is escaped.
const INITIALS_ENCODE_SET: &AsciiSet =
    &NON_ALPHANUMERIC.remove(b'_').remove(b'.').remove(b'-').remove(b'~').remove(b'/');

/// First character of each whitespace-separated word, at most
/// [`LOGO_MAX_INITIALS`] of them, uppercased.
#[must_use]
pub fn institution_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(LOGO_MAX_INITIALS)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Avatar-service URL rendering the initials of `name`. No request is made.
#[must_use]
pub fn generate_logo_url(name: &str) -> String {
    let initials = utf8_percent_encode(&institution_initials(name), INITIALS_ENCODE_SET).to_string();
    format!("{LOGO_SERVICE_BASE_URL}?name={initials}&{LOGO_SERVICE_PARAMS}")
}
