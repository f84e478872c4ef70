//! Canonical form for guesses and municipality names.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for answer comparison.
///
/// Lowercases, decomposes (NFD), drops combining marks, then trims. So
/// `"  São Borja "` and `"sao borja"` compare equal. Internal whitespace is
/// left untouched.
pub fn normalize(s: &str) -> String {
    let stripped: String = s
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    stripped.trim().to_string()
}
