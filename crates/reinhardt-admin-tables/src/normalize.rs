//! Accent- and case-insensitive text normalization
//!
//! Both the text filter and the text sort key go through [`normalize_text`],
//! so "José", "JOSE " and "jose" all compare equal.

use unicode_normalization::UnicodeNormalization;

/// Lowercases, strips diacritics and trims the given text
///
/// The text is decomposed (NFD) and combining diacritical marks
/// (U+0300..U+036F) are dropped before lowercasing.
///
/// # Example
///
/// ```
/// use reinhardt_admin_tables::normalize_text;
///
/// assert_eq!(normalize_text("  Peñarol Ñandú "), "penarol nandu");
/// assert_eq!(normalize_text(""), "");
/// ```
pub fn normalize_text(value: impl AsRef<str>) -> String {
	let stripped: String = value
		.as_ref()
		.nfd()
		.filter(|c| !is_combining_mark(*c))
		.collect();
	stripped
		.to_lowercase()
		.trim_matches(is_trimmed)
		.to_string()
}

/// Whitespace as JavaScript's `String.prototype.trim` sees it, which includes U+FEFF
fn is_trimmed(c: char) -> bool {
	c.is_whitespace() || c == '\u{feff}'
}

fn is_combining_mark(c: char) -> bool {
	('\u{0300}'..='\u{036F}').contains(&c)
}
