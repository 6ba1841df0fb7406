//! Boolean cell classification
//!
//! Admin list views render booleans as words ("Sí", "Activa", "No") or as
//! `1`/`0`. A [`BooleanVocabulary`] maps those tokens to a canonical value so
//! that boolean filters and boolean sort keys work regardless of wording.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use serde::Deserialize;

use crate::normalize::normalize_text;

/// Tokens classified as true by the default vocabulary (already normalized)
pub const DEFAULT_TRUTHY: &[&str] = &["si", "true", "1", "activo", "activa"];

/// Tokens classified as false by the default vocabulary (already normalized)
pub const DEFAULT_FALSY: &[&str] = &["no", "false", "0", "inactivo", "inactiva"];

static DEFAULT_VOCABULARY: LazyLock<BooleanVocabulary> = LazyLock::new(BooleanVocabulary::default);

/// Classification of a cell's text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BooleanValue {
	/// The text is a truthy token
	True,
	/// The text is a falsy token
	False,
	/// Anything else, carried as normalized text
	Unrecognized(String),
}

impl BooleanValue {
	/// Canonical string form: `"true"`, `"false"` or the normalized text
	pub fn as_str(&self) -> &str {
		match self {
			Self::True => "true",
			Self::False => "false",
			Self::Unrecognized(text) => text,
		}
	}

	/// Returns true only for [`BooleanValue::True`]
	pub fn is_true(&self) -> bool {
		matches!(self, Self::True)
	}
}

/// Fixed sets of truthy and falsy tokens
///
/// Tokens are normalized on construction, so `"Sí"` and `"si"` describe the
/// same entry.
///
/// # Example
///
/// ```
/// use reinhardt_admin_tables::{BooleanValue, BooleanVocabulary};
///
/// let vocabulary = BooleanVocabulary::new(["Yes", "on"], ["No", "off"]);
/// assert_eq!(vocabulary.classify(" YES "), BooleanValue::True);
/// assert_eq!(vocabulary.classify("Off"), BooleanValue::False);
/// assert_eq!(vocabulary.classify("maybe").as_str(), "maybe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "VocabularyTokens")]
pub struct BooleanVocabulary {
	truthy: BTreeSet<String>,
	falsy: BTreeSet<String>,
}

impl BooleanVocabulary {
	/// Creates a vocabulary from truthy and falsy tokens
	pub fn new<T, F>(truthy: T, falsy: F) -> Self
	where
		T: IntoIterator,
		T::Item: AsRef<str>,
		F: IntoIterator,
		F::Item: AsRef<str>,
	{
		Self {
			truthy: truthy.into_iter().map(normalize_text).collect(),
			falsy: falsy.into_iter().map(normalize_text).collect(),
		}
	}

	/// Classifies raw cell text
	///
	/// A token present in both sets classifies as true.
	pub fn classify(&self, text: &str) -> BooleanValue {
		let normalized = normalize_text(text);
		if self.truthy.contains(&normalized) {
			BooleanValue::True
		} else if self.falsy.contains(&normalized) {
			BooleanValue::False
		} else {
			BooleanValue::Unrecognized(normalized)
		}
	}

	/// Normalized truthy tokens
	pub fn truthy(&self) -> impl Iterator<Item = &str> {
		self.truthy.iter().map(String::as_str)
	}

	/// Normalized falsy tokens
	pub fn falsy(&self) -> impl Iterator<Item = &str> {
		self.falsy.iter().map(String::as_str)
	}
}

impl Default for BooleanVocabulary {
	fn default() -> Self {
		Self::new(DEFAULT_TRUTHY, DEFAULT_FALSY)
	}
}

/// Wire form of a vocabulary: either list may be omitted
#[derive(Debug, Deserialize)]
#[serde(default)]
struct VocabularyTokens {
	truthy: Vec<String>,
	falsy: Vec<String>,
}

impl Default for VocabularyTokens {
	fn default() -> Self {
		Self {
			truthy: DEFAULT_TRUTHY.iter().map(|t| t.to_string()).collect(),
			falsy: DEFAULT_FALSY.iter().map(|t| t.to_string()).collect(),
		}
	}
}

impl From<VocabularyTokens> for BooleanVocabulary {
	fn from(tokens: VocabularyTokens) -> Self {
		Self::new(tokens.truthy, tokens.falsy)
	}
}

/// Classifies cell text with the default vocabulary and returns the canonical string
///
/// # Example
///
/// ```
/// use reinhardt_admin_tables::parse_boolean_value;
///
/// assert_eq!(parse_boolean_value("Sí"), "true");
/// assert_eq!(parse_boolean_value("Inactivo"), "false");
/// assert_eq!(parse_boolean_value(" Quizás "), "quizas");
/// ```
pub fn parse_boolean_value(text: &str) -> String {
	DEFAULT_VOCABULARY.classify(text).as_str().to_string()
}
