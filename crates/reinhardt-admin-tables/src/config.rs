//! Enhancer configuration
//!
//! The admin interface is rendered in Spanish, and the defaults reproduce
//! its labels and boolean vocabulary. Pages in another locale pass their own
//! [`EnhancerConfig`] (from JavaScript via `initWithConfig`).
//!
//! ```
//! use reinhardt_admin_tables::{BooleanVocabulary, EnhancerConfig, FilterLabels};
//!
//! let config = EnhancerConfig::new()
//! 	.with_labels(FilterLabels::new("Filter…", "Filter ", "All", "Yes", "No"))
//! 	.with_vocabulary(BooleanVocabulary::new(["yes", "1"], ["no", "0"]));
//!
//! assert_eq!(config.labels.aria_label(" Name "), "Filter Name");
//! ```

use serde::Deserialize;

use crate::boolean::BooleanVocabulary;

/// Visible text of the injected filter controls
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterLabels {
	/// Placeholder of text filter inputs
	pub placeholder: String,
	/// Prefix of every control's `aria-label`, followed by the header text
	pub aria_label_prefix: String,
	/// Boolean selector option that disables the filter
	pub any_option: String,
	/// Boolean selector option for truthy cells
	pub true_option: String,
	/// Boolean selector option for falsy cells
	pub false_option: String,
}

impl FilterLabels {
	/// Creates a label set
	pub fn new(
		placeholder: impl Into<String>,
		aria_label_prefix: impl Into<String>,
		any_option: impl Into<String>,
		true_option: impl Into<String>,
		false_option: impl Into<String>,
	) -> Self {
		Self {
			placeholder: placeholder.into(),
			aria_label_prefix: aria_label_prefix.into(),
			any_option: any_option.into(),
			true_option: true_option.into(),
			false_option: false_option.into(),
		}
	}

	/// Accessible label for the filter of a column with the given header text
	pub fn aria_label(&self, header_text: &str) -> String {
		format!("{}{}", self.aria_label_prefix, header_text.trim())
	}

	/// `(value, label)` pairs of the boolean selector, in display order
	pub fn boolean_options(&self) -> [(&'static str, &str); 3] {
		[
			("", self.any_option.as_str()),
			("true", self.true_option.as_str()),
			("false", self.false_option.as_str()),
		]
	}
}

impl Default for FilterLabels {
	fn default() -> Self {
		Self::new("Filtrar…", "Filtrar ", "Todos", "Sí", "No")
	}
}

/// Configuration shared by every table enhanced in one `init` call
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct EnhancerConfig {
	/// Control labels
	pub labels: FilterLabels,
	/// Truthy and falsy tokens for boolean columns
	pub vocabulary: BooleanVocabulary,
}

impl EnhancerConfig {
	/// Creates the default configuration
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the control labels
	pub fn with_labels(mut self, labels: FilterLabels) -> Self {
		self.labels = labels;
		self
	}

	/// Replaces the boolean vocabulary
	pub fn with_vocabulary(mut self, vocabulary: BooleanVocabulary) -> Self {
		self.vocabulary = vocabulary;
		self
	}
}
