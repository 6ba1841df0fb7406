//! Per-column filtering
//!
//! Filters are combined with AND: a row is visible only when every active
//! filter accepts the cell in its column. Filtering never reorders rows.

use crate::boolean::BooleanVocabulary;
use crate::column::FilterKind;
use crate::normalize::normalize_text;

/// Source of a filter's current value
///
/// In the browser this is the injected `<input>` or `<select>`; tests use
/// plain in-memory values.
pub trait FilterControl {
	/// Returns the control's current value
	fn value(&self) -> String;
}

/// Binding between a column, its filter kind and the control supplying the value
#[derive(Debug, Clone)]
pub struct FilterConfig<C> {
	column: usize,
	kind: FilterKind,
	control: C,
}

impl<C: FilterControl> FilterConfig<C> {
	/// Creates a filter configuration for `column`
	pub fn new(column: usize, kind: FilterKind, control: C) -> Self {
		Self {
			column,
			kind,
			control,
		}
	}

	/// Column the filter applies to
	pub fn column(&self) -> usize {
		self.column
	}

	/// Filter kind
	pub fn kind(&self) -> FilterKind {
		self.kind
	}

	/// The bound control
	pub fn control(&self) -> &C {
		&self.control
	}

	/// Reads the control once and prepares a predicate for a filter pass
	pub fn predicate(&self) -> FilterPredicate {
		let raw = self.control.value();
		match self.kind {
			FilterKind::Text => FilterPredicate::Contains(normalize_text(raw)),
			FilterKind::Boolean => FilterPredicate::Boolean(raw),
		}
	}
}

/// A filter value captured at the start of a pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterPredicate {
	/// Normalized substring query; empty matches everything
	Contains(String),
	/// Selected canonical value (`"true"`/`"false"`); empty matches everything
	Boolean(String),
}

impl FilterPredicate {
	/// Returns true when the predicate accepts every cell
	pub fn is_empty(&self) -> bool {
		match self {
			Self::Contains(query) | Self::Boolean(query) => query.is_empty(),
		}
	}

	/// Tests a cell's text against the predicate
	///
	/// # Example
	///
	/// ```
	/// use reinhardt_admin_tables::{BooleanVocabulary, FilterPredicate};
	///
	/// let vocabulary = BooleanVocabulary::default();
	/// assert!(FilterPredicate::Contains("jose".into()).matches("José Pérez", &vocabulary));
	/// assert!(FilterPredicate::Boolean("false".into()).matches("Inactiva", &vocabulary));
	/// assert!(!FilterPredicate::Boolean("true".into()).matches("maybe", &vocabulary));
	/// ```
	pub fn matches(&self, text: &str, vocabulary: &BooleanVocabulary) -> bool {
		match self {
			Self::Contains(query) => query.is_empty() || normalize_text(text).contains(query.as_str()),
			Self::Boolean(selected) => {
				selected.is_empty() || vocabulary.classify(text).as_str() == selected
			}
		}
	}
}

/// Result of a filter pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOutcome {
	/// Visibility per baseline row index
	pub visible: Vec<bool>,
	/// Number of visible data rows
	pub visible_count: usize,
}

impl FilterOutcome {
	/// Whether the "no results" row should be shown
	pub fn empty_state_visible(&self) -> bool {
		self.visible_count == 0
	}
}

/// Trait for tables with per-column filters
pub trait Filterable {
	/// Re-evaluates every filter and updates row visibility
	fn apply_filters(&mut self) -> FilterOutcome;

	/// Returns `(column, value)` for every filter with a non-empty value
	fn active_filters(&self) -> Vec<(usize, String)>;
}
