//! Tri-state, single-column sorting
//!
//! Activating a header cycles its column through ascending, descending and
//! unsorted. Activating another column starts that column at ascending.
//! Orders are always computed from the baseline (document order at
//! enhancement time) with a stable sort, so equal keys keep their original
//! relative order in both directions.

use std::cmp::Ordering;

use crate::boolean::BooleanVocabulary;
use crate::column::SortKind;
use crate::normalize::normalize_text;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
	/// Ascending order
	Ascending,
	/// Descending order
	Descending,
}

impl SortDirection {
	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// Value of the header's `aria-sort` attribute
	pub fn aria_sort(direction: Option<Self>) -> &'static str {
		match direction {
			Some(Self::Ascending) => "ascending",
			Some(Self::Descending) => "descending",
			None => "none",
		}
	}

	/// CSS class marking the sorted header
	pub fn css_class(&self) -> &'static str {
		match self {
			Self::Ascending => "sorted-asc",
			Self::Descending => "sorted-desc",
		}
	}

	fn apply(&self, ordering: Ordering) -> Ordering {
		match self {
			Self::Ascending => ordering,
			Self::Descending => ordering.reverse(),
		}
	}
}

/// The sorted column and its direction, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
	current: Option<(usize, SortDirection)>,
}

impl SortState {
	/// Returns the sorted column and direction
	pub fn current(&self) -> Option<(usize, SortDirection)> {
		self.current
	}

	/// Direction for `column`, `None` when it is not the sorted column
	pub fn direction_of(&self, column: usize) -> Option<SortDirection> {
		self.current
			.filter(|(index, _)| *index == column)
			.map(|(_, direction)| direction)
	}

	/// Next direction in the asc → desc → none cycle for `column`
	pub fn next_direction(&self, column: usize) -> Option<SortDirection> {
		match self.direction_of(column) {
			None => Some(SortDirection::Ascending),
			Some(SortDirection::Ascending) => Some(SortDirection::Descending),
			Some(SortDirection::Descending) => None,
		}
	}

	/// Records the new sort; a `None` direction clears it
	pub fn set(&mut self, column: usize, direction: Option<SortDirection>) {
		self.current = direction.map(|direction| (column, direction));
	}
}

/// Computes the sort key of a cell
///
/// An explicit `data-sort-value` wins and is used verbatim. Boolean columns
/// map truthy text to `"1"` and everything else to `"0"`; text columns use
/// the normalized text. A missing cell sorts as the empty string.
///
/// # Example
///
/// ```
/// use reinhardt_admin_tables::{BooleanVocabulary, Cell, SortKind, sort_key};
///
/// let vocabulary = BooleanVocabulary::default();
/// let date = Cell::new("Jan 2").with_sort_value("2024-01-02");
/// assert_eq!(sort_key(Some(&date), SortKind::Text, &vocabulary), "2024-01-02");
/// assert_eq!(sort_key(Some(&Cell::new("Sí")), SortKind::Boolean, &vocabulary), "1");
/// assert_eq!(sort_key(None, SortKind::Text, &vocabulary), "");
/// ```
pub fn sort_key(cell: Option<&Cell>, kind: SortKind, vocabulary: &BooleanVocabulary) -> String {
	let Some(cell) = cell else {
		return String::new();
	};
	if let Some(value) = &cell.sort_value {
		return value.clone();
	}
	match kind {
		SortKind::Boolean => {
			if vocabulary.classify(&cell.text).is_true() {
				"1".to_string()
			} else {
				"0".to_string()
			}
		}
		SortKind::Text => normalize_text(&cell.text),
	}
}

/// Orders row indices by their keys
///
/// `keys[i]` is the key of baseline row `i`. The result is a permutation of
/// `0..keys.len()`; ties keep ascending index order in both directions.
pub fn sorted_order(keys: &[String], direction: SortDirection) -> Vec<usize> {
	let mut order: Vec<usize> = (0..keys.len()).collect();
	order.sort_by(|a, b| direction.apply(keys[*a].cmp(&keys[*b])));
	order
}

/// Contents of a body cell as seen by the sort and filter engines
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
	/// Text content of the cell
	pub text: String,
	/// Explicit sort key from `data-sort-value`
	pub sort_value: Option<String>,
}

impl Cell {
	/// Creates a cell with text and no sort override
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			sort_value: None,
		}
	}

	/// Sets an explicit sort key
	pub fn with_sort_value(mut self, value: impl Into<String>) -> Self {
		self.sort_value = Some(value.into());
		self
	}
}

/// Trait for tables sortable by a single column
pub trait Sortable {
	/// Advances the column through the tri-state cycle and re-sorts
	///
	/// Returns false when the column is unknown or not sortable.
	fn toggle_sort(&mut self, column: usize) -> bool;

	/// Sorts by `column` in `direction`; `None` restores the baseline order
	fn apply_sort(&mut self, column: usize, direction: Option<SortDirection>);

	/// Returns the current sort column and direction
	fn current_sort(&self) -> Option<(usize, SortDirection)>;
}
