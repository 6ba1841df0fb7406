//! Column descriptors derived from header cell attributes
//!
//! Every header cell (`<th>`) declares how its column behaves:
//!
//! | Attribute | Values | Default |
//! |-----------|--------|---------|
//! | `data-filter` | `text`, `boolean` | no filter |
//! | `data-sort` | `text`, `boolean` | `boolean` for boolean filters, else `text` |
//! | `data-sortable` | `false` disables sorting | sortable |
//!
//! Body cells may carry `data-sort-value`, which replaces the cell text as
//! the sort key.

/// Attribute marking tables that opt in to enhancement
pub const TABLE_SELECTOR: &str = "table[data-enhanced-list]";

/// Attribute set on a table once it has been enhanced
pub const ENHANCED_ATTR: &str = "data-enhanced";

/// Value of [`ENHANCED_ATTR`] on enhanced tables
pub const ENHANCED_VALUE: &str = "1";

/// Header attribute selecting the filter kind
pub const FILTER_ATTR: &str = "data-filter";

/// Header attribute overriding the sort kind
pub const SORT_ATTR: &str = "data-sort";

/// Header attribute disabling sorting when set to `"false"`
pub const SORTABLE_ATTR: &str = "data-sortable";

/// Cell attribute holding an explicit sort key
pub const SORT_VALUE_ATTR: &str = "data-sort-value";

/// Class of the "no results" placeholder row
pub const EMPTY_ROW_CLASS: &str = "empty-row";

/// Class of the injected filter row
pub const FILTER_ROW_CLASS: &str = "table-filters";

/// Class added to sortable header cells
pub const SORTABLE_CLASS: &str = "sortable";

/// How a column is filtered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
	/// Accent- and case-insensitive substring match
	Text,
	/// Tri-state selector (any / true / false)
	Boolean,
}

impl FilterKind {
	/// Parses a `data-filter` value; unknown or missing values mean no filter
	pub fn from_attribute(value: Option<&str>) -> Option<Self> {
		match value? {
			"text" => Some(Self::Text),
			"boolean" => Some(Self::Boolean),
			_ => None,
		}
	}
}

/// How sort keys are computed for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKind {
	/// Normalized cell text
	#[default]
	Text,
	/// `"1"` for truthy cells, `"0"` for everything else
	Boolean,
}

impl SortKind {
	/// Resolves the sort kind from `data-sort` and the column's filter kind
	///
	/// An empty or missing `data-sort` falls back to the filter kind. Any
	/// value other than `boolean` sorts as text.
	pub fn resolve(value: Option<&str>, filter: Option<FilterKind>) -> Self {
		match value.filter(|v| !v.is_empty()) {
			Some("boolean") => Self::Boolean,
			Some(_) => Self::Text,
			None if filter == Some(FilterKind::Boolean) => Self::Boolean,
			None => Self::Text,
		}
	}
}

/// Per-column behavior, index-aligned with the header cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDescriptor {
	/// Filter kind, `None` when the column has no filter control
	pub filter: Option<FilterKind>,
	/// Sort key kind
	pub sort: SortKind,
	/// Whether header activation sorts the column
	pub sortable: bool,
}

impl ColumnDescriptor {
	/// Builds a descriptor from a header cell's attribute lookup
	///
	/// # Example
	///
	/// ```
	/// use reinhardt_admin_tables::column::{ColumnDescriptor, FilterKind, SortKind};
	///
	/// let descriptor = ColumnDescriptor::from_attributes(|name| match name {
	/// 	"data-filter" => Some("boolean".to_string()),
	/// 	_ => None,
	/// });
	/// assert_eq!(descriptor.filter, Some(FilterKind::Boolean));
	/// assert_eq!(descriptor.sort, SortKind::Boolean);
	/// assert!(descriptor.sortable);
	/// ```
	pub fn from_attributes(attribute: impl Fn(&str) -> Option<String>) -> Self {
		let filter = FilterKind::from_attribute(attribute(FILTER_ATTR).as_deref());
		let sort = SortKind::resolve(attribute(SORT_ATTR).as_deref(), filter);
		let sortable = attribute(SORTABLE_ATTR).as_deref() != Some("false");
		Self {
			filter,
			sort,
			sortable,
		}
	}
}

impl Default for ColumnDescriptor {
	fn default() -> Self {
		Self {
			filter: None,
			sort: SortKind::Text,
			sortable: true,
		}
	}
}
