//! Per-table sort and filter state
//!
//! [`EnhancedTable`] owns everything one enhanced table needs: the column
//! descriptors, the filter bindings, the baseline row order and the current
//! sort. It talks to the rendered table only through [`TableSurface`], which
//! the DOM binder implements over `web_sys` elements.
//!
//! Rows are identified by their baseline index, the position they had in
//! the body when the table was enhanced. The empty-state row is not a data
//! row and never gets an index.

use crate::boolean::BooleanVocabulary;
use crate::column::ColumnDescriptor;
use crate::filtering::{FilterConfig, FilterControl, FilterOutcome, FilterPredicate, Filterable};
use crate::sorting::{Cell, SortDirection, SortState, Sortable, sort_key, sorted_order};

/// The rendered table as seen by the engine
pub trait TableSurface {
	/// Returns the cell at `column` of baseline row `row`, if it exists
	fn cell(&self, row: usize, column: usize) -> Option<Cell>;

	/// Moves the data rows into `order` and the empty-state row after them
	fn reorder(&mut self, order: &[usize]);

	/// Shows or hides a data row
	fn set_row_visible(&mut self, row: usize, visible: bool);

	/// Shows or hides the empty-state row; no-op when the table has none
	fn set_empty_state_visible(&mut self, visible: bool);

	/// Updates a sortable header's indicator
	fn set_sort_indicator(&mut self, column: usize, direction: Option<SortDirection>);
}

/// An enhanced table: descriptors, filters, baseline and sort state
#[derive(Debug)]
pub struct EnhancedTable<S, C> {
	surface: S,
	columns: Vec<ColumnDescriptor>,
	filters: Vec<FilterConfig<C>>,
	vocabulary: BooleanVocabulary,
	row_count: usize,
	order: Vec<usize>,
	sort: SortState,
}

impl<S, C> EnhancedTable<S, C>
where
	S: TableSurface,
	C: FilterControl,
{
	/// Creates the table state over `row_count` data rows in baseline order
	///
	/// Nothing is rendered until [`EnhancedTable::initialize`] runs.
	pub fn new(
		surface: S,
		columns: Vec<ColumnDescriptor>,
		filters: Vec<FilterConfig<C>>,
		row_count: usize,
		vocabulary: BooleanVocabulary,
	) -> Self {
		Self {
			surface,
			columns,
			filters,
			vocabulary,
			row_count,
			order: (0..row_count).collect(),
			sort: SortState::default(),
		}
	}

	/// Resets the sort indicators and runs the first filter pass
	pub fn initialize(&mut self) -> FilterOutcome {
		self.refresh_indicators();
		self.apply_filters()
	}

	/// Column descriptors, index-aligned with the header cells
	pub fn columns(&self) -> &[ColumnDescriptor] {
		&self.columns
	}

	/// Filter bindings in column order
	pub fn filters(&self) -> &[FilterConfig<C>] {
		&self.filters
	}

	/// Current row order as baseline indices
	pub fn order(&self) -> &[usize] {
		&self.order
	}

	/// Number of data rows
	pub fn row_count(&self) -> usize {
		self.row_count
	}

	/// The rendered table
	pub fn surface(&self) -> &S {
		&self.surface
	}

	/// The rendered table, mutably
	pub fn surface_mut(&mut self) -> &mut S {
		&mut self.surface
	}

	fn is_sortable(&self, column: usize) -> bool {
		self.columns.get(column).is_some_and(|c| c.sortable)
	}

	fn refresh_indicators(&mut self) {
		for (index, column) in self.columns.iter().enumerate() {
			if column.sortable {
				self.surface
					.set_sort_indicator(index, self.sort.direction_of(index));
			}
		}
	}

	fn sort_keys(&self, column: usize) -> Vec<String> {
		let kind = self
			.columns
			.get(column)
			.map(|c| c.sort)
			.unwrap_or_default();
		(0..self.row_count)
			.map(|row| sort_key(self.surface.cell(row, column).as_ref(), kind, &self.vocabulary))
			.collect()
	}
}

impl<S, C> Sortable for EnhancedTable<S, C>
where
	S: TableSurface,
	C: FilterControl,
{
	fn toggle_sort(&mut self, column: usize) -> bool {
		if !self.is_sortable(column) {
			return false;
		}
		let next = self.sort.next_direction(column);
		self.apply_sort(column, next);
		true
	}

	fn apply_sort(&mut self, column: usize, direction: Option<SortDirection>) {
		self.order = match direction {
			None => (0..self.row_count).collect(),
			Some(direction) => sorted_order(&self.sort_keys(column), direction),
		};
		self.sort.set(column, direction);

		self.surface.reorder(&self.order);
		self.refresh_indicators();
		self.apply_filters();
	}

	fn current_sort(&self) -> Option<(usize, SortDirection)> {
		self.sort.current()
	}
}

impl<S, C> Filterable for EnhancedTable<S, C>
where
	S: TableSurface,
	C: FilterControl,
{
	fn apply_filters(&mut self) -> FilterOutcome {
		let predicates: Vec<(usize, FilterPredicate)> = self
			.filters
			.iter()
			.map(|filter| (filter.column(), filter.predicate()))
			.filter(|(_, predicate)| !predicate.is_empty())
			.collect();

		let mut outcome = FilterOutcome {
			visible: vec![false; self.row_count],
			visible_count: 0,
		};
		for &row in &self.order {
			let visible = predicates.iter().all(|(column, predicate)| {
				let text = self
					.surface
					.cell(row, *column)
					.map(|cell| cell.text)
					.unwrap_or_default();
				predicate.matches(&text, &self.vocabulary)
			});
			self.surface.set_row_visible(row, visible);
			outcome.visible[row] = visible;
			if visible {
				outcome.visible_count += 1;
			}
		}
		self.surface
			.set_empty_state_visible(outcome.empty_state_visible());
		outcome
	}

	fn active_filters(&self) -> Vec<(usize, String)> {
		self.filters
			.iter()
			.map(|filter| (filter.column(), filter.control().value()))
			.filter(|(_, value)| !value.is_empty())
			.collect()
	}
}
