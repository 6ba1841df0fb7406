//! Shared fixtures for table engine tests
//!
//! [`MemoryTable`] stands in for the rendered table: it keeps the body order,
//! row visibility and header indicators the engine would write to the DOM.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use reinhardt_admin_tables::{
	BooleanVocabulary, Cell, ColumnDescriptor, EnhancedTable, FilterConfig, FilterControl,
	FilterKind, SortDirection, SortKind, TableSurface,
};
use rstest::fixture;

/// A row slot in the body, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyRow {
	Data(usize),
	Empty,
}

/// In-memory table body
#[derive(Debug, Default)]
pub struct MemoryTable {
	pub rows: Vec<Vec<Cell>>,
	pub body: Vec<BodyRow>,
	pub hidden: Vec<bool>,
	pub has_empty_row: bool,
	pub empty_visible: bool,
	pub indicators: BTreeMap<usize, Option<SortDirection>>,
}

impl MemoryTable {
	/// Creates a body holding `rows` in baseline order
	pub fn new(rows: Vec<Vec<Cell>>) -> Self {
		let count = rows.len();
		Self {
			rows,
			body: (0..count).map(BodyRow::Data).collect(),
			hidden: vec![false; count],
			..Default::default()
		}
	}

	/// Adds a "no results" row at the top of the body
	pub fn with_empty_row_first(mut self) -> Self {
		self.has_empty_row = true;
		self.body.insert(0, BodyRow::Empty);
		self
	}

	/// Data rows in display order, visible or not
	pub fn display_order(&self) -> Vec<usize> {
		self.body
			.iter()
			.filter_map(|slot| match slot {
				BodyRow::Data(index) => Some(*index),
				BodyRow::Empty => None,
			})
			.collect()
	}

	/// Visible data rows in display order
	pub fn visible_rows(&self) -> Vec<usize> {
		self.display_order()
			.into_iter()
			.filter(|index| !self.hidden[*index])
			.collect()
	}

	/// Text of the visible cells of `column`, in display order
	pub fn visible_texts(&self, column: usize) -> Vec<String> {
		self.visible_rows()
			.into_iter()
			.map(|row| {
				self.rows[row]
					.get(column)
					.map(|cell| cell.text.clone())
					.unwrap_or_default()
			})
			.collect()
	}
}

impl TableSurface for MemoryTable {
	fn cell(&self, row: usize, column: usize) -> Option<Cell> {
		self.rows.get(row)?.get(column).cloned()
	}

	fn reorder(&mut self, order: &[usize]) {
		let mut body: Vec<BodyRow> = order.iter().copied().map(BodyRow::Data).collect();
		if self.has_empty_row {
			body.push(BodyRow::Empty);
		}
		self.body = body;
	}

	fn set_row_visible(&mut self, row: usize, visible: bool) {
		self.hidden[row] = !visible;
	}

	fn set_empty_state_visible(&mut self, visible: bool) {
		if self.has_empty_row {
			self.empty_visible = visible;
		}
	}

	fn set_sort_indicator(&mut self, column: usize, direction: Option<SortDirection>) {
		self.indicators.insert(column, direction);
	}
}

/// A filter control whose value tests set directly
#[derive(Debug, Clone, Default)]
pub struct StubControl(Rc<RefCell<String>>);

impl StubControl {
	pub fn set(&self, value: &str) {
		*self.0.borrow_mut() = value.to_string();
	}
}

impl FilterControl for StubControl {
	fn value(&self) -> String {
		self.0.borrow().clone()
	}
}

pub type MemoryEnhancedTable = EnhancedTable<MemoryTable, StubControl>;

/// Builds and initializes an enhanced table, returning the controls by column
pub fn enhance(
	surface: MemoryTable,
	columns: Vec<ColumnDescriptor>,
) -> (MemoryEnhancedTable, HashMap<usize, StubControl>) {
	let mut controls = HashMap::new();
	let mut filters = Vec::new();
	for (index, column) in columns.iter().enumerate() {
		if let Some(kind) = column.filter {
			let control = StubControl::default();
			controls.insert(index, control.clone());
			filters.push(FilterConfig::new(index, kind, control));
		}
	}
	let row_count = surface.rows.len();
	let mut table = EnhancedTable::new(
		surface,
		columns,
		filters,
		row_count,
		BooleanVocabulary::default(),
	);
	table.initialize();
	(table, controls)
}

pub fn text_column() -> ColumnDescriptor {
	ColumnDescriptor {
		filter: Some(FilterKind::Text),
		sort: SortKind::Text,
		sortable: true,
	}
}

pub fn boolean_column() -> ColumnDescriptor {
	ColumnDescriptor {
		filter: Some(FilterKind::Boolean),
		sort: SortKind::Boolean,
		sortable: true,
	}
}

pub fn plain_column() -> ColumnDescriptor {
	ColumnDescriptor::default()
}

pub fn unsortable_column() -> ColumnDescriptor {
	ColumnDescriptor {
		sortable: false,
		..ColumnDescriptor::default()
	}
}

/// Columns: Nombre (text filter), Activa (boolean filter),
/// Fundado (dates with `data-sort-value`), Acciones (not sortable)
#[fixture]
pub fn club_columns() -> Vec<ColumnDescriptor> {
	vec![
		text_column(),
		boolean_column(),
		plain_column(),
		unsortable_column(),
	]
}

#[fixture]
pub fn club_rows() -> Vec<Vec<Cell>> {
	vec![
		vec![
			Cell::new("Peñarol"),
			Cell::new("Sí"),
			Cell::new("Jan 2").with_sort_value("2024-01-02"),
			Cell::new("Editar"),
		],
		vec![
			Cell::new("José Pedro Varela"),
			Cell::new("No"),
			Cell::new("Dec 31").with_sort_value("2023-12-31"),
			Cell::new("Editar"),
		],
		vec![
			Cell::new("Atlético Juventud"),
			Cell::new("Sí"),
			Cell::new("Feb 10").with_sort_value("2024-02-10"),
			Cell::new("Editar"),
		],
		vec![
			Cell::new("Nacional"),
			Cell::new("maybe"),
			Cell::new("Jan 15").with_sort_value("2024-01-15"),
			Cell::new("Editar"),
		],
		vec![
			Cell::new("Jose Gervasio"),
			Cell::new("Activa"),
			Cell::new("Mar 1").with_sort_value("2024-03-01"),
			Cell::new("Editar"),
		],
	]
}

#[fixture]
pub fn club_table(
	club_rows: Vec<Vec<Cell>>,
	club_columns: Vec<ColumnDescriptor>,
) -> (MemoryEnhancedTable, HashMap<usize, StubControl>) {
	enhance(MemoryTable::new(club_rows).with_empty_row_first(), club_columns)
}
