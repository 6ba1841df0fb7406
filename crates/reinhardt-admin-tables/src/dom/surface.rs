//! [`TableSurface`] implementation over `web_sys` table elements

use web_sys::{Element, HtmlElement, HtmlTableRowElement, HtmlTableSectionElement};

use crate::column::SORT_VALUE_ATTR;
use crate::sorting::{Cell, SortDirection};
use crate::table::TableSurface;
use crate::warn_log;

const SORTED_CLASSES: [&str; 2] = ["sorted-asc", "sorted-desc"];

/// The live `<tbody>`, its data rows in baseline order and the header cells
#[derive(Debug)]
pub struct DomSurface {
	body: HtmlTableSectionElement,
	rows: Vec<HtmlTableRowElement>,
	empty_row: Option<HtmlTableRowElement>,
	headers: Vec<HtmlElement>,
}

impl DomSurface {
	/// Creates a surface; `rows` must be the data rows in document order
	pub fn new(
		body: HtmlTableSectionElement,
		rows: Vec<HtmlTableRowElement>,
		empty_row: Option<HtmlTableRowElement>,
		headers: Vec<HtmlElement>,
	) -> Self {
		Self {
			body,
			rows,
			empty_row,
			headers,
		}
	}

	/// Data rows in baseline order
	pub fn rows(&self) -> &[HtmlTableRowElement] {
		&self.rows
	}

	/// The "no results" row, if the table has one
	pub fn empty_row(&self) -> Option<&HtmlTableRowElement> {
		self.empty_row.as_ref()
	}

	fn cell_element(&self, row: usize, column: usize) -> Option<Element> {
		let column = u32::try_from(column).ok()?;
		self.rows.get(row)?.cells().item(column)
	}
}

fn set_displayed(element: &HtmlElement, visible: bool) {
	let style = element.style();
	let result = if visible {
		style.remove_property("display").map(|_| ())
	} else {
		style.set_property("display", "none")
	};
	if let Err(err) = result {
		warn_log!("Failed to toggle row visibility: {:?}", err);
	}
}

impl TableSurface for DomSurface {
	fn cell(&self, row: usize, column: usize) -> Option<Cell> {
		let element = self.cell_element(row, column)?;
		Some(Cell {
			text: element.text_content().unwrap_or_default(),
			sort_value: element.get_attribute(SORT_VALUE_ATTR),
		})
	}

	fn reorder(&mut self, order: &[usize]) {
		let rows = order.iter().filter_map(|index| self.rows.get(*index));
		for row in rows.chain(self.empty_row.as_ref()) {
			if let Err(err) = self.body.append_child(row) {
				warn_log!("Failed to move table row: {:?}", err);
			}
		}
	}

	fn set_row_visible(&mut self, row: usize, visible: bool) {
		if let Some(element) = self.rows.get(row) {
			set_displayed(element, visible);
		}
	}

	fn set_empty_state_visible(&mut self, visible: bool) {
		if let Some(element) = &self.empty_row {
			set_displayed(element, visible);
		}
	}

	fn set_sort_indicator(&mut self, column: usize, direction: Option<SortDirection>) {
		let Some(header) = self.headers.get(column) else {
			return;
		};
		let class_list = header.class_list();
		let mut result = class_list.remove_2(SORTED_CLASSES[0], SORTED_CLASSES[1]);
		if let Some(direction) = direction {
			result = result.and_then(|()| class_list.add_1(direction.css_class()));
		}
		if let Err(err) = result {
			warn_log!("Failed to update sort classes: {:?}", err);
		}
		if let Err(err) = header.set_attribute("aria-sort", SortDirection::aria_sort(direction)) {
			warn_log!("Failed to set aria-sort: {:?}", err);
		}
	}
}
