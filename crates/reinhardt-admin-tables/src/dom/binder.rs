//! Table discovery and one-time enhancement

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
	Document, DocumentFragment, Element, Event, HtmlCollection, HtmlElement, HtmlTableElement,
	HtmlTableRowElement, HtmlTableSectionElement, KeyboardEvent, NodeList,
};

use super::DomTable;
use super::controls::DomFilterControl;
use super::surface::DomSurface;
use crate::column::{
	ColumnDescriptor, EMPTY_ROW_CLASS, ENHANCED_ATTR, ENHANCED_VALUE, FILTER_ROW_CLASS,
	SORTABLE_CLASS, TABLE_SELECTOR,
};
use crate::config::EnhancerConfig;
use crate::error::{EnhanceError, EnhanceResult};
use crate::filtering::{FilterConfig, Filterable};
use crate::sorting::Sortable;
use crate::{debug_log, error_log, warn_log};

/// Where [`init_all`] looks for marked tables
#[derive(Debug, Clone)]
pub enum ScanRoot {
	/// The whole document
	Document(Document),
	/// A subtree, e.g. a container that just received new markup
	Element(Element),
	/// A detached fragment
	Fragment(DocumentFragment),
}

impl ScanRoot {
	/// Interprets a JavaScript value as a scan root
	///
	/// Returns `None` for `null`, `undefined` and non-node values.
	pub fn from_js(value: &JsValue) -> Option<Self> {
		if let Some(document) = value.dyn_ref::<Document>() {
			Some(Self::Document(document.clone()))
		} else if let Some(element) = value.dyn_ref::<Element>() {
			Some(Self::Element(element.clone()))
		} else {
			value
				.dyn_ref::<DocumentFragment>()
				.map(|fragment| Self::Fragment(fragment.clone()))
		}
	}

	fn query_selector_all(&self, selectors: &str) -> Result<NodeList, JsValue> {
		match self {
			Self::Document(document) => document.query_selector_all(selectors),
			Self::Element(element) => element.query_selector_all(selectors),
			Self::Fragment(fragment) => fragment.query_selector_all(selectors),
		}
	}
}

/// Enhances every `table[data-enhanced-list]` under `root`
///
/// Tables that are already enhanced or malformed are skipped silently.
/// Returns the number of tables enhanced by this call.
pub fn init_all(root: &ScanRoot, config: &EnhancerConfig) -> usize {
	let tables = match root.query_selector_all(TABLE_SELECTOR) {
		Ok(tables) => tables,
		Err(err) => {
			warn_log!("Table lookup failed: {:?}", err);
			return 0;
		}
	};

	let mut enhanced = 0;
	for index in 0..tables.length() {
		let Some(table) = tables
			.item(index)
			.and_then(|node| node.dyn_into::<HtmlTableElement>().ok())
		else {
			continue;
		};
		match init_table(&table, config) {
			Ok(()) => enhanced += 1,
			Err(err) if err.is_skip() => debug_log!("Skipping table: {}", err),
			Err(err) => error_log!("Table enhancement failed: {}", err),
		}
	}
	enhanced
}

fn collect<T: JsCast>(collection: &HtmlCollection) -> Vec<T> {
	(0..collection.length())
		.filter_map(|index| collection.item(index))
		.filter_map(|element| element.dyn_into::<T>().ok())
		.collect()
}

/// Enhances a single table
///
/// Fails without touching the DOM when the table is already enhanced, has
/// no `<thead>`/`<tbody>`, or its first header row has no cells. The filter
/// row is removed again if wiring the table fails.
pub fn init_table(table: &HtmlTableElement, config: &EnhancerConfig) -> EnhanceResult<()> {
	if table.get_attribute(ENHANCED_ATTR).as_deref() == Some(ENHANCED_VALUE) {
		return Err(EnhanceError::AlreadyEnhanced);
	}
	let head = table.t_head().ok_or(EnhanceError::MissingHead)?;
	let body = table
		.t_bodies()
		.item(0)
		.and_then(|body| body.dyn_into::<HtmlTableSectionElement>().ok())
		.ok_or(EnhanceError::MissingBody)?;
	let header_row = head
		.rows()
		.item(0)
		.and_then(|row| row.dyn_into::<HtmlTableRowElement>().ok())
		.ok_or(EnhanceError::NoHeaderCells)?;
	let headers: Vec<HtmlElement> = collect(&header_row.cells());
	if headers.is_empty() {
		return Err(EnhanceError::NoHeaderCells);
	}
	let document = table
		.owner_document()
		.ok_or_else(|| EnhanceError::Dom("Table has no owner document".to_string()))?;

	// Built detached and inserted once every control exists
	let filter_row = document.create_element("tr")?;
	filter_row.class_list().add_1(FILTER_ROW_CLASS)?;

	let (rows, empty_rows): (Vec<HtmlTableRowElement>, Vec<HtmlTableRowElement>) =
		collect::<HtmlTableRowElement>(&body.rows())
			.into_iter()
			.partition(|row| !row.class_list().contains(EMPTY_ROW_CLASS));
	let empty_row = empty_rows.into_iter().next();
	let row_count = rows.len();

	let mut columns = Vec::with_capacity(headers.len());
	let mut filters = Vec::new();
	for (index, header) in headers.iter().enumerate() {
		let column = ColumnDescriptor::from_attributes(|name| header.get_attribute(name));

		let filter_cell = document.create_element("th")?;
		filter_cell.set_attribute("scope", "col")?;
		filter_row.append_child(&filter_cell)?;

		if let Some(kind) = column.filter {
			let header_text = header.text_content().unwrap_or_default();
			let control =
				DomFilterControl::create(&document, kind, &header_text, &config.labels)?;
			filter_cell.append_child(control.element())?;
			filters.push(FilterConfig::new(index, kind, control));
		}
		columns.push(column);
	}

	let surface = DomSurface::new(body, rows, empty_row, headers.clone());
	let state: Rc<RefCell<DomTable>> = Rc::new(RefCell::new(DomTable::new(
		surface,
		columns,
		filters,
		row_count,
		config.vocabulary.clone(),
	)));

	head.insert_before(&filter_row, header_row.next_sibling().as_ref())?;
	if let Err(err) = bind_table(table, &headers, &state) {
		filter_row.remove();
		return Err(err);
	}

	let outcome = state.borrow_mut().initialize();
	debug_log!(
		"Enhanced table: {} rows, {} visible",
		row_count,
		outcome.visible_count
	);
	Ok(())
}

/// Marks sortable headers, wires the listeners and sets the enhanced marker
fn bind_table(
	table: &HtmlTableElement,
	headers: &[HtmlElement],
	state: &Rc<RefCell<DomTable>>,
) -> EnhanceResult<()> {
	let sortable: Vec<bool> = state.borrow().columns().iter().map(|c| c.sortable).collect();
	for (index, header) in headers.iter().enumerate() {
		if sortable[index] {
			mark_sortable(header)?;
		}
	}
	for filter in state.borrow().filters() {
		attach_filter_listener(filter.control(), state)?;
	}
	for (index, header) in headers.iter().enumerate() {
		if sortable[index] {
			attach_sort_listener(header, index, state)?;
		}
	}
	table.set_attribute(ENHANCED_ATTR, ENHANCED_VALUE)?;
	Ok(())
}

fn mark_sortable(header: &HtmlElement) -> EnhanceResult<()> {
	header.class_list().add_1(SORTABLE_CLASS)?;
	if !header.has_attribute("tabindex") {
		header.set_attribute("tabindex", "0")?;
	}
	if !header.has_attribute("aria-sort") {
		header.set_attribute("aria-sort", "none")?;
	}
	Ok(())
}

fn attach_filter_listener(
	control: &DomFilterControl,
	state: &Rc<RefCell<DomTable>>,
) -> EnhanceResult<()> {
	let state = Rc::clone(state);
	let handler = Closure::wrap(Box::new(move |_event: Event| {
		if let Ok(mut table) = state.try_borrow_mut() {
			table.apply_filters();
		}
	}) as Box<dyn FnMut(_)>);

	control
		.element()
		.add_event_listener_with_callback(control.event_type(), handler.as_ref().unchecked_ref())?;
	// Lives as long as the page
	handler.forget();
	Ok(())
}

fn attach_sort_listener(
	header: &HtmlElement,
	column: usize,
	state: &Rc<RefCell<DomTable>>,
) -> EnhanceResult<()> {
	let state = Rc::clone(state);
	let handler = Closure::wrap(Box::new(move |event: Event| {
		if event.type_() == "keydown" {
			let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
				return;
			};
			let key = key_event.key();
			if key != "Enter" && key != " " {
				return;
			}
		}
		event.prevent_default();
		if let Ok(mut table) = state.try_borrow_mut() {
			table.toggle_sort(column);
		}
	}) as Box<dyn FnMut(_)>);

	header.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
	header.add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref())?;
	handler.forget();
	Ok(())
}
