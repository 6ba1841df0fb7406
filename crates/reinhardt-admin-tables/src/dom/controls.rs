//! Filter controls injected into the filter row

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement};

use crate::column::FilterKind;
use crate::config::FilterLabels;
use crate::error::EnhanceResult;
use crate::filtering::FilterControl;

/// A live filter control and the event that signals a new value
#[derive(Debug, Clone)]
pub enum DomFilterControl {
	/// `<input type="search">` for text filters
	Text(HtmlInputElement),
	/// Three-option `<select>` for boolean filters
	Boolean(HtmlSelectElement),
}

impl DomFilterControl {
	/// Creates the control for `kind`, labelled after the column header
	pub fn create(
		document: &Document,
		kind: FilterKind,
		header_text: &str,
		labels: &FilterLabels,
	) -> EnhanceResult<Self> {
		let aria_label = labels.aria_label(header_text);
		let control = match kind {
			FilterKind::Text => {
				let input = document
					.create_element("input")?
					.dyn_into::<HtmlInputElement>()
					.map_err(JsValue::from)?;
				input.set_type("search");
				input.set_placeholder(&labels.placeholder);
				Self::Text(input)
			}
			FilterKind::Boolean => {
				let select = document
					.create_element("select")?
					.dyn_into::<HtmlSelectElement>()
					.map_err(JsValue::from)?;
				for (value, label) in labels.boolean_options() {
					let option = document.create_element("option")?;
					option.set_attribute("value", value)?;
					option.set_text_content(Some(label));
					select.append_child(&option)?;
				}
				Self::Boolean(select)
			}
		};
		control.element().set_attribute("aria-label", &aria_label)?;
		Ok(control)
	}

	/// Event fired when the value changes
	pub fn event_type(&self) -> &'static str {
		match self {
			Self::Text(_) => "input",
			Self::Boolean(_) => "change",
		}
	}

	/// The control element
	pub fn element(&self) -> &Element {
		match self {
			Self::Text(input) => input.as_ref(),
			Self::Boolean(select) => select.as_ref(),
		}
	}
}

impl FilterControl for DomFilterControl {
	fn value(&self) -> String {
		match self {
			Self::Text(input) => input.value(),
			Self::Boolean(select) => select.value(),
		}
	}
}
