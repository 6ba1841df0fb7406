//! JavaScript entrypoints
//!
//! Loading the module runs [`start`], which enhances the current document
//! (after `DOMContentLoaded` when the document is still loading) and installs
//! `window.AdminTables.init(root?)` for content added later.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, Window};

use super::binder::{ScanRoot, init_all};
use crate::config::EnhancerConfig;
use crate::error::EnhanceError;
use crate::info_log;

/// Name of the global namespace object
pub const NAMESPACE: &str = "AdminTables";

/// WASM entry point
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window object"))?;
	let document = window
		.document()
		.ok_or_else(|| JsValue::from_str("No document object"))?;

	install_namespace(&window)?;

	if document.ready_state() != "loading" {
		scan_document(&document);
		return Ok(());
	}

	let ready_document = document.clone();
	let on_ready = Closure::wrap(Box::new(move |_event: Event| {
		scan_document(&ready_document);
	}) as Box<dyn FnMut(_)>);
	document.add_event_listener_with_callback(
		"DOMContentLoaded",
		on_ready.as_ref().unchecked_ref(),
	)?;
	on_ready.forget();
	Ok(())
}

fn scan_document(document: &web_sys::Document) {
	let enhanced = init_all(
		&ScanRoot::Document(document.clone()),
		&EnhancerConfig::default(),
	);
	info_log!("AdminTables: enhanced {} tables", enhanced);
}

fn resolve_root(root: &JsValue) -> Option<ScanRoot> {
	if root.is_null() || root.is_undefined() {
		let document = web_sys::window()?.document()?;
		return Some(ScanRoot::Document(document));
	}
	ScanRoot::from_js(root)
}

/// Enhances marked tables under `root` (the document when omitted)
///
/// Returns the number of newly enhanced tables. Safe to call repeatedly:
/// tables enhanced earlier are left untouched.
#[wasm_bindgen(js_name = initTables)]
pub fn init_tables(root: JsValue) -> usize {
	match resolve_root(&root) {
		Some(root) => init_all(&root, &EnhancerConfig::default()),
		None => 0,
	}
}

/// Like [`init_tables`], with labels and vocabulary read from `config`
///
/// Omitted configuration fields keep their defaults. Throws when `config`
/// cannot be read as an enhancer configuration.
#[wasm_bindgen(js_name = initWithConfig)]
pub fn init_with_config(root: JsValue, config: JsValue) -> Result<usize, JsError> {
	let config = if config.is_null() || config.is_undefined() {
		EnhancerConfig::default()
	} else {
		serde_wasm_bindgen::from_value::<EnhancerConfig>(config)
			.map_err(|err| EnhanceError::InvalidConfig(err.to_string()))?
	};
	Ok(match resolve_root(&root) {
		Some(root) => init_all(&root, &config),
		None => 0,
	})
}

/// Installs `window.AdminTables = { init }`
pub fn install_namespace(window: &Window) -> Result<(), JsValue> {
	let namespace = js_sys::Object::new();
	let init = Closure::wrap(Box::new(move |root: JsValue| -> usize { init_tables(root) })
		as Box<dyn FnMut(JsValue) -> usize>);
	js_sys::Reflect::set(&namespace, &JsValue::from_str("init"), init.as_ref())?;
	init.forget();
	js_sys::Reflect::set(window, &JsValue::from_str(NAMESPACE), &namespace)?;
	Ok(())
}
