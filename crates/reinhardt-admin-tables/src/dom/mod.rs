//! Browser binding for the table enhancer
//!
//! - [`surface`]: [`DomSurface`], the [`TableSurface`](crate::TableSurface) over `web_sys` rows
//! - [`controls`]: filter `<input>`/`<select>` creation and [`DomFilterControl`]
//! - [`binder`]: [`init_table`] and [`init_all`]
//! - [`entry`]: `wasm_bindgen` exports and the `window.AdminTables` namespace

pub mod binder;
pub mod controls;
pub mod entry;
pub mod surface;

pub use binder::{ScanRoot, init_all, init_table};
pub use controls::DomFilterControl;
pub use surface::DomSurface;

/// An enhanced table bound to the live DOM
pub type DomTable = crate::EnhancedTable<DomSurface, DomFilterControl>;
