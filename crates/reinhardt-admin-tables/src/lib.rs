//! # reinhardt-admin-tables
//!
//! Client-side sorting and filtering for server-rendered admin list tables.
//!
//! The admin renders plain HTML tables. Marking a table with
//! `data-enhanced-list` opts it in: the enhancer adds a filter row under the
//! header, makes header cells sortable by click or keyboard, and keeps the
//! visible rows in sync with the chosen sort order and the active filters.
//!
//! ## Markup
//!
//! ```html
//! <table data-enhanced-list>
//!   <thead>
//!     <tr>
//!       <th data-filter="text">Nombre</th>
//!       <th data-filter="boolean">Activa</th>
//!       <th data-sortable="false">Acciones</th>
//!     </tr>
//!   </thead>
//!   <tbody>
//!     <tr><td>Liga Norte</td><td>Sí</td><td>…</td></tr>
//!     <tr class="empty-row"><td colspan="3">Sin resultados</td></tr>
//!   </tbody>
//! </table>
//! ```
//!
//! ## Architecture
//!
//! - [`normalize`]: accent/case-insensitive text normalization
//! - [`boolean`]: truthy/falsy token classification
//! - [`column`]: per-column descriptors read from header attributes
//! - [`sorting`]: sort keys and the tri-state sort cycle
//! - [`filtering`]: text and boolean predicates
//! - [`table`]: [`EnhancedTable`], the per-table engine behind [`TableSurface`]
//! - [`config`]: labels and vocabulary
//! - `dom` (wasm32 only): the `web_sys` binder and JavaScript entrypoints
//!
//! The engine is DOM-agnostic and runs natively; only the binder needs a
//! browser.
//!
//! ## JavaScript
//!
//! Loading the module enhances every marked table once the document is ready
//! and installs `window.AdminTables.init(root?)` for content inserted later:
//!
//! ```js
//! container.innerHTML = fragmentHtml;
//! AdminTables.init(container);
//! ```

#![warn(missing_docs)]

pub mod logging;

pub mod boolean;
pub mod column;
pub mod config;
pub mod error;
pub mod filtering;
pub mod normalize;
pub mod sorting;
pub mod table;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use boolean::{BooleanValue, BooleanVocabulary, parse_boolean_value};
pub use column::{ColumnDescriptor, FilterKind, SortKind};
pub use config::{EnhancerConfig, FilterLabels};
pub use error::{EnhanceError, EnhanceResult};
pub use filtering::{FilterConfig, FilterControl, FilterOutcome, FilterPredicate, Filterable};
pub use normalize::normalize_text;
pub use sorting::{Cell, SortDirection, SortState, Sortable, sort_key};
pub use table::{EnhancedTable, TableSurface};
