//! Error types for table enhancement

use thiserror::Error;

/// Reasons a table could not be enhanced
///
/// None of these reach the page user. The binder treats every variant as
/// "leave the table as it is" and only logs it in debug builds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnhanceError {
	/// The table carries the enhanced marker already
	#[error("Table is already enhanced")]
	AlreadyEnhanced,

	/// The table has no `<thead>` section
	#[error("Table has no <thead> section")]
	MissingHead,

	/// The table has no `<tbody>` section
	#[error("Table has no <tbody> section")]
	MissingBody,

	/// The first header row is missing or has no cells
	#[error("Table header has no cells")]
	NoHeaderCells,

	/// A configuration object could not be read
	#[error("Invalid enhancer configuration: {0}")]
	InvalidConfig(String),

	/// A DOM call threw
	#[error("DOM operation failed: {0}")]
	Dom(String),
}

impl EnhanceError {
	/// Returns true for tables that are skipped by design rather than broken
	///
	/// Already-enhanced and structurally incomplete tables are expected on
	/// real admin pages; DOM and configuration failures are not.
	pub fn is_skip(&self) -> bool {
		matches!(
			self,
			Self::AlreadyEnhanced | Self::MissingHead | Self::MissingBody | Self::NoHeaderCells
		)
	}
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for EnhanceError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		Self::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
	}
}

/// Result type for table enhancement
pub type EnhanceResult<T> = Result<T, EnhanceError>;
