use thiserror::Error;

pub type Result<T> = std::result::Result<T, BridgeError>;

#[derive(Debug, Error)]
pub enum BridgeError {
	/// Cookie retrieval from the source engine failed. This is the only
	/// hard failure in the pipeline: without cookies there is nothing
	/// useful to transfer.
	#[error("session extraction failed: {0}")]
	Extraction(String),

	/// A driver command (cookie read/write, navigation probe) failed.
	#[error("engine command failed: {0}")]
	Engine(String),

	/// In-page script evaluation failed.
	#[error("script evaluation failed: {0}")]
	Script(String),

	#[error(transparent)]
	Json(#[from] serde_json::Error),

	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl BridgeError {
	/// True when this error aborts a transfer before injection starts.
	pub fn is_extraction(&self) -> bool {
		matches!(self, BridgeError::Extraction(_))
	}
}
