//! The transfer orchestrator: extract, inject, validate, in that order.

use bridge_protocol::SessionData;
use tracing::{error, info};

use crate::cache::SessionCache;
use crate::engine::{EngineKind, EngineOps};
use crate::extractor;
use crate::injector;
use crate::validator;

/// Options for a single transfer.
#[derive(Debug, Clone)]
pub struct TransferOptions {
	/// Engine family of the authenticated source handle.
	pub source_kind: EngineKind,
	/// Engine family of the fresh target handle.
	pub target_kind: EngineKind,
	/// Whether to run post-injection validation.
	pub validate: bool,
}

impl Default for TransferOptions {
	fn default() -> Self {
		Self {
			source_kind: EngineKind::WebDriver,
			target_kind: EngineKind::DevTools,
			validate: true,
		}
	}
}

impl TransferOptions {
	/// Creates options with the default engine pairing and validation on.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the source engine family.
	pub fn source_kind(mut self, kind: EngineKind) -> Self {
		self.source_kind = kind;
		self
	}

	/// Sets the target engine family.
	pub fn target_kind(mut self, kind: EngineKind) -> Self {
		self.target_kind = kind;
		self
	}

	/// Enables or disables post-injection validation.
	pub fn validate(mut self, validate: bool) -> Self {
		self.validate = validate;
		self
	}
}

/// Moves authenticated sessions between two automation engines.
///
/// The bridge owns the transient extract/inject/validate lifecycle and an
/// in-memory [`SessionCache`]; the engine handles stay caller-owned. One
/// transfer must fully complete against a target handle before another
/// touches the same handle — the bridge performs no locking around engine
/// access.
#[derive(Debug, Default)]
pub struct SessionBridge {
	cache: SessionCache,
}

impl SessionBridge {
	/// Creates a bridge with an empty session cache.
	pub fn new() -> Self {
		Self::default()
	}

	/// Runs the full transfer pipeline, fail-fast at each stage.
	///
	/// Returns the extracted [`SessionData`] on full success so the caller
	/// can cache or reuse it, and `None` as soon as any stage fails:
	/// extraction errors never reach injection, a failed injection never
	/// reaches validation.
	pub async fn transfer(
		&self,
		source: &dyn EngineOps,
		target: &dyn EngineOps,
		options: &TransferOptions,
	) -> Option<SessionData> {
		info!(
			target = "bridge",
			source = %options.source_kind,
			destination = %options.target_kind,
			"starting session transfer"
		);

		let session = match extractor::extract(source).await {
			Ok(session) => session,
			Err(e) => {
				error!(target = "bridge", error = %e, "extraction stage failed, transfer aborted");
				return None;
			}
		};

		if !injector::inject(target, &session).await {
			error!(target = "bridge", "injection stage failed, transfer aborted");
			return None;
		}
		info!(target = "bridge", "session injected into target context");

		if options.validate {
			if !validator::validate(target, session.user_id.as_deref()).await {
				error!(target = "bridge", "validation stage failed, transfer aborted");
				return None;
			}
			info!(target = "bridge", "transferred session validated");
		}

		Some(session)
	}

	/// Caches a session under `id` for later reuse.
	pub fn cache_session(&self, id: impl Into<String>, data: &SessionData) {
		self.cache.store(id, data.clone());
	}

	/// Returns a previously cached session, counting the hit.
	pub fn cached_session(&self, id: &str) -> Option<SessionData> {
		self.cache.get(id)
	}

	/// Drops every cached session.
	pub fn clear_cache(&self) {
		self.cache.clear();
	}

	/// The underlying cache, for bookkeeping queries.
	pub fn cache(&self) -> &SessionCache {
		&self.cache
	}
}
