//! Session replay into a fresh target engine.
//!
//! Injection order is load-bearing. Cookies go in first, at the context
//! level, and are the only mandatory step: without them the transferred
//! session is dead, so a cookie failure aborts immediately. Storage and
//! token writes are origin-scoped and require a committed navigation on
//! the target; when none exists they are skipped with a warning instead of
//! failing a transfer whose cookies already landed.

use std::collections::HashMap;

use bridge_protocol::SessionData;
use tracing::{debug, error, warn};

use crate::engine::EngineOps;
use crate::js::{self, StorageArea};

/// Token keys whose values are additionally exposed as the
/// `__AUTH_TOKEN__` page global.
const EXPOSED_TOKEN_KEYS: &[&str] = &["auth_token", "access_token"];

/// Replays a captured session into the target engine.
///
/// Returns `false` only when cookie injection fails; storage and token
/// steps are best-effort and log warnings without affecting the result.
pub async fn inject(target: &dyn EngineOps, session: &SessionData) -> bool {
	if let Err(e) = target.add_cookies(session.cookies.clone()).await {
		error!(target = "bridge", error = %e, "cookie injection failed, aborting transfer");
		return false;
	}
	debug!(target = "bridge", count = session.cookies.len(), "cookies added to target context");

	// Storage APIs are origin-scoped; writing before a navigation committed
	// would land on the wrong origin or throw.
	if !has_committed_origin(target).await {
		warn!(
			target = "bridge",
			"target has no committed origin, skipping storage and token injection"
		);
		return true;
	}

	seed_storage(target, StorageArea::Local, &session.local_storage).await;
	seed_storage(target, StorageArea::Session, &session.session_storage).await;
	inject_tokens(target, &session.tokens).await;
	true
}

async fn has_committed_origin(target: &dyn EngineOps) -> bool {
	match target.current_url().await {
		Ok(Some(url)) => !url.is_empty() && url != "about:blank",
		Ok(None) => false,
		Err(e) => {
			warn!(error = %e, "current-url probe failed, treating origin as uncommitted");
			false
		}
	}
}

async fn seed_storage(target: &dyn EngineOps, area: StorageArea, entries: &HashMap<String, String>) {
	if entries.is_empty() {
		return;
	}
	match target.run_script(&js::seed_storage_script(area, entries)).await {
		Ok(_) => debug!(area = %area, count = entries.len(), "storage area seeded"),
		Err(e) => warn!(area = %area, error = %e, "storage injection failed, continuing"),
	}
}

/// Exposes well-known tokens as a page global, then mirrors all tokens
/// into localStorage as a fallback channel for apps that read them there.
async fn inject_tokens(target: &dyn EngineOps, tokens: &HashMap<String, String>) {
	if tokens.is_empty() {
		return;
	}

	for key in EXPOSED_TOKEN_KEYS {
		if let Some(value) = tokens.get(*key) {
			if let Err(e) = target.run_script(&js::expose_token_script(value)).await {
				warn!(key = %key, error = %e, "token global exposure failed, continuing");
			}
		}
	}

	match target
		.run_script(&js::seed_storage_script(StorageArea::Local, tokens))
		.await
	{
		Ok(_) => debug!(count = tokens.len(), "tokens mirrored into localStorage"),
		Err(e) => warn!(error = %e, "token fallback injection failed, continuing"),
	}
}
