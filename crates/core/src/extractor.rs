//! Session extraction from an authenticated source engine.
//!
//! Cookies are the primary credential unit: if they cannot be read the
//! whole extraction fails with [`BridgeError::Extraction`]. Every other
//! sub-extraction (storage dumps, token probes, identity derivation) is
//! best-effort and degrades to empty defaults behind its own failure
//! boundary, so one sandboxed storage area or one unreadable key never
//! hides the rest of the session.

use std::collections::HashMap;

use bridge_protocol::SessionData;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::detector::detect_auth_type;
use crate::engine::EngineOps;
use crate::error::{BridgeError, Result};
use crate::js::{self, StorageArea};

/// Fixed candidate keys probed for credential-bearing values.
///
/// Applications using nonstandard key names will simply not be discovered;
/// that is an accepted limit of name-based probing, not a list to grow on
/// speculation.
pub const TOKEN_PROBE_KEYS: &[&str] = &[
	"auth_token",
	"access_token",
	"id_token",
	"refresh_token",
	"jwt",
	"bearer_token",
	"token",
	"Authorization",
];

/// Token keys that may carry the user identity, highest priority first.
const TOKEN_USER_KEYS: &[&str] = &["user_id", "userId", "sub", "user"];

/// Storage keys that may carry the user identity, highest priority first.
const STORAGE_USER_KEYS: &[&str] = &["user_id", "userId", "current_user", "currentUser"];

/// Extracts a normalized session snapshot from the source engine.
///
/// # Errors
///
/// Returns [`BridgeError::Extraction`] only when the cookie read itself
/// fails; everything else degrades to empty defaults with a warning.
pub async fn extract(source: &dyn EngineOps) -> Result<SessionData> {
	let cookies = source
		.cookies()
		.await
		.map_err(|e| BridgeError::Extraction(format!("cookie read failed: {e}")))?;
	debug!(target = "bridge", count = cookies.len(), "cookies read from source context");

	let local_storage = read_storage(source, StorageArea::Local).await;
	let session_storage = read_storage(source, StorageArea::Session).await;
	let tokens = probe_tokens(source).await;

	let auth_type = detect_auth_type(&cookies, &tokens, &local_storage);
	let user_id = derive_user_id(&tokens, &session_storage, &local_storage);

	let mut session = SessionData::new(cookies);
	session.local_storage = local_storage;
	session.session_storage = session_storage;
	session.tokens = tokens;
	session.user_id = user_id;
	session.auth_type = Some(auth_type);

	info!(
		target = "bridge",
		cookies = session.cookies.len(),
		tokens = session.tokens.len(),
		auth_type = %auth_type,
		user_id = session.user_id.as_deref().unwrap_or("<none>"),
		"session extracted"
	);
	Ok(session)
}

/// Reads one storage key, yielding `None` for absent keys.
///
/// Shared with the validator, which probes the target the same way the
/// extractor probes the source.
pub(crate) async fn probe_storage(
	engine: &dyn EngineOps,
	area: StorageArea,
	key: &str,
) -> Result<Option<String>> {
	let value = engine.run_script(&js::probe_storage_script(area, key)).await?;
	Ok(match value {
		Value::Null => None,
		Value::String(s) => Some(s),
		other => Some(other.to_string()),
	})
}

/// Dumps a whole storage area, degrading to an empty map on failure.
async fn read_storage(engine: &dyn EngineOps, area: StorageArea) -> HashMap<String, String> {
	match dump_storage(engine, area).await {
		Ok(entries) => {
			debug!(area = %area, count = entries.len(), "storage area read");
			entries
		}
		Err(e) => {
			warn!(area = %area, error = %e, "storage read failed, continuing with empty map");
			HashMap::new()
		}
	}
}

async fn dump_storage(engine: &dyn EngineOps, area: StorageArea) -> Result<HashMap<String, String>> {
	let value = engine.run_script(&js::read_storage_script(area)).await?;
	Ok(serde_json::from_value(value)?)
}

/// Probes the fixed candidate keys against both storage areas.
///
/// Each individual probe has its own failure boundary: one inaccessible
/// key must not prevent discovery of the others. Session-storage hits are
/// stored under a `session_` prefix to avoid colliding with localStorage
/// hits of the same name.
async fn probe_tokens(source: &dyn EngineOps) -> HashMap<String, String> {
	let mut tokens = HashMap::new();
	for key in TOKEN_PROBE_KEYS {
		match probe_storage(source, StorageArea::Local, key).await {
			Ok(Some(value)) => {
				tokens.insert((*key).to_string(), value);
			}
			Ok(None) => {}
			Err(e) => warn!(key = %key, error = %e, "localStorage token probe failed"),
		}
		match probe_storage(source, StorageArea::Session, key).await {
			Ok(Some(value)) => {
				tokens.insert(format!("session_{key}"), value);
			}
			Ok(None) => {}
			Err(e) => warn!(key = %key, error = %e, "sessionStorage token probe failed"),
		}
	}
	tokens
}

/// Best-effort user identity: tokens first, then sessionStorage, then
/// localStorage; first match wins.
fn derive_user_id(
	tokens: &HashMap<String, String>,
	session_storage: &HashMap<String, String>,
	local_storage: &HashMap<String, String>,
) -> Option<String> {
	for key in TOKEN_USER_KEYS {
		if let Some(value) = tokens.get(*key) {
			return Some(value.clone());
		}
	}
	for storage in [session_storage, local_storage] {
		for key in STORAGE_USER_KEYS {
			if let Some(value) = storage.get(*key) {
				return Some(value.clone());
			}
		}
	}
	None
}

#[cfg(test)]
mod tests {
	use super::*;

	fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[test]
	fn user_id_from_tokens_wins() {
		let tokens = map(&[("user_id", "42")]);
		let session = map(&[("userId", "7")]);
		assert_eq!(
			derive_user_id(&tokens, &session, &HashMap::new()),
			Some("42".to_string())
		);
	}

	#[test]
	fn user_id_falls_back_to_session_storage() {
		let session = map(&[("userId", "7")]);
		assert_eq!(
			derive_user_id(&HashMap::new(), &session, &HashMap::new()),
			Some("7".to_string())
		);
	}

	#[test]
	fn session_storage_beats_local_storage() {
		let session = map(&[("current_user", "alice")]);
		let local = map(&[("user_id", "bob")]);
		assert_eq!(
			derive_user_id(&HashMap::new(), &session, &local),
			Some("alice".to_string())
		);
	}

	#[test]
	fn no_identity_yields_none() {
		assert_eq!(
			derive_user_id(&HashMap::new(), &HashMap::new(), &HashMap::new()),
			None
		);
	}

	#[test]
	fn token_sub_claim_is_recognized() {
		let tokens = map(&[("sub", "user-9")]);
		assert_eq!(
			derive_user_id(&tokens, &HashMap::new(), &HashMap::new()),
			Some("user-9".to_string())
		);
	}
}
