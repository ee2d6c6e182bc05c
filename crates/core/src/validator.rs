//! Heuristic post-transfer validation.
//!
//! Arbitrary target applications expose no "am I logged in" endpoint, so
//! validation is evidence-based and deliberately conservative: absence of
//! evidence is treated as absence of a valid session, never the other way
//! around.

use tracing::{debug, warn};

use crate::engine::EngineOps;
use crate::extractor::probe_storage;
use crate::js::StorageArea;

/// Identity-looking localStorage keys, probed in order. The flag marks
/// keys whose value is a user id and therefore comparable against the
/// expected id; names and email addresses only count as presence signals.
const IDENTITY_KEYS: &[(&str, bool)] = &[
	("userId", true),
	("user_id", true),
	("userName", false),
	("userEmail", false),
];

/// Heuristically confirms the injected session is live on the target.
///
/// Signals, in priority order, short-circuiting on the first conclusive
/// one:
///
/// 1. no cookies on the context at all is a hard negative;
/// 2. a readable `auth_token` in localStorage is a positive;
/// 3. an identity key in localStorage is a positive, unless its value
///    contradicts `expected_user_id`, which is a hard negative;
/// 4. no signal at all is a negative.
pub async fn validate(target: &dyn EngineOps, expected_user_id: Option<&str>) -> bool {
	let cookies = match target.cookies().await {
		Ok(cookies) => cookies,
		Err(e) => {
			warn!(target = "bridge", error = %e, "cookie read failed during validation");
			return false;
		}
	};
	if cookies.is_empty() {
		debug!(target = "bridge", "no cookies on target context, session invalid");
		return false;
	}

	match probe_storage(target, StorageArea::Local, "auth_token").await {
		Ok(Some(_)) => {
			debug!(target = "bridge", "auth_token present in localStorage, session valid");
			return true;
		}
		Ok(None) => {}
		Err(e) => warn!(error = %e, "auth_token probe failed, continuing"),
	}

	for (key, comparable) in IDENTITY_KEYS {
		match probe_storage(target, StorageArea::Local, key).await {
			Ok(Some(value)) => {
				if *comparable {
					if let Some(expected) = expected_user_id {
						if value != expected {
							warn!(
								target = "bridge",
								key = %key,
								found = %value,
								expected = %expected,
								"user identity mismatch, session invalid"
							);
							return false;
						}
					}
				}
				debug!(target = "bridge", key = %key, "identity key present, session valid");
				return true;
			}
			Ok(None) => {}
			Err(e) => warn!(key = %key, error = %e, "identity probe failed, continuing"),
		}
	}

	debug!(target = "bridge", "no authentication evidence found on target");
	false
}
