//! Heuristic classification of how a session authenticates.
//!
//! Pure functions over already-extracted data; no engine access. The rule
//! order is a compatibility contract: evidence for an earlier rule always
//! wins, so an environment whose tokens look both OAuth- and SSO-flavored
//! classifies as OAuth on every run.

use std::collections::HashMap;

use bridge_protocol::{AuthType, Cookie};

/// Cookie-name fragments that identify single-sign-on providers.
const SSO_COOKIE_MARKERS: &[&str] = &["okta", "azure", "saml"];

/// Classifies the session's authentication style from its cookies, tokens,
/// and storage. Deterministic, first match wins, single label.
///
/// `storage` is part of the detector contract but unused by the current
/// rules; it carries the localStorage map so storage-based heuristics can
/// be added without touching callers.
pub fn detect_auth_type(
	cookies: &[Cookie],
	tokens: &HashMap<String, String>,
	_storage: &HashMap<String, String>,
) -> AuthType {
	if tokens_mention(tokens, "oauth") {
		return AuthType::Oauth;
	}
	if tokens_mention(tokens, "jwt") {
		return AuthType::Jwt;
	}
	if cookies.iter().any(is_sso_cookie) {
		return AuthType::Sso;
	}
	if tokens_mention(tokens, "authorization") {
		return AuthType::Basic;
	}
	AuthType::Unknown
}

/// True when any token key or value contains `needle`, case-insensitively.
fn tokens_mention(tokens: &HashMap<String, String>, needle: &str) -> bool {
	tokens.iter().any(|(key, value)| {
		key.to_ascii_lowercase().contains(needle) || value.to_ascii_lowercase().contains(needle)
	})
}

fn is_sso_cookie(cookie: &Cookie) -> bool {
	let name = cookie.name.to_ascii_lowercase();
	SSO_COOKIE_MARKERS.iter().any(|marker| name.contains(marker))
}
