//! Captured session state and its serialized form.
//!
//! [`SessionData`] is the normalized snapshot of one authenticated browser
//! session: cookies, both storage areas, heuristically discovered tokens,
//! and best-effort identity metadata. It is built once at extraction time
//! and treated as an immutable value afterwards.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cookie::Cookie;

/// Best-effort classification of how a session authenticates.
///
/// Exactly one label applies; the detection rules are ordered, so mixed
/// evidence always resolves to the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthType {
	/// OAuth-flavored tokens present
	Oauth,
	/// JSON Web Token material present
	Jwt,
	/// Single-sign-on provider cookies present (Okta, Azure, SAML)
	Sso,
	/// Authorization-header style credentials present
	Basic,
	/// No recognizable authentication evidence
	Unknown,
}

impl std::fmt::Display for AuthType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let label = match self {
			AuthType::Oauth => "OAUTH",
			AuthType::Jwt => "JWT",
			AuthType::Sso => "SSO",
			AuthType::Basic => "BASIC",
			AuthType::Unknown => "UNKNOWN",
		};
		f.write_str(label)
	}
}

/// Normalized snapshot of one authenticated browser session.
///
/// The JSON form of this type round-trips losslessly through
/// [`to_value`](Self::to_value)/[`from_value`](Self::from_value) and is the
/// compatibility contract for any cross-process session cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
	/// All cookies captured from the source context, normalized
	#[serde(default)]
	pub cookies: Vec<Cookie>,

	/// localStorage entries of the source origin
	#[serde(default, skip_serializing_if = "HashMap::is_empty")]
	pub local_storage: HashMap<String, String>,

	/// sessionStorage entries of the source origin
	#[serde(default, skip_serializing_if = "HashMap::is_empty")]
	pub session_storage: HashMap<String, String>,

	/// Credential-bearing values keyed by the probe name that found them.
	/// Hits from sessionStorage carry a `session_` key prefix so they never
	/// collide with a localStorage hit of the same name.
	#[serde(default, skip_serializing_if = "HashMap::is_empty")]
	pub tokens: HashMap<String, String>,

	/// Reserved. Source engines generally cannot observe custom request
	/// headers, so this stays empty in practice.
	#[serde(default, skip_serializing_if = "HashMap::is_empty")]
	pub headers: HashMap<String, String>,

	/// Extraction timestamp, set once at construction (ISO-8601 on the wire)
	pub created_at: DateTime<Utc>,

	/// Best-effort user identity derived from tokens or storage
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub user_id: Option<String>,

	/// Best-effort authentication classification
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub auth_type: Option<AuthType>,
}

impl SessionData {
	/// Creates a session snapshot around the given cookies, stamping
	/// `created_at` with the current time. Everything else starts empty.
	pub fn new(cookies: Vec<Cookie>) -> Self {
		Self {
			cookies,
			local_storage: HashMap::new(),
			session_storage: HashMap::new(),
			tokens: HashMap::new(),
			headers: HashMap::new(),
			created_at: Utc::now(),
			user_id: None,
			auth_type: None,
		}
	}

	/// Serializes to a compact JSON string.
	pub fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string(self)
	}

	/// Deserializes from a JSON string.
	pub fn from_json(json: &str) -> serde_json::Result<Self> {
		serde_json::from_str(json)
	}

	/// Converts to a `serde_json::Value` tree.
	pub fn to_value(&self) -> serde_json::Result<Value> {
		serde_json::to_value(self)
	}

	/// Rebuilds a session from a `serde_json::Value` tree.
	pub fn from_value(value: Value) -> serde_json::Result<Self> {
		serde_json::from_value(value)
	}

	/// Loads a session snapshot from a JSON file.
	pub fn from_file(path: impl AsRef<std::path::Path>) -> std::io::Result<Self> {
		let content = std::fs::read_to_string(path)?;
		serde_json::from_str(&content)
			.map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
	}

	/// Saves the session snapshot to a JSON file.
	pub fn to_file(&self, path: impl AsRef<std::path::Path>) -> std::io::Result<()> {
		let content = serde_json::to_string_pretty(self)
			.map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
		std::fs::write(path, content)
	}
}
