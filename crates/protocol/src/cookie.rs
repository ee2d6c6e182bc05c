//! Normalized cookie type shared by both engine adapters.
//!
//! Engines disagree about which cookie attributes are optional; the bridge
//! does not. Every field here is concrete, with defaults applied at
//! construction or deserialization time, so downstream code never handles
//! an absent attribute.

use serde::{Deserialize, Serialize};

/// SameSite cookie attribute.
///
/// Controls when cookies are sent with cross-site requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SameSite {
	/// Cookie is sent with same-site and cross-site requests
	#[serde(rename = "None")]
	None,
	/// Cookie is sent with same-site requests and cross-site top-level navigations
	#[default]
	#[serde(rename = "Lax")]
	Lax,
	/// Cookie is only sent with same-site requests
	#[serde(rename = "Strict")]
	Strict,
}

/// A browser cookie in normalized form.
///
/// Both engine families report cookies with different shapes and different
/// notions of "unset"; this type is the single representation the bridge
/// moves between them. A minimal `{"name": .., "value": ..}` JSON document
/// deserializes with the same defaults that [`Cookie::new`] applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cookie {
	/// Cookie name
	pub name: String,

	/// Cookie value
	pub value: String,

	/// Domain for the cookie (empty when the source did not report one)
	#[serde(default)]
	pub domain: String,

	/// Path for the cookie
	#[serde(default = "default_path")]
	pub path: String,

	/// Whether the cookie requires HTTPS
	#[serde(default)]
	pub secure: bool,

	/// Whether the cookie is inaccessible to JavaScript
	#[serde(default)]
	pub http_only: bool,

	/// SameSite attribute
	#[serde(default)]
	pub same_site: SameSite,
}

fn default_path() -> String {
	"/".to_string()
}

impl Cookie {
	/// Creates a cookie with required fields and normalized defaults.
	pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
			domain: String::new(),
			path: default_path(),
			secure: false,
			http_only: false,
			same_site: SameSite::default(),
		}
	}

	/// Sets the domain for the cookie.
	pub fn domain(mut self, domain: impl Into<String>) -> Self {
		self.domain = domain.into();
		self
	}

	/// Sets the path for the cookie.
	pub fn path(mut self, path: impl Into<String>) -> Self {
		self.path = path.into();
		self
	}

	/// Sets whether the cookie requires HTTPS.
	pub fn secure(mut self, secure: bool) -> Self {
		self.secure = secure;
		self
	}

	/// Sets whether the cookie is HTTP-only.
	pub fn http_only(mut self, http_only: bool) -> Self {
		self.http_only = http_only;
		self
	}

	/// Sets the SameSite attribute.
	pub fn same_site(mut self, same_site: SameSite) -> Self {
		self.same_site = same_site;
		self
	}
}
