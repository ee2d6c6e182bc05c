//! Generated page scripts for storage access and token exposure.
//!
//! Both engine families can evaluate JavaScript but neither exposes web
//! storage through its native API, so every storage interaction goes
//! through the scripts built here. The seeding script is a contract: for a
//! given serialized map it calls the storage setter exactly once per key,
//! with no escaping beyond standard JSON string serialization.

use std::collections::HashMap;

use serde_json::Value;

/// The two origin-scoped web storage areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageArea {
	/// Persistent `localStorage`
	Local,
	/// Tab-scoped `sessionStorage`
	Session,
}

impl StorageArea {
	/// The in-page global this area is accessed through.
	pub fn js_name(self) -> &'static str {
		match self {
			StorageArea::Local => "localStorage",
			StorageArea::Session => "sessionStorage",
		}
	}
}

impl std::fmt::Display for StorageArea {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.js_name())
	}
}

/// Script that dumps an entire storage area as a JSON object.
pub fn read_storage_script(area: StorageArea) -> String {
	let storage = area.js_name();
	format!(
		r#"(() => {{
	const out = {{}};
	for (let i = 0; i < {storage}.length; i++) {{
		const key = {storage}.key(i);
		out[key] = {storage}.getItem(key);
	}}
	return out;
}})()"#
	)
}

/// Script that reads a single storage key, yielding the value or `null`.
pub fn probe_storage_script(area: StorageArea, key: &str) -> String {
	format!("{}.getItem({})", area.js_name(), js_string(key))
}

/// Script that writes every entry of `entries` into a storage area.
///
/// The map is serialized once and each key is set exactly once via the
/// storage setter; re-running the script overwrites rather than duplicates.
pub fn seed_storage_script(area: StorageArea, entries: &HashMap<String, String>) -> String {
	let payload = to_json_object(entries);
	let storage = area.js_name();
	format!(
		r#"(() => {{
	const data = {payload};
	for (const [key, value] of Object.entries(data)) {{
		{storage}.setItem(key, value);
	}}
	return Object.keys(data).length;
}})()"#
	)
}

/// Script exposing a credential value as the `__AUTH_TOKEN__` page global,
/// for applications that read their token from a global rather than storage.
pub fn expose_token_script(value: &str) -> String {
	format!("window.__AUTH_TOKEN__ = {};", js_string(value))
}

fn js_string(s: &str) -> String {
	Value::String(s.to_string()).to_string()
}

fn to_json_object(entries: &HashMap<String, String>) -> String {
	let map: serde_json::Map<String, Value> = entries
		.iter()
		.map(|(k, v)| (k.clone(), Value::String(v.clone())))
		.collect();
	Value::Object(map).to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn read_script_targets_the_right_area() {
		let local = read_storage_script(StorageArea::Local);
		assert!(local.contains("localStorage.key(i)"));
		assert!(!local.contains("sessionStorage"));

		let session = read_storage_script(StorageArea::Session);
		assert!(session.contains("sessionStorage.getItem(key)"));
	}

	#[test]
	fn probe_script_escapes_the_key() {
		let script = probe_storage_script(StorageArea::Local, r#"we"ird"#);
		assert_eq!(script, r#"localStorage.getItem("we\"ird")"#);
	}

	#[test]
	fn seed_script_sets_via_the_storage_setter() {
		let mut entries = HashMap::new();
		entries.insert("auth_token".to_string(), "abc".to_string());
		let script = seed_storage_script(StorageArea::Local, &entries);

		assert!(script.contains(r#"const data = {"auth_token":"abc"};"#));
		// one setter call in the loop body, not one per key
		assert_eq!(script.matches("localStorage.setItem").count(), 1);
		assert!(script.contains("localStorage.setItem(key, value)"));
	}

	#[test]
	fn seed_script_payload_uses_plain_json_escaping() {
		let mut entries = HashMap::new();
		entries.insert("k".to_string(), "line\nbreak \"quoted\"".to_string());
		let script = seed_storage_script(StorageArea::Session, &entries);
		assert!(script.contains(r#""k":"line\nbreak \"quoted\"""#));
	}

	#[test]
	fn token_global_script_shape() {
		let script = expose_token_script("tok-123");
		assert_eq!(script, r#"window.__AUTH_TOKEN__ = "tok-123";"#);
	}
}
