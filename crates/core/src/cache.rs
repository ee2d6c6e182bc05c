//! Keyed in-memory store of captured sessions.
//!
//! No TTL and no eviction: entries live until [`SessionCache::clear`] is
//! called. Long-running processes that need bounded memory must add an
//! eviction policy explicitly; the cache will not age anything out on its
//! own.

use std::collections::HashMap;

use bridge_protocol::SessionData;
use parking_lot::Mutex;
use tracing::debug;

/// A cached session with bookkeeping.
#[derive(Debug, Clone)]
pub struct CacheEntry {
	/// The captured session.
	pub data: SessionData,
	/// Unix epoch seconds at store time.
	pub cached_at: u64,
	/// Successful lookups served for this entry.
	pub hit_count: u64,
}

/// Thread-safe session store keyed by caller-chosen ids.
#[derive(Debug, Default)]
pub struct SessionCache {
	entries: Mutex<HashMap<String, CacheEntry>>,
}

impl SessionCache {
	/// Creates an empty cache.
	pub fn new() -> Self {
		Self::default()
	}

	/// Stores a session under `id`, overwriting any existing entry and
	/// resetting its hit count.
	pub fn store(&self, id: impl Into<String>, data: SessionData) {
		let id = id.into();
		debug!(target = "bridge", id = %id, "session cached");
		self.entries.lock().insert(
			id,
			CacheEntry {
				data,
				cached_at: now_unix(),
				hit_count: 0,
			},
		);
	}

	/// Returns the session stored under `id`, counting the hit, or `None`
	/// for an unknown id.
	pub fn get(&self, id: &str) -> Option<SessionData> {
		let mut entries = self.entries.lock();
		let entry = entries.get_mut(id)?;
		entry.hit_count += 1;
		debug!(target = "bridge", id = %id, hits = entry.hit_count, "session cache hit");
		Some(entry.data.clone())
	}

	/// Snapshot of the entry under `id`, without counting a hit.
	pub fn entry(&self, id: &str) -> Option<CacheEntry> {
		self.entries.lock().get(id).cloned()
	}

	/// Hit count for `id`, or `None` for an unknown id.
	pub fn hits(&self, id: &str) -> Option<u64> {
		self.entries.lock().get(id).map(|entry| entry.hit_count)
	}

	/// Removes all entries.
	pub fn clear(&self) {
		let mut entries = self.entries.lock();
		debug!(target = "bridge", count = entries.len(), "session cache cleared");
		entries.clear();
	}

	/// Number of cached sessions.
	pub fn len(&self) -> usize {
		self.entries.lock().len()
	}

	/// True when nothing is cached.
	pub fn is_empty(&self) -> bool {
		self.entries.lock().is_empty()
	}
}

fn now_unix() -> u64 {
	std::time::SystemTime::now()
		.duration_since(std::time::UNIX_EPOCH)
		.unwrap_or_default()
		.as_secs()
}
