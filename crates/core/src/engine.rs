//! The capability seam between the bridge and concrete driver handles.
//!
//! The pipeline never talks to an automation engine directly; it goes
//! through [`EngineOps`], a deliberately small surface (cookies in, cookies
//! out, script evaluation, current URL). Event-driven drivers implement it
//! natively; synchronous command-based drivers implement [`BlockingEngine`]
//! and are wrapped by [`Blocking`], so both engine families share one
//! pipeline instead of maintaining two parallel implementations.

use std::future::Future;
use std::pin::Pin;

use bridge_protocol::Cookie;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Boxing alias: stable async in trait without `async_trait`.
pub type BoxFut<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Which engine family a handle belongs to. Logging metadata only; the
/// behavioral seam is [`EngineOps`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
	/// Synchronous, command-based driver (one wire command per call)
	WebDriver,
	/// Event-driven, context/page-based driver
	DevTools,
}

impl std::fmt::Display for EngineKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			EngineKind::WebDriver => f.write_str("webdriver"),
			EngineKind::DevTools => f.write_str("devtools"),
		}
	}
}

/// Capability surface of a live browser-automation handle.
///
/// Implementations wrap one driver's context/session object. All methods
/// operate on the currently committed origin of that context.
pub trait EngineOps {
	/// Reads all cookies visible to the context.
	fn cookies(&self) -> BoxFut<'_, Result<Vec<Cookie>>>;

	/// Adds cookies at the context level.
	fn add_cookies(&self, cookies: Vec<Cookie>) -> BoxFut<'_, Result<()>>;

	/// Evaluates a script in the current page and returns its JSON value.
	fn run_script(&self, script: &str) -> BoxFut<'_, Result<Value>>;

	/// URL of the current page, or `None` before any navigation committed.
	fn current_url(&self) -> BoxFut<'_, Result<Option<String>>>;
}

/// Capability surface of a synchronous command-based driver.
///
/// Mirrors [`EngineOps`] method-for-method; wrap implementors in
/// [`Blocking`] to run them through the shared pipeline.
pub trait BlockingEngine {
	/// Reads all cookies visible to the session.
	fn cookies(&self) -> Result<Vec<Cookie>>;

	/// Adds cookies to the session.
	fn add_cookies(&self, cookies: Vec<Cookie>) -> Result<()>;

	/// Evaluates a script in the current page and returns its JSON value.
	fn run_script(&self, script: &str) -> Result<Value>;

	/// URL of the current page, or `None` before any navigation committed.
	fn current_url(&self) -> Result<Option<String>>;
}

impl<E: BlockingEngine + ?Sized> BlockingEngine for &E {
	fn cookies(&self) -> Result<Vec<Cookie>> {
		(**self).cookies()
	}

	fn add_cookies(&self, cookies: Vec<Cookie>) -> Result<()> {
		(**self).add_cookies(cookies)
	}

	fn run_script(&self, script: &str) -> Result<Value> {
		(**self).run_script(script)
	}

	fn current_url(&self) -> Result<Option<String>> {
		(**self).current_url()
	}
}

/// Adapter presenting a [`BlockingEngine`] as [`EngineOps`].
///
/// Each call runs the synchronous command to completion first and wraps
/// the finished result in an already-ready future, so ordering and failure
/// semantics are identical to the native async path by construction.
pub struct Blocking<E> {
	inner: E,
}

impl<E: BlockingEngine> Blocking<E> {
	/// Wraps a synchronous driver handle.
	pub fn new(inner: E) -> Self {
		Self { inner }
	}

	/// Returns the wrapped handle.
	pub fn into_inner(self) -> E {
		self.inner
	}
}

impl<E: BlockingEngine> EngineOps for Blocking<E> {
	fn cookies(&self) -> BoxFut<'_, Result<Vec<Cookie>>> {
		let result = self.inner.cookies();
		Box::pin(async move { result })
	}

	fn add_cookies(&self, cookies: Vec<Cookie>) -> BoxFut<'_, Result<()>> {
		let result = self.inner.add_cookies(cookies);
		Box::pin(async move { result })
	}

	fn run_script(&self, script: &str) -> BoxFut<'_, Result<Value>> {
		let result = self.inner.run_script(script);
		Box::pin(async move { result })
	}

	fn current_url(&self) -> BoxFut<'_, Result<Option<String>>> {
		let result = self.inner.current_url();
		Box::pin(async move { result })
	}
}
