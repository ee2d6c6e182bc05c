//! Cross-engine browser session bridge.
//!
//! Extracts an authenticated session (cookies, web storage, discovered
//! tokens) from one browser-automation engine and reconstructs it inside a
//! second, architecturally different engine, so a scenario can log in once
//! and keep going under different automation technology.
//!
//! The two engine families share no session model, so the bridge
//! normalizes everything into [`SessionData`] and replays it in a strict
//! order: cookies first at the context level, then storage and tokens once
//! the target has a committed origin. Authentication-type detection and
//! post-transfer validation are heuristic by nature; the bridge reports
//! best-effort signals, it does not perform authentication.
//!
//! # Example
//!
//! ```ignore
//! use bridge::{SessionBridge, TransferOptions};
//!
//! #[tokio::main]
//! async fn main() {
//!     let bridge = SessionBridge::new();
//!
//!     // `source` is authenticated, `target` is fresh and already
//!     // navigated to the application origin. Both implement EngineOps.
//!     let options = TransferOptions::new();
//!     if let Some(session) = bridge.transfer(&source, &target, &options).await {
//!         bridge.cache_session("checkout-user", &session);
//!     }
//! }
//! ```
//!
//! Synchronous drivers implement [`BlockingEngine`] instead and go through
//! the [`blocking`] entry points; both conventions run the same pipeline.

pub mod blocking;
pub mod bridge;
pub mod cache;
pub mod detector;
pub mod engine;
pub mod error;
pub mod extractor;
pub mod injector;
pub mod js;
pub mod validator;

pub use bridge::{SessionBridge, TransferOptions};
pub use bridge_protocol::{AuthType, Cookie, SameSite, SessionData};
pub use cache::{CacheEntry, SessionCache};
pub use detector::detect_auth_type;
pub use engine::{Blocking, BlockingEngine, BoxFut, EngineKind, EngineOps};
pub use error::{BridgeError, Result};
