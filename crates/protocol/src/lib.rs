//! Wire types for cross-engine session transfer.
//!
//! This crate contains the serde-serializable types that describe one
//! authenticated browser session independently of the automation engine
//! that produced it. The JSON shape of these types is the compatibility
//! contract for cross-process caching of captured sessions.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! - **Pure data**: No behavior beyond construction and (de)serialization
//! - **Engine-neutral**: The same shape regardless of which driver read or
//!   replays the session
//! - **Stable**: Changes only when the cache/wire format changes
//!
//! The extraction, injection, and validation machinery lives in `bridge-rs`.

pub mod cookie;
pub mod session;

pub use cookie::*;
pub use session::*;
