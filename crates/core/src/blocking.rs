//! Blocking front-ends over the async pipeline.
//!
//! Synchronous command-based drivers implement
//! [`BlockingEngine`](crate::engine::BlockingEngine); the functions here
//! wrap them in the [`Blocking`](crate::engine::Blocking) adapter and
//! drive the one async pipeline to completion on a current-thread runtime.
//! There is no second pipeline to drift from the async one — both calling
//! conventions execute the same ordered stages.
//!
//! These entry points build their own runtime and must not be called from
//! inside an async context.

use bridge_protocol::SessionData;
use tokio::runtime::{Builder, Runtime};

use crate::bridge::{SessionBridge, TransferOptions};
use crate::engine::{Blocking, BlockingEngine};
use crate::error::Result;
use crate::{extractor, injector, validator};

fn runtime() -> Result<Runtime> {
	Ok(Builder::new_current_thread().enable_all().build()?)
}

/// Blocking variant of [`extractor::extract`].
pub fn extract<E: BlockingEngine>(source: &E) -> Result<SessionData> {
	runtime()?.block_on(extractor::extract(&Blocking::new(source)))
}

/// Blocking variant of [`injector::inject`].
///
/// The outer `Result` only reports runtime construction failure; the
/// boolean carries the injection outcome, as in the async variant.
pub fn inject<E: BlockingEngine>(target: &E, session: &SessionData) -> Result<bool> {
	Ok(runtime()?.block_on(injector::inject(&Blocking::new(target), session)))
}

/// Blocking variant of [`validator::validate`].
pub fn validate<E: BlockingEngine>(target: &E, expected_user_id: Option<&str>) -> Result<bool> {
	Ok(runtime()?.block_on(validator::validate(&Blocking::new(target), expected_user_id)))
}

impl SessionBridge {
	/// Blocking variant of [`SessionBridge::transfer`], for callers whose
	/// engine handles are synchronous on both sides.
	pub fn transfer_blocking<S, T>(
		&self,
		source: &S,
		target: &T,
		options: &TransferOptions,
	) -> Result<Option<SessionData>>
	where
		S: BlockingEngine,
		T: BlockingEngine,
	{
		let rt = runtime()?;
		Ok(rt.block_on(self.transfer(&Blocking::new(source), &Blocking::new(target), options)))
	}
}
