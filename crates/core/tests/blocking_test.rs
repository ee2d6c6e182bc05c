// The blocking entry points must behave exactly like the async pipeline.


use bridge::{Cookie, SessionBridge, TransferOptions, blocking};
use fake_engine::FakeEngine;

const APP_URL: &str = "https://app.example.com/dashboard";

fn authenticated_source() -> FakeEngine {
	let source = FakeEngine::new();
	source.navigate(APP_URL);
	source.seed_cookie(Cookie::new("session", "abc123").domain(".example.com"));
	source.seed_local("auth_token", "tok-1");
	source.seed_local("user_id", "42");
	source
}

#[test]
fn blocking_extract_reads_the_full_session() {
	let source = authenticated_source();

	let session = blocking::extract(&source).expect("extraction should succeed");

	assert_eq!(session.cookies.len(), 1);
	assert_eq!(session.tokens.get("auth_token").map(String::as_str), Some("tok-1"));
	assert_eq!(session.user_id.as_deref(), Some("42"));
}

#[test]
fn blocking_inject_and_validate() {
	let source = authenticated_source();
	let target = FakeEngine::new();
	target.navigate(APP_URL);

	let session = blocking::extract(&source).unwrap();
	assert!(blocking::inject(&target, &session).unwrap());
	assert!(blocking::validate(&target, session.user_id.as_deref()).unwrap());

	assert_eq!(
		target.local_snapshot().get("auth_token").map(String::as_str),
		Some("tok-1")
	);
}

#[test]
fn blocking_transfer_matches_async_semantics() {
	let source = authenticated_source();
	let target = FakeEngine::new();
	target.navigate(APP_URL);

	let bridge = SessionBridge::new();
	let session = bridge
		.transfer_blocking(&source, &target, &TransferOptions::new())
		.expect("runtime should build")
		.expect("transfer should succeed");

	assert_eq!(session.user_id.as_deref(), Some("42"));

	// Same fail-fast contract as the async variant.
	let broken = FakeEngine::new();
	broken
		.fail_cookie_read
		.store(true, std::sync::atomic::Ordering::SeqCst);
	let untouched = FakeEngine::new();
	let result = bridge
		.transfer_blocking(&broken, &untouched, &TransferOptions::new())
		.expect("runtime should build");
	assert!(result.is_none());
	assert!(untouched.calls().is_empty());
}
