// Extraction behavior against the in-memory fake engine: degradation
// boundaries, token probing, and identity derivation.


use std::sync::atomic::Ordering;

use bridge::engine::Blocking;
use bridge::js::StorageArea;
use bridge::{AuthType, Cookie, extractor};
use fake_engine::FakeEngine;

fn logged_in_engine() -> FakeEngine {
	let engine = FakeEngine::new();
	engine.navigate("https://app.example.com/home");
	engine.seed_cookie(Cookie::new("session", "abc").domain(".example.com"));
	engine
}

#[tokio::test]
async fn cookie_read_failure_aborts_extraction() {
	let engine = logged_in_engine();
	engine.fail_cookie_read.store(true, Ordering::SeqCst);

	let err = extractor::extract(&Blocking::new(&engine))
		.await
		.expect_err("extraction must fail without cookies");
	assert!(err.is_extraction());
}

#[tokio::test]
async fn storage_failures_degrade_to_empty_maps() {
	let engine = logged_in_engine();
	engine.seed_local("auth_token", "tok-1");
	engine.deny_dump(StorageArea::Local);
	engine.deny_dump(StorageArea::Session);

	let session = extractor::extract(&Blocking::new(&engine))
		.await
		.expect("extraction must survive storage failures");

	assert!(session.local_storage.is_empty());
	assert!(session.session_storage.is_empty());
	// Whole-area dumps failed, but single-key probes still discovered the token.
	assert_eq!(session.tokens.get("auth_token").map(String::as_str), Some("tok-1"));
}

#[tokio::test]
async fn one_denied_key_does_not_hide_the_others() {
	let engine = logged_in_engine();
	engine.seed_local("auth_token", "tok-1");
	engine.seed_local("refresh_token", "ref-2");
	engine.deny_probe("jwt");

	let session = extractor::extract(&Blocking::new(&engine)).await.unwrap();

	assert_eq!(session.tokens.get("auth_token").map(String::as_str), Some("tok-1"));
	assert_eq!(session.tokens.get("refresh_token").map(String::as_str), Some("ref-2"));
	assert!(!session.tokens.contains_key("jwt"));
}

#[tokio::test]
async fn session_storage_hits_are_prefixed() {
	let engine = logged_in_engine();
	engine.seed_local("access_token", "local-tok");
	engine.seed_session("access_token", "session-tok");

	let session = extractor::extract(&Blocking::new(&engine)).await.unwrap();

	assert_eq!(
		session.tokens.get("access_token").map(String::as_str),
		Some("local-tok")
	);
	assert_eq!(
		session.tokens.get("session_access_token").map(String::as_str),
		Some("session-tok")
	);
}

#[tokio::test]
async fn all_candidate_keys_are_probed() {
	let engine = logged_in_engine();
	for key in extractor::TOKEN_PROBE_KEYS {
		engine.seed_local(key, "value");
	}

	let session = extractor::extract(&Blocking::new(&engine)).await.unwrap();
	for key in extractor::TOKEN_PROBE_KEYS {
		assert!(session.tokens.contains_key(*key), "missing probe hit for {key}");
	}
}

#[tokio::test]
async fn auth_type_is_always_labelled() {
	let engine = logged_in_engine();
	let session = extractor::extract(&Blocking::new(&engine)).await.unwrap();
	assert_eq!(session.auth_type, Some(AuthType::Unknown));

	let sso = logged_in_engine();
	sso.seed_cookie(Cookie::new("okta-session", "xyz").domain(".example.com"));
	let session = extractor::extract(&Blocking::new(&sso)).await.unwrap();
	assert_eq!(session.auth_type, Some(AuthType::Sso));
}

#[tokio::test]
async fn user_id_comes_from_storage_when_tokens_lack_one() {
	let engine = logged_in_engine();
	engine.seed_session("userId", "7");

	let session = extractor::extract(&Blocking::new(&engine)).await.unwrap();
	assert_eq!(session.user_id.as_deref(), Some("7"));
}

#[tokio::test]
async fn script_failures_still_yield_a_session() {
	let engine = logged_in_engine();
	engine.fail_all_scripts.store(true, Ordering::SeqCst);

	let session = extractor::extract(&Blocking::new(&engine))
		.await
		.expect("cookies alone are enough to extract");

	assert_eq!(session.cookies.len(), 1);
	assert!(session.local_storage.is_empty());
	assert!(session.tokens.is_empty());
	assert_eq!(session.user_id, None);
	assert_eq!(session.auth_type, Some(AuthType::Unknown));
}
