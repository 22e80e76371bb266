// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::sync::Arc;

use pulsefeed::application::ports::{
    security::{PasswordHasher, TokenManager},
    time::Clock,
};
use pulsefeed::application::services::ApplicationServices;
use pulsefeed::domain::feed::{FeedReadRepository, FeedWriteRepository};
use pulsefeed::domain::user::UserRepository;
use pulsefeed::infrastructure::security::{
    password::Argon2PasswordHasher, token::BiscuitTokenManager,
};

/// Fixed Ed25519 root keys for tests. Any 32-byte value is a valid seed.
pub const TEST_PRIVATE_KEY: &str =
    "1a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f708192a3b4c5d6e7f809";
pub const OTHER_PRIVATE_KEY: &str =
    "fedcba9876543210fedcba9876543210fedcba9876543210fedcba9876543210";

pub static TEST_TOKEN_MANAGER: Lazy<Arc<BiscuitTokenManager>> =
    Lazy::new(|| Arc::new(BiscuitTokenManager::new(TEST_PRIVATE_KEY).expect("test key")));

/// Service graph over in-memory stores with the real Argon2 hasher and the
/// real Biscuit token manager, as close to production wiring as a test can
/// get without a database.
pub fn build_test_state() -> pulsefeed::presentation::http::state::HttpState {
    let user_repo = Arc::new(mocks::InMemoryUserRepo::new());
    let feed_store = Arc::new(mocks::InMemoryFeedStore::new(Arc::clone(&user_repo)));

    let user_repo: Arc<dyn UserRepository> = user_repo;
    let feed_write: Arc<dyn FeedWriteRepository> = feed_store.clone();
    let feed_read: Arc<dyn FeedReadRepository> = feed_store;
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn TokenManager> = (*TEST_TOKEN_MANAGER).clone();
    let clock: Arc<dyn Clock> = Arc::new(mocks::SteppingClock::new());

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        feed_write,
        feed_read,
        password_hasher,
        token_manager,
        clock,
    ));

    pulsefeed::presentation::http::state::HttpState { services }
}

pub fn make_test_router() -> axum::Router {
    pulsefeed::presentation::http::routes::build_router(build_test_state())
}

pub fn json_request(method: &str, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body_bytes).expect("valid json body")
}

/// Assert that a response is an ErrorBody JSON with the expected status.
pub async fn assert_error_response(resp: axum::response::Response, expected_status: StatusCode) {
    assert_eq!(resp.status(), expected_status);
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert!(!err_field.is_empty(), "expected non-empty error field");
    assert!(!msg_field.is_empty(), "expected non-empty message field");
}
