// tests/token_manager.rs
use pulsefeed::application::dto::TokenSubject;
use pulsefeed::application::ports::security::TokenManager as _;
use pulsefeed::domain::user::UserId;
use pulsefeed::infrastructure::security::token::BiscuitTokenManager;

mod support;

use support::helpers::{OTHER_PRIVATE_KEY, TEST_PRIVATE_KEY};

fn subject() -> TokenSubject {
    TokenSubject {
        user_id: UserId::new(42).unwrap(),
        username: "tim".into(),
    }
}

#[tokio::test]
async fn issue_then_authenticate_roundtrip() {
    let manager = BiscuitTokenManager::new(TEST_PRIVATE_KEY).unwrap();

    let token = manager.issue(subject()).await.expect("issue failed");
    let user = manager
        .authenticate(&token.token)
        .await
        .expect("authenticate failed");

    assert_eq!(user.id, UserId::new(42).unwrap());
    assert_eq!(user.username, "tim");
    assert_eq!(user.issued_at.timestamp(), token.issued_at.timestamp());
}

#[tokio::test]
async fn authenticate_rejects_tampered_token() {
    let manager = BiscuitTokenManager::new(TEST_PRIVATE_KEY).unwrap();
    let token = manager.issue(subject()).await.expect("issue failed");

    // Flip the last character of the serialized token.
    let mut tampered: Vec<char> = token.token.chars().collect();
    let last = *tampered.last().unwrap();
    *tampered.last_mut().unwrap() = if last == 'A' { 'B' } else { 'A' };
    let tampered: String = tampered.into_iter().collect();
    assert_ne!(tampered, token.token);

    assert!(manager.authenticate(&tampered).await.is_err());
}

#[tokio::test]
async fn authenticate_rejects_foreign_signature() {
    let issuing = BiscuitTokenManager::new(OTHER_PRIVATE_KEY).unwrap();
    let verifying = BiscuitTokenManager::new(TEST_PRIVATE_KEY).unwrap();

    let token = issuing.issue(subject()).await.expect("issue failed");

    assert!(verifying.authenticate(&token.token).await.is_err());
}

#[tokio::test]
async fn authenticate_rejects_garbage() {
    let manager = BiscuitTokenManager::new(TEST_PRIVATE_KEY).unwrap();

    assert!(manager.authenticate("not-a-token").await.is_err());
    assert!(manager.authenticate("").await.is_err());
}

#[tokio::test]
async fn manager_rejects_bad_key_material() {
    assert!(BiscuitTokenManager::new("deadbeef").is_err());
    assert!(BiscuitTokenManager::new("zz").is_err());
}
