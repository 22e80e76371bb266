// tests/support/mocks/security.rs
use async_trait::async_trait;
use pulsefeed::application::{ApplicationResult, error::ApplicationError};

/* -------------------------------- PasswordHasher -------------------------------- */

/// 決定論的なパスワードハッシャー（サービス単体テスト用）
/// 実際のArgon2の性質はインフラ層のテストで別途検証する
#[derive(Clone, Debug, Default)]
pub struct StrictPasswordHasher;

#[async_trait]
impl pulsefeed::application::ports::security::PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hash::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hash::{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
