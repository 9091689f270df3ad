// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use penwise::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use penwise::domain::user::UserId;

const HASH_PREFIX: &str = "plain$";

/// Stores passwords with a marker prefix instead of hashing them.
#[derive(Clone, Debug, Default)]
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("{HASH_PREFIX}{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        match expected_hash.strip_prefix(HASH_PREFIX) {
            Some(stored) if stored == password => Ok(()),
            _ => Err(ApplicationError::unauthorized("invalid credentials")),
        }
    }
}

/// Bearer token understood by [`FakeTokenManager`].
pub fn token_for(id: i64, username: &str) -> String {
    format!("token:{id}:{username}")
}

#[derive(Clone, Debug, Default)]
pub struct FakeTokenManager;

#[async_trait]
impl TokenManager for FakeTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = super::time::fixed_now();
        Ok(AuthTokenDto {
            token: token_for(subject.user_id.into(), &subject.username),
            issued_at,
            expires_at: issued_at + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let invalid = || ApplicationError::unauthorized("invalid token");
        let rest = token.strip_prefix("token:").ok_or_else(invalid)?;
        let (id, username) = rest.split_once(':').ok_or_else(invalid)?;
        let id = id.parse::<i64>().map_err(|_| invalid())?;
        let now = super::time::fixed_now();

        Ok(AuthenticatedUser {
            id: UserId::new(id).map_err(|_| invalid())?,
            username: username.to_string(),
            issued_at: now,
            expires_at: now + Duration::hours(1),
        })
    }
}
