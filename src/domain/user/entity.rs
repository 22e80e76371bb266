// src/domain/user/entity.rs
use crate::domain::user::value_objects::{PasswordHash, PersonName, UserId, Username};
use chrono::{DateTime, Utc};

/// A registered account. Created once at registration and immutable
/// afterwards; there is no update or delete path.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub fname: PersonName,
    pub lname: PersonName,
    pub username: Username,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub fname: PersonName,
    pub lname: PersonName,
    pub username: Username,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        fname: PersonName,
        lname: PersonName,
        username: Username,
        password_hash: PasswordHash,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            fname,
            lname,
            username,
            password_hash,
            created_at,
        }
    }
}
