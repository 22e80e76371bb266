use crate::domain::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public account profile. The password hash is structurally absent; it
/// cannot appear in any serialized payload built from this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub fname: String,
    pub lname: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            fname: user.fname.into(),
            lname: user.lname.into(),
            username: user.username.to_string(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredUserDto {
    pub user_id: i64,
    pub user: UserDto,
}

impl From<User> for RegisteredUserDto {
    fn from(user: User) -> Self {
        let user: UserDto = user.into();
        Self {
            user_id: user.id,
            user,
        }
    }
}
