// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_feed;
mod postgres_user;

pub(crate) use error::map_sqlx;
pub use postgres_feed::{PostgresFeedReadRepository, PostgresFeedWriteRepository};
pub use postgres_user::PostgresUserRepository;
