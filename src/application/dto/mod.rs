pub mod auth;
pub mod feed;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use feed::{AuthorDto, FeedEntryDto};
pub use users::{RegisteredUserDto, UserDto};
