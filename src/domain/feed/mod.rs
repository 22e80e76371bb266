// src/domain/feed/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{EntryAuthor, FeedEntry, FeedEntryWithAuthor, NewFeedEntry, VoteUpdate};
pub use repository::{FeedReadRepository, FeedWriteRepository};
pub use value_objects::{EntryContent, FeedEntryId, VoteCount};
