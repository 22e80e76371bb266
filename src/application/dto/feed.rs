use crate::domain::feed::{EntryAuthor, FeedEntryWithAuthor};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorDto {
    pub id: i64,
    pub username: String,
    pub fname: String,
    pub lname: String,
}

impl From<EntryAuthor> for AuthorDto {
    fn from(author: EntryAuthor) -> Self {
        Self {
            id: author.id.into(),
            username: author.username.to_string(),
            fname: author.fname,
            lname: author.lname,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedEntryDto {
    pub id: i64,
    pub author: AuthorDto,
    pub content: String,
    pub upvote_count: i64,
    pub downvote_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FeedEntryWithAuthor> for FeedEntryDto {
    fn from(record: FeedEntryWithAuthor) -> Self {
        let FeedEntryWithAuthor { entry, author } = record;
        Self {
            id: entry.id.into(),
            author: author.into(),
            content: entry.content.into(),
            upvote_count: entry.upvote_count.into(),
            downvote_count: entry.downvote_count.into(),
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}
