// src/domain/feed/entity.rs
use crate::domain::feed::value_objects::{EntryContent, FeedEntryId, VoteCount};
use crate::domain::user::value_objects::{UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct FeedEntry {
    pub id: FeedEntryId,
    pub author_id: UserId,
    pub content: EntryContent,
    pub upvote_count: VoteCount,
    pub downvote_count: VoteCount,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FeedEntry {
    /// Overwrite both tallies with caller-supplied values. This is the
    /// direct-set semantic: concurrent writers race and the last commit wins.
    pub fn set_votes(&mut self, upvotes: VoteCount, downvotes: VoteCount, now: DateTime<Utc>) {
        self.upvote_count = upvotes;
        self.downvote_count = downvotes;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewFeedEntry {
    pub author_id: UserId,
    pub content: EntryContent,
    pub upvote_count: VoteCount,
    pub downvote_count: VoteCount,
    pub created_at: DateTime<Utc>,
}

impl NewFeedEntry {
    /// New entries always start with zeroed tallies.
    pub fn new(author_id: UserId, content: EntryContent, created_at: DateTime<Utc>) -> Self {
        Self {
            author_id,
            content,
            upvote_count: VoteCount::ZERO,
            downvote_count: VoteCount::ZERO,
            created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct VoteUpdate {
    pub id: FeedEntryId,
    pub upvote_count: VoteCount,
    pub downvote_count: VoteCount,
    pub updated_at: DateTime<Utc>,
}

/// The public identity of an entry's author. The password hash never
/// leaves the user repository through this type.
#[derive(Debug, Clone)]
pub struct EntryAuthor {
    pub id: UserId,
    pub username: Username,
    pub fname: String,
    pub lname: String,
}

#[derive(Debug, Clone)]
pub struct FeedEntryWithAuthor {
    pub entry: FeedEntry,
    pub author: EntryAuthor,
}
