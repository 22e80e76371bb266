// src/infrastructure/repositories/postgres_feed.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::feed::{
    EntryAuthor, EntryContent, FeedEntry, FeedEntryId, FeedEntryWithAuthor, FeedReadRepository,
    FeedWriteRepository, NewFeedEntry, VoteCount, VoteUpdate,
};
use crate::domain::user::{UserId, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresFeedWriteRepository {
    pool: PgPool,
}

impl PostgresFeedWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresFeedReadRepository {
    pool: PgPool,
}

impl PostgresFeedReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct FeedEntryRow {
    id: i64,
    author_id: i64,
    content: String,
    upvote_count: i64,
    downvote_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<FeedEntryRow> for FeedEntry {
    type Error = DomainError;

    fn try_from(row: FeedEntryRow) -> Result<Self, Self::Error> {
        Ok(FeedEntry {
            id: FeedEntryId::new(row.id)?,
            author_id: UserId::new(row.author_id)?,
            content: EntryContent::new(row.content)?,
            upvote_count: VoteCount::new(row.upvote_count)?,
            downvote_count: VoteCount::new(row.downvote_count)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct FeedEntryWithAuthorRow {
    id: i64,
    author_id: i64,
    content: String,
    upvote_count: i64,
    downvote_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_username: String,
    author_fname: String,
    author_lname: String,
}

impl TryFrom<FeedEntryWithAuthorRow> for FeedEntryWithAuthor {
    type Error = DomainError;

    fn try_from(row: FeedEntryWithAuthorRow) -> Result<Self, Self::Error> {
        let author = EntryAuthor {
            id: UserId::new(row.author_id)?,
            username: Username::new(row.author_username)?,
            fname: row.author_fname,
            lname: row.author_lname,
        };
        let entry = FeedEntry {
            id: FeedEntryId::new(row.id)?,
            author_id: UserId::new(row.author_id)?,
            content: EntryContent::new(row.content)?,
            upvote_count: VoteCount::new(row.upvote_count)?,
            downvote_count: VoteCount::new(row.downvote_count)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        };
        Ok(FeedEntryWithAuthor { entry, author })
    }
}

const WITH_AUTHOR_COLUMNS: &str = "f.id, f.author_id, f.content, f.upvote_count, \
     f.downvote_count, f.created_at, f.updated_at, \
     u.username AS author_username, u.fname AS author_fname, u.lname AS author_lname";

#[async_trait]
impl FeedWriteRepository for PostgresFeedWriteRepository {
    async fn insert(&self, entry: NewFeedEntry) -> DomainResult<FeedEntry> {
        let NewFeedEntry {
            author_id,
            content,
            upvote_count,
            downvote_count,
            created_at,
        } = entry;

        let row = sqlx::query_as::<_, FeedEntryRow>(
            "INSERT INTO feed_entries
                 (author_id, content, upvote_count, downvote_count, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $5)
             RETURNING id, author_id, content, upvote_count, downvote_count,
                       created_at, updated_at",
        )
        .bind(i64::from(author_id))
        .bind(content.as_str())
        .bind(i64::from(upvote_count))
        .bind(i64::from(downvote_count))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        FeedEntry::try_from(row)
    }

    async fn set_votes(&self, update: VoteUpdate) -> DomainResult<FeedEntry> {
        let row = sqlx::query_as::<_, FeedEntryRow>(
            "UPDATE feed_entries
             SET upvote_count = $2, downvote_count = $3, updated_at = $4
             WHERE id = $1
             RETURNING id, author_id, content, upvote_count, downvote_count,
                       created_at, updated_at",
        )
        .bind(i64::from(update.id))
        .bind(i64::from(update.upvote_count))
        .bind(i64::from(update.downvote_count))
        .bind(update.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("feed entry not found".into()))?;

        FeedEntry::try_from(row)
    }
}

#[async_trait]
impl FeedReadRepository for PostgresFeedReadRepository {
    async fn find_with_author(&self, id: FeedEntryId) -> DomainResult<Option<FeedEntryWithAuthor>> {
        let sql = format!(
            "SELECT {WITH_AUTHOR_COLUMNS}
             FROM feed_entries f
             JOIN users u ON u.id = f.author_id
             WHERE f.id = $1"
        );

        let row = sqlx::query_as::<_, FeedEntryWithAuthorRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(FeedEntryWithAuthor::try_from).transpose()
    }

    async fn list_newest_first(&self) -> DomainResult<Vec<FeedEntryWithAuthor>> {
        let sql = format!(
            "SELECT {WITH_AUTHOR_COLUMNS}
             FROM feed_entries f
             JOIN users u ON u.id = f.author_id
             ORDER BY f.created_at DESC, f.id DESC"
        );

        let rows = sqlx::query_as::<_, FeedEntryWithAuthorRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter()
            .map(FeedEntryWithAuthor::try_from)
            .collect()
    }
}
