use crate::domain::errors::DomainResult;
use crate::domain::feed::entity::{FeedEntry, FeedEntryWithAuthor, NewFeedEntry, VoteUpdate};
use crate::domain::feed::value_objects::FeedEntryId;
use async_trait::async_trait;

#[async_trait]
pub trait FeedWriteRepository: Send + Sync {
    async fn insert(&self, entry: NewFeedEntry) -> DomainResult<FeedEntry>;

    /// Overwrite the tallies of an existing entry. Fails with NotFound when
    /// the id does not resolve; the store is left untouched in that case.
    async fn set_votes(&self, update: VoteUpdate) -> DomainResult<FeedEntry>;
}

#[async_trait]
pub trait FeedReadRepository: Send + Sync {
    async fn find_with_author(&self, id: FeedEntryId) -> DomainResult<Option<FeedEntryWithAuthor>>;

    /// The whole feed, newest first, each entry joined with its author.
    /// Fully materialized; there is no pagination.
    async fn list_newest_first(&self) -> DomainResult<Vec<FeedEntryWithAuthor>>;
}
