// src/application/commands/feed/vote.rs
use super::FeedCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, FeedEntryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::feed::{FeedEntryId, VoteCount, VoteUpdate},
};

pub struct SetVotesCommand {
    pub entry_id: i64,
    pub upvote_count: i64,
    pub downvote_count: i64,
}

impl FeedCommandService {
    /// Overwrite an entry's vote tallies with the caller-supplied values.
    /// Any authenticated user may update any entry; there is no ownership
    /// check. Direct-set, not increment: two concurrent callers race and
    /// the write that commits last wins.
    pub async fn set_votes(
        &self,
        actor: &AuthenticatedUser,
        command: SetVotesCommand,
    ) -> ApplicationResult<FeedEntryDto> {
        let entry_id = FeedEntryId::new(command.entry_id)?;
        let upvotes = VoteCount::new(command.upvote_count)?;
        let downvotes = VoteCount::new(command.downvote_count)?;

        tracing::debug!(
            entry_id = command.entry_id,
            user_id = i64::from(actor.id),
            "vote update"
        );

        let updated = self
            .write_repo
            .set_votes(VoteUpdate {
                id: entry_id,
                upvote_count: upvotes,
                downvote_count: downvotes,
                updated_at: self.clock.now(),
            })
            .await?;

        let record = self
            .read_repo
            .find_with_author(updated.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("feed entry not found"))?;

        Ok(record.into())
    }
}
