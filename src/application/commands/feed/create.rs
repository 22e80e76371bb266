// src/application/commands/feed/create.rs
use super::FeedCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, FeedEntryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::feed::{EntryContent, NewFeedEntry},
};

pub struct CreateEntryCommand {
    pub content: String,
}

impl FeedCommandService {
    /// Persist a new entry for the authenticated author. Tallies start at
    /// zero; the stored row is re-read with its author joined so the caller
    /// gets the same shape the feed listing produces.
    pub async fn create_entry(
        &self,
        actor: &AuthenticatedUser,
        command: CreateEntryCommand,
    ) -> ApplicationResult<FeedEntryDto> {
        let content = EntryContent::new(command.content)?;
        let now = self.clock.now();

        let created = self
            .write_repo
            .insert(NewFeedEntry::new(actor.id, content, now))
            .await?;

        let record = self
            .read_repo
            .find_with_author(created.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("feed entry not found"))?;

        Ok(record.into())
    }
}
