use super::FeedQueryService;
use crate::application::{dto::FeedEntryDto, error::ApplicationResult};

impl FeedQueryService {
    /// The whole feed, newest first, authors joined. Open to anyone; no
    /// authentication and no pagination.
    pub async fn list_feed(&self) -> ApplicationResult<Vec<FeedEntryDto>> {
        let records = self.read_repo.list_newest_first().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
