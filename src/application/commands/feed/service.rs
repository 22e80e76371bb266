use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::feed::{FeedReadRepository, FeedWriteRepository};

pub struct FeedCommandService {
    pub(super) write_repo: Arc<dyn FeedWriteRepository>,
    pub(super) read_repo: Arc<dyn FeedReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl FeedCommandService {
    pub fn new(
        write_repo: Arc<dyn FeedWriteRepository>,
        read_repo: Arc<dyn FeedReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            clock,
        }
    }
}
