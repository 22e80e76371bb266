use std::sync::Arc;

use crate::domain::feed::FeedReadRepository;

pub struct FeedQueryService {
    pub(super) read_repo: Arc<dyn FeedReadRepository>,
}

impl FeedQueryService {
    pub fn new(read_repo: Arc<dyn FeedReadRepository>) -> Self {
        Self { read_repo }
    }
}
