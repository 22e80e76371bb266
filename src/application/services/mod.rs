// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{feed::FeedCommandService, users::UserCommandService},
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
        queries::feed::FeedQueryService,
    },
    domain::{
        feed::{FeedReadRepository, FeedWriteRepository},
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub feed_commands: Arc<FeedCommandService>,
    pub feed_queries: Arc<FeedQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        feed_write_repo: Arc<dyn FeedWriteRepository>,
        feed_read_repo: Arc<dyn FeedReadRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));

        let feed_commands = Arc::new(FeedCommandService::new(
            Arc::clone(&feed_write_repo),
            Arc::clone(&feed_read_repo),
            Arc::clone(&clock),
        ));

        let feed_queries = Arc::new(FeedQueryService::new(Arc::clone(&feed_read_repo)));

        Self {
            user_commands,
            feed_commands,
            feed_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }
}
