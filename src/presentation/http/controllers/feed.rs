// src/presentation/http/controllers/feed.rs
use crate::application::{
    commands::feed::{CreateEntryCommand, SetVotesCommand},
    dto::FeedEntryDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct SetVotesRequest {
    pub upvote_count: i64,
    pub downvote_count: i64,
}

pub async fn list_feed(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<FeedEntryDto>>> {
    state
        .services
        .feed_queries
        .list_feed()
        .await
        .into_http()
        .map(Json)
}

pub async fn create_entry(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateEntryRequest>,
) -> HttpResult<Json<FeedEntryDto>> {
    let command = CreateEntryCommand {
        content: payload.content,
    };

    state
        .services
        .feed_commands
        .create_entry(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn set_votes(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<SetVotesRequest>,
) -> HttpResult<Json<FeedEntryDto>> {
    let command = SetVotesCommand {
        entry_id: id,
        upvote_count: payload.upvote_count,
        downvote_count: payload.downvote_count,
    };

    state
        .services
        .feed_commands
        .set_votes(&user, command)
        .await
        .into_http()
        .map(Json)
}
