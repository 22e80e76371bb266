// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{LoginUserCommand, RegisterUserCommand},
    dto::{AuthTokenDto, RegisteredUserDto, UserDto},
    error::ApplicationError,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    http::{HeaderName, HeaderValue},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Response header mirroring the issued token, for clients that read it
/// from the headers instead of the body.
pub const AUTH_HEADER: HeaderName = HeaderName::from_static("auth-header");

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub fname: String,
    pub lname: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

pub async fn register(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterRequest>,
) -> HttpResult<Json<RegisteredUserDto>> {
    let command = RegisterUserCommand {
        fname: payload.fname,
        lname: payload.lname,
        username: payload.username,
        password: payload.password,
    };

    state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Response> {
    let command = LoginUserCommand {
        username: payload.username,
        password: payload.password,
    };

    let result = state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()?;

    let token_value = HeaderValue::from_str(&result.token.token).map_err(|_| {
        HttpError::from_error(ApplicationError::infrastructure(
            "token is not a valid header value",
        ))
    })?;

    let body = LoginResponse {
        token: result.token,
        user: result.user,
    };

    let mut response = Json(body).into_response();
    response.headers_mut().insert(AUTH_HEADER, token_value);
    Ok(response)
}
