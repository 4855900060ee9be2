//! Authentication handler implementations

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    error::AppResult,
    services::{auth_service::TokenPair, AuthService},
    state::AppState,
};

use super::{
    request::{GoogleAuthRequest, LoginRequest, RegisterRequest},
    response::AuthResponse,
};

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    payload.validate()?;

    let (user, tokens) = AuthService::register(
        state.db(),
        state.config(),
        &payload.name,
        &payload.email,
        &payload.password,
        payload.location.as_deref(),
        payload.bio.as_deref(),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(auth_response("User created successfully", user.into(), tokens)),
    ))
}

/// Login with email and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    payload.validate()?;

    let (user, tokens) =
        AuthService::login(state.db(), state.config(), &payload.email, &payload.password).await?;

    Ok(Json(auth_response("Login successful", user.into(), tokens)))
}

/// Login or create an account from an external-provider profile
pub async fn google_auth(
    State(state): State<AppState>,
    Json(payload): Json<GoogleAuthRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    payload.validate()?;

    let profile = &payload.profile;
    let (user, tokens, created) = AuthService::login_external(
        state.db(),
        state.config(),
        &profile.id,
        &profile.email,
        &profile.name,
        profile.picture.as_deref(),
    )
    .await?;

    let (status, message) = if created {
        (StatusCode::CREATED, "User created successfully")
    } else {
        (StatusCode::OK, "Login successful")
    };

    Ok((status, Json(auth_response(message, user.into(), tokens))))
}

fn auth_response(
    message: &str,
    user: super::response::UserResponse,
    tokens: TokenPair,
) -> AuthResponse {
    AuthResponse {
        message: message.to_string(),
        user,
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        token_type: "Bearer".to_string(),
        expires_in: tokens.expires_in,
    }
}
