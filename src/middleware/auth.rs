//! Authentication middleware
//!
//! Resolves the bearer credential on every request: a missing or malformed
//! Authorization header is 401, an invalid or expired token (or a token for
//! a user that no longer exists) is 403. The resolved user is re-read from
//! the store each time so a deleted account is locked out immediately.

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    db::repositories::UserRepository, error::AppError, services::AuthService, state::AppState,
};

/// Authenticated user extracted from the bearer credential
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub photo: Option<String>,
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Authentication middleware
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let Some(auth_header) = auth_header else {
        debug!(path = %path, "Auth failed: no Authorization header");
        return Err(AppError::Unauthorized);
    };

    let Some(token) = auth_header.strip_prefix("Bearer ") else {
        debug!(path = %path, "Auth failed: expected 'Bearer <token>'");
        return Err(AppError::Unauthorized);
    };

    let claims = AuthService::verify_token(token, &state.config().jwt.secret).map_err(|e| {
        debug!(path = %path, error = ?e, "Auth failed: token verification failed");
        e
    })?;

    let user_id: i64 = claims.sub.parse().map_err(|_| {
        debug!(path = %path, sub = %claims.sub, "Auth failed: invalid user id in token");
        AppError::InvalidToken
    })?;

    let user = UserRepository::find_by_id(state.db(), user_id)
        .await?
        .ok_or_else(|| {
            debug!(path = %path, user_id, "Auth failed: user not found");
            AppError::InvalidToken
        })?;

    request.extensions_mut().insert(AuthenticatedUser {
        id: user.id,
        email: user.email,
        name: user.name,
        photo: user.photo,
    });

    Ok(next.run(request).await)
}
