//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod auth;
pub mod health;
pub mod reviews;
pub mod skills;
pub mod swaps;
pub mod users;

use axum::{middleware, Router};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Create all API routes
///
/// Everything except registration, login, and the health probe sits behind
/// the bearer-credential middleware.
pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .nest("/users", users::routes())
        .nest("/skills", skills::routes())
        .nest("/swaps", swaps::routes())
        .nest("/reviews", reviews::routes())
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes())
        .merge(protected)
}
