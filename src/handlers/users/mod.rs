//! User profile handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{get, put},
    Router,
};

use crate::state::AppState;

/// User routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(handler::get_profile))
        .route("/profile", put(handler::update_profile))
        .route("/availability", get(handler::get_availability))
        .route("/availability", put(handler::update_availability))
        .route("/{id}", get(handler::get_user))
}
