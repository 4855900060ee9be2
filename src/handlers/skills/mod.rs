//! Skill catalog handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;

/// Skill catalog routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_skills))
        .route("/", post(handler::create_skill))
        .route("/categories", get(handler::list_categories))
        .route("/{id}", put(handler::update_skill))
        .route("/{id}", delete(handler::delete_skill))
}
