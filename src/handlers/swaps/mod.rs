//! Swap negotiation handlers

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

/// Swap negotiation routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_swaps))
        .route("/", post(handler::create_swap))
        .route("/{id}/status", put(handler::update_swap_status))
        .route("/{id}", delete(handler::delete_swap))
}
