//! Review ledger handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Review routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_review))
        .route("/user/{id}", get(handler::list_user_reviews))
}
