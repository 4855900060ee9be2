//! Review handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::ReviewWithReviewer,
    services::ReviewService,
    state::AppState,
};

use super::{request::CreateReviewRequest, response::CreateReviewResponse};

/// Reviews received by a user
pub async fn list_user_reviews(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<ReviewWithReviewer>>> {
    let reviews = ReviewService::list_for_user(state.db(), id).await?;
    Ok(Json(reviews))
}

/// Create a review for a completed swap
pub async fn create_review(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateReviewRequest>,
) -> AppResult<(StatusCode, Json<CreateReviewResponse>)> {
    payload.validate()?;

    let review = ReviewService::create(
        state.db(),
        auth_user.id,
        payload.swap_request_id,
        payload.reviewee_id,
        payload.rating,
        payload.feedback.as_deref(),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateReviewResponse {
            message: "Review created successfully".to_string(),
            review,
        }),
    ))
}
