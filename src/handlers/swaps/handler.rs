//! Swap negotiation handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::SwapWithDetails,
    services::SwapService,
    state::AppState,
};

use super::{
    request::{CreateSwapRequest, ListSwapsQuery, UpdateSwapStatusRequest},
    response::{CreateSwapResponse, MessageResponse},
};

/// List the caller's swaps, optionally filtered to one status
pub async fn list_swaps(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ListSwapsQuery>,
) -> AppResult<Json<Vec<SwapWithDetails>>> {
    let swaps = SwapService::list(state.db(), auth_user.id, query.status.as_deref()).await?;
    Ok(Json(swaps))
}

/// Create a swap request with the caller as requester
pub async fn create_swap(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateSwapRequest>,
) -> AppResult<(StatusCode, Json<CreateSwapResponse>)> {
    payload.validate()?;

    let swap = SwapService::create(
        state.db(),
        auth_user.id,
        payload.provider_id,
        payload.offered_skill_id,
        payload.wanted_skill_id,
        payload.message.as_deref(),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateSwapResponse {
            message: "Swap request created successfully".to_string(),
            swap,
        }),
    ))
}

/// Transition a swap request's status
pub async fn update_swap_status(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateSwapStatusRequest>,
) -> AppResult<Json<MessageResponse>> {
    SwapService::update_status(state.db(), id, auth_user.id, &payload.status).await?;

    Ok(Json(MessageResponse {
        message: "Swap request updated successfully".to_string(),
    }))
}

/// Delete a swap request the caller filed
pub async fn delete_swap(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    SwapService::delete(state.db(), id, auth_user.id).await?;

    Ok(Json(MessageResponse {
        message: "Swap request deleted successfully".to_string(),
    }))
}
