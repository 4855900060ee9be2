//! User profile handler implementations

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::AvailabilitySlot,
    services::UserService,
    state::AppState,
};

use super::{
    request::{UpdateAvailabilityRequest, UpdateProfileRequest},
    response::{MessageResponse, ProfileResponse, PublicUserResponse},
};

/// Get the caller's profile with derived stats
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<ProfileResponse>> {
    let (user, stats) = UserService::get_with_stats(state.db(), auth_user.id).await?;
    Ok(Json(ProfileResponse::new(user, stats)))
}

/// Update the caller's profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> AppResult<Json<MessageResponse>> {
    payload.validate()?;

    UserService::update_profile(
        state.db(),
        auth_user.id,
        payload.name.as_deref(),
        payload.location.as_deref(),
        payload.bio.as_deref(),
        payload.photo.as_deref(),
    )
    .await?;

    Ok(Json(MessageResponse {
        message: "Profile updated successfully".to_string(),
    }))
}

/// Get another user's public profile with derived stats
pub async fn get_user(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<PublicUserResponse>> {
    let (user, stats) = UserService::get_with_stats(state.db(), id).await?;
    Ok(Json(PublicUserResponse::new(user, stats)))
}

/// Get the caller's availability slots
pub async fn get_availability(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<AvailabilitySlot>>> {
    let slots = UserService::get_availability(state.db(), auth_user.id).await?;
    Ok(Json(slots))
}

/// Replace the caller's availability slots
pub async fn update_availability(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<UpdateAvailabilityRequest>,
) -> AppResult<Json<Vec<AvailabilitySlot>>> {
    let slots = UserService::set_availability(state.db(), auth_user.id, &payload.slots).await?;
    Ok(Json(slots))
}
