//! Skill catalog handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::SkillWithOwner,
    services::SkillService,
    state::AppState,
};

use super::{
    request::{CreateSkillRequest, ListSkillsQuery, UpdateSkillRequest},
    response::{CreateSkillResponse, MessageResponse},
};

/// List skills with optional filters
pub async fn list_skills(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Query(query): Query<ListSkillsQuery>,
) -> AppResult<Json<Vec<SkillWithOwner>>> {
    let skills = SkillService::list(
        state.db(),
        query.category.as_deref(),
        query.skill_type.as_deref(),
        query.search.as_deref(),
        query.user_id,
    )
    .await?;

    Ok(Json(skills))
}

/// List distinct skill categories
pub async fn list_categories(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<String>>> {
    let categories = SkillService::list_categories(state.db()).await?;
    Ok(Json(categories))
}

/// Create a skill owned by the caller
pub async fn create_skill(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateSkillRequest>,
) -> AppResult<(StatusCode, Json<CreateSkillResponse>)> {
    payload.validate()?;

    let skill = SkillService::create(
        state.db(),
        auth_user.id,
        &payload.title,
        payload.description.as_deref(),
        &payload.category,
        &payload.skill_type,
        payload.level.as_deref(),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateSkillResponse {
            message: "Skill created successfully".to_string(),
            skill,
        }),
    ))
}

/// Update a skill the caller owns
pub async fn update_skill(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateSkillRequest>,
) -> AppResult<Json<MessageResponse>> {
    payload.validate()?;

    SkillService::update(
        state.db(),
        id,
        auth_user.id,
        &payload.title,
        payload.description.as_deref(),
        &payload.category,
        &payload.skill_type,
        payload.level.as_deref(),
    )
    .await?;

    Ok(Json(MessageResponse {
        message: "Skill updated successfully".to_string(),
    }))
}

/// Delete a skill the caller owns
pub async fn delete_skill(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    SkillService::delete(state.db(), id, auth_user.id).await?;

    Ok(Json(MessageResponse {
        message: "Skill deleted successfully".to_string(),
    }))
}
