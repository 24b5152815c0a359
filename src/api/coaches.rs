use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use mongodb::bson::oid::ObjectId;

use crate::api::response::{envelope, ApiResponse};
use crate::api::routes::AppState;
use crate::error::ApiError;
use crate::models::CoachProfile;

/// Public coach listing.
#[tracing::instrument(skip(state))]
pub async fn list_coaches(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<CoachProfile>>>), ApiError> {
    let coaches = state.coaches.list_coaches().await?;

    Ok(envelope(
        StatusCode::OK,
        "Coaches retrieved successfully",
        coaches,
    ))
}

#[tracing::instrument(skip(state))]
pub async fn get_coach(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<CoachProfile>>), ApiError> {
    let coach_id = ObjectId::parse_str(&id).map_err(|_| ApiError::InvalidId)?;

    let coach = state
        .coaches
        .get_coach(coach_id)
        .await?
        .ok_or(ApiError::NotFound("Coach"))?;

    Ok(envelope(
        StatusCode::OK,
        "Coach retrieved successfully",
        coach,
    ))
}
