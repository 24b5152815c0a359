use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;
use validator::Validate;

use crate::api::response::{envelope, ApiResponse};
use crate::api::routes::AppState;
use crate::auth::AuthenticatedUser;
use crate::error::ApiError;
use crate::models::{
    validation::validation_messages, CreateFeedbackRequest, FeedbackPage, FeedbackResponse,
};

#[derive(Debug, Deserialize)]
pub struct FeedbackQuery {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

#[tracing::instrument(skip(state, request))]
pub async fn submit_feedback(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateFeedbackRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FeedbackResponse>>), ApiError> {
    request
        .validate()
        .map_err(|errors| ApiError::Validation(validation_messages(&errors)))?;

    let user_id = ObjectId::parse_str(&user.sub).map_err(|_| ApiError::InvalidId)?;
    let booking_id = ObjectId::parse_str(&request.booking_id).map_err(|_| ApiError::InvalidId)?;

    let feedback = state
        .feedback
        .submit(user_id, booking_id, request)
        .await?
        .ok_or(ApiError::NotFound("Booking"))?;

    Ok(envelope(
        StatusCode::CREATED,
        "Feedback submitted successfully",
        feedback,
    ))
}

/// Paginated feedback for one coach, newest first.
#[tracing::instrument(skip(state))]
pub async fn coach_feedback(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<FeedbackQuery>,
) -> Result<(StatusCode, Json<ApiResponse<FeedbackPage>>), ApiError> {
    let coach_id = ObjectId::parse_str(&id).map_err(|_| ApiError::InvalidId)?;

    let page = query.page.unwrap_or(1).max(1);
    let page_size = query.page_size.unwrap_or(10).clamp(1, 100);

    let feedback = state.feedback.for_coach(coach_id, page, page_size).await?;

    Ok(envelope(
        StatusCode::OK,
        "Feedback retrieved successfully",
        feedback,
    ))
}
