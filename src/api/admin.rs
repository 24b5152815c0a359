use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::api::response::{envelope, ApiResponse};
use crate::api::routes::AppState;
use crate::auth::AuthenticatedUser;
use crate::error::{map_database_error, ApiError};
use crate::models::{
    validation::validation_messages, ActivityReport, AdminDetailsRequest, AdminDetailsResponse,
    AdminEmailResponse, RegisterAdminEmailRequest, ReportRequest, WorkoutOptionRequest,
    WorkoutOptionResponse,
};

#[tracing::instrument(skip(state, request))]
pub async fn create_workout_option(
    State(state): State<AppState>,
    Json(request): Json<WorkoutOptionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<WorkoutOptionResponse>>), ApiError> {
    request
        .validate()
        .map_err(|errors| ApiError::Validation(validation_messages(&errors)))?;

    let coaches_id = parse_coach_refs(request.coaches_id)?;
    let option = state
        .workout_options
        .create(request.name, coaches_id)
        .await?;

    Ok(envelope(
        StatusCode::CREATED,
        "Workout option created successfully",
        option,
    ))
}

#[tracing::instrument(skip(state))]
pub async fn list_workout_options(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<WorkoutOptionResponse>>>), ApiError> {
    let options = state.workout_options.list().await?;

    Ok(envelope(
        StatusCode::OK,
        "Workout options retrieved successfully",
        options,
    ))
}

#[tracing::instrument(skip(state, request))]
pub async fn update_workout_option(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<WorkoutOptionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<WorkoutOptionResponse>>), ApiError> {
    request
        .validate()
        .map_err(|errors| ApiError::Validation(validation_messages(&errors)))?;

    let option_id = ObjectId::parse_str(&id).map_err(|_| ApiError::InvalidId)?;
    let coaches_id = parse_coach_refs(request.coaches_id)?;

    let option = state
        .workout_options
        .update(option_id, request.name, coaches_id)
        .await?
        .ok_or(ApiError::NotFound("Workout option"))?;

    Ok(envelope(
        StatusCode::OK,
        "Workout option updated successfully",
        option,
    ))
}

#[tracing::instrument(skip(state, request))]
pub async fn save_details(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<AdminDetailsRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AdminDetailsResponse>>), ApiError> {
    request
        .validate()
        .map_err(|errors| ApiError::Validation(validation_messages(&errors)))?;

    let user_id = ObjectId::parse_str(&user.sub).map_err(|_| ApiError::InvalidId)?;

    let details = state
        .admin
        .save_details(user_id, request.phone_number)
        .await?;

    Ok(envelope(
        StatusCode::OK,
        "Admin details saved successfully",
        details,
    ))
}

#[tracing::instrument(skip(state, request))]
pub async fn register_email(
    State(state): State<AppState>,
    Json(request): Json<RegisterAdminEmailRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AdminEmailResponse>>), ApiError> {
    request
        .validate()
        .map_err(|errors| ApiError::Validation(validation_messages(&errors)))?;

    let email = state
        .admin
        .register_email(request.email)
        .await
        .map_err(map_database_error)?;

    Ok(envelope(
        StatusCode::CREATED,
        "Admin email registered successfully",
        email,
    ))
}

#[tracing::instrument(skip(state, request))]
pub async fn activity_report(
    State(state): State<AppState>,
    Json(request): Json<ReportRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ActivityReport>>), ApiError> {
    request
        .validate()
        .map_err(|errors| ApiError::Validation(validation_messages(&errors)))?;

    let report = state.admin.activity_report(request).await?;

    Ok(envelope(
        StatusCode::OK,
        "Report generated successfully",
        report,
    ))
}

fn parse_coach_refs(ids: Option<Vec<String>>) -> Result<Option<Vec<ObjectId>>, ApiError> {
    ids.map(|list| {
        list.iter()
            .map(|id| ObjectId::parse_str(id).map_err(|_| ApiError::InvalidId))
            .collect::<Result<Vec<_>, _>>()
    })
    .transpose()
}
