use axum::{extract::State, http::StatusCode, Extension, Json};
use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::api::response::{envelope, ApiResponse};
use crate::api::routes::AppState;
use crate::auth::AuthenticatedUser;
use crate::error::ApiError;
use crate::models::{
    validation::validation_messages, ClientDetailsResponse, ClientPreferencesRequest,
};

#[tracing::instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<(StatusCode, Json<ApiResponse<ClientDetailsResponse>>), ApiError> {
    let user_id = ObjectId::parse_str(&user.sub).map_err(|_| ApiError::InvalidId)?;

    let details = state
        .clients
        .get_details(user_id)
        .await?
        .ok_or(ApiError::NotFound("Client profile"))?;

    Ok(envelope(
        StatusCode::OK,
        "Client profile retrieved successfully",
        details,
    ))
}

#[tracing::instrument(skip(state, request))]
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<ClientPreferencesRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ClientDetailsResponse>>), ApiError> {
    request
        .validate()
        .map_err(|errors| ApiError::Validation(validation_messages(&errors)))?;

    let user_id = ObjectId::parse_str(&user.sub).map_err(|_| ApiError::InvalidId)?;

    let details = state.clients.save_details(user_id, request).await?;

    Ok(envelope(
        StatusCode::OK,
        "Client profile updated successfully",
        details,
    ))
}
