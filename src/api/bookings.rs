use axum::{extract::State, http::StatusCode, Extension, Json};
use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::api::response::{envelope, ApiResponse};
use crate::api::routes::AppState;
use crate::auth::AuthenticatedUser;
use crate::error::ApiError;
use crate::models::{validation::validation_messages, BookingRequest, BookingResponse};

/// Fetch the authenticated client's bookings.
///
/// The 201 success status is part of the contract the frontend was built
/// against and is kept as-is.
#[tracing::instrument(skip(state))]
pub async fn list_bookings(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<BookingResponse>>>), ApiError> {
    let client_id = ObjectId::parse_str(&user.sub).map_err(|_| ApiError::InvalidId)?;

    let bookings = state.bookings.bookings_for_client(client_id).await?;

    Ok(envelope(
        StatusCode::CREATED,
        "Bookings retrieved successfully",
        bookings,
    ))
}

#[tracing::instrument(skip(state, request))]
pub async fn create_booking(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<BookingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BookingResponse>>), ApiError> {
    request
        .validate()
        .map_err(|errors| ApiError::Validation(validation_messages(&errors)))?;

    let client_id = ObjectId::parse_str(&user.sub).map_err(|_| ApiError::InvalidId)?;
    let coach_id = ObjectId::parse_str(&request.coach_id).map_err(|_| ApiError::InvalidId)?;

    let booking = state
        .bookings
        .create_booking(client_id, coach_id, request)
        .await?;

    Ok(envelope(
        StatusCode::CREATED,
        "Booking created successfully",
        booking,
    ))
}
