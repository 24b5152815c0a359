use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::auth::token::{
    extract_bearer_token, extract_user_from_decoded_token, AuthenticatedUser, TokenDecoder,
};
use crate::error::ApiError;
use crate::models::UserRole;

/// Bearer-token authentication middleware. On success the decoded identity
/// is available to handlers through request extensions.
pub async fn auth_middleware(
    State(decoder): State<TokenDecoder>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or(ApiError::MissingAuthHeader)?;

    let token = extract_bearer_token(auth_header)?;
    let claims = decoder.decode(token)?;

    // A token without the full identity is rejected outright.
    let user = extract_user_from_decoded_token(&claims).ok_or(ApiError::InvalidToken)?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Admin-only middleware, layered inside [`auth_middleware`].
pub async fn admin_only_middleware(request: Request, next: Next) -> Result<Response, ApiError> {
    let user = request
        .extensions()
        .get::<AuthenticatedUser>()
        .ok_or(ApiError::Forbidden)?;

    if user.role != UserRole::Admin {
        return Err(ApiError::Forbidden);
    }

    Ok(next.run(request).await)
}
