use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::UserRole;

/// Claims carried by the identity token issued at sign-in. Everything except
/// `exp` is optional at the wire level; [`extract_user_from_decoded_token`]
/// decides what is actually required.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub role: Option<UserRole>,
    pub exp: usize,
    #[serde(default)]
    pub iat: usize,
}

/// The identity a request acts as once its token has been decoded.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub sub: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

/// Build an [`AuthenticatedUser`] from decoded claims.
///
/// All of `sub`, `email` and both names must be present and non-empty; a
/// token missing any of them yields `None`, never a partial user. A missing
/// role defaults to client.
pub fn extract_user_from_decoded_token(claims: &Claims) -> Option<AuthenticatedUser> {
    let sub = non_empty(claims.sub.as_deref())?;
    let email = non_empty(claims.email.as_deref())?;
    let first_name = non_empty(claims.given_name.as_deref())?;
    let last_name = non_empty(claims.family_name.as_deref())?;

    Some(AuthenticatedUser {
        sub: sub.to_string(),
        email: email.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        role: claims.role.clone().unwrap_or(UserRole::Client),
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}

/// Validates and decodes bearer tokens.
#[derive(Clone)]
pub struct TokenDecoder {
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for TokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDecoder")
            .field("decoding_key", &"[REDACTED]")
            .finish()
    }
}

impl TokenDecoder {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Validate and decode a token
    pub fn decode(&self, token: &str) -> Result<Claims, ApiError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|err| match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => ApiError::TokenExpired,
                _ => ApiError::InvalidToken,
            })
    }
}

/// Extract bearer token from authorization header
pub fn extract_bearer_token(auth_header: &str) -> Result<&str, ApiError> {
    if !auth_header.starts_with("Bearer ") {
        return Err(ApiError::InvalidAuthHeaderFormat);
    }

    let token = auth_header.strip_prefix("Bearer ").unwrap();
    if token.is_empty() {
        return Err(ApiError::InvalidAuthHeaderFormat);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use mongodb::bson::oid::ObjectId;

    fn full_claims() -> Claims {
        Claims {
            sub: Some(ObjectId::new().to_hex()),
            email: Some("client@example.com".to_string()),
            given_name: Some("Ana".to_string()),
            family_name: Some("Silva".to_string()),
            role: Some(UserRole::Client),
            exp: (chrono::Utc::now().timestamp() + 3600) as usize,
            iat: chrono::Utc::now().timestamp() as usize,
        }
    }

    #[test]
    fn test_extracts_full_user() {
        let claims = full_claims();
        let user = extract_user_from_decoded_token(&claims).unwrap();

        assert_eq!(Some(user.sub), claims.sub);
        assert_eq!(user.email, "client@example.com");
        assert_eq!(user.first_name, "Ana");
        assert_eq!(user.last_name, "Silva");
        assert_eq!(user.role, UserRole::Client);
    }

    #[test]
    fn test_missing_fields_yield_no_user() {
        for strip in ["sub", "email", "given_name", "family_name"] {
            let mut claims = full_claims();
            match strip {
                "sub" => claims.sub = None,
                "email" => claims.email = None,
                "given_name" => claims.given_name = None,
                _ => claims.family_name = None,
            }
            assert!(
                extract_user_from_decoded_token(&claims).is_none(),
                "expected no user when {} is missing",
                strip
            );
        }
    }

    #[test]
    fn test_blank_fields_count_as_missing() {
        let mut claims = full_claims();
        claims.given_name = Some("   ".to_string());
        assert!(extract_user_from_decoded_token(&claims).is_none());
    }

    #[test]
    fn test_missing_role_defaults_to_client() {
        let mut claims = full_claims();
        claims.role = None;
        let user = extract_user_from_decoded_token(&claims).unwrap();
        assert_eq!(user.role, UserRole::Client);
    }

    #[test]
    fn test_decode_round_trip() {
        let decoder = TokenDecoder::new("test_secret");
        let claims = full_claims();
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test_secret"),
        )
        .unwrap();

        let decoded = decoder.decode(&token).unwrap();
        assert_eq!(decoded.sub, claims.sub);
        assert_eq!(decoded.email, claims.email);
    }

    #[test]
    fn test_decode_rejects_wrong_secret() {
        let decoder = TokenDecoder::new("test_secret");
        let token = encode(
            &Header::default(),
            &full_claims(),
            &EncodingKey::from_secret(b"other_secret"),
        )
        .unwrap();

        assert!(matches!(
            decoder.decode(&token),
            Err(ApiError::InvalidToken)
        ));
    }

    #[test]
    fn test_bearer_token_extraction() {
        assert_eq!(
            extract_bearer_token("Bearer test_token").unwrap(),
            "test_token"
        );

        assert!(extract_bearer_token("Invalid header").is_err());
        assert!(extract_bearer_token("Bearer ").is_err());
    }
}
