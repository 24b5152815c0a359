use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

/// Fixed-shape success envelope returned by every handler. Status codes are
/// call-site literals, not centralized policy.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: T,
}

pub fn envelope<T: Serialize>(
    status: StatusCode,
    message: &str,
    data: T,
) -> (StatusCode, Json<ApiResponse<T>>) {
    (
        status,
        Json(ApiResponse {
            message: message.to_string(),
            data,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_keeps_status_and_data() {
        let data = vec!["a".to_string(), "b".to_string()];
        let (status, Json(body)) = envelope(StatusCode::CREATED, "ok", data.clone());

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.message, "ok");
        assert_eq!(body.data, data);
    }

    #[test]
    fn test_envelope_serializes_to_message_and_data() {
        let (_, Json(body)) = envelope(StatusCode::OK, "done", json!({ "id": 1 }));
        let serialized = serde_json::to_value(&body).unwrap();

        assert_eq!(serialized, json!({ "message": "done", "data": { "id": 1 } }));
    }
}
