use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Feedback left by a client after a booking. Written once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub booking_id: ObjectId,
    pub coach_id: ObjectId,
    pub message: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFeedbackRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Booking is required"))]
    pub booking_id: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Feedback message is required"))]
    pub message: String,

    #[serde(default)]
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackResponse {
    pub id: String,
    pub user_id: String,
    pub booking_id: String,
    pub coach_id: String,
    pub message: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Feedback> for FeedbackResponse {
    fn from(feedback: Feedback) -> Self {
        Self {
            id: feedback.id.map(|id| id.to_hex()).unwrap_or_default(),
            user_id: feedback.user_id.to_hex(),
            booking_id: feedback.booking_id.to_hex(),
            coach_id: feedback.coach_id.to_hex(),
            message: feedback.message,
            rating: feedback.rating,
            created_at: feedback.created_at,
        }
    }
}

/// One page of a coach's feedback, newest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackPage {
    pub items: Vec<FeedbackResponse>,
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
}
