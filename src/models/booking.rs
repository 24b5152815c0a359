use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A booked workout slot between a client and a coach.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub client_id: ObjectId,
    pub coach_id: ObjectId,
    pub time_slot: String,
    pub date: String,
    pub created_at: DateTime<Utc>,
}

/// Search/booking payload. Coach, time and date must all be present.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BookingRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Coach is required"))]
    pub coach_id: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Time slot is required"))]
    pub time_slot: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingResponse {
    pub id: String,
    pub client_id: String,
    pub coach_id: String,
    pub time_slot: String,
    pub date: String,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id.map(|id| id.to_hex()).unwrap_or_default(),
            client_id: booking.client_id.to_hex(),
            coach_id: booking.coach_id.to_hex(),
            time_slot: booking.time_slot,
            date: booking.date,
            created_at: booking.created_at,
        }
    }
}
