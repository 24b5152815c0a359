// Contract-level checks for the response envelope and the document/response
// conversions the handlers rely on.

use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use pretty_assertions::assert_eq;
use serde_json::json;

use gymbook::api::response::envelope;
use gymbook::models::{Booking, BookingResponse, Feedback, FeedbackResponse};

#[test]
fn test_booking_fetch_envelope_is_201_with_service_data() {
    // What the service hands back...
    let bookings = vec![BookingResponse {
        id: ObjectId::new().to_hex(),
        client_id: ObjectId::new().to_hex(),
        coach_id: ObjectId::new().to_hex(),
        time_slot: "10:00".to_string(),
        date: "2024-07-01".to_string(),
        created_at: Utc::now(),
    }];

    // ...is exactly what the handler envelopes, under a literal 201.
    let (status, Json(body)) = envelope(
        StatusCode::CREATED,
        "Bookings retrieved successfully",
        bookings.clone(),
    );

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.message, "Bookings retrieved successfully");
    assert_eq!(body.data, bookings);
}

#[test]
fn test_envelope_wire_shape() {
    let (_, Json(body)) = envelope(StatusCode::OK, "ok", json!({ "n": 1 }));
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({ "message": "ok", "data": { "n": 1 } })
    );
}

#[test]
fn test_submitted_feedback_fields_survive_the_round_trip() {
    let user_id = ObjectId::new();
    let booking_id = ObjectId::new();
    let coach_id = ObjectId::new();

    // The document the submission writes...
    let stored = Feedback {
        id: Some(ObjectId::new()),
        user_id,
        booking_id,
        coach_id,
        message: "Pushed me hard, would book again".to_string(),
        rating: 4,
        created_at: Utc::now(),
    };

    // ...comes back from the per-coach query with the submitted fields.
    let returned = FeedbackResponse::from(stored.clone());
    assert_eq!(returned.user_id, user_id.to_hex());
    assert_eq!(returned.booking_id, booking_id.to_hex());
    assert_eq!(returned.message, stored.message);
    assert_eq!(returned.rating, stored.rating);
}

#[test]
fn test_booking_response_exposes_hex_ids() {
    let booking = Booking {
        id: Some(ObjectId::new()),
        client_id: ObjectId::new(),
        coach_id: ObjectId::new(),
        time_slot: "18:30".to_string(),
        date: "2024-08-15".to_string(),
        created_at: Utc::now(),
    };

    let response = BookingResponse::from(booking.clone());
    assert_eq!(response.id, booking.id.unwrap().to_hex());
    assert_eq!(response.coach_id, booking.coach_id.to_hex());
    assert_eq!(response.time_slot, "18:30");
}
