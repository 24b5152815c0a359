use anyhow::Result;
use mongodb::bson::oid::ObjectId;
use tracing::{error, info};

use crate::models::{BookingRequest, BookingResponse};
use crate::services::BookingService;

#[derive(Clone)]
pub struct BookingController {
    bookings: BookingService,
}

impl BookingController {
    pub fn new(bookings: BookingService) -> Self {
        Self { bookings }
    }

    pub async fn create_booking(
        &self,
        client_id: ObjectId,
        coach_id: ObjectId,
        request: BookingRequest,
    ) -> Result<BookingResponse> {
        info!(%client_id, %coach_id, "creating booking");
        self.bookings
            .create_booking(client_id, coach_id, request)
            .await
            .map_err(|err| {
                error!("failed to create booking: {err}");
                err
            })
    }

    pub async fn bookings_for_client(&self, client_id: ObjectId) -> Result<Vec<BookingResponse>> {
        info!(%client_id, "fetching bookings");
        self.bookings
            .bookings_for_client(client_id)
            .await
            .map_err(|err| {
                error!("failed to fetch bookings: {err}");
                err
            })
    }
}
