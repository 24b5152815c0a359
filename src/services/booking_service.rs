use anyhow::Result;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::FindOptions;
use mongodb::{Collection, Database};

use crate::models::{Booking, BookingRequest, BookingResponse};

const BOOKINGS: &str = "Bookings";

#[derive(Clone)]
pub struct BookingService {
    db: Database,
}

impl BookingService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn bookings(&self) -> Collection<Booking> {
        self.db.collection(BOOKINGS)
    }

    pub async fn create_booking(
        &self,
        client_id: ObjectId,
        coach_id: ObjectId,
        request: BookingRequest,
    ) -> Result<BookingResponse> {
        let booking = Booking {
            id: None,
            client_id,
            coach_id,
            time_slot: request.time_slot,
            date: request.date,
            created_at: Utc::now(),
        };

        let result = self.bookings().insert_one(&booking, None).await?;

        Ok(BookingResponse::from(Booking {
            id: result.inserted_id.as_object_id(),
            ..booking
        }))
    }

    pub async fn bookings_for_client(&self, client_id: ObjectId) -> Result<Vec<BookingResponse>> {
        let options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .build();
        let cursor = self
            .bookings()
            .find(doc! { "client_id": client_id }, options)
            .await?;
        let bookings: Vec<Booking> = cursor.try_collect().await?;

        Ok(bookings.into_iter().map(BookingResponse::from).collect())
    }
}
