use anyhow::Result;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::FindOptions;
use mongodb::{Collection, Database};

use crate::models::{Booking, CreateFeedbackRequest, Feedback, FeedbackPage, FeedbackResponse};

const FEEDBACKS: &str = "Feedbacks";
const BOOKINGS: &str = "Bookings";

#[derive(Clone)]
pub struct FeedbackService {
    db: Database,
}

impl FeedbackService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn feedbacks(&self) -> Collection<Feedback> {
        self.db.collection(FEEDBACKS)
    }

    /// Record feedback for a booking. The coach reference is taken from the
    /// booking itself; `None` means the booking does not exist.
    pub async fn submit(
        &self,
        user_id: ObjectId,
        booking_id: ObjectId,
        request: CreateFeedbackRequest,
    ) -> Result<Option<FeedbackResponse>> {
        let booking = self
            .db
            .collection::<Booking>(BOOKINGS)
            .find_one(doc! { "_id": booking_id }, None)
            .await?;

        let Some(booking) = booking else {
            return Ok(None);
        };

        let feedback = Feedback {
            id: None,
            user_id,
            booking_id,
            coach_id: booking.coach_id,
            message: request.message,
            rating: i32::from(request.rating),
            created_at: Utc::now(),
        };

        let result = self.feedbacks().insert_one(&feedback, None).await?;

        Ok(Some(FeedbackResponse::from(Feedback {
            id: result.inserted_id.as_object_id(),
            ..feedback
        })))
    }

    /// One page of a coach's feedback, newest first.
    pub async fn for_coach(
        &self,
        coach_id: ObjectId,
        page: u64,
        page_size: u64,
    ) -> Result<FeedbackPage> {
        let filter = doc! { "coach_id": coach_id };

        let total = self
            .feedbacks()
            .count_documents(filter.clone(), None)
            .await?;

        let options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .skip(page.saturating_sub(1) * page_size)
            .limit(page_size as i64)
            .build();
        let cursor = self.feedbacks().find(filter, options).await?;
        let items: Vec<Feedback> = cursor.try_collect().await?;

        Ok(FeedbackPage {
            items: items.into_iter().map(FeedbackResponse::from).collect(),
            page,
            page_size,
            total,
        })
    }
}
