use anyhow::Result;
use mongodb::bson::oid::ObjectId;
use tracing::{error, info};

use crate::models::{CreateFeedbackRequest, FeedbackPage, FeedbackResponse};
use crate::services::FeedbackService;

#[derive(Clone)]
pub struct FeedbackController {
    feedback: FeedbackService,
}

impl FeedbackController {
    pub fn new(feedback: FeedbackService) -> Self {
        Self { feedback }
    }

    pub async fn submit(
        &self,
        user_id: ObjectId,
        booking_id: ObjectId,
        request: CreateFeedbackRequest,
    ) -> Result<Option<FeedbackResponse>> {
        info!(%user_id, %booking_id, "submitting feedback");
        self.feedback
            .submit(user_id, booking_id, request)
            .await
            .map_err(|err| {
                error!("failed to submit feedback: {err}");
                err
            })
    }

    pub async fn for_coach(
        &self,
        coach_id: ObjectId,
        page: u64,
        page_size: u64,
    ) -> Result<FeedbackPage> {
        info!(%coach_id, page, "fetching coach feedback");
        self.feedback
            .for_coach(coach_id, page, page_size)
            .await
            .map_err(|err| {
                error!("failed to fetch coach feedback: {err}");
                err
            })
    }
}
