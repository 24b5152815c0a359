use anyhow::Result;
use mongodb::bson::oid::ObjectId;
use tracing::{error, info};

use crate::models::CoachProfile;
use crate::services::UserService;

#[derive(Clone)]
pub struct CoachController {
    users: UserService,
}

impl CoachController {
    pub fn new(users: UserService) -> Self {
        Self { users }
    }

    pub async fn list_coaches(&self) -> Result<Vec<CoachProfile>> {
        info!("listing coaches");
        self.users.list_coaches().await.map_err(|err| {
            error!("failed to list coaches: {err}");
            err
        })
    }

    pub async fn get_coach(&self, coach_id: ObjectId) -> Result<Option<CoachProfile>> {
        info!(%coach_id, "fetching coach");
        self.users.get_coach(coach_id).await.map_err(|err| {
            error!("failed to fetch coach: {err}");
            err
        })
    }
}
