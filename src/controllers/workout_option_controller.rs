use anyhow::Result;
use mongodb::bson::oid::ObjectId;
use tracing::{error, info};

use crate::models::WorkoutOptionResponse;
use crate::services::WorkoutOptionService;

#[derive(Clone)]
pub struct WorkoutOptionController {
    options: WorkoutOptionService,
}

impl WorkoutOptionController {
    pub fn new(options: WorkoutOptionService) -> Self {
        Self { options }
    }

    pub async fn create(
        &self,
        name: String,
        coaches_id: Option<Vec<ObjectId>>,
    ) -> Result<WorkoutOptionResponse> {
        info!(name, "creating workout option");
        self.options.create(name, coaches_id).await.map_err(|err| {
            error!("failed to create workout option: {err}");
            err
        })
    }

    pub async fn list(&self) -> Result<Vec<WorkoutOptionResponse>> {
        info!("listing workout options");
        self.options.list().await.map_err(|err| {
            error!("failed to list workout options: {err}");
            err
        })
    }

    pub async fn update(
        &self,
        option_id: ObjectId,
        name: String,
        coaches_id: Option<Vec<ObjectId>>,
    ) -> Result<Option<WorkoutOptionResponse>> {
        info!(%option_id, "updating workout option");
        self.options
            .update(option_id, name, coaches_id)
            .await
            .map_err(|err| {
                error!("failed to update workout option: {err}");
                err
            })
    }
}
