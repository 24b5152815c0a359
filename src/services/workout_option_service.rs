use anyhow::Result;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

use crate::models::{WorkoutOption, WorkoutOptionResponse};

// Collection name kept singular for compatibility with the existing data.
const WORKOUT_OPTIONS: &str = "WorkoutOption";

#[derive(Clone)]
pub struct WorkoutOptionService {
    db: Database,
}

impl WorkoutOptionService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn options(&self) -> Collection<WorkoutOption> {
        self.db.collection(WORKOUT_OPTIONS)
    }

    pub async fn create(
        &self,
        name: String,
        coaches_id: Option<Vec<ObjectId>>,
    ) -> Result<WorkoutOptionResponse> {
        let option = WorkoutOption {
            id: None,
            name,
            coaches_id,
        };

        let result = self.options().insert_one(&option, None).await?;

        Ok(WorkoutOptionResponse::from(WorkoutOption {
            id: result.inserted_id.as_object_id(),
            ..option
        }))
    }

    pub async fn list(&self) -> Result<Vec<WorkoutOptionResponse>> {
        let cursor = self.options().find(doc! {}, None).await?;
        let options: Vec<WorkoutOption> = cursor.try_collect().await?;

        Ok(options
            .into_iter()
            .map(WorkoutOptionResponse::from)
            .collect())
    }

    /// Full-document replacement; `None` means no option with that id.
    pub async fn update(
        &self,
        option_id: ObjectId,
        name: String,
        coaches_id: Option<Vec<ObjectId>>,
    ) -> Result<Option<WorkoutOptionResponse>> {
        let option = WorkoutOption {
            id: Some(option_id),
            name,
            coaches_id,
        };

        let result = self
            .options()
            .replace_one(doc! { "_id": option_id }, &option, None)
            .await?;

        if result.matched_count == 0 {
            return Ok(None);
        }

        Ok(Some(WorkoutOptionResponse::from(option)))
    }
}
