use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A bookable workout kind, optionally restricted to an ordered list of
/// coaches able to run it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutOption {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coaches_id: Option<Vec<ObjectId>>,
}

/// Payload for creating a workout option and for the full-document update.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WorkoutOptionRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Workout name is required"))]
    pub name: String,

    #[validate(custom(function = "crate::models::validation::validate_object_id_list"))]
    pub coaches_id: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutOptionResponse {
    pub id: String,
    pub name: String,
    pub coaches_id: Option<Vec<String>>,
}

impl From<WorkoutOption> for WorkoutOptionResponse {
    fn from(option: WorkoutOption) -> Self {
        Self {
            id: option.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: option.name,
            coaches_id: option
                .coaches_id
                .map(|ids| ids.into_iter().map(|id| id.to_hex()).collect()),
        }
    }
}
