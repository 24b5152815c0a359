use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Client preferences document, one per client, replaced wholesale on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientDetails {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub target: String,
    pub preferred_activity: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ClientPreferencesRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Target is required"))]
    pub target: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Preferred activity is required"))]
    pub preferred_activity: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientDetailsResponse {
    pub target: String,
    pub preferred_activity: String,
}

impl From<ClientDetails> for ClientDetailsResponse {
    fn from(details: ClientDetails) -> Self {
        Self {
            target: details.target,
            preferred_activity: details.preferred_activity,
        }
    }
}
