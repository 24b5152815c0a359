use anyhow::Result;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::ReplaceOptions;
use mongodb::{Collection, Database};

use crate::models::{ClientDetails, ClientDetailsResponse, ClientPreferencesRequest};

const CLIENT_DETAILS: &str = "ClientDetails";

#[derive(Clone)]
pub struct ClientService {
    db: Database,
}

impl ClientService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn details(&self) -> Collection<ClientDetails> {
        self.db.collection(CLIENT_DETAILS)
    }

    pub async fn get_details(&self, user_id: ObjectId) -> Result<Option<ClientDetailsResponse>> {
        let details = self
            .details()
            .find_one(doc! { "user_id": user_id }, None)
            .await?;

        Ok(details.map(ClientDetailsResponse::from))
    }

    /// Full-document replacement; the first save creates the document.
    pub async fn save_details(
        &self,
        user_id: ObjectId,
        preferences: ClientPreferencesRequest,
    ) -> Result<ClientDetailsResponse> {
        let details = ClientDetails {
            id: None,
            user_id,
            target: preferences.target,
            preferred_activity: preferences.preferred_activity,
        };

        let options = ReplaceOptions::builder().upsert(true).build();
        self.details()
            .replace_one(doc! { "user_id": user_id }, &details, options)
            .await?;

        Ok(ClientDetailsResponse::from(details))
    }
}
