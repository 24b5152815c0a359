use anyhow::Result;
use mongodb::bson::oid::ObjectId;
use tracing::{error, info};

use crate::models::{ClientDetailsResponse, ClientPreferencesRequest};
use crate::services::ClientService;

#[derive(Clone)]
pub struct ClientController {
    clients: ClientService,
}

impl ClientController {
    pub fn new(clients: ClientService) -> Self {
        Self { clients }
    }

    pub async fn get_details(&self, user_id: ObjectId) -> Result<Option<ClientDetailsResponse>> {
        info!(%user_id, "fetching client details");
        self.clients.get_details(user_id).await.map_err(|err| {
            error!("failed to fetch client details: {err}");
            err
        })
    }

    pub async fn save_details(
        &self,
        user_id: ObjectId,
        preferences: ClientPreferencesRequest,
    ) -> Result<ClientDetailsResponse> {
        info!(%user_id, "saving client details");
        self.clients
            .save_details(user_id, preferences)
            .await
            .map_err(|err| {
                error!("failed to save client details: {err}");
                err
            })
    }
}
