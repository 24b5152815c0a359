use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::error::ClientError;
use super::{Coach, CoachesService, FeedbackPage};
use crate::config::ClientConfig;

/// Success envelope every backend endpoint wraps its payload in. Only the
/// payload matters to the client.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// HTTP-backed coaches service for a running gymbook backend.
pub struct HttpCoachesService {
    client: Client,
    base_url: String,
}

impl HttpCoachesService {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_enveloped<T: DeserializeOwned>(&self, url: String) -> Result<T, ClientError> {
        tracing::debug!(%url, "requesting");
        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound);
        }

        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| status.to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope = response.json::<Envelope<T>>().await?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl CoachesService for HttpCoachesService {
    async fn list_coaches(&self) -> Result<Vec<Coach>, ClientError> {
        self.get_enveloped(format!("{}/api/coaches", self.base_url))
            .await
    }

    async fn get_coach(&self, id: &str) -> Result<Coach, ClientError> {
        self.get_enveloped(format!("{}/api/coaches/{}", self.base_url, id))
            .await
    }

    async fn coach_feedback(&self, id: &str, page: u64) -> Result<FeedbackPage, ClientError> {
        self.get_enveloped(format!(
            "{}/api/coaches/{}/feedback?page={}",
            self.base_url, id, page
        ))
        .await
    }
}
