use async_trait::async_trait;
use serde::Deserialize;

use crate::config::ClientConfig;

mod error;
mod http;
mod mock;

pub use error::ClientError;
pub use http::HttpCoachesService;
pub use mock::MockCoachesService;

/// A coach as the backend lists it.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Coach {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FeedbackEntry {
    pub user_id: String,
    pub booking_id: String,
    pub message: String,
    pub rating: i32,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FeedbackPage {
    pub items: Vec<FeedbackEntry>,
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
}

/// Capability contract shared by the mock and the HTTP-backed service.
/// Callers cannot tell the implementations apart.
#[async_trait]
pub trait CoachesService: Send + Sync {
    async fn list_coaches(&self) -> Result<Vec<Coach>, ClientError>;
    async fn get_coach(&self, id: &str) -> Result<Coach, ClientError>;
    async fn coach_feedback(&self, id: &str, page: u64) -> Result<FeedbackPage, ClientError>;
}

/// The service a caller actually holds; which variant is picked is decided
/// once, by [`coaches_service`], and never switched afterwards.
pub enum CoachesClient {
    Mock(MockCoachesService),
    Http(HttpCoachesService),
}

#[async_trait]
impl CoachesService for CoachesClient {
    async fn list_coaches(&self) -> Result<Vec<Coach>, ClientError> {
        match self {
            CoachesClient::Mock(service) => service.list_coaches().await,
            CoachesClient::Http(service) => service.list_coaches().await,
        }
    }

    async fn get_coach(&self, id: &str) -> Result<Coach, ClientError> {
        match self {
            CoachesClient::Mock(service) => service.get_coach(id).await,
            CoachesClient::Http(service) => service.get_coach(id).await,
        }
    }

    async fn coach_feedback(&self, id: &str, page: u64) -> Result<FeedbackPage, ClientError> {
        match self {
            CoachesClient::Mock(service) => service.coach_feedback(id, page).await,
            CoachesClient::Http(service) => service.coach_feedback(id, page).await,
        }
    }
}

/// Choose the coaches service implementation from the configuration flag.
pub fn coaches_service(config: &ClientConfig) -> Result<CoachesClient, ClientError> {
    if config.use_mocks {
        Ok(CoachesClient::Mock(MockCoachesService::new()))
    } else {
        Ok(CoachesClient::Http(HttpCoachesService::new(config)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_honors_mock_flag() {
        let config = ClientConfig::new("http://localhost:3000", true);
        assert!(matches!(
            coaches_service(&config).unwrap(),
            CoachesClient::Mock(_)
        ));

        let config = ClientConfig::new("http://localhost:3000", false);
        assert!(matches!(
            coaches_service(&config).unwrap(),
            CoachesClient::Http(_)
        ));
    }
}
