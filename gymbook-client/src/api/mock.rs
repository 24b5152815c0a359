use async_trait::async_trait;

use super::error::ClientError;
use super::{Coach, CoachesService, FeedbackEntry, FeedbackPage};

/// Deterministic in-memory stand-in used when the mock flag is set, e.g. for
/// local development without a backend.
pub struct MockCoachesService {
    coaches: Vec<Coach>,
}

impl MockCoachesService {
    pub fn new() -> Self {
        Self {
            coaches: vec![
                Coach {
                    id: "64f1a0c2b7e4d11234567801".to_string(),
                    email: "maria.gomez@gymbook.dev".to_string(),
                    first_name: "Maria".to_string(),
                    last_name: "Gomez".to_string(),
                },
                Coach {
                    id: "64f1a0c2b7e4d11234567802".to_string(),
                    email: "jonas.berg@gymbook.dev".to_string(),
                    first_name: "Jonas".to_string(),
                    last_name: "Berg".to_string(),
                },
                Coach {
                    id: "64f1a0c2b7e4d11234567803".to_string(),
                    email: "keiko.tanaka@gymbook.dev".to_string(),
                    first_name: "Keiko".to_string(),
                    last_name: "Tanaka".to_string(),
                },
            ],
        }
    }
}

impl Default for MockCoachesService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CoachesService for MockCoachesService {
    async fn list_coaches(&self) -> Result<Vec<Coach>, ClientError> {
        Ok(self.coaches.clone())
    }

    async fn get_coach(&self, id: &str) -> Result<Coach, ClientError> {
        self.coaches
            .iter()
            .find(|coach| coach.id == id)
            .cloned()
            .ok_or(ClientError::NotFound)
    }

    async fn coach_feedback(&self, id: &str, page: u64) -> Result<FeedbackPage, ClientError> {
        // The mock only knows its own coaches.
        if !self.coaches.iter().any(|coach| coach.id == id) {
            return Err(ClientError::NotFound);
        }

        let items = vec![FeedbackEntry {
            user_id: "64f1a0c2b7e4d11234567810".to_string(),
            booking_id: "64f1a0c2b7e4d11234567820".to_string(),
            message: "Great session, tough but fair".to_string(),
            rating: 5,
        }];

        Ok(FeedbackPage {
            total: items.len() as u64,
            items,
            page,
            page_size: 10,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_lists_fixture_coaches() {
        let service = MockCoachesService::new();
        let coaches = service.list_coaches().await.unwrap();
        assert_eq!(coaches.len(), 3);
    }

    #[tokio::test]
    async fn test_mock_get_coach_by_id() {
        let service = MockCoachesService::new();
        let coach = service
            .get_coach("64f1a0c2b7e4d11234567801")
            .await
            .unwrap();
        assert_eq!(coach.first_name, "Maria");

        assert!(matches!(
            service.get_coach("64f1a0c2b7e4d19999999999").await,
            Err(ClientError::NotFound)
        ));
    }
}
