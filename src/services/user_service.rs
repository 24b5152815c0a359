use anyhow::Result;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

use crate::models::{CoachProfile, User, UserRole};

const USERS: &str = "Users";

#[derive(Clone)]
pub struct UserService {
    db: Database,
}

impl UserService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn users(&self) -> Collection<User> {
        self.db.collection(USERS)
    }

    /// Coaches visible in the public listing.
    pub async fn list_coaches(&self) -> Result<Vec<CoachProfile>> {
        let cursor = self
            .users()
            .find(doc! { "role": UserRole::Coach.as_str() }, None)
            .await?;
        let users: Vec<User> = cursor.try_collect().await?;

        Ok(users.into_iter().map(CoachProfile::from).collect())
    }

    pub async fn get_coach(&self, coach_id: ObjectId) -> Result<Option<CoachProfile>> {
        let user = self
            .users()
            .find_one(
                doc! { "_id": coach_id, "role": UserRole::Coach.as_str() },
                None,
            )
            .await?;

        Ok(user.map(CoachProfile::from))
    }
}
