use anyhow::Result;
use mongodb::bson::doc;
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Database, IndexModel};
use std::env;
use std::time::Duration;

use crate::models::AdminEmail;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database: String,
    pub storage_bucket: String,
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        let uri = env::var("DATABASE_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let database = env::var("DATABASE_NAME").unwrap_or_else(|_| "gymbook".to_string());

        let storage_bucket =
            env::var("STORAGE_BUCKET").unwrap_or_else(|_| "gymbook-dev-storage".to_string());

        let connect_timeout_secs = env::var("DB_CONNECT_TIMEOUT")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        Ok(DatabaseConfig {
            uri,
            database,
            storage_bucket,
            connect_timeout: Duration::from_secs(connect_timeout_secs),
        })
    }

    pub async fn connect(&self) -> Result<Database> {
        let mut options = ClientOptions::parse(&self.uri).await?;
        options.connect_timeout = Some(self.connect_timeout);
        options.app_name = Some("gymbook".to_string());

        let client = Client::with_options(options)?;
        Ok(client.database(&self.database))
    }

    /// Admin emails carry a uniqueness constraint at the collection level.
    pub async fn ensure_indexes(&self, db: &Database) -> Result<()> {
        let unique_email = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        db.collection::<AdminEmail>("AdminEmails")
            .create_index(unique_email, None)
            .await?;

        Ok(())
    }
}
