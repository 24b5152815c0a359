use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to reach the gymbook API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Coach not found")]
    NotFound,
    #[error("gymbook API returned {status}: {message}")]
    Api { status: u16, message: String },
}
