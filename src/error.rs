use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrierError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("No user found for {0}")]
    UserNotFound(String),

    #[error("No post found with id {0}")]
    PostNotFound(i64),

    #[error("Email already taken: {0}")]
    DuplicateEmail(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CrierError>;
