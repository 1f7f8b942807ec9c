use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub content: Option<String>,
    pub author_id: Option<i64>,
}

/// Payload for creating a post. The author is supplied separately,
/// as a connect-by-email on the storage call.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub content: Option<String>,
}

impl NewPost {
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }
}

/// Partial update for a post. Absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub content: Option<String>,
    pub author_email: Option<String>,
}
