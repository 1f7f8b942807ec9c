use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::post::NewPost;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: String,
    pub password: Option<String>,
}

/// Payload for creating a user, optionally together with initial posts.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: String,
    pub password: Option<String>,
    pub posts: Vec<NewPost>,
}

impl NewUser {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        self.firstname = Some(firstname.into());
        self.lastname = Some(lastname.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_posts(mut self, posts: Vec<NewPost>) -> Self {
        self.posts = posts;
        self
    }
}
