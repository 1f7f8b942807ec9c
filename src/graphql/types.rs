use async_graphql::{ComplexObject, Context, Enum, InputObject, SimpleObject};
use chrono::{DateTime, Utc};

use crate::model::{self, NewPost, NewUser, PostPatch};

use super::schema::{post_repo, user_repo};

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl From<SortOrder> for model::SortOrder {
    fn from(o: SortOrder) -> Self {
        match o {
            SortOrder::Asc => model::SortOrder::Asc,
            SortOrder::Desc => model::SortOrder::Desc,
        }
    }
}

impl From<model::SortOrder> for SortOrder {
    fn from(o: model::SortOrder) -> Self {
        match o {
            model::SortOrder::Asc => SortOrder::Asc,
            model::SortOrder::Desc => SortOrder::Desc,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(complex)]
pub struct User {
    pub id: i64,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: String,
    pub password: Option<String>,
}

#[ComplexObject]
impl User {
    /// Posts authored by this user
    async fn posts(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Post>> {
        let posts = post_repo(ctx).by_author(self.id).await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }
}

impl From<model::User> for User {
    fn from(u: model::User) -> Self {
        Self {
            id: u.id,
            firstname: u.firstname,
            lastname: u.lastname,
            email: u.email,
            password: u.password,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(complex)]
pub struct Post {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub content: Option<String>,
    #[graphql(skip)]
    pub author_id: Option<i64>,
}

#[ComplexObject]
impl Post {
    /// The user who shared this post, absent for authorless posts
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<User>> {
        let Some(author_id) = self.author_id else {
            return Ok(None);
        };
        let user = user_repo(ctx).find_by_id(author_id).await?;
        Ok(user.map(Into::into))
    }
}

impl From<model::Post> for Post {
    fn from(p: model::Post) -> Self {
        Self {
            id: p.id,
            created_at: p.created_at,
            updated_at: p.updated_at,
            content: p.content,
            author_id: p.author_id,
        }
    }
}

#[derive(InputObject)]
pub struct UserUniqueInput {
    pub id: Option<i64>,
    pub email: Option<String>,
}

#[derive(InputObject)]
pub struct PostOrderByUpdatedAtInput {
    pub updated_at: SortOrder,
}

#[derive(InputObject)]
pub struct PostCreateInput {
    pub content: Option<String>,
}

impl From<PostCreateInput> for NewPost {
    fn from(input: PostCreateInput) -> Self {
        Self {
            content: input.content,
        }
    }
}

#[derive(InputObject)]
pub struct PostUpdateInput {
    pub content: Option<String>,
    pub author_email: Option<String>,
}

impl From<PostUpdateInput> for PostPatch {
    fn from(input: PostUpdateInput) -> Self {
        Self {
            content: input.content,
            author_email: input.author_email,
        }
    }
}

#[derive(InputObject)]
pub struct UserCreateInput {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: String,
    pub password: Option<String>,
    pub posts: Option<Vec<PostCreateInput>>,
}

impl From<UserCreateInput> for NewUser {
    fn from(input: UserCreateInput) -> Self {
        Self {
            firstname: input.firstname,
            lastname: input.lastname,
            email: input.email,
            password: input.password,
            posts: input
                .posts
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}
