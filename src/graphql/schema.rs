use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Schema};
use sqlx::SqlitePool;

use crate::storage::{PostRepository, UserRepository};

use super::types::*;

pub type CrierSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub struct AppState {
    pub pool: SqlitePool,
}

pub fn build_schema(pool: SqlitePool) -> CrierSchema {
    let state = Arc::new(AppState { pool });

    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

pub(super) fn user_repo(ctx: &Context<'_>) -> UserRepository {
    let state = ctx.data::<Arc<AppState>>().unwrap();
    UserRepository::new(&state.pool)
}

pub(super) fn post_repo(ctx: &Context<'_>) -> PostRepository {
    let state = ctx.data::<Arc<AppState>>().unwrap();
    PostRepository::new(&state.pool)
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All registered users
    async fn all_users(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<User>> {
        let users = user_repo(ctx).list().await?;
        Ok(users.into_iter().map(Into::into).collect())
    }

    /// A single post by id
    async fn post_by_id(
        &self,
        ctx: &Context<'_>,
        id: Option<i64>,
    ) -> async_graphql::Result<Option<Post>> {
        let Some(id) = id else {
            return Ok(None);
        };
        Ok(post_repo(ctx).find_by_id(id).await?.map(Into::into))
    }

    /// Posts whose content contains the search string (all posts when
    /// omitted), paginated and optionally sorted by update time
    async fn feed(
        &self,
        ctx: &Context<'_>,
        search_string: Option<String>,
        skip: Option<i64>,
        take: Option<i64>,
        order_by: Option<PostOrderByUpdatedAtInput>,
    ) -> async_graphql::Result<Vec<Post>> {
        let posts = post_repo(ctx)
            .feed(
                search_string.as_deref(),
                skip,
                take,
                order_by.map(|o| o.updated_at.into()),
            )
            .await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }

    /// Posts of the user matched by id or email; null when no user matches
    async fn drafts_by_user(
        &self,
        ctx: &Context<'_>,
        user_unique_input: UserUniqueInput,
    ) -> async_graphql::Result<Option<Vec<Post>>> {
        let user = user_repo(ctx)
            .find_unique(user_unique_input.id, user_unique_input.email.as_deref())
            .await?;
        let Some(user) = user else {
            return Ok(None);
        };
        let posts = post_repo(ctx).by_author(user.id).await?;
        Ok(Some(posts.into_iter().map(Into::into).collect()))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a user together with any nested posts; one transaction, so a
    /// duplicate email leaves nothing behind
    async fn signup_user(
        &self,
        ctx: &Context<'_>,
        data: UserCreateInput,
    ) -> async_graphql::Result<User> {
        let user = user_repo(ctx).create(data.into()).await?;
        Ok(user.into())
    }

    /// Create a post attached to the user with the given email
    async fn create_draft(
        &self,
        ctx: &Context<'_>,
        data: PostCreateInput,
        author_email: String,
    ) -> async_graphql::Result<Post> {
        let post = post_repo(ctx).create(data.into(), &author_email).await?;
        Ok(post.into())
    }

    /// Update a post's content and/or reassign its author by email
    async fn update_post(
        &self,
        ctx: &Context<'_>,
        id: i64,
        data: PostUpdateInput,
    ) -> async_graphql::Result<Post> {
        let post = post_repo(ctx).update(id, data.into()).await?;
        Ok(post.into())
    }

    /// Delete a post, returning the deleted record
    async fn delete_post(&self, ctx: &Context<'_>, id: i64) -> async_graphql::Result<Post> {
        let post = post_repo(ctx).delete(id).await?;
        Ok(post.into())
    }
}
