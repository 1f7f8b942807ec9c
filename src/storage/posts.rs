use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::{CrierError, Result};
use crate::model::{NewPost, Post, PostPatch, SortOrder};

const SELECT: &str = "SELECT id, created_at, updated_at, content, author_id FROM posts";

pub struct PostRepository {
    pool: SqlitePool,
}

impl PostRepository {
    pub fn new(pool: &SqlitePool) -> Self {
        Self { pool: pool.clone() }
    }

    /// Create a post connected to the user with `author_email`. The lookup
    /// and insert share a transaction, so an unknown email inserts nothing.
    pub async fn create(&self, new: NewPost, author_email: &str) -> Result<Post> {
        tracing::info!(author = %author_email, "Creating draft");

        let mut tx = self.pool.begin().await?;

        let author_id: i64 = sqlx::query_scalar("SELECT id FROM users WHERE email = ?")
            .bind(author_email)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| CrierError::UserNotFound(author_email.to_string()))?;

        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO posts (created_at, updated_at, content, author_id) VALUES (?, ?, ?, ?)",
        )
        .bind(now)
        .bind(now)
        .bind(&new.content)
        .bind(author_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Post {
            id: result.last_insert_rowid(),
            created_at: now,
            updated_at: now,
            content: new.content,
            author_id: Some(author_id),
        })
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(&format!("{SELECT} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(post)
    }

    pub async fn by_author(&self, author_id: i64) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(&format!("{SELECT} WHERE author_id = ?"))
            .bind(author_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(posts)
    }

    /// The feed: posts whose content contains `search` (all posts when
    /// absent), sorted by `updated_at` when requested, with offset/limit
    /// pagination. Substring matching is SQLite's `LIKE`.
    pub async fn feed(
        &self,
        search: Option<&str>,
        skip: Option<i64>,
        take: Option<i64>,
        order_by: Option<SortOrder>,
    ) -> Result<Vec<Post>> {
        let mut sql = String::from(SELECT);
        if search.is_some() {
            sql.push_str(" WHERE content LIKE '%' || ? || '%'");
        }
        if let Some(order) = order_by {
            sql.push_str(" ORDER BY updated_at ");
            sql.push_str(order.as_sql());
        }
        // LIMIT -1 disables the limit while keeping OFFSET usable.
        sql.push_str(" LIMIT ? OFFSET ?");

        let mut query = sqlx::query_as::<_, Post>(&sql);
        if let Some(s) = search {
            query = query.bind(s.to_string());
        }
        let posts = query
            .bind(take.unwrap_or(-1))
            .bind(skip.unwrap_or(0))
            .fetch_all(&self.pool)
            .await?;
        Ok(posts)
    }

    /// Apply a partial update to an existing post, refreshing `updated_at`.
    /// Reassigning the author resolves the email inside the same transaction.
    pub async fn update(&self, id: i64, patch: PostPatch) -> Result<Post> {
        tracing::info!(id, "Updating post");

        let mut tx = self.pool.begin().await?;

        let mut post = sqlx::query_as::<_, Post>(&format!("{SELECT} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(CrierError::PostNotFound(id))?;

        if let Some(content) = patch.content {
            post.content = Some(content);
        }
        if let Some(email) = patch.author_email {
            let author_id: i64 = sqlx::query_scalar("SELECT id FROM users WHERE email = ?")
                .bind(&email)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or(CrierError::UserNotFound(email))?;
            post.author_id = Some(author_id);
        }
        post.updated_at = Utc::now();

        sqlx::query("UPDATE posts SET content = ?, author_id = ?, updated_at = ? WHERE id = ?")
            .bind(&post.content)
            .bind(post.author_id)
            .bind(post.updated_at)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(post)
    }

    /// Delete a post, returning the deleted record. Unknown ids fail.
    pub async fn delete(&self, id: i64) -> Result<Post> {
        tracing::info!(id, "Deleting post");

        let mut tx = self.pool.begin().await?;

        let post = sqlx::query_as::<_, Post>(&format!("{SELECT} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(CrierError::PostNotFound(id))?;

        sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewUser;
    use crate::storage::{UserRepository, db::memory_pool};
    use std::time::Duration;

    async fn seeded_pool() -> SqlitePool {
        let pool = memory_pool().await;
        UserRepository::new(&pool)
            .create(NewUser::new("kylian.mbappe@gmail.com").with_name("Kylian", "Mbappé"))
            .await
            .unwrap();
        pool
    }

    #[tokio::test]
    async fn test_create_draft_and_fetch() {
        let pool = seeded_pool().await;
        let repo = PostRepository::new(&pool);

        let post = repo
            .create(
                NewPost::with_content("https://www.psg.fr/"),
                "kylian.mbappe@gmail.com",
            )
            .await
            .unwrap();

        let fetched = repo.find_by_id(post.id).await.unwrap();
        assert_eq!(fetched, Some(post));
        assert_eq!(repo.find_by_id(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_draft_unknown_author() {
        let pool = seeded_pool().await;
        let repo = PostRepository::new(&pool);

        let err = repo
            .create(NewPost::with_content("orphan"), "nobody@example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, CrierError::UserNotFound(_)));

        // Nothing was inserted.
        assert!(repo.feed(None, None, None, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_feed_search_and_pagination() {
        let pool = seeded_pool().await;
        let repo = PostRepository::new(&pool);

        for content in ["https://www.psg.fr/", "hello world", "psg forever"] {
            repo.create(NewPost::with_content(content), "kylian.mbappe@gmail.com")
                .await
                .unwrap();
            // Distinct updated_at values keep the ordering assertions stable.
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        let all = repo.feed(None, None, None, None).await.unwrap();
        assert_eq!(all.len(), 3);

        let matching = repo.feed(Some("psg"), None, None, None).await.unwrap();
        assert_eq!(matching.len(), 2);

        let oldest_first = repo
            .feed(None, None, None, Some(SortOrder::Asc))
            .await
            .unwrap();
        let newest_first = repo
            .feed(None, None, None, Some(SortOrder::Desc))
            .await
            .unwrap();
        assert_eq!(
            oldest_first.first().unwrap().id,
            newest_first.last().unwrap().id
        );

        let second_oldest = repo
            .feed(None, Some(1), Some(1), Some(SortOrder::Asc))
            .await
            .unwrap();
        assert_eq!(second_oldest.len(), 1);
        assert_eq!(second_oldest[0].id, oldest_first[1].id);
    }

    #[tokio::test]
    async fn test_update_patches_content_and_author() {
        let pool = seeded_pool().await;
        UserRepository::new(&pool)
            .create(NewUser::new("lionel.messi@gmail.com"))
            .await
            .unwrap();
        let repo = PostRepository::new(&pool);

        let post = repo
            .create(NewPost::with_content("draft"), "kylian.mbappe@gmail.com")
            .await
            .unwrap();

        let updated = repo
            .update(
                post.id,
                PostPatch {
                    content: Some("final".to_string()),
                    author_email: Some("lionel.messi@gmail.com".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.content.as_deref(), Some("final"));
        assert_ne!(updated.author_id, post.author_id);
        assert!(updated.updated_at >= updated.created_at);
        assert!(updated.updated_at >= post.updated_at);

        // An empty patch still refreshes updated_at only.
        let touched = repo.update(post.id, PostPatch::default()).await.unwrap();
        assert_eq!(touched.content.as_deref(), Some("final"));

        let err = repo.update(999, PostPatch::default()).await.unwrap_err();
        assert!(matches!(err, CrierError::PostNotFound(999)));

        let err = repo
            .update(
                post.id,
                PostPatch {
                    content: None,
                    author_email: Some("ghost@example.com".to_string()),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CrierError::UserNotFound(_)));
    }

    #[tokio::test]
    async fn test_delete() {
        let pool = seeded_pool().await;
        let repo = PostRepository::new(&pool);

        let post = repo
            .create(NewPost::with_content("ephemeral"), "kylian.mbappe@gmail.com")
            .await
            .unwrap();

        let deleted = repo.delete(post.id).await.unwrap();
        assert_eq!(deleted.id, post.id);
        assert_eq!(repo.find_by_id(post.id).await.unwrap(), None);

        let err = repo.delete(post.id).await.unwrap_err();
        assert!(matches!(err, CrierError::PostNotFound(_)));
    }
}
