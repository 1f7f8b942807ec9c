use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::{CrierError, Result};
use crate::model::{NewUser, User};

const SELECT: &str = "SELECT id, firstname, lastname, email, password FROM users";

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: &SqlitePool) -> Self {
        Self { pool: pool.clone() }
    }

    /// Create a user together with any nested posts, as one transaction.
    /// A duplicate email fails the whole call and nothing is inserted.
    pub async fn create(&self, new: NewUser) -> Result<User> {
        tracing::info!(email = %new.email, posts = new.posts.len(), "Creating user");

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "INSERT INTO users (firstname, lastname, email, password) VALUES (?, ?, ?, ?)",
        )
        .bind(&new.firstname)
        .bind(&new.lastname)
        .bind(&new.email)
        .bind(&new.password)
        .execute(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                CrierError::DuplicateEmail(new.email.clone())
            }
            other => CrierError::Database(other),
        })?;
        let user_id = result.last_insert_rowid();

        let now = Utc::now();
        for post in &new.posts {
            sqlx::query(
                "INSERT INTO posts (created_at, updated_at, content, author_id) VALUES (?, ?, ?, ?)",
            )
            .bind(now)
            .bind(now)
            .bind(&post.content)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(User {
            id: user_id,
            firstname: new.firstname,
            lastname: new.lastname,
            email: new.email,
            password: new.password,
        })
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(SELECT)
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!("{SELECT} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!("{SELECT} WHERE email = ?"))
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    /// Look a user up by whichever unique key is supplied. The id wins when
    /// both are present; neither yields no match.
    pub async fn find_unique(&self, id: Option<i64>, email: Option<&str>) -> Result<Option<User>> {
        match (id, email) {
            (Some(id), _) => self.find_by_id(id).await,
            (None, Some(email)) => self.find_by_email(email).await,
            (None, None) => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewPost;
    use crate::storage::{PostRepository, db::memory_pool};

    fn messi() -> NewUser {
        NewUser::new("lionel.messi@gmail.com")
            .with_name("Lionel", "Messi")
            .with_password("motdepasse")
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let pool = memory_pool().await;
        let repo = UserRepository::new(&pool);

        let created = repo.create(messi()).await.unwrap();
        assert_eq!(created.email, "lionel.messi@gmail.com");
        assert_eq!(created.firstname.as_deref(), Some("Lionel"));

        let users = repo.list().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0], created);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let pool = memory_pool().await;
        let repo = UserRepository::new(&pool);

        repo.create(messi()).await.unwrap();
        let err = repo
            .create(NewUser::new("lionel.messi@gmail.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, CrierError::DuplicateEmail(ref email)
            if email == "lionel.messi@gmail.com"));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_nested_posts_created_atomically() {
        let pool = memory_pool().await;
        let repo = UserRepository::new(&pool);

        let neymar = NewUser::new("neymar.dasilvasantosjunior@gmail.com")
            .with_name("Neymar", "da Silva Santos Júnior")
            .with_posts(vec![
                NewPost::with_content("https://www.psg.fr/"),
                NewPost::with_content("https://www.psg.fr/"),
            ]);
        let user = repo.create(neymar).await.unwrap();

        let posts = PostRepository::new(&pool).by_author(user.id).await.unwrap();
        assert_eq!(posts.len(), 2);
        for post in &posts {
            assert_eq!(post.author_id, Some(user.id));
            assert_eq!(post.content.as_deref(), Some("https://www.psg.fr/"));
            assert!(post.updated_at >= post.created_at);
        }
    }

    #[tokio::test]
    async fn test_find_unique() {
        let pool = memory_pool().await;
        let repo = UserRepository::new(&pool);
        let user = repo.create(messi()).await.unwrap();

        let by_id = repo.find_unique(Some(user.id), None).await.unwrap();
        assert_eq!(by_id, Some(user.clone()));

        let by_email = repo
            .find_unique(None, Some("lionel.messi@gmail.com"))
            .await
            .unwrap();
        assert_eq!(by_email, Some(user));

        assert_eq!(repo.find_unique(None, None).await.unwrap(), None);
        assert_eq!(repo.find_unique(Some(999), None).await.unwrap(), None);
    }
}
