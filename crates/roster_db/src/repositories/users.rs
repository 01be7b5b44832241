//! User repository implementation

use roster_kernel::{User, UserId};
use sqlx::PgPool;
use tracing::debug;

use crate::error::DatabaseError;
use crate::models::UserRow;

/// Repository for the `users` table
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a user with its caller-assigned id
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::DuplicateEntry` if the id is already taken
    pub async fn insert(&self, user: &User) -> Result<UserRow, DatabaseError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, name)
            VALUES ($1, $2)
            RETURNING id, name
            "#,
        )
        .bind(user.id.get())
        .bind(&user.name)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Retrieves a user by id
    pub async fn find(&self, id: UserId) -> Result<UserRow, DatabaseError> {
        sqlx::query_as::<_, UserRow>("SELECT id, name FROM users WHERE id = $1")
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("User", id))
    }

    /// Retrieves every user ordered by id
    pub async fn all(&self) -> Result<Vec<UserRow>, DatabaseError> {
        let users = sqlx::query_as::<_, UserRow>("SELECT id, name FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        debug!(count = users.len(), "Fetched users");
        Ok(users)
    }

    /// Counts the rows in `users`
    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Deletes every user, returning the number of rows removed
    pub async fn delete_all(&self) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM users")
            .execute(&self.pool)
            .await?;

        debug!(rows = result.rows_affected(), "Deleted users");
        Ok(result.rows_affected())
    }
}
