//! Team repository implementation

use roster_kernel::{Team, TeamId};
use sqlx::PgPool;
use tracing::debug;

use crate::error::DatabaseError;
use crate::models::TeamRow;

/// Repository for the `teams` table
#[derive(Debug, Clone)]
pub struct TeamRepository {
    pool: PgPool,
}

impl TeamRepository {
    /// Creates a new TeamRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a team with its caller-assigned id
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::DuplicateEntry` if the id is already taken
    pub async fn insert(&self, team: &Team) -> Result<TeamRow, DatabaseError> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            INSERT INTO teams (id, name)
            VALUES ($1, $2)
            RETURNING id, name
            "#,
        )
        .bind(team.id.get())
        .bind(&team.name)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Retrieves a team by id
    pub async fn find(&self, id: TeamId) -> Result<TeamRow, DatabaseError> {
        sqlx::query_as::<_, TeamRow>("SELECT id, name FROM teams WHERE id = $1")
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Team", id))
    }

    /// Retrieves every team ordered by id
    pub async fn all(&self) -> Result<Vec<TeamRow>, DatabaseError> {
        let teams = sqlx::query_as::<_, TeamRow>("SELECT id, name FROM teams ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        debug!(count = teams.len(), "Fetched teams");
        Ok(teams)
    }

    /// Counts the rows in `teams`
    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teams")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Deletes every team, returning the number of rows removed
    pub async fn delete_all(&self) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM teams")
            .execute(&self.pool)
            .await?;

        debug!(rows = result.rows_affected(), "Deleted teams");
        Ok(result.rows_affected())
    }
}
