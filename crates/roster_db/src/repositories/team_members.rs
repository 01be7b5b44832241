//! Team membership repository implementation
//!
//! Besides the plain table operations this repository owns the two reads
//! the seeder reports on: memberships filtered by team, and the same
//! memberships joined with `users` to pick up each member's name.

use roster_kernel::{MemberRole, TeamId, TeamMember};
use sqlx::PgPool;
use tracing::debug;

use crate::error::DatabaseError;
use crate::models::{MemberWithUserRow, OwnerCountRow, TeamMemberRow};
use crate::query::{self, MemberFilter};

/// Repository for the `team_member` table
#[derive(Debug, Clone)]
pub struct TeamMemberRepository {
    pool: PgPool,
}

impl TeamMemberRepository {
    /// Creates a new TeamMemberRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a membership row
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::ForeignKeyViolation` if the team or user does
    /// not exist, or `DatabaseError::DuplicateEntry` if the user already
    /// belongs to the team
    pub async fn insert(&self, member: &TeamMember) -> Result<TeamMemberRow, DatabaseError> {
        let row = sqlx::query_as::<_, TeamMemberRow>(
            r#"
            INSERT INTO team_member (team_id, user_id, user_role)
            VALUES ($1, $2, $3)
            RETURNING team_id, user_id, user_role
            "#,
        )
        .bind(member.team_id.map(|id| id.get()))
        .bind(member.user_id.map(|id| id.get()))
        .bind(&member.user_role)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Retrieves every membership ordered by team then user
    pub async fn all(&self) -> Result<Vec<TeamMemberRow>, DatabaseError> {
        self.matching(&MemberFilter::default()).await
    }

    /// Retrieves the memberships of one team
    pub async fn by_team(&self, team_id: TeamId) -> Result<Vec<TeamMemberRow>, DatabaseError> {
        self.matching(&MemberFilter::team(team_id)).await
    }

    /// Retrieves memberships matching every condition in `filter`
    pub async fn matching(&self, filter: &MemberFilter) -> Result<Vec<TeamMemberRow>, DatabaseError> {
        let mut builder = query::members(filter);
        let members = builder
            .build_query_as::<TeamMemberRow>()
            .fetch_all(&self.pool)
            .await?;

        debug!(count = members.len(), ?filter, "Fetched team members");
        Ok(members)
    }

    /// Retrieves a team's members together with their user names
    ///
    /// Memberships whose user no longer exists are dropped by the inner join.
    pub async fn with_users(&self, team_id: TeamId) -> Result<Vec<MemberWithUserRow>, DatabaseError> {
        let mut builder = query::members_with_users(&MemberFilter::team(team_id));
        let rows = builder
            .build_query_as::<MemberWithUserRow>()
            .fetch_all(&self.pool)
            .await?;

        debug!(count = rows.len(), %team_id, "Fetched team roster");
        Ok(rows)
    }

    /// Counts owners per team, including teams with memberships but no owner
    pub async fn owner_counts(&self) -> Result<Vec<OwnerCountRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, OwnerCountRow>(
            r#"
            SELECT
                team_id,
                COUNT(*) FILTER (WHERE user_role = $1) AS owners
            FROM team_member
            GROUP BY team_id
            ORDER BY team_id
            "#,
        )
        .bind(MemberRole::Owner.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Counts the rows in `team_member`
    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM team_member")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Deletes every membership, returning the number of rows removed
    pub async fn delete_all(&self) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM team_member")
            .execute(&self.pool)
            .await?;

        debug!(rows = result.rows_affected(), "Deleted team members");
        Ok(result.rows_affected())
    }
}
