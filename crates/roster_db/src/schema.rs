//! Schema bootstrap and table inventory

use tracing::info;

use crate::error::DatabaseError;
use crate::pool::DatabasePool;

/// Bundled migration creating the three roster tables
pub const SCHEMA_SQL: &str = include_str!("../../../migrations/20240101_000001_roster_schema.sql");

/// Roster tables in the order the seeder clears them
pub const TABLES: [&str; 3] = ["users", "teams", "team_member"];

/// Creates any missing roster tables
///
/// Every statement in the migration is `IF NOT EXISTS`, so this is safe to
/// run against a database that already has the schema.
pub async fn ensure_schema(pool: &DatabasePool) -> Result<(), DatabaseError> {
    info!("Ensuring roster schema");

    sqlx::raw_sql(SCHEMA_SQL)
        .execute(pool)
        .await
        .map_err(|e| DatabaseError::SchemaFailed(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migration_creates_every_table() {
        for table in TABLES {
            assert!(
                SCHEMA_SQL.contains(&format!("CREATE TABLE IF NOT EXISTS {table} (")),
                "missing table {table}"
            );
        }
    }

    #[test]
    fn test_membership_keys_cascade() {
        assert_eq!(SCHEMA_SQL.matches("ON DELETE CASCADE").count(), 2);
    }
}
