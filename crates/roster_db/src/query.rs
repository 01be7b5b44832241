//! SQL composition for membership queries
//!
//! The filtered and joined membership reads are assembled with
//! `sqlx::QueryBuilder` so their SQL text can be checked without a database.

use roster_kernel::{MemberRole, TeamId, UserId};
use sqlx::{Postgres, QueryBuilder};

const MEMBER_COLUMNS: &str = "SELECT team_id, user_id, user_role FROM team_member";

const MEMBER_WITH_USER_COLUMNS: &str = "SELECT users.id AS user_id, users.name AS user_name, \
     team_member.user_role AS user_role \
     FROM team_member \
     INNER JOIN users ON users.id = team_member.user_id";

/// Equality conditions on `team_member`, combined with AND
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemberFilter {
    pub team_id: Option<TeamId>,
    pub user_id: Option<UserId>,
    pub role: Option<MemberRole>,
}

impl MemberFilter {
    pub fn team(team_id: TeamId) -> Self {
        Self {
            team_id: Some(team_id),
            ..Self::default()
        }
    }

    pub fn with_role(mut self, role: MemberRole) -> Self {
        self.role = Some(role);
        self
    }

    fn push_where(&self, builder: &mut QueryBuilder<'static, Postgres>) {
        let mut separator = " WHERE ";
        if let Some(team_id) = self.team_id {
            builder.push(separator).push("team_member.team_id = ").push_bind(team_id.get());
            separator = " AND ";
        }
        if let Some(user_id) = self.user_id {
            builder.push(separator).push("team_member.user_id = ").push_bind(user_id.get());
            separator = " AND ";
        }
        if let Some(role) = self.role {
            builder.push(separator).push("team_member.user_role = ").push_bind(role.as_str());
        }
    }
}

/// Memberships matching `filter`, ordered by team then user
pub fn members(filter: &MemberFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(MEMBER_COLUMNS);
    filter.push_where(&mut builder);
    builder.push(" ORDER BY team_member.team_id, team_member.user_id");
    builder
}

/// Memberships matching `filter` joined with the member's user row
pub fn members_with_users(filter: &MemberFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(MEMBER_WITH_USER_COLUMNS);
    filter.push_where(&mut builder);
    builder.push(" ORDER BY users.id");
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unfiltered_members_has_no_where_clause() {
        let builder = members(&MemberFilter::default());
        assert_eq!(
            builder.sql(),
            "SELECT team_id, user_id, user_role FROM team_member \
             ORDER BY team_member.team_id, team_member.user_id"
        );
    }

    #[test]
    fn test_team_filter_binds_one_parameter() {
        let builder = members(&MemberFilter::team(TeamId::new(1)));
        assert!(builder.sql().contains("WHERE team_member.team_id = $1 ORDER BY"));
    }

    #[test]
    fn test_conditions_are_joined_with_and() {
        let filter = MemberFilter {
            user_id: Some(UserId::new(4)),
            ..MemberFilter::team(TeamId::new(2)).with_role(MemberRole::Owner)
        };
        let builder = members(&filter);

        assert!(builder.sql().contains(
            "WHERE team_member.team_id = $1 AND team_member.user_id = $2 AND team_member.user_role = $3"
        ));
    }

    #[test]
    fn test_join_selects_aliased_columns() {
        let builder = members_with_users(&MemberFilter::team(TeamId::new(1)));
        let sql = builder.sql();

        assert!(sql.starts_with("SELECT users.id AS user_id, users.name AS user_name, team_member.user_role AS user_role"));
        assert!(sql.contains("INNER JOIN users ON users.id = team_member.user_id"));
        assert!(sql.ends_with("WHERE team_member.team_id = $1 ORDER BY users.id"));
    }
}
