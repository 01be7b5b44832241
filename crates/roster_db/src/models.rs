//! Row structs that map 1-to-1 onto the roster tables.
//!
//! These are persistence models; conversions into `roster_kernel` types live
//! alongside them so repositories can hand back either form.

use roster_kernel::{MemberWithUser, Team, TeamId, TeamMember, User, UserId};
use sqlx::FromRow;

/// Database row for `users`
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UserRow {
    pub id: i32,
    pub name: String,
}

/// Database row for `teams`
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct TeamRow {
    pub id: i32,
    pub name: String,
}

/// Database row for `team_member`
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct TeamMemberRow {
    pub team_id: Option<i32>,
    pub user_id: Option<i32>,
    pub user_role: String,
}

/// Projection returned by the membership/user join
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct MemberWithUserRow {
    pub user_id: i32,
    pub user_name: String,
    pub user_role: String,
}

/// Number of owners recorded for one team
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct OwnerCountRow {
    pub team_id: Option<i32>,
    pub owners: i64,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: UserId::new(row.id),
            name: row.name,
        }
    }
}

impl From<TeamRow> for Team {
    fn from(row: TeamRow) -> Self {
        Team {
            id: TeamId::new(row.id),
            name: row.name,
        }
    }
}

impl From<TeamMemberRow> for TeamMember {
    fn from(row: TeamMemberRow) -> Self {
        TeamMember {
            team_id: row.team_id.map(TeamId::new),
            user_id: row.user_id.map(UserId::new),
            user_role: row.user_role,
        }
    }
}

impl From<MemberWithUserRow> for MemberWithUser {
    fn from(row: MemberWithUserRow) -> Self {
        MemberWithUser {
            user_id: UserId::new(row.user_id),
            user_name: row.user_name,
            user_role: row.user_role,
        }
    }
}
