//! Roster entities
//!
//! A `TeamMember` row links one user to one team with a role. Both foreign
//! keys are nullable in the schema, so the domain type keeps them optional
//! even though the fixture always populates them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::KernelError;
use crate::identifiers::{TeamId, UserId};

/// A person who can belong to teams
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id: UserId::new(id),
            name: name.into(),
        }
    }
}

/// A named group of users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

impl Team {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id: TeamId::new(id),
            name: name.into(),
        }
    }
}

/// Role a user holds inside a team
///
/// The database stores the role as free text; this enum names the two values
/// the roster actually uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberRole {
    Owner,
    Member,
}

impl MemberRole {
    /// Returns the text stored in `team_member.user_role`
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Owner => "OWNER",
            MemberRole::Member => "MEMBER",
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemberRole {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OWNER" => Ok(MemberRole::Owner),
            "MEMBER" => Ok(MemberRole::Member),
            other => Err(KernelError::unknown_role(other)),
        }
    }
}

/// Membership of a user in a team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub team_id: Option<TeamId>,
    pub user_id: Option<UserId>,
    pub user_role: String,
}

impl TeamMember {
    /// Creates a fully-populated membership
    pub fn new(team_id: i32, user_id: i32, role: MemberRole) -> Self {
        Self {
            team_id: Some(TeamId::new(team_id)),
            user_id: Some(UserId::new(user_id)),
            user_role: role.as_str().to_string(),
        }
    }

    /// Parses the stored role text, if it is one of the known roles
    pub fn role(&self) -> Result<MemberRole, KernelError> {
        self.user_role.parse()
    }

    pub fn is_owner(&self) -> bool {
        matches!(self.role(), Ok(MemberRole::Owner))
    }
}

/// Row produced by joining `team_member` with `users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberWithUser {
    pub user_id: UserId,
    pub user_name: String,
    pub user_role: String,
}
