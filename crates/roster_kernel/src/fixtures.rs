//! Fixture data written by every seeding run
//!
//! The seeder always resets the database to exactly this set: ten users,
//! three teams, and ten memberships with one owner per team.

use std::collections::{HashMap, HashSet};

use crate::error::KernelError;
use crate::identifiers::{TeamId, UserId};
use crate::model::{MemberRole, MemberWithUser, Team, TeamMember, User};

const USERS: [(i32, &str); 10] = [
    (1, "Alice"),
    (2, "Bob"),
    (3, "Charlie"),
    (4, "Dave"),
    (5, "Eve"),
    (6, "Frank"),
    (7, "Grace"),
    (8, "Hank"),
    (9, "Ivy"),
    (10, "Jack"),
];

const TEAMS: [(i32, &str); 3] = [(1, "Team1"), (2, "Team2"), (3, "Team3")];

const MEMBERSHIPS: [(i32, i32, MemberRole); 10] = [
    (1, 1, MemberRole::Owner),
    (1, 2, MemberRole::Member),
    (1, 3, MemberRole::Member),
    (2, 4, MemberRole::Owner),
    (2, 5, MemberRole::Member),
    (2, 6, MemberRole::Member),
    (3, 7, MemberRole::Owner),
    (3, 8, MemberRole::Member),
    (3, 9, MemberRole::Member),
    (3, 10, MemberRole::Member),
];

/// Team whose members the filtered and joined reports show
pub const REPORT_TEAM: TeamId = TeamId::new(1);

/// A complete set of rows for the three roster tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureSet {
    pub users: Vec<User>,
    pub teams: Vec<Team>,
    pub members: Vec<TeamMember>,
}

impl FixtureSet {
    /// The literal sample data inserted on every run
    pub fn standard() -> Self {
        Self {
            users: USERS.iter().map(|(id, name)| User::new(*id, *name)).collect(),
            teams: TEAMS.iter().map(|(id, name)| Team::new(*id, *name)).collect(),
            members: MEMBERSHIPS
                .iter()
                .map(|(team, user, role)| TeamMember::new(*team, *user, *role))
                .collect(),
        }
    }

    /// Looks up a fixture user by id
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Memberships of one team, in fixture order
    pub fn members_of(&self, team_id: TeamId) -> Vec<&TeamMember> {
        self.members
            .iter()
            .filter(|m| m.team_id == Some(team_id))
            .collect()
    }

    /// The rows the user/membership join should return for `team_id`
    pub fn expected_roster(&self, team_id: TeamId) -> Vec<MemberWithUser> {
        self.members_of(team_id)
            .into_iter()
            .filter_map(|m| {
                let user = self.user(m.user_id?)?;
                Some(MemberWithUser {
                    user_id: user.id,
                    user_name: user.name.clone(),
                    user_role: m.user_role.clone(),
                })
            })
            .collect()
    }

    /// Checks the invariants the seeded data is expected to hold
    ///
    /// # Errors
    ///
    /// Returns `KernelError::InvalidFixture` naming the first violation:
    /// duplicate ids, a membership with a missing or unknown key, an unknown
    /// role, or a team without exactly one owner.
    pub fn validate(&self) -> Result<(), KernelError> {
        let mut user_ids = HashSet::new();
        for user in &self.users {
            if !user_ids.insert(user.id) {
                return Err(KernelError::invalid_fixture(format!("duplicate user id {}", user.id)));
            }
        }

        let mut team_ids = HashSet::new();
        for team in &self.teams {
            if !team_ids.insert(team.id) {
                return Err(KernelError::invalid_fixture(format!("duplicate team id {}", team.id)));
            }
        }

        let mut owners: HashMap<TeamId, usize> = self.teams.iter().map(|t| (t.id, 0)).collect();
        for member in &self.members {
            let (Some(team_id), Some(user_id)) = (member.team_id, member.user_id) else {
                return Err(KernelError::invalid_fixture("membership with a null key"));
            };
            if !user_ids.contains(&user_id) {
                return Err(KernelError::invalid_fixture(format!("unknown user {user_id}")));
            }
            let Some(count) = owners.get_mut(&team_id) else {
                return Err(KernelError::invalid_fixture(format!("unknown team {team_id}")));
            };
            if member.role()? == MemberRole::Owner {
                *count += 1;
            }
        }

        let mut teams: Vec<_> = owners.into_iter().collect();
        teams.sort();
        for (team_id, count) in teams {
            if count != 1 {
                return Err(KernelError::invalid_fixture(format!(
                    "team {team_id} has {count} owners"
                )));
            }
        }

        Ok(())
    }
}
