//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating roster rows.

use proptest::prelude::*;
use roster_kernel::{MemberRole, Team, TeamId, TeamMember, User, UserId};

/// Strategy for generating positive caller-assigned ids
pub fn id_strategy() -> impl Strategy<Value = i32> {
    1i32..100_000i32
}

/// Strategy for generating display names, including non-ASCII ones
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 éü]{0,23}"
}

/// Strategy for generating either known role
pub fn role_strategy() -> impl Strategy<Value = MemberRole> {
    prop_oneof![Just(MemberRole::Owner), Just(MemberRole::Member)]
}

/// Strategy for generating users
pub fn user_strategy() -> impl Strategy<Value = User> {
    (id_strategy(), name_strategy()).prop_map(|(id, name)| User::new(id, name))
}

/// Strategy for generating teams
pub fn team_strategy() -> impl Strategy<Value = Team> {
    (id_strategy(), name_strategy()).prop_map(|(id, name)| Team::new(id, name))
}

/// Strategy for generating memberships, sometimes with null keys
pub fn team_member_strategy() -> impl Strategy<Value = TeamMember> {
    (
        proptest::option::of(id_strategy()),
        proptest::option::of(id_strategy()),
        role_strategy(),
    )
        .prop_map(|(team, user, role)| TeamMember {
            team_id: team.map(TeamId::new),
            user_id: user.map(UserId::new),
            user_role: role.to_string(),
        })
}
