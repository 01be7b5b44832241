//! Roster Assertions
//!
//! Assertion helpers that compare the live roster tables with a fixture set
//! and give more meaningful failure messages than a bare `assert_eq!`.

use roster_db::{TeamMemberRepository, TeamRepository, UserRepository};
use roster_kernel::{FixtureSet, MemberWithUser, Team, TeamId, TeamMember, User};
use sqlx::PgPool;

/// Asserts that `users` holds exactly the fixture users
///
/// # Panics
///
/// Panics if the query fails or the rows differ from the fixture
pub async fn assert_users_match(pool: &PgPool, fixture: &FixtureSet) {
    let users: Vec<User> = UserRepository::new(pool.clone())
        .all()
        .await
        .expect("Failed to read users")
        .into_iter()
        .map(User::from)
        .collect();

    assert_eq!(users, fixture.users, "users table does not match the fixture");
}

/// Asserts that `teams` holds exactly the fixture teams
pub async fn assert_teams_match(pool: &PgPool, fixture: &FixtureSet) {
    let teams: Vec<Team> = TeamRepository::new(pool.clone())
        .all()
        .await
        .expect("Failed to read teams")
        .into_iter()
        .map(Team::from)
        .collect();

    assert_eq!(teams, fixture.teams, "teams table does not match the fixture");
}

/// Asserts that `team_member` holds exactly the fixture memberships
///
/// Rows are compared in (team, user) order, which is the order both the
/// repository and the fixture use.
pub async fn assert_members_match(pool: &PgPool, fixture: &FixtureSet) {
    let members: Vec<TeamMember> = TeamMemberRepository::new(pool.clone())
        .all()
        .await
        .expect("Failed to read team members")
        .into_iter()
        .map(TeamMember::from)
        .collect();

    assert_eq!(members, fixture.members, "team_member table does not match the fixture");
}

/// Asserts that every team with memberships has exactly one owner
pub async fn assert_single_owner_per_team(pool: &PgPool) {
    let counts = TeamMemberRepository::new(pool.clone())
        .owner_counts()
        .await
        .expect("Failed to count owners");

    for row in counts {
        assert_eq!(
            row.owners, 1,
            "team {:?} has {} owners, expected exactly one",
            row.team_id, row.owners
        );
    }
}

/// Asserts that the user/membership join for `team_id` matches the fixture
pub async fn assert_roster_matches(pool: &PgPool, fixture: &FixtureSet, team_id: TeamId) {
    let roster: Vec<MemberWithUser> = TeamMemberRepository::new(pool.clone())
        .with_users(team_id)
        .await
        .expect("Failed to read team roster")
        .into_iter()
        .map(MemberWithUser::from)
        .collect();

    assert_eq!(
        roster,
        fixture.expected_roster(team_id),
        "roster for team {} does not match the fixture",
        team_id
    );
}

/// Asserts the whole database is in the seeded fixture state
pub async fn assert_seeded_state(pool: &PgPool, fixture: &FixtureSet) {
    assert_users_match(pool, fixture).await;
    assert_teams_match(pool, fixture).await;
    assert_members_match(pool, fixture).await;
    assert_single_owner_per_team(pool).await;
}
