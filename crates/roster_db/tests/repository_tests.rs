//! Repository tests against a real PostgreSQL container
//!
//! These need Docker and are ignored by default:
//! `cargo test -p roster_db -- --ignored`

use roster_db::query::MemberFilter;
use roster_db::{DatabaseError, TeamMemberRepository, TeamRepository, UserRepository};
use roster_kernel::{MemberRole, Team, TeamId, TeamMember, User, UserId};
use test_utils::db_test;

async fn seed_two_teams(pool: &sqlx::PgPool) {
    let users = UserRepository::new(pool.clone());
    let teams = TeamRepository::new(pool.clone());
    let members = TeamMemberRepository::new(pool.clone());

    for (id, name) in [(1, "Alice"), (2, "Bob"), (3, "Charlie")] {
        users.insert(&User::new(id, name)).await.unwrap();
    }
    for (id, name) in [(1, "Team1"), (2, "Team2")] {
        teams.insert(&Team::new(id, name)).await.unwrap();
    }
    members.insert(&TeamMember::new(1, 1, MemberRole::Owner)).await.unwrap();
    members.insert(&TeamMember::new(1, 2, MemberRole::Member)).await.unwrap();
    members.insert(&TeamMember::new(2, 3, MemberRole::Owner)).await.unwrap();
}

db_test!(test_insert_and_find_user, |pool| {
    let users = UserRepository::new(pool);

    let row = users.insert(&User::new(5, "Eve")).await.unwrap();
    assert_eq!(row.id, 5);
    assert_eq!(row.name, "Eve");

    let found = users.find(UserId::new(5)).await.unwrap();
    assert_eq!(found, row);
});

db_test!(test_find_missing_team_is_not_found, |pool| {
    let err = TeamRepository::new(pool).find(TeamId::new(42)).await.unwrap_err();
    assert!(err.is_not_found());
});

db_test!(test_duplicate_user_id_is_classified, |pool| {
    let users = UserRepository::new(pool);
    users.insert(&User::new(1, "Alice")).await.unwrap();

    let err = users.insert(&User::new(1, "Alicia")).await.unwrap_err();
    assert!(matches!(err, DatabaseError::DuplicateEntry(_)));
});

db_test!(test_membership_for_unknown_team_is_foreign_key_violation, |pool| {
    UserRepository::new(pool.clone())
        .insert(&User::new(1, "Alice"))
        .await
        .unwrap();

    let err = TeamMemberRepository::new(pool)
        .insert(&TeamMember::new(9, 1, MemberRole::Owner))
        .await
        .unwrap_err();
    assert!(matches!(err, DatabaseError::ForeignKeyViolation(_)));
});

db_test!(test_membership_with_null_keys_is_stored, |pool| {
    let members = TeamMemberRepository::new(pool);
    let member = TeamMember {
        team_id: None,
        user_id: None,
        user_role: "MEMBER".to_string(),
    };

    let row = members.insert(&member).await.unwrap();
    assert_eq!(row.team_id, None);
    assert_eq!(members.count().await.unwrap(), 1);
});

db_test!(test_by_team_filters_rows, |pool| {
    seed_two_teams(&pool).await;
    let members = TeamMemberRepository::new(pool);

    let team1 = members.by_team(TeamId::new(1)).await.unwrap();
    assert_eq!(team1.len(), 2);
    assert!(team1.iter().all(|m| m.team_id == Some(1)));

    let owners = members
        .matching(&MemberFilter::default().with_role(MemberRole::Owner))
        .await
        .unwrap();
    assert_eq!(owners.len(), 2);
});

db_test!(test_with_users_joins_names, |pool| {
    seed_two_teams(&pool).await;

    let roster = TeamMemberRepository::new(pool)
        .with_users(TeamId::new(1))
        .await
        .unwrap();
    let pairs: Vec<(i32, &str, &str)> = roster
        .iter()
        .map(|r| (r.user_id, r.user_name.as_str(), r.user_role.as_str()))
        .collect();

    assert_eq!(pairs, vec![(1, "Alice", "OWNER"), (2, "Bob", "MEMBER")]);
});

db_test!(test_owner_counts_per_team, |pool| {
    seed_two_teams(&pool).await;

    let counts = TeamMemberRepository::new(pool).owner_counts().await.unwrap();
    let counts: Vec<(Option<i32>, i64)> = counts.into_iter().map(|r| (r.team_id, r.owners)).collect();
    assert_eq!(counts, vec![(Some(1), 1), (Some(2), 1)]);
});

db_test!(test_deleting_users_cascades_to_memberships, |pool| {
    seed_two_teams(&pool).await;

    let removed = UserRepository::new(pool.clone()).delete_all().await.unwrap();
    assert_eq!(removed, 3);
    assert_eq!(TeamMemberRepository::new(pool.clone()).count().await.unwrap(), 0);
    assert_eq!(TeamRepository::new(pool).count().await.unwrap(), 2);
});

#[tokio::test]
#[ignore = "requires Docker for the PostgreSQL testcontainer"]
async fn test_clear_data_empties_every_table() {
    let db = test_utils::create_isolated_test_database()
        .await
        .expect("Failed to create test database");
    seed_two_teams(db.pool()).await;

    db.clear_data().await.unwrap();

    assert_eq!(UserRepository::new(db.pool().clone()).count().await.unwrap(), 0);
    assert_eq!(TeamRepository::new(db.pool().clone()).count().await.unwrap(), 0);
    assert_eq!(TeamMemberRepository::new(db.pool().clone()).count().await.unwrap(), 0);
}
