//! Property tests for report line formatting

use proptest::prelude::*;
use roster_db::models::{TeamMemberRow, UserRow};
use roster_seed::report::{member_line, user_line};
use test_utils::{team_member_strategy, user_strategy};

proptest! {
    #[test]
    fn prop_user_line_shape(user in user_strategy()) {
        let row = UserRow { id: user.id.get(), name: user.name.clone() };
        let line = user_line(&row);

        let expected_prefix = format!("ID: {}, Name: ", user.id);
        prop_assert!(line.starts_with(&expected_prefix));
        prop_assert!(line.ends_with(&user.name));
    }

    #[test]
    fn prop_member_line_has_three_fields(member in team_member_strategy()) {
        let row = TeamMemberRow {
            team_id: member.team_id.map(|id| id.get()),
            user_id: member.user_id.map(|id| id.get()),
            user_role: member.user_role.clone(),
        };
        let line = member_line(&row);
        let fields: Vec<&str> = line.split(", ").collect();

        prop_assert_eq!(fields.len(), 3);
        prop_assert!(fields[0].starts_with("TeamID: "));
        prop_assert!(fields[1].starts_with("UserID: "));
        prop_assert_eq!(fields[2], format!("UserRole: {}", member.user_role));
        prop_assert_eq!(row.team_id.is_none(), fields[0] == "TeamID: NULL");
    }
}
