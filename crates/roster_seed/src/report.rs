//! Plain-text report lines
//!
//! Every row is printed as comma-separated `Label: value` pairs under a
//! section header. Null keys print as `NULL`.

use roster_db::models::{MemberWithUserRow, TeamMemberRow, TeamRow, UserRow};
use std::fmt::Display;
use std::io::{self, Write};

pub const ALL_USERS: &str = "All Users";
pub const ALL_TEAMS: &str = "All Teams";
pub const ALL_TEAM_MEMBERS: &str = "All TeamMembers";
pub const TEAM1_MEMBERS: &str = "Team1 Members";
pub const TEAM1_MEMBERS_WITH_USERS: &str = "Team1 Members With Users";

fn nullable(value: Option<i32>) -> String {
    value.map_or_else(|| "NULL".to_string(), |v| v.to_string())
}

pub fn user_line(user: &UserRow) -> String {
    format!("ID: {}, Name: {}", user.id, user.name)
}

pub fn team_line(team: &TeamRow) -> String {
    format!("ID: {}, Name: {}", team.id, team.name)
}

pub fn member_line(member: &TeamMemberRow) -> String {
    format!(
        "TeamID: {}, UserID: {}, UserRole: {}",
        nullable(member.team_id),
        nullable(member.user_id),
        member.user_role
    )
}

pub fn member_with_user_line(row: &MemberWithUserRow) -> String {
    format!(
        "UserID: {}, Name: {}, UserRole: {}",
        row.user_id, row.user_name, row.user_role
    )
}

pub fn error_line(error: &dyn Display) -> String {
    format!("Error: {error}")
}

/// Writes report sections to an output stream
pub struct Report<W: Write> {
    out: W,
}

impl<W: Write> Report<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn header(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "{title}")
    }

    /// Writes one formatted line per row
    pub fn rows<T>(&mut self, rows: &[T], format: impl Fn(&T) -> String) -> io::Result<()> {
        for row in rows {
            writeln!(self.out, "{}", format(row))?;
        }
        Ok(())
    }

    pub fn error(&mut self, error: &dyn Display) -> io::Result<()> {
        writeln!(self.out, "{}", error_line(error))
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_line() {
        let row = UserRow {
            id: 1,
            name: "Alice".to_string(),
        };
        assert_eq!(user_line(&row), "ID: 1, Name: Alice");
    }

    #[test]
    fn test_member_line_prints_null_keys() {
        let row = TeamMemberRow {
            team_id: Some(1),
            user_id: None,
            user_role: "MEMBER".to_string(),
        };
        assert_eq!(member_line(&row), "TeamID: 1, UserID: NULL, UserRole: MEMBER");
    }

    #[test]
    fn test_member_with_user_line() {
        let row = MemberWithUserRow {
            user_id: 2,
            user_name: "Bob".to_string(),
            user_role: "MEMBER".to_string(),
        };
        assert_eq!(member_with_user_line(&row), "UserID: 2, Name: Bob, UserRole: MEMBER");
    }

    #[test]
    fn test_report_writes_header_then_rows() {
        let mut report = Report::new(Vec::new());
        let teams = vec![
            TeamRow { id: 1, name: "Team1".to_string() },
            TeamRow { id: 2, name: "Team2".to_string() },
        ];

        report.header(ALL_TEAMS).unwrap();
        report.rows(&teams, team_line).unwrap();
        report.error(&"boom").unwrap();

        let text = String::from_utf8(report.into_inner()).unwrap();
        assert_eq!(text, "All Teams\nID: 1, Name: Team1\nID: 2, Name: Team2\nError: boom\n");
    }
}
