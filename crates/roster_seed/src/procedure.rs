//! Fixture-and-report run
//!
//! Prepares the schema, clears the three roster tables, inserts the fixture
//! rows one by one, then prints five read-back reports. A failed database
//! operation prints an `Error:` line and the run moves on to the next
//! statement; nothing is rolled back or retried.
//!
//! One connection is opened before the first step. If that fails, every step
//! reports the connect error without touching the pool.

use roster_db::{
    check_connection, schema, DatabaseError, DatabasePool, TeamMemberRepository, TeamRepository,
    UserRepository,
};
use roster_kernel::fixtures::REPORT_TEAM;
use roster_kernel::{FixtureSet, KernelError, TeamMember};
use std::future::Future;
use std::io::{self, Write};
use tracing::{info, warn};

use crate::report::{self, Report};

/// A database operation that failed during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFailure {
    pub step: String,
    pub message: String,
}

/// Outcome of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Database operations attempted
    pub operations: usize,
    pub failures: Vec<StepFailure>,
}

impl RunSummary {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Seeds and reports on the roster tables through one shared pool
#[derive(Debug, Clone)]
pub struct Seeder {
    pool: DatabasePool,
    apply_schema: bool,
    users: UserRepository,
    teams: TeamRepository,
    members: TeamMemberRepository,
    fixture: FixtureSet,
}

impl Seeder {
    /// Creates a seeder that writes the standard fixture
    pub fn new(pool: DatabasePool) -> Self {
        Self::build(pool, FixtureSet::standard())
    }

    /// Creates a seeder that writes `fixture`
    ///
    /// # Errors
    ///
    /// Returns `KernelError::InvalidFixture` if the fixture fails
    /// [`FixtureSet::validate`].
    pub fn with_fixture(pool: DatabasePool, fixture: FixtureSet) -> Result<Self, KernelError> {
        fixture.validate()?;
        Ok(Self::build(pool, fixture))
    }

    fn build(pool: DatabasePool, fixture: FixtureSet) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            teams: TeamRepository::new(pool.clone()),
            members: TeamMemberRepository::new(pool.clone()),
            pool,
            apply_schema: true,
            fixture,
        }
    }

    /// Whether to create missing tables before seeding (default: true)
    pub fn apply_schema(mut self, apply: bool) -> Self {
        self.apply_schema = apply;
        self
    }

    /// Prepares, resets, populates, and reports, writing the report to `out`
    ///
    /// # Errors
    ///
    /// Only failures writing to `out` are returned; database failures are
    /// printed and collected in the summary.
    pub async fn run<W: Write>(&self, out: W) -> io::Result<RunSummary> {
        let unreachable = check_connection(&self.pool).await.err();
        if let Some(err) = &unreachable {
            warn!(error = %err, "Database unreachable, every step will fail");
        }

        let mut run = Run {
            report: Report::new(out),
            summary: RunSummary::default(),
            unreachable,
        };

        if self.apply_schema {
            run.step("ensure schema", schema::ensure_schema(&self.pool)).await?;
        }
        self.reset(&mut run).await?;
        self.populate(&mut run).await?;
        self.report(&mut run).await?;
        run.report.flush()?;

        info!(
            operations = run.summary.operations,
            failures = run.summary.failures.len(),
            "Seeding run finished"
        );
        Ok(run.summary)
    }

    async fn reset<W: Write>(&self, run: &mut Run<W>) -> io::Result<()> {
        info!("Clearing roster tables");
        run.step("delete users", self.users.delete_all()).await?;
        run.step("delete teams", self.teams.delete_all()).await?;
        run.step("delete team members", self.members.delete_all()).await?;
        Ok(())
    }

    async fn populate<W: Write>(&self, run: &mut Run<W>) -> io::Result<()> {
        info!(
            users = self.fixture.users.len(),
            teams = self.fixture.teams.len(),
            members = self.fixture.members.len(),
            "Inserting fixture rows"
        );

        for user in &self.fixture.users {
            run.step(&format!("insert user {}", user.id), self.users.insert(user)).await?;
        }
        for team in &self.fixture.teams {
            run.step(&format!("insert team {}", team.id), self.teams.insert(team)).await?;
        }
        for member in &self.fixture.members {
            run.step(&member_step(member), self.members.insert(member)).await?;
        }
        Ok(())
    }

    async fn report<W: Write>(&self, run: &mut Run<W>) -> io::Result<()> {
        run.report.header(report::ALL_USERS)?;
        if let Some(users) = run.step("select users", self.users.all()).await? {
            run.report.rows(&users, report::user_line)?;
        }

        run.report.header(report::ALL_TEAMS)?;
        if let Some(teams) = run.step("select teams", self.teams.all()).await? {
            run.report.rows(&teams, report::team_line)?;
        }

        run.report.header(report::ALL_TEAM_MEMBERS)?;
        if let Some(members) = run.step("select team members", self.members.all()).await? {
            run.report.rows(&members, report::member_line)?;
        }

        run.report.header(report::TEAM1_MEMBERS)?;
        let team_members = self.members.by_team(REPORT_TEAM);
        if let Some(members) = run.step("select team 1 members", team_members).await? {
            run.report.rows(&members, report::member_line)?;
        }

        run.report.header(report::TEAM1_MEMBERS_WITH_USERS)?;
        let roster = self.members.with_users(REPORT_TEAM);
        if let Some(rows) = run.step("select team 1 roster", roster).await? {
            run.report.rows(&rows, report::member_with_user_line)?;
        }

        Ok(())
    }
}

/// Step label for one membership insert, e.g. `insert team member team=1 user=2`
fn member_step(member: &TeamMember) -> String {
    fn key(id: Option<impl std::fmt::Display>) -> String {
        id.map_or_else(|| "NULL".to_string(), |id| id.to_string())
    }
    format!(
        "insert team member team={} user={}",
        key(member.team_id),
        key(member.user_id)
    )
}

struct Run<W: Write> {
    report: Report<W>,
    summary: RunSummary,
    /// Connect error from the pre-run check
    unreachable: Option<DatabaseError>,
}

impl<W: Write> Run<W> {
    /// Awaits `op` unless the database is known to be unreachable
    async fn step<T>(
        &mut self,
        step: &str,
        op: impl Future<Output = Result<T, DatabaseError>>,
    ) -> io::Result<Option<T>> {
        let result = match &self.unreachable {
            Some(err) => Err(err.clone()),
            None => op.await,
        };
        self.check(step, result)
    }

    /// Counts the operation and prints its error, if any
    fn check<T>(&mut self, step: &str, result: Result<T, DatabaseError>) -> io::Result<Option<T>> {
        self.summary.operations += 1;
        match result {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                warn!(step, error = %err, "Database operation failed");
                self.report.error(&err)?;
                self.summary.failures.push(StepFailure {
                    step: step.to_string(),
                    message: err.to_string(),
                });
                Ok(None)
            }
        }
    }
}
