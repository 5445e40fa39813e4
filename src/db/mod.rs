use std::collections::HashMap;
use std::str::FromStr;

use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::config::Config;
use crate::error::{AppError, optional, required};
use crate::models::{
    Milestone, MilestoneRef, MilestoneWithProgress, NewMilestone, NewProject, NewReminder,
    NewWeeklyProgress, Project, ProjectDetail, ProjectRef, ProjectSummary, Reminder,
    ReminderStatus, ReminderWithProject, WeeklyProgress, parse_date, parse_timestamp,
};
use crate::week;

/// Weekly reports shown per milestone on the project detail.
pub const RECENT_PROGRESS_LIMIT: i64 = 5;

/// Database connection pool
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct ProjectSummaryRow {
    #[sqlx(flatten)]
    project: Project,
    current_milestone_id: Option<i64>,
    current_milestone_title: Option<String>,
}

impl From<ProjectSummaryRow> for ProjectSummary {
    fn from(row: ProjectSummaryRow) -> Self {
        let current_milestone = match (row.current_milestone_id, row.current_milestone_title) {
            (Some(id), Some(title)) => Some(MilestoneRef { id, title }),
            _ => None,
        };
        Self {
            project: row.project,
            current_milestone,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ReminderRow {
    #[sqlx(flatten)]
    reminder: Reminder,
    project_name: String,
}

impl From<ReminderRow> for ReminderWithProject {
    fn from(row: ReminderRow) -> Self {
        let project = ProjectRef {
            id: row.reminder.project_id,
            name: row.project_name,
        };
        Self {
            reminder: row.reminder,
            project,
        }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

/// Foreign key failures on insert mean the parent row is gone.
fn insert_error(err: sqlx::Error, missing: impl FnOnce() -> AppError) -> AppError {
    let parent_missing =
        matches!(&err, sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation());
    if parent_missing {
        missing()
    } else {
        AppError::Store(err)
    }
}

impl Database {
    /// Create a new Database instance with a connection pool
    pub async fn new(config: &Config) -> Result<Self> {
        Self::connect(config.database_url(), config.max_connections).await
    }

    /// Open a pool for `url`, creating the database file if needed.
    ///
    /// An in-memory database lives inside a single connection, so the pool is
    /// pinned to one connection that is never recycled.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = if url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(max_connections)
                .connect_with(options)
                .await?
        };

        Ok(Self { pool })
    }

    /// Fresh, migrated in-memory database.
    pub async fn in_memory() -> Result<Self> {
        let db = Self::connect("sqlite::memory:", 1).await?;
        db.migrate().await?;
        Ok(db)
    }

    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!().run(self.get_pool()).await?;
        Ok(())
    }

    /// Get a reference to the connection pool
    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    // Project operations
    pub async fn create_project(&self, input: &NewProject) -> Result<Project, AppError> {
        let name = required(&input.name, "Name")?;
        let major_goal = required(&input.major_goal, "Major goal")?;
        let description = optional(input.description.as_deref());
        let status = input.status.unwrap_or_default();

        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (name, description, major_goal, status, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, description, major_goal, status, created_at
            "#,
        )
        .bind(&name)
        .bind(&description)
        .bind(&major_goal)
        .bind(status)
        .bind(Utc::now())
        .fetch_one(self.get_pool())
        .await?;

        tracing::info!(project_id = project.id, name = %project.name, "project created");
        Ok(project)
    }

    pub async fn list_projects(&self) -> Result<Vec<ProjectSummary>, AppError> {
        let rows = sqlx::query_as::<_, ProjectSummaryRow>(
            r#"
            SELECT
                p.id,
                p.name,
                p.description,
                p.major_goal,
                p.status,
                p.created_at,
                m.id AS current_milestone_id,
                m.title AS current_milestone_title
            FROM projects p
            LEFT JOIN milestones m ON m.id = (
                SELECT c.id FROM milestones c
                WHERE c.project_id = p.id AND c.is_current = 1
                ORDER BY c.created_at DESC, c.id DESC
                LIMIT 1
            )
            ORDER BY p.created_at DESC, p.id DESC
            "#,
        )
        .fetch_all(self.get_pool())
        .await?;

        Ok(rows.into_iter().map(ProjectSummary::from).collect())
    }

    pub async fn get_project(&self, id: i64) -> Result<Project, AppError> {
        sqlx::query_as::<_, Project>(
            r#"
            SELECT id, name, description, major_goal, status, created_at
            FROM projects
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.get_pool())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Project {id} not found")))
    }

    /// Project with every milestone (newest first) and each milestone's
    /// most recent weekly reports.
    pub async fn get_project_detail(&self, id: i64) -> Result<ProjectDetail, AppError> {
        let project = self.get_project(id).await?;
        let milestones = self.milestones_of(id).await?;

        let recent = sqlx::query_as::<_, WeeklyProgress>(
            r#"
            SELECT id, milestone_id, week_start_date, goals_achieved, notes, created_at
            FROM (
                SELECT
                    wp.*,
                    ROW_NUMBER() OVER (
                        PARTITION BY wp.milestone_id
                        ORDER BY wp.week_start_date DESC, wp.id DESC
                    ) AS rn
                FROM weekly_progress wp
                JOIN milestones m ON m.id = wp.milestone_id
                WHERE m.project_id = ?
            )
            WHERE rn <= ?
            ORDER BY milestone_id, week_start_date DESC, id DESC
            "#,
        )
        .bind(id)
        .bind(RECENT_PROGRESS_LIMIT)
        .fetch_all(self.get_pool())
        .await?;

        let mut by_milestone: HashMap<i64, Vec<WeeklyProgress>> = HashMap::new();
        for entry in recent {
            by_milestone.entry(entry.milestone_id).or_default().push(entry);
        }

        let milestones = milestones
            .into_iter()
            .map(|milestone| MilestoneWithProgress {
                weekly_progress: by_milestone.remove(&milestone.id).unwrap_or_default(),
                milestone,
            })
            .collect();

        Ok(ProjectDetail { project, milestones })
    }

    // Milestone operations
    async fn milestones_of(&self, project_id: i64) -> Result<Vec<Milestone>, AppError> {
        let milestones = sqlx::query_as::<_, Milestone>(
            r#"
            SELECT id, project_id, title, description, status, is_current, target_date, created_at
            FROM milestones
            WHERE project_id = ?
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(project_id)
        .fetch_all(self.get_pool())
        .await?;

        Ok(milestones)
    }

    pub async fn list_milestones(&self, project_id: i64) -> Result<Vec<Milestone>, AppError> {
        self.get_project(project_id).await?;
        self.milestones_of(project_id).await
    }

    pub async fn get_milestone(&self, id: i64) -> Result<Milestone, AppError> {
        sqlx::query_as::<_, Milestone>(
            r#"
            SELECT id, project_id, title, description, status, is_current, target_date, created_at
            FROM milestones
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.get_pool())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Milestone {id} not found")))
    }

    /// Inserts a milestone. When it is marked current, clearing the flag on
    /// its siblings and the insert commit together.
    ///
    /// The clearing UPDATE is the first statement of the transaction so the
    /// connection takes the write lock before reading anything, which lets
    /// concurrent callers queue on the lock instead of failing.
    pub async fn create_milestone(&self, input: &NewMilestone) -> Result<Milestone, AppError> {
        let project_id = input
            .project_id
            .ok_or_else(|| AppError::Validation("Project is required".to_string()))?;
        let title = required(&input.title, "Title")?;
        let description = optional(input.description.as_deref());
        let target_date = parse_date("Target date", input.target_date.as_deref())?;
        let status = input.status.unwrap_or_default();

        self.get_project(project_id).await?;

        let mut tx = self.pool.begin().await?;

        if input.is_current {
            let cleared = sqlx::query(
                "UPDATE milestones SET is_current = 0 WHERE project_id = ? AND is_current = 1",
            )
            .bind(project_id)
            .execute(&mut *tx)
            .await?;
            tracing::debug!(
                project_id,
                cleared = cleared.rows_affected(),
                "cleared current milestone"
            );
        }

        let milestone = sqlx::query_as::<_, Milestone>(
            r#"
            INSERT INTO milestones (project_id, title, description, status, is_current, target_date, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id, project_id, title, description, status, is_current, target_date, created_at
            "#,
        )
        .bind(project_id)
        .bind(&title)
        .bind(&description)
        .bind(status)
        .bind(input.is_current)
        .bind(target_date)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                AppError::Constraint(
                    "Another milestone became current at the same time".to_string(),
                )
            } else {
                insert_error(err, || AppError::NotFound(format!("Project {project_id} not found")))
            }
        })?;

        tx.commit().await?;

        tracing::info!(
            milestone_id = milestone.id,
            project_id,
            is_current = milestone.is_current,
            "milestone created"
        );
        Ok(milestone)
    }

    /// Makes `id` the only current milestone of its project.
    pub async fn set_current_milestone(&self, id: i64) -> Result<Milestone, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            UPDATE milestones SET is_current = 0
            WHERE is_current = 1
              AND id <> ?
              AND project_id = (SELECT project_id FROM milestones WHERE id = ?)
            "#,
        )
        .bind(id)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let milestone = sqlx::query_as::<_, Milestone>(
            r#"
            UPDATE milestones SET is_current = 1
            WHERE id = ?
            RETURNING id, project_id, title, description, status, is_current, target_date, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Milestone {id} not found")))?;

        tx.commit().await?;

        tracing::info!(
            milestone_id = id,
            project_id = milestone.project_id,
            "milestone made current"
        );
        Ok(milestone)
    }

    // Weekly progress operations
    pub async fn create_weekly_progress(
        &self,
        input: &NewWeeklyProgress,
    ) -> Result<WeeklyProgress, AppError> {
        let milestone_id = input
            .milestone_id
            .ok_or_else(|| AppError::Validation("Milestone is required".to_string()))?;
        let week_start = match parse_date("Week start date", input.week_start_date.as_deref())? {
            Some(date) => week::sunday_of(date),
            None => week::current_week_start().date(),
        };
        let notes = optional(input.notes.as_deref());

        self.get_milestone(milestone_id).await?;

        let progress = sqlx::query_as::<_, WeeklyProgress>(
            r#"
            INSERT INTO weekly_progress (milestone_id, week_start_date, goals_achieved, notes, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, milestone_id, week_start_date, goals_achieved, notes, created_at
            "#,
        )
        .bind(milestone_id)
        .bind(week_start)
        .bind(input.goals_achieved)
        .bind(&notes)
        .bind(Utc::now())
        .fetch_one(self.get_pool())
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                AppError::Constraint(format!(
                    "Progress for the week of {week_start} is already recorded"
                ))
            } else {
                insert_error(err, || {
                    AppError::NotFound(format!("Milestone {milestone_id} not found"))
                })
            }
        })?;

        tracing::info!(
            progress_id = progress.id,
            milestone_id,
            week = %progress.week_start_date,
            goals_achieved = progress.goals_achieved,
            "weekly progress recorded"
        );
        Ok(progress)
    }

    pub async fn list_weekly_progress(
        &self,
        milestone_id: i64,
        limit: i64,
    ) -> Result<Vec<WeeklyProgress>, AppError> {
        let entries = sqlx::query_as::<_, WeeklyProgress>(
            r#"
            SELECT id, milestone_id, week_start_date, goals_achieved, notes, created_at
            FROM weekly_progress
            WHERE milestone_id = ?
            ORDER BY week_start_date DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(milestone_id)
        .bind(limit)
        .fetch_all(self.get_pool())
        .await?;

        Ok(entries)
    }

    // Reminder operations
    pub async fn create_reminder(&self, input: &NewReminder) -> Result<Reminder, AppError> {
        let project_id = input
            .project_id
            .ok_or_else(|| AppError::Validation("Project is required".to_string()))?;
        let subject = required(&input.subject, "Subject")?;
        let message = required(&input.message, "Message")?;
        let recipient_email = required(&input.recipient_email, "Recipient email")?;
        if !looks_like_email(&recipient_email) {
            return Err(AppError::Validation(
                "Recipient email must be an email address".to_string(),
            ));
        }
        let reminder_date = parse_timestamp("Reminder date", &input.reminder_date)?;

        self.get_project(project_id).await?;

        let reminder = sqlx::query_as::<_, Reminder>(
            r#"
            INSERT INTO reminders (project_id, subject, message, recipient_email, reminder_date, status, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id, project_id, subject, message, recipient_email, reminder_date, status, created_at
            "#,
        )
        .bind(project_id)
        .bind(&subject)
        .bind(&message)
        .bind(&recipient_email)
        .bind(reminder_date)
        .bind(ReminderStatus::Scheduled)
        .bind(Utc::now())
        .fetch_one(self.get_pool())
        .await
        .map_err(|err| {
            insert_error(err, || AppError::NotFound(format!("Project {project_id} not found")))
        })?;

        tracing::info!(
            reminder_id = reminder.id,
            project_id,
            at = %reminder.reminder_date,
            "reminder scheduled"
        );
        Ok(reminder)
    }

    pub async fn list_reminders(&self) -> Result<Vec<ReminderWithProject>, AppError> {
        let rows = sqlx::query_as::<_, ReminderRow>(
            r#"
            SELECT
                r.id,
                r.project_id,
                r.subject,
                r.message,
                r.recipient_email,
                r.reminder_date,
                r.status,
                r.created_at,
                p.name AS project_name
            FROM reminders r
            JOIN projects p ON p.id = r.project_id
            ORDER BY r.reminder_date ASC, r.id ASC
            "#,
        )
        .fetch_all(self.get_pool())
        .await?;

        Ok(rows.into_iter().map(ReminderWithProject::from).collect())
    }

    pub async fn delete_reminder(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM reminders WHERE id = ?")
            .bind(id)
            .execute(self.get_pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Reminder {id} not found")));
        }

        tracing::info!(reminder_id = id, "reminder deleted");
        Ok(())
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// Initialize the database connection pool and bring the schema up to date
pub async fn init(config: &Config) -> Result<Database> {
    let db = Database::new(config).await?;

    db.migrate().await?;

    Ok(db)
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Local, Weekday};

    use super::*;
    use crate::models::{MilestoneStatus, ProjectStatus};

    async fn seeded() -> (Database, Project) {
        let db = Database::in_memory().await.unwrap();
        let project = db
            .create_project(&NewProject {
                name: "Alpha".to_string(),
                major_goal: "Ship v1".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        (db, project)
    }

    fn milestone(project_id: i64, title: &str, is_current: bool) -> NewMilestone {
        NewMilestone {
            project_id: Some(project_id),
            title: title.to_string(),
            is_current,
            ..Default::default()
        }
    }

    fn reminder(project_id: i64) -> NewReminder {
        NewReminder {
            project_id: Some(project_id),
            subject: "Follow up".to_string(),
            message: "Check in with the team".to_string(),
            recipient_email: "lead@example.com".to_string(),
            reminder_date: "2026-11-01T09:00:00Z".to_string(),
        }
    }

    #[tokio::test]
    async fn create_project_defaults_to_active() {
        let (_db, project) = seeded().await;
        assert_eq!(project.name, "Alpha");
        assert_eq!(project.major_goal, "Ship v1");
        assert_eq!(project.status, ProjectStatus::Active);
        assert!(project.description.is_none());
    }

    #[tokio::test]
    async fn create_project_requires_name_and_goal() {
        let db = Database::in_memory().await.unwrap();
        let err = db
            .create_project(&NewProject {
                name: "  ".to_string(),
                major_goal: "Goal".to_string(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = db
            .create_project(&NewProject {
                name: "Beta".to_string(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Major goal is required");
        assert!(db.list_projects().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_projects_is_newest_first_with_current_milestone() {
        let (db, alpha) = seeded().await;
        let beta = db
            .create_project(&NewProject {
                name: "Beta".to_string(),
                major_goal: "Grow".to_string(),
                status: Some(ProjectStatus::OnHold),
                ..Default::default()
            })
            .await
            .unwrap();
        db.create_milestone(&milestone(alpha.id, "Design", true)).await.unwrap();
        db.create_milestone(&milestone(alpha.id, "Later", false)).await.unwrap();

        let projects = db.list_projects().await.unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].project.id, beta.id);
        assert_eq!(projects[0].project.status, ProjectStatus::OnHold);
        assert!(projects[0].current_milestone.is_none());
        assert_eq!(projects[1].project.id, alpha.id);
        assert_eq!(
            projects[1].current_milestone.as_ref().map(|m| m.title.as_str()),
            Some("Design")
        );
    }

    #[tokio::test]
    async fn second_current_milestone_clears_the_first() {
        let (db, alpha) = seeded().await;
        let design = db.create_milestone(&milestone(alpha.id, "Design", true)).await.unwrap();
        let build = db.create_milestone(&milestone(alpha.id, "Build", true)).await.unwrap();

        let milestones = db.list_milestones(alpha.id).await.unwrap();
        let current: Vec<_> = milestones.iter().filter(|m| m.is_current).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].id, build.id);
        assert_eq!(current[0].title, "Build");

        let design = db.get_milestone(design.id).await.unwrap();
        assert!(!design.is_current);
    }

    #[tokio::test]
    async fn current_flag_is_scoped_to_one_project() {
        let (db, alpha) = seeded().await;
        let beta = db
            .create_project(&NewProject {
                name: "Beta".to_string(),
                major_goal: "Grow".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        let a = db.create_milestone(&milestone(alpha.id, "A", true)).await.unwrap();
        db.create_milestone(&milestone(beta.id, "B", true)).await.unwrap();

        assert!(db.get_milestone(a.id).await.unwrap().is_current);
    }

    #[tokio::test]
    async fn milestone_for_unknown_project_is_not_found() {
        let (db, alpha) = seeded().await;
        let err = db
            .create_milestone(&milestone(alpha.id + 100, "Ghost", true))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM milestones")
            .fetch_one(db.get_pool())
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn milestone_keeps_optional_fields() {
        let (db, alpha) = seeded().await;
        let created = db
            .create_milestone(&NewMilestone {
                project_id: Some(alpha.id),
                title: "Launch".to_string(),
                description: Some("Public release".to_string()),
                status: Some(MilestoneStatus::InProgress),
                is_current: false,
                target_date: Some("2026-12-01".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(created.status, MilestoneStatus::InProgress);
        assert_eq!(created.description.as_deref(), Some("Public release"));
        assert_eq!(created.target_date.map(|d| d.to_string()).as_deref(), Some("2026-12-01"));
    }

    #[tokio::test]
    async fn set_current_milestone_moves_the_flag() {
        let (db, alpha) = seeded().await;
        let design = db.create_milestone(&milestone(alpha.id, "Design", true)).await.unwrap();
        let build = db.create_milestone(&milestone(alpha.id, "Build", false)).await.unwrap();

        let promoted = db.set_current_milestone(build.id).await.unwrap();
        assert!(promoted.is_current);
        assert!(!db.get_milestone(design.id).await.unwrap().is_current);

        // Promoting the already-current milestone is a no-op.
        db.set_current_milestone(build.id).await.unwrap();
        assert!(db.get_milestone(build.id).await.unwrap().is_current);

        let err = db.set_current_milestone(9_999).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn project_detail_lists_milestones_and_recent_progress() {
        let (db, alpha) = seeded().await;
        let design = db.create_milestone(&milestone(alpha.id, "Design", false)).await.unwrap();
        let build = db.create_milestone(&milestone(alpha.id, "Build", true)).await.unwrap();

        let sundays = [
            "2026-08-02",
            "2026-08-09",
            "2026-08-16",
            "2026-08-23",
            "2026-08-30",
            "2026-09-06",
        ];
        for day in sundays {
            db.create_weekly_progress(&NewWeeklyProgress {
                milestone_id: Some(build.id),
                week_start_date: Some(day.to_string()),
                goals_achieved: true,
                notes: None,
            })
            .await
            .unwrap();
        }

        let detail = db.get_project_detail(alpha.id).await.unwrap();
        assert_eq!(detail.project.id, alpha.id);
        assert_eq!(detail.milestones.len(), 2);
        assert_eq!(detail.milestones[0].milestone.id, build.id);
        assert_eq!(detail.milestones[1].milestone.id, design.id);
        assert!(detail.milestones[1].weekly_progress.is_empty());

        let weeks: Vec<String> = detail.milestones[0]
            .weekly_progress
            .iter()
            .map(|p| p.week_start_date.to_string())
            .collect();
        assert_eq!(
            weeks,
            ["2026-09-06", "2026-08-30", "2026-08-23", "2026-08-16", "2026-08-09"]
        );
        assert_eq!(detail.current_milestone().map(|m| m.milestone.id), Some(build.id));
    }

    #[tokio::test]
    async fn project_detail_for_unknown_id_is_not_found() {
        let db = Database::in_memory().await.unwrap();
        let err = db.get_project_detail(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg == "Project 42 not found"));
    }

    #[tokio::test]
    async fn weekly_progress_normalises_to_sunday_and_rejects_duplicates() {
        let (db, alpha) = seeded().await;
        let design = db.create_milestone(&milestone(alpha.id, "Design", true)).await.unwrap();

        let entry = NewWeeklyProgress {
            milestone_id: Some(design.id),
            week_start_date: Some("2026-10-21".to_string()),
            goals_achieved: false,
            notes: Some("Slipped on reviews".to_string()),
        };
        let created = db.create_weekly_progress(&entry).await.unwrap();
        assert_eq!(created.week_start_date.to_string(), "2026-10-18");
        assert!(!created.goals_achieved);

        let err = db.create_weekly_progress(&entry).await.unwrap_err();
        assert!(matches!(err, AppError::Constraint(_)));

        let err = db
            .create_weekly_progress(&NewWeeklyProgress {
                milestone_id: Some(design.id + 50),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn weekly_progress_defaults_to_current_week() {
        let (db, alpha) = seeded().await;
        let design = db.create_milestone(&milestone(alpha.id, "Design", true)).await.unwrap();
        let created = db
            .create_weekly_progress(&NewWeeklyProgress {
                milestone_id: Some(design.id),
                goals_achieved: true,
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(created.week_start_date.weekday(), Weekday::Sun);
        let days_back = (Local::now().date_naive() - created.week_start_date).num_days();
        assert!((0..=7).contains(&days_back), "week start {days_back} days back");

        let listed = db.list_weekly_progress(design.id, 5).await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn reminders_are_scheduled_and_carry_project() {
        let (db, alpha) = seeded().await;
        let created = db.create_reminder(&reminder(alpha.id)).await.unwrap();
        assert_eq!(created.status, ReminderStatus::Scheduled);

        let listed = db.list_reminders().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].reminder.id, created.id);
        assert_eq!(listed[0].project, ProjectRef { id: alpha.id, name: "Alpha".to_string() });
    }

    #[tokio::test]
    async fn reminder_validation() {
        let (db, alpha) = seeded().await;

        let mut missing_subject = reminder(alpha.id);
        missing_subject.subject.clear();
        let err = db.create_reminder(&missing_subject).await.unwrap_err();
        assert_eq!(err.to_string(), "Subject is required");

        let mut bad_email = reminder(alpha.id);
        bad_email.recipient_email = "not-an-email".to_string();
        assert!(matches!(
            db.create_reminder(&bad_email).await.unwrap_err(),
            AppError::Validation(_)
        ));

        let mut no_project = reminder(alpha.id);
        no_project.project_id = None;
        assert!(matches!(
            db.create_reminder(&no_project).await.unwrap_err(),
            AppError::Validation(_)
        ));

        let err = db.create_reminder(&reminder(alpha.id + 7)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(db.list_reminders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn deleting_missing_reminder_leaves_table_untouched() {
        let (db, alpha) = seeded().await;
        let kept = db.create_reminder(&reminder(alpha.id)).await.unwrap();

        let err = db.delete_reminder(kept.id + 1).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(db.list_reminders().await.unwrap().len(), 1);

        db.delete_reminder(kept.id).await.unwrap();
        assert!(db.list_reminders().await.unwrap().is_empty());
        assert!(matches!(
            db.delete_reminder(kept.id).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }

    #[test]
    fn email_shape_check() {
        assert!(looks_like_email("a@b.co"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a@"));
        assert!(!looks_like_email("a@b@c"));
        assert!(!looks_like_email("plain"));
    }
}
