mod dates;
pub(crate) mod input;
mod milestone;
mod project;
mod reminder;
mod weekly_progress;

pub use dates::{parse_date, parse_timestamp};
pub use milestone::{Milestone, MilestoneRef, MilestoneStatus, MilestoneWithProgress, NewMilestone};
pub use project::{NewProject, Project, ProjectDetail, ProjectRef, ProjectStatus, ProjectSummary};
pub use reminder::{NewReminder, Reminder, ReminderStatus, ReminderWithProject};
pub use weekly_progress::{NewWeeklyProgress, WeeklyProgress};
