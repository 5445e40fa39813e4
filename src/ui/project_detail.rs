use axum::extract::{Path, State};
use axum::response::Html;
use chrono::{Local, NaiveDateTime};

use crate::AppState;
use crate::models::{MilestoneWithProgress, ProjectDetail, WeeklyProgress};
use crate::ui::PageError;
use crate::ui::layout::{escape, milestone_status_badge, page, project_status_badge};
use crate::week;

/// Weekly entries shown inline under the current milestone.
const INLINE_PROGRESS: usize = 3;

pub async fn project_detail_page(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let detail = state.db.get_project_detail(id).await?;
    Ok(Html(render_project_detail(&detail, Local::now().naive_local())))
}

fn progress_line(progress: &WeeklyProgress) -> String {
    let (class, label) = if progress.goals_achieved {
        ("achieved", "&#10003; Achieved")
    } else {
        ("missed", "&#10007; Not Achieved")
    };
    let mut content = format!(
        "<div class=\"card\" style=\"padding:.5rem;margin-bottom:.5rem\"><strong>Week of {}</strong>\
         <div class=\"{class}\">Goals: {label}</div>",
        progress.week_start_date.format("%Y-%m-%d")
    );
    if let Some(notes) = &progress.notes {
        content.push_str(&format!("<div class=\"muted\">{}</div>", escape(notes)));
    }
    content.push_str("</div>");
    content
}

fn milestone_block(entry: &MilestoneWithProgress) -> String {
    let milestone = &entry.milestone;
    let mut content = String::new();
    let class = if milestone.is_current { "card current" } else { "card" };
    content.push_str(&format!("<div class=\"{class}\">"));
    content.push_str(&format!("<h3 style=\"margin:0\">{} ", escape(&milestone.title)));
    if milestone.is_current {
        content.push_str("<span class=\"badge blue\">Current</span> ");
    }
    content.push_str(&milestone_status_badge(milestone.status));
    content.push_str("</h3>");

    if let Some(description) = &milestone.description {
        content.push_str(&format!("<p class=\"muted\">{}</p>", escape(description)));
    }
    if let Some(target) = milestone.target_date {
        content.push_str(&format!("<p class=\"muted\">Target: {}</p>", target.format("%Y-%m-%d")));
    }

    if milestone.is_current && !entry.weekly_progress.is_empty() {
        content.push_str("<h4>Recent Weekly Progress:</h4>");
        for progress in entry.weekly_progress.iter().take(INLINE_PROGRESS) {
            content.push_str(&progress_line(progress));
        }
    }
    if !milestone.is_current {
        content.push_str(&format!(
            "<button class=\"button secondary\" type=\"button\" data-fallback=\"Failed to update milestone\" \
             onclick=\"submitJson(this, '/api/milestones/{}/current', {{}}, () => window.location.reload())\">\
             Make current</button>",
            milestone.id
        ));
    }
    content.push_str("</div>\n");
    content
}

/// Detail page for one project. `now` decides whether the Sunday prompt shows.
pub fn render_project_detail(detail: &ProjectDetail, now: NaiveDateTime) -> String {
    let project = &detail.project;
    let current = detail.current_milestone();

    let mut content = String::new();
    content.push_str("<p><a href=\"/projects\">&larr; Back to Projects</a></p>\n");

    content.push_str("<div class=\"card\">");
    content.push_str(&format!(
        "<div style=\"display:flex;justify-content:space-between;align-items:flex-start\">\
         <div><h1 style=\"margin-top:0\">{}</h1>{}</div>\
         <a class=\"button\" href=\"/projects/{}/milestones/new\">+ Add Milestone</a></div>",
        escape(&project.name),
        project_status_badge(project.status),
        project.id
    ));
    if let Some(description) = &project.description {
        content.push_str(&format!("<p class=\"muted\">{}</p>", escape(description)));
    }
    content.push_str(&format!(
        "<hr><h3 class=\"muted\">Major Goal</h3><p><strong>{}</strong></p>",
        escape(&project.major_goal)
    ));
    content.push_str("</div>\n");

    if let Some(current) = current.filter(|_| week::is_progress_day(now)) {
        content.push_str(
            "<div class=\"notice\"><h3>It's Sunday! Time to track weekly progress</h3>",
        );
        content.push_str("<p>Record what you completed last week and plan for next week.</p>");
        content.push_str(&format!(
            "<a class=\"button\" href=\"/weekly-progress/new?milestoneId={}\">Create Weekly Report</a></div>\n",
            current.milestone.id
        ));
    }

    content.push_str("<div class=\"card\"><h2>Milestones</h2>\n");
    if detail.milestones.is_empty() {
        content.push_str("<p class=\"muted\">No milestones yet. Create one to get started.</p>");
    } else {
        for entry in &detail.milestones {
            content.push_str(&milestone_block(entry));
        }
    }
    content.push_str("</div>\n");

    if let Some(current) = current {
        content.push_str("<div class=\"card\"><h2>Weekly Progress History</h2>");
        if current.weekly_progress.is_empty() {
            content.push_str(
                "<p class=\"muted\">No weekly reports for the current milestone yet.</p>",
            );
        } else {
            for progress in &current.weekly_progress {
                content.push_str(&progress_line(progress));
            }
        }
        content.push_str(&format!(
            "<a href=\"/weekly-progress/new?milestoneId={}\">Log progress for this week &rarr;</a></div>\n",
            current.milestone.id
        ));
    }

    page(&project.name, &content)
}
