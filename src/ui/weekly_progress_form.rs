use axum::extract::{Query, State};
use axum::response::Html;
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use crate::AppState;
use crate::db::RECENT_PROGRESS_LIMIT;
use crate::models::{Milestone, Project, WeeklyProgress};
use crate::ui::PageError;
use crate::ui::layout::{escape, page};
use crate::week;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyProgressQuery {
    pub milestone_id: i64,
}

pub async fn new_weekly_progress_page(
    State(state): State<AppState>,
    Query(query): Query<WeeklyProgressQuery>,
) -> Result<Html<String>, PageError> {
    let milestone = state.db.get_milestone(query.milestone_id).await?;
    let project = state.db.get_project(milestone.project_id).await?;
    let recent = state
        .db
        .list_weekly_progress(milestone.id, RECENT_PROGRESS_LIMIT)
        .await?;
    let week_start = week::week_start(Local::now().naive_local()).date();

    Ok(Html(render_new_weekly_progress(&project, &milestone, &recent, week_start)))
}

pub fn render_new_weekly_progress(
    project: &Project,
    milestone: &Milestone,
    recent: &[WeeklyProgress],
    week_start: NaiveDate,
) -> String {
    let mut content = String::new();
    content.push_str(&format!(
        "<p><a href=\"/projects/{}\">&larr; Back to {}</a></p>\n<h1>Weekly Report</h1>\n",
        project.id,
        escape(&project.name)
    ));
    content.push_str(&format!(
        "<p class=\"muted\">Milestone: <strong>{}</strong></p>\n",
        escape(&milestone.title)
    ));
    content.push_str(&format!(
        "<form id=\"progress-form\" class=\"card\" data-milestone-id=\"{}\" data-project-id=\"{}\" \
         data-fallback=\"Failed to save weekly report\">\n",
        milestone.id, project.id
    ));
    content.push_str(&format!(
        "<div class=\"field\"><label for=\"weekStartDate\">Week starting (Sunday)</label>\
         <input type=\"date\" id=\"weekStartDate\" value=\"{}\"></div>\n",
        week_start.format("%Y-%m-%d")
    ));
    content.push_str(
        "<div class=\"field\"><label><input type=\"checkbox\" id=\"goalsAchieved\"> Goals achieved this week</label></div>\n",
    );
    content.push_str(
        "<div class=\"field\"><label for=\"notes\">Notes</label>\
         <textarea id=\"notes\" rows=\"4\" placeholder=\"What got done, what slipped, what is next\"></textarea></div>\n",
    );
    content.push_str(
        "<button class=\"button\" type=\"submit\">Save Report</button> \
         <button class=\"button secondary\" type=\"button\" onclick=\"history.back()\">Cancel</button>\n",
    );
    content.push_str("</form>\n");

    if !recent.is_empty() {
        content.push_str("<div class=\"card\"><h2>Previous Reports</h2><ul>");
        for entry in recent {
            let outcome = if entry.goals_achieved { "achieved" } else { "not achieved" };
            content.push_str(&format!(
                "<li>Week of {}: {outcome}</li>",
                entry.week_start_date.format("%Y-%m-%d")
            ));
        }
        content.push_str("</ul></div>\n");
    }

    content.push_str(
        r#"<script>
document.getElementById('progress-form').addEventListener('submit', (event) => {
  event.preventDefault();
  const form = event.target;
  submitJson(form, '/api/weekly-progress', {
    milestoneId: Number(form.dataset.milestoneId),
    weekStartDate: optionalText(form.querySelector('#weekStartDate').value),
    goalsAchieved: form.querySelector('#goalsAchieved').checked,
    notes: optionalText(form.querySelector('#notes').value),
  }, () => { window.location.href = '/projects/' + form.dataset.projectId; });
});
</script>"#,
    );

    page("Weekly Report", &content)
}
