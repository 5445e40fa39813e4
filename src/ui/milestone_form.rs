use axum::extract::{Path, State};
use axum::response::Html;

use crate::AppState;
use crate::models::{MilestoneStatus, Project};
use crate::ui::PageError;
use crate::ui::layout::{escape, options, page};

pub async fn new_milestone_page(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let project = state.db.get_project(project_id).await?;
    Ok(Html(render_new_milestone(&project)))
}

pub fn render_new_milestone(project: &Project) -> String {
    let statuses = MilestoneStatus::ALL.map(|s| (s.as_str(), s.label()));

    let mut content = String::new();
    content.push_str(&format!(
        "<p><a href=\"/projects/{}\">&larr; Back to {}</a></p>\n<h1>Create New Milestone</h1>\n",
        project.id,
        escape(&project.name)
    ));
    content.push_str(&format!(
        "<form id=\"milestone-form\" class=\"card\" data-project-id=\"{}\" data-fallback=\"Failed to create milestone\">\n",
        project.id
    ));
    content.push_str(
        "<div class=\"field\"><label for=\"title\">Milestone Title *</label>\
         <input type=\"text\" id=\"title\" required placeholder=\"Enter milestone title\"></div>\n",
    );
    content.push_str(
        "<div class=\"field\"><label for=\"description\">Description</label>\
         <textarea id=\"description\" rows=\"4\" placeholder=\"Enter milestone description\"></textarea></div>\n",
    );
    content.push_str(&format!(
        "<div class=\"field\"><label for=\"status\">Status</label><select id=\"status\">{}</select></div>\n",
        options(statuses, MilestoneStatus::default().as_str())
    ));
    content.push_str(
        "<div class=\"field\"><label for=\"targetDate\">Target Date (Optional)</label>\
         <input type=\"date\" id=\"targetDate\"></div>\n",
    );
    content.push_str(
        "<div class=\"field\"><label><input type=\"checkbox\" id=\"isCurrent\"> Set as current milestone</label>\
         <p class=\"muted\" style=\"font-size:.75rem\">Only one milestone per project can be current at a time</p></div>\n",
    );
    content.push_str(
        "<button class=\"button\" type=\"submit\">Create Milestone</button> \
         <button class=\"button secondary\" type=\"button\" onclick=\"history.back()\">Cancel</button>\n",
    );
    content.push_str("</form>\n");
    content.push_str(
        r#"<script>
document.getElementById('milestone-form').addEventListener('submit', (event) => {
  event.preventDefault();
  const form = event.target;
  const projectId = Number(form.dataset.projectId);
  submitJson(form, '/api/milestones', {
    projectId,
    title: form.querySelector('#title').value,
    description: optionalText(form.querySelector('#description').value),
    status: form.querySelector('#status').value,
    isCurrent: form.querySelector('#isCurrent').checked,
    targetDate: optionalText(form.querySelector('#targetDate').value),
  }, () => { window.location.href = '/projects/' + projectId; });
});
</script>"#,
    );

    page("New Milestone", &content)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::ProjectStatus;

    #[test]
    fn form_targets_the_project() {
        let project = Project {
            id: 12,
            name: "Alpha".to_string(),
            description: None,
            major_goal: "Ship".to_string(),
            status: ProjectStatus::Active,
            created_at: Utc::now(),
        };
        let html = render_new_milestone(&project);
        assert!(html.contains("data-project-id=\"12\""));
        assert!(html.contains("'/api/milestones'"));
        assert!(html.contains("<option value=\"pending\" selected>Pending</option>"));
        assert!(html.contains("id=\"isCurrent\""));
    }
}
