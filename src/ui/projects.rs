use axum::extract::State;
use axum::response::Html;

use crate::AppState;
use crate::db::Database;
use crate::models::{ProjectStatus, ProjectSummary};
use crate::ui::layout::{escape, options, page, project_status_badge};

// DB operations for projects
pub async fn load_projects(db: &Database) -> Option<Vec<ProjectSummary>> {
    match db.list_projects().await {
        Ok(projects) => Some(projects),
        Err(err) => {
            tracing::warn!(error = %err, "could not load projects");
            None
        }
    }
}

pub async fn projects_page(State(state): State<AppState>) -> Html<String> {
    let projects = load_projects(&state.db).await;
    Html(render_projects(projects.as_deref()))
}

/// Project cards. `None` means the list could not be loaded; the page still
/// renders with an empty state.
pub fn render_projects(projects: Option<&[ProjectSummary]>) -> String {
    let mut content = String::new();
    content.push_str(
        "<div style=\"display:flex;justify-content:space-between;align-items:center\">\
         <h1>Projects</h1><a class=\"button\" href=\"/projects/new\">+ New Project</a></div>\n",
    );

    let Some(projects) = projects else {
        content.push_str(
            "<div class=\"card\"><p class=\"muted\">Projects could not be loaded. Try again shortly.</p></div>",
        );
        return page("Projects", &content);
    };

    if projects.is_empty() {
        content.push_str(
            "<div class=\"card\" style=\"text-align:center\"><p class=\"muted\">No projects yet.</p>",
        );
        content.push_str("<a href=\"/projects/new\">Create your first project &rarr;</a></div>");
        return page("Projects", &content);
    }

    content.push_str("<div class=\"grid\">\n");
    for summary in projects {
        let project = &summary.project;
        content.push_str(&format!("<a class=\"card\" href=\"/projects/{}\">", project.id));
        content.push_str(&format!(
            "<div style=\"display:flex;justify-content:space-between\"><h2>{}</h2>{}</div>",
            escape(&project.name),
            project_status_badge(project.status)
        ));
        let description = project.description.as_deref().unwrap_or("No description");
        content.push_str(&format!("<p class=\"muted\">{}</p>", escape(description)));
        content.push_str(&format!(
            "<p class=\"muted\" style=\"font-size:.75rem;margin-bottom:0\">Major Goal:</p><p><strong>{}</strong></p>",
            escape(&project.major_goal)
        ));
        if let Some(current) = &summary.current_milestone {
            content.push_str(&format!(
                "<p style=\"color:#2563eb\">Current: {}</p>",
                escape(&current.title)
            ));
        }
        content.push_str("</a>\n");
    }
    content.push_str("</div>\n");

    page("Projects", &content)
}

pub async fn new_project_page() -> Html<String> {
    Html(render_new_project())
}

pub fn render_new_project() -> String {
    let statuses = ProjectStatus::ALL.map(|s| (s.as_str(), s.label()));

    let mut content = String::new();
    content.push_str("<h1>Create New Project</h1>\n");
    content.push_str(
        "<form id=\"project-form\" class=\"card\" data-fallback=\"Failed to create project\">\n",
    );
    content.push_str(
        "<div class=\"field\"><label for=\"name\">Project Name *</label>\
         <input type=\"text\" id=\"name\" required placeholder=\"Enter project name\"></div>\n",
    );
    content.push_str(
        "<div class=\"field\"><label for=\"description\">Description</label>\
         <textarea id=\"description\" rows=\"4\" placeholder=\"Enter project description\"></textarea></div>\n",
    );
    content.push_str(
        "<div class=\"field\"><label for=\"majorGoal\">Major Goal *</label>\
         <textarea id=\"majorGoal\" rows=\"3\" required placeholder=\"What is the main objective of this project?\"></textarea></div>\n",
    );
    content.push_str(&format!(
        "<div class=\"field\"><label for=\"status\">Status</label><select id=\"status\">{}</select></div>\n",
        options(statuses, ProjectStatus::default().as_str())
    ));
    content.push_str(
        "<button class=\"button\" type=\"submit\">Create Project</button> \
         <button class=\"button secondary\" type=\"button\" onclick=\"history.back()\">Cancel</button>\n",
    );
    content.push_str("</form>\n");
    content.push_str(
        r#"<script>
document.getElementById('project-form').addEventListener('submit', (event) => {
  event.preventDefault();
  const form = event.target;
  submitJson(form, '/api/projects', {
    name: form.querySelector('#name').value,
    description: optionalText(form.querySelector('#description').value),
    majorGoal: form.querySelector('#majorGoal').value,
    status: form.querySelector('#status').value,
  }, (project) => { window.location.href = '/projects/' + project.id; });
});
</script>"#,
    );

    page("New Project", &content)
}
