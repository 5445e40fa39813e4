use axum::extract::State;
use axum::response::Html;
use chrono::Local;

use crate::AppState;
use crate::models::{ProjectSummary, ReminderStatus, ReminderWithProject};
use crate::ui::layout::{escape, page};
use crate::ui::projects::load_projects;

pub async fn reminders_page(State(state): State<AppState>) -> Html<String> {
    let reminders = match state.db.list_reminders().await {
        Ok(reminders) => Some(reminders),
        Err(err) => {
            tracing::warn!(error = %err, "could not load reminders");
            None
        }
    };
    let projects = load_projects(&state.db).await;

    Html(render_reminders(reminders.as_deref(), projects.as_deref()))
}

fn reminder_card(entry: &ReminderWithProject) -> String {
    let reminder = &entry.reminder;
    let when = reminder.reminder_date.with_timezone(&Local).format("%Y-%m-%d %H:%M");

    let mut content = String::new();
    content.push_str("<div class=\"card\">");
    content.push_str(&format!(
        "<div style=\"display:flex;justify-content:space-between\"><h3 style=\"margin-top:0\">{}</h3>\
         <button class=\"button danger\" type=\"button\" onclick=\"deleteReminder({})\">Delete</button></div>",
        escape(&reminder.subject),
        reminder.id
    ));
    content.push_str(&format!(
        "<p class=\"muted\">Project: <a href=\"/projects/{}\">{}</a></p>",
        entry.project.id,
        escape(&entry.project.name)
    ));
    content.push_str(&format!(
        "<p class=\"muted\">To: {} &middot; {when}</p>",
        escape(&reminder.recipient_email)
    ));
    content.push_str(&format!("<p>{}</p>", escape(&reminder.message)));
    content.push_str("</div>\n");
    content
}

fn reminder_form(projects: Option<&[ProjectSummary]>) -> String {
    let mut content = String::new();
    content.push_str(
        "<details class=\"card\">\
         <summary class=\"button\" style=\"display:inline-block\">+ New Reminder</summary>\n",
    );

    let Some(projects) = projects else {
        content.push_str(
            "<p class=\"muted\">Projects could not be loaded, so new reminders cannot be \
             scheduled right now. Try again shortly.</p>",
        );
        content.push_str("</details>\n");
        return content;
    };
    if projects.is_empty() {
        content.push_str(
            "<p class=\"muted\">Reminders belong to a project. <a href=\"/projects/new\">Create a project</a> first.</p>",
        );
        content.push_str("</details>\n");
        return content;
    }

    content.push_str("<form id=\"reminder-form\" data-fallback=\"Failed to create reminder\">\n");
    content.push_str(
        "<div class=\"field\"><label for=\"projectId\">Project *</label>\
         <select id=\"projectId\" required>",
    );
    content.push_str("<option value=\"\">Select a project</option>");
    for summary in projects {
        content.push_str(&format!(
            "<option value=\"{}\">{}</option>",
            summary.project.id,
            escape(&summary.project.name)
        ));
    }
    content.push_str("</select></div>\n");
    content.push_str(
        "<div class=\"field\"><label for=\"subject\">Subject *</label>\
         <input type=\"text\" id=\"subject\" required></div>\n",
    );
    content.push_str(
        "<div class=\"field\"><label for=\"message\">Message *</label>\
         <textarea id=\"message\" rows=\"4\" required></textarea></div>\n",
    );
    content.push_str(
        "<div class=\"field\"><label for=\"recipientEmail\">Recipient Email *</label>\
         <input type=\"email\" id=\"recipientEmail\" required></div>\n",
    );
    content.push_str(
        "<div class=\"field\"><label for=\"reminderDate\">Reminder Date *</label>\
         <input type=\"datetime-local\" id=\"reminderDate\" required></div>\n",
    );
    content.push_str(
        "<button class=\"button\" type=\"submit\">Schedule Reminder</button>\n</form>\n",
    );
    content.push_str("</details>\n");
    content
}

const REMINDER_SCRIPT: &str = r#"<script>
const reminderForm = document.getElementById('reminder-form');
if (reminderForm) {
  reminderForm.addEventListener('submit', (event) => {
    event.preventDefault();
    const form = event.target;
    const projectId = form.querySelector('#projectId').value;
    submitJson(form, '/api/reminders', {
      projectId: projectId === '' ? null : Number(projectId),
      subject: form.querySelector('#subject').value,
      message: form.querySelector('#message').value,
      recipientEmail: form.querySelector('#recipientEmail').value,
      reminderDate: form.querySelector('#reminderDate').value,
    }, () => window.location.reload());
  });
}
async function deleteReminder(id) {
  if (!confirm('Are you sure you want to delete this reminder?')) return;
  try {
    const response = await fetch('/api/reminders/' + id, { method: 'DELETE' });
    if (response.ok) {
      window.location.reload();
    } else {
      alert('Failed to delete reminder');
    }
  } catch (err) {
    console.error(err);
    alert('Error deleting reminder');
  }
}
</script>"#;

/// Reminders split by status. `None` for either list means it could not be
/// loaded.
pub fn render_reminders(
    reminders: Option<&[ReminderWithProject]>,
    projects: Option<&[ProjectSummary]>,
) -> String {
    let mut content = String::new();
    content.push_str("<h1>Email Reminders</h1>\n");
    content.push_str(&reminder_form(projects));

    match reminders {
        None => content.push_str(
            "<div class=\"card\"><p class=\"muted\">Reminders could not be loaded. Try again shortly.</p></div>",
        ),
        Some(reminders) => {
            let (scheduled, sent): (Vec<_>, Vec<_>) = reminders
                .iter()
                .partition(|r| r.reminder.status == ReminderStatus::Scheduled);

            content.push_str(&format!("<h2>Scheduled ({})</h2>\n", scheduled.len()));
            if scheduled.is_empty() {
                content.push_str("<p class=\"muted\">No scheduled reminders.</p>\n");
            }
            for entry in scheduled {
                content.push_str(&reminder_card(entry));
            }

            if !sent.is_empty() {
                content.push_str(&format!("<h2>Sent ({})</h2>\n", sent.len()));
                for entry in sent {
                    content.push_str(&reminder_card(entry));
                }
            }
        }
    }

    content.push_str(REMINDER_SCRIPT);
    page("Email Reminders", &content)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::{Project, ProjectRef, ProjectStatus, Reminder};

    fn entry(id: i64, subject: &str, status: ReminderStatus) -> ReminderWithProject {
        ReminderWithProject {
            reminder: Reminder {
                id,
                project_id: 1,
                subject: subject.to_string(),
                message: "Ping <team>".to_string(),
                recipient_email: "lead@example.com".to_string(),
                reminder_date: Utc::now(),
                status,
                created_at: Utc::now(),
            },
            project: ProjectRef { id: 1, name: "Alpha".to_string() },
        }
    }

    fn project() -> ProjectSummary {
        ProjectSummary {
            project: Project {
                id: 1,
                name: "Alpha".to_string(),
                description: None,
                major_goal: "Ship".to_string(),
                status: ProjectStatus::Active,
                created_at: Utc::now(),
            },
            current_milestone: None,
        }
    }

    #[test]
    fn reminders_partition_by_status() {
        let reminders = vec![
            entry(1, "Kickoff", ReminderStatus::Scheduled),
            entry(2, "Retro", ReminderStatus::Sent),
            entry(3, "Review", ReminderStatus::Scheduled),
        ];
        let projects = [project()];
        let html = render_reminders(Some(reminders.as_slice()), Some(projects.as_slice()));
        assert!(html.contains("Scheduled (2)"));
        assert!(html.contains("Sent (1)"));
        assert!(html.contains("deleteReminder(2)"));
        assert!(html.contains("Ping &lt;team&gt;"));
        assert!(html.contains("<option value=\"1\">Alpha</option>"));
    }

    #[test]
    fn no_projects_means_no_form() {
        let html = render_reminders(Some(&[][..]), Some(&[][..]));
        assert!(!html.contains("id=\"reminder-form\""));
        assert!(html.contains("Create a project"));
        assert!(html.contains("No scheduled reminders."));
    }

    #[test]
    fn failed_load_degrades_to_notice() {
        let projects = [project()];
        let html = render_reminders(None, Some(projects.as_slice()));
        assert!(html.contains("Reminders could not be loaded"));
        assert!(html.contains("id=\"reminder-form\""));
    }

    #[test]
    fn failed_project_load_is_not_an_empty_list() {
        let reminders = vec![entry(1, "Kickoff", ReminderStatus::Scheduled)];
        let html = render_reminders(Some(reminders.as_slice()), None);
        assert!(html.contains("Projects could not be loaded"));
        assert!(!html.contains("Create a project"));
        assert!(!html.contains("id=\"reminder-form\""));
        assert!(html.contains("Scheduled (1)"));
    }
}
