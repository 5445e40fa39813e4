//! Page shell shared by every screen: document head, navigation bar and the
//! small script the forms use to post JSON.

use crate::models::{MilestoneStatus, ProjectStatus};

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #f9fafb; color: #111827; }
nav { background: #fff; border-bottom: 1px solid #e5e7eb; }
nav .bar { max-width: 72rem; margin: 0 auto; padding: 0 1rem; height: 4rem; display: flex; align-items: center; justify-content: space-between; }
nav a { color: #374151; text-decoration: none; margin-left: 1.5rem; }
nav a.brand { font-size: 1.25rem; font-weight: 700; color: #111827; margin-left: 0; }
main { max-width: 72rem; margin: 0 auto; padding: 2rem 1rem; }
.card { background: #fff; border-radius: .5rem; box-shadow: 0 1px 3px rgba(0,0,0,.1); padding: 1.5rem; margin-bottom: 1.5rem; display: block; color: inherit; text-decoration: none; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); gap: 1.5rem; }
.badge { display: inline-block; padding: .125rem .5rem; font-size: .75rem; border-radius: 9999px; }
.badge.green { background: #dcfce7; color: #166534; }
.badge.yellow { background: #fef9c3; color: #854d0e; }
.badge.gray { background: #f3f4f6; color: #1f2937; }
.badge.blue { background: #2563eb; color: #fff; }
.current { border: 1px solid #3b82f6; background: #eff6ff; }
.notice { background: #eff6ff; border: 1px solid #bfdbfe; border-radius: .5rem; padding: 1rem; margin-bottom: 1.5rem; }
.button { background: #2563eb; color: #fff; border: 0; padding: .5rem 1rem; border-radius: .5rem; text-decoration: none; cursor: pointer; }
.button.secondary { background: #e5e7eb; color: #374151; }
.button.danger { background: #dc2626; }
.muted { color: #6b7280; }
.achieved { color: #16a34a; }
.missed { color: #ea580c; }
label { display: block; font-weight: 500; margin-bottom: .5rem; }
input[type=text], input[type=email], input[type=date], input[type=datetime-local], textarea, select { width: 100%; padding: .5rem; border: 1px solid #d1d5db; border-radius: .5rem; box-sizing: border-box; }
.field { margin-bottom: 1.25rem; }
"#;

/// Posts a JSON payload and hands the decoded reply to `next`. Failures alert
/// with the server's `error` text, or the form's `data-fallback` message.
pub const FORM_SCRIPT: &str = r#"
async function submitJson(form, url, payload, next) {
  const button = form.querySelector('button[type=submit]');
  if (button) button.disabled = true;
  try {
    const response = await fetch(url, {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(payload),
    });
    if (response.ok) {
      next(await response.json());
      return;
    }
    let message = null;
    try { message = (await response.json()).error; } catch (_) {}
    alert(message || form.dataset.fallback);
  } catch (err) {
    console.error(err);
    alert(form.dataset.fallback);
  } finally {
    if (button) button.disabled = false;
  }
}
function optionalText(value) {
  const trimmed = value.trim();
  return trimmed === '' ? null : trimmed;
}
"#;

/// Static link bar shown at the top of every page.
pub fn navigation() -> String {
    let mut content = String::new();
    content.push_str("<nav><div class=\"bar\">");
    content.push_str("<a class=\"brand\" href=\"/\">Project Management</a>");
    content.push_str(
        "<div><a href=\"/projects\">Projects</a><a href=\"/reminders\">Reminders</a></div>",
    );
    content.push_str("</div></nav>");
    content
}

/// Wraps `body` in the document shell.
pub fn page(title: &str, body: &str) -> String {
    let mut content = String::new();
    content.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    content.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    content.push_str(&format!("<title>{}</title>\n", escape(title)));
    content.push_str("<style>");
    content.push_str(STYLE);
    content.push_str("</style>\n<script>");
    content.push_str(FORM_SCRIPT);
    content.push_str("</script>\n</head>\n<body>\n");
    content.push_str(&navigation());
    content.push_str("\n<main>\n");
    content.push_str(body);
    content.push_str("\n</main>\n</body>\n</html>\n");
    content
}

pub fn project_status_badge(status: ProjectStatus) -> String {
    let color = match status {
        ProjectStatus::Active => "green",
        ProjectStatus::Completed => "gray",
        ProjectStatus::OnHold => "yellow",
    };
    format!("<span class=\"badge {color}\">{}</span>", status.as_str())
}

pub fn milestone_status_badge(status: MilestoneStatus) -> String {
    let color = match status {
        MilestoneStatus::Completed => "green",
        MilestoneStatus::InProgress => "yellow",
        MilestoneStatus::Pending => "gray",
    };
    format!("<span class=\"badge {color}\">{}</span>", status.as_str())
}

/// `<option>` list with `selected` on the matching value.
pub fn options<'a>(
    choices: impl IntoIterator<Item = (&'a str, &'a str)>,
    selected: &str,
) -> String {
    let mut content = String::new();
    for (value, label) in choices {
        let marker = if value == selected { " selected" } else { "" };
        content.push_str(&format!(
            "<option value=\"{}\"{marker}>{}</option>",
            escape(value),
            escape(label)
        ));
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralises_markup() {
        assert_eq!(
            escape("<b>\"Tom\" & 'Jerry'</b>"),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn page_includes_navigation_and_title() {
        let html = page("Projects <1>", "<p>hi</p>");
        assert!(html.contains("<title>Projects &lt;1&gt;</title>"));
        assert!(html.contains("href=\"/projects\""));
        assert!(html.contains("href=\"/reminders\""));
        assert!(html.contains("<p>hi</p>"));
    }

    #[test]
    fn options_mark_selection() {
        let html = options([("active", "Active"), ("on-hold", "On Hold")], "on-hold");
        assert!(html.contains("<option value=\"on-hold\" selected>On Hold</option>"));
        assert!(html.contains("<option value=\"active\">Active</option>"));
    }
}
