use axum::response::Html;

use crate::ui::layout::page;

pub async fn home_page() -> Html<String> {
    Html(render_home())
}

pub fn render_home() -> String {
    let mut content = String::new();
    content.push_str("<h1>Project Management System</h1>\n");
    content.push_str("<div class=\"grid\">\n");
    content.push_str(
        "<a class=\"card\" href=\"/projects\"><h2>Projects</h2>\
         <p class=\"muted\">View and manage all your projects</p></a>\n",
    );
    content.push_str(
        "<a class=\"card\" href=\"/reminders\"><h2>Email Reminders</h2>\
         <p class=\"muted\">Schedule and manage email reminders</p></a>\n",
    );
    content.push_str("</div>\n");
    content.push_str("<div class=\"notice\"><h3>Quick Start</h3><ol>");
    content.push_str("<li>Create a new project with a major goal</li>");
    content.push_str("<li>Add milestones to your project</li>");
    content.push_str("<li>Set a current milestone and track weekly progress</li>");
    content.push_str("<li>Schedule email reminders for important follow-ups</li>");
    content.push_str("</ol></div>\n");
    page("Project Management", &content)
}
