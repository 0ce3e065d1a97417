//! Render boundary between list views and presentation.

use crate::model::project::Project;

/// Presentation sink for one project list.
///
/// Called with the full filtered list on every notification; implementations
/// must tolerate a complete redraw each time.
pub trait ProjectRenderer {
    fn render(&mut self, heading: &str, projects: &[Project]);
}

/// Renders a list into a plain-text buffer, replacing it on every call.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    output: String,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the text produced by the most recent render.
    pub fn output(&self) -> &str {
        &self.output
    }
}

impl ProjectRenderer for TextRenderer {
    fn render(&mut self, heading: &str, projects: &[Project]) {
        self.output.clear();
        self.output.push_str(heading);
        self.output.push('\n');
        if projects.is_empty() {
            self.output.push_str("  (none)\n");
            return;
        }
        for project in projects {
            self.output.push_str(&render_project_item(project));
        }
    }
}

/// Renders one list entry: title and id, assignment line, description.
pub fn render_project_item(project: &Project) -> String {
    format!(
        "* {} [{}]\n  {} assigned\n  {}\n",
        project.title,
        project.id,
        project.people_label(),
        project.description
    )
}
