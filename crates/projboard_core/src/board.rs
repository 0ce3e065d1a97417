//! Board application context.
//!
//! # Responsibility
//! - Own the store and wire the input form plus one list per status.
//! - Offer the page-level entry points used by front-ends.
//!
//! # Invariants
//! - Exactly one store per board; lists and input share it by `Rc`.
//! - Lists are mounted in `ProjectStatus::ALL` order.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::model::validation::{ProjectDraft, ValidationError};
use crate::state::store::ProjectStore;
use crate::view::input::ProjectInput;
use crate::view::list::ProjectList;
use crate::view::render::TextRenderer;
use std::rc::Rc;

/// Input form plus active and finished lists over one store.
pub struct Board {
    store: Rc<ProjectStore>,
    input: ProjectInput,
    active: ProjectList<TextRenderer>,
    finished: ProjectList<TextRenderer>,
}

impl Board {
    pub fn new() -> Self {
        let store = Rc::new(ProjectStore::new());
        let input = ProjectInput::new(&store);
        let active = ProjectList::new(&store, ProjectStatus::Active, TextRenderer::new());
        let finished = ProjectList::new(&store, ProjectStatus::Finished, TextRenderer::new());
        Self {
            store,
            input,
            active,
            finished,
        }
    }

    pub fn store(&self) -> &Rc<ProjectStore> {
        &self.store
    }

    /// Submits the project form.
    pub fn submit(&self, draft: &ProjectDraft) -> Result<ProjectId, ValidationError> {
        self.input.submit(draft)
    }

    /// Moves a project into the list for `status`.
    pub fn move_to(&self, id: ProjectId, status: ProjectStatus) {
        self.list_view(status).receive_move(id);
    }

    /// Drops a textual project id onto the list for `status`.
    pub fn drop_on(&self, status: ProjectStatus, payload: &str) {
        self.list_view(status).receive_drop(payload);
    }

    /// Projects currently shown in the list for `status`.
    pub fn list(&self, status: ProjectStatus) -> Vec<Project> {
        self.list_view(status).projects()
    }

    /// Latest text of every list, in display order.
    pub fn render(&self) -> String {
        ProjectStatus::ALL
            .iter()
            .map(|status| self.list_view(*status).renderer().output().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn list_view(&self, status: ProjectStatus) -> &ProjectList<TextRenderer> {
        match status {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
