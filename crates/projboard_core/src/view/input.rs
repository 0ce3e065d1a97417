//! Project form submit handling.

use crate::model::project::ProjectId;
use crate::model::validation::{ProjectDraft, ValidationError};
use crate::state::store::ProjectStore;
use log::warn;
use std::rc::Rc;

/// Form front for creating projects.
///
/// Invalid drafts are rejected here and never reach the store.
#[derive(Debug)]
pub struct ProjectInput {
    store: Rc<ProjectStore>,
}

impl ProjectInput {
    pub fn new(store: &Rc<ProjectStore>) -> Self {
        Self {
            store: Rc::clone(store),
        }
    }

    /// Validates `draft` and adds it to the store.
    ///
    /// # Errors
    /// - Returns the first field violation; the store is untouched.
    pub fn submit(&self, draft: &ProjectDraft) -> Result<ProjectId, ValidationError> {
        let project = draft.validate().map_err(|err| {
            // Field name only; user text stays out of logs.
            warn!(
                "event=project_submit module=input status=rejected field={}",
                err.field()
            );
            err
        })?;
        Ok(self.store.add_project(project))
    }
}
