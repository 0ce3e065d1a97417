//! Status-filtered project list bound to the store.
//!
//! # Responsibility
//! - Subscribe once to the store and keep a filtered copy of its snapshots.
//! - Redraw through a `ProjectRenderer` on every notification.
//! - Forward move and drop requests to the store.
//!
//! # Invariants
//! - The cached list is replaced wholesale on each notification.
//! - The list holds exactly one subscription, released on drop.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::state::store::{ProjectStore, Snapshot, SubscriptionId};
use crate::view::render::ProjectRenderer;
use log::debug;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

struct ListState<R> {
    heading: String,
    assigned: Vec<Project>,
    renderer: R,
    render_count: usize,
}

impl<R: ProjectRenderer> ListState<R> {
    fn redraw(&mut self) {
        self.renderer.render(&self.heading, &self.assigned);
        self.render_count += 1;
    }
}

/// Derived view showing the projects of one status.
pub struct ProjectList<R: ProjectRenderer + 'static> {
    store: Rc<ProjectStore>,
    category: ProjectStatus,
    subscription: SubscriptionId,
    state: Rc<RefCell<ListState<R>>>,
}

impl<R: ProjectRenderer + 'static> ProjectList<R> {
    /// Creates a list for `category`, subscribes it and renders it once.
    ///
    /// The initial render reflects projects already in the store.
    pub fn new(store: &Rc<ProjectStore>, category: ProjectStatus, renderer: R) -> Self {
        let assigned = filter_by_status(store.projects(), category);
        let state = Rc::new(RefCell::new(ListState {
            heading: heading_for(category),
            assigned,
            renderer,
            render_count: 0,
        }));
        state.borrow_mut().redraw();

        let listener_state = Rc::clone(&state);
        let subscription = store.subscribe(move |snapshot: Snapshot| {
            let assigned = filter_by_status(snapshot, category);
            let mut state = listener_state.borrow_mut();
            state.assigned = assigned;
            state.redraw();
        });
        debug!(
            "event=list_mount module=view status=ok category={category} subscription={}",
            subscription.value()
        );

        Self {
            store: Rc::clone(store),
            category,
            subscription,
            state,
        }
    }

    pub fn category(&self) -> ProjectStatus {
        self.category
    }

    /// Section heading, e.g. `ACTIVE PROJECTS`.
    pub fn heading(&self) -> String {
        self.state.borrow().heading.clone()
    }

    /// Element id of the list, e.g. `active-projects-list`.
    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.category.as_str())
    }

    /// Copy of the currently assigned projects, in store order.
    pub fn projects(&self) -> Vec<Project> {
        self.state.borrow().assigned.clone()
    }

    /// Number of redraws so far, including the initial one.
    pub fn render_count(&self) -> usize {
        self.state.borrow().render_count
    }

    pub fn subscription(&self) -> SubscriptionId {
        self.subscription
    }

    /// Borrows the renderer, e.g. to read its output.
    pub fn renderer(&self) -> Ref<'_, R> {
        Ref::map(self.state.borrow(), |state| &state.renderer)
    }

    /// Asks the store to move `id` into this list's category.
    pub fn receive_move(&self, id: ProjectId) {
        self.store.move_project(id, self.category);
    }

    /// Handles a drop carrying a textual project id.
    ///
    /// A payload that is not a valid id is ignored like an unknown id.
    pub fn receive_drop(&self, payload: &str) {
        match payload.trim().parse::<ProjectId>() {
            Ok(id) => self.receive_move(id),
            Err(_) => debug!(
                "event=list_drop module=view status=skipped reason=invalid_payload category={}",
                self.category
            ),
        }
    }
}

impl<R: ProjectRenderer + 'static> Drop for ProjectList<R> {
    fn drop(&mut self) {
        self.store.unsubscribe(self.subscription);
    }
}

fn heading_for(category: ProjectStatus) -> String {
    format!("{} PROJECTS", category.as_str().to_ascii_uppercase())
}

fn filter_by_status(snapshot: Snapshot, category: ProjectStatus) -> Vec<Project> {
    snapshot
        .into_iter()
        .filter(|project| project.status == category)
        .collect()
}
