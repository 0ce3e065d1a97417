//! Observable project store.
//!
//! # Responsibility
//! - Own the one authoritative, ordered project sequence.
//! - Fan out an independent snapshot to every listener after each mutation.
//!
//! # Invariants
//! - Insertion order is append order and is never rearranged.
//! - Listeners run synchronously in subscription order.
//! - Each listener receives its own cloned `Vec<Project>`; nothing handed out
//!   aliases the backing sequence.
//! - Moves of unknown ids and moves to the current status notify nobody.
//! - A listener never runs nested inside itself: mutations issued from a
//!   listener are applied immediately, and their snapshots are queued until
//!   the current fan-out round ends.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::model::validation::NewProject;
use log::{debug, info};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, VecDeque};
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

/// Owned copy of the full project sequence at notification time.
pub type Snapshot = Vec<Project>;

type Listener = Rc<RefCell<dyn FnMut(Snapshot)>>;

/// Handle returned by `ProjectStore::subscribe`.
///
/// Handles increase monotonically and are never reused within one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Single source of truth for board projects.
///
/// Single-threaded by construction (`Rc`/`RefCell`). Share one instance via
/// `Rc<ProjectStore>` with every component that reads or mutates it.
#[derive(Default)]
pub struct ProjectStore {
    projects: RefCell<Vec<Project>>,
    listeners: RefCell<BTreeMap<SubscriptionId, Listener>>,
    next_subscription: Cell<u64>,
    pending: RefCell<VecDeque<Snapshot>>,
    dispatching: Cell<bool>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` for every future mutation.
    ///
    /// No de-duplication: subscribing the same logic twice yields two
    /// subscriptions and two invocations per mutation.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: FnMut(Snapshot) + 'static,
    {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        let listener: Listener = Rc::new(RefCell::new(listener));
        self.listeners.borrow_mut().insert(id, listener);
        debug!(
            "event=listener_subscribe module=store status=ok subscription={}",
            id.0
        );
        id
    }

    /// Removes one subscription.
    ///
    /// Returns `false` when the handle is unknown or already removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self.listeners.borrow_mut().remove(&id).is_some();
        debug!(
            "event=listener_unsubscribe module=store status={} subscription={}",
            if removed { "ok" } else { "skipped" },
            id.0
        );
        removed
    }

    /// Appends a new active project and notifies every listener.
    ///
    /// # Contract
    /// - Input is trusted; see `ProjectDraft::validate()`.
    /// - Returns the freshly generated id.
    pub fn add_project(&self, input: NewProject) -> ProjectId {
        let project = Project::new(input.title, input.description, input.people);
        let id = project.id;
        self.projects.borrow_mut().push(project);
        info!("event=project_added module=store status=ok id={id}");
        self.notify();
        id
    }

    /// Moves the first project matching `id` to `new_status`.
    ///
    /// Unknown ids and moves to the current status are silent no-ops and
    /// notify nobody. A real change notifies exactly once.
    pub fn move_project(&self, id: ProjectId, new_status: ProjectStatus) {
        {
            let mut projects = self.projects.borrow_mut();
            match projects.iter_mut().find(|project| project.id == id) {
                None => {
                    debug!(
                        "event=project_move module=store status=skipped reason=not_found id={id}"
                    );
                    return;
                }
                Some(project) if project.status == new_status => {
                    debug!(
                        "event=project_move module=store status=skipped reason=unchanged id={id} target={new_status}"
                    );
                    return;
                }
                Some(project) => {
                    project.status = new_status;
                }
            }
        }
        info!("event=project_move module=store status=ok id={id} target={new_status}");
        self.notify();
    }

    /// Returns an independent copy of the current project sequence.
    pub fn projects(&self) -> Snapshot {
        self.projects.borrow().clone()
    }

    /// Returns a copy of one project by id.
    pub fn get(&self, id: ProjectId) -> Option<Project> {
        self.projects
            .borrow()
            .iter()
            .find(|project| project.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.projects.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.borrow().is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn notify(&self) {
        let snapshot = self.projects.borrow().clone();
        self.pending.borrow_mut().push_back(snapshot);
        if self.dispatching.get() {
            // Re-entrant mutation; the outer round drains the queue.
            return;
        }

        let _guard = DispatchGuard::enter(&self.dispatching, &self.pending);
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(snapshot) = next else {
                break;
            };
            let round: Vec<(SubscriptionId, Listener)> = self
                .listeners
                .borrow()
                .iter()
                .map(|(id, listener)| (*id, Rc::clone(listener)))
                .collect();
            debug!(
                "event=notify module=store status=ok listeners={} projects={}",
                round.len(),
                snapshot.len()
            );
            for (id, listener) in round {
                // Unsubscribed by an earlier listener in this round.
                if !self.listeners.borrow().contains_key(&id) {
                    continue;
                }
                let mut callback = listener.borrow_mut();
                (*callback)(snapshot.clone());
            }
        }
    }
}

impl Debug for ProjectStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectStore")
            .field("projects", &self.projects.borrow())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Ends a dispatch round, also when a listener panics.
///
/// Snapshots still queued after an unwind are stale and are discarded.
struct DispatchGuard<'a> {
    flag: &'a Cell<bool>,
    pending: &'a RefCell<VecDeque<Snapshot>>,
}

impl<'a> DispatchGuard<'a> {
    fn enter(flag: &'a Cell<bool>, pending: &'a RefCell<VecDeque<Snapshot>>) -> Self {
        flag.set(true);
        Self { flag, pending }
    }
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.pending.borrow_mut().clear();
        self.flag.set(false);
    }
}
