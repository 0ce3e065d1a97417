use projboard_core::{NewProject, ProjectStatus, ProjectStore, Snapshot};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use uuid::Uuid;

fn recorder(store: &ProjectStore) -> Rc<RefCell<Vec<Snapshot>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |snapshot| sink.borrow_mut().push(snapshot));
    seen
}

fn new_project(title: &str) -> NewProject {
    NewProject::new(title, format!("{title} description"), 2)
}

#[test]
fn every_add_appends_one_active_project_with_unique_id() {
    let store = ProjectStore::new();
    for index in 0..25 {
        store.add_project(new_project(&format!("p{index}")));
    }

    let projects = store.projects();
    assert_eq!(projects.len(), 25);
    assert!(projects.iter().all(|p| p.status == ProjectStatus::Active));
    let ids: HashSet<_> = projects.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), 25);
    let titles: Vec<_> = projects.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles[0], "p0");
    assert_eq!(titles[24], "p24");
}

#[test]
fn add_notifies_each_listener_once_with_full_snapshot() {
    let store = ProjectStore::new();
    let seen = recorder(&store);

    let a = store.add_project(NewProject::new("A", "desc1", 3));
    let b = store.add_project(NewProject::new("B", "desc2", 2));

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].iter().map(|p| p.id).collect::<Vec<_>>(), vec![a]);
    assert_eq!(seen[1].iter().map(|p| p.id).collect::<Vec<_>>(), vec![a, b]);
}

#[test]
fn move_of_unknown_id_changes_nothing_and_notifies_nobody() {
    let store = ProjectStore::new();
    store.add_project(NewProject::new("A", "desc1", 3));
    let before = store.projects();
    let seen = recorder(&store);

    store.move_project(Uuid::new_v4(), ProjectStatus::Finished);

    assert!(seen.borrow().is_empty());
    assert_eq!(store.projects(), before);
}

#[test]
fn move_to_current_status_notifies_nobody() {
    let store = ProjectStore::new();
    let id = store.add_project(NewProject::new("A", "desc1", 3));
    let seen = recorder(&store);

    store.move_project(id, ProjectStatus::Active);
    assert!(seen.borrow().is_empty());

    store.move_project(id, ProjectStatus::Finished);
    store.move_project(id, ProjectStatus::Finished);
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn real_move_notifies_once_with_only_that_status_changed() {
    let store = ProjectStore::new();
    let a = store.add_project(NewProject::new("A", "desc1", 3));
    let b = store.add_project(NewProject::new("B", "desc2", 2));
    let before = store.projects();
    let seen = recorder(&store);

    store.move_project(a, ProjectStatus::Finished);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    let snapshot = &seen[0];
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].id, a);
    assert_eq!(snapshot[0].status, ProjectStatus::Finished);
    assert_eq!(snapshot[0].title, before[0].title);
    assert_eq!(snapshot[0].people, before[0].people);
    assert_eq!(snapshot[1].id, b);
    assert_eq!(snapshot[1], before[1]);
}

#[test]
fn mutating_a_snapshot_never_reaches_the_store() {
    let store = ProjectStore::new();
    let id = store.add_project(NewProject::new("A", "desc1", 3));
    store.subscribe(|mut snapshot: Snapshot| {
        snapshot[0].title = "hijacked".to_string();
        snapshot[0].status = ProjectStatus::Finished;
        snapshot.clear();
    });
    let seen = recorder(&store);

    let mut copy = store.projects();
    copy.clear();

    store.add_project(NewProject::new("B", "desc2", 2));

    let seen = seen.borrow();
    assert_eq!(seen[0].len(), 2);
    assert_eq!(seen[0][0].title, "A");
    assert_eq!(seen[0][0].status, ProjectStatus::Active);
    assert_eq!(store.get(id).unwrap().title, "A");
}

#[test]
fn listeners_fire_in_registration_order_with_identical_snapshots() {
    let store = ProjectStore::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    for name in ["first", "second", "third"] {
        let log = Rc::clone(&log);
        store.subscribe(move |snapshot: Snapshot| log.borrow_mut().push((name, snapshot)));
    }

    let id = store.add_project(NewProject::new("A", "desc1", 3));
    store.move_project(id, ProjectStatus::Finished);

    let log = log.borrow();
    let names: Vec<_> = log.iter().map(|(name, _)| *name).collect();
    assert_eq!(
        names,
        vec!["first", "second", "third", "first", "second", "third"]
    );
    assert_eq!(log[0].1, log[1].1);
    assert_eq!(log[1].1, log[2].1);
    assert_eq!(log[3].1, log[5].1);
}

#[test]
fn duplicate_subscription_is_invoked_twice() {
    let store = ProjectStore::new();
    let count = Rc::new(RefCell::new(0));
    let make = || {
        let count = Rc::clone(&count);
        move |_: Snapshot| *count.borrow_mut() += 1
    };
    store.subscribe(make());
    store.subscribe(make());

    store.add_project(NewProject::new("A", "desc1", 3));
    assert_eq!(*count.borrow(), 2);
}

#[test]
fn unsubscribed_listener_stops_receiving() {
    let store = ProjectStore::new();
    let seen = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&seen);
    let id = store.subscribe(move |_| *sink.borrow_mut() += 1);

    store.add_project(NewProject::new("A", "desc1", 3));
    assert!(store.unsubscribe(id));
    store.add_project(NewProject::new("B", "desc2", 2));

    assert_eq!(*seen.borrow(), 1);
    assert_eq!(store.listener_count(), 0);
    assert_eq!(store.len(), 2);
}
