use projboard_core::{NewProject, ProjectStatus, ProjectStore};

#[test]
fn project_serialization_uses_expected_wire_fields() {
    let store = ProjectStore::new();
    let id = store.add_project(NewProject::new("Launch", "ship the release", 3));
    let project = store.get(id).unwrap();

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Launch");
    assert_eq!(json["description"], "ship the release");
    assert_eq!(json["people"], 3);
    assert_eq!(json["status"], "active");

    let decoded: projboard_core::Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
}

#[test]
fn status_wire_names_match_display() {
    for status in ProjectStatus::ALL {
        let json = serde_json::to_value(status).unwrap();
        assert_eq!(json, status.to_string());
        assert_eq!(status.as_str().parse::<ProjectStatus>().unwrap(), status);
    }
}
