use pomfix_types::outcome::{DependencySection, PatchOutcome, PatchRecord};
use pomfix_types::patch::{DependencyPatch, PropertyPatch, property_map};
use pomfix_types::project::{Dependency, DependencyManagement, Project};
use pretty_assertions::assert_eq;

#[test]
fn project_omits_absent_sections() {
    let project = Project::default();
    let value = serde_json::to_value(&project).expect("serialize project");
    assert_eq!(value, serde_json::json!({}));
}

#[test]
fn project_serializes_maven_field_names() {
    let project = Project {
        name: Some("demo".to_string()),
        dependencies: Some(vec![Dependency::new("org.slf4j", "slf4j-api", "1.7.30")]),
        dependency_management: Some(DependencyManagement {
            dependencies: Some(vec![Dependency::new("io.netty", "netty-all", "4.1.100")]),
        }),
        properties: None,
    };

    let value = serde_json::to_value(&project).expect("serialize project");
    assert_eq!(
        value,
        serde_json::json!({
            "name": "demo",
            "dependencies": [
                { "groupId": "org.slf4j", "artifactId": "slf4j-api", "version": "1.7.30" }
            ],
            "dependencyManagement": {
                "dependencies": [
                    { "groupId": "io.netty", "artifactId": "netty-all", "version": "4.1.100" }
                ]
            }
        })
    );
}

#[test]
fn project_roundtrips_through_json() {
    let raw = serde_json::json!({
        "dependencies": [
            { "groupId": "g", "artifactId": "a", "version": "1.0" },
            { "groupId": "g2", "artifactId": "a2" }
        ],
        "properties": { "slf4j.version": "1.7.30" }
    });

    let project: Project = serde_json::from_value(raw).expect("deserialize project");
    let deps = project.dependencies.as_deref().expect("dependencies");
    assert_eq!(deps.len(), 2);
    assert_eq!(deps[0], Dependency::new("g", "a", "1.0"));
    // Absent version element stays absent, not empty.
    assert_eq!(deps[1].version, None);
    assert_eq!(
        project.properties.as_ref().and_then(|p| p.get("slf4j.version")),
        Some(&"1.7.30".to_string())
    );
    assert_eq!(project.dependency_management, None);
}

#[test]
fn dependency_patch_uses_camel_case_wire_names() {
    let patch = DependencyPatch::new("io.projectreactor.netty", "reactor-netty-http", "1.0.39");
    let value = serde_json::to_value(&patch).expect("serialize patch");
    assert_eq!(
        value,
        serde_json::json!({
            "groupId": "io.projectreactor.netty",
            "artifactId": "reactor-netty-http",
            "version": "1.0.39"
        })
    );
}

#[test]
fn patch_record_serializes_tagged_snake_case() {
    let record = PatchRecord::VersionUpdated {
        section: DependencySection::DependencyManagement,
        group_id: "g".to_string(),
        artifact_id: "a".to_string(),
        previous_version: "1.0".to_string(),
        new_version: "2.0".to_string(),
    };
    let value = serde_json::to_value(&record).expect("serialize record");
    assert_eq!(
        value,
        serde_json::json!({
            "type": "version_updated",
            "section": "dependency_management",
            "group_id": "g",
            "artifact_id": "a",
            "previous_version": "1.0",
            "new_version": "2.0"
        })
    );
}

#[test]
fn property_set_record_omits_absent_previous_value() {
    let record = PatchRecord::PropertySet {
        property: "new.prop".to_string(),
        previous_value: None,
        value: "x".to_string(),
    };
    let value = serde_json::to_value(&record).expect("serialize record");
    assert!(value.get("previous_value").is_none());
}

#[test]
fn property_map_is_last_write_wins() {
    let patches = vec![
        PropertyPatch::new("slf4j.version", "1.7.30"),
        PropertyPatch::new("logback.version", "1.2.13"),
        PropertyPatch::new("slf4j.version", "1.7.36"),
    ];

    let map = property_map(&patches);
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("slf4j.version"), Some(&"1.7.36".to_string()));
    assert_eq!(map.get("logback.version"), Some(&"1.2.13".to_string()));
}

#[test]
fn outcome_record_keeps_summary_in_sync() {
    let mut outcome = PatchOutcome::default();
    assert!(outcome.is_empty());

    outcome.record(PatchRecord::VersionUpdated {
        section: DependencySection::Dependencies,
        group_id: "g".to_string(),
        artifact_id: "a".to_string(),
        previous_version: "1.0".to_string(),
        new_version: "2.0".to_string(),
    });
    outcome.record(PatchRecord::DependencyAdded {
        group_id: "x".to_string(),
        artifact_id: "y".to_string(),
        version: "3.0".to_string(),
    });
    outcome.record(PatchRecord::PropertySet {
        property: "p".to_string(),
        previous_value: None,
        value: "v".to_string(),
    });

    assert_eq!(outcome.records.len(), 3);
    assert_eq!(outcome.summary.versions_updated, 1);
    assert_eq!(outcome.summary.dependencies_added, 1);
    assert_eq!(outcome.summary.properties_set, 1);
    assert!(!outcome.is_empty());
}
