use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Build-time substitution variables, keyed by property name.
pub type PropertyTable = BTreeMap<String, String>;

/// In-memory representation of a Maven-style build descriptor.
///
/// Produced by the external POM parser and handed to the patch engine by
/// exclusive reference. Every section is optional: an unparsed `<project>`
/// with no `<dependencies>` element arrives with `dependencies: None`, not
/// with an empty vector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<Dependency>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_management: Option<DependencyManagement>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<PropertyTable>,
}

/// One declared library reference.
///
/// `group_id` and `artifact_id` identify the entry; `version` is the mutable
/// field of interest. All three are required by the patch engine but modeled
/// as `Option` because the descriptor format allows the elements to be
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Dependency {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: Some(group_id.into()),
            artifact_id: Some(artifact_id.into()),
            version: Some(version.into()),
        }
    }
}

/// Secondary dependency list used to centrally pin versions without
/// necessarily activating the dependency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyManagement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<Dependency>>,
}
