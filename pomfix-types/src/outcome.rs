use serde::{Deserialize, Serialize};

/// Which dependency sequence of the project a change landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencySection {
    Dependencies,
    DependencyManagement,
}

impl std::fmt::Display for DependencySection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DependencySection::Dependencies => f.write_str("dependencies"),
            DependencySection::DependencyManagement => f.write_str("dependencyManagement"),
        }
    }
}

/// One applied change, reported back to the caller instead of being printed
/// mid-mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PatchRecord {
    VersionUpdated {
        section: DependencySection,
        group_id: String,
        artifact_id: String,
        previous_version: String,
        new_version: String,
    },
    DependencyAdded {
        group_id: String,
        artifact_id: String,
        version: String,
    },
    PropertySet {
        property: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        previous_value: Option<String>,
        value: String,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchSummary {
    pub versions_updated: u64,
    pub dependencies_added: u64,
    pub properties_set: u64,
}

/// Result of one patch call: the applied changes in application order, plus
/// counters derived from them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchOutcome {
    #[serde(default)]
    pub records: Vec<PatchRecord>,

    #[serde(default)]
    pub summary: PatchSummary,
}

impl PatchOutcome {
    /// Append a record, keeping the summary in sync.
    pub fn record(&mut self, record: PatchRecord) {
        match &record {
            PatchRecord::VersionUpdated { .. } => self.summary.versions_updated += 1,
            PatchRecord::DependencyAdded { .. } => self.summary.dependencies_added += 1,
            PatchRecord::PropertySet { .. } => self.summary.properties_set += 1,
        }
        self.records.push(record);
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
