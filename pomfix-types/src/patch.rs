use crate::project::PropertyTable;
use serde::{Deserialize, Serialize};

/* Example target for a dependency patch:
<dependency>
  <groupId>io.projectreactor.netty</groupId>
  <artifactId>reactor-netty-http</artifactId>
  <version>1.0.39</version>
</dependency>
*/

/// Request to set a dependency's version, or add the dependency if no entry
/// matches its (group, artifact) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyPatch {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl DependencyPatch {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }
}

/// Request to set or add a property value, applied as a blind overwrite.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyPatch {
    pub property: String,
    pub value: String,
}

impl PropertyPatch {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// Collapse a list of property patches into the table shape the patch engine
/// consumes. Later entries win on duplicate names.
pub fn property_map(patches: &[PropertyPatch]) -> PropertyTable {
    let mut out = PropertyTable::new();
    for p in patches {
        out.insert(p.property.clone(), p.value.clone());
    }
    out
}
