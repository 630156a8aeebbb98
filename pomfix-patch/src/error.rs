//! Error types for pomfix-patch.
//!
//! The engine has a closed taxonomy: the project model is either absent, or
//! it contains a dependency entry missing a required field. Everything else
//! is a successful (possibly empty) patch.

use pomfix_types::outcome::DependencySection;
use thiserror::Error;

/// Required field of a dependency entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyField {
    GroupId,
    ArtifactId,
    Version,
}

impl std::fmt::Display for DependencyField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DependencyField::GroupId => f.write_str("groupId"),
            DependencyField::ArtifactId => f.write_str("artifactId"),
            DependencyField::Version => f.write_str("version"),
        }
    }
}

/// The top-level error type for patch operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// The caller handed over the absent sentinel instead of a project model.
    #[error("project model is missing")]
    MissingProject,

    /// A dependency entry in the model is missing a required field, or the
    /// field is present but empty. Detected before any mutation, so the
    /// model is unchanged when this is returned.
    #[error("malformed dependency entry in {section} at index {index}: missing or empty {field}")]
    MalformedDependency {
        section: DependencySection,
        index: usize,
        field: DependencyField,
    },
}

/// Result type alias using PatchError.
pub type PatchResult<T> = Result<T, PatchError>;
