//! Patch engine for pomfix.
//!
//! Responsibilities:
//! - Overwrite the version of every dependency entry matched by a patch, in
//!   both the direct and the managed dependency sequences.
//! - Append patches that matched nothing to the dependency management
//!   section.
//! - Blind-overwrite build properties.
//!
//! The engine mutates the project model in place through an exclusive
//! reference and reports every applied change back as a [`PatchRecord`].
//! Parsing and serializing the descriptor are the caller's concern.

pub mod error;

pub use error::{DependencyField, PatchError, PatchResult};

use pomfix_types::outcome::{DependencySection, PatchOutcome, PatchRecord};
use pomfix_types::patch::DependencyPatch;
use pomfix_types::project::{Dependency, DependencyManagement, Project, PropertyTable};
use tracing::debug;

/// Apply dependency-version patches and property overrides to a project
/// model.
///
/// Matching is by (groupId, artifactId) against every entry of the direct
/// dependency sequence and then of the dependency management sequence; a
/// pair present in both sequences is updated in both. Patches that match no
/// entry are appended to the dependency management section (allocated on
/// demand) in first-seen patch order. Property overrides are merged into the
/// property table last-write-wins, allocating the table when at least one
/// override is supplied.
///
/// `project` is `None` when the upstream parser produced nothing; that is
/// the only invalid input. A dependency entry with a missing or empty
/// required field is rejected before any mutation.
pub fn patch_project(
    project: Option<&mut Project>,
    patches: &[DependencyPatch],
    property_patches: &PropertyTable,
) -> PatchResult<PatchOutcome> {
    let project = project.ok_or(PatchError::MissingProject)?;

    validate(project)?;

    // Order-preserving pending list; exact duplicate patches collapse to the
    // first occurrence. A slot flips to applied once any entry matched it.
    let pending = dedup_patches(patches);
    let mut applied = vec![false; pending.len()];
    let mut outcome = PatchOutcome::default();

    if let Some(entries) = project.dependencies.as_deref_mut() {
        patch_section(
            entries,
            DependencySection::Dependencies,
            &pending,
            &mut applied,
            &mut outcome,
        );
    }

    if let Some(managed) = project.dependency_management.as_mut()
        && let Some(entries) = managed.dependencies.as_deref_mut()
    {
        patch_section(
            entries,
            DependencySection::DependencyManagement,
            &pending,
            &mut applied,
            &mut outcome,
        );
    }

    let additions: Vec<&DependencyPatch> = pending
        .iter()
        .zip(applied.iter())
        .filter(|(_, was_applied)| !**was_applied)
        .map(|(patch, _)| patch)
        .collect();

    if !additions.is_empty() {
        let managed = project
            .dependency_management
            .get_or_insert_with(DependencyManagement::default);
        let entries = managed.dependencies.get_or_insert_with(Vec::new);

        for patch in additions {
            debug!(
                group_id = %patch.group_id,
                artifact_id = %patch.artifact_id,
                version = %patch.version,
                "adding dependency to dependencyManagement"
            );
            entries.push(Dependency::new(
                patch.group_id.clone(),
                patch.artifact_id.clone(),
                patch.version.clone(),
            ));
            outcome.record(PatchRecord::DependencyAdded {
                group_id: patch.group_id.clone(),
                artifact_id: patch.artifact_id.clone(),
                version: patch.version.clone(),
            });
        }
    }

    if !property_patches.is_empty() {
        let table = project.properties.get_or_insert_with(PropertyTable::new);
        for (property, value) in property_patches {
            let previous = table.insert(property.clone(), value.clone());
            debug!(property = %property, value = %value, "setting property");
            outcome.record(PatchRecord::PropertySet {
                property: property.clone(),
                previous_value: previous,
                value: value.clone(),
            });
        }
    }

    Ok(outcome)
}

/// Scan one dependency sequence against every pending patch.
///
/// Every entry is compared against every patch, even after a match: duplicate
/// (groupId, artifactId) entries are all updated, and duplicate patches for
/// the same pair apply in patch-list order with the last write winning.
fn patch_section(
    entries: &mut [Dependency],
    section: DependencySection,
    pending: &[DependencyPatch],
    applied: &mut [bool],
    outcome: &mut PatchOutcome,
) {
    for entry in entries.iter_mut() {
        for (slot, patch) in pending.iter().enumerate() {
            if entry.group_id.as_deref() != Some(patch.group_id.as_str())
                || entry.artifact_id.as_deref() != Some(patch.artifact_id.as_str())
            {
                continue;
            }

            let previous = entry
                .version
                .replace(patch.version.clone())
                .unwrap_or_default();
            debug!(
                section = %section,
                group_id = %patch.group_id,
                artifact_id = %patch.artifact_id,
                from = %previous,
                to = %patch.version,
                "patching dependency version"
            );
            outcome.record(PatchRecord::VersionUpdated {
                section,
                group_id: patch.group_id.clone(),
                artifact_id: patch.artifact_id.clone(),
                previous_version: previous,
                new_version: patch.version.clone(),
            });
            applied[slot] = true;
        }
    }
}

/// Reject any dependency entry with an absent or empty required field before
/// the mutation pass, so a failed call leaves the model untouched.
fn validate(project: &Project) -> PatchResult<()> {
    if let Some(entries) = project.dependencies.as_deref() {
        validate_entries(entries, DependencySection::Dependencies)?;
    }
    if let Some(managed) = project.dependency_management.as_ref()
        && let Some(entries) = managed.dependencies.as_deref()
    {
        validate_entries(entries, DependencySection::DependencyManagement)?;
    }
    Ok(())
}

fn validate_entries(entries: &[Dependency], section: DependencySection) -> PatchResult<()> {
    for (index, entry) in entries.iter().enumerate() {
        for (field, value) in [
            (DependencyField::GroupId, &entry.group_id),
            (DependencyField::ArtifactId, &entry.artifact_id),
            (DependencyField::Version, &entry.version),
        ] {
            if value.as_deref().is_none_or(str::is_empty) {
                return Err(PatchError::MalformedDependency {
                    section,
                    index,
                    field,
                });
            }
        }
    }
    Ok(())
}

fn dedup_patches(patches: &[DependencyPatch]) -> Vec<DependencyPatch> {
    let mut out: Vec<DependencyPatch> = Vec::with_capacity(patches.len());
    for patch in patches {
        if !out.contains(patch) {
            out.push(patch.clone());
        }
    }
    out
}
