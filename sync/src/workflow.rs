//! The `snapshot` and `apply` workflows.
//!
//! Both run start to finish as one linear sequence of file and host calls
//! and report their outcome as a value. Deciding what that means for the
//! process is left to the caller.

use std::path::Path;

use schema_merge_core::{NestedSnapshot, flatten_snapshot, nest_schema};
use tracing::info;

use crate::error::Result;
use crate::hash::schema_hash;
use crate::service::{ApplyRequest, SchemaDiff, SchemaService};

/// Record counts of a written snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotSummary {
    pub collections: usize,
    pub fields: usize,
    pub relations: usize,
}

impl SnapshotSummary {
    fn of(snapshot: &NestedSnapshot) -> Self {
        Self {
            collections: snapshot.collections.len(),
            fields: snapshot.field_count(),
            relations: snapshot.relation_count(),
        }
    }
}

/// Options for [`apply_snapshot`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyOptions {
    /// Compute the diff but do not apply it.
    pub dry_run: bool,
}

/// Result of an apply run.
#[derive(Debug, Clone, PartialEq)]
pub enum ApplyOutcome {
    /// The live schema already matches the snapshot.
    NothingToDo,
    /// A diff exists but was not applied.
    DryRun { diff: SchemaDiff },
    /// The diff was applied with the given fingerprint.
    Applied { hash: String },
}

/// Fetches the live schema and returns it as a canonical nested snapshot.
pub fn export_snapshot<S: SchemaService + ?Sized>(service: &S) -> Result<NestedSnapshot> {
    let flat = service.snapshot()?;
    Ok(nest_schema(flat))
}

/// Fetches the live schema and writes it to `output` as nested YAML.
///
/// # Errors
///
/// Propagates host failures and any error writing `output`.
pub fn snapshot_to_file<S: SchemaService + ?Sized>(
    service: &S,
    output: impl AsRef<Path>,
) -> Result<SnapshotSummary> {
    let output = output.as_ref();
    let snapshot = export_snapshot(service)?;
    snapshot.save(output)?;

    let summary = SnapshotSummary::of(&snapshot);
    info!(
        path = %output.display(),
        collections = summary.collections,
        fields = summary.fields,
        relations = summary.relations,
        "wrote schema snapshot"
    );
    Ok(summary)
}

/// Reconciles the live schema with a previously exported snapshot.
///
/// The snapshot is flattened, diffed against the live schema by the host,
/// and the diff applied when it is non-empty. The apply request carries
/// [`schema_hash`] of the snapshot's declared version and the live schema.
pub fn apply_snapshot<S: SchemaService + ?Sized>(
    service: &S,
    snapshot: NestedSnapshot,
    options: ApplyOptions,
) -> Result<ApplyOutcome> {
    let target = flatten_snapshot(snapshot);
    let current = service.snapshot()?;

    let diff = match service.diff(&target, &current)? {
        Some(diff) if !diff.is_empty() => diff,
        _ => {
            info!("Nothing to do");
            return Ok(ApplyOutcome::NothingToDo);
        }
    };

    if options.dry_run {
        info!("dry run, diff not applied");
        return Ok(ApplyOutcome::DryRun { diff });
    }

    let hash = schema_hash(target.directus.as_deref(), &current)?;
    service.apply(&ApplyRequest {
        hash: hash.clone(),
        diff,
    })?;
    info!(hash = %hash, "schema applied");
    Ok(ApplyOutcome::Applied { hash })
}

/// Reads a snapshot file and applies it with [`apply_snapshot`].
///
/// # Errors
///
/// Fails before contacting the host if the file is missing, is not YAML,
/// or has no `collections` sequence.
pub fn apply_from_file<S: SchemaService + ?Sized>(
    service: &S,
    input: impl AsRef<Path>,
    options: ApplyOptions,
) -> Result<ApplyOutcome> {
    let input = input.as_ref();
    let snapshot = NestedSnapshot::load(input)?;
    info!(path = %input.display(), collections = snapshot.collections.len(), "loaded schema snapshot");
    apply_snapshot(service, snapshot, options)
}
