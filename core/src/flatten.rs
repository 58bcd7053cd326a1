//! Nested snapshot back to the flat schema shape.
//!
//! # Example
//!
//! ```
//! use schema_merge_core::*;
//!
//! let yaml = "
//! collections:
//!   - collection: c
//!     fields:
//!       - field: f2
//!       - field: f1
//! ";
//! let nested = NestedSnapshot::from_yaml_str(yaml).unwrap();
//! let flat = flatten_snapshot(nested);
//! assert_eq!(flat.fields[0].field, "f2");
//! assert_eq!(flat.fields[0].collection, "c");
//! assert_eq!(flat.collections[0], Collection::new("c"));
//! ```

use tracing::debug;

use crate::lookup::EntityKind;
use crate::types::{Collection, FlatSchema, NestedCollection, NestedSnapshot, Owned};

/// Lifts embedded fields and relations back into top-level sequences.
///
/// Entries are concatenated in collection order and keep their embedded
/// order; nothing is re-sorted. Embedded entries are tagged with the name of
/// the collection they sit under. The returned collections are bare records.
///
/// Top-level `fields`/`relations` keys already present in the document are
/// replaced by the lifted sequences.
pub fn flatten_snapshot(snapshot: NestedSnapshot) -> FlatSchema {
    let NestedSnapshot {
        directus,
        mut header,
        collections: nested,
    } = snapshot;

    for key in ["fields", "relations"] {
        if header.remove(key).is_some() {
            debug!(key, "discarding top-level list superseded by embedded entries");
        }
    }

    let mut collections = Vec::with_capacity(nested.len());
    let mut fields = Vec::new();
    let mut relations = Vec::new();

    for entry in nested {
        let NestedCollection {
            collection,
            meta,
            fields: embedded_fields,
            relations: embedded_relations,
        } = entry;

        lift(&mut fields, embedded_fields, &collection, EntityKind::Field);
        lift(&mut relations, embedded_relations, &collection, EntityKind::Relation);
        collections.push(Collection { collection, meta });
    }

    FlatSchema {
        directus,
        header,
        collections,
        fields,
        relations,
    }
}

fn lift<T: Owned>(out: &mut Vec<T>, embedded: Option<Vec<T>>, owner: &str, kind: EntityKind) {
    for mut entry in embedded.unwrap_or_default() {
        if entry.owner() != owner {
            if !entry.owner().is_empty() {
                debug!(
                    kind = %kind,
                    name = entry.name(),
                    declared = entry.owner(),
                    owner,
                    "re-tagging embedded entry with its enclosing collection"
                );
            }
            entry.set_owner(owner.to_string());
        }
        out.push(entry);
    }
}
