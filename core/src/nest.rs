//! Flat schema to nested snapshot.
//!
//! Every field and relation is moved under the collection it names, then the
//! result is put into canonical order. Entries that name a collection which
//! does not exist are dropped.
//!
//! # Example
//!
//! ```
//! use schema_merge_core::*;
//!
//! let mut flat = FlatSchema::new(Some("10.8.3".into()));
//! flat.collections.push(Collection::new("b"));
//! flat.collections.push(Collection::new("a"));
//! flat.fields.push(Field::new("a", "x"));
//! flat.fields.push(Field::new("b", "y"));
//!
//! let nested = nest_schema(flat);
//! assert_eq!(nested.collections[0].collection, "a");
//! assert_eq!(nested.collections[0].fields.as_ref().unwrap()[0].field, "x");
//! assert!(nested.collections[1].relations.is_none());
//! ```

use crate::lookup::{CollectionIndex, EntityKind, skip_dangling};
use crate::ordering::canonicalize;
use crate::types::{Field, FlatSchema, NestedCollection, NestedSnapshot, Owned, Relation};

/// Converts a flat schema into a canonically ordered nested snapshot.
///
/// Each field and relation is attached to the first collection whose name
/// equals its `collection` attribute; the attribute itself is kept on the
/// embedded entry. A collection receives a `fields` (or `relations`) list
/// only when at least one entry matched it.
pub fn nest_schema(flat: FlatSchema) -> NestedSnapshot {
    let FlatSchema {
        directus,
        header,
        collections,
        fields,
        relations,
    } = flat;

    let mut nested: Vec<NestedCollection> =
        collections.into_iter().map(NestedCollection::from).collect();
    let index = CollectionIndex::build(&nested);

    attach(&mut nested, &index, fields, EntityKind::Field, field_slot);
    attach(&mut nested, &index, relations, EntityKind::Relation, relation_slot);

    let mut snapshot = NestedSnapshot {
        directus,
        header,
        collections: nested,
    };
    canonicalize(&mut snapshot);
    snapshot
}

fn attach<T: Owned>(
    nested: &mut [NestedCollection],
    index: &CollectionIndex,
    entries: Vec<T>,
    kind: EntityKind,
    slot: fn(&mut NestedCollection) -> &mut Option<Vec<T>>,
) {
    for entry in entries {
        match index.position(entry.owner()) {
            Some(pos) => slot(&mut nested[pos]).get_or_insert_with(Vec::new).push(entry),
            None => skip_dangling(kind, entry.name(), entry.owner()),
        }
    }
}

fn field_slot(collection: &mut NestedCollection) -> &mut Option<Vec<Field>> {
    &mut collection.fields
}

fn relation_slot(collection: &mut NestedCollection) -> &mut Option<Vec<Relation>> {
    &mut collection.relations
}
