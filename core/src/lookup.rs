//! Name-based collection lookup and the dangling-reference policy.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::types::Named;

/// Kind of a collection-owned record, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntityKind {
    Field,
    Relation,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field => f.write_str("field"),
            Self::Relation => f.write_str("relation"),
        }
    }
}

/// Maps collection names to their position in a slice.
///
/// When a name occurs more than once the first position wins, matching a
/// linear first-match scan.
#[derive(Debug, Default)]
pub(crate) struct CollectionIndex {
    positions: HashMap<String, usize>,
}

impl CollectionIndex {
    pub(crate) fn build<T: Named>(items: &[T]) -> Self {
        let mut positions = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            positions.entry(item.name().to_string()).or_insert(pos);
        }
        Self { positions }
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }
}

/// Handles a record whose owning collection does not exist.
///
/// The record is dropped without error. This is the single place to change
/// if unmatched references should ever be rejected instead.
pub(crate) fn skip_dangling(kind: EntityKind, name: &str, collection: &str) {
    debug!(
        kind = %kind,
        name,
        collection,
        "dropping entry that references an unknown collection"
    );
}
