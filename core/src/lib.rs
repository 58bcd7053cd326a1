//! Schema snapshot types and the flat/nested schema transforms.
//!
//! A content-management platform reports its data schema as three flat
//! sequences cross-referenced by collection name. This crate converts that
//! into a nested, human-readable snapshot and back:
//!
//! - [`nest_schema`] — flat [`FlatSchema`] to [`NestedSnapshot`], with
//!   fields and relations embedded under their collection and everything in
//!   canonical order ([`canonicalize`]).
//! - [`flatten_snapshot`] — the inverse, lifting embedded entries back into
//!   top-level sequences without re-sorting.
//!
//! Record attributes other than the identifying names are opaque
//! [`Metadata`] and survive both directions untouched.
//!
//! # Example
//!
//! ```
//! use schema_merge_core::*;
//!
//! let mut flat = FlatSchema::new(Some("10.8.3".into()));
//! flat.collections.push(Collection::new("tags"));
//! flat.collections.push(Collection::new("articles"));
//! flat.fields.push(Field::new("articles", "title"));
//! flat.relations.push(Relation::new("articles", "tags"));
//!
//! let nested = nest_schema(flat);
//! assert_eq!(nested.collections[0].collection, "articles");
//! assert!(nested.find_collection("tags").unwrap().fields.is_none());
//!
//! let yaml = nested.to_yaml_string().unwrap();
//! let restored = flatten_snapshot(NestedSnapshot::from_yaml_str(&yaml).unwrap());
//! assert_eq!(restored.fields.len(), 1);
//! assert_eq!(restored.relations[0].collection, "articles");
//! ```

mod document;
mod error;
mod flatten;
mod lookup;
mod nest;
mod ordering;
mod types;

pub use error::{Result, SnapshotError};
pub use flatten::flatten_snapshot;
pub use nest::nest_schema;
pub use ordering::{canonicalize, locale_cmp, sort_by_name};
pub use types::*;
