//! Schema document types for both storage shapes.
//!
//! The platform reports its schema in a *flat* shape: three independent
//! sequences (collections, fields, relations) cross-referenced by collection
//! name. Snapshot files use a *nested* shape where every collection carries
//! its own fields and relations.
//!
//! Everything the platform attaches to a record beyond its identifying names
//! is kept as an opaque [`Metadata`] mapping and passed through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque, platform-defined attributes of a schema record.
pub type Metadata = Map<String, Value>;

/// A record identified by a name attribute.
///
/// Collections are named by `collection`; fields and relations by `field`.
pub trait Named {
    /// Returns the name used for lookup and canonical ordering.
    fn name(&self) -> &str;
}

/// A record that belongs to a collection through its `collection` attribute.
pub trait Owned: Named {
    /// Name of the owning collection (empty when unset).
    fn owner(&self) -> &str;

    /// Replaces the owning collection name.
    fn set_owner(&mut self, owner: String);
}

/// A collection record without embedded children.
///
/// # Examples
///
/// ```
/// use schema_merge_core::{Collection, Named};
///
/// let articles = Collection::new("articles").with_meta("note", "Blog posts".into());
/// assert_eq!(articles.name(), "articles");
/// assert_eq!(articles.meta["note"], "Blog posts");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Unique collection name.
    pub collection: String,
    /// Remaining collection attributes.
    #[serde(flatten)]
    pub meta: Metadata,
}

impl Collection {
    /// Creates a collection with no metadata.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            collection: name.into(),
            meta: Metadata::new(),
        }
    }

    /// Sets a metadata attribute (builder pattern).
    pub fn with_meta(mut self, key: impl Into<String>, value: Value) -> Self {
        self.meta.insert(key.into(), value);
        self
    }
}

/// A field record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Field name, unique within its collection.
    pub field: String,
    /// Owning collection name. Embedded entries in hand-written snapshot
    /// files may omit it.
    #[serde(default)]
    pub collection: String,
    /// Remaining field attributes.
    #[serde(flatten)]
    pub meta: Metadata,
}

impl Field {
    /// Creates a field owned by `collection`.
    pub fn new(collection: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            collection: collection.into(),
            meta: Metadata::new(),
        }
    }

    /// Sets a metadata attribute (builder pattern).
    pub fn with_meta(mut self, key: impl Into<String>, value: Value) -> Self {
        self.meta.insert(key.into(), value);
        self
    }
}

/// A relation record, modeled as an attribute of the field slot it lives on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    /// Name of the field slot carrying the relation.
    pub field: String,
    /// Owning collection name.
    #[serde(default)]
    pub collection: String,
    /// Remaining relation attributes (`related_collection`, `meta`, ...).
    #[serde(flatten)]
    pub meta: Metadata,
}

impl Relation {
    /// Creates a relation on `collection.field`.
    pub fn new(collection: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            collection: collection.into(),
            meta: Metadata::new(),
        }
    }

    /// Sets a metadata attribute (builder pattern).
    pub fn with_meta(mut self, key: impl Into<String>, value: Value) -> Self {
        self.meta.insert(key.into(), value);
        self
    }
}

/// The platform's native schema shape.
///
/// # Examples
///
/// ```
/// use schema_merge_core::{Collection, Field, FlatSchema};
///
/// let mut flat = FlatSchema::new(Some("10.8.3".into()));
/// flat.collections.push(Collection::new("articles"));
/// flat.fields.push(Field::new("articles", "title"));
/// assert!(flat.relations.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlatSchema {
    /// Platform version that produced the schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directus: Option<String>,
    /// Other top-level keys (`version`, `vendor`, ...).
    #[serde(flatten)]
    pub header: Metadata,
    /// Bare collection records.
    pub collections: Vec<Collection>,
    /// Every field of every collection.
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Every relation of every collection.
    #[serde(default)]
    pub relations: Vec<Relation>,
}

impl FlatSchema {
    /// Creates an empty flat schema.
    pub fn new(directus: Option<String>) -> Self {
        Self {
            directus,
            ..Self::default()
        }
    }
}

/// A collection with its fields and relations embedded.
///
/// `fields` and `relations` are `None` when the collection has no entries
/// of that kind, so they are omitted from serialized output rather than
/// written as empty lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedCollection {
    /// Unique collection name.
    pub collection: String,
    /// Remaining collection attributes.
    #[serde(flatten)]
    pub meta: Metadata,
    /// Embedded fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<Field>>,
    /// Embedded relations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relations: Option<Vec<Relation>>,
}

impl From<Collection> for NestedCollection {
    fn from(collection: Collection) -> Self {
        Self {
            collection: collection.collection,
            meta: collection.meta,
            fields: None,
            relations: None,
        }
    }
}

/// The snapshot file shape: header keys plus self-contained collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedSnapshot {
    /// Platform version that produced the schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directus: Option<String>,
    /// Other top-level keys (`version`, `vendor`, ...).
    #[serde(flatten)]
    pub header: Metadata,
    /// Collections with their embedded fields and relations.
    pub collections: Vec<NestedCollection>,
}

impl NestedSnapshot {
    /// Total number of embedded fields across all collections.
    pub fn field_count(&self) -> usize {
        self.collections
            .iter()
            .map(|c| c.fields.as_ref().map_or(0, Vec::len))
            .sum()
    }

    /// Total number of embedded relations across all collections.
    pub fn relation_count(&self) -> usize {
        self.collections
            .iter()
            .map(|c| c.relations.as_ref().map_or(0, Vec::len))
            .sum()
    }

    /// Looks up a collection by name (first match).
    pub fn find_collection(&self, name: &str) -> Option<&NestedCollection> {
        self.collections.iter().find(|c| c.collection == name)
    }
}

impl Named for Collection {
    fn name(&self) -> &str {
        &self.collection
    }
}

impl Named for NestedCollection {
    fn name(&self) -> &str {
        &self.collection
    }
}

impl Named for Field {
    fn name(&self) -> &str {
        &self.field
    }
}

impl Named for Relation {
    fn name(&self) -> &str {
        &self.field
    }
}

impl Owned for Field {
    fn owner(&self) -> &str {
        &self.collection
    }

    fn set_owner(&mut self, owner: String) {
        self.collection = owner;
    }
}

impl Owned for Relation {
    fn owner(&self) -> &str {
        &self.collection
    }

    fn set_owner(&mut self, owner: String) {
        self.collection = owner;
    }
}
