//! Content fingerprint attached to apply requests.

use schema_merge_core::FlatSchema;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::Result;

#[derive(Serialize)]
struct Fingerprint<'a> {
    version: Option<&'a str>,
    item: &'a FlatSchema,
}

/// Hashes the declared platform version together with the live schema.
///
/// The value is SHA-256 over the JSON encoding of
/// `{"version": <version>, "item": <current>}`, as lowercase hex. Metadata
/// maps serialize with sorted keys, so equal inputs always hash equally.
///
/// # Examples
///
/// ```
/// use schema_merge_core::FlatSchema;
/// use schema_merge_sync::schema_hash;
///
/// let live = FlatSchema::new(Some("10.8.3".into()));
/// let hash = schema_hash(Some("10.8.3"), &live).unwrap();
/// assert_eq!(hash.len(), 64);
/// assert_eq!(hash, schema_hash(Some("10.8.3"), &live).unwrap());
/// ```
pub fn schema_hash(version: Option<&str>, current: &FlatSchema) -> Result<String> {
    let bytes = serde_json::to_vec(&Fingerprint {
        version,
        item: current,
    })?;
    let hash = Sha256::digest(&bytes);
    Ok(format!("{:x}", hash))
}
