//! YAML encoding of nested snapshots.
//!
//! # Example YAML
//!
//! ```yaml
//! directus: 10.8.3
//! collections:
//!   - collection: articles
//!     meta:
//!       icon: article
//!     fields:
//!       - field: title
//!         collection: articles
//!         type: string
//!     relations:
//!       - field: author
//!         collection: articles
//!         related_collection: users
//! ```

use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::types::NestedSnapshot;

impl NestedSnapshot {
    /// Parses a snapshot from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`YamlError`](crate::SnapshotError::YamlError) if the text is
    /// not valid YAML or has no `collections` sequence.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serializes the snapshot as YAML text.
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Loads a snapshot from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::SnapshotError::IoError) if the file cannot
    /// be read, or [`YamlError`](crate::SnapshotError::YamlError) if parsing
    /// fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let snapshot = serde_yaml::from_reader(reader)?;
        Ok(snapshot)
    }

    /// Writes the snapshot as YAML, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::SnapshotError::IoError) if the file cannot
    /// be written, or [`YamlError`](crate::SnapshotError::YamlError) if
    /// serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_yaml::to_writer(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}
