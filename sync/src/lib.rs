//! Host schema service boundary and the snapshot/apply workflows.
//!
//! - [`SchemaService`] — the three host operations (`snapshot`, `diff`,
//!   `apply`) every workflow goes through.
//! - [`HttpSchemaService`] — implementation over the platform's REST
//!   schema endpoints, configured by [`HostConfig`].
//! - [`snapshot_to_file`] / [`apply_from_file`] — export the live schema to
//!   a nested YAML file, or reconcile the live schema with one.
//!
//! # Quick start
//!
//! ```no_run
//! use schema_merge_sync::*;
//!
//! let config = HostConfig::load("host.yaml").unwrap();
//! let service = HttpSchemaService::new(&config).unwrap();
//!
//! snapshot_to_file(&service, "schema.yaml").unwrap();
//! match apply_from_file(&service, "schema.yaml", ApplyOptions::default()).unwrap() {
//!     ApplyOutcome::NothingToDo => println!("Nothing to do"),
//!     outcome => println!("{outcome:?}"),
//! }
//! ```

mod config;
mod error;
mod hash;
mod http;
mod service;
mod workflow;

pub use config::{DEFAULT_TIMEOUT_SECS, HostConfig};
pub use error::{Result, SyncError};
pub use hash::schema_hash;
pub use http::HttpSchemaService;
pub use service::{ApplyRequest, SchemaDiff, SchemaService};
pub use workflow::{
    ApplyOptions, ApplyOutcome, SnapshotSummary, apply_from_file, apply_snapshot,
    export_snapshot, snapshot_to_file,
};
