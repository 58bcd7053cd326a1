//! [`SchemaService`] backed by the platform's REST schema endpoints.
//!
//! | Operation  | Request                  | Success response                         |
//! |------------|--------------------------|------------------------------------------|
//! | `snapshot` | `GET /schema/snapshot`   | `200 {"data": <flat schema>}`            |
//! | `diff`     | `POST /schema/diff`      | `204` or `200 {"data": {"diff": ...}}`   |
//! | `apply`    | `POST /schema/apply`     | any 2xx                                  |
//!
//! The host computes diffs against its own live state, so the `current`
//! schema handed to [`SchemaService::diff`] is not sent.

use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use schema_merge_core::FlatSchema;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::HostConfig;
use crate::error::{Result, SyncError};
use crate::service::{ApplyRequest, SchemaDiff, SchemaService};

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Body of a `200` diff response.
///
/// The host also returns its own `hash`; it is ignored because apply
/// requests carry the fingerprint computed by [`schema_hash`](crate::schema_hash).
#[derive(Debug, Deserialize)]
struct DiffPayload {
    #[serde(default)]
    diff: Value,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    message: String,
}

/// Blocking HTTP client for the host's schema endpoints.
#[derive(Debug, Clone)]
pub struct HttpSchemaService {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpSchemaService {
    /// Builds a client from connection settings.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Config`] if no usable URL is configured, or
    /// [`SyncError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &HostConfig) -> Result<Self> {
        let base_url = config.base_url()?.to_string();
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            base_url,
            token: config.token.clone(),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = self.authorize(request).send()?;
        check_status(response)
    }
}

fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.errors.into_iter().next())
        .map(|e| e.message)
        .unwrap_or(body);
    Err(SyncError::HostError {
        status: status.as_u16(),
        message,
    })
}

fn read_data<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text()?;
    let envelope: Envelope<T> = serde_json::from_str(&body)
        .map_err(|e| SyncError::InvalidResponse(format!("unexpected payload: {e}")))?;
    Ok(envelope.data)
}

impl SchemaService for HttpSchemaService {
    fn snapshot(&self) -> Result<FlatSchema> {
        debug!(url = %self.base_url, "fetching live schema snapshot");
        let response = self.send(self.client.get(self.endpoint("schema/snapshot")))?;
        read_data(response)
    }

    fn diff(&self, target: &FlatSchema, current: &FlatSchema) -> Result<Option<SchemaDiff>> {
        debug!(
            target_collections = target.collections.len(),
            live_collections = current.collections.len(),
            "requesting schema diff"
        );
        let response = self.send(self.client.post(self.endpoint("schema/diff")).json(target))?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        let payload: DiffPayload = read_data(response)?;
        let diff = SchemaDiff::new(payload.diff);
        Ok((!diff.is_empty()).then_some(diff))
    }

    fn apply(&self, request: &ApplyRequest) -> Result<()> {
        info!(hash = %request.hash, "applying schema diff");
        self.send(self.client.post(self.endpoint("schema/apply")).json(request))?;
        Ok(())
    }
}
