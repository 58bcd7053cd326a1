//! Host connection settings.
//!
//! Settings can come from a YAML file and be overridden from the command
//! line or environment with [`HostConfig::with_overrides`].
//!
//! # Example YAML
//!
//! ```yaml
//! url: https://cms.example.com
//! token: s3cr3t-static-token
//! timeout_secs: 60
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SyncError};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Where and how to reach the host platform.
///
/// # Examples
///
/// ```
/// use schema_merge_sync::HostConfig;
///
/// let config = HostConfig::default()
///     .with_overrides(Some("http://localhost:8055".into()), None, None);
/// assert_eq!(config.base_url().unwrap(), "http://localhost:8055");
/// assert_eq!(config.timeout_secs, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    /// Base URL of the platform, e.g. `https://cms.example.com`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Static access token of an administrator account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            url: None,
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl HostConfig {
    /// Loads settings from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::SyncError::IoError) if the file cannot be
    /// read, or [`YamlError`](crate::SyncError::YamlError) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the settings as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Replaces each setting for which an override is given.
    pub fn with_overrides(
        mut self,
        url: Option<String>,
        token: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Self {
        if url.is_some() {
            self.url = url;
        }
        if token.is_some() {
            self.token = token;
        }
        if let Some(secs) = timeout_secs {
            self.timeout_secs = secs;
        }
        self
    }

    /// Returns the base URL without a trailing slash.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Config`] if no URL is set or it is not an
    /// `http(s)` URL.
    pub fn base_url(&self) -> Result<&str> {
        let url = self
            .url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| SyncError::Config("no host URL configured".to_string()))?;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(SyncError::Config(format!(
                "host URL '{url}' must start with http:// or https://"
            )));
        }
        Ok(url.trim_end_matches('/'))
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
