//! Workspace configuration.
//!
//! Configuration is read from TOML. Every table is optional; a missing
//! file section falls back to the defaults documented on each field.
//!
//! ```toml
//! [latency]
//! get_all_ms = 250
//! get_by_id_ms = 200
//! create_ms = 400
//! update_ms = 350
//! delete_ms = 250
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Repository operation subject to simulated latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    /// Snapshot of a whole collection.
    GetAll,
    /// Single lookup by identifier.
    GetById,
    /// Entity creation.
    Create,
    /// Partial update.
    Update,
    /// Entity removal.
    Delete,
}

/// Per-operation delay, in milliseconds, that repositories wait before
/// serving a request.
///
/// The delay mirrors the round trip of a remote store; it has no
/// cancellation or timeout semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LatencyConfig {
    /// Delay for `get_all`.
    pub get_all_ms: u64,
    /// Delay for `get_by_id`.
    pub get_by_id_ms: u64,
    /// Delay for `create`.
    pub create_ms: u64,
    /// Delay for `update`.
    pub update_ms: u64,
    /// Delay for `delete`.
    pub delete_ms: u64,
}

impl LatencyConfig {
    /// No simulated latency.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            get_all_ms: 0,
            get_by_id_ms: 0,
            create_ms: 0,
            update_ms: 0,
            delete_ms: 0,
        }
    }

    /// Latency profile of the mock remote backend the board was built
    /// against.
    #[must_use]
    pub const fn simulated_remote() -> Self {
        Self {
            get_all_ms: 250,
            get_by_id_ms: 200,
            create_ms: 400,
            update_ms: 350,
            delete_ms: 250,
        }
    }

    /// Returns the delay for an operation.
    #[must_use]
    pub const fn delay(&self, operation: StoreOperation) -> Duration {
        let millis = match operation {
            StoreOperation::GetAll => self.get_all_ms,
            StoreOperation::GetById => self.get_by_id_ms,
            StoreOperation::Create => self.create_ms,
            StoreOperation::Update => self.update_ms,
            StoreOperation::Delete => self.delete_ms,
        };
        Duration::from_millis(millis)
    }
}

/// Top-level configuration for a [`crate::workspace::Workspace`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkspaceConfig {
    /// Simulated repository latency. Defaults to none.
    pub latency: LatencyConfig,
}

impl WorkspaceConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not valid TOML or
    /// contains unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, or
    /// [`ConfigError::Parse`] when its contents are invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The configuration text is invalid.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
