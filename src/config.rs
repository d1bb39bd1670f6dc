//! Configuration file handling.
//!
//! This module provides loading and parsing of `.graph_session.json`
//! configuration files. Every field is optional:
//!
//! ```json
//! {
//!   "database": { "type": "sqlite", "path": "./graph.sqlite" },
//!   "conflict_marker": "E_DATA_CONFLICT_ERROR",
//!   "log_level": "info"
//! }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db::DatabaseConfig;
use crate::session::ConflictMatcher;

/// Name of the config file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = ".graph_session.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level configuration file structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Database to open sessions against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfigFile>,

    /// Marker identifying data-version conflicts in engine messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict_marker: Option<String>,

    /// Default log filter when RUST_LOG is unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

/// Database configuration variants.
///
/// JSON format uses a "type" field with lowercase variant names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DatabaseConfigFile {
    /// SQLite backend with file path
    Sqlite { path: PathBuf },
    /// In-memory backend
    #[serde(rename = "memory")]
    Mem,
}

impl ConfigFile {
    /// Load configuration from `.graph_session.json` in the current directory.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(CONFIG_FILE_NAME))
    }

    /// Like `load`, but a missing file is not an error.
    pub fn load_optional() -> Result<Option<Self>, ConfigError> {
        match Self::load() {
            Ok(config) => Ok(Some(config)),
            Err(ConfigError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Conflict matcher for the configured marker, or the default one.
    pub fn conflict_matcher(&self) -> ConflictMatcher {
        self.conflict_marker
            .as_deref()
            .map(ConflictMatcher::new)
            .unwrap_or_default()
    }
}

impl DatabaseConfigFile {
    /// Convert this configuration to a DatabaseConfig.
    pub fn to_database_config(&self) -> DatabaseConfig {
        match self {
            Self::Sqlite { path } => DatabaseConfig::CozoSqlite { path: path.clone() },
            Self::Mem => DatabaseConfig::CozoMem,
        }
    }
}
