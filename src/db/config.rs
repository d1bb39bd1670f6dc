//! Database configuration for runtime backend selection.
//!
//! Resolves which engine a session is opened against from a URL, the
//! environment, or the `.graph_session.json` config file.

use std::error::Error;
use std::path::PathBuf;

use super::cozo::CozoSession;
use super::DbError;
use crate::config::ConfigFile;
use crate::session::RawSession;

/// Database used when nothing else is configured.
pub const DEFAULT_DB_URL: &str = "./graph.sqlite";

/// Configuration for database backend selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseConfig {
    /// Local CozoDB with SQLite storage.
    CozoSqlite { path: PathBuf },

    /// Local CozoDB with in-memory storage.
    CozoMem,
}

impl DatabaseConfig {
    /// Open a session from this configuration.
    pub fn connect(&self) -> Result<Box<dyn RawSession>, Box<dyn Error>> {
        let session = match self {
            Self::CozoSqlite { path } => CozoSession::open_sqlite(path)?,
            Self::CozoMem => CozoSession::open_mem()?,
        };
        Ok(Box::new(session))
    }

    /// Parse from a connection URL or file path.
    ///
    /// Supported formats:
    /// - `./path/to/db.sqlite` or `/absolute/path` → CozoSqlite
    /// - `sqlite:///path/to/db` → CozoSqlite
    /// - `:memory:` or `mem://` → CozoMem
    ///
    /// Any other `scheme://` is rejected.
    pub fn from_url(url: &str) -> Result<Self, DbError> {
        if url == ":memory:" || url == "mem://" {
            return Ok(Self::CozoMem);
        }

        if let Some(path) = url.strip_prefix("sqlite://") {
            return Ok(Self::CozoSqlite {
                path: PathBuf::from(path),
            });
        }

        if url.contains("://") {
            return Err(DbError::UnsupportedUrl {
                url: url.to_string(),
            });
        }

        Ok(Self::CozoSqlite {
            path: PathBuf::from(url),
        })
    }

    /// Load from environment variables.
    ///
    /// Checks in order:
    /// 1. DATABASE_URL environment variable
    /// 2. COZO_PATH environment variable
    pub fn from_env() -> Result<Option<Self>, DbError> {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            return Ok(Some(Self::from_url(&url)?));
        }

        if let Ok(path) = std::env::var("COZO_PATH") {
            return Ok(Some(Self::CozoSqlite {
                path: PathBuf::from(path),
            }));
        }

        Ok(None)
    }

    /// Resolve configuration from a loaded config file and the environment.
    ///
    /// Priority: Config file > Environment > Default (./graph.sqlite)
    pub fn resolve(config: Option<&ConfigFile>) -> Result<Self, DbError> {
        if let Some(database) = config.and_then(|c| c.database.as_ref()) {
            return Ok(database.to_database_config());
        }

        if let Some(config) = Self::from_env()? {
            return Ok(config);
        }

        Self::from_url(DEFAULT_DB_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfigFile;
    use std::sync::Mutex;
    use std::sync::OnceLock;

    // Serializes tests that modify environment variables
    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn clear_env() {
        unsafe {
            std::env::remove_var("DATABASE_URL");
            std::env::remove_var("COZO_PATH");
        }
    }

    #[test]
    fn test_from_url_file_path() {
        let config = DatabaseConfig::from_url("./test.sqlite").unwrap();
        assert!(matches!(config, DatabaseConfig::CozoSqlite { .. }));
    }

    #[test]
    fn test_from_url_absolute_path() {
        let config = DatabaseConfig::from_url("/tmp/test.sqlite").unwrap();
        match config {
            DatabaseConfig::CozoSqlite { path } => {
                assert_eq!(path, PathBuf::from("/tmp/test.sqlite"));
            }
            _ => panic!("Expected CozoSqlite"),
        }
    }

    #[test]
    fn test_from_url_memory() {
        assert_eq!(DatabaseConfig::from_url(":memory:").unwrap(), DatabaseConfig::CozoMem);
        assert_eq!(DatabaseConfig::from_url("mem://").unwrap(), DatabaseConfig::CozoMem);
    }

    #[test]
    fn test_from_url_sqlite_scheme() {
        let config = DatabaseConfig::from_url("sqlite:///tmp/test.db").unwrap();
        assert_eq!(
            config,
            DatabaseConfig::CozoSqlite {
                path: PathBuf::from("/tmp/test.db")
            }
        );
    }

    #[test]
    fn test_from_url_rejects_unknown_scheme() {
        let err = DatabaseConfig::from_url("nebula://127.0.0.1:9669").unwrap_err();
        assert!(err.to_string().contains("nebula://127.0.0.1:9669"));
    }

    #[test]
    fn test_connect_memory() {
        let session = DatabaseConfig::CozoMem.connect().expect("should connect");
        assert!(session.ping());
    }

    #[test]
    fn test_resolve_prefers_config_file() {
        let _guard = env_lock().lock().unwrap();
        clear_env();
        unsafe { std::env::set_var("DATABASE_URL", "/tmp/from_env.sqlite") };

        let file = ConfigFile {
            database: Some(DatabaseConfigFile::Mem),
            ..ConfigFile::default()
        };
        let resolved = DatabaseConfig::resolve(Some(&file));
        clear_env();

        assert_eq!(resolved.unwrap(), DatabaseConfig::CozoMem);
    }

    #[test]
    fn test_resolve_from_env() {
        let _guard = env_lock().lock().unwrap();
        clear_env();
        unsafe { std::env::set_var("COZO_PATH", "/tmp/cozo_path.sqlite") };

        let resolved = DatabaseConfig::resolve(None);
        clear_env();

        assert_eq!(
            resolved.unwrap(),
            DatabaseConfig::CozoSqlite {
                path: PathBuf::from("/tmp/cozo_path.sqlite")
            }
        );
    }

    #[test]
    fn test_resolve_default() {
        let _guard = env_lock().lock().unwrap();
        clear_env();

        let resolved = DatabaseConfig::resolve(Some(&ConfigFile::default())).unwrap();
        assert_eq!(
            resolved,
            DatabaseConfig::CozoSqlite {
                path: PathBuf::from(DEFAULT_DB_URL)
            }
        );
    }
}
