use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use ccommon::BoxFuture;
use rusqlite::{Connection, OptionalExtension, params};

use crate::error::PrefsError;
use crate::store::PreferenceStore;

#[derive(Debug)]
pub struct SqlitePreferenceStore {
    connection: Mutex<Connection>,
}

impl SqlitePreferenceStore {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, PrefsError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|error| {
                PrefsError::storage(format!("failed to create sqlite parent directory: {error}"))
            })?;
        }

        let connection = Connection::open(path).map_err(|error| {
            PrefsError::storage(format!("failed to open sqlite database: {error}"))
        })?;

        Self::configure(connection)
    }

    pub fn new_in_memory() -> Result<Self, PrefsError> {
        let connection = Connection::open_in_memory().map_err(|error| {
            PrefsError::storage(format!("failed to open in-memory sqlite database: {error}"))
        })?;

        Self::configure(connection)
    }

    fn configure(connection: Connection) -> Result<Self, PrefsError> {
        connection
            .busy_timeout(Duration::from_secs(5))
            .map_err(|error| {
                PrefsError::storage(format!("failed to configure sqlite busy timeout: {error}"))
            })?;

        let store = Self {
            connection: Mutex::new(connection),
        };
        store.initialize_schema()?;
        Ok(store)
    }

    fn connection(&self) -> Result<std::sync::MutexGuard<'_, Connection>, PrefsError> {
        self.connection
            .lock()
            .map_err(|_| PrefsError::storage("sqlite store lock poisoned"))
    }

    fn initialize_schema(&self) -> Result<(), PrefsError> {
        let conn = self.connection()?;
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;

            CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            ",
        )
        .map_err(|error| {
            PrefsError::storage(format!("failed to initialize sqlite schema: {error}"))
        })
    }
}

impl PreferenceStore for SqlitePreferenceStore {
    fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Option<String>, PrefsError>> {
        Box::pin(async move {
            let conn = self.connection()?;
            conn.query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .map_err(|error| PrefsError::storage(format!("failed to read preference: {error}")))
        })
    }

    fn put<'a>(&'a self, key: &'a str, value: String) -> BoxFuture<'a, Result<(), PrefsError>> {
        Box::pin(async move {
            let conn = self.connection()?;
            conn.execute(
                "
                INSERT INTO preferences (key, value) VALUES (?1, ?2)
                ON CONFLICT(key) DO UPDATE SET value = excluded.value
                ",
                params![key, value],
            )
            .map_err(|error| PrefsError::storage(format!("failed to write preference: {error}")))?;

            Ok(())
        })
    }

    fn remove<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<bool, PrefsError>> {
        Box::pin(async move {
            let conn = self.connection()?;
            let removed = conn
                .execute("DELETE FROM preferences WHERE key = ?1", params![key])
                .map_err(|error| {
                    PrefsError::storage(format!("failed to remove preference: {error}"))
                })?;

            Ok(removed > 0)
        })
    }
}

pub(crate) fn default_sqlite_path() -> PathBuf {
    if let Some(explicit) = std::env::var_os("CPREFS_SQLITE_PATH") {
        return PathBuf::from(explicit);
    }

    if let Some(home) = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE")) {
        return PathBuf::from(home)
            .join(".chalkdust")
            .join("preferences.sqlite3");
    }

    PathBuf::from("preferences.sqlite3")
}
