//! Key-value storage boundary: the trait the application state talks to,
//! a SQLite-backed implementation and an in-memory one.

use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use rusqlite::{Connection, OptionalExtension, params};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub trait KvStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Append a line to the internal activity log. Never fails.
    fn log(&self, _operation: &str, _target: &str, _message: &str) {}
}

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open (creating if needed) the database at `path` and its tables.
    pub fn open(path: &str) -> AppResult<Self> {
        if path != ":memory:"
            && let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let pool = if path == ":memory:" {
            DbPool::in_memory()?
        } else {
            DbPool::new(path)?
        };
        init_db(&pool.conn)?;

        Ok(Self { pool })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }
}

impl KvStore for SqliteStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.pool.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn log(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(&self.pool.conn, operation, target, message) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
}

/// Open the SQLite store, or fall back to a session-only memory store when
/// the database cannot be opened. The fallback is announced on stderr.
pub fn open_or_memory(path: &str) -> Box<dyn KvStore> {
    match SqliteStore::open(path) {
        Ok(store) => Box::new(store),
        Err(e) => {
            warning(format!(
                "History storage unavailable ({}); this session will not be saved",
                e
            ));
            Box::new(MemoryStore::new())
        }
    }
}

/// Log line captured by [`MemoryStore`]: (operation, target, message).
pub type LoggedLine = (String, String, String);

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    logged: RefCell<Vec<LoggedLine>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    pub fn logged(&self) -> Vec<LoggedLine> {
        self.logged.borrow().clone()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn log(&self, operation: &str, target: &str, message: &str) {
        self.logged.borrow_mut().push((
            operation.to_string(),
            target.to_string(),
            message.to_string(),
        ));
    }
}
