//! Key-value settings backed by SQLite.
//!
//! Shares a database with [`SqliteStore`](crate::store::sqlite::SqliteStore),
//! so pass the same path to both.

use anyhow::{Context, Result, anyhow};
use rusqlite::Connection;
use std::sync::Mutex;

use crate::query::{DifficultyFilter, SortOption};

const FILTER_KEY: &str = "filter";
const SORT_KEY: &str = "sort";

/// Settings that outlive a session.
pub struct Config {
    conn: Mutex<Connection>,
}

impl Config {
    /// Open or create the config table in the given database.
    /// Use `":memory:"` for tests.
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path).context("failed to open config database")?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS config (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
        )
        .context("failed to create config table")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| anyhow!("config lock poisoned"))
    }

    /// Raw stored value.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT value FROM config WHERE key = ?1")?;
        let mut rows = stmt.query([key])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    /// Insert or replace a raw value.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO config (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        Ok(())
    }

    /// Last chosen display options. Missing or unreadable values fall back
    /// to the defaults.
    pub fn preferences(&self) -> Result<Preferences> {
        let filter = match self.get(FILTER_KEY)? {
            Some(raw) => raw.parse::<DifficultyFilter>().unwrap_or_else(|e| {
                tracing::warn!(value = %raw, error = %e, "ignoring stored filter");
                DifficultyFilter::default()
            }),
            None => DifficultyFilter::default(),
        };
        let sort = match self.get(SORT_KEY)? {
            Some(raw) => raw.parse::<SortOption>().unwrap_or_else(|e| {
                tracing::warn!(value = %raw, error = %e, "ignoring stored sort option");
                SortOption::default()
            }),
            None => SortOption::default(),
        };
        Ok(Preferences { filter, sort })
    }

    pub fn set_filter(&self, filter: DifficultyFilter) -> Result<()> {
        self.set(FILTER_KEY, filter.as_str())
    }

    pub fn set_sort(&self, sort: SortOption) -> Result<()> {
        self.set(SORT_KEY, sort.as_str())
    }
}

/// Display options remembered between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub filter: DifficultyFilter,
    pub sort: SortOption,
}
