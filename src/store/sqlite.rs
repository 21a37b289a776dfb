use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use rusqlite::Connection;
use std::sync::Mutex;

use super::{RecipeStore, SAVED_RECIPES_KEY};
use crate::recipe::Recipe;

/// SQLite-backed key/value storage. Saved recipes are one JSON array
/// under [`SAVED_RECIPES_KEY`].
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open or create the storage table. Use `":memory:"` for tests.
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path).context("failed to open recipe database")?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS storage (
                key        TEXT PRIMARY KEY,
                value      TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            )",
        )
        .context("failed to create storage table")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn in_memory() -> Result<Self> {
        Self::new(":memory:")
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| anyhow!("storage lock poisoned"))?;
        let mut stmt = conn.prepare("SELECT value FROM storage WHERE key = ?1")?;
        let mut rows = stmt.query([key])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| anyhow!("storage lock poisoned"))?;
        conn.execute(
            "INSERT INTO storage (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                            updated_at = datetime('now')",
            [key, value],
        )?;
        Ok(())
    }
}

#[async_trait]
impl RecipeStore for SqliteStore {
    async fn load(&self) -> Result<Vec<Recipe>> {
        match self.get(SAVED_RECIPES_KEY)? {
            Some(json) => {
                serde_json::from_str(&json).context("saved recipes are not valid JSON")
            }
            None => Ok(Vec::new()),
        }
    }

    async fn persist(&self, recipes: &[Recipe]) -> Result<()> {
        let json = serde_json::to_string(recipes)?;
        self.set(SAVED_RECIPES_KEY, &json)
            .context("failed to write saved recipes")?;
        tracing::debug!(count = recipes.len(), "persisted saved recipes");
        Ok(())
    }
}
