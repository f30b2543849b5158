mod schema;

use anyhow::{Context, Result};
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use crate::models::Expense;

/// The single fixed key the whole collection lives under. Matches the
/// namespace the browser original used in localStorage.
pub(crate) const STORAGE_KEY: &str = "trackflow-expenses";

/// Persistence adapter: durable storage of the full expense collection
/// under one fixed key in a local SQLite key-value table. Every save
/// overwrites the entire snapshot; there are no partial writes.
pub(crate) struct Storage {
    conn: Connection,
}

impl Storage {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open storage: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .context("Failed to set storage pragmas")?;
        let mut storage = Self { conn };
        storage.migrate().context("Storage migration failed")?;
        Ok(storage)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut storage = Self { conn };
        storage.migrate()?;
        Ok(storage)
    }

    fn migrate(&mut self) -> Result<()> {
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            self.conn.execute_batch(schema::SCHEMA_V1)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            return Ok(());
        }

        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                self.conn.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        Ok(())
    }

    /// Reads the stored collection. An absent key is an empty collection,
    /// not an error; an unreadable or unparseable value is discarded with
    /// a logged warning. Callers never see a failure here.
    pub(crate) fn load(&self) -> Vec<Expense> {
        let raw = match self.read_value() {
            Ok(raw) => raw,
            Err(e) => {
                warn!("failed to read stored expenses, starting empty: {e:#}");
                return Vec::new();
            }
        };
        let Some(json) = raw else {
            return Vec::new();
        };
        match serde_json::from_str(&json) {
            Ok(expenses) => expenses,
            Err(e) => {
                warn!("stored expenses are corrupt, discarding: {e}");
                Vec::new()
            }
        }
    }

    /// Writes the full collection snapshot, replacing any prior value.
    /// Failure leaves the previous snapshot untouched and is logged,
    /// never raised: the app keeps operating in memory.
    pub(crate) fn save(&self, expenses: &[Expense]) {
        if let Err(e) = self.try_save(expenses) {
            warn!("failed to persist {} expenses: {e:#}", expenses.len());
        }
    }

    fn try_save(&self, expenses: &[Expense]) -> Result<()> {
        let json = serde_json::to_string(expenses).context("serialize expenses")?;
        self.conn
            .execute(
                "INSERT INTO kv (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = ?2",
                params![STORAGE_KEY, json],
            )
            .context("write expenses snapshot")?;
        Ok(())
    }

    fn read_value(&self) -> Result<Option<String>> {
        Ok(self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![STORAGE_KEY],
                |row| row.get(0),
            )
            .optional()?)
    }

    /// Plants a raw value under the fixed key, bypassing serialization.
    #[cfg(test)]
    pub(crate) fn put_raw(&self, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = ?2",
            params![STORAGE_KEY, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
