use crate::models::Entry;
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const IN_MEMORY: &str = ":memory:";

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS entry (
    id          TEXT PRIMARY KEY NOT NULL,
    title       TEXT NOT NULL,
    description TEXT NOT NULL,
    created_at  TEXT NOT NULL,
    scheduled   TEXT NOT NULL
);
";

const SELECT_COLUMNS: &str = "SELECT id, title, description, created_at, scheduled FROM entry";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no entry with id {0}")]
    NotFound(String),
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("store task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Data-mapper over the single `entry` table.
///
/// Uniqueness of `id` and the presence of every column are enforced by the schema, so
/// a violating write surfaces as `StoreError::Sqlite`.
#[derive(Debug)]
pub struct EntryStore {
    conn: Connection,
}

impl EntryStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if path == Path::new(IN_MEMORY) {
            return Self::open_in_memory();
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Self::with_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self { conn })
    }

    /// All entries in insertion order.
    pub fn list(&self) -> Result<Vec<Entry>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_COLUMNS} ORDER BY rowid"))?;
        let rows = stmt.query_map([], entry_from_row)?;
        let entries = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    pub fn find(&self, id: &str) -> Result<Entry, StoreError> {
        self.conn
            .query_row(
                &format!("{SELECT_COLUMNS} WHERE id = ?1"),
                params![id],
                entry_from_row,
            )
            .optional()?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Inserts the entry and returns it as read back from the table.
    pub fn insert(&self, entry: &Entry) -> Result<Entry, StoreError> {
        self.conn.execute(
            "INSERT INTO entry (id, title, description, created_at, scheduled)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                entry.id,
                entry.title,
                entry.description,
                entry.created_at,
                entry.scheduled
            ],
        )?;
        self.find(&entry.id)
    }

    /// Replaces every column of the row keyed by `id`, including the id itself.
    pub fn replace(&self, id: &str, entry: &Entry) -> Result<(), StoreError> {
        let changed = self.conn.execute(
            "UPDATE entry
             SET id = ?1, title = ?2, description = ?3, created_at = ?4, scheduled = ?5
             WHERE id = ?6",
            params![
                entry.id,
                entry.title,
                entry.description,
                entry.created_at,
                entry.scheduled,
                id
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    pub fn remove(&self, id: &str) -> Result<(), StoreError> {
        let changed = self
            .conn
            .execute("DELETE FROM entry WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<Entry> {
    Ok(Entry {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        created_at: row.get(3)?,
        scheduled: row.get(4)?,
    })
}
