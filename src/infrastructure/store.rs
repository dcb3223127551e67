//! SQLite-backed notebook storage

use crate::domain::{Entry, Session};
use crate::error::{LabbookError, Result};
use chrono::Local;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Timestamp format for session creation times (minute precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Owns the connection to the notebook database.
///
/// Opening a store creates the backing file and both tables if they do not
/// exist yet; the schema setup is idempotent and runs on every open.
pub struct NotebookStore {
    conn: Connection,
}

impl NotebookStore {
    /// Open (or create) the notebook database at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = NotebookStore { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Open a throwaway in-memory store.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = NotebookStore { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS sessions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                session_id INTEGER NOT NULL,
                description TEXT NOT NULL,
                attachment_path TEXT NOT NULL,
                FOREIGN KEY (session_id) REFERENCES sessions (id)
            );

            CREATE INDEX IF NOT EXISTS idx_entries_session ON entries (session_id);",
        )?;
        Ok(())
    }

    /// Insert a session titled `title`, stamped with the current local time
    /// at minute precision. Returns the new session id.
    pub fn create_session(&self, title: &str) -> Result<i64> {
        let created_at = Local::now().format(TIMESTAMP_FORMAT).to_string();
        self.conn.execute(
            "INSERT INTO sessions (title, created_at) VALUES (?, ?)",
            params![title, created_at],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All sessions in insertion order.
    pub fn list_sessions(&self) -> Result<Vec<Session>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, created_at FROM sessions ORDER BY id")?;

        let sessions = stmt
            .query_map([], |row| {
                Ok(Session {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    created_at: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(sessions)
    }

    /// Load a single session record.
    pub fn get_session(&self, id: i64) -> Result<Session> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, created_at FROM sessions WHERE id = ?")?;

        let session = stmt
            .query_row(params![id], |row| {
                Ok(Session {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    created_at: row.get(2)?,
                })
            })
            .optional()?;

        session.ok_or(LabbookError::SessionNotFound(id))
    }

    /// Insert an entry bound to `session_id`. The attachment path is stored
    /// as given; it is not checked against the filesystem.
    pub fn create_entry(
        &self,
        session_id: i64,
        description: &str,
        attachment_path: &str,
    ) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO entries (session_id, description, attachment_path) VALUES (?, ?, ?)",
            params![session_id, description, attachment_path],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All entries belonging to `session_id`, in insertion order.
    pub fn list_entries(&self, session_id: i64) -> Result<Vec<Entry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, session_id, description, attachment_path
             FROM entries WHERE session_id = ? ORDER BY id",
        )?;

        let entries = stmt
            .query_map(params![session_id], |row| {
                Ok(Entry {
                    id: row.get(0)?,
                    session_id: row.get(1)?,
                    description: row.get(2)?,
                    attachment_path: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_file_and_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let db_path = temp.path().join("notebook.db");

        {
            let store = NotebookStore::open(&db_path).unwrap();
            store.create_session("first").unwrap();
        }
        assert!(db_path.exists());

        // Reopening must not clobber existing rows
        let store = NotebookStore::open(&db_path).unwrap();
        let sessions = store.list_sessions().unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].title, "first");
    }

    #[test]
    fn test_create_session_returns_increasing_ids() {
        let store = NotebookStore::open_in_memory().unwrap();

        let a = store.create_session("a").unwrap();
        let b = store.create_session("b").unwrap();
        assert!(b > a);
    }

    #[test]
    fn test_created_at_has_minute_precision_format() {
        let store = NotebookStore::open_in_memory().unwrap();

        let id = store.create_session("timed").unwrap();
        let session = store.get_session(id).unwrap();

        NaiveDateTime::parse_from_str(&session.created_at, TIMESTAMP_FORMAT)
            .expect("created_at should match the fixed timestamp format");
    }

    #[test]
    fn test_list_sessions_insertion_order() {
        let store = NotebookStore::open_in_memory().unwrap();

        store.create_session("one").unwrap();
        store.create_session("two").unwrap();
        store.create_session("three").unwrap();

        let titles: Vec<String> = store
            .list_sessions()
            .unwrap()
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_get_session_missing() {
        let store = NotebookStore::open_in_memory().unwrap();

        match store.get_session(99) {
            Err(LabbookError::SessionNotFound(99)) => {}
            other => panic!("Expected SessionNotFound, got {:?}", other.map(|s| s.id)),
        }
    }

    #[test]
    fn test_entries_are_scoped_to_their_session() {
        let store = NotebookStore::open_in_memory().unwrap();

        let first = store.create_session("first").unwrap();
        let second = store.create_session("second").unwrap();

        store.create_entry(first, "a1", "/tmp/a1.csv").unwrap();
        store.create_entry(second, "b1", "/tmp/b1.csv").unwrap();
        store.create_entry(first, "a2", "/tmp/a2.png").unwrap();

        let entries = store.list_entries(first).unwrap();
        let descriptions: Vec<&str> =
            entries.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["a1", "a2"]);
        assert!(entries.iter().all(|e| e.session_id == first));

        let entries = store.list_entries(second).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].description, "b1");
    }

    #[test]
    fn test_list_entries_empty_session() {
        let store = NotebookStore::open_in_memory().unwrap();
        let id = store.create_session("empty").unwrap();

        assert!(store.list_entries(id).unwrap().is_empty());
    }
}
