//! List sessions and entries use cases

use crate::domain::{Entry, Session};
use crate::error::Result;
use crate::infrastructure::NotebookStore;

/// All sessions, in insertion order.
pub fn list_sessions(store: &NotebookStore) -> Result<Vec<Session>> {
    store.list_sessions()
}

/// All entries of one session, in insertion order.
pub fn list_entries(store: &NotebookStore, session_id: i64) -> Result<Vec<Entry>> {
    store.list_entries(session_id)
}
