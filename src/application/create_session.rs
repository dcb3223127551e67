//! Create session use case

use crate::error::Result;
use crate::infrastructure::NotebookStore;

/// Create a new session with the given title.
///
/// A blank (empty or whitespace-only) title abandons the action without
/// inserting anything; `Ok(None)` is returned so the caller can stay silent.
/// Otherwise the new session id is returned.
pub fn create_session(store: &NotebookStore, title: &str) -> Result<Option<i64>> {
    let title = title.trim();
    if title.is_empty() {
        return Ok(None);
    }

    let id = store.create_session(title)?;
    Ok(Some(id))
}
