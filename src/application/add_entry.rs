//! Add entry use case

use crate::error::Result;
use crate::infrastructure::NotebookStore;
use std::path::Path;

/// Add an entry to an existing session.
///
/// The target session must exist (`SessionNotFound` otherwise). A blank
/// description abandons the action and returns `Ok(None)`. The attachment
/// path is recorded as given; whether the file still exists is only checked
/// at export time.
pub fn add_entry(
    store: &NotebookStore,
    session_id: i64,
    description: &str,
    attachment_path: &Path,
) -> Result<Option<i64>> {
    store.get_session(session_id)?;

    let description = description.trim();
    if description.is_empty() {
        return Ok(None);
    }

    let id = store.create_entry(session_id, description, &attachment_path.to_string_lossy())?;
    Ok(Some(id))
}
