//! Export session use case

use crate::error::Result;
use crate::infrastructure::{pdf, NotebookStore};
use chrono::Local;
use std::path::{Path, PathBuf};

/// Export a session and its entries to a PDF in `out_dir`.
///
/// The document is rendered fully in memory and written atomically, so a
/// failed export leaves no partial file behind. Returns the written path.
pub fn export_session(
    store: &NotebookStore,
    session_id: i64,
    out_dir: &Path,
) -> Result<PathBuf> {
    let session = store.get_session(session_id)?;
    let entries = store.list_entries(session_id)?;

    let generated_at = Local::now();
    let bytes = pdf::render_session(
        &session.title,
        &session.created_at,
        &entries,
        generated_at,
    )?;

    let path = out_dir.join(pdf::export_file_name(&session.title, generated_at));
    pdf::write_atomic(&path, &bytes)?;
    Ok(path)
}
