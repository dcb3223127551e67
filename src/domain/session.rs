//! Session and entry records

use std::fmt;
use std::path::Path;

/// A named, timestamped container for a group of entries.
///
/// The timestamp is stored as text in the fixed format `YYYY-MM-DD HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: i64,
    pub title: String,
    pub created_at: String,
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.created_at)
    }
}

/// A single observation within a session, with an attached file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: i64,
    pub session_id: i64,
    pub description: String,
    pub attachment_path: String,
}

impl Entry {
    /// File name component of the attachment path, or the full path if it
    /// has no file name (e.g. ends in `..`).
    pub fn attachment_name(&self) -> String {
        Path::new(&self.attachment_path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.attachment_path.clone())
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | attachment: {}",
            self.description,
            self.attachment_name()
        )
    }
}
