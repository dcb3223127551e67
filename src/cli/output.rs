//! Output formatting utilities

use crate::domain::{Entry, Session};

/// Format the session list for display, one "title (timestamp)" line per
/// session, prefixed with its id.
pub fn format_session_list(sessions: &[Session]) -> String {
    if sessions.is_empty() {
        return "No sessions yet".to_string();
    }

    let mut output = String::new();
    for session in sessions {
        output.push_str(&format!("{:>4}  {}\n", session.id, session));
    }
    output
}

/// Format the entry list for display, one
/// "description | attachment: <filename>" line per entry.
pub fn format_entry_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries in this session".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!("{:>4}  {}\n", entry.id, entry));
    }
    output
}
