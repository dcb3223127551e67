//! Attachment preview policy
//!
//! An attachment is classified once per entry, before rendering, into a
//! preview variant based on whether its path still resolves to a file and
//! on its extension (case-insensitive). Text previews are truncated and
//! hard-wrapped by the rules below.

use std::path::{Path, PathBuf};

/// Maximum number of characters of a text attachment shown in a preview.
pub const PREVIEW_CHAR_LIMIT: usize = 1000;

/// Fixed column width for preview lines (hard break, not word-aware).
pub const PREVIEW_LINE_WIDTH: usize = 80;

/// Marker appended to a preview that was cut at [`PREVIEW_CHAR_LIMIT`].
pub const TRUNCATION_MARKER: &str = "...";

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];
const TEXT_EXTENSIONS: &[&str] = &["fasta", "fa", "csv", "txt"];

/// How an entry's attachment is previewed in an exported document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentPreview {
    /// The path no longer resolves to a file; the attachment block is
    /// skipped entirely.
    Missing,
    /// An embeddable image (`.png`, `.jpg`, `.jpeg`).
    Image(PathBuf),
    /// A text file shown as a truncated, wrapped preview
    /// (`.fasta`, `.fa`, `.csv`, `.txt`).
    Text(PathBuf),
    /// Any other extension; only a placeholder line is rendered.
    Unsupported(PathBuf),
}

impl AttachmentPreview {
    /// Classify an attachment path.
    pub fn resolve(path: &Path) -> Self {
        if !path.is_file() {
            return AttachmentPreview::Missing;
        }

        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            AttachmentPreview::Image(path.to_path_buf())
        } else if TEXT_EXTENSIONS.contains(&ext.as_str()) {
            AttachmentPreview::Text(path.to_path_buf())
        } else {
            AttachmentPreview::Unsupported(path.to_path_buf())
        }
    }
}

/// Cut `content` to the first [`PREVIEW_CHAR_LIMIT`] characters, appending
/// [`TRUNCATION_MARKER`] only when something was actually cut.
pub fn preview_text(content: &str) -> String {
    if content.chars().count() > PREVIEW_CHAR_LIMIT {
        let mut preview: String = content.chars().take(PREVIEW_CHAR_LIMIT).collect();
        preview.push_str(TRUNCATION_MARKER);
        preview
    } else {
        content.to_string()
    }
}

/// Break `text` into lines of at most `width` characters.
///
/// Existing line breaks are kept; each input line is then chunked at exactly
/// `width` characters with no regard for word boundaries. An empty input
/// line is preserved as an empty output line.
pub fn hard_wrap(text: &str, width: usize) -> Vec<String> {
    let mut wrapped = Vec::new();

    for line in text.lines() {
        if line.is_empty() {
            wrapped.push(String::new());
            continue;
        }

        let chars: Vec<char> = line.chars().collect();
        for chunk in chars.chunks(width) {
            wrapped.push(chunk.iter().collect());
        }
    }

    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("gone.png");

        assert_eq!(AttachmentPreview::resolve(&path), AttachmentPreview::Missing);
    }

    #[test]
    fn test_resolve_image_case_insensitive() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("gel.PNG");
        fs::write(&path, b"not really a png").unwrap();

        assert_eq!(
            AttachmentPreview::resolve(&path),
            AttachmentPreview::Image(path)
        );
    }

    #[test]
    fn test_resolve_text_extensions() {
        let temp = TempDir::new().unwrap();

        for name in ["a.fasta", "b.fa", "c.csv", "d.txt"] {
            let path = temp.path().join(name);
            fs::write(&path, "content").unwrap();
            assert_eq!(
                AttachmentPreview::resolve(&path),
                AttachmentPreview::Text(path)
            );
        }
    }

    #[test]
    fn test_resolve_unsupported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("run.xlsx");
        fs::write(&path, "binary").unwrap();

        assert_eq!(
            AttachmentPreview::resolve(&path),
            AttachmentPreview::Unsupported(path)
        );
    }

    #[test]
    fn test_resolve_no_extension_is_unsupported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("README");
        fs::write(&path, "text").unwrap();

        assert_eq!(
            AttachmentPreview::resolve(&path),
            AttachmentPreview::Unsupported(path)
        );
    }

    #[test]
    fn test_preview_exactly_at_limit_not_truncated() {
        let content = "x".repeat(PREVIEW_CHAR_LIMIT);
        let preview = preview_text(&content);

        assert_eq!(preview.chars().count(), PREVIEW_CHAR_LIMIT);
        assert!(!preview.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_preview_one_past_limit_truncated() {
        let content = "x".repeat(PREVIEW_CHAR_LIMIT + 1);
        let preview = preview_text(&content);

        assert!(preview.ends_with(TRUNCATION_MARKER));
        assert_eq!(
            preview.chars().count(),
            PREVIEW_CHAR_LIMIT + TRUNCATION_MARKER.chars().count()
        );
        assert_eq!(preview.matches(TRUNCATION_MARKER).count(), 1);
    }

    #[test]
    fn test_preview_counts_characters_not_bytes() {
        let content = "ż".repeat(PREVIEW_CHAR_LIMIT + 5);
        let preview = preview_text(&content);

        assert_eq!(
            preview.chars().count(),
            PREVIEW_CHAR_LIMIT + TRUNCATION_MARKER.chars().count()
        );
    }

    #[test]
    fn test_hard_wrap_chunks_long_lines() {
        let text = "a".repeat(200);
        let lines = hard_wrap(&text, PREVIEW_LINE_WIDTH);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 80);
        assert_eq!(lines[1].len(), 80);
        assert_eq!(lines[2].len(), 40);
        assert!(lines.iter().all(|l| l.chars().count() <= PREVIEW_LINE_WIDTH));
    }

    #[test]
    fn test_hard_wrap_keeps_existing_breaks() {
        let lines = hard_wrap("first\nsecond\n\nfourth", 80);
        assert_eq!(lines, vec!["first", "second", "", "fourth"]);
    }

    #[test]
    fn test_hard_wrap_is_not_word_aware() {
        let lines = hard_wrap("one two three", 5);
        assert_eq!(lines, vec!["one t", "wo th", "ree"]);
    }

    #[test]
    fn test_hard_wrap_empty_input() {
        assert!(hard_wrap("", 80).is_empty());
    }
}
