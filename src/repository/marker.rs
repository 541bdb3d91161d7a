// file: src/repository/marker.rs
// description: timestamp marker handling for clean working copies
// reference: README.md last-update convention

use crate::error::{Result, SyncError};
use std::fs;
use std::path::Path;

pub const MARKER_FILE: &str = "README.md";
pub const MARKER_PREFIX: &str = "Last update:";

/// Produce the new marker file content. The final line always reads
/// `Last update: <timestamp>`:
/// - no existing file: a generic two-line header followed by the marker
/// - existing file whose last line is already a marker: that line is
///   replaced in place
/// - otherwise: a blank separator line and the marker are appended
pub fn render(existing: Option<&str>, timestamp: &str) -> String {
    let marker_line = format!("{} {}", MARKER_PREFIX, timestamp);

    let Some(existing) = existing else {
        return format!("# README\n\n{}\n", marker_line);
    };

    let mut lines: Vec<&str> = existing.lines().collect();
    let replace_tail = lines
        .last()
        .is_some_and(|last| last.starts_with(MARKER_PREFIX));

    if replace_tail {
        let tail = lines.len() - 1;
        lines[tail] = &marker_line;
    } else {
        lines.push("");
        lines.push(&marker_line);
    }

    let mut content = lines.join("\n");
    content.push('\n');
    content
}

/// Rewrite the working copy's `README.md` so its final line carries the
/// given timestamp.
pub fn write_timestamp(repo: &Path, timestamp: &str) -> Result<()> {
    let marker_path = repo.join(MARKER_FILE);

    let existing = if marker_path.exists() {
        Some(
            fs::read_to_string(&marker_path).map_err(|source| SyncError::FileOperation {
                path: marker_path.clone(),
                source,
            })?,
        )
    } else {
        None
    };

    let content = render(existing.as_deref(), timestamp);

    fs::write(&marker_path, content).map_err(|source| SyncError::FileOperation {
        path: marker_path,
        source,
    })
}
