// src/core/update.rs
use crate::core::scan::TagMap;
use crate::error::{Error, Result};
use crate::models::CompareStats;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::{MAIN_SEPARATOR, Path};

/// How an entry is rendered when appended to a translation file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// The key vanished upstream; append it behind an `[OUTDATED]` marker.
    Outdated,
    /// The key is new upstream; append a synthesized complete entry.
    Missing,
}

/// Appends reconciliation results to a translation file.
///
/// The file is only ever appended to, never rewritten. Keys shorter than
/// two characters and keys whose second character is the path separator
/// are skipped. Comment and doctype keys pass through verbatim with no
/// synthesized closing tag, whatever the kind; every other key is rendered
/// per `kind`. Each entry actually written counts toward `stats.in_need`.
///
/// # Errors
///
/// Returns [`Error::FileAccess`] when the append-mode open or a write
/// fails.
pub fn append_tags(
    path: &Path,
    tags: &TagMap,
    kind: EntryKind,
    doc_type: &str,
    stats: &mut CompareStats,
) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| Error::file_access(path, e))?;

    for (key, value) in tags {
        if key.len() < 2 {
            continue;
        }
        if key.chars().nth(1) == Some(MAIN_SEPARATOR) {
            continue;
        }
        stats.count_in_need();
        let entry = if is_comment_or_doctype(key, doc_type) {
            format!("\n{key}")
        } else {
            match kind {
                EntryKind::Outdated => format!("\n[OUTDATED]{key}"),
                EntryKind::Missing => {
                    let closing = key.strip_prefix('<').unwrap_or(key);
                    format!("\n{key}{value}</{closing}")
                }
            }
        };
        file.write_all(entry.as_bytes())
            .map_err(|e| Error::file_access(path, e))?;
    }
    Ok(())
}

/// Comment and doctype-declaration keys are copied as-is; a synthesized
/// closing tag would corrupt them.
fn is_comment_or_doctype(key: &str, doc_type: &str) -> bool {
    key.starts_with("<!-")
        || key.starts_with("<--")
        || key
            .strip_prefix("<?")
            .is_some_and(|rest| rest.starts_with(doc_type))
}
