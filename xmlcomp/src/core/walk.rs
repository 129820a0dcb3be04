// src/core/walk.rs
use crate::core::diff::missing_from;
use crate::core::scan::{TagMap, read_tags};
use crate::core::update::{EntryKind, append_tags};
use crate::error::{Error, Result};
use crate::models::CompareStats;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Reconciles a translation tree against its original.
///
/// Walks the original tree depth-first, mirroring directories and files
/// onto the translation side as it goes, and appends per-file
/// reconciliation results to the translation documents. The first error
/// aborts the whole walk; there is no per-file recovery.
///
/// # Arguments
///
/// * `original` - Root of the tree holding the source-language documents
/// * `translation` - Root of the tree to reconcile, created if absent
/// * `doc_type` - File extension (without dot) of documents to scan
///
/// # Returns
///
/// * `Ok(CompareStats)` - Counter snapshot for the completed run
///
/// # Errors
///
/// This function may return an error if:
/// * Either root or the document type is empty
/// * The original tree cannot be traversed
/// * A document cannot be opened, read, created, or appended to
pub fn compare(original: &Path, translation: &Path, doc_type: &str) -> Result<CompareStats> {
    if original.as_os_str().is_empty() || translation.as_os_str().is_empty() || doc_type.is_empty()
    {
        return Err(Error::EmptyPathName);
    }

    let mut stats = CompareStats::new();
    ensure_dir(translation)?;

    for entry in WalkDir::new(original).min_depth(1) {
        let entry = entry?;
        let rel = entry
            .path()
            .strip_prefix(original)
            .unwrap_or_else(|_| entry.path());
        let target = translation.join(rel);
        if entry.file_type().is_dir() {
            ensure_dir(&target)?;
        } else {
            stats.count_document_pair();
            reconcile_file(entry.path(), &target, doc_type, &mut stats)?;
        }
    }
    Ok(stats)
}

/// Runs the per-file pipeline: extract both tag sets, diff them in both
/// directions, and append the results to the translation document.
fn reconcile_file(
    original: &Path,
    translation: &Path,
    doc_type: &str,
    stats: &mut CompareStats,
) -> Result<()> {
    let original_tags = read_tags(original, doc_type, stats)?;
    let translation_tags = match read_tags(translation, doc_type, stats) {
        Ok(tags) => tags,
        // Absence is not an error: start the translation from an empty file.
        Err(err) if err.is_not_found() => {
            ensure_file(translation)?;
            TagMap::new()
        }
        Err(err) => return Err(err),
    };

    let Some(missing) = missing_from(&original_tags, &translation_tags) else {
        return Ok(());
    };
    let outdated = missing_from(&translation_tags, &original_tags).unwrap_or_default();

    append_tags(translation, &outdated, EntryKind::Outdated, doc_type, stats)?;
    append_tags(translation, &missing, EntryKind::Missing, doc_type, stats)?;
    Ok(())
}

/// One half of the walker's "ensure the mirrored path exists" contract:
/// create the directory if absent, idempotent, never destructive.
/// Created directories are private to the owner on Unix.
fn ensure_dir(path: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt as _;
        builder.mode(0o700);
    }
    match builder.create(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(err) => Err(Error::file_access(path, err)),
    }
}

/// The other half of the contract: create the file empty if absent;
/// existing content is never truncated.
fn ensure_file(path: &Path) -> Result<()> {
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map_err(|err| Error::file_access(path, err))?;
    Ok(())
}
