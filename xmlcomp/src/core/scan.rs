// src/core/scan.rs
use crate::error::{Error, Result};
use crate::models::CompareStats;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead as _, BufReader};
use std::path::{MAIN_SEPARATOR, Path};

/// Mapping from opening-tag text to the inline value on the same line.
///
/// Keys keep their leading `<` and are truncated at the first space, so a
/// tag carrying attributes loses its trailing `>`. Later occurrences of a
/// key within one file overwrite earlier ones.
pub type TagMap = BTreeMap<String, String>;

/// Extracts the tag entries of a single document.
///
/// Files whose extension does not match `doc_type` are skipped rather than
/// treated as an error: the result is an empty mapping and the line
/// counter is untouched.
///
/// # Arguments
///
/// * `path` - The document to scan
/// * `doc_type` - File extension (without dot) of documents to scan
/// * `stats` - Counters for the current run; `lines` grows once per line read
///
/// # Returns
///
/// * `Ok(TagMap)` - The entries found, empty for skipped files
///
/// # Errors
///
/// This function may return an error if:
/// * The path or document type is empty
/// * The file cannot be opened or read
pub fn read_tags(path: &Path, doc_type: &str, stats: &mut CompareStats) -> Result<TagMap> {
    if path.as_os_str().is_empty() || doc_type.is_empty() {
        return Err(Error::EmptyPathName);
    }

    let mut tags = TagMap::new();
    if !matches_doc_type(path, doc_type) {
        return Ok(tags);
    }

    let file = File::open(path).map_err(|e| Error::file_access(path, e))?;
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| Error::file_access(path, e))?;
        stats.count_line();
        if let Some((key, value)) = parse_line(&line) {
            tags.insert(key, value);
        }
    }
    Ok(tags)
}

/// Scans one line for a `<tag>value<…` entry.
///
/// The nominal tag runs from the first `<` to the first `>`; the value
/// runs from the end of the opening tag to the last `<` on the line, which
/// is where a same-line closing tag starts. Lines are skipped when either
/// bracket is absent, when the `>` precedes the `<`, when the tag starts
/// with the path separator, or when the last `<` sits inside the opening
/// tag.
#[inline]
#[must_use]
pub fn parse_line(line: &str) -> Option<(String, String)> {
    let start = line.find('<')?;
    let end = line.find('>')?;
    if end < start {
        return None;
    }
    let tag = &line[start..=end];
    if tag.starts_with(MAIN_SEPARATOR) {
        return None;
    }
    let key = tag.split_once(' ').map_or(tag, |(head, _)| head);
    let value_end = line.rfind('<')?;
    if value_end < end {
        return None;
    }
    let value = &line[end + 1..value_end];
    Some((key.to_owned(), value.to_owned()))
}

/// The document type is the file name segment after the last `.`, compared
/// case-sensitively; a dotless name equal to the extension also matches.
fn matches_doc_type(path: &Path, doc_type: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.split('.').next_back())
        .is_some_and(|ext| ext == doc_type)
}
