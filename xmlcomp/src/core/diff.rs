// src/core/diff.rs
use crate::core::scan::TagMap;

/// Entries of `a` whose key does not appear in `b` at all.
///
/// Only key absence matters; a key present in both with different values
/// is neither missing nor outdated. Returns `None` when the two mappings
/// are equal outright, so callers can skip the write phase entirely — an
/// empty `Some` still means the pair differs in the other direction.
#[inline]
#[must_use]
pub fn missing_from(a: &TagMap, b: &TagMap) -> Option<TagMap> {
    if a == b {
        return None;
    }
    Some(
        a.iter()
            .filter(|(key, _)| !b.contains_key(*key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect(),
    )
}
