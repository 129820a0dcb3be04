// tests/integration_tests/mirroring_test.rs
use super::common::create_test_file;
use anyhow::Result;
use std::fs;
use tempfile::TempDir;
use xmlcomp::compare;

#[test]
fn test_nested_directories_are_mirrored() -> Result<()> {
    let base = TempDir::new()?;
    let original = base.path().join("original");
    let translation = base.path().join("translation");
    fs::create_dir(&original)?;
    create_test_file(&original, "A/B/file.xml", "<key>value</key>\n")?;

    let stats = compare(&original, &translation, "xml")?;

    assert!(translation.join("A").is_dir());
    assert!(translation.join("A/B").is_dir());
    assert!(translation.join("A/B/file.xml").is_file());
    assert_eq!(stats.documents, 2);
    Ok(())
}

#[test]
fn test_empty_original_tree_only_creates_the_root() -> Result<()> {
    let base = TempDir::new()?;
    let original = base.path().join("original");
    let translation = base.path().join("translation");
    fs::create_dir(&original)?;

    let stats = compare(&original, &translation, "xml")?;

    assert!(translation.is_dir(), "translation root is created");
    assert_eq!(fs::read_dir(&translation)?.count(), 0);
    assert_eq!(stats.documents, 0);
    Ok(())
}
