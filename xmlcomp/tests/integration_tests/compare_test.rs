// tests/integration_tests/compare_test.rs
use super::common::{create_test_file, setup_original_tree};
use anyhow::Result;
use std::fs;
use tempfile::TempDir;
use xmlcomp::compare;

#[test]
fn test_fresh_translation_tree_is_populated() -> Result<()> {
    let original = setup_original_tree()?;
    let translation = TempDir::new()?;

    let stats = compare(original.path(), translation.path(), "xml")?;

    assert_eq!(stats.documents, 6, "three file pairs, both sides counted");
    assert_eq!(stats.lines, 4, "only xml documents are scanned");
    assert_eq!(stats.in_need, 4, "every original tag is appended");

    let about = fs::read_to_string(translation.path().join("About.xml"))?;
    assert!(about.contains("\n<name>Example Mod</name>"));
    assert!(about.contains("\n<author>Someone</author>"));

    let keyed = fs::read_to_string(translation.path().join("Keyed/Gameplay.xml"))?;
    assert!(keyed.contains("\n<greeting>Hello</greeting>"));
    assert!(keyed.contains("\n<farewell>Goodbye</farewell>"));

    assert!(translation.path().join("Textures").is_dir());
    assert!(
        !translation.path().join("Textures/icon.png").exists(),
        "non-documents are mirrored as directories only"
    );
    Ok(())
}

#[test]
fn test_second_run_is_a_no_op() -> Result<()> {
    let original = setup_original_tree()?;
    let translation = TempDir::new()?;

    compare(original.path(), translation.path(), "xml")?;
    let before = fs::read_to_string(translation.path().join("About.xml"))?;

    let stats = compare(original.path(), translation.path(), "xml")?;
    let after = fs::read_to_string(translation.path().join("About.xml"))?;

    assert_eq!(before, after, "a reconciled tree is left untouched");
    assert_eq!(stats.in_need, 0);
    Ok(())
}

#[test]
fn test_outdated_translation_entries_are_flagged() -> Result<()> {
    let original = TempDir::new()?;
    let translation = TempDir::new()?;
    create_test_file(original.path(), "doc.xml", "<name>Alice</name>\n")?;
    create_test_file(
        translation.path(),
        "doc.xml",
        "<name>Alicia</name>\n<old>x</old>\n",
    )?;

    let stats = compare(original.path(), translation.path(), "xml")?;

    let content = fs::read_to_string(translation.path().join("doc.xml"))?;
    assert_eq!(
        content,
        "<name>Alicia</name>\n<old>x</old>\n\n[OUTDATED]<old>"
    );
    assert_eq!(stats.in_need, 1);
    Ok(())
}

#[test]
fn test_walk_aborts_on_unreadable_document() -> Result<()> {
    let original = TempDir::new()?;
    let translation = TempDir::new()?;
    create_test_file(original.path(), "doc.xml", "<name>Alice</name>\n")?;
    fs::create_dir(translation.path().join("doc.xml"))?;

    assert!(compare(original.path(), translation.path(), "xml").is_err());
    Ok(())
}
