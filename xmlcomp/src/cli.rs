// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::core::walk::compare;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding the original (source language) documents
    #[arg(short, long)]
    pub original: PathBuf,

    /// Directory holding the translation to reconcile
    #[arg(short, long)]
    pub translation: PathBuf,

    /// File extension (without dot) of the documents to scan
    #[arg(short, long, default_value = "xml")]
    pub doc_type: String,
}

/// Runs one comparison and prints the counter summary.
///
/// # Errors
///
/// Returns an error when a tree cannot be walked or a document cannot be
/// read or updated; the walk stops at the first failure.
pub fn run(args: Args) -> Result<()> {
    let stats = compare(&args.original, &args.translation, &args.doc_type).with_context(|| {
        format!(
            "Failed to reconcile {} against {}",
            args.translation.display(),
            args.original.display()
        )
    })?;

    println!("Documents compared: {}", stats.documents);
    println!("Lines scanned: {}", stats.lines);
    println!("Tags needing attention: {}", stats.in_need);
    Ok(())
}
