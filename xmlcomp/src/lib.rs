// src/lib.rs
pub mod cli;
pub mod core;
pub mod error;
pub mod models;

pub use crate::cli::{Args, run};
pub use crate::core::diff::missing_from;
pub use crate::core::scan::{TagMap, parse_line, read_tags};
pub use crate::core::update::{EntryKind, append_tags};
pub use crate::core::walk::compare;
pub use crate::error::Error;
pub use crate::models::CompareStats;
