// src/models.rs
mod compare_stats;

pub use compare_stats::CompareStats;
