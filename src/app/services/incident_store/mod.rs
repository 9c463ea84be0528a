//! Persistence of incident tables and report artifacts
//!
//! Both tables are plain CSV handled with the `csv` crate and serde. Readers
//! fail fast: a missing file is [`Error::FileNotFound`](crate::Error::FileNotFound)
//! and any malformed row aborts the read before processing starts. Writers
//! replace their target atomically.

pub mod reader;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use reader::{read_enriched_incidents, read_raw_incidents};
pub use writer::{write_enriched_incidents, write_report};
