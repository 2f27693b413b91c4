//! # Summary Store
//!
//! This crate owns the topic summary record produced for a YouTube video and
//! the storage abstraction used to persist it.
//!
//! The default store writes the summary as pretty-printed JSON to a single
//! file, overwriting whatever was there before.

mod datastore;
mod domain;

pub use datastore::json_file::JsonFileStore;
pub use datastore::SummaryStore;
pub use domain::TopicSummary;
