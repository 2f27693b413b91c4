// Not every test binary uses every mock.
#![allow(dead_code)]

pub mod store;
pub mod summarizer;
pub mod transcript_fetcher;
