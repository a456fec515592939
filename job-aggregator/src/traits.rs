use crate::config::SourceConfig;
use crate::types::{RawPosting, Result, SearchParams};
use async_trait::async_trait;

/// Trait for pulling job postings from one job board
#[async_trait]
pub trait Collector: Send + Sync {
    /// Label stamped on every posting from this collector (e.g. "LinkedIn")
    fn source_label(&self) -> String;

    /// Run the board's searches and return whatever postings were extracted.
    /// Any error fails the whole source for this run.
    async fn collect(&self, source: &SourceConfig, params: &SearchParams) -> Result<Vec<RawPosting>>;
}

/// Turns a fetched listing page into raw postings
pub trait ListingParser: Send + Sync {
    fn parse(&self, body: &str, search_query: &str) -> Result<Vec<RawPosting>>;
}
