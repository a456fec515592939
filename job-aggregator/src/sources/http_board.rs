use crate::config::SourceConfig;
use crate::fetcher::Fetcher;
use crate::sources::search_plan::{build_search_url, plan_searches};
use crate::traits::{Collector, ListingParser};
use crate::types::{AggregatorError, RawPosting, Result, SearchParams};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// Generic board collector: one GET per planned search, body handed to a parser.
pub struct HttpBoardCollector {
    label: String,
    fetcher: Arc<Fetcher>,
    parser: Arc<dyn ListingParser>,
}

impl HttpBoardCollector {
    pub fn new(label: impl Into<String>, fetcher: Arc<Fetcher>, parser: Arc<dyn ListingParser>) -> Self {
        Self {
            label: label.into(),
            fetcher,
            parser,
        }
    }
}

#[async_trait]
impl Collector for HttpBoardCollector {
    fn source_label(&self) -> String {
        self.label.clone()
    }

    async fn collect(&self, source: &SourceConfig, params: &SearchParams) -> Result<Vec<RawPosting>> {
        let searches = plan_searches(source, params);
        if searches.is_empty() {
            warn!("No searches configured for {}", source.id);
            return Ok(Vec::new());
        }

        let mut postings = Vec::new();
        for search in &searches {
            let url = build_search_url(source, search, params)?;
            let body = self
                .fetcher
                .fetch_page(url.as_str())
                .await
                .map_err(|e| AggregatorError::Collection {
                    source_id: source.id.clone(),
                    message: e.to_string(),
                })?;

            let found = self.parser.parse(&body, &search.keywords)?;
            info!("{} '{}': {} postings", self.label, search.keywords, found.len());
            postings.extend(found);
        }

        Ok(postings)
    }
}
