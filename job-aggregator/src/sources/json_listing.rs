use crate::traits::ListingParser;
use crate::types::{AggregatorError, RawPosting, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

#[derive(Debug, Serialize, Deserialize)]
struct JsonListing {
    #[serde(default)]
    title: String,
    #[serde(default)]
    company: String,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

/// Reads boards that answer with a JSON array of `{title, company, location, url}`.
pub struct JsonListingParser {
    base_url: Option<Url>,
}

impl JsonListingParser {
    pub fn new() -> Self {
        Self { base_url: None }
    }

    /// Relative posting URLs get resolved against `base_url`.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: Some(Url::parse(base_url)?),
        })
    }

    fn resolve(&self, link: &str) -> String {
        match (&self.base_url, Url::parse(link)) {
            (_, Ok(absolute)) => absolute.to_string(),
            (Some(base), Err(url::ParseError::RelativeUrlWithoutBase)) => base
                .join(link)
                .map(|joined| joined.to_string())
                .unwrap_or_else(|_| link.to_string()),
            _ => link.to_string(),
        }
    }
}

impl Default for JsonListingParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingParser for JsonListingParser {
    fn parse(&self, body: &str, search_query: &str) -> Result<Vec<RawPosting>> {
        let listings: Vec<JsonListing> = serde_json::from_str(body)
            .map_err(|e| AggregatorError::Parse(format!("expected a JSON array of postings: {}", e)))?;

        debug!("Parsed {} listings for '{}'", listings.len(), search_query);

        let extracted_at = Utc::now();
        let mut postings = Vec::with_capacity(listings.len());
        for listing in listings {
            let raw = serde_json::to_string(&listing)?;
            postings.push(RawPosting {
                url: listing.url.as_deref().map(|link| self.resolve(link)),
                title: listing.title,
                company: listing.company,
                location: listing.location,
                raw,
                extracted_at,
                search_query: Some(search_query.to_string()),
            });
        }

        Ok(postings)
    }
}
