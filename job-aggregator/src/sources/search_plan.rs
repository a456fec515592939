use crate::config::{SearchQuery, SourceConfig};
use crate::types::{AggregatorError, Result, SearchParams};
use url::Url;

const DEFAULT_LOCATION: &str = "United States";

/// The searches to run against one board, in execution order.
///
/// Caller keywords, when present, run first as `"{keywords} remote"` ahead of
/// the board's configured searches. Equal priorities keep configured order.
pub fn plan_searches(source: &SourceConfig, params: &SearchParams) -> Vec<SearchQuery> {
    let mut searches = Vec::with_capacity(source.searches.len() + 1);

    if let Some(keywords) = params.keywords.as_deref().map(str::trim).filter(|k| !k.is_empty()) {
        searches.push(SearchQuery {
            keywords: format!("{} remote", keywords),
            priority: 0,
        });
    }
    searches.extend(source.searches.iter().cloned());

    searches.sort_by_key(|search| search.priority);
    searches
}

pub fn build_search_url(source: &SourceConfig, search: &SearchQuery, params: &SearchParams) -> Result<Url> {
    let base_url = source.base_url.as_deref().ok_or_else(|| {
        AggregatorError::Config(format!("source '{}' has no baseUrl", source.id))
    })?;

    let mut url = Url::parse(base_url)?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair(&source.query_param, &search.keywords);
        query.append_pair(
            &source.location_param,
            params.location.as_deref().unwrap_or(DEFAULT_LOCATION),
        );
        for (key, value) in &source.search_filters {
            query.append_pair(key, value);
        }
        if let Some(results_param) = &source.results_param {
            query.append_pair(results_param, &source.max_results_per_search.to_string());
        }
    }
    Ok(url)
}
