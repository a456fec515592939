use crate::types::{AggregatorError, NormalizedPosting, RawPosting, Result};
use uuid::Uuid;

const MIN_TITLE_LEN: usize = 3;
const DEFAULT_LOCATION: &str = "Remote";

/// Turns a collector's raw posting into the shape the core works on.
///
/// Postings without a company or with a title shorter than three characters
/// are rejected so that scoring and deduplication never see them.
pub fn normalize(raw: RawPosting, source_id: &str, source_label: &str) -> Result<NormalizedPosting> {
    let title = raw.title.trim().to_string();
    let company = raw.company.trim().to_string();

    if company.is_empty() {
        return Err(AggregatorError::MalformedPosting(format!(
            "'{}' from {} has no company",
            title, source_label
        )));
    }
    if title.chars().count() < MIN_TITLE_LEN {
        return Err(AggregatorError::MalformedPosting(format!(
            "title '{}' from {} is too short",
            title, source_label
        )));
    }

    let location = raw
        .location
        .map(|location| location.trim().to_string())
        .filter(|location| !location.is_empty())
        .unwrap_or_else(|| DEFAULT_LOCATION.to_string());

    Ok(NormalizedPosting {
        id: format!("{}_{}", source_id, Uuid::new_v4().simple()),
        title,
        company,
        location,
        url: raw.url.unwrap_or_default(),
        source: source_label.to_string(),
        extracted_at: raw.extracted_at,
    })
}
