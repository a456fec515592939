use crate::rate_limiter::RateLimiter;
use crate::types::{NormalizedPosting, SourceErrorRecord, SourceStat, SourceStatus};
use chrono::Utc;
use tokio::time::Instant;

/// Everything one `aggregate` call accumulates. Created per run, never shared.
#[derive(Debug)]
pub struct AggregationRun {
    pub started: Instant,
    pub postings: Vec<NormalizedPosting>,
    pub source_stats: Vec<SourceStat>,
    pub errors: Vec<SourceErrorRecord>,
    pub malformed_dropped: usize,
    pub rate_limiter: RateLimiter,
}

impl AggregationRun {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            postings: Vec::new(),
            source_stats: Vec::new(),
            errors: Vec::new(),
            malformed_dropped: 0,
            rate_limiter: RateLimiter::new(),
        }
    }

    pub fn record_success(&mut self, source_id: &str, postings: Vec<NormalizedPosting>) {
        self.source_stats.push(SourceStat {
            source: source_id.to_string(),
            jobs: postings.len(),
            status: SourceStatus::Success,
            error: None,
            timestamp: Utc::now(),
        });
        self.postings.extend(postings);
    }

    pub fn record_failure(&mut self, source_id: &str, message: String) {
        let timestamp = Utc::now();
        self.source_stats.push(SourceStat {
            source: source_id.to_string(),
            jobs: 0,
            status: SourceStatus::Error,
            error: Some(message.clone()),
            timestamp,
        });
        self.errors.push(SourceErrorRecord {
            source: source_id.to_string(),
            error: message,
            timestamp,
        });
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}

impl Default for AggregationRun {
    fn default() -> Self {
        Self::new()
    }
}
