use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Per-source pacing: at least `min_interval` between two requests to the
/// same source. Only the last request time is tracked, there is no burst budget.
#[derive(Debug, Default)]
pub struct RateLimiter {
    last_request: HashMap<String, Instant>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn wait(&mut self, source_id: &str, min_interval: Duration) {
        if let Some(last_request) = self.last_request.get(source_id) {
            let elapsed = last_request.elapsed();
            if elapsed < min_interval {
                let wait_time = min_interval - elapsed;
                debug!("Rate limiting {}: waiting {:?}", source_id, wait_time);
                tokio::time::sleep(wait_time).await;
            }
        }

        self.last_request.insert(source_id.to_string(), Instant::now());
    }

    pub fn last_request(&self, source_id: &str) -> Option<Instant> {
        self.last_request.get(source_id).copied()
    }
}
