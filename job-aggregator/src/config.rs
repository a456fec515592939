use crate::types::{AggregatorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

/// A keyword search run against one board, lower priority runs first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub keywords: String,
    #[serde(default)]
    pub priority: u32,
}

/// Per-board settings. The HTTP fields are only read by `HttpBoardCollector`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceConfig {
    pub id: String,
    pub display_name: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub priority: u32,
    #[serde(default)]
    pub rate_limit_ms: u64,
    #[serde(default = "default_max_results")]
    pub max_results_per_search: u32,
    #[serde(default)]
    pub search_filters: BTreeMap<String, String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_query_param")]
    pub query_param: String,
    #[serde(default = "default_location_param")]
    pub location_param: String,
    #[serde(default)]
    pub results_param: Option<String>,
    #[serde(default)]
    pub searches: Vec<SearchQuery>,
}

fn default_enabled() -> bool {
    true
}

fn default_max_results() -> u32 {
    25
}

fn default_query_param() -> String {
    "q".to_string()
}

fn default_location_param() -> String {
    "l".to_string()
}

impl SourceConfig {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            enabled: true,
            priority: 0,
            rate_limit_ms: 0,
            max_results_per_search: default_max_results(),
            search_filters: BTreeMap::new(),
            base_url: None,
            query_param: default_query_param(),
            location_param: default_location_param(),
            results_param: None,
            searches: Vec::new(),
        }
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_rate_limit_ms(mut self, rate_limit_ms: u64) -> Self {
        self.rate_limit_ms = rate_limit_ms;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn rate_limit(&self) -> Duration {
        Duration::from_millis(self.rate_limit_ms)
    }
}

#[derive(Debug, Deserialize)]
struct SourceFile {
    sources: Vec<SourceConfig>,
}

pub fn parse_sources(json: &str) -> Result<Vec<SourceConfig>> {
    let file: SourceFile = serde_json::from_str(json)?;
    for source in &file.sources {
        if source.id.trim().is_empty() {
            return Err(AggregatorError::Config(format!(
                "source '{}' has an empty id",
                source.display_name
            )));
        }
    }
    Ok(file.sources)
}

pub fn load_sources(path: impl AsRef<Path>) -> Result<Vec<SourceConfig>> {
    let path = path.as_ref();
    debug!("Loading source configuration from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse_sources(&content)
}

/// Knobs for post-processing and report assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatorConfig {
    pub minimum_quality_score: i32,
    pub max_jobs: usize,
    pub top_matches: usize,
    pub top_companies: usize,
    pub top_skills: usize,
    pub summary_alert_jobs: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            minimum_quality_score: 4,
            max_jobs: 50,
            top_matches: 10,
            top_companies: 10,
            top_skills: 10,
            summary_alert_jobs: 5,
        }
    }
}

impl AggregatorConfig {
    /// Defaults overridden by `JOB_AGG_MIN_SCORE`, `JOB_AGG_MAX_JOBS` and `JOB_AGG_TOP_MATCHES`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            minimum_quality_score: env_or("JOB_AGG_MIN_SCORE", defaults.minimum_quality_score),
            max_jobs: env_or("JOB_AGG_MAX_JOBS", defaults.max_jobs),
            top_matches: env_or("JOB_AGG_TOP_MATCHES", defaults.top_matches),
            ..defaults
        }
    }

    pub fn with_minimum_quality_score(mut self, score: i32) -> Self {
        self.minimum_quality_score = score;
        self
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(value) => match value.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!("Ignoring unparsable {}={}", key, value);
                default
            }
        },
        Err(_) => default,
    }
}
