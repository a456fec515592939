pub mod types;
pub mod config;
pub mod preferences;
pub mod traits;
pub mod registry;
pub mod rate_limiter;
pub mod normalize;
pub mod dedupe;
pub mod scorer;
pub mod processing;
pub mod report;
pub mod state;
pub mod aggregator;
pub mod fetcher;
pub mod sources;

pub use types::*;
pub use config::{AggregatorConfig, SearchQuery, SourceConfig};
pub use preferences::{AlertThresholds, PreferenceModel, SkillCategory, SkillTerm};
pub use traits::{Collector, ListingParser};
pub use registry::CollectorRegistry;
pub use rate_limiter::RateLimiter;
pub use aggregator::JobAggregator;
pub use fetcher::Fetcher;
pub use sources::{HttpBoardCollector, JsonListingParser};
