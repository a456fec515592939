use crate::config::{AggregatorConfig, SourceConfig};
use crate::normalize::normalize;
use crate::preferences::PreferenceModel;
use crate::processing::post_process;
use crate::registry::CollectorRegistry;
use crate::report::assemble_report;
use crate::state::AggregationRun;
use crate::types::{NormalizedPosting, Report, Result, SearchParams};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Runs every enabled source once and turns the results into a ranked report.
///
/// Holds only configuration and shared collectors; each `aggregate` call owns
/// its own accumulator and rate limiter.
pub struct JobAggregator {
    sources: Vec<SourceConfig>,
    collectors: CollectorRegistry,
    model: Arc<PreferenceModel>,
    config: AggregatorConfig,
}

impl JobAggregator {
    pub fn new(
        sources: Vec<SourceConfig>,
        collectors: CollectorRegistry,
        model: Arc<PreferenceModel>,
        config: AggregatorConfig,
    ) -> Self {
        Self {
            sources,
            collectors,
            model,
            config,
        }
    }

    /// Enabled sources, stable-sorted by ascending priority.
    pub fn enabled_sources(&self) -> Vec<&SourceConfig> {
        let mut enabled: Vec<&SourceConfig> = self.sources.iter().filter(|source| source.enabled).collect();
        enabled.sort_by_key(|source| source.priority);
        enabled
    }

    /// Never fails: per-source errors end up in `Report::errors`.
    pub async fn aggregate(&self, params: &SearchParams) -> Report {
        let mut run = AggregationRun::new();
        let enabled = self.enabled_sources();

        info!("Starting job aggregation across {} sources", enabled.len());

        for source in enabled {
            info!("Collecting from {}", source.id);
            run.rate_limiter.wait(&source.id, source.rate_limit()).await;

            match self.collect_source(source, params, &mut run).await {
                Ok(postings) => {
                    info!("{}: {} jobs collected", source.id, postings.len());
                    run.record_success(&source.id, postings);
                }
                Err(e) => {
                    error!("{} failed: {}", source.id, e);
                    run.record_failure(&source.id, e.to_string());
                }
            }
        }

        let jobs = post_process(
            std::mem::take(&mut run.postings),
            &self.model,
            self.config.minimum_quality_score,
        );

        if run.malformed_dropped > 0 {
            warn!("Dropped {} malformed postings during collection", run.malformed_dropped);
        }
        info!(
            "Aggregation complete: {} unique jobs in {}ms ({} source errors)",
            jobs.len(),
            run.elapsed_ms(),
            run.errors.len()
        );

        assemble_report(jobs, run, &self.model.thresholds, &self.config)
    }

    async fn collect_source(
        &self,
        source: &SourceConfig,
        params: &SearchParams,
        run: &mut AggregationRun,
    ) -> Result<Vec<NormalizedPosting>> {
        let collector = self.collectors.get(&source.id)?;
        let label = collector.source_label();
        let raw_postings = collector.collect(source, params).await?;

        let mut postings = Vec::with_capacity(raw_postings.len());
        for raw in raw_postings {
            match normalize(raw, &source.id, &label) {
                Ok(posting) => postings.push(posting),
                Err(e) => {
                    warn!("Skipping posting from {}: {}", source.id, e);
                    run.malformed_dropped += 1;
                }
            }
        }
        Ok(postings)
    }
}
