use anyhow::Context;
use clap::Parser;
use job_aggregator::config::load_sources;
use job_aggregator::{
    AggregatorConfig, CollectorRegistry, FetchConfig, Fetcher, HttpBoardCollector, JobAggregator,
    JsonListingParser, PreferenceModel, SearchParams,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "job-aggregator", about = "Collect, dedupe and rank job postings from several boards")]
struct Args {
    /// Source list (JSON)
    #[arg(long, env = "JOB_AGG_SOURCES", default_value = "config/sources.json")]
    sources: PathBuf,

    /// Preference model (JSON)
    #[arg(long, env = "JOB_AGG_PREFERENCES", default_value = "config/preferences.json")]
    preferences: PathBuf,

    #[arg(long)]
    keywords: Option<String>,

    #[arg(long)]
    location: Option<String>,

    #[arg(long)]
    salary_min: Option<u32>,

    /// Overrides the minimum quality score
    #[arg(long)]
    min_score: Option<i32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    info!("Starting job aggregator");

    let sources = load_sources(&args.sources)
        .with_context(|| format!("loading sources from {}", args.sources.display()))?;
    let model = PreferenceModel::from_file(&args.preferences)
        .with_context(|| format!("loading preferences from {}", args.preferences.display()))?;

    let mut config = AggregatorConfig::from_env();
    if let Some(min_score) = args.min_score {
        config = config.with_minimum_quality_score(min_score);
    }

    let fetcher = Arc::new(Fetcher::new(FetchConfig::default()).context("building HTTP client")?);
    let mut collectors = CollectorRegistry::new();
    for source in &sources {
        let Some(base_url) = source.base_url.as_deref() else {
            warn!("{} has no baseUrl, it will be reported as an unknown source", source.id);
            continue;
        };
        let parser = JsonListingParser::with_base_url(base_url)
            .with_context(|| format!("invalid baseUrl for {}", source.id))?;
        collectors.register(
            source.id.clone(),
            Arc::new(HttpBoardCollector::new(
                source.display_name.clone(),
                fetcher.clone(),
                Arc::new(parser),
            )),
        );
    }

    if collectors.is_empty() {
        warn!("No collectors registered, every source will be reported as unknown");
    } else {
        info!("{} collectors registered", collectors.len());
    }

    let params = SearchParams {
        keywords: args.keywords,
        location: args.location,
        salary_min: args.salary_min,
    };

    let aggregator = JobAggregator::new(sources, collectors, Arc::new(model), config);
    let report = aggregator.aggregate(&params).await;

    info!(
        "{} jobs ranked, {} urgent, {} source errors",
        report.summary.total_jobs,
        report.summary.urgent_matches,
        report.errors.len()
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
