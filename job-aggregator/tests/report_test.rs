mod common;

use common::{init_tracing, scored};
use job_aggregator::processing::rank;
use job_aggregator::report::{assemble_report, average_score, score_distribution, skill_trends, top_companies};
use job_aggregator::state::AggregationRun;
use job_aggregator::{AggregatorConfig, AlertKind, AlertThresholds, Result, ScoredPosting, SourceStatus};

#[test]
fn test_empty_run_report() -> Result<()> {
    init_tracing();
    let report = assemble_report(
        Vec::new(),
        AggregationRun::new(),
        &AlertThresholds::default(),
        &AggregatorConfig::default(),
    );

    assert_eq!(report.summary.total_jobs, 0);
    assert_eq!(report.summary.average_score, 0.0);
    assert_eq!(report.summary.urgent_matches, 0);
    assert!(report.jobs.is_empty());
    assert!(report.top_matches.is_empty());
    assert!(report.alerts.is_empty());
    assert!(report.analytics.top_companies.is_empty());
    let distribution = report.analytics.score_distribution;
    assert_eq!(
        (distribution.excellent, distribution.good, distribution.fair, distribution.poor),
        (0, 0, 0, 0)
    );
    Ok(())
}

#[test]
fn test_score_buckets() -> Result<()> {
    init_tracing();
    let jobs: Vec<ScoredPosting> = [12, 10, 9, 7, 6, 4, 3, -2]
        .iter()
        .enumerate()
        .map(|(i, total)| scored(&format!("Role {}", i), "Acme", *total, &[]))
        .collect();

    let distribution = score_distribution(&jobs);

    assert_eq!(distribution.excellent, 2);
    assert_eq!(distribution.good, 2);
    assert_eq!(distribution.fair, 2);
    assert_eq!(distribution.poor, 2);
    Ok(())
}

#[test]
fn test_average_rounds_to_one_decimal() -> Result<()> {
    init_tracing();
    let jobs = vec![
        scored("A", "Acme", 10, &[]),
        scored("B", "Acme", 5, &[]),
        scored("C", "Acme", 4, &[]),
    ];

    assert_eq!(average_score(&jobs), 6.3);
    Ok(())
}

#[test]
fn test_company_ties_keep_first_seen_order() -> Result<()> {
    init_tracing();
    let jobs = vec![
        scored("A", "Globex", 9, &[]),
        scored("B", "Acme", 9, &[]),
        scored("C", "Acme", 8, &[]),
        scored("D", "Globex", 8, &[]),
        scored("E", "Initech", 7, &[]),
    ];

    let companies: Vec<(String, usize)> = top_companies(&jobs, 10)
        .into_iter()
        .map(|count| (count.company, count.jobs))
        .collect();

    assert_eq!(
        companies,
        vec![
            ("Globex".to_string(), 2),
            ("Acme".to_string(), 2),
            ("Initech".to_string(), 1)
        ]
    );
    assert_eq!(top_companies(&jobs, 1).len(), 1);
    Ok(())
}

#[test]
fn test_skill_trends_count_mentions() -> Result<()> {
    init_tracing();
    let jobs = vec![
        scored("A", "Acme", 9, &["c#", "azure"]),
        scored("B", "Acme", 9, &["sql"]),
        scored("C", "Acme", 9, &["azure", "sql", "docker"]),
        scored("D", "Acme", 9, &["azure"]),
    ];

    let trends = skill_trends(&jobs, 3);
    let names: Vec<(&str, usize)> = trends.iter().map(|t| (t.skill.as_str(), t.mentions)).collect();

    assert_eq!(names, vec![("azure", 3), ("sql", 2), ("c#", 1)]);
    Ok(())
}

#[test]
fn test_lists_are_capped() -> Result<()> {
    init_tracing();
    let mut jobs: Vec<ScoredPosting> = (0..60)
        .map(|i| scored(&format!("Role {}", i), &format!("Company {}", i), i % 12, &[]))
        .collect();
    rank(&mut jobs);

    let report = assemble_report(
        jobs,
        AggregationRun::new(),
        &AlertThresholds::default(),
        &AggregatorConfig::default(),
    );

    assert_eq!(report.summary.total_jobs, 60);
    assert_eq!(report.jobs.len(), 50);
    assert_eq!(report.top_matches.len(), 10);
    assert_eq!(report.analytics.top_companies.len(), 10);
    assert!(report.top_matches.iter().all(|job| job.score.total == 11 || job.score.total == 10));
    Ok(())
}

#[test]
fn test_summary_alert_lists_first_urgent_jobs() -> Result<()> {
    init_tracing();
    let mut jobs: Vec<ScoredPosting> = (0..7)
        .map(|i| scored(&format!("Urgent {}", i), "Contoso", 10 + i, &[]))
        .collect();
    jobs.push(scored("Good", "Initech", 8, &[]));
    jobs.push(scored("Fair", "Hooli", 5, &[]));
    rank(&mut jobs);

    let report = assemble_report(
        jobs,
        AggregationRun::new(),
        &AlertThresholds::default(),
        &AggregatorConfig::default(),
    );

    assert_eq!(report.summary.urgent_matches, 7);
    assert_eq!(report.summary.high_quality_matches, 8);
    assert_eq!(report.alerts.len(), 1);
    let summary = &report.alerts[0];
    assert_eq!(summary.alert.kind, AlertKind::Summary);
    assert_eq!(summary.alert.message, "7 urgent job matches found!");
    assert_eq!(summary.alert.action, "Review urgent matches");
    assert_eq!(summary.jobs.len(), 5);
    assert_eq!(summary.jobs[0].score.total, 16);
    Ok(())
}

#[test]
fn test_source_stats_feed_distribution() -> Result<()> {
    init_tracing();
    let mut run = AggregationRun::new();
    run.record_success("linkedin", Vec::new());
    run.record_failure("indeed", "HTTP 503: Service Unavailable".to_string());

    let report = assemble_report(
        Vec::new(),
        run,
        &AlertThresholds::default(),
        &AggregatorConfig::default(),
    );

    assert_eq!(report.summary.sources_processed, 2);
    assert_eq!(report.source_stats[1].status, SourceStatus::Error);
    assert_eq!(report.analytics.source_distribution.len(), 2);
    assert_eq!(report.analytics.source_distribution[1].source, "indeed");
    assert_eq!(report.analytics.source_distribution[1].count, 0);
    assert_eq!(report.errors[0].error, "HTTP 503: Service Unavailable");

    let json = serde_json::to_value(&report)?;
    assert!(json["summary"]["executionTimeMs"].is_u64());
    assert_eq!(json["sourceStats"][1]["status"], "error");
    Ok(())
}
