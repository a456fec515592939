use crate::config::AggregatorConfig;
use crate::preferences::AlertThresholds;
use crate::state::AggregationRun;
use chrono::Utc;
use interfaces::defs::{
    Alert, AlertKind, Analytics, CompanyCount, Report, RunSummary, ScoreDistribution, ScoredPosting,
    SkillCount, SourceCount, SummaryAlert,
};
use std::collections::HashMap;

/// Builds the report from the ranked list. `jobs` must already be filtered and sorted.
pub fn assemble_report(
    jobs: Vec<ScoredPosting>,
    run: AggregationRun,
    thresholds: &AlertThresholds,
    config: &AggregatorConfig,
) -> Report {
    let execution_time_ms = run.elapsed_ms();

    let urgent: Vec<&ScoredPosting> = jobs
        .iter()
        .filter(|job| job.score.total >= thresholds.urgent)
        .collect();
    let high_quality = jobs
        .iter()
        .filter(|job| job.score.total >= thresholds.high)
        .count();

    let summary = RunSummary {
        execution_time_ms,
        total_jobs: jobs.len(),
        sources_processed: run.source_stats.len(),
        urgent_matches: urgent.len(),
        high_quality_matches: high_quality,
        average_score: average_score(&jobs),
        timestamp: Utc::now(),
    };

    let analytics = Analytics {
        top_companies: top_companies(&jobs, config.top_companies),
        skill_trends: skill_trends(&jobs, config.top_skills),
        source_distribution: run
            .source_stats
            .iter()
            .map(|stat| SourceCount {
                source: stat.source.clone(),
                count: stat.jobs,
            })
            .collect(),
        score_distribution: score_distribution(&jobs),
    };

    let alerts = if urgent.is_empty() {
        Vec::new()
    } else {
        vec![SummaryAlert {
            alert: Alert {
                kind: AlertKind::Summary,
                message: format!("{} urgent job matches found!", urgent.len()),
                action: "Review urgent matches".to_string(),
            },
            jobs: urgent
                .iter()
                .take(config.summary_alert_jobs)
                .map(|job| (*job).clone())
                .collect(),
        }]
    };

    Report {
        summary,
        source_stats: run.source_stats,
        top_matches: jobs.iter().take(config.top_matches).cloned().collect(),
        jobs: jobs.into_iter().take(config.max_jobs).collect(),
        analytics,
        alerts,
        errors: run.errors,
    }
}

/// Mean total rounded to one decimal, 0 for no jobs.
pub fn average_score(jobs: &[ScoredPosting]) -> f64 {
    if jobs.is_empty() {
        return 0.0;
    }
    let sum: i64 = jobs.iter().map(|job| job.score.total as i64).sum();
    let average = sum as f64 / jobs.len() as f64;
    (average * 10.0).round() / 10.0
}

pub fn score_distribution(jobs: &[ScoredPosting]) -> ScoreDistribution {
    let mut distribution = ScoreDistribution::default();
    for job in jobs {
        match job.score.total {
            total if total >= 10 => distribution.excellent += 1,
            total if total >= 7 => distribution.good += 1,
            total if total >= 4 => distribution.fair += 1,
            _ => distribution.poor += 1,
        }
    }
    distribution
}

pub fn top_companies(jobs: &[ScoredPosting], limit: usize) -> Vec<CompanyCount> {
    ranked_counts(jobs.iter().map(|job| job.posting.company.as_str()), limit)
        .into_iter()
        .map(|(company, jobs)| CompanyCount { company, jobs })
        .collect()
}

pub fn skill_trends(jobs: &[ScoredPosting], limit: usize) -> Vec<SkillCount> {
    let skills = jobs
        .iter()
        .flat_map(|job| job.score.matched_skills.iter().map(String::as_str));
    ranked_counts(skills, limit)
        .into_iter()
        .map(|(skill, mentions)| SkillCount { skill, mentions })
        .collect()
}

// Counts by descending frequency, ties in first-seen order.
fn ranked_counts<'a>(values: impl Iterator<Item = &'a str>, limit: usize) -> Vec<(String, usize)> {
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for value in values {
        match index.get(value) {
            Some(&position) => counts[position].1 += 1,
            None => {
                index.insert(value, counts.len());
                counts.push((value.to_string(), 1));
            }
        }
    }

    // stable, so equal counts keep insertion order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}
