use crate::dedupe::dedupe;
use crate::preferences::PreferenceModel;
use crate::scorer::score;
use crate::types::{NormalizedPosting, ScoredPosting};
use tracing::{debug, info};

/// Dedupe, score, drop everything under `min_score`, rank best first.
pub fn post_process(
    postings: Vec<NormalizedPosting>,
    model: &PreferenceModel,
    min_score: i32,
) -> Vec<ScoredPosting> {
    info!("Post-processing {} jobs", postings.len());

    let unique = dedupe(postings);
    let scored = score_all(unique, model);
    let mut quality = filter_by_quality(scored, min_score);
    rank(&mut quality);
    quality
}

pub fn score_all(postings: Vec<NormalizedPosting>, model: &PreferenceModel) -> Vec<ScoredPosting> {
    postings
        .into_iter()
        .map(|posting| {
            let job_score = score(&posting, model);
            ScoredPosting {
                posting,
                score: job_score,
            }
        })
        .collect()
}

pub fn filter_by_quality(jobs: Vec<ScoredPosting>, min_score: i32) -> Vec<ScoredPosting> {
    let before = jobs.len();
    let kept: Vec<ScoredPosting> = jobs
        .into_iter()
        .filter(|job| job.score.total >= min_score)
        .collect();
    debug!("Quality filter (min {}): {} -> {} jobs", min_score, before, kept.len());
    kept
}

/// Descending by total. `sort_by` is stable, so ties keep collection order.
pub fn rank(jobs: &mut [ScoredPosting]) {
    jobs.sort_by(|a, b| b.score.total.cmp(&a.score.total));
}
