use crate::preferences::{PreferenceModel, SkillCategory};
use crate::types::{Alert, AlertKind, NormalizedPosting, Score, ScoreBreakdown};

/// Scores a posting against `model`.
///
/// Matching is plain substring containment over the lowercased
/// `"{title} {company} {location}"`, so a short term can hit inside an
/// unrelated word. A senior keyword suppresses the junior check entirely.
/// `total` is always the sum of the breakdown and is never clamped.
pub fn score(posting: &NormalizedPosting, model: &PreferenceModel) -> Score {
    let text = match_text(posting);
    let mut breakdown = ScoreBreakdown::default();
    let mut matched_skills: Vec<String> = Vec::new();

    for category in [SkillCategory::Core, SkillCategory::Bonus, SkillCategory::Exclude] {
        for skill in model.skills_in(category) {
            if !skill.surface_forms().any(|form| text.contains(&form)) {
                continue;
            }
            match category {
                SkillCategory::Core => breakdown.core += skill.weight,
                SkillCategory::Bonus => breakdown.bonus += skill.weight,
                SkillCategory::Exclude => breakdown.exclude += skill.weight,
            }
            if category != SkillCategory::Exclude && !matched_skills.contains(&skill.term) {
                matched_skills.push(skill.term.clone());
            }
        }
    }

    let seniority = &model.seniority;
    if contains_any(&text, &seniority.senior_keywords) {
        breakdown.seniority += seniority.senior_bonus;
    } else if contains_any(&text, &seniority.junior_keywords) {
        breakdown.seniority += seniority.junior_penalty;
    }

    if contains_any(&text, &model.remote.remote_keywords) {
        breakdown.remote += model.remote.remote_bonus;
    }

    breakdown.source += model.source_bonus_for(&posting.source);

    let total = breakdown.sum();
    let alerts = alert_for(posting, total, model).into_iter().collect();

    Score {
        total,
        breakdown,
        matched_skills,
        alerts,
    }
}

fn match_text(posting: &NormalizedPosting) -> String {
    format!("{} {} {}", posting.title, posting.company, posting.location).to_lowercase()
}

fn contains_any(text: &str, keywords: &[String]) -> bool {
    keywords
        .iter()
        .any(|keyword| text.contains(&keyword.to_lowercase()))
}

// Highest threshold first, at most one alert.
fn alert_for(posting: &NormalizedPosting, total: i32, model: &PreferenceModel) -> Option<Alert> {
    let thresholds = &model.thresholds;
    if total >= thresholds.urgent {
        Some(Alert {
            kind: AlertKind::Urgent,
            message: format!("Perfect match found: {} at {}", posting.title, posting.company),
            action: "Apply immediately".to_string(),
        })
    } else if total >= thresholds.high {
        Some(Alert {
            kind: AlertKind::High,
            message: format!("Excellent match: {} at {}", posting.title, posting.company),
            action: "Review and apply soon".to_string(),
        })
    } else {
        None
    }
}
